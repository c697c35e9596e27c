#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Unknown workout code: {0}")]
    UnknownCode(String),
    #[error("Wrong argument count for {code} (expected {expected}, got {actual})")]
    Arity {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Action count must be a whole number, got {0}")]
    InvalidActionCount(f64),
    #[error("Division by zero while computing {0}")]
    DivisionByZero(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Workout(#[from] WorkoutError),
    #[error("Failed to read packages file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid packages file: {0}")]
    Json(#[from] serde_json::Error),
}
