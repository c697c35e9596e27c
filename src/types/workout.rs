use serde::Deserialize;

/// Workout type code as sent by the sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(WorkoutCode::Swimming),
            "RUN" => Some(WorkoutCode::Running),
            "WLK" => Some(WorkoutCode::SportsWalking),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Number of positional values a package of this type carries.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
            WorkoutCode::Swimming => 5,
        }
    }
}

/// Fields shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub action: i64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Running,
            Workout::SportsWalking(_) => WorkoutCode::SportsWalking,
            Workout::Swimming(_) => WorkoutCode::Swimming,
        }
    }
}

/// One raw package: a workout code and its positional sensor values.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}
