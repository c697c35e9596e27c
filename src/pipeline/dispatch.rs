use crate::error::WorkoutError;
use crate::types::workout::{Running, Session, SportsWalking, Swimming, Workout, WorkoutCode};

/// Builds a workout from a package code and its positional sensor values.
///
/// Values are unpacked in declaration order: action count, duration (h),
/// weight (kg), then the type-specific fields.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let workout_code =
        WorkoutCode::from_code(code).ok_or_else(|| WorkoutError::UnknownCode(code.to_string()))?;

    let expected = workout_code.arity();
    if data.len() != expected {
        return Err(WorkoutError::Arity {
            code: workout_code.as_str(),
            expected,
            actual: data.len(),
        });
    }

    let session = Session {
        action: action_count(data[0])?,
        duration_h: data[1],
        weight_kg: data[2],
    };

    let workout = match workout_code {
        WorkoutCode::Running => Workout::Running(Running { session }),
        WorkoutCode::SportsWalking => Workout::SportsWalking(SportsWalking {
            session,
            height_cm: data[3],
        }),
        WorkoutCode::Swimming => Workout::Swimming(Swimming {
            session,
            pool_length_m: data[3],
            pool_laps: data[4],
        }),
    };

    tracing::debug!("Read {} package with {} values", workout.code().as_str(), data.len());

    Ok(workout)
}

// Negative counts pass through; only non-integers are refused.
fn action_count(value: f64) -> Result<i64, WorkoutError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= i64::MAX as f64 {
        return Err(WorkoutError::InvalidActionCount(value));
    }
    Ok(value as i64)
}
