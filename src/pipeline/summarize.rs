use crate::error::WorkoutError;
use crate::pipeline::calculate::Training;
use crate::types::summary::InfoMessage;

/// Computes distance, mean speed and calories, in that order, into a summary.
pub fn build_summary<T: Training + ?Sized>(training: &T) -> Result<InfoMessage, WorkoutError> {
    let distance = training.distance_km();
    let speed = training.mean_speed_kmh()?;
    let calories = training.spent_calories()?;

    tracing::debug!(
        "{}: {:.3} km at {:.3} km/h, {:.3} kcal",
        training.label(),
        distance,
        speed,
        calories
    );

    Ok(InfoMessage {
        training_type: training.label().to_string(),
        duration: training.session().duration_h,
        distance,
        speed,
        calories,
    })
}
