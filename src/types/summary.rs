use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived statistics for one workout, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
