use crate::constants::{running, step_length, swimming, walking, MIN_IN_HOUR, M_IN_KM};
use crate::error::WorkoutError;
use crate::types::workout::{Running, Session, SportsWalking, Swimming, Workout};

/// Distance, speed and energy derived from one workout.
///
/// `spent_calories` has no shared formula, so every workout type must supply one.
pub trait Training {
    fn session(&self) -> &Session;

    /// Metres covered per action.
    fn step_length_m(&self) -> f64 {
        step_length::STRIDE_M
    }

    /// Display label used in summaries.
    fn label(&self) -> &'static str;

    fn distance_km(&self) -> f64 {
        self.session().action as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        checked_div(self.distance_km(), self.session().duration_h, "mean speed")
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError>;
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn label(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let s = &self.session;
        let speed = self.mean_speed_kmh()?;
        Ok(
            (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * s.weight_kg / M_IN_KM
                * s.duration_h
                * MIN_IN_HOUR,
        )
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let s = &self.session;
        let speed = self.mean_speed_kmh()?;
        // Floor division, not true division.
        let speed_term = floor_div(speed.powi(2), self.height_cm, "walking speed term")?;
        Ok((walking::WEIGHT_MULTIPLIER * s.weight_kg
            + speed_term * walking::SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
            * s.duration_h
            * MIN_IN_HOUR)
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        step_length::STROKE_M
    }

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        checked_div(
            self.pool_length_m * self.pool_laps / M_IN_KM,
            self.session.duration_h,
            "mean speed",
        )
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * self.session.weight_kg)
    }
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn label(&self) -> &'static str {
        self.as_training().label()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        self.as_training().spent_calories()
    }
}

fn checked_div(lhs: f64, rhs: f64, quantity: &'static str) -> Result<f64, WorkoutError> {
    if rhs == 0.0 {
        return Err(WorkoutError::DivisionByZero(quantity));
    }
    Ok(lhs / rhs)
}

/// Float floor division rounding toward negative infinity, computed from the
/// remainder so results agree with the reference `//` operator bit for bit.
pub(crate) fn floor_div(lhs: f64, rhs: f64, quantity: &'static str) -> Result<f64, WorkoutError> {
    if rhs == 0.0 {
        return Err(WorkoutError::DivisionByZero(quantity));
    }

    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && ((rhs < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Ok(0.0_f64.copysign(lhs / rhs));
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}
