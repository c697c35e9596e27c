//! Named constants used by the workout formulas.

/// Metres per kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered per action, in metres.
pub mod step_length {
    /// One running or walking stride.
    pub const STRIDE_M: f64 = 0.65;

    /// One swimming stroke cycle.
    pub const STROKE_M: f64 = 1.38;
}

pub mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

pub mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
