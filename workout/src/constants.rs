//! Calibration tables, one per activity kind.

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningConstants {
    /// Length of a single step in meters
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingConstants {
    /// Length of a single step in meters
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
    /// km/h to m/s conversion as calibrated for the formula (not `1 / 3.6`)
    pub kmh_in_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingConstants {
    /// Distance covered by a single stroke in meters
    pub stroke_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

pub const RUNNING: RunningConstants = RunningConstants {
    step_length_m: 0.65,
    speed_multiplier: 18.0,
    speed_shift: 1.79,
};

pub const WALKING: WalkingConstants = WalkingConstants {
    step_length_m: 0.65,
    weight_multiplier: 0.035,
    speed_height_multiplier: 0.029,
    kmh_in_ms: 0.278,
};

pub const SWIMMING: SwimmingConstants = SwimmingConstants {
    stroke_length_m: 1.38,
    speed_shift: 1.1,
    weight_multiplier: 2.0,
};
