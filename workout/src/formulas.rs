//! Distance, speed and energy expenditure.
//!
//! Running:
//!
//! ```notrust
//! kcal = (18 * V + 1.79) * W / 1000 * T * 60
//! ```
//!
//! Sports walking:
//!
//! ```notrust
//! kcal = (0.035 * W + (Vms^2 / H) * 0.029 * W) * T * 60
//! ```
//!
//! Swimming:
//!
//! ```notrust
//! kcal = (V + 1.1) * 2 * W * T
//! ```
//!
//! Where:
//!
//! - V - mean speed in km/h
//! - Vms - mean speed converted with `0.278`
//! - W - weight in kilograms
//! - H - height in meters
//! - T - duration in hours

use crate::constants::{CM_IN_M, M_IN_KM, MIN_IN_HOUR, RUNNING, SWIMMING, WALKING};

/// Distance covered by `count` repeated movements (steps or strokes).
///
/// # Params
/// - `count` - number of steps or strokes
/// - `length_m` - length of a single movement in meters
#[inline]
pub fn movement_distance_km(count: u64, length_m: f64) -> f64 {
    count as f64 * length_m / M_IN_KM
}

/// # Params
/// - `pool_length_m` - pool length in meters
/// - `lengths` - number of pool lengths swum
#[inline]
pub fn pool_distance_km(pool_length_m: f64, lengths: f64) -> f64 {
    pool_length_m * lengths / M_IN_KM
}

#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (RUNNING.speed_multiplier * mean_speed_kmh + RUNNING.speed_shift) * weight_kg / M_IN_KM
        * duration_hours
        * MIN_IN_HOUR
}

/// # Params
/// - `height_cm` - height of person in centimeters
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let mean_speed_ms = mean_speed_kmh * WALKING.kmh_in_ms;
    let height_m = height_cm / CM_IN_M;
    let duration_min = duration_hours * MIN_IN_HOUR;

    (WALKING.weight_multiplier * weight_kg
        + (mean_speed_ms.powi(2) / height_m) * WALKING.speed_height_multiplier * weight_kg)
        * duration_min
}

pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (mean_speed_kmh + SWIMMING.speed_shift) * SWIMMING.weight_multiplier * weight_kg
        * duration_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_movement_distance() {
        assert_eq!(movement_distance_km(15000, RUNNING.step_length_m), 9.75);
        assert_eq!(movement_distance_km(9000, WALKING.step_length_m), 5.85);
        assert_eq!(movement_distance_km(0, RUNNING.step_length_m), 0.0);
    }

    #[test]
    fn test_pool_distance() {
        assert_eq!(pool_distance_km(25.0, 40.0), 1.0);
        assert_eq!(pool_distance_km(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_mean_speed() {
        assert_eq!(mean_speed_kmh(9.75, 1.0), 9.75);
        assert_eq!(mean_speed_kmh(5.0, 0.5), 10.0);
    }

    #[test]
    fn test_running_calories() {
        let actual = running_calories(9.75, 75.0, 1.0);

        assert!((actual - 797.805).abs() < EPSILON, "{actual}");
    }

    #[test]
    fn test_walking_calories() {
        let actual = walking_calories(5.85, 75.0, 180.0, 1.0);

        assert!((actual - 349.251_747_525).abs() < EPSILON, "{actual}");
    }

    #[test]
    fn test_swimming_calories() {
        let actual = swimming_calories(1.0, 80.0, 1.0);

        assert!((actual - 336.0).abs() < EPSILON, "{actual}");
    }

    #[test]
    fn test_resting_swim_still_burns() {
        // zero speed leaves only the shift term
        let actual = swimming_calories(0.0, 80.0, 0.5);

        assert!((actual - 88.0).abs() < EPSILON, "{actual}");
    }
}
