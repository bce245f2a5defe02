use std::fmt;

use crate::ActivityKind;

/// Computed statistics of a single session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorkoutSummary {
    activity_label: &'static str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories: f64,
}

impl WorkoutSummary {
    pub(crate) const fn new(
        kind: ActivityKind,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            activity_label: kind.label(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    pub const fn activity_label(&self) -> &'static str {
        self.activity_label
    }

    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub const fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Same as [`ToString::to_string`].
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let summary = WorkoutSummary::new(ActivityKind::Running, 1.0, 9.75, 9.75, 797.805);

        assert_eq!(
            summary.message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn rounds_to_three_decimals() {
        let summary =
            WorkoutSummary::new(ActivityKind::Walking, 0.75, 1.23456, 1.6460799, 0.0004);

        assert_eq!(
            summary.to_string(),
            "Тип тренировки: SportsWalking; Длительность: 0.750 ч.; Дистанция: 1.235 км; \
             Ср. скорость: 1.646 км/ч; Потрачено ккал: 0.000."
        );
    }
}
