use crate::{
    ActivityKind, WorkoutError, WorkoutSummary,
    constants::{RUNNING, SWIMMING, WALKING},
    error::{count, non_negative, positive},
    formulas,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Running {
    steps: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    pub fn new(steps: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            steps,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    pub fn distance_km(&self) -> f64 {
        formulas::movement_distance_km(self.steps, RUNNING.step_length_m)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        formulas::mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    pub fn calories(&self) -> f64 {
        formulas::running_calories(self.mean_speed_kmh(), self.weight_kg, self.duration_hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walking {
    steps: u64,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl Walking {
    pub fn new(
        steps: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            steps,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    pub fn distance_km(&self) -> f64 {
        formulas::movement_distance_km(self.steps, WALKING.step_length_m)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        formulas::mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    pub fn calories(&self) -> f64 {
        formulas::walking_calories(
            self.mean_speed_kmh(),
            self.weight_kg,
            self.height_cm,
            self.duration_hours,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swimming {
    strokes: u64,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_lengths: f64,
}

impl Swimming {
    pub fn new(
        strokes: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            strokes,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lengths: non_negative("pool_lengths_completed", pool_lengths)?,
        })
    }

    /// Distance measured by the pool, used for the summary.
    pub fn distance_km(&self) -> f64 {
        formulas::pool_distance_km(self.pool_length_m, self.pool_lengths)
    }

    /// Distance estimated from the stroke counter alone.
    pub fn stroke_distance_km(&self) -> f64 {
        formulas::movement_distance_km(self.strokes, SWIMMING.stroke_length_m)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        formulas::mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    pub fn calories(&self) -> f64 {
        formulas::swimming_calories(self.mean_speed_kmh(), self.weight_kg, self.duration_hours)
    }
}

/// Validated measurements of a single finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkoutRecord {
    Swimming(Swimming),
    Running(Running),
    Walking(Walking),
}

impl WorkoutRecord {
    /// Build a record from raw tracker fields, in tracker order.
    ///
    /// # Params
    /// - `kind` - activity the fields belong to
    /// - `fields` - `[steps, hours, kg]` for running, `[steps, hours, kg, cm]` for walking,
    ///   `[strokes, hours, kg, pool_m, pool_lengths]` for swimming
    pub fn from_fields(kind: ActivityKind, fields: &[f64]) -> Result<Self, WorkoutError> {
        let record = match (kind, fields) {
            (ActivityKind::Running, &[steps, duration, weight]) => Self::Running(Running::new(
                count("step_count", steps)?,
                duration,
                weight,
            )?),
            (ActivityKind::Walking, &[steps, duration, weight, height]) => {
                Self::Walking(Walking::new(
                    count("step_count", steps)?,
                    duration,
                    weight,
                    height,
                )?)
            }
            (ActivityKind::Swimming, &[strokes, duration, weight, pool_length, pool_lengths]) => {
                Self::Swimming(Swimming::new(
                    count("stroke_count", strokes)?,
                    duration,
                    weight,
                    pool_length,
                    pool_lengths,
                )?)
            }
            _ => {
                return Err(WorkoutError::InvalidFieldArity {
                    kind,
                    expected: kind.arity(),
                    actual: fields.len(),
                });
            }
        };

        Ok(record)
    }

    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Swimming(_) => ActivityKind::Swimming,
            Self::Running(_) => ActivityKind::Running,
            Self::Walking(_) => ActivityKind::Walking,
        }
    }

    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Swimming(this) => this.duration_hours,
            Self::Running(this) => this.duration_hours,
            Self::Walking(this) => this.duration_hours,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Swimming(this) => this.distance_km(),
            Self::Running(this) => this.distance_km(),
            Self::Walking(this) => this.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(this) => this.mean_speed_kmh(),
            Self::Running(this) => this.mean_speed_kmh(),
            Self::Walking(this) => this.mean_speed_kmh(),
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            Self::Swimming(this) => this.calories(),
            Self::Running(this) => this.calories(),
            Self::Walking(this) => this.calories(),
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary::new(
            self.kind(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories(),
        )
    }
}

impl From<Running> for WorkoutRecord {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<Walking> for WorkoutRecord {
    fn from(value: Walking) -> Self {
        Self::Walking(value)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind_from_fields() {
        let swim =
            WorkoutRecord::from_fields(ActivityKind::Swimming, &[720.0, 1.0, 80.0, 25.0, 40.0]);
        let run = WorkoutRecord::from_fields(ActivityKind::Running, &[15000.0, 1.0, 75.0]);
        let walk = WorkoutRecord::from_fields(ActivityKind::Walking, &[9000.0, 1.0, 75.0, 180.0]);

        assert_eq!(swim.map(|this| this.kind()), Ok(ActivityKind::Swimming));
        assert_eq!(run.map(|this| this.kind()), Ok(ActivityKind::Running));
        assert_eq!(walk.map(|this| this.kind()), Ok(ActivityKind::Walking));
    }

    #[test]
    fn arity_mismatch() {
        let err = WorkoutRecord::from_fields(ActivityKind::Running, &[15000.0, 1.0]).unwrap_err();

        assert_eq!(
            err,
            WorkoutError::InvalidFieldArity {
                kind: ActivityKind::Running,
                expected: 3,
                actual: 2,
            }
        );

        let err =
            WorkoutRecord::from_fields(ActivityKind::Walking, &[9000.0, 1.0, 75.0, 180.0, 1.0])
                .unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidFieldArity {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err =
            WorkoutRecord::from_fields(ActivityKind::Running, &[15000.0, 0.0, 75.0]).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::InvalidMeasurement {
                field: "duration_hours",
                ..
            }
        ));
    }

    #[test]
    fn out_of_domain_fields_are_rejected() {
        let cases: [(ActivityKind, &[f64], &str); 5] = [
            (ActivityKind::Running, &[-1.0, 1.0, 75.0], "step_count"),
            (ActivityKind::Running, &[100.0, 1.0, 0.0], "weight_kg"),
            (ActivityKind::Walking, &[100.0, 1.0, 75.0, -180.0], "height_cm"),
            (ActivityKind::Swimming, &[10.0, 1.0, 80.0, 0.0, 4.0], "pool_length_m"),
            (
                ActivityKind::Swimming,
                &[10.0, 1.0, 80.0, 25.0, -4.0],
                "pool_lengths_completed",
            ),
        ];

        for (kind, fields, expected) in cases {
            match WorkoutRecord::from_fields(kind, fields) {
                Err(WorkoutError::InvalidMeasurement { field, .. }) => assert_eq!(field, expected),
                other => panic!("{kind} {fields:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn swimming_distance_comes_from_pool() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40.0).unwrap();

        assert_eq!(swim.distance_km(), 1.0);
        assert_eq!(swim.mean_speed_kmh(), 1.0);
        assert!((swim.stroke_distance_km() - 0.9936).abs() < 1e-12);
    }

    #[test]
    fn zero_steps_is_a_valid_session() {
        let run = Running::new(0, 0.25, 70.0).unwrap();

        assert_eq!(run.distance_km(), 0.0);
        assert_eq!(run.mean_speed_kmh(), 0.0);
        assert!(run.calories() > 0.0);
    }

    #[test]
    fn summary_is_idempotent() {
        let record = WorkoutRecord::from(Walking::new(9000, 1.0, 75.0, 180.0).unwrap());

        assert_eq!(record.summary(), record.summary());
    }
}
