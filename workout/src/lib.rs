//! # Workout summary
//!
//! Stateless calculator for a single finished training session.
//! A tracker sends a package made of an activity tag and a flat list of
//! readings:
//!
//! - `SWM` - `[strokes, hours, weight_kg, pool_length_m, pool_lengths]`
//! - `RUN` - `[steps, hours, weight_kg]`
//! - `WLK` - `[steps, hours, weight_kg, height_cm]`
//!
//! [`summarize`] validates the package, picks the formula set for the
//! activity and returns a [`WorkoutSummary`] whose `Display` is the message
//! shown to the user.

mod constants;
mod error;
mod formulas;
mod kind;
mod record;
mod summary;

pub use constants::*;
pub use error::WorkoutError;
pub use formulas::*;
pub use kind::ActivityKind;
pub use record::*;
pub use summary::WorkoutSummary;

/// Raw tracker package.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub tag: String,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, fields: impl IntoIterator<Item = f64>) -> Self {
        Self {
            tag: tag.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn record(&self) -> Result<WorkoutRecord, WorkoutError> {
        let kind = self.tag.parse::<ActivityKind>()?;

        WorkoutRecord::from_fields(kind, &self.fields)
    }

    pub fn summary(&self) -> Result<WorkoutSummary, WorkoutError> {
        summarize(&self.tag, &self.fields)
    }
}

/// Packages recorded by the tracker during a demo session.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Compute the summary for one package.
///
/// # Params
/// - `tag` - one of `SWM`, `RUN`, `WLK`
/// - `fields` - readings in tracker order, their count must match the activity
pub fn summarize(tag: &str, fields: &[f64]) -> Result<WorkoutSummary, WorkoutError> {
    let kind = tag.parse::<ActivityKind>()?;
    let record = WorkoutRecord::from_fields(kind, fields)?;
    let summary = record.summary();

    tracing::debug!(
        kind = %kind,
        distance_km = summary.distance_km(),
        calories = summary.calories(),
        "workout summarized"
    );

    Ok(summary)
}

/// Summarize every package independently, keeping failures in place.
pub fn summarize_all<'a>(
    packages: impl IntoIterator<Item = &'a Package>,
) -> Vec<Result<WorkoutSummary, WorkoutError>> {
    packages.into_iter().map(Package::summary).collect()
}
