use thiserror::Error;

use crate::ActivityKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown activity kind: {tag:?}")]
    UnknownActivityKind { tag: String },

    #[error("Invalid field count for {kind}: expected {expected}, got {actual}")]
    InvalidFieldArity {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid measurement `{field}` = {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl WorkoutError {
    pub(crate) const fn measurement(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidMeasurement {
            field,
            value,
            reason,
        }
    }
}

/// Value must be finite and strictly above zero.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(WorkoutError::measurement(
            field,
            value,
            "must be a finite number greater than zero",
        )),
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    match value.is_finite() && value >= 0.0 {
        // `-0.0` passes the comparison, adding `0.0` clears its sign
        true => Ok(value + 0.0),
        false => Err(WorkoutError::measurement(
            field,
            value,
            "must be a finite non-negative number",
        )),
    }
}

/// Counters (steps, strokes) come in as raw numbers and must be whole.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    let value = non_negative(field, value)?;

    if value.fract() != 0.0 {
        return Err(WorkoutError::measurement(
            field,
            value,
            "must be a whole number",
        ));
    }

    // `u64::MAX as f64` rounds up to 2^64, which is already out of range
    match value < u64::MAX as f64 {
        true => Ok(value as u64),
        false => Err(WorkoutError::measurement(
            field,
            value,
            "must fit into a 64-bit counter",
        )),
    }
}
