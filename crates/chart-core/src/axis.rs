// File: crates/chart-core/src/axis.rs
// Summary: Value (y) axis with requested and rounded-up maximum.

use crate::error::ChartError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueAxis {
    pub label: String,
    pub min: i32,
    /// Maximum as supplied by the caller.
    pub requested_max: i32,
    /// Smallest value >= `requested_max` reachable from `min` in `delta` steps.
    pub max: i32,
    pub delta: i32,
}

impl ValueAxis {
    pub fn new(
        label: impl Into<String>,
        min: i32,
        requested_max: i32,
        delta: i32,
    ) -> Result<Self, ChartError> {
        let max = rounded_max(min, requested_max, delta)?;
        Ok(Self { label: label.into(), min, requested_max, max, delta })
    }

    /// Number of `delta` intervals between `min` and `max`.
    pub fn steps(&self) -> i64 {
        self.span() / self.delta as i64
    }

    /// `max - min`, widened so extreme bounds cannot overflow.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    /// `min, min + delta, ..., max`.
    pub fn tick_values(&self) -> impl Iterator<Item = i64> + '_ {
        (0..=self.steps()).map(move |i| self.min as i64 + i * self.delta as i64)
    }
}

/// Round `requested_max` up onto the `min + k * delta` lattice.
///
/// Fails when the range is empty or inverted, when `delta` is not positive,
/// or when the rounded value does not fit in an `i32`.
pub fn rounded_max(min: i32, requested_max: i32, delta: i32) -> Result<i32, ChartError> {
    if requested_max <= min {
        return Err(ChartError::InvalidRange { min, max: requested_max });
    }
    if delta <= 0 {
        return Err(ChartError::InvalidDelta(delta));
    }
    let range = requested_max as i64 - min as i64;
    let delta64 = delta as i64;
    let max = if range % delta64 == 0 {
        requested_max as i64
    } else {
        min as i64 + (range / delta64 + 1) * delta64
    };
    i32::try_from(max).map_err(|_| ChartError::InvalidRange { min, max: requested_max })
}
