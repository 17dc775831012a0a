// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for model construction and data loading.

use thiserror::Error;

/// Failures that prevent a chart model from being built.
/// All of them are fatal: there is no partially valid chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("y-axis maximum {max} must be greater than minimum {min}")]
    InvalidRange { min: i32, max: i32 },

    #[error("y-axis delta must be positive, got {0}")]
    InvalidDelta(i32),

    #[error("line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("dataset contains no points")]
    EmptyDataset,
}

impl ChartError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput { line, reason: reason.into() }
    }
}
