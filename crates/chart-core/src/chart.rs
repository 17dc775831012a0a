// File: crates/chart-core/src/chart.rs
// Summary: Immutable chart model: sorted points plus axis descriptions and y-axis range.

use crate::axis::ValueAxis;
use crate::error::ChartError;
use crate::series::{sorted_by_x, Point};

/// Validated dataset for one render session.
///
/// Fields are private so that every instance went through [`ChartModel::new`]:
/// points are sorted by x and `y_axis.max` sits on the `min + k * delta` lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartModel {
    points: Vec<Point>,
    x_label: String,
    y_axis: ValueAxis,
}

impl ChartModel {
    /// Build a model from raw input. The caller's slice is left untouched;
    /// the model keeps its own sorted copy.
    pub fn new(
        points: &[Point],
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        y_min: i32,
        y_max_requested: i32,
        y_delta: i32,
    ) -> Result<Self, ChartError> {
        let y_axis = ValueAxis::new(y_label, y_min, y_max_requested, y_delta)?;
        Ok(Self { points: sorted_by_x(points), x_label: x_label.into(), y_axis })
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn x_label(&self) -> &str { &self.x_label }
    pub fn y_label(&self) -> &str { &self.y_axis.label }
    pub fn y_axis(&self) -> &ValueAxis { &self.y_axis }
    pub fn y_min(&self) -> i32 { self.y_axis.min }
    /// Effective (rounded-up) maximum.
    pub fn y_max(&self) -> i32 { self.y_axis.max }
    pub fn y_max_requested(&self) -> i32 { self.y_axis.requested_max }
    pub fn y_delta(&self) -> i32 { self.y_axis.delta }
}
