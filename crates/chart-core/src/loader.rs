// File: crates/chart-core/src/loader.rs
// Summary: Parser for the six-line chart description format.
//
// Format:
//   1: x-axis description
//   2: y-axis description
//   3: whitespace-separated "x,y" integer pairs
//   4: y minimum
//   5: requested y maximum
//   6: y delta
// Anything after line 6 is ignored.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::chart::ChartModel;
use crate::error::ChartError;
use crate::series::Point;

const LINE_X_LABEL: usize = 1;
const LINE_Y_LABEL: usize = 2;
const LINE_POINTS: usize = 3;
const LINE_Y_MIN: usize = 4;
const LINE_Y_MAX: usize = 5;
const LINE_Y_DELTA: usize = 6;

/// Parse chart text into a validated model. Rejects empty datasets.
pub fn parse_chart(text: &str) -> Result<ChartModel, ChartError> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let line = |n: usize| {
        lines
            .get(n - 1)
            .copied()
            .ok_or_else(|| ChartError::malformed(n, "missing line"))
    };

    let x_label = line(LINE_X_LABEL)?.trim();
    let y_label = line(LINE_Y_LABEL)?.trim();
    let points = parse_points(line(LINE_POINTS)?, LINE_POINTS)?;
    if points.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let y_min = parse_int(line(LINE_Y_MIN)?, LINE_Y_MIN)?;
    let y_max = parse_int(line(LINE_Y_MAX)?, LINE_Y_MAX)?;
    let y_delta = parse_int(line(LINE_Y_DELTA)?, LINE_Y_DELTA)?;

    debug!(points = points.len(), y_min, y_max, y_delta, "parsed chart data");
    ChartModel::new(&points, x_label, y_label, y_min, y_max, y_delta)
}

/// Read and parse a chart file.
pub fn load_chart(path: impl AsRef<Path>) -> anyhow::Result<ChartModel> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let model = parse_chart(&text)?;
    Ok(model)
}

fn parse_points(line: &str, line_no: usize) -> Result<Vec<Point>, ChartError> {
    line.split_whitespace()
        .map(|token| parse_pair(token, line_no))
        .collect()
}

/// `"x,y"`; trailing empty fields are dropped, so `"1,2,"` is accepted.
fn parse_pair(token: &str, line_no: usize) -> Result<Point, ChartError> {
    let mut parts: Vec<&str> = token.split(',').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    match parts.as_slice() {
        [x, y] => {
            let x = parse_int(x, line_no)?;
            let y = parse_int(y, line_no)?;
            Ok(Point::new(x, y))
        }
        _ => Err(ChartError::malformed(line_no, format!("expected \"x,y\" pair, got {token:?}"))),
    }
}

fn parse_int(raw: &str, line_no: usize) -> Result<i32, ChartError> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .map_err(|e| ChartError::malformed(line_no, format!("invalid integer {raw:?}: {e}")))
}
