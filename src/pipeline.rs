//! The conversion pipeline: text in, ordered draw commands out.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::command::DrawCommand;
use crate::error::ConvertError;
use crate::grid::Grid;
use crate::{contour, region, segment};

/// Convert an ASCII-art diagram into draw commands in paint order:
/// filled polygons first, then lines/arrowheads/dots, then text labels.
///
/// Every structure is created fresh for this call; nothing is shared
/// across conversions.
///
/// # Errors
///
/// Returns [`ConvertError`] when contour tracing detects an invariant
/// violation in the region coloring.
pub fn convert(text: &str) -> Result<Vec<DrawCommand>, ConvertError> {
    let grid = Grid::pad(text);
    let columns = grid.transpose();
    tracing::debug!(width = grid.width(), height = grid.height(), "padded grid");

    let detection = segment::detect(&grid, &columns);
    let coloring = region::color(&grid);
    let mut commands = contour::trace_all(&coloring)?;
    commands.extend(detection.strokes);
    commands.extend(detection.labels);
    Ok(commands)
}
