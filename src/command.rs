//! Draw command and point value types.
//!
//! Commands are immutable once created and carry only grid-space
//! coordinates; scaling to output units is the renderer's concern. Every
//! point is anchored at a cell center: the renderer maps `p` to
//! `(p + 0.5) * scale` uniformly, polygon vertices included.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use serde::{Deserialize, Serialize};

/// A point in grid space (cell-anchored integer coordinates).
///
/// Coordinates may be negative: an arrowhead on the first column extends
/// one cell past the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned direction an arrowhead points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Unit vector for this direction, y growing downward.
    #[must_use]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Right => (1.0, 0.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
        }
    }
}

/// One primitive of the output drawing.
///
/// The pipeline emits commands in paint order: filled polygons first
/// (beneath everything), then lines, arrowheads and dots, then text labels
/// on top. Renderers must preserve that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Straight stroke between two cell centers.
    Line { from: Point, to: Point },
    /// Chevron arrowhead with its tip at `anchor`, pointing along `dir`.
    Arrowhead { anchor: Point, dir: Dir },
    /// Filled dot centered on a cell.
    Dot { center: Point },
    /// Closed polygon filling one enclosed region of the diagram.
    FilledPolygon { points: Vec<Point> },
    /// A word of free text anchored at its first cell.
    TextLabel { anchor: Point, text: String },
}
