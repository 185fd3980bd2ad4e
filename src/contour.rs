//! Boundary tracing of colored regions into fillable polygons.
//!
//! Each non-exterior region is walked once along its boundary corners and
//! turned into a closed polygon with right-angled vertices that follow the
//! drawn walls rather than the raw lattice path. The direction and pivot
//! tables are literal lookups on purpose; deriving them geometrically
//! invites sign errors that are hard to spot visually.
//!
//! Regions with holes are not supported: a doubly-connected region
//! produces an incomplete trace of its outer boundary only.

#[cfg(test)]
#[path = "contour_test.rs"]
mod contour_test;

use crate::command::{DrawCommand, Point};
use crate::error::ConvertError;
use crate::region::Coloring;

/// Step vectors indexed by heading: up, right, down, left.
const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Vertex offsets indexed by heading. A corner at `(x, y)` sits half a
/// cell down-right of the cell anchor `(x - 1, y - 1)`, so these offsets
/// land every vertex exactly on a cell center, where the walls are drawn.
const PIVOTS: [(i32, i32); 4] = [(-1, -1), (0, -1), (0, 0), (-1, 0)];

/// Relative headings probed at each step, in priority order:
/// turn-left, straight, turn-right, reverse.
const PROBES: [usize; 4] = [3, 0, 1, 2];

/// Trace every non-exterior region into a `FilledPolygon`, each exactly
/// once, triggered in row-major corner scan order.
///
/// # Errors
///
/// Returns [`ConvertError`] when a walk cannot find a matching neighbor or
/// fails to close, both of which indicate an invariant violation in the
/// region coloring.
pub fn trace_all(coloring: &Coloring) -> Result<Vec<DrawCommand>, ConvertError> {
    let mut polygons = Vec::new();
    let mut traced = vec![false; coloring.regions];
    traced[0] = true;
    for y in 0..coloring.corner_height() {
        for x in 0..coloring.corner_width() {
            let id = coloring.at(x, y);
            if !traced[id as usize] {
                traced[id as usize] = true;
                let points = trace(coloring, id, coloring.first_corners[id as usize])?;
                polygons.push(DrawCommand::FilledPolygon { points });
            }
        }
    }
    Ok(polygons)
}

/// Walk the boundary of one region starting at `start` with heading up,
/// until the walk returns to `start` with that same heading.
fn trace(coloring: &Coloring, region: u32, start: Point) -> Result<Vec<Point>, ConvertError> {
    let mut points = Vec::new();
    let (mut x, mut y) = (start.x, start.y);
    let mut heading = 0usize; // up
    let limit = 4 * coloring.corner_width() * coloring.corner_height() + 4;
    let mut steps = 0;

    loop {
        steps += 1;
        if steps > limit {
            return Err(ConvertError::ContourRunaway { region, limit });
        }

        let mut advanced = false;
        for &offset in &PROBES {
            let next = (heading + offset) % 4;
            let (dx, dy) = DIRS[next];
            let (nx, ny) = (x + dx, y + dy);
            if color_at(coloring, nx, ny) != Some(region) {
                continue;
            }
            match offset {
                // Straight: the boundary continues, no vertex.
                0 => {}
                // Turn right: pivot around the wall on the old heading's side.
                1 => points.push(pivot(x, y, heading)),
                // Reverse out of a dead end: two vertices wrap the spike tip.
                2 => {
                    points.push(pivot(x, y, heading));
                    points.push(pivot(x, y, (heading + 1) % 4));
                }
                // Turn left: pivot indexed by the new heading.
                _ => points.push(pivot(x, y, next)),
            }
            x = nx;
            y = ny;
            heading = next;
            advanced = true;
            break;
        }
        if !advanced {
            return Err(ConvertError::ContourStuck { x, y, region });
        }
        if x == start.x && y == start.y && heading == 0 {
            break;
        }
    }
    Ok(points)
}

fn pivot(x: i32, y: i32, heading: usize) -> Point {
    let (px, py) = PIVOTS[heading];
    Point::new(x + px, y + py)
}

fn color_at(coloring: &Coloring, x: i32, y: i32) -> Option<u32> {
    if x < 0 || y < 0 {
        return None;
    }
    #[allow(clippy::cast_sign_loss)]
    let (x, y) = (x as usize, y as usize);
    if x >= coloring.corner_width() || y >= coloring.corner_height() {
        return None;
    }
    Some(coloring.at(x, y))
}
