//! Line, arrowhead and dot detection, plus extraction of leftover words.
//!
//! The detector makes one row-major pass over the grid looking for
//! horizontal and vertical runs of line-drawing characters, then a second
//! pass that groups every cell not consumed by a stroke into text labels.
//! A per-cell 2-bit usage bitmap (one flag per orientation) guarantees no
//! run is detected twice: a `+` junction is part of both a horizontal and a
//! vertical line, so the same cell may legitimately be visited once per
//! orientation.

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;

use crate::command::{Dir, DrawCommand, Point};
use crate::grid::Grid;

/// Strokes and labels found in one grid.
#[derive(Debug)]
pub struct Detection {
    /// Lines, arrowheads and dots, in discovery order.
    pub strokes: Vec<DrawCommand>,
    /// One label per word of leftover text, in row-major order.
    pub labels: Vec<DrawCommand>,
}

/// Scan `grid` for strokes, then group the remaining cells into words.
#[must_use]
pub fn detect(grid: &Grid, columns: &Grid) -> Detection {
    let mut detector = Detector::new(grid, columns);
    detector.scan_strokes();
    let labels = detector.collect_labels();
    tracing::debug!(strokes = detector.strokes.len(), labels = labels.len(), "segment detection done");
    Detection { strokes: detector.strokes, labels }
}

const HORIZONTAL: u8 = 1;
const VERTICAL: u8 = 2;

/// One 2-bit flag per grid cell recording which orientations consumed it.
/// Flags are only ever set, never cleared.
struct UsageBitmap {
    width: usize,
    bits: Vec<u8>,
}

impl UsageBitmap {
    fn new(width: usize, height: usize) -> Self {
        Self { width, bits: vec![0; width * height] }
    }

    fn mark(&mut self, x: usize, y: usize, flag: u8) {
        self.bits[y * self.width + x] |= flag;
    }

    fn is_set(&self, x: usize, y: usize, flag: u8) -> bool {
        self.bits[y * self.width + x] & flag != 0
    }

    fn is_used(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x] != 0
    }
}

struct Detector<'a> {
    grid: &'a Grid,
    columns: &'a Grid,
    used: UsageBitmap,
    strokes: Vec<DrawCommand>,
}

impl<'a> Detector<'a> {
    fn new(grid: &'a Grid, columns: &'a Grid) -> Self {
        Self {
            grid,
            columns,
            used: UsageBitmap::new(grid.width(), grid.height()),
            strokes: Vec::new(),
        }
    }

    fn scan_strokes(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                match self.grid.at(x, y) {
                    '+' | '*' => {
                        self.try_horizontal(x, y);
                        self.try_vertical(x, y);
                    }
                    '<' | '-' => {
                        self.try_horizontal(x, y);
                    }
                    '^' | '|' => {
                        self.try_vertical(x, y);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Detect a horizontal run starting at `(x, y)`.
    ///
    /// Returns `true` when the cell is already consumed (idempotent no-op)
    /// or a run was accepted; `false` when the candidate run is too short.
    /// Runs spanning fewer than three cells are rejected: `->` and `--` are
    /// not lines, `-->` and `+-+` are.
    fn try_horizontal(&mut self, x: usize, y: usize) -> bool {
        if self.used.is_set(x, y, HORIZONTAL) {
            return true;
        }
        let row = self.grid.row(y);
        let left = x;
        let mut right = left + 1;
        while right < row.len() {
            let c = row[right];
            if c != '-' && c != '+' {
                if c == '>' || c == '*' {
                    right += 1;
                }
                break;
            }
            right += 1;
        }
        right -= 1;

        if left + 1 >= right {
            return false;
        }
        // Mark before lengthening so endpoint markers are never rescanned,
        // while lengthened arrow tips stay outside the bitmap.
        for i in left..=right {
            self.used.mark(i, y, HORIZONTAL);
        }

        let head = row[left];
        let tail = row[right];
        let mut from = cell_point(left, y);
        let mut to = cell_point(right, y);
        if head == '<' {
            from.x -= 1;
            self.strokes.push(DrawCommand::Arrowhead { anchor: from, dir: Dir::Left });
        }
        if head == '*' {
            self.strokes.push(DrawCommand::Dot { center: from });
        }
        if tail == '>' {
            to.x += 1;
            self.strokes.push(DrawCommand::Arrowhead { anchor: to, dir: Dir::Right });
        }
        if tail == '*' {
            self.strokes.push(DrawCommand::Dot { center: to });
        }
        self.strokes.push(DrawCommand::Line { from, to });
        true
    }

    /// Vertical mirror of [`Detector::try_horizontal`], scanning the
    /// transposed view with the vertical usage flag.
    fn try_vertical(&mut self, x: usize, y: usize) -> bool {
        if self.used.is_set(x, y, VERTICAL) {
            return true;
        }
        let column = self.columns.row(x);
        let top = y;
        let mut bottom = top + 1;
        while bottom < column.len() {
            let c = column[bottom];
            if c != '|' && c != '+' {
                if c == 'v' || c == '*' {
                    bottom += 1;
                }
                break;
            }
            bottom += 1;
        }
        bottom -= 1;

        if top + 1 >= bottom {
            return false;
        }
        for i in top..=bottom {
            self.used.mark(x, i, VERTICAL);
        }

        let head = column[top];
        let tail = column[bottom];
        let mut from = cell_point(x, top);
        let mut to = cell_point(x, bottom);
        if head == '^' {
            from.y -= 1;
            self.strokes.push(DrawCommand::Arrowhead { anchor: from, dir: Dir::Up });
        }
        if head == '*' {
            self.strokes.push(DrawCommand::Dot { center: from });
        }
        if tail == 'v' {
            to.y += 1;
            self.strokes.push(DrawCommand::Arrowhead { anchor: to, dir: Dir::Down });
        }
        if tail == '*' {
            self.strokes.push(DrawCommand::Dot { center: to });
        }
        self.strokes.push(DrawCommand::Line { from, to });
        true
    }

    /// Group every maximal run of cells that are neither spaces nor
    /// consumed by a stroke into words, one label per word. A used cell
    /// ends a word even without an intervening space.
    fn collect_labels(&self) -> Vec<DrawCommand> {
        let mut labels = Vec::new();
        for y in 0..self.grid.height() {
            let row = self.grid.row(y);
            let mut x = 0;
            while x < row.len() {
                if row[x] == ' ' || self.used.is_used(x, y) {
                    x += 1;
                    continue;
                }
                let start = x;
                let mut text = String::new();
                while x < row.len() && row[x] != ' ' && !self.used.is_used(x, y) {
                    text.push(row[x]);
                    x += 1;
                }
                labels.push(DrawCommand::TextLabel { anchor: cell_point(start, y), text });
            }
        }
        labels
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn cell_point(x: usize, y: usize) -> Point {
    Point::new(x as i32, y as i32)
}
