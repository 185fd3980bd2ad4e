//! Union-find coloring of enclosed diagram areas.
//!
//! Every lattice corner — the (height+1) × (width+1) grid of points between
//! cells, offset half a cell up-left from each cell center — receives a
//! region color. Line-art characters act as separators: a `+` seals the
//! corner it decides into a brand-new color, `|` and `-` propagate color
//! along their wall and connect the corner pair on their open side, and
//! every other character (spaces, text, arrowheads, dots) is fully
//! permeable. One row-major pass decides each cell's bottom-right corner
//! from the three already-decided corners around it; a union-find over
//! color ids merges areas that turn out to be connected.
//!
//! After the pass the outer border is canonicalized (all right-edge corners
//! unified, all bottom-edge corners unified) and ids are renumbered densely
//! in first-allocation order, so id 0 is always the exterior.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use crate::command::Point;
use crate::grid::Grid;

/// Flat owner array keyed by color id.
///
/// Invariant: repeated owner lookup from any id terminates at a fixed
/// point. Union keeps the numerically smaller id as owner; find compresses
/// paths, keeping lookups near O(1) amortized.
struct UnionFind {
    owner: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { owner: Vec::new() }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn alloc(&mut self) -> u32 {
        let id = self.owner.len() as u32;
        self.owner.push(id);
        id
    }

    fn len(&self) -> usize {
        self.owner.len()
    }

    fn find(&mut self, id: u32) -> u32 {
        let mut root = id;
        while self.owner[root as usize] != root {
            root = self.owner[root as usize];
        }
        let mut cur = id;
        while self.owner[cur as usize] != root {
            let next = self.owner[cur as usize];
            self.owner[cur as usize] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.owner[hi as usize] = lo;
    }
}

/// Dense region coloring of every lattice corner.
pub struct Coloring {
    corner_width: usize,
    corner_height: usize,
    colors: Vec<u32>,
    /// Number of distinct regions, the exterior included.
    pub regions: usize,
    /// First corner holding each dense id, in row-major corner order.
    /// Contour tracing starts its boundary walks here.
    pub first_corners: Vec<Point>,
}

impl Coloring {
    /// Corners per row (grid width + 1).
    #[must_use]
    pub fn corner_width(&self) -> usize {
        self.corner_width
    }

    /// Corner rows (grid height + 1).
    #[must_use]
    pub fn corner_height(&self) -> usize {
        self.corner_height
    }

    /// Dense color id of the corner at `(x, y)`.
    #[must_use]
    pub fn at(&self, x: usize, y: usize) -> u32 {
        self.colors[y * self.corner_width + x]
    }
}

/// Color every lattice corner of `grid` and renumber densely.
#[must_use]
pub fn color(grid: &Grid) -> Coloring {
    let corner_width = grid.width() + 1;
    let corner_height = grid.height() + 1;
    let mut uf = UnionFind::new();

    // The exterior seed fills the top corner row and left corner column;
    // everything else is overwritten by the scan below.
    let exterior = uf.alloc();
    let mut colors = vec![exterior; corner_width * corner_height];
    let idx = |x: usize, y: usize| y * corner_width + x;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let above = colors[idx(x + 1, y)];
            let left = colors[idx(x, y + 1)];
            let above_left = colors[idx(x, y)];
            let corner = match grid.at(x, y) {
                '+' => uf.alloc(),
                '|' => {
                    uf.union(left, above_left);
                    above
                }
                '-' => {
                    uf.union(above, above_left);
                    left
                }
                _ => {
                    uf.union(above, left);
                    uf.union(above, above_left);
                    above
                }
            };
            colors[idx(x + 1, y + 1)] = corner;
        }
    }

    // Canonicalize the exterior: the whole right edge is one color and the
    // whole bottom edge is one color, regardless of incidental unions along
    // the border. Both meet at the bottom-right corner and reach the seed.
    for y in 0..corner_height {
        uf.union(colors[idx(corner_width - 1, y)], colors[idx(corner_width - 1, 0)]);
    }
    for x in 0..corner_width {
        uf.union(colors[idx(x, corner_height - 1)], colors[idx(0, corner_height - 1)]);
    }

    // Renumber: dense ids in first-encounter order over allocated ids. The
    // exterior seed is id 0 and the smallest id always wins a union, so the
    // class holding the top-left corner resolves to dense id 0.
    let mut dense = vec![u32::MAX; uf.len()];
    let mut next = 0u32;
    for id in 0..uf.len() {
        #[allow(clippy::cast_possible_truncation)]
        let root = uf.find(id as u32) as usize;
        if dense[root] == u32::MAX {
            dense[root] = next;
            next += 1;
        }
    }
    for c in &mut colors {
        dense_rewrite(c, &mut uf, &dense);
    }

    let regions = next as usize;
    let mut first_corners = vec![Point::new(0, 0); regions];
    let mut seen = vec![false; regions];
    for y in 0..corner_height {
        for x in 0..corner_width {
            let id = colors[idx(x, y)] as usize;
            if !seen[id] {
                seen[id] = true;
                first_corners[id] = corner_point(x, y);
            }
        }
    }

    tracing::debug!(regions, "region coloring done");
    Coloring { corner_width, corner_height, colors, regions, first_corners }
}

fn dense_rewrite(color: &mut u32, uf: &mut UnionFind, dense: &[u32]) {
    *color = dense[uf.find(*color) as usize];
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn corner_point(x: usize, y: usize) -> Point {
    Point::new(x as i32, y as i32)
}
