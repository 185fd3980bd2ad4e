//! SVG serialization with hand-drawn jitter, and the HTML page template.
//!
//! Strokes are rendered as cubic Béziers whose control points share one
//! random position along the segment and carry independent perpendicular
//! offsets; dots are four cubic arcs through jittered compass points. That
//! randomness is the "hand-drawn" signature of the output, so the renderer
//! owns a single injectable generator: seed it and the same command list
//! renders to the same bytes.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::command::{Dir, DrawCommand, Point};
use crate::consts::{
    ARROW_BACK, ARROW_SPREAD, DOT_HANDLE, DOT_JITTER_MAX, DOT_JITTER_MIN, DOT_RADIUS, STROKE_JITTER,
};

const FONT_URL: &str = "https://fonts.googleapis.com/css?family=Gloria+Hallelujah";

/// Serializes draw commands into an SVG document with sketchy geometry.
pub struct SvgRenderer {
    scale: f64,
    rng: StdRng,
}

impl SvgRenderer {
    /// Renderer with OS-seeded jitter.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale, rng: StdRng::from_os_rng() }
    }

    /// Renderer with a fixed seed, for reproducible output.
    #[must_use]
    pub fn with_seed(scale: f64, seed: u64) -> Self {
        Self { scale, rng: StdRng::seed_from_u64(seed) }
    }

    /// Render the full HTML page: header, one SVG element per command in
    /// the given (paint) order, footer.
    #[must_use]
    pub fn render_document(&mut self, commands: &[DrawCommand]) -> String {
        let (width, height) = self.canvas_size(commands);
        let header = format!(
            "<html>\n\
             <link href=\"{FONT_URL}\" rel=\"stylesheet\">\n\
             <body>\n\
             \n\
             <svg width=\"{width}\" height=\"{height}\">\n\
             <style>\n\
             \x20   .txt {{ font-family: 'Gloria Hallelujah', cursive; font-size:30; }}\n\
             \x20   .line {{ stroke:black; stroke-width:4; fill:transparent; stroke-linecap:round; }}\n\
             \x20   .dot {{ stroke:black; stroke-width:4; fill:black; }}\n\
             \x20   .fill {{ stroke:none; fill:#e8e3d9; }}\n\
             </style>\n"
        );
        let body = self.render_commands(commands);
        format!("{header}{body}</svg>\n\n</body>\n</html>\n")
    }

    /// Render the bare SVG elements for `commands`, preserving their order.
    #[must_use]
    pub fn render_commands(&mut self, commands: &[DrawCommand]) -> String {
        let mut out = String::new();
        for command in commands {
            match command {
                DrawCommand::Line { from, to } => {
                    out.push_str(&self.sketch_line(cell(*from), cell(*to)));
                }
                DrawCommand::Arrowhead { anchor, dir } => {
                    out.push_str(&self.arrowhead(*anchor, *dir));
                }
                DrawCommand::Dot { center } => {
                    out.push_str(&self.dot(*center));
                }
                DrawCommand::FilledPolygon { points } => {
                    out.push_str(&self.polygon(points));
                }
                DrawCommand::TextLabel { anchor, text } => {
                    out.push_str(&self.text(*anchor, text));
                }
            }
        }
        out
    }

    /// One jittered stroke between two cell-space points.
    ///
    /// Both control points sit at the same random fraction along the
    /// segment with independent perpendicular offsets, which is what makes
    /// long strokes bow slightly instead of wobbling.
    fn sketch_line(&mut self, (ax, ay): (f64, f64), (bx, by): (f64, f64)) -> String {
        let x1 = (ax + 0.5) * self.scale;
        let y1 = (ay + 0.5) * self.scale;
        let x2 = (bx + 0.5) * self.scale;
        let y2 = (by + 0.5) * self.scale;
        let len = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        if len == 0.0 {
            return format!("<path d=\"M{x1},{y1} L{x2},{y2}\" class=\"line\"/>\n");
        }
        let t: f64 = self.rng.random();
        let o1 = self.rng.random::<f64>() - 0.5;
        let o2 = self.rng.random::<f64>() - 0.5;
        let xm1 = x1 + (x2 - x1) * t + self.scale * (y2 - y1) * o1 * STROKE_JITTER / len;
        let ym1 = y1 + (y2 - y1) * t + self.scale * (x1 - x2) * o1 * STROKE_JITTER / len;
        let xm2 = x1 + (x2 - x1) * t + self.scale * (y2 - y1) * o2 * STROKE_JITTER / len;
        let ym2 = y1 + (y2 - y1) * t + self.scale * (x1 - x2) * o2 * STROKE_JITTER / len;
        format!("<path d=\"M{x1},{y1} C{xm1},{ym1} {xm2},{ym2} {x2},{y2}\" class=\"line\"/>\n")
    }

    /// Chevron: two jittered strokes sweeping back from the tip.
    fn arrowhead(&mut self, anchor: Point, dir: Dir) -> String {
        let (ux, uy) = dir.unit();
        let (px, py) = (-uy, ux);
        let tip = cell(anchor);
        let mut out = self.sketch_line(
            tip,
            (tip.0 - ARROW_BACK * ux - ARROW_SPREAD * px, tip.1 - ARROW_BACK * uy - ARROW_SPREAD * py),
        );
        out.push_str(&self.sketch_line(
            tip,
            (tip.0 - ARROW_BACK * ux + ARROW_SPREAD * px, tip.1 - ARROW_BACK * uy + ARROW_SPREAD * py),
        ));
        out
    }

    /// A closed path of four cubic arcs through jittered compass points.
    fn dot(&mut self, center: Point) -> String {
        let cx = (f64::from(center.x) + 0.5) * self.scale;
        let cy = (f64::from(center.y) + 0.5) * self.scale;

        let mut xs = [0.0; 4];
        let mut ys = [0.0; 4];
        let mut dxs = [0.0; 4];
        let mut dys = [0.0; 4];
        for i in 0..4 {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * FRAC_PI_2;
            let radius = DOT_RADIUS * self.rng.random_range(DOT_JITTER_MIN..DOT_JITTER_MAX);
            xs[i] = cx + angle.sin() * radius * self.scale;
            ys[i] = cy + angle.cos() * radius * self.scale;
            dxs[i] = angle.cos() * DOT_HANDLE * self.scale;
            dys[i] = -angle.sin() * DOT_HANDLE * self.scale;
        }

        let mut d = format!("M{},{} ", xs[0], ys[0]);
        for i in 0..4 {
            let j = (i + 1) % 4;
            d.push_str(&format!(
                "C{},{} {},{} {},{} ",
                xs[i] + dxs[i],
                ys[i] + dys[i],
                xs[j] - dxs[j],
                ys[j] - dys[j],
                xs[j],
                ys[j]
            ));
        }
        format!("<path d=\"{d}\" class=\"dot\"/>\n")
    }

    /// Straight closed path; painted beneath every stroke.
    fn polygon(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return String::new();
        }
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let op = if i == 0 { 'M' } else { 'L' };
            let x = (f64::from(p.x) + 0.5) * self.scale;
            let y = (f64::from(p.y) + 0.5) * self.scale;
            d.push_str(&format!("{op}{x},{y} "));
        }
        d.push('Z');
        format!("<path d=\"{d}\" class=\"fill\"/>\n")
    }

    fn text(&self, anchor: Point, text: &str) -> String {
        let x = (f64::from(anchor.x) + 0.5) * self.scale;
        let y = (f64::from(anchor.y) + 1.1) * self.scale;
        format!("<text x=\"{x}\" y=\"{y}\" class=\"txt\">{}</text>\n", escape_text(text))
    }

    /// Canvas size from the command extent plus a margin for lengthened
    /// arrow tips and descenders.
    fn canvas_size(&self, commands: &[DrawCommand]) -> (f64, f64) {
        let (mut max_x, mut max_y) = (0i32, 0i32);
        let mut grow = |p: Point, span: i32| {
            max_x = max_x.max(p.x + span);
            max_y = max_y.max(p.y);
        };
        for command in commands {
            match command {
                DrawCommand::Line { from, to } => {
                    grow(*from, 0);
                    grow(*to, 0);
                }
                DrawCommand::Arrowhead { anchor, .. } => grow(*anchor, 0),
                DrawCommand::Dot { center } => grow(*center, 0),
                DrawCommand::FilledPolygon { points } => {
                    for p in points {
                        grow(*p, 0);
                    }
                }
                DrawCommand::TextLabel { anchor, text } => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                    let span = text.chars().count() as i32;
                    grow(*anchor, span);
                }
            }
        }
        (f64::from(max_x + 2) * self.scale, f64::from(max_y + 2) * self.scale)
    }
}

fn cell(p: Point) -> (f64, f64) {
    (f64::from(p.x), f64::from(p.y))
}

/// Escape text for use inside an XML text node.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
