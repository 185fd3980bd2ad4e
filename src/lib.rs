//! ASCII-art diagrams rendered as hand-drawn vector sketches.
//!
//! The input is a plain-text diagram built from `+ - | < > ^ v *` and free
//! text. The core pipeline analyses the character grid and produces an
//! ordered list of [`command::DrawCommand`] values in grid space; the SVG
//! renderer then serializes that list with randomized "sketchy" geometry so
//! the result looks drawn by hand rather than plotted.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`grid`] | Padding raw text into a rectangular grid and its transpose |
//! | [`segment`] | Line/arrowhead/dot run detection and word extraction |
//! | [`region`] | Union-find coloring of enclosed areas at lattice corners |
//! | [`contour`] | Tracing each colored region into a fillable polygon |
//! | [`pipeline`] | Wiring the passes together in paint order |
//! | [`command`] | Draw command and point value types |
//! | [`svg`] | Jittered SVG serialization and the HTML document template |
//! | [`consts`] | Shared numeric constants (scale, jitter amounts, etc.) |

pub mod command;
pub mod consts;
pub mod contour;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod region;
pub mod segment;
pub mod svg;

pub use command::{Dir, DrawCommand, Point};
pub use error::ConvertError;
pub use pipeline::convert;
pub use svg::SvgRenderer;
