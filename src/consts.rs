//! Shared numeric constants for grid-to-SVG conversion.

// ── Output scaling ──────────────────────────────────────────────

/// Default edge length of one grid cell in SVG units.
pub const DEFAULT_SCALE: f64 = 20.0;

// ── Hand-drawn jitter ───────────────────────────────────────────

/// Maximum perpendicular offset of a stroke's control points, in cells.
pub const STROKE_JITTER: f64 = 0.5;

/// Lower bound of the dot radius jitter factor.
pub const DOT_JITTER_MIN: f64 = 0.8;

/// Upper bound (exclusive) of the dot radius jitter factor.
pub const DOT_JITTER_MAX: f64 = 1.2;

// ── Marker geometry ─────────────────────────────────────────────

/// Nominal dot radius, in cells.
pub const DOT_RADIUS: f64 = 0.4;

/// Tangential control-handle length for the four dot arcs, in cells.
pub const DOT_HANDLE: f64 = 0.25;

/// Distance the arrowhead arms sweep back from the tip, in cells.
pub const ARROW_BACK: f64 = 0.7;

/// Half-width of the arrowhead chevron, in cells.
pub const ARROW_SPREAD: f64 = 0.5;
