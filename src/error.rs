//! Conversion errors.

/// Internal invariant violations surfaced by the core pipeline.
///
/// Well-formed input never produces these; they indicate a bug in the
/// region coloring rather than a user error, and are reported instead of
/// emitting a malformed polygon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The contour walk found no neighboring corner with the region's color.
    #[error("contour walk stuck at corner ({x}, {y}): no neighbor holds region color {region}")]
    ContourStuck { x: i32, y: i32, region: u32 },
    /// The contour walk failed to return to its start within the step bound.
    #[error("contour walk for region {region} did not close within {limit} steps")]
    ContourRunaway { region: u32, limit: usize },
}
