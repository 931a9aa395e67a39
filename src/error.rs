//! Error types for sightline operations.

use thiserror::Error;

/// Errors reported when validating polygon input at the API boundary.
///
/// The geometric pipeline itself never fails: missing intersections, empty
/// visibility regions, and rejected guard candidates are all modeled as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SightlineError {
    /// A polygon needs at least three vertices to bound an area.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Two consecutive vertices coincide, producing a near-zero-length edge
    /// that destabilizes the edge intersection math.
    #[error("degenerate edge: vertices {index} and {next} coincide")]
    DegenerateEdge {
        /// Index of the first vertex of the offending edge.
        index: usize,
        /// Index of the second vertex (wraps to 0 for the closing edge).
        next: usize,
    },
}
