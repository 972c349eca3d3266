/// Error types for wireframe construction and transformation
use thiserror::Error;

/// Errors reported by [`Wireframe`](crate::Wireframe) operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WireframeError {
    /// An edge names a node that does not exist yet
    #[error("edge ({start}, {stop}) references a node outside 0..{node_count}")]
    NodeIndexOutOfRange {
        start: usize,
        stop: usize,
        node_count: usize,
    },

    /// Centroid requested for a wireframe without nodes
    #[error("cannot compute the center of a wireframe with no nodes")]
    EmptyWireframe,

    /// Axis token outside {x, y, z}
    #[error("invalid axis '{0}', expected one of x, y, z")]
    InvalidAxis(String),

    /// Transform matrix is not 4x4
    #[error("expected a 4x4 transform matrix, got {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize },

    /// Transform sent a node to a point at infinity
    #[error("node {index} has homogeneous w = {w} after transform")]
    DegenerateHomogeneous { index: usize, w: f64 },
}

pub type Result<T> = std::result::Result<T, WireframeError>;
