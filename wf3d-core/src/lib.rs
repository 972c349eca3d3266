/// WF3D Core Library - Wireframe geometry and transformation logic
///
/// This library provides the wireframe model (nodes joined by edges) and the
/// homogeneous transform matrices used to move it around.

pub mod error;
pub mod geometry;
pub mod transform;
pub mod wireframe;

// Re-export commonly used types
pub use error::{Result, WireframeError};
pub use geometry::{Axis, Edge, Node};
pub use transform::Transform;
pub use wireframe::Wireframe;
