//! All data types for the pathgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, EdgeId};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use vertex::{Position, Vertex, VertexId};

/// Default snap threshold, in coordinate units, used by `point_exists`.
pub const DEFAULT_PROXIMITY: f64 = 10.0;

/// First id handed out by a fresh store (both vertices and edges).
pub const FIRST_ID: u64 = 1;
