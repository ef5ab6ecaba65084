//! pathgraph: weighted graph editor core.
//!
//! Holds vertices placed on a plane and undirected weighted edges between them,
//! supports the edits an interactive editor needs (adding, snapping to and
//! removing vertices and edges), and searches for the shortest path between
//! two vertices by repeated distance relaxation.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod render;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{Config, GraphConfig, RenderConfig};
pub use format::{GraphDocument, GraphReader, GraphWriter};
pub use graph::{find_path, GraphBuilder, GraphStore, PathResult};
pub use render::{GraphRenderer, SvgRenderer};
pub use types::{
    Edge, EdgeId, ErrorKind, GraphError, GraphResult, Position, Vertex, VertexId,
    DEFAULT_PROXIMITY,
};
