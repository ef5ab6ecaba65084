//! JSON graph documents.
//!
//! A document holds the snap threshold, the vertices with their ids, and the
//! edges as `(vertex_one, vertex_two, distance)` records. The cached path is
//! not stored.

pub mod reader;
pub mod writer;

use serde::{Deserialize, Serialize};

use crate::types::{Vertex, VertexId, DEFAULT_PROXIMITY};

pub use reader::GraphReader;
pub use writer::GraphWriter;

/// On-disk form of a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_proximity")]
    pub proximity: f64,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// An edge as stored in a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub vertex_one: VertexId,
    pub vertex_two: VertexId,
    pub distance: f64,
}

fn default_proximity() -> f64 {
    DEFAULT_PROXIMITY
}
