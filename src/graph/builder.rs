//! Fluent API for building GraphStore instances.

use crate::types::{GraphResult, Position, Vertex, VertexId, DEFAULT_PROXIMITY, FIRST_ID};

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// Vertex ids are assigned immediately so they can be linked before `build`;
/// validation happens in `build`.
pub struct GraphBuilder {
    proximity: f64,
    vertices: Vec<Vertex>,
    edges: Vec<(VertexId, VertexId, f64)>,
    next_id: u64,
}

impl GraphBuilder {
    /// Create a new builder with the default snap threshold.
    pub fn new() -> Self {
        Self {
            proximity: DEFAULT_PROXIMITY,
            vertices: Vec::new(),
            edges: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Set the snap threshold of the built store.
    pub fn proximity(&mut self, proximity: f64) -> &mut Self {
        self.proximity = proximity;
        self
    }

    /// Add a vertex.
    pub fn vertex(&mut self, x: f64, y: f64) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex {
            id,
            position: Position::new(x, y),
        });
        id
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, vertex_one: VertexId, vertex_two: VertexId, distance: f64) -> &mut Self {
        self.edges.push((vertex_one, vertex_two, distance));
        self
    }

    /// Build the final GraphStore.
    pub fn build(self) -> GraphResult<GraphStore> {
        GraphStore::from_parts(self.vertices, self.edges, self.proximity)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
