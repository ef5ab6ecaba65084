//! Undirected weighted edge.

use super::vertex::{Position, Vertex, VertexId};

/// Stable handle of an edge inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Handle of edges that were never stored (the zero-weight self edge of a
    /// search whose source is its target).
    pub const DETACHED: EdgeId = EdgeId(0);
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected connection between two vertices.
///
/// Endpoints are stored as vertex snapshots; vertices never move, so the
/// snapshot stays accurate for as long as the vertex exists.
///
/// Equality is structural and order-independent: `(A, B) == (B, A)`. Neither
/// the handle nor the weight takes part in the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub id: EdgeId,
    pub vertex_one: Vertex,
    pub vertex_two: Vertex,
    pub distance: f64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, vertex_one: Vertex, vertex_two: Vertex, distance: f64) -> Self {
        Self {
            id,
            vertex_one,
            vertex_two,
            distance,
        }
    }

    /// Zero-weight edge from a vertex to itself, never stored in a graph.
    pub(crate) fn detached_loop(vertex: Vertex) -> Self {
        Self::new(EdgeId::DETACHED, vertex, vertex, 0.0)
    }

    /// True when this edge has `id` as one of its endpoints.
    pub fn touches(&self, id: VertexId) -> bool {
        self.vertex_one.id == id || self.vertex_two.id == id
    }

    /// True when this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertex_one.id == a && self.vertex_two.id == b)
            || (self.vertex_one.id == b && self.vertex_two.id == a)
    }

    /// The endpoint opposite `from`. Returns `vertex_one` when `from` is not
    /// `vertex_one`, matching how a walk leaves a vertex.
    pub fn other_end(&self, from: VertexId) -> Vertex {
        if self.vertex_one.id == from {
            self.vertex_two
        } else {
            self.vertex_one
        }
    }

    /// Midpoint of the segment, where a weight label is drawn.
    pub fn mid_point(&self) -> Position {
        Position {
            x: (self.vertex_one.position.x + self.vertex_two.position.x) / 2.0,
            y: (self.vertex_one.position.y + self.vertex_two.position.y) / 2.0,
        }
    }

    /// Absolute horizontal and vertical extent of the segment.
    pub fn diffs(&self) -> (f64, f64) {
        (
            (self.vertex_one.position.x - self.vertex_two.position.x).abs(),
            (self.vertex_one.position.y - self.vertex_two.position.y).abs(),
        )
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.vertex_one.id, other.vertex_two.id)
    }
}
