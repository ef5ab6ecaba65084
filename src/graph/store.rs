//! Core graph structure: vertices, undirected edges and the last computed path.

use std::collections::HashSet;

use crate::config::GraphConfig;
use crate::render::{self, GraphRenderer};
use crate::types::{
    Edge, EdgeId, GraphError, GraphResult, Position, Vertex, VertexId, DEFAULT_PROXIMITY, FIRST_ID,
};

use super::search::{self, PathResult};

/// The editable graph: owns every vertex and edge, hands out ids, and keeps
/// the most recent search result until a structural change invalidates it.
pub struct GraphStore {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Most recently computed path.
    path: Vec<Edge>,
    /// Total weight of `path`.
    path_distance: f64,
    /// Next vertex ID to hand out.
    next_vertex_id: u64,
    /// Next edge ID to hand out.
    next_edge_id: u64,
    /// Snap threshold for `point_exists`.
    proximity: f64,
    /// Optional drawing surface notified after mutations.
    renderer: Option<Box<dyn GraphRenderer>>,
}

impl GraphStore {
    /// Create a new empty graph with the default snap threshold.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            path: Vec::new(),
            path_distance: 0.0,
            next_vertex_id: FIRST_ID,
            next_edge_id: FIRST_ID,
            proximity: DEFAULT_PROXIMITY,
            renderer: None,
        }
    }

    /// Create a new empty graph with a specific snap threshold.
    pub fn with_proximity(proximity: f64) -> GraphResult<Self> {
        validate_proximity(proximity)?;
        let mut graph = Self::new();
        graph.proximity = proximity;
        Ok(graph)
    }

    /// Create a new empty graph configured from `config`.
    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        Self::with_proximity(config.proximity)
    }

    /// Create from pre-existing data (used by the document reader).
    ///
    /// Edge endpoints are resolved against `vertices`; ids continue after the
    /// largest one present.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        edges: Vec<(VertexId, VertexId, f64)>,
        proximity: f64,
    ) -> GraphResult<Self> {
        let mut graph = Self::with_proximity(proximity)?;

        let mut seen = HashSet::with_capacity(vertices.len());
        for vertex in &vertices {
            vertex.position.validate()?;
            if !seen.insert(vertex.id) {
                return Err(GraphError::DuplicateVertex(vertex.id));
            }
        }
        if let Some(largest) = vertices.iter().map(|v| v.id.0).max() {
            graph.next_vertex_id = largest
                .checked_add(1)
                .ok_or(GraphError::IdSpaceExhausted("vertex"))?
                .max(FIRST_ID);
        }
        graph.vertices = vertices;

        for (one, two, distance) in edges {
            graph.insert_edge(one, two, distance)?;
        }

        log::debug!(
            "Rebuilt graph with {} vertices and {} edges",
            graph.vertices.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Snap threshold used by `point_exists`.
    pub fn proximity(&self) -> f64 {
        self.proximity
    }

    /// Get a vertex by ID.
    pub fn get_vertex(&self, id: VertexId) -> GraphResult<Vertex> {
        self.vertices
            .iter()
            .find(|v| v.id == id)
            .copied()
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Get all vertices (immutable slice).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get all edges (immutable slice).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to a vertex, in insertion order.
    pub fn edges_of(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// The most recently computed path; empty when none is cached.
    pub fn path(&self) -> &[Edge] {
        &self.path
    }

    /// Total weight of the cached path.
    pub fn path_distance(&self) -> f64 {
        self.path_distance
    }

    /// Add a vertex at `position`, returns the created vertex.
    pub fn add_vertex(&mut self, position: impl Into<Position>) -> GraphResult<Vertex> {
        let position = position.into();
        position.validate()?;

        let vertex = Vertex {
            id: VertexId(self.next_vertex_id),
            position,
        };
        self.next_vertex_id = self
            .next_vertex_id
            .checked_add(1)
            .ok_or(GraphError::IdSpaceExhausted("vertex"))?;
        self.vertices.push(vertex);

        log::debug!(
            "Added vertex {} at ({}, {})",
            vertex.id,
            position.x,
            position.y
        );
        if let Some(renderer) = self.renderer.as_mut() {
            if !renderer.draw_vertex(&vertex) {
                log::warn!("Renderer failed to draw vertex {}", vertex.id);
            }
        }
        Ok(vertex)
    }

    /// Add an undirected edge between two existing vertices.
    pub fn add_edge(
        &mut self,
        vertex_one: VertexId,
        vertex_two: VertexId,
        distance: f64,
    ) -> GraphResult<Edge> {
        let edge = self.insert_edge(vertex_one, vertex_two, distance)?;
        self.invalidate_path();

        log::debug!(
            "Added edge {} between {} and {} (distance {})",
            edge.id,
            vertex_one,
            vertex_two,
            distance
        );
        if let Some(renderer) = self.renderer.as_mut() {
            if !renderer.draw_edge(&edge) {
                log::warn!("Renderer failed to draw edge {}", edge.id);
            }
        }
        Ok(edge)
    }

    /// Remove every stored edge equal (undirected) to `edge`.
    /// Returns how many were removed.
    pub fn remove_edge(&mut self, edge: &Edge) -> usize {
        let initial_len = self.edges.len();
        self.edges.retain(|e| e != edge);
        let removed = initial_len - self.edges.len();
        self.invalidate_path();

        log::debug!(
            "Removed {} edge(s) between {} and {}",
            removed,
            edge.vertex_one.id,
            edge.vertex_two.id
        );
        self.redraw();
        removed
    }

    /// Remove the edges joining `a` and `b`, if any.
    pub fn remove_edge_between(&mut self, a: VertexId, b: VertexId) -> usize {
        match self.edge_exists(a, b) {
            Some(edge) => self.remove_edge(&edge),
            None => 0,
        }
    }

    /// Remove a vertex and all its edges.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        let pos = self
            .vertices
            .iter()
            .position(|v| v.id == id)
            .ok_or(GraphError::VertexNotFound(id))?;

        let removed = self.vertices.remove(pos);
        self.edges.retain(|e| !e.touches(id));
        self.invalidate_path();

        log::debug!("Removed vertex {} and its edges", id);
        self.redraw();
        Ok(removed)
    }

    /// First vertex within the snap threshold of `position` on both axes.
    pub fn point_exists(&self, position: impl Into<Position>) -> Option<Vertex> {
        let position = position.into();
        self.vertices
            .iter()
            .find(|v| v.position.is_near(&position, self.proximity))
            .copied()
    }

    /// First edge joining the two vertices, in either order.
    pub fn edge_exists(&self, vertex_one: VertexId, vertex_two: VertexId) -> Option<Edge> {
        self.edges
            .iter()
            .find(|e| e.connects(vertex_one, vertex_two))
            .copied()
    }

    /// Search for the shortest path between two vertices and cache it.
    pub fn traverse(&mut self, source: VertexId, target: VertexId) -> GraphResult<PathResult> {
        let result = search::find_path(self, source, target)?;
        self.path = result.edges.clone();
        self.path_distance = result.distance;
        Ok(result)
    }

    /// Attach a renderer and draw the current graph on it.
    pub fn attach_renderer(&mut self, renderer: Box<dyn GraphRenderer>) {
        self.renderer = Some(renderer);
        self.redraw();
    }

    /// Detach and return the current renderer.
    pub fn detach_renderer(&mut self) -> Option<Box<dyn GraphRenderer>> {
        self.renderer.take()
    }

    /// Clear the attached renderer and draw everything again.
    pub fn redraw(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            render::draw_all(&mut **renderer, &self.vertices, &self.edges);
        }
    }

    /// Draw the whole graph on a renderer that is not attached to the store.
    pub fn render_to(&self, renderer: &mut dyn GraphRenderer) {
        render::draw_all(renderer, &self.vertices, &self.edges);
    }

    fn insert_edge(
        &mut self,
        vertex_one: VertexId,
        vertex_two: VertexId,
        distance: f64,
    ) -> GraphResult<Edge> {
        let one = self.get_vertex(vertex_one)?;
        let two = self.get_vertex(vertex_two)?;

        if one.id == two.id {
            return Err(GraphError::SelfEdge(one.id));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(GraphError::InvalidWeight(distance));
        }

        let edge = Edge::new(EdgeId(self.next_edge_id), one, two, distance);
        self.next_edge_id = self
            .next_edge_id
            .checked_add(1)
            .ok_or(GraphError::IdSpaceExhausted("edge"))?;
        self.edges.push(edge);
        Ok(edge)
    }

    fn invalidate_path(&mut self) {
        self.path.clear();
        self.path_distance = 0.0;
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_proximity(proximity: f64) -> GraphResult<()> {
    if proximity.is_finite() && proximity >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidProximity(proximity))
    }
}
