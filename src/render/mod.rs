//! Rendering contract between the graph store and a drawing surface.

pub mod svg;

pub use svg::SvgRenderer;

use crate::types::{Edge, Vertex};

/// A drawing surface that can show vertices and edges.
///
/// The store notifies an attached renderer after every mutation. Returning
/// `false` from a draw call reports that nothing was drawn; the store logs it
/// and carries on.
pub trait GraphRenderer {
    fn draw_vertex(&mut self, vertex: &Vertex) -> bool;
    fn draw_edge(&mut self, edge: &Edge) -> bool;
    fn clear(&mut self);
}

/// Clear `renderer` and draw every vertex and edge given.
pub fn draw_all<'a>(
    renderer: &mut dyn GraphRenderer,
    vertices: impl IntoIterator<Item = &'a Vertex>,
    edges: impl IntoIterator<Item = &'a Edge>,
) {
    renderer.clear();
    for edge in edges {
        if !renderer.draw_edge(edge) {
            log::warn!("Renderer failed to draw edge {}", edge.id);
        }
    }
    for vertex in vertices {
        if !renderer.draw_vertex(vertex) {
            log::warn!("Renderer failed to draw vertex {}", vertex.id);
        }
    }
}
