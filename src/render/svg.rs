//! SVG output for graphs.

use std::fmt::Write as _;

use crate::config::RenderConfig;
use crate::types::{Edge, EdgeId, Vertex};

use super::GraphRenderer;

/// Gap between an edge and its weight label.
const LABEL_OFFSET: f64 = 6.0;

/// Renderer that accumulates SVG elements in memory.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    config: RenderConfig,
    highlighted: Vec<EdgeId>,
    edges: Vec<String>,
    labels: Vec<String>,
    vertices: Vec<String>,
}

impl SvgRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            highlighted: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Draw the given edges in the path colour from now on.
    pub fn highlight(&mut self, path: &[Edge]) {
        self.highlighted = path.iter().map(|e| e.id).collect();
    }

    /// Number of vertices and edges drawn since the last clear.
    pub fn element_count(&self) -> usize {
        self.edges.len() + self.vertices.len()
    }

    /// Assemble the SVG document. Edges sit beneath labels and vertices.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.config.width, self.config.height
        );
        for element in self
            .edges
            .iter()
            .chain(self.labels.iter())
            .chain(self.vertices.iter())
        {
            let _ = writeln!(out, "  {}", element);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl GraphRenderer for SvgRenderer {
    fn draw_vertex(&mut self, vertex: &Vertex) -> bool {
        self.vertices.push(format!(
            r#"<circle id="v{}" cx="{}" cy="{}" r="{}" fill="black"/>"#,
            vertex.id, vertex.position.x, vertex.position.y, self.config.vertex_radius
        ));
        true
    }

    fn draw_edge(&mut self, edge: &Edge) -> bool {
        if edge.id == EdgeId::DETACHED {
            return false;
        }
        let colour = if self.highlighted.contains(&edge.id) {
            "red"
        } else {
            "black"
        };
        // Labels sit above mostly horizontal edges and beside the others.
        let mid = edge.mid_point();
        let (dx, dy) = edge.diffs();
        let (label_x, label_y) = if dx >= dy {
            (mid.x, mid.y - LABEL_OFFSET)
        } else {
            (mid.x + LABEL_OFFSET, mid.y)
        };
        self.edges.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            edge.vertex_one.position.x,
            edge.vertex_one.position.y,
            edge.vertex_two.position.x,
            edge.vertex_two.position.y,
            colour,
            self.config.line_width
        ));
        self.labels.push(format!(
            r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
            label_x, label_y, edge.distance
        ));
        true
    }

    fn clear(&mut self) {
        self.edges.clear();
        self.labels.clear();
        self.vertices.clear();
    }
}
