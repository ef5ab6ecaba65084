//! Writes a store as a JSON graph document.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::GraphResult;

use super::{EdgeRecord, GraphDocument};

/// Writer for graph documents.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a new writer; `pretty` indents the output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a GraphStore to a file.
    pub fn write_to_file(&self, graph: &GraphStore, path: &Path) -> GraphResult<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_to(graph, &mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Write a GraphStore to any writer.
    pub fn write_to(&self, graph: &GraphStore, writer: &mut impl Write) -> GraphResult<()> {
        let doc = Self::to_document(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &doc)?;
        } else {
            serde_json::to_writer(&mut *writer, &doc)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Serialize a GraphStore to a JSON string.
    pub fn to_json(&self, graph: &GraphStore) -> GraphResult<String> {
        let doc = Self::to_document(graph);
        let json = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(json)
    }

    /// Snapshot a GraphStore as a document.
    pub fn to_document(graph: &GraphStore) -> GraphDocument {
        GraphDocument {
            proximity: graph.proximity(),
            vertices: graph.vertices().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeRecord {
                    vertex_one: e.vertex_one.id,
                    vertex_two: e.vertex_two.id,
                    distance: e.distance,
                })
                .collect(),
        }
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new(true)
    }
}
