//! Reads JSON graph documents into a store.

use std::io::Read;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::GraphResult;

use super::GraphDocument;

/// Reader for graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a document file into a GraphStore.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphStore> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Read from any reader into a GraphStore.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<GraphStore> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_json(&data)
    }

    /// Parse a document from bytes.
    pub fn from_json(data: &[u8]) -> GraphResult<GraphStore> {
        let doc: GraphDocument = serde_json::from_slice(data)?;
        Self::from_document(doc)
    }

    /// Build a store from an already parsed document.
    pub fn from_document(doc: GraphDocument) -> GraphResult<GraphStore> {
        let edges = doc
            .edges
            .into_iter()
            .map(|e| (e.vertex_one, e.vertex_two, e.distance))
            .collect();
        GraphStore::from_parts(doc.vertices, edges, doc.proximity)
    }
}
