//! Error types for the pathgraph library.

use thiserror::Error;

use super::vertex::VertexId;

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced vertex does not exist.
    NotFound,
    /// The caller broke an argument contract (weight, position, self edge).
    InvalidArgument,
    /// Reading or writing a file failed.
    Io,
    /// A document or config file could not be parsed.
    Format,
}

/// All errors that can occur in the pathgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not found by ID.
    #[error("Could not find a vertex with the id: {0}")]
    VertexNotFound(VertexId),

    /// Edge weight is not a finite, strictly positive number.
    #[error("Edge weight must be finite and positive, got {0}")]
    InvalidWeight(f64),

    /// Vertex position has a non-finite coordinate.
    #[error("Vertex position must be finite, got ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    /// Edge would connect a vertex to itself.
    #[error("Self-edge not allowed on vertex {0}")]
    SelfEdge(VertexId),

    /// Two vertices share an id.
    #[error("Duplicate vertex id: {0}")]
    DuplicateVertex(VertexId),

    /// No id is left to hand out.
    #[error("No {0} ids left to allocate")]
    IdSpaceExhausted(&'static str),

    /// Snap threshold is negative or not finite.
    #[error("Proximity threshold must be finite and non-negative, got {0}")]
    InvalidProximity(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph document could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed or is out of range.
    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexNotFound(_) => ErrorKind::NotFound,
            Self::InvalidWeight(_)
            | Self::InvalidPosition { .. }
            | Self::SelfEdge(_)
            | Self::DuplicateVertex(_)
            | Self::IdSpaceExhausted(_)
            | Self::InvalidProximity(_) => ErrorKind::InvalidArgument,
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) | Self::Config(_) => ErrorKind::Format,
        }
    }
}

/// Convenience result type for pathgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
