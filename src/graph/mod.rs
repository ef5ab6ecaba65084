//! In-memory graph operations: the core data structure and path search.

pub mod builder;
pub mod search;
pub mod store;

pub use builder::GraphBuilder;
pub use search::{find_path, PathResult};
pub use store::GraphStore;
