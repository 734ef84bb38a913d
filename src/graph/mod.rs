//! Graph data model and storage
//!
//! The store exclusively owns all nodes and edges; algorithms borrow
//! read-only snapshots through the `algo` module and return independent
//! result values.

pub mod command;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

pub use command::Mutation;
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, NodeId};
