//! Waypoint Graph Engine
//!
//! An in-memory engine for interactively built weighted directed graphs,
//! with three classical analyses: single-source shortest path (Dijkstra),
//! minimum spanning tree (Kruskal over union-find), and topological
//! ordering (Kahn).
//!
//! The store owns all graph state; a presentation layer feeds it validated
//! mutation commands and consumes structured query results. Engines read
//! an immutable snapshot per invocation and never mutate the store.
//!
//! ## Example Usage
//!
//! ```rust
//! use waypoint::graph::GraphStore;
//! use waypoint::algo;
//!
//! let mut store = GraphStore::new();
//! for id in ["A", "B", "C", "D"] {
//!     store.add_node(id).unwrap();
//! }
//! store.add_edge("A", "B", 1.0).unwrap();
//! store.add_edge("B", "C", 2.0).unwrap();
//! store.add_edge("A", "C", 5.0).unwrap();
//! store.add_edge("C", "D", 1.0).unwrap();
//!
//! let path = algo::shortest_path(&store, &"A".into(), &"D".into())
//!     .unwrap()
//!     .expect("D is reachable");
//! assert_eq!(path.path, vec!["A", "B", "C", "D"]);
//! assert_eq!(path.cost, 4.0);
//!
//! let forest = algo::minimum_spanning_forest(&store);
//! assert_eq!(forest.total_weight, 4.0);
//!
//! let order = algo::topological_order(&store).unwrap();
//! assert_eq!(order.len(), 4);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{CycleDetected, MSTResult, MstEdge, PathResult};
pub use graph::{Edge, EdgeId, GraphError, GraphResult, GraphStore, Mutation, Node, NodeId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
