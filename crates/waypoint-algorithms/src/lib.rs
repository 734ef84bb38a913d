//! Pure graph algorithms for the waypoint engine.
//!
//! Everything here operates on a [`GraphView`] (a dense, read-only
//! snapshot of the graph topology) and returns owned result values.
//! No module in this crate knows about the graph store.

pub mod common;
pub mod dset;
pub mod heap;
pub mod mst;
pub mod pathfinding;
pub mod topology;

pub use common::{GraphView, NodeToken, ViewEdge};
pub use dset::DisjointSet;
pub use heap::IndexedMinHeap;
pub use mst::{kruskal_mst, MSTResult, MstEdge};
pub use pathfinding::{dijkstra, PathResult};
pub use topology::{topological_sort, CycleDetected};
