//! Topological ordering (Kahn)

use super::common::{GraphView, NodeToken};
use std::collections::VecDeque;
use thiserror::Error;

/// The graph contains at least one directed cycle, so no total order
/// consistent with every edge exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph contains at least one directed cycle")]
pub struct CycleDetected;

/// Kahn's algorithm over a [`GraphView`].
///
/// The work queue is FIFO and seeded with zero-in-degree nodes in
/// insertion order, so the result is deterministic for a given store.
/// Parallel edges each contribute to in-degree; a self-loop keeps its
/// node above zero forever and therefore reports a cycle.
pub fn topological_sort(view: &GraphView) -> Result<Vec<NodeToken>, CycleDetected> {
    let mut in_degree: Vec<usize> = (0..view.node_count).map(|i| view.in_degree(i)).collect();

    let mut queue: VecDeque<usize> = (0..view.node_count)
        .filter(|&i| in_degree[i] == 0)
        .collect();

    let mut order = Vec::with_capacity(view.node_count);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for edge in view.outgoing(u) {
            in_degree[edge.target] -= 1;
            if in_degree[edge.target] == 0 {
                queue.push_back(edge.target);
            }
        }
    }

    if order.len() == view.node_count {
        Ok(order.into_iter().map(|i| view.token(i).to_string()).collect())
    } else {
        Err(CycleDetected)
    }
}
