//! Typed mutation commands
//!
//! The presentation layer validates raw user input into these commands
//! and feeds them to [`GraphStore::apply`]. Identifiers arriving here are
//! already normalized; weights are already numeric.

use super::store::{GraphResult, GraphStore};
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A validated graph mutation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    AddNode { id: NodeId },
    AddEdge { from: NodeId, to: NodeId, weight: f64 },
    RemoveNode { id: NodeId },
    Clear,
}

impl GraphStore {
    /// Apply a single mutation command. All-or-nothing: on error the
    /// store is unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> GraphResult<()> {
        match mutation {
            Mutation::AddNode { id } => self.add_node(id),
            Mutation::AddEdge { from, to, weight } => {
                self.add_edge(from, to, weight).map(|_| ())
            }
            Mutation::RemoveNode { id } => self.remove_node(&id),
            Mutation::Clear => {
                self.clear();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn test_apply_sequence() {
        let mut store = GraphStore::new();
        let commands = vec![
            Mutation::AddNode { id: "A".into() },
            Mutation::AddNode { id: "B".into() },
            Mutation::AddEdge { from: "A".into(), to: "B".into(), weight: 2.0 },
        ];
        for cmd in commands {
            store.apply(cmd).unwrap();
        }
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_failed_apply_leaves_state_unchanged() {
        let mut store = GraphStore::new();
        store.apply(Mutation::AddNode { id: "A".into() }).unwrap();

        let err = store
            .apply(Mutation::AddEdge { from: "A".into(), to: "Z".into(), weight: 1.0 })
            .unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound(NodeId::new("Z")));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_clear_command() {
        let mut store = GraphStore::new();
        store.apply(Mutation::AddNode { id: "A".into() }).unwrap();
        store.apply(Mutation::Clear).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutation_round_trips_through_json() {
        let cmd = Mutation::AddEdge { from: "A".into(), to: "B".into(), weight: 1.5 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(serde_json::from_str::<Mutation>(&json).unwrap(), cmd);
    }
}
