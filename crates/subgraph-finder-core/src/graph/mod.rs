//! Graph model: arena store, identifier-based descriptions, set algebra,
//! structural predicates and condition-guarded graphs.
//!
//! # Example
//!
//! ```rust
//! use subgraph_finder_core::graph::{Condition, ConditionedGraph, EdgeSpec, NodeSpec, PartialGraph};
//!
//! let mut clique = ConditionedGraph::new("pair", vec![Condition::Clique]);
//! assert!(clique.try_add_node(NodeSpec::new("A")).unwrap());
//!
//! // A second node without an edge would break the clique.
//! assert!(!clique.try_add_node(NodeSpec::new("B")).unwrap());
//!
//! let mut addition = PartialGraph::new();
//! addition.push_node(NodeSpec::new("B"));
//! addition.push_edge(EdgeSpec::undirected("A", "B", 1.0));
//! assert!(clique.try_extend(&addition).unwrap());
//! assert_eq!(clique.node_count(), 2);
//! ```

mod condition;
mod conditioned;
mod description;
mod set_ops;
mod store;
mod structure;
mod types;

#[cfg(test)]
mod set_ops_tests;

pub use condition::{Condition, CustomCondition};
pub use conditioned::ConditionedGraph;
pub use description::{EdgeSpec, GraphDescription, NodeSpec, PartialGraph};
pub use store::Graph;
pub use types::{Edge, EdgeId, EdgeKey, Node, NodeId};
