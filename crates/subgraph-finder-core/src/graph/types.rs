//! Node and edge types for the arena-backed [`Graph`](super::Graph).
//!
//! Nodes and edges never point at each other directly. A node lists the
//! handles of the edges it participates in, an edge names its endpoints by
//! handle, and the owning graph resolves both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle of a node inside one [`Graph`](super::Graph).
///
/// Handles are stable for the lifetime of the graph (removing other nodes
/// does not shift them) and survive `Clone`, so a copy of a graph accepts
/// the handles of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena slot of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of an edge inside one [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the arena slot of this edge.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of a graph.
///
/// Equality of nodes across graphs is by identifier. Inside a graph the node
/// keeps the bookkeeping the algorithms read: the edges that *include* it
/// (outgoing directed edges, and undirected edges at either end), the
/// neighbor reached through each of them, and the summed edge data.
///
/// `degree() == edges().len() == neighbors().len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    identifier: String,
    attribute: Option<f64>,
    edges: Vec<EdgeId>,
    neighbors: Vec<NodeId>,
    weight: f64,
}

impl Node {
    pub(crate) fn new(identifier: String, attribute: Option<f64>) -> Self {
        Self {
            identifier,
            attribute,
            edges: Vec::new(),
            neighbors: Vec::new(),
            weight: 0.0,
        }
    }

    /// Returns the node identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the optional numeric attribute supplied at ingestion.
    #[must_use]
    pub fn attribute(&self) -> Option<f64> {
        self.attribute
    }

    /// Returns the handles of the edges including this node.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the neighbors reached through [`Node::edges`], in the same order.
    #[must_use]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Returns the number of edges including this node.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns the summed data of the edges including this node.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn attach(&mut self, edge: EdgeId, neighbor: NodeId, data: f64) {
        self.edges.push(edge);
        self.neighbors.push(neighbor);
        self.weight += data;
    }

    pub(crate) fn detach(&mut self, edge: EdgeId, data: f64) {
        if let Some(pos) = self.edges.iter().position(|&e| e == edge) {
            self.edges.remove(pos);
            self.neighbors.remove(pos);
            self.weight -= data;
        }
    }
}

/// A directed or undirected weighted connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    data: f64,
    undirected: bool,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, data: f64, undirected: bool) -> Self {
        Self {
            source,
            target,
            data,
            undirected,
        }
    }

    /// Returns the source node handle.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the target node handle.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn data(&self) -> f64 {
        self.data
    }

    /// Returns true if the edge can be walked in both directions.
    #[must_use]
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Returns true if this edge is listed on `node`: it is the source, or
    /// the edge is undirected and `node` is the target.
    #[must_use]
    pub fn includes(&self, node: NodeId) -> bool {
        self.source == node || (self.undirected && self.target == node)
    }

    /// Returns the endpoint opposite to `node`.
    ///
    /// For a self-loop, or a node that is not an endpoint, the source is
    /// returned when `node` is the target and the target otherwise.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> NodeId {
        if self.target == node {
            self.source
        } else {
            self.target
        }
    }

    /// Returns true if the edge touches both `a` and `b` in any direction.
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Graph-independent identity of an edge, built from endpoint identifiers.
///
/// Undirected keys are normalised so that an undirected edge and its reverse
/// share one key; directed keys keep their orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    first: String,
    second: String,
    undirected: bool,
}

impl EdgeKey {
    /// Builds the key of an edge between two identifiers.
    #[must_use]
    pub fn new(source: &str, target: &str, undirected: bool) -> Self {
        let (first, second) = if undirected && target < source {
            (target, source)
        } else {
            (source, target)
        };
        Self {
            first: first.to_string(),
            second: second.to_string(),
            undirected,
        }
    }

    /// Returns the endpoint identifiers in key order.
    #[must_use]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.undirected { "--" } else { "->" };
        write!(f, "{} {} {}", self.first, arrow, self.second)
    }
}
