//! Identifier-based descriptions of graph content.
//!
//! This is the ingestion boundary: readers and outer layers describe a graph
//! as plain node and edge tuples, and [`GraphDescription::build`] turns the
//! description into an arena [`Graph`]. [`PartialGraph`] is the same shape
//! used for atomic additions to an existing graph.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::EdgeKey;

/// A node tuple: identifier plus an optional numeric attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Node identifier, unique within a graph.
    pub identifier: String,
    /// Optional numeric attribute carried on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl NodeSpec {
    /// Creates a node tuple without attribute.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            weight: None,
        }
    }

    /// Sets the numeric attribute (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// An edge tuple: endpoint identifiers, weight and direction flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source node identifier.
    pub source: String,
    /// Target node identifier.
    pub target: String,
    /// Edge weight.
    #[serde(default)]
    pub weight: f64,
    /// True for a one-way edge.
    #[serde(default)]
    pub directed: bool,
}

impl EdgeSpec {
    /// Creates an undirected edge tuple.
    #[must_use]
    pub fn undirected(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            directed: false,
        }
    }

    /// Creates a directed edge tuple.
    #[must_use]
    pub fn directed(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            directed: true,
        }
    }

    /// Returns the graph-independent identity of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.source, &self.target, !self.directed)
    }
}

/// A whole graph as plain tuples.
///
/// # Example
///
/// ```rust
/// use subgraph_finder_core::graph::{EdgeSpec, GraphDescription};
///
/// let graph = GraphDescription::new("triangle")
///     .with_nodes(["A", "B", "C"])
///     .with_edge(EdgeSpec::undirected("A", "B", 1.0))
///     .with_edge(EdgeSpec::undirected("B", "C", 1.0))
///     .with_edge(EdgeSpec::undirected("C", "A", 1.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.is_clique());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Graph name.
    pub name: String,
    /// Node tuples, in insertion order.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    /// Edge tuples, in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDescription {
    /// Creates an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends attribute-less nodes (builder pattern).
    #[must_use]
    pub fn with_nodes<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes
            .extend(identifiers.into_iter().map(NodeSpec::new));
        self
    }

    /// Appends one edge (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, edge: EdgeSpec) -> Self {
        self.edges.push(edge);
        self
    }

    /// Adds a node tuple unless one with the same identifier is listed.
    ///
    /// Returns true if the node was appended.
    pub fn ensure_node(&mut self, identifier: &str) -> bool {
        if self.nodes.iter().any(|n| n.identifier == identifier) {
            return false;
        }
        self.nodes.push(NodeSpec::new(identifier));
        true
    }

    /// Builds the arena graph.
    ///
    /// Edges equal to one already built are skipped.
    ///
    /// # Errors
    ///
    /// - `Error::NodeExists` if two node tuples share an identifier.
    /// - `Error::NodeNotFound` if an edge names an identifier that has no
    ///   node tuple.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.name.clone());
        for node in &self.nodes {
            graph.add_node_with_attribute(node.identifier.clone(), node.weight)?;
        }
        for edge in &self.edges {
            match graph.add_edge(&edge.source, &edge.target, edge.weight, !edge.directed) {
                Ok(_) => {}
                Err(Error::EdgeExists(desc)) => {
                    tracing::debug!(graph = %self.name, edge = %desc, "Skipping duplicate edge");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(graph)
    }
}

impl From<&Graph> for GraphDescription {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|(_, node)| NodeSpec {
                identifier: node.identifier().to_string(),
                weight: node.attribute(),
            })
            .collect();
        let edges = graph.edge_ids().into_iter().map(|e| graph.edge_spec(e)).collect();
        Self {
            name: graph.name().to_string(),
            nodes,
            edges,
        }
    }
}

/// Nodes and edges to add to a graph in one step.
///
/// Applied with [`Graph::extend`] or, under structural conditions, with
/// [`ConditionedGraph::try_extend`](super::ConditionedGraph::try_extend).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialGraph {
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
}

impl PartialGraph {
    /// Creates an empty addition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a node.
    pub fn push_node(&mut self, node: NodeSpec) {
        self.nodes.push(node);
    }

    /// Queues an edge unless an equal one is already queued.
    pub fn push_edge(&mut self, edge: EdgeSpec) {
        let key = edge.key();
        if !self.edges.iter().any(|e| e.key() == key) {
            self.edges.push(edge);
        }
    }

    /// Drops queued nodes and edges that `graph` already contains.
    pub fn retain_missing(&mut self, graph: &Graph) {
        self.nodes.retain(|n| !graph.contains_node(&n.identifier));
        self.edges.retain(|e| !graph.contains_edge_spec(e));
    }

    /// Returns the queued nodes.
    #[must_use]
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    /// Returns the queued edges.
    #[must_use]
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
