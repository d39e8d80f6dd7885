//! Arena-backed graph store.
//!
//! Nodes and edges live in slot vectors addressed by [`NodeId`] and
//! [`EdgeId`]. Removal leaves a tombstone, so handles stay stable and
//! iteration keeps insertion order.

use std::fmt;
use std::ops::Index;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::error::{Error, Result};

use super::description::{EdgeSpec, NodeSpec, PartialGraph};
use super::types::{Edge, EdgeId, EdgeKey, Node, NodeId};

/// A named, mutable graph of weighted directed and undirected edges.
///
/// Invariants kept by every mutation:
/// - node identifiers are unique;
/// - every edge references two nodes of this graph;
/// - no two edges are equal (an undirected edge equals its reverse, a
///   directed edge does not);
/// - `total_weight()` equals the sum of all edge data;
/// - each node's degree equals the number of edges including it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    by_identifier: FxHashMap<String, NodeId>,
    by_endpoints: FxHashMap<(NodeId, NodeId), EdgeId>,
    node_count: usize,
    edge_count: usize,
    total_weight: f64,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the graph.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns an independent copy of this graph under a new name.
    #[must_use]
    pub fn unique_copy_named(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = name.into();
        copy
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Adds a node without attribute.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if the identifier is already present.
    pub fn add_node(&mut self, identifier: impl Into<String>) -> Result<NodeId> {
        self.add_node_with_attribute(identifier, None)
    }

    /// Adds a node carrying an optional numeric attribute.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if the identifier is already present.
    pub fn add_node_with_attribute(
        &mut self,
        identifier: impl Into<String>,
        attribute: Option<f64>,
    ) -> Result<NodeId> {
        let identifier = identifier.into();
        if self.by_identifier.contains_key(&identifier) {
            return Err(Error::NodeExists(identifier));
        }
        let id = NodeId(self.nodes.len());
        self.by_identifier.insert(identifier.clone(), id);
        self.nodes.push(Some(Node::new(identifier, attribute)));
        self.node_count += 1;
        Ok(id)
    }

    /// Adds a node with the identifier and attribute of a node from
    /// another graph.
    pub(crate) fn import_node(&mut self, node: &Node) -> Result<NodeId> {
        self.add_node_with_attribute(node.identifier(), node.attribute())
    }

    /// Gets a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Looks up a node handle by exact identifier.
    #[must_use]
    pub fn node_id(&self, identifier: &str) -> Option<NodeId> {
        self.by_identifier.get(identifier).copied()
    }

    /// Returns true if a node with the identifier exists.
    #[must_use]
    pub fn contains_node(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|n| (NodeId(i), n)))
    }

    /// Returns all node handles in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().map(|(id, _)| id).collect()
    }

    /// Returns all node handles ordered by identifier.
    #[must_use]
    pub fn sorted_node_ids(&self) -> Vec<NodeId> {
        let mut ids = self.node_ids();
        ids.sort_by(|a, b| self[*a].identifier().cmp(self[*b].identifier()));
        ids
    }

    /// Returns the neighbors of a node (empty for an unknown handle).
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], Node::neighbors)
    }

    /// Returns the edges including a node (empty for an unknown handle).
    #[must_use]
    pub fn node_edges(&self, id: NodeId) -> &[EdgeId] {
        self.node(id).map_or(&[], Node::edges)
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.node(id)?;
        let touching: Vec<EdgeId> = self
            .edges()
            .filter(|(_, e)| e.source() == id || e.target() == id)
            .map(|(eid, _)| eid)
            .collect();
        for edge in touching {
            self.remove_edge(edge);
        }
        let node = self.nodes.get_mut(id.0)?.take()?;
        self.by_identifier.remove(node.identifier());
        self.node_count -= 1;
        Some(node)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds an edge between two nodes named by identifier.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if an endpoint is not in the graph.
    /// - `Error::EdgeExists` if an equal edge is already present.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        data: f64,
        undirected: bool,
    ) -> Result<EdgeId> {
        let s = self
            .node_id(source)
            .ok_or_else(|| Error::NodeNotFound(source.to_string()))?;
        let t = self
            .node_id(target)
            .ok_or_else(|| Error::NodeNotFound(target.to_string()))?;
        self.add_edge_between(s, t, data, undirected)
    }

    /// Adds an edge between two node handles.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidHandle` if a handle does not name a live node.
    /// - `Error::EdgeExists` if an equal edge is already present.
    pub fn add_edge_between(
        &mut self,
        source: NodeId,
        target: NodeId,
        data: f64,
        undirected: bool,
    ) -> Result<EdgeId> {
        for end in [source, target] {
            if self.node(end).is_none() {
                return Err(Error::InvalidHandle(format!("node {}", end.0)));
            }
        }
        if self.equal_edge(source, target, undirected).is_some() {
            return Err(Error::EdgeExists(self.describe(source, target, undirected)));
        }

        let id = EdgeId(self.edges.len());
        self.edges
            .push(Some(Edge::new(source, target, data, undirected)));
        self.by_endpoints.insert((source, target), id);
        if let Some(Some(node)) = self.nodes.get_mut(source.0) {
            node.attach(id, target, data);
        }
        if undirected && source != target {
            if let Some(Some(node)) = self.nodes.get_mut(target.0) {
                node.attach(id, source, data);
            }
        }
        self.edge_count += 1;
        self.total_weight += data;
        tracing::trace!(graph = %self.name, edge = id.0, "Edge added");
        Ok(id)
    }

    /// Copies an edge of `from` into this graph, resolving endpoints by
    /// identifier.
    pub(crate) fn import_edge(&mut self, from: &Graph, id: EdgeId) -> Result<EdgeId> {
        let edge = from[id];
        self.add_edge(
            from[edge.source()].identifier(),
            from[edge.target()].identifier(),
            edge.data(),
            edge.is_undirected(),
        )
    }

    /// Gets an edge by handle.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EdgeId(i), e)))
    }

    /// Returns all edge handles in insertion order.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges().map(|(id, _)| id).collect()
    }

    /// Finds the edge walked from `source` to `target`: the exact directed
    /// or undirected edge, or the undirected reverse.
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if let Some(&id) = self.by_endpoints.get(&(source, target)) {
            return Some(id);
        }
        self.by_endpoints
            .get(&(target, source))
            .copied()
            .filter(|&id| self[id].is_undirected())
    }

    /// Finds an edge by endpoint identifiers, see [`Graph::find_edge`].
    #[must_use]
    pub fn find_edge_by_identifiers(&self, source: &str, target: &str) -> Option<EdgeId> {
        self.find_edge(self.node_id(source)?, self.node_id(target)?)
    }

    /// Returns every edge joining `a` and `b` in either direction.
    #[must_use]
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> SmallVec<[EdgeId; 2]> {
        let mut found = SmallVec::new();
        if let Some(&id) = self.by_endpoints.get(&(a, b)) {
            found.push(id);
        }
        if a != b {
            if let Some(&id) = self.by_endpoints.get(&(b, a)) {
                found.push(id);
            }
        }
        found
    }

    /// Returns the edge an addition of `(source, target, undirected)` would
    /// collide with.
    fn equal_edge(&self, source: NodeId, target: NodeId, undirected: bool) -> Option<EdgeId> {
        if let Some(&id) = self.by_endpoints.get(&(source, target)) {
            return Some(id);
        }
        self.by_endpoints
            .get(&(target, source))
            .copied()
            .filter(|&id| undirected || self[id].is_undirected())
    }

    /// Returns true if an edge equal to the tuple is in the graph.
    #[must_use]
    pub fn contains_edge_spec(&self, spec: &EdgeSpec) -> bool {
        match (self.node_id(&spec.source), self.node_id(&spec.target)) {
            (Some(s), Some(t)) => self.equal_edge(s, t, !spec.directed).is_some(),
            _ => false,
        }
    }

    /// Describes an edge of this graph as an identifier tuple.
    #[must_use]
    pub fn edge_spec(&self, id: EdgeId) -> EdgeSpec {
        let edge = self[id];
        EdgeSpec {
            source: self[edge.source()].identifier().to_string(),
            target: self[edge.target()].identifier().to_string(),
            weight: edge.data(),
            directed: !edge.is_undirected(),
        }
    }

    /// Returns the graph-independent identity of an edge.
    #[must_use]
    pub fn edge_key(&self, id: EdgeId) -> EdgeKey {
        let edge = self[id];
        EdgeKey::new(
            self[edge.source()].identifier(),
            self[edge.target()].identifier(),
            edge.is_undirected(),
        )
    }

    /// Removes an edge and updates the bookkeeping of its endpoints.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.0)?.take()?;
        self.by_endpoints.remove(&(edge.source(), edge.target()));
        if let Some(Some(node)) = self.nodes.get_mut(edge.source().0) {
            node.detach(id, edge.data());
        }
        if edge.is_undirected() && edge.source() != edge.target() {
            if let Some(Some(node)) = self.nodes.get_mut(edge.target().0) {
                node.detach(id, edge.data());
            }
        }
        self.edge_count -= 1;
        self.total_weight -= edge.data();
        Some(edge)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the sum of all edge data.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns `total_weight / edge_count`, or 0 for a graph without edges.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // edge counts stay far below 2^52
    pub fn average_edge_weight(&self) -> f64 {
        if self.edge_count == 0 {
            0.0
        } else {
            self.total_weight / self.edge_count as f64
        }
    }

    // ── Partial graphs and subgraphs ───────────────────────────────────

    /// Applies an addition: nodes first, then edges.
    ///
    /// Edges equal to one already present are skipped. The addition is
    /// checked before anything is applied, so on error the graph is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - `Error::NodeExists` if a queued node is already present or queued
    ///   twice.
    /// - `Error::NodeNotFound` if a queued edge names a node that is
    ///   neither present nor queued.
    pub fn extend(&mut self, addition: &PartialGraph) -> Result<()> {
        let mut queued: FxHashSet<&str> = FxHashSet::default();
        for node in addition.nodes() {
            if self.contains_node(&node.identifier) || !queued.insert(node.identifier.as_str()) {
                return Err(Error::NodeExists(node.identifier.clone()));
            }
        }
        for spec in addition.edges() {
            for end in [&spec.source, &spec.target] {
                if !self.contains_node(end) && !queued.contains(end.as_str()) {
                    return Err(Error::NodeNotFound(end.clone()));
                }
            }
        }

        for NodeSpec { identifier, weight } in addition.nodes() {
            self.add_node_with_attribute(identifier.clone(), *weight)?;
        }
        for spec in addition.edges() {
            if self.contains_edge_spec(spec) {
                continue;
            }
            self.add_edge(&spec.source, &spec.target, spec.weight, !spec.directed)?;
        }
        Ok(())
    }

    /// Returns the edges whose endpoints both lie in `nodes`, in edge order.
    #[must_use]
    pub fn edges_back(&self, nodes: &[NodeId]) -> Vec<EdgeId> {
        let members: FxHashSet<NodeId> = nodes.iter().copied().collect();
        self.edges()
            .filter(|(_, e)| members.contains(&e.source()) && members.contains(&e.target()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Builds a new graph from the given nodes and the edges among them.
    ///
    /// Unknown or repeated handles are ignored.
    pub fn subgraph(&self, nodes: &[NodeId], name: impl Into<String>) -> Result<Graph> {
        let mut sub = Graph::new(name);
        let mut kept = Vec::with_capacity(nodes.len());
        for &id in nodes {
            if let Some(node) = self.node(id) {
                if !sub.contains_node(node.identifier()) {
                    sub.import_node(node)?;
                    kept.push(id);
                }
            }
        }
        for edge in self.edges_back(&kept) {
            sub.import_edge(self, edge)?;
        }
        Ok(sub)
    }

    /// Builds the subgraph induced by a node set, named `qualifier` followed
    /// by this graph's name.
    pub fn sub_graph_qualified(&self, nodes: &[NodeId], qualifier: &str) -> Result<Graph> {
        self.subgraph(nodes, format!("{qualifier}{}", self.name))
    }

    /// Returns the adjacency list keyed by identifier, in node order.
    #[must_use]
    pub fn adjacency_list(&self) -> Vec<(&str, Vec<&str>)> {
        self.nodes()
            .map(|(_, node)| {
                let neighbors = node
                    .neighbors()
                    .iter()
                    .map(|&n| self[n].identifier())
                    .collect();
                (node.identifier(), neighbors)
            })
            .collect()
    }

    /// Returns, per node slot, the neighbors reachable over any edge in
    /// either direction, without self-loops or repeats.
    pub(crate) fn weak_adjacency(&self) -> Vec<Vec<NodeId>> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for (_, edge) in self.edges() {
            let (s, t) = (edge.source(), edge.target());
            if s == t {
                continue;
            }
            if !adjacency[s.0].contains(&t) {
                adjacency[s.0].push(t);
            }
            if !adjacency[t.0].contains(&s) {
                adjacency[t.0].push(s);
            }
        }
        adjacency
    }

    /// Returns one past the largest node slot ever used; per-slot tables
    /// of this length can be indexed by any live [`NodeId`].
    pub(crate) fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// Returns, per node slot, every edge touching the node in either
    /// direction (self-loops listed once).
    pub(crate) fn incidence(&self) -> Vec<Vec<EdgeId>> {
        let mut incidence = vec![Vec::new(); self.nodes.len()];
        for (id, edge) in self.edges() {
            incidence[edge.source().0].push(id);
            if edge.source() != edge.target() {
                incidence[edge.target().0].push(id);
            }
        }
        incidence
    }

    fn describe(&self, source: NodeId, target: NodeId, undirected: bool) -> String {
        EdgeKey::new(
            self[source].identifier(),
            self[target].identifier(),
            undirected,
        )
        .to_string()
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    /// # Panics
    ///
    /// Panics if the handle does not name a live node of this graph.
    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
            .unwrap_or_else(|| panic!("node handle {} is not in graph '{}'", id.0, self.name))
    }
}

impl Index<EdgeId> for Graph {
    type Output = Edge;

    /// # Panics
    ///
    /// Panics if the handle does not name a live edge of this graph.
    fn index(&self, id: EdgeId) -> &Edge {
        self.edge(id)
            .unwrap_or_else(|| panic!("edge handle {} is not in graph '{}'", id.0, self.name))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "|V|: {} |E|: {}", self.node_count, self.edge_count)?;

        let nodes: Vec<&str> = self
            .sorted_node_ids()
            .into_iter()
            .map(|id| self[id].identifier())
            .collect();
        writeln!(f, "V: [{}]", nodes.join(", "))?;

        let mut edges: Vec<EdgeSpec> = self.edge_ids().into_iter().map(|e| self.edge_spec(e)).collect();
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        let edges: Vec<String> = edges
            .iter()
            .map(|e| {
                let kind = if e.directed { 'D' } else { 'U' };
                format!("[{}, {}, {:.6}]:{}", e.source, e.target, e.weight, kind)
            })
            .collect();
        write!(f, "E: [{}]", edges.join(", "))
    }
}
