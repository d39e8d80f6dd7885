//! Conditioned breadth-first and depth-first subgraph search.
//!
//! From every node of the input graph, a search grows one subgraph by
//! traversal. Each discovered neighbor is offered to a
//! [`ConditionedGraph`] together with the connecting edge (and, with edge
//! preservation, every edge tying it back to the subgraph so far). The
//! walk only continues through neighbors whose addition was accepted.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Condition, ConditionedGraph, EdgeId, Graph, NodeId, NodeSpec, PartialGraph};

use super::cull::cull;
use super::frontier::{EdgeFrontier, EdgeOrder};
use super::progress::Progress;
use super::settings::AlgorithmSettings;
use super::Algorithm;

/// Traversal discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Breadth-first.
    BreadthFirst,
    /// Depth-first.
    DepthFirst,
}

impl TraversalOrder {
    fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }
}

/// Configuration for conditioned traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Conditions every grown subgraph must keep satisfying.
    pub conditions: Vec<Condition>,
    /// Also add every edge joining a new node to the subgraph so far.
    pub edge_preservation: bool,
    /// Release frontier edges by weight instead of discovery order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_order: Option<EdgeOrder>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            edge_preservation: true,
            edge_order: None,
            settings: AlgorithmSettings::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a config with the given conditions.
    #[must_use]
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            ..Self::default()
        }
    }

    /// Sets edge preservation (builder pattern).
    #[must_use]
    pub fn with_edge_preservation(mut self, preserve: bool) -> Self {
        self.edge_preservation = preserve;
        self
    }

    /// Sets the frontier edge order (builder pattern).
    #[must_use]
    pub fn with_edge_order(mut self, order: EdgeOrder) -> Self {
        self.edge_order = Some(order);
        self
    }

    /// Sets the shared settings (builder pattern).
    #[must_use]
    pub fn with_settings(mut self, settings: AlgorithmSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// BFS or DFS search producing one conditioned subgraph per root.
#[derive(Debug, Clone)]
pub struct ConditionedSearch {
    order: TraversalOrder,
    config: SearchConfig,
}

impl ConditionedSearch {
    /// Creates a breadth-first search.
    #[must_use]
    pub fn breadth_first(config: SearchConfig) -> Self {
        Self {
            order: TraversalOrder::BreadthFirst,
            config,
        }
    }

    /// Creates a depth-first search.
    #[must_use]
    pub fn depth_first(config: SearchConfig) -> Self {
        Self {
            order: TraversalOrder::DepthFirst,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Grows the subgraph rooted at `root`.
    pub fn search_from(&self, graph: &Graph, root: NodeId) -> Result<Graph> {
        let edge_order = EdgeOrder::usable_for(self.config.edge_order, graph);
        self.grow(graph, &graph.weak_adjacency(), root, edge_order)
    }

    fn grow(
        &self,
        graph: &Graph,
        adjacency: &[Vec<NodeId>],
        root: NodeId,
        edge_order: Option<EdgeOrder>,
    ) -> Result<Graph> {
        let name = format!(
            "{} {} {}",
            graph.name(),
            self.order.label(),
            graph[root].identifier()
        );
        let mut walk = Walk {
            graph,
            adjacency,
            config: &self.config,
            edge_order,
            symmetric: self.config.conditions.contains(&Condition::Clique),
            sub: ConditionedGraph::new(name, self.config.conditions.clone()),
            members: IndexSet::new(),
            visited: FxHashSet::default(),
        };
        if walk.seed(root)? {
            match self.order {
                TraversalOrder::BreadthFirst => walk.breadth_first(root)?,
                TraversalOrder::DepthFirst => walk.depth_first(root)?,
            }
        }
        Ok(walk.sub.into_graph())
    }
}

impl Algorithm for ConditionedSearch {
    fn name(&self) -> &str {
        self.order.label()
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let edge_order = EdgeOrder::usable_for(self.config.edge_order, graph);
        let adjacency = graph.weak_adjacency();
        let roots = graph.node_ids();
        let mut results = Vec::with_capacity(roots.len());

        for (index, &root) in roots.iter().enumerate() {
            let sub = self.grow(graph, &adjacency, root, edge_order)?;
            tracing::debug!(
                root = graph[root].identifier(),
                nodes = sub.node_count(),
                edges = sub.edge_count(),
                "Subgraph grown"
            );
            results.push(sub);
            progress.set_fraction(index + 1, roots.len())?;
        }

        progress.finish()?;
        Ok(cull(results, &self.config.settings))
    }
}

/// State of one rooted search.
struct Walk<'g> {
    graph: &'g Graph,
    /// Neighbors of every input node over edges in either direction.
    adjacency: &'g [Vec<NodeId>],
    config: &'g SearchConfig,
    edge_order: Option<EdgeOrder>,
    /// Discovery also carries the reverse directed edge (clique searches).
    symmetric: bool,
    sub: ConditionedGraph,
    /// Input-graph handles of the nodes accepted into `sub`.
    members: IndexSet<NodeId>,
    visited: FxHashSet<NodeId>,
}

impl Walk<'_> {
    fn node_spec(&self, id: NodeId) -> NodeSpec {
        let node = &self.graph[id];
        NodeSpec {
            identifier: node.identifier().to_string(),
            weight: node.attribute(),
        }
    }

    fn seed(&mut self, root: NodeId) -> Result<bool> {
        let accepted = self.sub.try_add_node(self.node_spec(root))?;
        if accepted {
            self.members.insert(root);
        }
        Ok(accepted)
    }

    /// Members adjacent to `node`, in the order they joined the subgraph.
    fn adjacent_members(&self, node: NodeId) -> Vec<NodeId> {
        let mut found: Vec<(usize, NodeId)> = self.adjacency[node.index()]
            .iter()
            .filter_map(|&n| self.members.get_index_of(&n).map(|at| (at, n)))
            .collect();
        found.sort_unstable_by_key(|&(at, _)| at);
        found.into_iter().map(|(_, n)| n).collect()
    }

    /// Adds edges between `current` and earlier members that are still
    /// missing from the subgraph, one by one.
    fn scavenge(&mut self, current: NodeId) -> Result<()> {
        for member in self.adjacent_members(current) {
            for edge in self.graph.edges_between(current, member) {
                let spec = self.graph.edge_spec(edge);
                if !self.sub.contains_edge_spec(&spec) {
                    self.sub.try_add_edge(spec)?;
                }
            }
        }
        Ok(())
    }

    /// Builds the addition that brings `neighbor` in through `discovery`.
    fn candidate(&self, current: NodeId, neighbor: NodeId, discovery: EdgeId) -> PartialGraph {
        let mut addition = PartialGraph::new();
        addition.push_node(self.node_spec(neighbor));
        addition.push_edge(self.graph.edge_spec(discovery));

        if self.symmetric && !self.graph[discovery].is_undirected() {
            if let Some(back) = self.graph.find_edge(neighbor, current) {
                addition.push_edge(self.graph.edge_spec(back));
            }
        }
        if self.config.edge_preservation {
            for member in self.adjacent_members(neighbor) {
                for edge in self.graph.edges_between(neighbor, member) {
                    addition.push_edge(self.graph.edge_spec(edge));
                }
            }
        }
        addition.retain_missing(self.sub.graph());
        addition
    }

    fn accept(&mut self, neighbor: NodeId, addition: &PartialGraph) -> Result<bool> {
        let accepted = self.sub.try_extend(addition)?;
        if accepted {
            self.members.insert(neighbor);
        }
        Ok(accepted)
    }

    fn breadth_first(&mut self, root: NodeId) -> Result<()> {
        let mut frontier = EdgeFrontier::new(self.edge_order);
        self.expand(root, &mut frontier)?;

        while let Some(edge_id) = frontier.pop() {
            let edge = self.graph[edge_id];
            let next = if edge.is_undirected() {
                [edge.source(), edge.target()]
                    .into_iter()
                    .find(|n| !self.visited.contains(n))
            } else {
                Some(edge.target()).filter(|n| !self.visited.contains(n))
            };
            if let Some(next) = next {
                self.expand(next, &mut frontier)?;
            }
        }
        Ok(())
    }

    fn expand(&mut self, current: NodeId, frontier: &mut EdgeFrontier) -> Result<()> {
        self.visited.insert(current);
        self.scavenge(current)?;

        let graph = self.graph;
        for &edge in graph[current].edges() {
            let neighbor = graph[edge].opposite(current);
            if self.visited.contains(&neighbor) {
                continue;
            }
            let addition = self.candidate(current, neighbor, edge);
            if self.accept(neighbor, &addition)? {
                frontier.push(edge, graph[edge].data());
            }
        }
        Ok(())
    }

    /// Depth-first growth with an explicit stack of frames, one per
    /// accepted node still holding unexplored edges.
    fn depth_first(&mut self, root: NodeId) -> Result<()> {
        self.visited.insert(root);
        let mut stack = vec![self.enter(root)?];

        while let Some((current, frontier)) = stack.last_mut() {
            let current = *current;
            let Some(edge) = frontier.pop() else {
                stack.pop();
                continue;
            };
            let neighbor = self.graph[edge].opposite(current);
            if self.visited.contains(&neighbor) {
                continue;
            }
            let addition = self.candidate(current, neighbor, edge);
            if self.accept(neighbor, &addition)? {
                self.visited.insert(neighbor);
                stack.push(self.enter(neighbor)?);
            }
        }
        Ok(())
    }

    /// Opens the frame of `current`: scavenges its back edges and queues
    /// the edges leading to unvisited nodes.
    fn enter(&mut self, current: NodeId) -> Result<(NodeId, EdgeFrontier)> {
        self.scavenge(current)?;

        let graph = self.graph;
        let mut frontier = EdgeFrontier::new(self.edge_order);
        for &edge in graph[current].edges() {
            if !self.visited.contains(&graph[edge].opposite(current)) {
                frontier.push(edge, graph[edge].data());
            }
        }
        Ok((current, frontier))
    }
}
