//! A node partition with incremental modularity.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{Edge, EdgeId, Graph, NodeId};

/// A partition of a graph's nodes into keyed groups.
///
/// With `m2` twice the edge count (or twice the total weight when
/// weighted):
/// - `a(c)` is the summed degree (or weight) of the group over `m2`;
/// - `e(c, d)` is the summed edge value between two groups over `m2`,
///   doubled for `c == d`;
/// - modularity `Q = Σ e(c, c) − a(c)²`.
///
/// Group strengths and internal weights are cached and updated on merge.
#[derive(Debug, Clone)]
pub struct Communities<'g> {
    graph: &'g Graph,
    weighted: bool,
    m2: f64,
    groups: IndexMap<usize, Vec<NodeId>>,
    membership: FxHashMap<NodeId, usize>,
    strength: FxHashMap<usize, f64>,
    inner: FxHashMap<usize, f64>,
}

impl<'g> Communities<'g> {
    /// One group per node, keyed `0..n` in identifier order.
    #[must_use]
    pub fn singletons(graph: &'g Graph, weighted: bool) -> Self {
        let groups = graph
            .sorted_node_ids()
            .into_iter()
            .map(|id| vec![id])
            .collect();
        Self::from_groups(graph, weighted, groups)
    }

    /// Groups keyed by position. Nodes not listed stay outside the partition.
    #[must_use]
    pub fn from_groups(graph: &'g Graph, weighted: bool, groups: Vec<Vec<NodeId>>) -> Self {
        #[allow(clippy::cast_precision_loss)] // edge counts stay far below 2^52
        let m2 = if weighted {
            2.0 * graph.total_weight()
        } else {
            2.0 * graph.edge_count() as f64
        };
        let mut communities = Self {
            graph,
            weighted,
            m2,
            groups: groups.into_iter().enumerate().collect(),
            membership: FxHashMap::default(),
            strength: FxHashMap::default(),
            inner: FxHashMap::default(),
        };
        communities.rebuild();
        communities
    }

    fn rebuild(&mut self) {
        self.membership.clear();
        self.strength.clear();
        self.inner.clear();
        for (&key, members) in &self.groups {
            let mut strength = 0.0;
            for &id in members {
                self.membership.insert(id, key);
                strength += self.node_value(id);
            }
            self.strength.insert(key, strength);
            self.inner.insert(key, 0.0);
        }
        for (_, edge) in self.graph.edges() {
            let (Some(&s), Some(&t)) = (
                self.membership.get(&edge.source()),
                self.membership.get(&edge.target()),
            ) else {
                continue;
            };
            if s == t {
                *self.inner.entry(s).or_insert(0.0) += self.edge_value(edge);
            }
        }
    }

    fn node_value(&self, id: NodeId) -> f64 {
        let node = &self.graph[id];
        if self.weighted {
            node.weight()
        } else {
            #[allow(clippy::cast_precision_loss)]
            let degree = node.degree() as f64;
            degree
        }
    }

    /// Value an edge contributes: its data when weighted, 1 otherwise.
    pub(crate) fn edge_value(&self, edge: &Edge) -> f64 {
        if self.weighted {
            edge.data()
        } else {
            1.0
        }
    }

    /// Returns the graph the partition belongs to.
    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns true if edge data is used instead of edge counts.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns twice the edge count (or total weight).
    #[must_use]
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the partition has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the members of a group.
    #[must_use]
    pub fn group(&self, key: usize) -> Option<&[NodeId]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    /// Iterates `(key, members)` pairs.
    pub fn groups(&self) -> impl Iterator<Item = (usize, &[NodeId])> + '_ {
        self.groups.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Returns the member lists in group order.
    #[must_use]
    pub fn to_groups(&self) -> Vec<Vec<NodeId>> {
        self.groups.values().cloned().collect()
    }

    /// Returns the group key of a node.
    #[must_use]
    pub fn key_of(&self, node: NodeId) -> Option<usize> {
        self.membership.get(&node).copied()
    }

    /// `a(c)`: the group's share of edge ends, or −∞ when `m2 <= 0`.
    #[must_use]
    pub fn a(&self, key: usize) -> f64 {
        if self.m2 <= 0.0 {
            return f64::NEG_INFINITY;
        }
        self.strength.get(&key).copied().unwrap_or(0.0) / self.m2
    }

    /// `e(c, d)`: the share of edge value between two groups, doubled for
    /// the group with itself; −∞ when `m2 <= 0`.
    #[must_use]
    pub fn e(&self, first: usize, second: usize) -> f64 {
        if self.m2 <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if first == second {
            return 2.0 * self.inner.get(&first).copied().unwrap_or(0.0) / self.m2;
        }
        self.between(first, second) / self.m2
    }

    /// Returns the edges joining two different groups, each once.
    fn linking_edges(&self, first: usize, second: usize) -> FxHashSet<EdgeId> {
        let mut found = FxHashSet::default();
        let members_of = |key: usize| self.groups.get(&key).into_iter().flatten();
        for &node in members_of(first).chain(members_of(second)) {
            let here = self.key_of(node);
            for &edge in self.graph[node].edges() {
                let there = self.key_of(self.graph[edge].opposite(node));
                let crosses = (here == Some(first) && there == Some(second))
                    || (here == Some(second) && there == Some(first));
                if crosses {
                    found.insert(edge);
                }
            }
        }
        found
    }

    fn between(&self, first: usize, second: usize) -> f64 {
        self.linking_edges(first, second)
            .into_iter()
            .map(|e| self.edge_value(&self.graph[e]))
            .sum()
    }

    /// Returns true if at least one edge joins the two groups.
    #[must_use]
    pub fn connected(&self, first: usize, second: usize) -> bool {
        first != second && !self.linking_edges(first, second).is_empty()
    }

    /// Modularity of the partition; 0 for a graph without edge value.
    #[must_use]
    pub fn modularity(&self) -> f64 {
        if self.m2 <= 0.0 {
            return 0.0;
        }
        self.groups
            .keys()
            .map(|&k| {
                let a = self.a(k);
                self.e(k, k) - a * a
            })
            .sum()
    }

    /// Moves every member of group `from` into group `into`.
    ///
    /// Does nothing if either key is unknown or both are equal.
    pub fn merge(&mut self, into: usize, from: usize) {
        if into == from || !self.groups.contains_key(&into) || !self.groups.contains_key(&from) {
            return;
        }
        let linking = self.between(into, from);
        let Some(moved) = self.groups.shift_remove(&from) else {
            return;
        };
        for &id in &moved {
            self.membership.insert(id, into);
        }
        if let Some(target) = self.groups.get_mut(&into) {
            target.extend(moved);
        }
        let strength = self.strength.remove(&from).unwrap_or(0.0);
        *self.strength.entry(into).or_insert(0.0) += strength;
        let inner = self.inner.remove(&from).unwrap_or(0.0);
        *self.inner.entry(into).or_insert(0.0) += inner + linking;
    }
}

impl fmt::Display for Communities<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<Vec<&str>> = self
            .groups
            .values()
            .map(|members| {
                let mut names: Vec<&str> = members
                    .iter()
                    .map(|&id| self.graph[id].identifier())
                    .collect();
                names.sort_unstable();
                names
            })
            .collect();
        groups.sort();
        let groups: Vec<String> = groups
            .iter()
            .map(|names| format!("[{}]", names.join(", ")))
            .collect();
        write!(f, "[{}]", groups.join(", "))
    }
}
