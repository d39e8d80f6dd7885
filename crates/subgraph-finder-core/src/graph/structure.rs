//! Structural predicates: cliques, bipartiteness and weak components.

use std::collections::VecDeque;

use super::store::Graph;
use super::types::NodeId;

impl Graph {
    /// Returns true if every node lists every other node as a neighbor.
    ///
    /// Empty and single-node graphs are cliques. For directed edges this
    /// requires both directions between each pair.
    #[must_use]
    pub fn is_clique(&self) -> bool {
        let ids = self.node_ids();
        ids.iter().all(|&a| {
            let neighbors = self.neighbors(a);
            ids.iter().all(|&b| a == b || neighbors.contains(&b))
        })
    }

    /// Returns true if every unordered pair of distinct nodes is joined by
    /// an edge in at least one direction.
    #[must_use]
    pub fn is_directed_clique(&self) -> bool {
        let ids = self.node_ids();
        ids.iter().enumerate().all(|(i, &a)| {
            ids[i + 1..]
                .iter()
                .all(|&b| self.find_edge(a, b).is_some() || self.find_edge(b, a).is_some())
        })
    }

    /// Two-colours the graph over its edges, ignoring direction.
    ///
    /// Each new component starts on the first side. Returns `None` if some
    /// edge joins two nodes of the same colour (odd cycle or self-loop).
    #[must_use]
    pub fn partite_sets(&self) -> Option<(Vec<NodeId>, Vec<NodeId>)> {
        let adjacency = self.weak_adjacency();
        let mut side: Vec<Option<bool>> = vec![None; adjacency.len()];
        let (mut left, mut right) = (Vec::new(), Vec::new());

        if self.edges().any(|(_, e)| e.source() == e.target()) {
            return None;
        }

        for root in self.node_ids() {
            if side[root.index()].is_some() {
                continue;
            }
            side[root.index()] = Some(false);
            let mut queue = VecDeque::from([root]);
            while let Some(current) = queue.pop_front() {
                let colour = side[current.index()].unwrap_or(false);
                if colour {
                    right.push(current);
                } else {
                    left.push(current);
                }
                for &next in &adjacency[current.index()] {
                    match side[next.index()] {
                        None => {
                            side[next.index()] = Some(!colour);
                            queue.push_back(next);
                        }
                        Some(c) if c == colour => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        Some((left, right))
    }

    /// Returns true if the graph two-colours with both sides non-empty.
    ///
    /// A single node, or a set of isolated nodes, is therefore not
    /// bipartite here.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        self.partite_sets()
            .is_some_and(|(left, right)| !left.is_empty() && !right.is_empty())
    }

    /// Returns the weakly connected components, each in discovery order,
    /// starting from nodes in insertion order.
    #[must_use]
    pub fn weak_components(&self) -> Vec<Vec<NodeId>> {
        let adjacency = self.weak_adjacency();
        let mut seen = vec![false; adjacency.len()];
        let mut components = Vec::new();

        for root in self.node_ids() {
            if seen[root.index()] {
                continue;
            }
            seen[root.index()] = true;
            let mut component = Vec::new();
            let mut stack = vec![root];
            while let Some(current) = stack.pop() {
                component.push(current);
                for &next in adjacency[current.index()].iter().rev() {
                    if !seen[next.index()] {
                        seen[next.index()] = true;
                        stack.push(next);
                    }
                }
            }
            components.push(component);
        }
        components
    }
}
