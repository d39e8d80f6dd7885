//! A graph that only accepts additions keeping its conditions satisfied.

use std::ops::Deref;

use crate::error::Result;

use super::condition::Condition;
use super::description::{EdgeSpec, NodeSpec, PartialGraph};
use super::store::Graph;

/// A [`Graph`] guarded by a list of [`Condition`]s.
///
/// With `force_on_add` (the default) every addition is first applied to a
/// scratch copy; only if all conditions hold on the copy does it replace
/// the live graph. A rejected addition leaves the graph untouched.
#[derive(Debug, Clone)]
pub struct ConditionedGraph {
    graph: Graph,
    conditions: Vec<Condition>,
    force_on_add: bool,
}

impl ConditionedGraph {
    /// Creates an empty conditioned graph.
    #[must_use]
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            graph: Graph::new(name),
            conditions,
            force_on_add: true,
        }
    }

    /// Enables or disables condition checks on addition (builder pattern).
    #[must_use]
    pub fn with_force_on_add(mut self, force: bool) -> Self {
        self.force_on_add = force;
        self
    }

    /// Returns the conditions.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns true if additions are checked.
    #[must_use]
    pub fn force_on_add(&self) -> bool {
        self.force_on_add
    }

    /// Returns true if the current graph satisfies every condition.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.conditions.iter().all(|c| c.is_satisfied_by(&self.graph))
    }

    /// Applies an addition atomically.
    ///
    /// Returns `Ok(false)` when a condition rejects the result; nothing is
    /// added in that case.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from [`Graph::extend`] (existing node,
    /// absent endpoint); the graph is left untouched.
    pub fn try_extend(&mut self, addition: &PartialGraph) -> Result<bool> {
        if !self.force_on_add || self.conditions.is_empty() {
            self.graph.extend(addition)?;
            return Ok(true);
        }

        let mut scratch = self.graph.clone();
        scratch.extend(addition)?;
        if let Some(failed) = self.conditions.iter().find(|c| !c.is_satisfied_by(&scratch)) {
            tracing::trace!(
                graph = %self.graph.name(),
                condition = failed.name(),
                "Addition rejected"
            );
            return Ok(false);
        }
        self.graph = scratch;
        Ok(true)
    }

    /// Adds a single node under the conditions.
    pub fn try_add_node(&mut self, node: NodeSpec) -> Result<bool> {
        let mut addition = PartialGraph::new();
        addition.push_node(node);
        self.try_extend(&addition)
    }

    /// Adds a single edge under the conditions.
    pub fn try_add_edge(&mut self, edge: EdgeSpec) -> Result<bool> {
        let mut addition = PartialGraph::new();
        addition.push_edge(edge);
        self.try_extend(&addition)
    }

    /// Returns the guarded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the wrapper and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl Deref for ConditionedGraph {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.graph
    }
}
