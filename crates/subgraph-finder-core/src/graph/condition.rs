//! Structural predicates a [`ConditionedGraph`](super::ConditionedGraph)
//! must keep satisfying.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::store::Graph;

/// A predicate over a whole graph.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Every node is adjacent to every other node.
    Clique,
    /// Every pair of nodes is joined in at least one direction.
    DirectedClique,
    /// The graph two-colours into two non-empty sides; a lone node passes.
    Bipartite,
    /// Caller-supplied predicate.
    #[serde(skip)]
    Custom(CustomCondition),
}

impl Condition {
    /// Wraps a closure as a condition.
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Graph) -> bool + Send + Sync + 'static,
    {
        Self::Custom(CustomCondition {
            name: name.into(),
            predicate: Arc::new(predicate),
        })
    }

    /// Evaluates the condition.
    #[must_use]
    pub fn is_satisfied_by(&self, graph: &Graph) -> bool {
        match self {
            Self::Clique => graph.is_clique(),
            Self::DirectedClique => graph.is_directed_clique(),
            Self::Bipartite => graph.node_count() <= 1 || graph.is_bipartite(),
            Self::Custom(custom) => (custom.predicate)(graph),
        }
    }

    /// Returns the condition name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Clique => "clique",
            Self::DirectedClique => "directed_clique",
            Self::Bipartite => "bipartite",
            Self::Custom(custom) => &custom.name,
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(custom) => f.debug_tuple("Custom").field(&custom.name).finish(),
            other => f.write_str(other.name()),
        }
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(&a.predicate, &b.predicate),
            (Self::Custom(_), _) | (_, Self::Custom(_)) => false,
            (a, b) => a.name() == b.name(),
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "clique" => Ok(Self::Clique),
            "directed_clique" | "dclique" => Ok(Self::DirectedClique),
            "bipartite" => Ok(Self::Bipartite),
            other => Err(Error::Config(format!("unknown condition '{other}'"))),
        }
    }
}

/// A named closure condition.
#[derive(Clone)]
pub struct CustomCondition {
    name: String,
    predicate: Arc<dyn Fn(&Graph) -> bool + Send + Sync>,
}
