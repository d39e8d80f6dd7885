//! Minimum and maximum spanning trees (forests on disconnected input).

mod disjoint_set;
mod kruskal;
mod prim;

#[cfg(test)]
mod spanning_tree_tests;

use serde::{Deserialize, Serialize};

pub use disjoint_set::DisjointSet;
pub use kruskal::Kruskal;
pub use prim::Prim;

use super::settings::AlgorithmSettings;

/// Configuration for spanning-tree search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanningTreeConfig {
    /// Build a maximum instead of a minimum spanning tree.
    pub max: bool,
    /// Edge weight bound: edges lighter than it are ignored for a maximum
    /// tree, heavier ones for a minimum tree. Unbounded when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Root for Prim; the first node by identifier when unset or unknown.
    #[serde(alias = "startNode", skip_serializing_if = "Option::is_none")]
    pub start_node: Option<String>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

impl SpanningTreeConfig {
    /// Configures a maximum spanning tree (builder pattern).
    #[must_use]
    pub fn maximum(mut self) -> Self {
        self.max = true;
        self
    }

    /// Sets the weight bound (builder pattern).
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets Prim's start node (builder pattern).
    #[must_use]
    pub fn with_start_node(mut self, start: impl Into<String>) -> Self {
        self.start_node = Some(start.into());
        self
    }

    /// Returns true if an edge of this weight may enter the tree.
    fn admits(&self, weight: f64) -> bool {
        let bound = self
            .threshold
            .unwrap_or(if self.max { f64::NEG_INFINITY } else { f64::INFINITY });
        if self.max {
            weight >= bound
        } else {
            weight <= bound
        }
    }

    /// Orders weights so that preferred edges come first.
    fn prefer(&self, a: f64, b: f64) -> std::cmp::Ordering {
        if self.max {
            b.total_cmp(&a)
        } else {
            a.total_cmp(&b)
        }
    }

    fn tree_name(&self, graph: &str, algorithm: &str, total: f64) -> String {
        format!(
            "{} {} {} Spanning Tree for attribute {} W(T) = {:?}",
            graph,
            algorithm,
            if self.max { "Maximum" } else { "Minimum" },
            self.settings.weight_attribute,
            total
        )
    }
}
