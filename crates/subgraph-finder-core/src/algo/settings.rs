//! Settings shared by every algorithm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordering applied to algorithm results after culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep production order.
    #[default]
    None,
    /// By node count, then edge count, smallest first.
    Ascending,
    /// By node count, then edge count, largest first.
    Descending,
    /// By mean edge weight, smallest first.
    AverageWeight,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::AverageWeight => "average_weight",
        };
        f.write_str(name)
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(Self::None),
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "average_weight" => Ok(Self::AverageWeight),
            other => Err(Error::Config(format!("unknown sort order '{other}'"))),
        }
    }
}

/// Minimum result size, result ordering and the display name of the edge
/// weight attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmSettings {
    /// Results with fewer nodes are discarded.
    pub min_node_count: usize,
    /// Ordering of the final result list.
    pub sort_order: SortOrder,
    /// Name of the edge weight attribute, used in result names.
    pub weight_attribute: String,
}

impl Default for AlgorithmSettings {
    fn default() -> Self {
        Self {
            min_node_count: 1,
            sort_order: SortOrder::None,
            weight_attribute: "weight".to_string(),
        }
    }
}

impl AlgorithmSettings {
    /// Sets the minimum result size (builder pattern).
    #[must_use]
    pub fn with_min_node_count(mut self, min_node_count: usize) -> Self {
        self.min_node_count = min_node_count;
        self
    }

    /// Sets the result ordering (builder pattern).
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}
