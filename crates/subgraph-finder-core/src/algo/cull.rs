//! Result post-processing: minimum size, duplicate removal, ordering.

use rustc_hash::FxHashSet;

use crate::graph::{EdgeKey, Graph};

use super::settings::{AlgorithmSettings, SortOrder};

/// Node identifiers and edge keys of one result.
struct Footprint {
    nodes: FxHashSet<String>,
    edges: FxHashSet<EdgeKey>,
}

impl Footprint {
    fn of(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|(_, n)| n.identifier().to_string())
                .collect(),
            edges: graph
                .edge_ids()
                .into_iter()
                .map(|e| graph.edge_key(e))
                .collect(),
        }
    }

    fn covers(&self, other: &Footprint) -> bool {
        self.nodes.len() >= other.nodes.len()
            && self.edges.len() >= other.edges.len()
            && other.nodes.is_subset(&self.nodes)
            && other.edges.is_subset(&self.edges)
    }
}

/// Filters, de-duplicates and orders algorithm results.
///
/// 1. Results with fewer than `min_node_count` nodes are dropped.
/// 2. A result is dropped when another result contains all of its nodes
///    and all of its edges and is strictly larger, in nodes or in edges,
///    wherever it sits in the list; of identical results the first one is
///    kept.
/// 3. The survivors are stably sorted by `sort_order`.
///
/// Culling an already culled list returns it unchanged.
#[must_use]
pub fn cull(results: Vec<Graph>, settings: &AlgorithmSettings) -> Vec<Graph> {
    let produced = results.len();
    let sized: Vec<Graph> = results
        .into_iter()
        .filter(|g| g.node_count() >= settings.min_node_count)
        .collect();

    let footprints: Vec<Footprint> = sized.iter().map(Footprint::of).collect();
    let duplicate: Vec<bool> = (0..footprints.len())
        .map(|i| {
            footprints.iter().enumerate().any(|(j, other)| {
                j != i
                    && other.covers(&footprints[i])
                    && (j < i || !footprints[i].covers(other))
            })
        })
        .collect();

    let mut kept: Vec<Graph> = sized
        .into_iter()
        .zip(duplicate)
        .filter_map(|(g, dup)| (!dup).then_some(g))
        .collect();

    match settings.sort_order {
        SortOrder::None => {}
        SortOrder::Ascending => {
            kept.sort_by_key(|g| (g.node_count(), g.edge_count()));
        }
        SortOrder::Descending => {
            kept.sort_by(|a, b| {
                (b.node_count(), b.edge_count()).cmp(&(a.node_count(), a.edge_count()))
            });
        }
        SortOrder::AverageWeight => {
            kept.sort_by(|a, b| a.average_edge_weight().total_cmp(&b.average_edge_weight()));
        }
    }

    tracing::debug!(produced, kept = kept.len(), "Culled results");
    kept
}
