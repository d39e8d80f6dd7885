//! Divisive community detection by repeated removal of the edge with the
//! highest betweenness.

use crate::error::Result;
use crate::graph::{EdgeId, Graph, NodeId};

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::betweenness::edge_betweenness;
use super::communities::Communities;
use super::{community_graphs, ClusteringConfig};

/// Girvan–Newman edge-removal clustering.
///
/// Works on a copy of the input. After each removal the weak components
/// are recomputed; whenever their number changes, the partition's
/// modularity is scored against the original graph and the best one is
/// kept. Progress is the fraction of edges removed.
///
/// Results are named `"<graph> Edge Betweenness Community <i>"`.
#[derive(Debug, Clone, Default)]
pub struct GirvanNewman {
    config: ClusteringConfig,
}

impl GirvanNewman {
    /// Creates the detector.
    #[must_use]
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Returns the best partition seen, or `None` for a graph without edges.
    pub fn partition<'g>(
        &self,
        graph: &'g Graph,
        progress: &mut Progress<'_>,
    ) -> Result<Option<Communities<'g>>> {
        let mut work = graph.clone();
        let total = work.edge_count();
        let mut best: Option<Communities<'g>> = None;
        let mut component_count = None;

        while work.edge_count() > 0 {
            let scores = edge_betweenness(&work, self.config.weighted);
            let Some(target) = highest(&work, |e| scores.get(&e).copied().unwrap_or(0.0)) else {
                break;
            };
            work.remove_edge(target);

            // Handles of the copy are valid in the original graph.
            let components: Vec<Vec<NodeId>> = work.weak_components();
            if component_count != Some(components.len()) {
                component_count = Some(components.len());
                let candidate = Communities::from_groups(graph, self.config.weighted, components);
                let q = candidate.modularity();
                tracing::trace!(communities = candidate.len(), q, "GirvanNewman split");
                if best.as_ref().map_or(true, |b| q > b.modularity()) {
                    best = Some(candidate);
                }
            }
            progress.set_fraction(total - work.edge_count(), total)?;
        }
        Ok(best)
    }
}

/// Returns the first edge with the strictly largest score.
fn highest(graph: &Graph, score: impl Fn(EdgeId) -> f64) -> Option<EdgeId> {
    let mut best: Option<(EdgeId, f64)> = None;
    for edge in graph.edge_ids() {
        let value = score(edge);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((edge, value));
        }
    }
    best.map(|(edge, _)| edge)
}

impl Algorithm for GirvanNewman {
    fn name(&self) -> &str {
        "Edge Betweenness"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let Some(communities) = self.partition(graph, progress)? else {
            progress.finish()?;
            return Ok(Vec::new());
        };
        tracing::debug!(
            graph = %graph.name(),
            communities = communities.len(),
            modularity = communities.modularity(),
            "GirvanNewman finished"
        );
        let results = community_graphs(graph, self.name(), &communities.to_groups(), &self.config)?;
        progress.finish()?;
        Ok(cull(results, &self.config.settings))
    }
}
