//! Maximum clique and maximum biclique search (Bron–Kerbosch with pivot).

use std::borrow::Cow;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

use super::cull::cull;
use super::progress::Progress;
use super::settings::AlgorithmSettings;
use super::Algorithm;

/// Configuration for clique search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliqueConfig {
    /// Search complete bipartite subgraphs instead of cliques.
    pub bipartite: bool,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

/// Finds every maximal clique and keeps those of maximum node count.
///
/// Two nodes are adjacent when each lists the other as a neighbor, so every
/// result satisfies [`Graph::is_clique`]. In biclique mode the graph must be
/// bipartite; each side is temporarily completed with zero-weight edges,
/// cliques are enumerated, and the results keep only the original cross
/// edges.
#[derive(Debug, Clone, Default)]
pub struct BronKerbosch {
    config: CliqueConfig,
}

impl BronKerbosch {
    /// Creates the search.
    #[must_use]
    pub fn new(config: CliqueConfig) -> Self {
        Self { config }
    }

    fn label(&self) -> &'static str {
        if self.config.bipartite {
            "Maximum Biclique"
        } else {
            "Maximum Clique"
        }
    }
}

impl Algorithm for BronKerbosch {
    fn name(&self) -> &str {
        "BronKerbosch"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        if graph.node_count() <= 1 {
            progress.finish()?;
            return Ok(Vec::new());
        }

        let work: Cow<'_, Graph> = if self.config.bipartite {
            match complete_sides(graph)? {
                Some(completed) => Cow::Owned(completed),
                None => {
                    tracing::debug!(graph = %graph.name(), "Graph is not bipartite, no bicliques");
                    progress.finish()?;
                    return Ok(Vec::new());
                }
            }
        } else {
            Cow::Borrowed(graph)
        };

        let mut enumerator = Enumerator::new(&work);
        let mut r = Vec::new();
        let mut p: IndexSet<NodeId> = work.node_ids().into_iter().collect();
        let mut x = IndexSet::new();
        let top = enumerator.candidates(&p, &x);
        for (i, &v) in top.iter().enumerate() {
            enumerator.branch(v, &mut r, &mut p, &mut x);
            progress.set_fraction(i + 1, top.len())?;
        }

        let mut found = Vec::with_capacity(enumerator.cliques.len());
        for nodes in &enumerator.cliques {
            // Handles of `work` are valid in `graph`: a copy keeps them.
            let sub = graph.subgraph(nodes, "Clique")?;
            if self.config.bipartite && sub.node_count() > 1 && sub.edge_count() == 0 {
                continue;
            }
            found.push(sub);
        }

        let largest = found.iter().map(Graph::node_count).max().unwrap_or(0);
        let named: Vec<Graph> = found
            .into_iter()
            .filter(|g| g.node_count() == largest)
            .enumerate()
            .map(|(i, g)| {
                g.unique_copy_named(format!("{} {} {}", graph.name(), self.label(), i + 1))
            })
            .collect();

        tracing::debug!(
            graph = %graph.name(),
            maximal = enumerator.cliques.len(),
            maximum = named.len(),
            size = largest,
            "Clique search finished"
        );
        progress.finish()?;
        Ok(cull(named, &self.config.settings))
    }
}

/// Copies a bipartite graph and joins every same-side pair with a
/// zero-weight undirected edge. Returns `None` for a non-bipartite graph.
fn complete_sides(graph: &Graph) -> Result<Option<Graph>> {
    let Some((left, right)) = graph.partite_sets() else {
        return Ok(None);
    };
    if left.is_empty() || right.is_empty() {
        return Ok(None);
    }
    let mut completed = graph.unique_copy_named(graph.name());
    for side in [&left, &right] {
        for (i, &a) in side.iter().enumerate() {
            for &b in &side[i + 1..] {
                completed.add_edge_between(a, b, 0.0, true)?;
            }
        }
    }
    Ok(Some(completed))
}

struct Enumerator {
    /// Mutual adjacency per node slot.
    adjacency: Vec<FxHashSet<NodeId>>,
    /// Position of each node slot in identifier order.
    rank: Vec<usize>,
    cliques: Vec<Vec<NodeId>>,
}

impl Enumerator {
    fn new(graph: &Graph) -> Self {
        let slots = graph.node_bound();
        let mut adjacency = vec![FxHashSet::default(); slots];
        for (id, node) in graph.nodes() {
            for &n in node.neighbors() {
                if n != id && graph.neighbors(n).contains(&id) {
                    adjacency[id.index()].insert(n);
                }
            }
        }
        let mut rank = vec![0; slots];
        for (position, id) in graph.sorted_node_ids().into_iter().enumerate() {
            rank[id.index()] = position;
        }
        Self {
            adjacency,
            rank,
            cliques: Vec::new(),
        }
    }

    /// Returns `P \ N(pivot)` in identifier order, where the pivot is the
    /// first vertex of `P ∪ X` with the most neighbors in `P`.
    fn candidates(&self, p: &IndexSet<NodeId>, x: &IndexSet<NodeId>) -> Vec<NodeId> {
        let mut pivot = None;
        let mut best = 0;
        for &u in p.iter().chain(x.iter()) {
            let reach = p
                .iter()
                .filter(|v| self.adjacency[u.index()].contains(v))
                .count();
            if pivot.is_none() || reach > best {
                pivot = Some(u);
                best = reach;
            }
        }
        let Some(pivot) = pivot else {
            return Vec::new();
        };
        let mut out: Vec<NodeId> = p
            .iter()
            .copied()
            .filter(|v| !self.adjacency[pivot.index()].contains(v))
            .collect();
        out.sort_by_key(|v| self.rank[v.index()]);
        out
    }

    fn branch(
        &mut self,
        v: NodeId,
        r: &mut Vec<NodeId>,
        p: &mut IndexSet<NodeId>,
        x: &mut IndexSet<NodeId>,
    ) {
        let neighbors = &self.adjacency[v.index()];
        let np: IndexSet<NodeId> = p.iter().copied().filter(|w| neighbors.contains(w)).collect();
        let nx: IndexSet<NodeId> = x.iter().copied().filter(|w| neighbors.contains(w)).collect();
        r.push(v);
        self.descend(r, np, nx);
        r.pop();
        p.shift_remove(&v);
        x.insert(v);
    }

    fn descend(&mut self, r: &mut Vec<NodeId>, mut p: IndexSet<NodeId>, mut x: IndexSet<NodeId>) {
        if p.is_empty() && x.is_empty() {
            self.cliques.push(r.clone());
            return;
        }
        for v in self.candidates(&p, &x) {
            self.branch(v, r, &mut p, &mut x);
        }
    }
}
