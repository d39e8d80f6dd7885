//! Walktrap: agglomerative clustering by random-walk distance
//! (Pons & Latapy).

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::Result;
use crate::graph::Graph;

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::communities::Communities;
use super::{community_graphs, ClusteringConfig, Score};

/// Random-walk transition data per community index (identifier order).
struct Walker {
    /// Normaliser `d(i)`: degree + 1, or weight + weight / degree.
    d: Vec<f64>,
    /// Weight of the implicit self-loop.
    stay: Vec<f64>,
    /// Walkable `(neighbor, weight)` pairs.
    out: Vec<Vec<(usize, f64)>>,
}

impl Walker {
    #[allow(clippy::cast_precision_loss)]
    fn new(communities: &Communities<'_>) -> Self {
        let graph = communities.graph();
        let n = communities.len();
        let weighted = communities.is_weighted();
        let mut d = vec![1.0; n];
        let mut stay = vec![1.0; n];
        let mut out = vec![Vec::new(); n];

        for (k, members) in communities.groups() {
            let Some(&id) = members.first() else {
                continue;
            };
            let node = &graph[id];
            let degree = node.degree() as f64;
            if weighted {
                if node.degree() > 0 && node.weight() > 0.0 {
                    stay[k] = node.weight() / degree;
                    d[k] = node.weight() + stay[k];
                }
            } else {
                d[k] = degree + 1.0;
            }
            for &edge in node.edges() {
                let Some(j) = communities.key_of(graph[edge].opposite(id)) else {
                    continue;
                };
                let weight = communities.edge_value(&graph[edge]);
                out[k].push((j, weight));
            }
        }
        Self { d, stay, out }
    }

    /// Probability vector of a `steps`-long walk from node `start`,
    /// scaled by `1 / sqrt(d)`.
    fn profile(&self, start: usize, steps: usize) -> Vec<f64> {
        let n = self.d.len();
        let mut current = vec![0.0; n];
        current[start] = 1.0;
        for _ in 0..steps {
            let mut next = vec![0.0; n];
            for (i, &p) in current.iter().enumerate() {
                if p == 0.0 {
                    continue;
                }
                let share = p / self.d[i];
                next[i] += share * self.stay[i];
                for &(j, w) in &self.out[i] {
                    next[j] += share * w;
                }
            }
            current = next;
        }
        for (p, d) in current.iter_mut().zip(&self.d) {
            *p /= d.sqrt();
        }
        current
    }
}

/// `σ(C1, C2) = |C1||C2| / (|C1| + |C2|) · Σ (P1 − P2)²`.
#[allow(clippy::cast_precision_loss)]
fn sigma(p1: &[f64], size1: usize, p2: &[f64], size2: usize) -> f64 {
    let distance: f64 = p1.iter().zip(p2).map(|(a, b)| (a - b) * (a - b)).sum();
    let (s1, s2) = (size1 as f64, size2 as f64);
    distance * s1 * s2 / (s1 + s2)
}

#[derive(Debug, PartialEq, Eq)]
struct Pair {
    sigma: Score,
    first: usize,
    second: usize,
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.sigma, self.first, self.second).cmp(&(other.sigma, other.first, other.second))
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walktrap community detection.
///
/// Each node starts as its own community. Adjacent communities are merged
/// in order of smallest `σ`; distances to neighbors of both merged
/// communities are updated with the Lance–Williams–Jambu formula, others
/// are recomputed from the merged probability vector. The partition with
/// the highest modularity along the way is returned.
#[derive(Debug, Clone, Default)]
pub struct Walktrap {
    config: ClusteringConfig,
}

impl Walktrap {
    /// Creates the detector.
    #[must_use]
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Returns the best partition found.
    #[allow(clippy::cast_precision_loss)]
    pub fn partition<'g>(
        &self,
        graph: &'g Graph,
        progress: &mut Progress<'_>,
    ) -> Result<Communities<'g>> {
        let mut communities = Communities::singletons(graph, self.config.weighted);
        let n = communities.len();
        if n == 0 {
            return Ok(communities);
        }

        let walker = Walker::new(&communities);
        let steps = self.config.steps.max(1);
        let mut vectors: Vec<Vec<f64>> = (0..n).map(|k| walker.profile(k, steps)).collect();
        let mut sizes = vec![1usize; n];
        let mut alive = vec![true; n];
        let mut adjacent: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
        let mut heap = BinaryHeap::new();

        let weak = graph.weak_adjacency();
        for (k, members) in communities.groups() {
            let Some(&id) = members.first() else {
                continue;
            };
            for &other in &weak[id.index()] {
                let Some(l) = communities.key_of(other) else {
                    continue;
                };
                if l > k {
                    let s = sigma(&vectors[k], 1, &vectors[l], 1);
                    adjacent[k].insert(l, s);
                    adjacent[l].insert(k, s);
                    heap.push(Reverse(Pair {
                        sigma: Score(s),
                        first: k,
                        second: l,
                    }));
                }
            }
        }

        let mut best = communities.clone();
        let mut best_q = communities.modularity();

        while let Some(Reverse(pair)) = heap.pop() {
            let (a, b) = (pair.first, pair.second);
            let current = adjacent[a].get(&b).copied();
            if !alive[a] || !alive[b] || current.map(Score) != Some(pair.sigma) {
                continue;
            }
            let merged_sigma = pair.sigma.0;
            let (size_a, size_b) = (sizes[a], sizes[b]);
            let total = (size_a + size_b) as f64;

            let merged: Vec<f64> = vectors[a]
                .iter()
                .zip(&vectors[b])
                .map(|(pa, pb)| (size_a as f64 * pa + size_b as f64 * pb) / total)
                .collect();
            vectors[a] = merged;
            vectors[b] = Vec::new();
            sizes[a] = size_a + size_b;
            alive[b] = false;
            communities.merge(a, b);

            let old_a = std::mem::take(&mut adjacent[a]);
            let old_b = std::mem::take(&mut adjacent[b]);
            let mut around: Vec<usize> = old_a.keys().chain(old_b.keys()).copied().collect();
            around.sort_unstable();
            around.dedup();

            for k in around {
                if k == a || k == b || !alive[k] {
                    continue;
                }
                let size_k = sizes[k];
                let updated = match (old_a.get(&k), old_b.get(&k)) {
                    (Some(&s1), Some(&s2)) => {
                        ((size_a + size_k) as f64 * s1 + (size_b + size_k) as f64 * s2
                            - size_k as f64 * merged_sigma)
                            / (size_a + size_b + size_k) as f64
                    }
                    _ => sigma(&vectors[a], sizes[a], &vectors[k], size_k),
                };
                adjacent[k].remove(&b);
                adjacent[k].insert(a, updated);
                adjacent[a].insert(k, updated);
                let (first, second) = if a < k { (a, k) } else { (k, a) };
                heap.push(Reverse(Pair {
                    sigma: Score(updated),
                    first,
                    second,
                }));
            }

            let q = communities.modularity();
            tracing::trace!(into = a, from = b, sigma = merged_sigma, q, "Walktrap merge");
            if q > best_q {
                best_q = q;
                best = communities.clone();
            }
            progress.set_fraction(n - communities.len(), n)?;
        }
        Ok(best)
    }
}

impl Algorithm for Walktrap {
    fn name(&self) -> &str {
        "Walktrap"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let communities = self.partition(graph, progress)?;
        tracing::debug!(
            graph = %graph.name(),
            communities = communities.len(),
            modularity = communities.modularity(),
            steps = self.config.steps,
            "Walktrap finished"
        );
        let results = community_graphs(graph, self.name(), &communities.to_groups(), &self.config)?;
        progress.finish()?;
        Ok(cull(results, &self.config.settings))
    }
}
