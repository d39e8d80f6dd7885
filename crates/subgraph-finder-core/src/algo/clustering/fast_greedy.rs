//! Clauset–Newman–Moore greedy modularity maximisation.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::error::Result;
use crate::graph::Graph;

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::communities::Communities;
use super::{community_graphs, ClusteringConfig, Score};

/// ΔQ values of one community towards its neighbors, with the best value
/// kept at the end of `ranked`.
#[derive(Debug, Default, Clone)]
struct Row {
    values: BTreeMap<usize, f64>,
    ranked: BTreeSet<(Score, Reverse<usize>)>,
}

impl Row {
    fn set(&mut self, col: usize, value: f64) {
        if let Some(old) = self.values.insert(col, value) {
            self.ranked.remove(&(Score(old), Reverse(col)));
        }
        self.ranked.insert((Score(value), Reverse(col)));
    }

    fn add(&mut self, col: usize, value: f64) {
        let total = self.values.get(&col).copied().unwrap_or(0.0) + value;
        self.set(col, total);
    }

    fn remove(&mut self, col: usize) {
        if let Some(old) = self.values.remove(&col) {
            self.ranked.remove(&(Score(old), Reverse(col)));
        }
    }

    fn best(&self) -> Option<(f64, usize)> {
        self.ranked
            .last()
            .map(|&(Score(value), Reverse(col))| (value, col))
    }
}

/// A proposed merge of `row` into `col`, valid while `stamp` matches the
/// row's current stamp.
#[derive(Debug)]
struct Candidate {
    dq: Score,
    row: usize,
    col: usize,
    stamp: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dq
            .cmp(&other.dq)
            .then_with(|| other.row.cmp(&self.row))
            .then_with(|| other.col.cmp(&self.col))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Sparse ΔQ matrix with a lazily invalidated global max-heap.
struct DeltaMatrix {
    rows: Vec<Row>,
    a: Vec<f64>,
    alive: Vec<bool>,
    stamps: Vec<u64>,
    heap: BinaryHeap<Candidate>,
}

impl DeltaMatrix {
    fn new(communities: &Communities<'_>) -> Self {
        let graph = communities.graph();
        let n = communities.len();
        let m2 = communities.m2();
        let a: Vec<f64> = (0..n).map(|k| communities.a(k)).collect();
        let mut rows = vec![Row::default(); n];

        for (_, edge) in graph.edges() {
            let (Some(s), Some(t)) = (
                communities.key_of(edge.source()),
                communities.key_of(edge.target()),
            ) else {
                continue;
            };
            if s == t {
                continue;
            }
            let value = communities.edge_value(edge) / m2;
            rows[s].add(t, value);
            rows[t].add(s, value);
        }
        for (i, row) in rows.iter_mut().enumerate() {
            let e: Vec<(usize, f64)> = row.values.iter().map(|(&j, &v)| (j, v)).collect();
            for (j, e_ij) in e {
                row.set(j, 2.0 * (e_ij - a[i] * a[j]));
            }
        }

        let mut matrix = Self {
            rows,
            a,
            alive: vec![true; n],
            stamps: vec![0; n],
            heap: BinaryHeap::new(),
        };
        for i in 0..n {
            matrix.publish(i);
        }
        matrix
    }

    fn publish(&mut self, row: usize) {
        self.stamps[row] += 1;
        if let Some((dq, col)) = self.rows[row].best() {
            self.heap.push(Candidate {
                dq: Score(dq),
                row,
                col,
                stamp: self.stamps[row],
            });
        }
    }

    /// Pops the best live merge; stale entries are discarded silently.
    fn pop_best(&mut self) -> Option<(usize, usize)> {
        while let Some(top) = self.heap.pop() {
            let live = self.alive[top.row]
                && self.alive[top.col]
                && top.stamp == self.stamps[top.row];
            if live {
                return Some((top.row, top.col));
            }
        }
        None
    }

    /// Folds row `i` into row `j` with the CNM update rules.
    fn merge(&mut self, i: usize, j: usize) {
        let row_i = std::mem::take(&mut self.rows[i]);
        let row_j = std::mem::take(&mut self.rows[j]);
        let mut merged = Row::default();

        for (&k, &dq_ik) in &row_i.values {
            if k == j {
                continue;
            }
            let value = match row_j.values.get(&k) {
                Some(&dq_jk) => dq_ik + dq_jk,
                None => dq_ik - 2.0 * self.a[j] * self.a[k],
            };
            merged.set(k, value);
        }
        for (&k, &dq_jk) in &row_j.values {
            if k == i || row_i.values.contains_key(&k) {
                continue;
            }
            merged.set(k, dq_jk - 2.0 * self.a[i] * self.a[k]);
        }

        let touched: Vec<(usize, f64)> = merged.values.iter().map(|(&k, &v)| (k, v)).collect();
        self.rows[j] = merged;
        self.a[j] += self.a[i];
        self.a[i] = 0.0;
        self.alive[i] = false;

        for (k, value) in touched {
            let row = &mut self.rows[k];
            row.remove(i);
            row.set(j, value);
            self.publish(k);
        }
        self.publish(j);
    }
}

/// Greedy agglomerative modularity maximisation (Clauset, Newman, Moore).
///
/// Starts from singletons and repeatedly merges the pair with the largest
/// modularity gain. Stops when one community remains, no adjacent pair is
/// left, or a merge fails to raise modularity; a merge that lowered it is
/// undone.
#[derive(Debug, Clone, Default)]
pub struct FastGreedy {
    config: ClusteringConfig,
}

impl FastGreedy {
    /// Creates the detector.
    #[must_use]
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Returns the best partition found.
    pub fn partition<'g>(
        &self,
        graph: &'g Graph,
        progress: &mut Progress<'_>,
    ) -> Result<Communities<'g>> {
        let mut communities = Communities::singletons(graph, self.config.weighted);
        let n = communities.len();
        if n == 0 || communities.m2() <= 0.0 {
            return Ok(communities);
        }

        let mut matrix = DeltaMatrix::new(&communities);
        let mut current_q = communities.modularity();

        while communities.len() > 1 {
            let Some((i, j)) = matrix.pop_best() else {
                break;
            };
            let previous = communities.clone();
            communities.merge(j, i);
            let merged_q = communities.modularity();
            tracing::trace!(from = i, into = j, q = merged_q, "FastGreedy merge");

            if merged_q < current_q {
                communities = previous;
                break;
            }
            matrix.merge(i, j);
            progress.set_fraction(n - communities.len(), n)?;
            if merged_q == current_q {
                break;
            }
            current_q = merged_q;
        }
        Ok(communities)
    }
}

impl Algorithm for FastGreedy {
    fn name(&self) -> &str {
        "FastGreedy"
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
            "FastGreedy finished"
        );
        let results = community_graphs(graph, self.name(), &communities.to_groups(), &self.config)?;
        progress.finish()?;
        Ok(cull(results, &self.config.settings))
    }
}
