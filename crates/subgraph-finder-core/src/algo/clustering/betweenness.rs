//! Brandes edge betweenness.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::FxHashMap;

use crate::graph::{EdgeId, Graph, NodeId};

use super::Score;

/// Computes the edge betweenness of every edge.
///
/// Shortest paths follow walkable edges (outgoing directed edges and
/// undirected edges both ways). Unweighted mode uses BFS hop counts,
/// weighted mode uses Dijkstra over edge data. Scores are halved, as each
/// undirected path is found from both ends.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn edge_betweenness(graph: &Graph, weighted: bool) -> FxHashMap<EdgeId, f64> {
    let mut scores: FxHashMap<EdgeId, f64> = graph.edge_ids().into_iter().map(|e| (e, 0.0)).collect();
    let bound = graph.node_bound();

    for source in graph.node_ids() {
        let mut paths = ShortestPaths::new(bound, source);
        if weighted {
            paths.dijkstra(graph);
        } else {
            paths.breadth_first(graph);
        }

        let mut delta = vec![0.0; bound];
        while let Some(w) = paths.order.pop() {
            for &(v, edge) in &paths.predecessors[w.index()] {
                let share =
                    paths.sigma[v.index()] / paths.sigma[w.index()] * (1.0 + delta[w.index()]);
                *scores.entry(edge).or_insert(0.0) += share;
                delta[v.index()] += share;
            }
        }
    }

    for score in scores.values_mut() {
        *score /= 2.0;
    }
    scores
}

/// Single-source shortest-path DAG for Brandes accumulation.
struct ShortestPaths {
    source: NodeId,
    /// Nodes in non-decreasing distance order.
    order: Vec<NodeId>,
    predecessors: Vec<Vec<(NodeId, EdgeId)>>,
    sigma: Vec<f64>,
    distance: Vec<Option<f64>>,
}

impl ShortestPaths {
    fn new(bound: usize, source: NodeId) -> Self {
        let mut sigma = vec![0.0; bound];
        sigma[source.index()] = 1.0;
        let mut distance = vec![None; bound];
        distance[source.index()] = Some(0.0);
        Self {
            source,
            order: Vec::new(),
            predecessors: vec![Vec::new(); bound],
            sigma,
            distance,
        }
    }

    fn breadth_first(&mut self, graph: &Graph) {
        let mut queue = VecDeque::from([self.source]);
        while let Some(v) = queue.pop_front() {
            self.order.push(v);
            let dv = self.distance[v.index()].unwrap_or(0.0);
            for &edge in graph[v].edges() {
                let w = graph[edge].opposite(v);
                if w == v {
                    continue;
                }
                if self.distance[w.index()].is_none() {
                    self.distance[w.index()] = Some(dv + 1.0);
                    queue.push_back(w);
                }
                if self.distance[w.index()] == Some(dv + 1.0) {
                    self.sigma[w.index()] += self.sigma[v.index()];
                    self.predecessors[w.index()].push((v, edge));
                }
            }
        }
    }

    fn dijkstra(&mut self, graph: &Graph) {
        let mut settled = vec![false; self.sigma.len()];
        let mut heap = BinaryHeap::from([Reverse((Score(0.0), self.source))]);
        while let Some(Reverse((Score(dv), v))) = heap.pop() {
            if settled[v.index()] {
                continue;
            }
            settled[v.index()] = true;
            self.order.push(v);
            for &edge in graph[v].edges() {
                let w = graph[edge].opposite(v);
                if w == v || settled[w.index()] {
                    continue;
                }
                let alt = dv + graph[edge].data();
                match self.distance[w.index()] {
                    Some(dw) if alt > dw => {}
                    Some(dw) if alt == dw => {
                        self.sigma[w.index()] += self.sigma[v.index()];
                        self.predecessors[w.index()].push((v, edge));
                    }
                    _ => {
                        self.distance[w.index()] = Some(alt);
                        self.sigma[w.index()] = self.sigma[v.index()];
                        self.predecessors[w.index()] = vec![(v, edge)];
                        heap.push(Reverse((Score(alt), w)));
                    }
                }
            }
        }
    }
}
