//! Edge frontiers for conditioned traversal: FIFO or weight-ranked.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::{EdgeId, Graph};

/// Order in which a ranked frontier releases edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeOrder {
    /// Largest edge weight first.
    HeaviestFirst,
    /// Smallest edge weight first.
    LightestFirst,
}

impl EdgeOrder {
    /// Returns `Some(order)` if every edge weight of `graph` is comparable,
    /// `None` otherwise (the caller falls back to insertion order).
    pub(crate) fn usable_for(order: Option<Self>, graph: &Graph) -> Option<Self> {
        let order = order?;
        if graph.edges().any(|(_, e)| e.data().is_nan()) {
            tracing::warn!(
                graph = %graph.name(),
                "Edge weights are not comparable, ignoring edge order"
            );
            return None;
        }
        Some(order)
    }
}

impl fmt::Display for EdgeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaviestFirst => f.write_str("heaviest_first"),
            Self::LightestFirst => f.write_str("lightest_first"),
        }
    }
}

impl FromStr for EdgeOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "heaviest_first" | "heaviest" => Ok(Self::HeaviestFirst),
            "lightest_first" | "lightest" => Ok(Self::LightestFirst),
            other => Err(Error::Config(format!("unknown edge order '{other}'"))),
        }
    }
}

#[derive(Debug)]
struct Ranked {
    weight: f64,
    seq: usize,
    edge: EdgeId,
    order: EdgeOrder,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_weight = match self.order {
            EdgeOrder::HeaviestFirst => self.weight.total_cmp(&other.weight),
            EdgeOrder::LightestFirst => other.weight.total_cmp(&self.weight),
        };
        // Equal weights leave in arrival order.
        by_weight.then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

enum Queue {
    Fifo(VecDeque<EdgeId>),
    Ranked(EdgeOrder, BinaryHeap<Ranked>),
}

/// A set-like edge queue: an edge is accepted at most once.
pub(crate) struct EdgeFrontier {
    queue: Queue,
    seen: FxHashSet<EdgeId>,
    seq: usize,
}

impl EdgeFrontier {
    pub(crate) fn new(order: Option<EdgeOrder>) -> Self {
        let queue = match order {
            Some(order) => Queue::Ranked(order, BinaryHeap::new()),
            None => Queue::Fifo(VecDeque::new()),
        };
        Self {
            queue,
            seen: FxHashSet::default(),
            seq: 0,
        }
    }

    /// Queues an edge; returns false if it was queued before.
    pub(crate) fn push(&mut self, edge: EdgeId, weight: f64) -> bool {
        if !self.seen.insert(edge) {
            return false;
        }
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(edge),
            Queue::Ranked(order, heap) => heap.push(Ranked {
                weight,
                seq: self.seq,
                edge,
                order: *order,
            }),
        }
        self.seq += 1;
        true
    }

    pub(crate) fn pop(&mut self) -> Option<EdgeId> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Ranked(_, heap) => heap.pop().map(|r| r.edge),
        }
    }
}
