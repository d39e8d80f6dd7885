//! Set algebra over graphs, by node identifier and edge equality.

use crate::error::Result;

use super::store::Graph;

impl Graph {
    /// Returns a graph holding every node and edge of `self` and `other`.
    ///
    /// Named `"<self> union <other>"`. Edges of `other` equal to an edge of
    /// `self` are not duplicated.
    pub fn union(&self, other: &Graph) -> Result<Graph> {
        let mut result = Graph::new(format!("{} union {}", self.name(), other.name()));
        for (_, node) in self.nodes().chain(other.nodes()) {
            if !result.contains_node(node.identifier()) {
                result.import_node(node)?;
            }
        }
        for (graph, id) in self
            .edge_ids()
            .into_iter()
            .map(|e| (self, e))
            .chain(other.edge_ids().into_iter().map(|e| (other, e)))
        {
            if !result.contains_edge_spec(&graph.edge_spec(id)) {
                result.import_edge(graph, id)?;
            }
        }
        Ok(result)
    }

    /// Returns the nodes present in both graphs and the edges present in
    /// both whose endpoints survive.
    ///
    /// Named `"<self> intersection <other>"`.
    pub fn intersection(&self, other: &Graph) -> Result<Graph> {
        let mut result = Graph::new(format!("{} intersection {}", self.name(), other.name()));
        for (_, node) in self.nodes() {
            if other.contains_node(node.identifier()) {
                result.import_node(node)?;
            }
        }
        for id in self.edge_ids() {
            let spec = self.edge_spec(id);
            if other.contains_edge_spec(&spec)
                && result.contains_node(&spec.source)
                && result.contains_node(&spec.target)
            {
                result.import_edge(self, id)?;
            }
        }
        Ok(result)
    }

    /// Returns the nodes of `self` absent from `other`, with the edges of
    /// `self` absent from `other` whose endpoints survive.
    ///
    /// Named `"<self> difference <other>"`.
    pub fn difference(&self, other: &Graph) -> Result<Graph> {
        let mut result = Graph::new(format!("{} difference {}", self.name(), other.name()));
        for (_, node) in self.nodes() {
            if !other.contains_node(node.identifier()) {
                result.import_node(node)?;
            }
        }
        for id in self.edge_ids() {
            let spec = self.edge_spec(id);
            if !other.contains_edge_spec(&spec)
                && result.contains_node(&spec.source)
                && result.contains_node(&spec.target)
            {
                result.import_edge(self, id)?;
            }
        }
        Ok(result)
    }

    /// Returns true if both graphs hold the same node identifiers and the
    /// same edges (by key and weight), ignoring names and insertion order.
    #[must_use]
    pub fn same_structure(&self, other: &Graph) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        let nodes_match = self
            .nodes()
            .all(|(_, node)| other.contains_node(node.identifier()));
        let edges_match = self.edge_ids().into_iter().all(|id| {
            let spec = self.edge_spec(id);
            other
                .find_edge_by_identifiers(&spec.source, &spec.target)
                .is_some_and(|o| other.edge_key(o) == self.edge_key(id) && other[o].data() == spec.weight)
        });
        nodes_match && edges_match
    }
}
