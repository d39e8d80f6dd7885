//! Property-based tests for graph bookkeeping and result culling.

use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use subgraph_finder_core::algo::{
    cull, Algorithm, AlgorithmSettings, ConditionedSearch, ConnectedComponents, Kruskal,
    SearchConfig, SortOrder, SpanningTreeConfig,
};
use subgraph_finder_core::graph::{Condition, Graph};
use subgraph_finder_core::Error;

const GRAPH_PROP_CASES: u32 = 128;

/// Raw edge tuple: endpoint indices, integral weight, undirected flag.
type RawEdge = (usize, usize, u8, bool);

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1_usize..9).prop_flat_map(|n| {
        vec((0..n, 0..n, any::<u8>(), any::<bool>()), 0..20).prop_map(move |edges| build(n, &edges))
    })
}

fn build(n: usize, edges: &[RawEdge]) -> Graph {
    let mut graph = Graph::new("random");
    for i in 0..n {
        graph.add_node(format!("N{i}")).unwrap();
    }
    for &(s, t, w, undirected) in edges {
        if s == t {
            continue;
        }
        match graph.add_edge(&format!("N{s}"), &format!("N{t}"), f64::from(w % 10), undirected) {
            Ok(_) | Err(Error::EdgeExists(_)) => {}
            Err(e) => panic!("unexpected error {e}"),
        }
    }
    graph
}

fn sort_order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::None),
        Just(SortOrder::Ascending),
        Just(SortOrder::Descending),
        Just(SortOrder::AverageWeight),
    ]
}

fn names(results: &[Graph]) -> Vec<String> {
    results.iter().map(|g| g.name().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: GRAPH_PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn degree_matches_incident_edges(graph in graph_strategy()) {
        for (_, node) in graph.nodes() {
            prop_assert_eq!(node.degree(), node.edges().len());
            prop_assert_eq!(node.degree(), node.neighbors().len());
            let weight: f64 = node.edges().iter().map(|&e| graph[e].data()).sum();
            prop_assert_eq!(node.weight(), weight);
        }
    }

    #[test]
    fn total_weight_is_edge_sum(graph in graph_strategy()) {
        let sum: f64 = graph.edges().map(|(_, e)| e.data()).sum();
        prop_assert_eq!(graph.total_weight(), sum);
        prop_assert_eq!(graph.edges().count(), graph.edge_count());
    }

    #[test]
    fn removing_a_node_removes_its_edges(graph in graph_strategy(), pick in any::<usize>()) {
        let ids = graph.node_ids();
        let victim = ids[pick % ids.len()];
        let touching = graph
            .edges()
            .filter(|(_, e)| e.source() == victim || e.target() == victim)
            .count();

        let mut after = graph.clone();
        prop_assert!(after.remove_node(victim).is_some());
        prop_assert_eq!(after.edge_count(), graph.edge_count() - touching);
        prop_assert!(after.edges().all(|(_, e)| e.source() != victim && e.target() != victim));
        for (_, node) in after.nodes() {
            prop_assert!(!node.neighbors().contains(&victim));
            prop_assert_eq!(node.degree(), node.edges().len());
        }
    }

    #[test]
    fn cull_is_a_fixed_point(
        graph in graph_strategy(),
        order in sort_order_strategy(),
        min_node_count in 0_usize..4,
    ) {
        let mut produced = ConnectedComponents::default().run(&graph).unwrap();
        let search = ConditionedSearch::breadth_first(SearchConfig::new(vec![Condition::Bipartite]));
        produced.extend(search.run(&graph).unwrap());

        let settings = AlgorithmSettings::default()
            .with_min_node_count(min_node_count)
            .with_sort_order(order);
        let once = cull(produced, &settings);
        let twice = cull(once.clone(), &settings);
        prop_assert_eq!(names(&once), names(&twice));
        prop_assert!(once.iter().all(|g| g.node_count() >= min_node_count));
    }

    #[test]
    fn clique_search_results_are_cliques(graph in graph_strategy()) {
        let search = ConditionedSearch::depth_first(SearchConfig::new(vec![Condition::Clique]));
        for result in search.run(&graph).unwrap() {
            prop_assert!(result.is_clique());
        }
    }

    #[test]
    fn spanning_forest_size(graph in graph_strategy()) {
        let forest = Kruskal::new(SpanningTreeConfig::default()).run(&graph).unwrap();
        prop_assert_eq!(forest.len(), 1);
        let components = graph.weak_components().len();
        prop_assert_eq!(forest[0].node_count(), graph.node_count());
        prop_assert_eq!(forest[0].edge_count(), graph.node_count() - components);
    }
}
