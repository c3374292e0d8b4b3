use hub_sssp::algorithm::bellman_ford::BellmanFord;
use hub_sssp::algorithm::dijkstra::Dijkstra;
use hub_sssp::algorithm::path;
use hub_sssp::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use hub_sssp::graph::generators::{grid_graph, random_connected_graph};
use hub_sssp::graph::{Graph, UndirectedGraph};
use hub_sssp::Error;

type TestGraph = UndirectedGraph<&'static str, i64>;

// a-b(5) a-g(21) b-c(8) b-d(12) c-e(7) d-e(9) d-f(11) e-f(6) f-g(15)
fn scenario_graph() -> TestGraph {
    UndirectedGraph::from_edges(vec![
        ("a", "b", 5),
        ("a", "g", 21),
        ("b", "c", 8),
        ("b", "d", 12),
        ("c", "e", 7),
        ("d", "e", 9),
        ("d", "f", 11),
        ("e", "f", 6),
        ("f", "g", 15),
    ])
}

fn dijkstra<G: Graph<i64>>(graph: &G, source: usize) -> hub_sssp::Result<ShortestPathResult<i64>> {
    Dijkstra::new().compute_shortest_paths(graph, source)
}

fn bellman_ford<G: Graph<i64>>(graph: &G, source: usize) -> hub_sssp::Result<ShortestPathResult<i64>> {
    BellmanFord::new().compute_shortest_paths(graph, source)
}

fn idx(graph: &TestGraph, label: &'static str) -> usize {
    graph.index_of(&label).unwrap()
}

#[test]
fn test_scenario_distances_from_hub() {
    let graph = scenario_graph();
    let source = idx(&graph, "a");

    let result = dijkstra(&graph, source).unwrap();
    let expected = [("a", 0), ("b", 5), ("c", 13), ("d", 17), ("e", 20), ("f", 26), ("g", 21)];
    for (label, dist) in expected {
        assert_eq!(
            result.distance(idx(&graph, label)),
            Some(dist),
            "Wrong distance from a to {}",
            label
        );
    }
}

#[test]
fn test_solvers_agree_on_scenario() {
    let graph = scenario_graph();

    for source in 0..graph.vertex_count() {
        let d = dijkstra(&graph, source).unwrap();
        let bf = bellman_ford(&graph, source).unwrap();
        assert_eq!(d.distances, bf.distances, "Distances differ from source {}", source);
    }

    // No ties from the hub, so both settle on the same tree
    let hub = idx(&graph, "a");
    let d = dijkstra(&graph, hub).unwrap();
    let bf = bellman_ford(&graph, hub).unwrap();
    assert_eq!(d.predecessors, bf.predecessors);
}

#[test]
fn test_solvers_agree_on_random_graphs() {
    for seed in 0..20 {
        let graph = random_connected_graph(40, 60, 50, seed);
        let d = dijkstra(&graph, 0).unwrap();
        let bf = bellman_ford(&graph, 0).unwrap();

        assert_eq!(d.distances, bf.distances, "Distances differ for seed {}", seed);
        assert_eq!(d.reachable_count(), 40, "Generated graph should be connected");
    }
}

#[test]
fn test_source_invariants() {
    let graph = random_connected_graph(25, 30, 20, 3);

    for source in [0, 7, 24] {
        for result in [dijkstra(&graph, source).unwrap(), bellman_ford(&graph, source).unwrap()] {
            assert_eq!(result.source, source);
            assert_eq!(result.distances[source], Some(0), "Source distance should be zero");
            assert_eq!(result.predecessors[source], None, "Source should have no predecessor");
        }
    }
}

#[test]
fn test_grid_distances() {
    let width = 5;
    let graph = grid_graph(width, 4, 2);
    let result = dijkstra(&graph, 0).unwrap();

    for y in 0..4 {
        for x in 0..width {
            assert_eq!(result.distance(y * width + x), Some(2 * (x + y) as i64));
        }
    }
}

#[test]
fn test_reconstructed_paths_follow_edges() {
    let graph = random_connected_graph(30, 45, 40, 9);
    let result = dijkstra(&graph, 0).unwrap();

    for target in 0..graph.vertex_count() {
        let vertices = <Dijkstra as ShortestPathAlgorithm<i64, UndirectedGraph<String, i64>>>::get_path(
            &Dijkstra::new(),
            &result,
            target,
        )
        .expect("Every vertex is reachable");

        assert_eq!(vertices[0], 0, "Path should start at source");
        assert_eq!(*vertices.last().unwrap(), target, "Path should end at target");

        // Length is one more than the number of predecessor hops
        let mut hops = 0;
        let mut current = target;
        while let Some(pred) = result.predecessors[current] {
            hops += 1;
            current = pred;
        }
        assert_eq!(vertices.len(), hops + 1);

        // Consecutive vertices are adjacent and weights sum to the distance
        let mut total = 0;
        for pair in vertices.windows(2) {
            let weight = graph
                .neighbors(pair[0])
                .filter(|&(v, _)| v == pair[1])
                .map(|(_, w)| w)
                .min()
                .expect("Path should only use existing edges");
            total += weight;
        }
        assert_eq!(Some(total), result.distance(target));
    }
}

#[test]
fn test_disconnected_vertices_are_unreachable() {
    let mut graph = scenario_graph();
    graph.add_edge("x", "y", 3);

    let result = bellman_ford(&graph, idx(&graph, "a")).unwrap();
    assert_eq!(result.distance(idx(&graph, "x")), None);
    assert_eq!(result.predecessors[idx(&graph, "y")], None);
    assert!(path::reconstruct(result.source, idx(&graph, "x"), &result.predecessors).is_none());
}

#[test]
fn test_negative_triangle_detected_from_every_node() {
    let graph: TestGraph = UndirectedGraph::from_edges(vec![("a", "b", 1), ("b", "c", -3), ("c", "a", 1)]);

    for source in 0..graph.vertex_count() {
        match bellman_ford(&graph, source) {
            Err(Error::NegativeCycle { vertex }) => assert_eq!(vertex, source),
            other => panic!("Expected a negative cycle from {}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_single_negative_edge_is_a_cycle() {
    // Undirected: a -> b -> a already loops with negative weight
    let graph: TestGraph = UndirectedGraph::from_edges(vec![("a", "b", -1), ("b", "c", 4)]);
    assert!(matches!(bellman_ford(&graph, 2), Err(Error::NegativeCycle { .. })));
}

#[test]
fn test_unreachable_negative_edge_is_ignored() {
    let graph: TestGraph = UndirectedGraph::from_edges(vec![("a", "b", 2), ("b", "c", 4), ("x", "y", -5)]);
    let result = bellman_ford(&graph, 0).unwrap();

    assert_eq!(result.distance(idx(&graph, "c")), Some(6));
    assert_eq!(result.distance(idx(&graph, "x")), None);
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let graph: TestGraph = UndirectedGraph::from_edges(vec![("a", "b", 2), ("b", "c", -1)]);
    match dijkstra(&graph, 0) {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (1, 2));
            assert_eq!(weight, "-1");
        }
        other => panic!("Expected a negative weight error, got {:?}", other),
    }
}

#[test]
fn test_source_not_found() {
    let graph = scenario_graph();
    assert!(matches!(dijkstra(&graph, 99), Err(Error::SourceNotFound)));
    assert!(matches!(bellman_ford(&graph, 99), Err(Error::SourceNotFound)));
}

#[test]
fn test_early_exit_does_not_change_results() {
    let graph = random_connected_graph(30, 40, 25, 5);
    let fast: ShortestPathResult<i64> = BellmanFord::new().compute_shortest_paths(&graph, 4).unwrap();
    let full: ShortestPathResult<i64> = BellmanFord::new()
        .with_early_exit(false)
        .compute_shortest_paths(&graph, 4)
        .unwrap();
    assert_eq!(fast, full);
}

#[test]
fn test_resolve_is_idempotent() {
    let graph = random_connected_graph(50, 80, 30, 12);
    assert_eq!(dijkstra(&graph, 0).unwrap(), dijkstra(&graph, 0).unwrap());
    assert_eq!(bellman_ford(&graph, 0).unwrap(), bellman_ford(&graph, 0).unwrap());
}

#[test]
fn test_weight_overflow_is_reported() {
    let graph: UndirectedGraph<&str, i8> = UndirectedGraph::from_edges(vec![("a", "b", 100), ("b", "c", 100)]);
    let result: hub_sssp::Result<ShortestPathResult<i8>> = Dijkstra::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(result, Err(Error::WeightOverflow)));
}

#[test]
fn test_huge_negative_cycle_is_not_an_overflow() {
    let graph: TestGraph = UndirectedGraph::from_edges(vec![("a", "b", 1), ("b", "c", -(1i64 << 62)), ("c", "a", 1)]);

    for source in 0..graph.vertex_count() {
        match bellman_ford(&graph, source) {
            Err(Error::NegativeCycle { vertex }) => assert_eq!(vertex, source),
            other => panic!("Expected a negative cycle from {}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_bellman_ford_positive_overflow_is_reported() {
    let graph: UndirectedGraph<&str, i8> = UndirectedGraph::from_edges(vec![("a", "b", 100), ("b", "c", 100)]);
    let result: hub_sssp::Result<ShortestPathResult<i8>> = BellmanFord::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(result, Err(Error::WeightOverflow)));
}
