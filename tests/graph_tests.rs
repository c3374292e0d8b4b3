use hub_sssp::algorithm::path::{compose_via_hub, reconstruct, shares_vertex};
use hub_sssp::data_structures::DistanceQueue;
use hub_sssp::graph::generators::{grid_graph, random_connected_graph, vertex_label};
use hub_sssp::graph::{Graph, NodeRegistry, UndirectedGraph};
use hub_sssp::Error;

#[test]
fn test_registry_assigns_dense_indices() {
    let mut registry = NodeRegistry::new();
    assert_eq!(registry.index_of('x'), 0);
    assert_eq!(registry.index_of('y'), 1);
    assert_eq!(registry.index_of('x'), 0, "Registration is idempotent");
    assert_eq!(registry.len(), 2);

    assert_eq!(registry.label_of(1).unwrap(), &'y');
    assert!(matches!(registry.label_of(2), Err(Error::InvalidVertex(2))));
}

#[test]
fn test_registry_lookup_does_not_register() {
    let mut registry = NodeRegistry::new();
    registry.index_of("a");

    assert_eq!(registry.lookup(&"b"), None);
    assert!(matches!(registry.require(&"b"), Err(Error::UnknownLabel(_))));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_edges_are_stored_symmetrically() {
    let graph: UndirectedGraph<char, i32> =
        UndirectedGraph::from_edges(vec![('a', 'b', 4), ('a', 'c', 2), ('a', 'b', 7)]);

    let a = graph.index_of(&'a').unwrap();
    let b = graph.index_of(&'b').unwrap();
    let c = graph.index_of(&'c').unwrap();

    // Insertion order, duplicates kept
    assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(b, 4), (c, 2), (b, 7)]);
    assert_eq!(graph.neighbors(b).collect::<Vec<_>>(), vec![(a, 4), (a, 7)]);
    assert_eq!(graph.neighbors(c).collect::<Vec<_>>(), vec![(a, 2)]);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.has_negative_weight());
    assert_eq!(graph.neighbors(17).count(), 0);
}

#[test]
fn test_graph_with_preseeded_registry() {
    let mut registry = NodeRegistry::new();
    registry.index_of("hub".to_string());
    registry.index_of("spare".to_string());

    let mut graph: UndirectedGraph<String, i64> = UndirectedGraph::with_registry(registry);
    graph.add_edge("x".to_string(), "hub".to_string(), 3);

    assert_eq!(graph.index_of(&"hub".to_string()).unwrap(), 0);
    assert_eq!(graph.index_of(&"x".to_string()).unwrap(), 2);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.neighbors(1).count(), 0, "Seeded labels start isolated");
}

#[test]
fn test_generators_are_deterministic_and_connected() {
    let g1 = random_connected_graph(50, 70, 10, 99);
    let g2 = random_connected_graph(50, 70, 10, 99);
    assert_eq!(g1.edges().collect::<Vec<_>>(), g2.edges().collect::<Vec<_>>());
    assert_eq!(g1.node_count(), 50);
    assert_eq!(g1.index_of(&vertex_label(17)).unwrap(), 17);
    assert!(g1.edges().all(|(_, _, w)| (1..=10).contains(&w)));

    let grid = grid_graph(4, 3, 1);
    assert_eq!(grid.node_count(), 12);
    assert_eq!(grid.edge_count(), 3 * 3 + 4 * 2);
}

#[test]
fn test_distance_queue_pops_smallest_first() {
    let mut queue = DistanceQueue::new();
    queue.push(3, 10i64);
    queue.push(1, 4);
    queue.push(2, 4);
    queue.push(0, 7);

    assert_eq!(queue.peek(), Some((1, 4)));
    assert_eq!(queue.pop(), Some((1, 4)));
    assert_eq!(queue.pop(), Some((2, 4)));
    assert_eq!(queue.pop(), Some((0, 7)));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.pushes(), 4);
    assert_eq!(queue.pop(), Some((3, 10)));
    assert!(queue.is_empty());
}

#[test]
fn test_reconstruct_walks_predecessors() {
    // 0 -> 1 -> 2 -> 3, 4 unreached
    let predecessors = vec![None, Some(0), Some(1), Some(2), None];

    assert_eq!(reconstruct(0, 3, &predecessors), Some(vec![0, 1, 2, 3]));
    assert_eq!(reconstruct(0, 0, &predecessors), Some(vec![0]));
    assert_eq!(reconstruct(1, 3, &predecessors), Some(vec![1, 2, 3]));
    assert_eq!(reconstruct(0, 4, &predecessors), None);
    assert_eq!(reconstruct(0, 9, &predecessors), None);
}

#[test]
fn test_reconstruct_stops_on_cycles() {
    let predecessors = vec![None, Some(2), Some(1)];
    assert_eq!(reconstruct(0, 1, &predecessors), None);
}

#[test]
fn test_shares_vertex_ignores_excluded_and_order() {
    assert!(!shares_vertex(&[0, 1, 3], &[0, 2, 4], 0));
    assert!(shares_vertex(&[0, 1, 3], &[0, 4, 1], 0));
    assert!(shares_vertex(&[0, 1, 3], &[3], 0));
    assert!(!shares_vertex(&[0], &[0], 0));
    assert!(!shares_vertex(&[], &[1, 2], 0));
}

#[test]
fn test_compose_via_hub() {
    assert_eq!(compose_via_hub(&[0, 1, 3], &[0, 2]), vec![3, 1, 0, 2]);
    assert_eq!(compose_via_hub(&[0], &[0, 5]), vec![0, 5]);
    assert_eq!(compose_via_hub(&[0, 4], &[0]), vec![4, 0]);
}
