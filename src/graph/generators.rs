use crate::graph::UndirectedGraph;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Label used by the generators for vertex `i`
pub fn vertex_label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a connected random graph with n vertices.
///
/// A random spanning tree is laid down first, then `extra_edges` additional
/// edges between random distinct vertices. Weights are drawn from
/// `1..=max_weight`. The same seed always yields the same graph.
pub fn random_connected_graph(
    n: usize,
    extra_edges: usize,
    max_weight: i64,
    seed: u64,
) -> UndirectedGraph<String, i64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = UndirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    if n == 0 {
        return graph;
    }
    graph.add_node(vertex_label(0));

    // Attach every new vertex to a random earlier one
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(vertex_label(i), vertex_label(parent), weight);
    }

    if n < 2 {
        return graph;
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(vertex_label(u), vertex_label(v), weight);
        }
    }

    graph
}

/// Generates a width x height 4-connected grid with uniform weights.
/// Vertex `(x, y)` is labeled `v{y * width + x}`.
pub fn grid_graph(width: usize, height: usize, weight: i64) -> UndirectedGraph<String, i64> {
    let mut graph = UndirectedGraph::new();

    // Register in row-major order so labels and indices agree
    for i in 0..width * height {
        graph.add_node(vertex_label(i));
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex_label(current), vertex_label(current + 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(vertex_label(current), vertex_label(current + width), weight);
            }
        }
    }

    graph
}
