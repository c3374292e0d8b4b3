use std::time::{Duration, Instant};

use hub_sssp::algorithm::{bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm};
use hub_sssp::graph::generators::{random_connected_graph, vertex_label};
use hub_sssp::graph::{Graph, UndirectedGraph};
use hub_sssp::{HubRouter, RouterConfig, SolverKind};

type BenchGraph = UndirectedGraph<String, i64>;

// Function to benchmark a solver on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &BenchGraph, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<i64, BenchGraph>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            println!("  - {} failed: {}", name, err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);
    duration
}

// Time the hub solve plus the full no-revisit pair table
fn benchmark_pair_table(graph: &BenchGraph, parallel: bool) -> Duration {
    let config = RouterConfig::default()
        .with_solver(SolverKind::Dijkstra)
        .with_parallel(parallel)
        .with_parallel_threshold(0);

    let start = Instant::now();
    let outcome = HubRouter::with_config(graph, &vertex_label(0), config).and_then(|mut router| {
        router.solve()?;
        router.no_revisit_table().map(|table| (table.found_count(), table.len()))
    });
    let duration = start.elapsed();

    match outcome {
        Ok((found, total)) => println!(
            "  - Pair table ({}): {} of {} pairs routable in {:?}",
            if parallel { "parallel" } else { "sequential" },
            found,
            total,
            duration
        ),
        Err(err) => println!("  - Pair table failed: {}", err),
    }
    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![100, 250, 500, 1_000];

    // Extra edges on top of the spanning tree, per vertex
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford from a hub");
    println!("Extra edges per vertex: {}", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_connected_graph(size, size * edge_factor, 100, i as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0);
        let bellman_ford_time = benchmark_algorithm("Bellman-Ford", &bellman_ford, &graph, 0);
        let table_time = benchmark_pair_table(&graph, false);
        let parallel_table_time = benchmark_pair_table(&graph, true);

        results.push((size, dijkstra_time, bellman_ford_time, table_time, parallel_table_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
        "Vertices", "Dijkstra (us)", "B-F (us)", "Table (ms)", "Par table (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bellman_ford_time, table_time, parallel_table_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
            size,
            dijkstra_time.as_micros(),
            bellman_ford_time.as_micros(),
            table_time.as_millis(),
            parallel_table_time.as_millis()
        );
    }
}
