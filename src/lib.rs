//! Hub SSSP - shortest paths that must pass through a designated hub
//!
//! The library answers "shortest route from `start` to `end` via the hub"
//! queries over a small undirected weighted graph. A single-source solve
//! rooted at the hub is composed into routes under two reuse policies:
//! revisits allowed, or no vertex shared between the two halves of a route.
//!
//! Two solvers implement the same [`ShortestPathAlgorithm`] contract:
//! [`Dijkstra`] for non-negative weights and [`BellmanFord`], which tolerates
//! negative weights and reports reachable negative cycles.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod report;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    hub::{HubRoute, HubRouter, HubStatus, NoPathReason, PairTable, RouteOutcome},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::{RevisitPolicy, RouterConfig, SolverKind};
/// Re-export main types for convenient use
pub use graph::{NodeRegistry, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative edge weight {weight} between vertices {from} and {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Negative cycle reachable from vertex {vertex}")]
    NegativeCycle { vertex: usize },

    #[error("Hub has not been solved yet")]
    NotSolved,

    #[error("Distance arithmetic overflowed")]
    WeightOverflow,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
