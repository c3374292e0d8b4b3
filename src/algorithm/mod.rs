pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod bellman_ford;
pub mod hub;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
