pub mod traits;
pub mod registry;
pub mod undirected;
pub mod generators;

pub use traits::{Graph, Label, Weight};
pub use registry::NodeRegistry;
pub use undirected::UndirectedGraph;
