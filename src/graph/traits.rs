use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{PrimInt, Signed};

/// Edge weight: a signed primitive integer
pub trait Weight: PrimInt + Signed + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Display + Send + Sync + 'static {}

/// External node label
pub trait Label: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

/// Trait representing a weighted undirected graph over dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical (undirected) edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(neighbor, weight)` pairs in insertion order
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over every logical edge `(u, v, weight)` once
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the first edge with a negative weight, if any
    fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        self.edges().find(|&(_, _, weight)| weight < W::zero())
    }

    /// Returns true if any edge carries a negative weight
    fn has_negative_weight(&self) -> bool {
        self.find_negative_edge().is_some()
    }
}
