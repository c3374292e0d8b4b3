use crate::graph::registry::NodeRegistry;
use crate::graph::traits::{Graph, Label, Weight};
use crate::Result;

/// An undirected weighted graph over labeled nodes, using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    /// Label <-> index mapping for every node seen so far
    registry: NodeRegistry<L>,

    /// Incident edges for each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Every inserted edge once, in insertion order
    edges: Vec<(usize, usize, W)>,
}

impl<L, W> Default for UndirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> UndirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::with_registry(NodeRegistry::new())
    }

    /// Creates a graph that registers nodes into an existing registry.
    ///
    /// Labels already present in `registry` keep their indices and become
    /// isolated vertices until an edge mentions them.
    pub fn with_registry(registry: NodeRegistry<L>) -> Self {
        let adjacency = vec![Vec::new(); registry.len()];
        UndirectedGraph {
            registry,
            adjacency,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(label, label, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight);
        }
        graph
    }

    /// Registers both endpoints if new and records the edge on both of them.
    ///
    /// Duplicate edges are kept as additional adjacency entries.
    pub fn add_edge(&mut self, a: L, b: L, weight: W) {
        let u = self.register(a);
        let v = self.register(b);

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edges.push((u, v, weight));
    }

    /// Registers a node without edges and returns its index
    pub fn add_node(&mut self, label: L) -> usize {
        self.register(label)
    }

    fn register(&mut self, label: L) -> usize {
        let idx = self.registry.index_of(label);
        if idx >= self.adjacency.len() {
            self.adjacency.resize(idx + 1, Vec::new());
        }
        idx
    }

    /// Read access to the node registry
    pub fn registry(&self) -> &NodeRegistry<L> {
        &self.registry
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Index of a label, without registering it
    pub fn index_of(&self, label: &L) -> Result<usize> {
        self.registry.require(label)
    }

    /// Label of an index
    pub fn label_of(&self, index: usize) -> Result<&L> {
        self.registry.label_of(index)
    }
}

impl<L, W> Graph<W> for UndirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(self.edges.iter().copied())
    }
}
