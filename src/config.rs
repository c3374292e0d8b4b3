use serde::{Deserialize, Serialize};

/// Which single-source solver the hub router runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Priority-queue relaxation, non-negative weights only
    Dijkstra,
    /// Iterative edge relaxation with negative cycle detection
    BellmanFord,
    /// Bellman-Ford if any edge weight is negative, Dijkstra otherwise
    Auto,
}

impl Default for SolverKind {
    fn default() -> Self {
        SolverKind::Auto
    }
}

/// Path reuse policy for hub-composed routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitPolicy {
    /// Both halves only need to exist independently
    AllowRevisits,
    /// The halves may not share any vertex other than the hub
    NoRevisits,
}

impl RevisitPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            RevisitPolicy::AllowRevisits => "revisits allowed",
            RevisitPolicy::NoRevisits => "no revisits",
        }
    }
}

/// Configuration for a [`HubRouter`](crate::HubRouter)
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Solver used for the hub-rooted solve
    pub solver: SolverKind,
    /// Whether pair tables and query batches are computed with rayon
    pub parallel: bool,
    /// Below this many vertices the pair table is built sequentially even when `parallel` is set
    pub parallel_threshold: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            solver: SolverKind::Auto,
            parallel: false,
            parallel_threshold: 64,
        }
    }
}

impl RouterConfig {
    /// Set the solver used for the hub-rooted solve
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Enable or disable rayon for pair tables and query batches
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the vertex count from which the pair table is built in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub(crate) fn use_parallel(&self, vertex_count: usize) -> bool {
        self.parallel && vertex_count >= self.parallel_threshold
    }
}
