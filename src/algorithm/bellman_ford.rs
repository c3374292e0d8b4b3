use crate::graph::{Graph, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford: handles negative weights and detects negative cycles
/// reachable from the source.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    /// Stop relaxing after a pass that changed nothing
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// Enable or disable stopping after a pass with zero updates
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Tentative distance through `u`, if `u` is reached.
    ///
    /// Underflow on a negative weight means `u` was pushed down by a reachable
    /// negative edge, which is already a cycle on an undirected graph.
    fn candidate<W: Weight>(
        result: &ShortestPathResult<W>,
        u: usize,
        weight: W,
    ) -> Result<Option<W>> {
        let dist_u = match result.distances[u] {
            None => return Ok(None),
            Some(dist_u) => dist_u,
        };
        match dist_u.checked_add(&weight) {
            Some(sum) => Ok(Some(sum)),
            None if weight < W::zero() => {
                log::warn!(
                    "Distance underflow at vertex {}: negative cycle reachable from {}",
                    u,
                    result.source
                );
                Err(Error::NegativeCycle {
                    vertex: result.source,
                })
            }
            None => Err(Error::WeightOverflow),
        }
    }

    fn improves<W: Weight>(result: &ShortestPathResult<W>, v: usize, candidate: W) -> bool {
        match result.distances[v] {
            None => true,
            Some(current) => candidate < current,
        }
    }

    /// Relaxes `u -> v`; returns true if `v` improved
    fn relax<W: Weight>(
        result: &mut ShortestPathResult<W>,
        u: usize,
        v: usize,
        weight: W,
    ) -> Result<bool> {
        if let Some(candidate) = Self::candidate(result, u, weight)? {
            if Self::improves(result, v, candidate) {
                result.distances[v] = Some(candidate);
                result.predecessors[v] = Some(u);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::new(n, source);

        let mut passes = 0usize;
        for _ in 1..n {
            passes += 1;
            let mut updated = false;

            // Each undirected edge is relaxed in both directions
            for (u, v, weight) in graph.edges() {
                updated |= Self::relax(&mut result, u, v, weight)?;
                updated |= Self::relax(&mut result, v, u, weight)?;
            }

            if self.early_exit && !updated {
                break;
            }
        }

        // One more scan: anything still relaxable sits on a negative cycle
        for (u, v, weight) in graph.edges() {
            for (a, b) in [(u, v), (v, u)] {
                if let Some(candidate) = Self::candidate(&result, a, weight)? {
                    if Self::improves(&result, b, candidate) {
                        log::warn!(
                            "Negative cycle reachable from {} (edge {} -> {} still relaxes)",
                            source,
                            a,
                            b
                        );
                        return Err(Error::NegativeCycle { vertex: source });
                    }
                }
            }
        }

        log::debug!(
            "Bellman-Ford from {}: {} relaxation passes over {} edges",
            source,
            passes,
            graph.edge_count()
        );

        Ok(result)
    }
}
