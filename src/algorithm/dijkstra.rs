use crate::graph::{Graph, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        // An undirected negative edge would be relaxed back and forth forever
        if let Some((from, to, weight)) = graph.find_negative_edge() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: weight.to_string(),
            });
        }

        let mut result = ShortestPathResult::new(graph.vertex_count(), source);

        let mut queue = DistanceQueue::new();
        queue.push(source, W::zero());
        let mut settled = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if let Some(current_dist) = result.distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }
            settled += 1;

            for (v, weight) in graph.neighbors(u) {
                let new_dist = dist_u.checked_add(&weight).ok_or(Error::WeightOverflow)?;

                let should_update = match result.distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    result.distances[v] = Some(new_dist);
                    result.predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        log::debug!(
            "Dijkstra from {}: settled {} vertices, {} queue pushes",
            source,
            settled,
            queue.pushes()
        );

        Ok(result)
    }
}
