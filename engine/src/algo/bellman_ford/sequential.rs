//! Reference implementation, a plain scan over all edges per round.

use super::*;
use crate::error::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialBellmanFord;

impl SequentialBellmanFord {
    pub fn new() -> Self {
        SequentialBellmanFord
    }
}

impl Solver for SequentialBellmanFord {
    fn solve(&self, graph: &EdgeListGraph, source: VertexId) -> Result<Vec<Distance>> {
        graph.check_vertex(source)?;
        let n = graph.vertex_count();
        debug!(num_vertices = n, num_edges = graph.edge_count(), source, "sequential bellman ford");

        let mut distances = vec![INFINITY; n];
        distances[source as usize] = 0;

        for round in 1..n {
            let mut updates = 0usize;
            for &Edge { from, to, weight } in graph.edges() {
                if let Some(distance) = relaxed_distance(distances[from as usize], weight, distances[to as usize]) {
                    distances[to as usize] = distance;
                    updates += 1;
                }
            }
            trace!(round, updates, "relaxation round done");
        }

        let still_relaxable = graph
            .edges()
            .iter()
            .find(|edge| relaxed_distance(distances[edge.from as usize], edge.weight, distances[edge.to as usize]).is_some());
        if let Some(edge) = still_relaxable {
            warn!(from = edge.from, to = edge.to, "negative cycle detected");
            return Err(Error::NegativeCycle);
        }

        Ok(distances)
    }
}
