//! Data parallel Bellman-Ford.
//!
//! The edges are partitioned by head vertex (see `partition`) and each round spawns one task per shard.
//! Rounds are separated by a full barrier: `rayon::scope` only returns once every task spawned in it is done,
//! so round `k+1` never starts before round `k` is complete.
//!
//! Distances live in a shared `AtomicDistances` without any lock.
//! Within a round each entry has exactly one writer, the task owning the bucket of that head.
//! Reads of tail distances may race with writes of other tasks in the same round.
//! Such a read sees either the value from the start of the round or an improvement of it,
//! so after `k` rounds no vertex is worse than the shortest path using at most `k` edges
//! and `n-1` rounds suffice, just like in the sequential version.

use super::*;
use crate::datastr::distances::AtomicDistances;
use crate::error::Error;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

/// Tunables of the parallel solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads of the pool
    pub threads: usize,
    /// How many shards (tasks per round) to create
    pub granularity: Granularity,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            threads: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            granularity: Granularity::default(),
        }
    }
}

impl ParallelConfig {
    /// Set the pool size, at least one thread.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParallelBellmanFord {
    config: ParallelConfig,
}

impl ParallelBellmanFord {
    /// Solver with a pool of `threads` workers and the default granularity.
    pub fn new(threads: usize) -> Self {
        Self::with_config(ParallelConfig::default().with_threads(threads))
    }

    pub fn with_config(config: ParallelConfig) -> Self {
        ParallelBellmanFord { config }
    }

    pub fn config(&self) -> ParallelConfig {
        self.config
    }
}

impl Solver for ParallelBellmanFord {
    fn solve(&self, graph: &EdgeListGraph, source: VertexId) -> Result<Vec<Distance>> {
        graph.check_vertex(source)?;
        let n = graph.vertex_count();
        let parallelism = self.config.granularity.parallelism(graph.edge_count());

        let distances = AtomicDistances::new(n);
        distances.set(source as usize, 0);
        let partition = PartitionedGraph::new(graph, parallelism);

        debug!(
            num_vertices = n,
            num_edges = graph.edge_count(),
            source,
            shards = partition.num_shards(),
            threads = self.config.threads,
            "parallel bellman ford"
        );

        // the pool lives as long as this call, dropping it shuts the workers down on success and failure
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .thread_name(|idx| format!("bellman-ford-{}", idx))
            .build()?;

        pool.install(|| {
            for round in 1..n {
                relax_round(&partition, &distances);
                trace!(round, "relaxation round done");
            }

            if has_relaxable_edge(&partition, &distances) {
                warn!("negative cycle detected");
                return Err(Error::NegativeCycle);
            }
            Ok(())
        })?;

        Ok(distances.into_vec())
    }
}

// one task per shard, returns once all of them are done
fn relax_round(partition: &PartitionedGraph, distances: &AtomicDistances) {
    rayon::scope(|s| {
        for shard in partition.shards() {
            s.spawn(move |_| relax_edges(shard, distances));
        }
    });
}

fn relax_edges(edges: &[Edge], distances: &AtomicDistances) {
    for &Edge { from, to, weight } in edges {
        if let Some(distance) = relaxed_distance(distances.get(from as usize), weight, distances.get(to as usize)) {
            distances.set(to as usize, distance);
        }
    }
}

// Verification round, does not modify the distances.
// `any` stops handing out shards once one of them found a relaxable edge.
fn has_relaxable_edge(partition: &PartitionedGraph, distances: &AtomicDistances) -> bool {
    (0..partition.num_shards()).into_par_iter().any(|shard| {
        partition
            .shard(shard)
            .iter()
            .any(|edge| relaxed_distance(distances.get(edge.from as usize), edge.weight, distances.get(edge.to as usize)).is_some())
    })
}
