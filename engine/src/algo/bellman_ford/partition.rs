//! Partitioning of the relaxation work by head vertex.
//!
//! All incoming edges of a vertex form a bucket, and buckets are grouped into contiguous shards.
//! A shard never splits a bucket, so every vertex is the head of edges in exactly one shard.
//! When each shard is processed by one task, the tasks of a round write to disjoint distance entries.
//! Any other partitioning has to keep that property, the parallel solver relies on it instead of a lock.

use super::*;
use std::ops::Range;

/// Policy for the number of shards (the parallelism `P`) of a solve.
/// Independent of the number of worker threads: `P` controls task granularity,
/// the thread count controls how many tasks actually run at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One shard per `n` edges, at least one shard.
    EdgesPerTask(usize),
    /// Exactly this many shards, at least one.
    Fixed(usize),
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::EdgesPerTask(1000)
    }
}

impl Granularity {
    /// Number of shards for a graph with `num_edges` edges.
    pub fn parallelism(self, num_edges: usize) -> usize {
        match self {
            Granularity::EdgesPerTask(edges_per_task) => {
                let edges_per_task = edges_per_task.max(1);
                if num_edges < edges_per_task {
                    1
                } else {
                    (num_edges / edges_per_task).max(1)
                }
            }
            Granularity::Fixed(parallelism) => parallelism.max(1),
        }
    }
}

/// Split `num_buckets` buckets into `parallelism` contiguous ranges.
/// Each range gets `num_buckets / parallelism` buckets, the first `num_buckets % parallelism` ranges one more.
/// Ranges may be empty if there are more shards than buckets.
pub fn shard_ranges(num_buckets: usize, parallelism: usize) -> Vec<Range<usize>> {
    let parallelism = parallelism.max(1);
    let per_shard = num_buckets / parallelism;
    let extra = num_buckets % parallelism;

    let mut offset = 0;
    (0..parallelism)
        .map(|shard| {
            let size = if shard < extra { per_shard + 1 } else { per_shard };
            let range = offset..offset + size;
            offset += size;
            range
        })
        .collect()
}

/// Inverse adjacency of a graph, materialized as shards of head buckets.
/// Built once per solve and only read during the rounds.
#[derive(Debug, Clone)]
pub struct PartitionedGraph {
    // all edges, grouped by head, buckets in ascending head order
    incoming: Vec<Edge>,
    // index of first edge of each bucket +1 entry in the end
    first_in: Vec<usize>,
    // contiguous ranges of bucket indices
    shards: Vec<Range<usize>>,
}

impl PartitionedGraph {
    /// Only heads with at least one incoming edge get a bucket.
    pub fn new(graph: &EdgeListGraph, parallelism: usize) -> PartitionedGraph {
        let mut incoming = graph.edges().to_vec();
        incoming.sort_by_key(|edge| edge.to);

        let mut first_in = Vec::with_capacity(graph.vertex_count() + 1);
        first_in.push(0);
        for (idx, pair) in incoming.windows(2).enumerate() {
            if pair[0].to != pair[1].to {
                first_in.push(idx + 1);
            }
        }
        first_in.push(incoming.len());

        let shards = shard_ranges(first_in.len() - 1, parallelism);

        PartitionedGraph { incoming, first_in, shards }
    }

    pub fn num_buckets(&self) -> usize {
        self.first_in.len() - 1
    }

    pub fn num_shards(&self) -> usize {
        self.shards.len()
    }

    pub fn num_edges(&self) -> usize {
        self.incoming.len()
    }

    /// Bucket index ranges of all shards
    pub fn shard_ranges(&self) -> &[Range<usize>] {
        &self.shards
    }

    /// All incoming edges of one head vertex
    pub fn bucket(&self, bucket: usize) -> &[Edge] {
        &self.incoming[self.first_in[bucket]..self.first_in[bucket + 1]]
    }

    /// The head vertex of a bucket
    pub fn bucket_head(&self, bucket: usize) -> VertexId {
        self.incoming[self.first_in[bucket]].to
    }

    /// All edges of one shard.
    /// Buckets of a shard are adjacent, so this is a single slice.
    pub fn shard(&self, shard: usize) -> &[Edge] {
        let buckets = &self.shards[shard];
        &self.incoming[self.first_in[buckets.start]..self.first_in[buckets.end]]
    }

    /// Iterator over the edge slices of all shards
    pub fn shards(&self) -> impl Iterator<Item = &[Edge]> + '_ {
        (0..self.num_shards()).map(move |shard| self.shard(shard))
    }
}
