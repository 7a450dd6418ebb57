//! Single source shortest paths with negative weights.
//!
//! Both solvers run exactly `n-1` relaxation rounds followed by one verification round.
//! If any edge can still be relaxed after that, a negative cycle is reachable from the source and the solve fails.
//! There is no early termination on rounds without updates.
//!
//! The sequential solver is the reference. The parallel one partitions the edges by head vertex
//! and relaxes the shards of each round concurrently, see `parallel` and `partition`.

use crate::datastr::graph::*;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

pub mod parallel;
pub mod partition;
pub mod sequential;

pub use self::parallel::{ParallelBellmanFord, ParallelConfig};
pub use self::partition::{Granularity, PartitionedGraph};
pub use self::sequential::SequentialBellmanFord;

/// Common interface of the interchangeable solvers.
pub trait Solver {
    /// Compute the distances from `source` to all vertices.
    /// Unreached vertices get `INFINITY`.
    /// Fails with `UnknownVertex` for a source outside the graph and with `NegativeCycle`
    /// if a negative cycle is reachable from the source. There are no partial results.
    fn solve(&self, graph: &EdgeListGraph, source: VertexId) -> Result<Vec<Distance>>;
}

/// Which solver to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Sequential,
    Parallel,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sequential => "sequential",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Instantiate the solver. The config is only used by the parallel solver.
    pub fn solver(self, config: ParallelConfig) -> Box<dyn Solver + Send + Sync> {
        match self {
            Algorithm::Sequential => Box::new(SequentialBellmanFord::new()),
            Algorithm::Parallel => Box::new(ParallelBellmanFord::with_config(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The relaxation rule shared by all solvers.
/// Returns the new distance for the head of `edge` if going through the tail is shorter.
/// An unreached tail never relaxes anything.
/// Sums saturate, so an overflow can neither wrap around nor produce the `INFINITY` sentinel as an improvement.
#[inline(always)]
pub fn relaxed_distance(tail_distance: Distance, weight: Weight, head_distance: Distance) -> Option<Distance> {
    if tail_distance == INFINITY {
        return None;
    }
    let tentative = tail_distance.saturating_add(Distance::from(weight));
    if tentative < head_distance {
        Some(tentative)
    } else {
        None
    }
}
