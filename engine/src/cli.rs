//! Command line interface of the `bellman_ford` binary.

use crate::algo::bellman_ford::{Algorithm, Granularity, ParallelConfig};
use crate::datastr::graph::VertexId;
use clap::Parser;
use std::path::PathBuf;

/// Bellman-Ford single source shortest paths, sequential or parallel.
#[derive(Parser, Debug, Clone)]
#[command(name = "bellman_ford", version, about, long_about = None)]
pub struct Args {
    /// Path to the graph file
    #[arg(short = 'g', long = "graph", env = "BELLMAN_FORD_GRAPH")]
    pub graph: PathBuf,

    /// Source vertex of the search
    #[arg(short = 'S', long = "source", env = "BELLMAN_FORD_SOURCE")]
    pub source: VertexId,

    /// Type of Bellman-Ford algorithm
    #[arg(short = 't', long = "type", env = "BELLMAN_FORD_TYPE", value_enum, default_value_t = Algorithm::Sequential)]
    pub algorithm: Algorithm,

    /// Whether the graph file is weighted: 1 for `from to weight` lines, 0 for `from to` lines with weight 1
    #[arg(short = 'w', long = "weighted", env = "BELLMAN_FORD_WEIGHTED", default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub weighted: u8,

    /// Number of lines to skip at the start of the graph file
    #[arg(short = 's', long = "skip", env = "BELLMAN_FORD_SKIP", default_value_t = 0)]
    pub skip: usize,

    /// Worker threads of the parallel solver
    #[arg(long, env = "BELLMAN_FORD_THREADS", default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    /// Edges per relaxation task of the parallel solver
    #[arg(long, env = "BELLMAN_FORD_EDGES_PER_TASK", default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub edges_per_task: u32,

    /// Print a JSON report instead of the plain distance list
    #[arg(long, env = "BELLMAN_FORD_JSON")]
    pub json: bool,
}

impl Args {
    pub fn is_weighted(&self) -> bool {
        self.weighted == 1
    }

    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::default()
            .with_threads(self.threads as usize)
            .with_granularity(Granularity::EdgesPerTask(self.edges_per_task as usize))
    }
}
