//! Single source shortest paths on graphs with negative edge weights.
//!
//! Two interchangeable Bellman-Ford solvers, a sequential reference and a data parallel variant
//! which relaxes head-partitioned shards of the edges on a worker pool.
//! See `algo::bellman_ford` for the algorithms and `datastr::graph` for the graph representation.

pub mod algo;
pub mod cli;
pub mod datastr;
pub mod error;
pub mod io;
pub mod report;

pub use error::{Error, Result};
