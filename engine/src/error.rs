//! Error taxonomy shared by the graph, the reader and both solvers.

use crate::datastr::graph::VertexId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty input. Raised while building a graph, never while solving.
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("vertex {vertex} does not exist (graph has {num_vertices} vertices)")]
    UnknownVertex { vertex: VertexId, num_vertices: usize },

    #[error("edge index {index} out of range for graph with {len} edges")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cycle with negative total weight is reachable from the source.
    /// This is a legitimate outcome of a solve, not a structural problem of the input.
    #[error("graph contains a negative weight cycle reachable from the source")]
    NegativeCycle,

    #[error("could not read graph file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        Error::InvalidGraph { reason: reason.into() }
    }

    /// Was the failure caused by a negative cycle rather than by bad input?
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Error::NegativeCycle)
    }
}
