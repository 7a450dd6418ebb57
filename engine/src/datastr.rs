//! Data structures used by algorithms.

pub mod distances;
pub mod graph;
