//! Shortest path algorithms.

pub mod bellman_ford;
