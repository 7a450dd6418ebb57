//! Reading graphs from plain text edge lists.
//!
//! Each non-blank line describes one edge as whitespace separated integers,
//! `from to weight` for weighted graphs or `from to` for unweighted ones, where every edge gets weight 1.
//! A configurable number of leading lines (headers) is skipped.

use crate::datastr::graph::*;
use crate::error::{Error, Result};
use std::{fs, path::Path, str::FromStr};
use tracing::debug;

/// Read a weighted or unweighted edge list file and build the graph.
pub fn read_graph(path: impl AsRef<Path>, skip: usize, weighted: bool) -> Result<EdgeListGraph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let edges = parse_edges(&text, skip, weighted)?;
    debug!(path = %path.display(), num_edges = edges.len(), weighted, "read edge list");
    EdgeListGraph::from_edges(edges)
}

/// Read a file of `from to weight` lines.
pub fn read_weighted_graph(path: impl AsRef<Path>, skip: usize) -> Result<EdgeListGraph> {
    read_graph(path, skip, true)
}

/// Read a file of `from to` lines, all edges get weight 1.
pub fn read_unweighted_graph(path: impl AsRef<Path>, skip: usize) -> Result<EdgeListGraph> {
    read_graph(path, skip, false)
}

/// Parse an in-memory edge list. Errors report 1-based line numbers.
pub fn parse_edges(text: &str, skip: usize, weighted: bool) -> Result<Vec<Edge>> {
    let expected_tokens = if weighted { 3 } else { 2 };
    let mut edges = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(skip) {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != expected_tokens {
            return Err(Error::invalid_graph(format!(
                "line {}: expected {} integers but found {} tokens",
                line_number,
                expected_tokens,
                tokens.len()
            )));
        }

        let from = parse_token::<VertexId>(tokens[0], line_number, "vertex id")?;
        let to = parse_token::<VertexId>(tokens[1], line_number, "vertex id")?;
        let weight = if weighted { parse_token::<Weight>(tokens[2], line_number, "weight")? } else { 1 };
        edges.push(Edge { from, to, weight });
    }

    Ok(edges)
}

fn parse_token<T: FromStr>(token: &str, line_number: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::invalid_graph(format!("line {}: {:?} is not a valid {}", line_number, token, what)))
}
