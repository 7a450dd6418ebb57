//! Static edge list graph for single source shortest path computations.
//!
//! Vertices are identified by dense ids going from `0` to `n-1`, edges by their position `0..m` in the sorted edge array.
//! Edges are kept sorted by their tail (the `from` vertex).
//! Next to the edges we keep a `first_out` array with `n+1` elements, just like an adjacency array:
//! `first_out[x]` contains the position of the first outgoing edge of vertex `x`.
//! Thus, `edges[first_out[x]..first_out[x+1]]` contains all outgoing edges of `x`.
//! The first element of `first_out` is always 0 and the last one `m`.
//!
//! A graph is never mutated after construction, so it can be shared freely between worker threads.

use crate::error::{Error, Result};
use std::ops::Range;

/// Vertex ids are 32bit unsigned ints
pub type VertexId = u32;
/// Edge ids are 32bit unsigned ints
pub type EdgeId = u32;
/// Edge weights are signed, negative weights are allowed.
pub type Weight = i32;
/// Distances are wider than weights, a shortest path sums up to `n-1` weights.
pub type Distance = i64;
/// Sentinel for unreached vertices.
/// Never takes part in an addition, every relaxation checks for it first.
pub const INFINITY: Distance = Distance::MAX;

/// A directed, weighted edge.
/// No behaviour, just a pure data struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Edge {
        Edge { from, to, weight }
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((from, to, weight): (VertexId, VertexId, Weight)) -> Self {
        Edge { from, to, weight }
    }
}

#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    // all edges, sorted by tail
    edges: Vec<Edge>,
    // position of first outgoing edge of each vertex +1 entry in the end
    first_out: Vec<EdgeId>,
}

impl EdgeListGraph {
    /// Build a graph from an arbitrary ordered collection of edges.
    ///
    /// Fails with `InvalidGraph` if there are no edges or the vertex ids are not dense,
    /// i.e. if not every id in `0..n` is used by at least one edge.
    /// Edges with the same tail keep their relative input order.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Result<EdgeListGraph> {
        let mut edges: Vec<Edge> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(Error::invalid_graph("graph has no edges"));
        }
        if edges.len() >= EdgeId::MAX as usize {
            return Err(Error::invalid_graph(format!("too many edges: {}", edges.len())));
        }

        let num_vertices = count_dense_vertices(&edges)?;
        edges.sort_by_key(|edge| edge.from);

        let first_out = degrees_to_first_out(&edges, num_vertices);
        debug_assert_eq!(first_out.len(), num_vertices + 1);
        debug_assert_eq!(*first_out.last().unwrap() as usize, edges.len());

        Ok(EdgeListGraph { edges, first_out })
    }

    /// Build a graph from `(from, to, weight)` triples, see `from_edges`.
    pub fn from_triples(triples: impl IntoIterator<Item = (VertexId, VertexId, Weight)>) -> Result<EdgeListGraph> {
        Self::from_edges(triples.into_iter().map(Edge::from))
    }

    /// Number of distinct vertex ids across all edges.
    pub fn vertex_count(&self) -> usize {
        self.first_out.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Borrow all edges in sort order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the edge at position `index` in sort order.
    pub fn edge_at(&self, index: usize) -> Result<Edge> {
        self.edges.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.edges.len(),
        })
    }

    /// Fails with `UnknownVertex` unless `vertex` is in `0..n`.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if (vertex as usize) < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::UnknownVertex {
                vertex,
                num_vertices: self.vertex_count(),
            })
        }
    }

    /// Get the range of edge positions which make up the outgoing edges of `vertex`
    pub fn out_edge_range(&self, vertex: VertexId) -> Result<Range<usize>> {
        self.check_vertex(vertex)?;
        let vertex = vertex as usize;
        Ok(self.first_out[vertex] as usize..self.first_out[vertex + 1] as usize)
    }

    /// All outgoing edges of `source`.
    ///
    /// A vertex which only ever appears as a head is known, it just has no outgoing edges,
    /// so the result is an empty slice. Only ids outside of `0..n` are reported as `UnknownVertex`.
    pub fn neighbors_of(&self, source: VertexId) -> Result<&[Edge]> {
        let range = self.out_edge_range(source)?;
        Ok(&self.edges[range])
    }

    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.out_edge_range(vertex).map(|range| range.len())
    }
}

// Ids are dense exactly when the number of distinct ids is `max_id + 1`.
// There can never be more than `2m` distinct ids, so anything larger has gaps and we can bail before allocating.
fn count_dense_vertices(edges: &[Edge]) -> Result<usize> {
    let max_id = edges.iter().map(|edge| edge.from.max(edge.to)).max().unwrap_or(0) as usize;
    if max_id >= 2 * edges.len() {
        return Err(Error::invalid_graph(format!(
            "vertex ids are not dense: max id {} but only {} edges",
            max_id,
            edges.len()
        )));
    }

    let mut seen = vec![false; max_id + 1];
    for edge in edges {
        seen[edge.from as usize] = true;
        seen[edge.to as usize] = true;
    }
    if let Some(missing) = seen.iter().position(|&seen| !seen) {
        return Err(Error::invalid_graph(format!("vertex ids are not dense: {} is never used", missing)));
    }

    Ok(seen.len())
}

// prefix sum over the out degrees, expects edges sorted by tail
fn degrees_to_first_out(edges: &[Edge], num_vertices: usize) -> Vec<EdgeId> {
    let mut degrees = vec![0 as EdgeId; num_vertices];
    for edge in edges {
        degrees[edge.from as usize] += 1;
    }

    let mut first_out = Vec::with_capacity(num_vertices + 1);
    first_out.push(0);
    let mut sum = 0;
    for degree in degrees {
        sum += degree;
        first_out.push(sum);
    }
    first_out
}
