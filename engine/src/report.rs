//! Output of solve results, human readable or as JSON.

use crate::algo::bellman_ford::Algorithm;
use crate::datastr::graph::*;
use serde::Serialize;
use std::time::Duration;

pub mod benchmark;
pub use benchmark::*;

/// Format distances as `[d0, d1, ...]` with `inf` for unreached vertices.
pub fn format_distances(distances: &[Distance]) -> String {
    let entries: Vec<String> = distances
        .iter()
        .map(|&distance| if distance == INFINITY { "inf".to_string() } else { distance.to_string() })
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Machine readable summary of one solver run.
/// Unreached vertices are serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub source: VertexId,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub elapsed_ms: f64,
    pub distances: Vec<Option<Distance>>,
}

impl SolveReport {
    pub fn new(algorithm: Algorithm, graph: &EdgeListGraph, source: VertexId, distances: &[Distance], elapsed: Duration) -> Self {
        SolveReport {
            algorithm,
            source,
            num_vertices: graph.vertex_count(),
            num_edges: graph.edge_count(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            distances: distances.iter().map(|&distance| Some(distance).filter(|&d| d != INFINITY)).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn plain_format() {
        assert_eq!(format_distances(&[0, -1, INFINITY, 7]), "[0, -1, inf, 7]");
        assert_eq!(format_distances(&[]), "[]");
    }

    #[test]
    fn json_report() {
        let graph = EdgeListGraph::from_triples(vec![(0, 1, -3), (2, 1, 1)]).unwrap();
        let report = SolveReport::new(Algorithm::Parallel, &graph, 0, &[0, -3, INFINITY], Duration::from_millis(2));
        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["algorithm"], json!("parallel"));
        assert_eq!(value["num_vertices"], json!(3));
        assert_eq!(value["num_edges"], json!(2));
        assert_eq!(value["distances"], json!([0, -3, null]));
        assert!((value["elapsed_ms"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    }
}
