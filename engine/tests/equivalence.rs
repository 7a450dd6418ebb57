//! The parallel solver has to produce exactly the distances of the sequential reference,
//! independent of pool size and shard count.

use bellman_ford_engine::{algo::bellman_ford::*, datastr::graph::*};
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

// Weights are reduced costs `c(u, v) + p(u) - p(v)` with `c >= 0`, so there are plenty of negative edges
// but every cycle has non-negative weight.
fn random_graph_without_negative_cycles(rng: &mut StdRng, n: VertexId, m: usize) -> EdgeListGraph {
    let potentials: Vec<Weight> = (0..n).map(|_| rng.gen_range(-50..50)).collect();
    let reduced = |cost: Weight, from: VertexId, to: VertexId| cost + potentials[from as usize] - potentials[to as usize];

    let mut edges = Vec::with_capacity(m);
    // every vertex needs at least one edge to keep the ids dense
    for to in 1..n {
        let from = rng.gen_range(0..to);
        edges.push(Edge::new(from, to, reduced(rng.gen_range(0..100), from, to)));
    }
    while edges.len() < m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        edges.push(Edge::new(from, to, reduced(rng.gen_range(0..100), from, to)));
    }
    edges.shuffle(rng);

    EdgeListGraph::from_edges(edges).unwrap()
}

fn configs() -> Vec<ParallelConfig> {
    let mut configs = Vec::new();
    for threads in [1, 2, 4, 8] {
        for granularity in [Granularity::default(), Granularity::Fixed(1), Granularity::Fixed(7), Granularity::EdgesPerTask(10)] {
            configs.push(ParallelConfig::default().with_threads(threads).with_granularity(granularity));
        }
    }
    configs
}

#[test]
fn random_graphs_match_sequential() {
    let mut rng = StdRng::seed_from_u64(1337);

    for _ in 0..5 {
        let graph = random_graph_without_negative_cycles(&mut rng, 300, 3000);
        let source = rng.gen_range(0..300);
        let expected = SequentialBellmanFord::new().solve(&graph, source).unwrap();

        for config in configs() {
            let distances = ParallelBellmanFord::with_config(config).solve(&graph, source).unwrap();
            assert_eq!(distances, expected, "{:?}", config);
        }
    }
}

#[test]
fn random_graph_with_negative_cycle_fails_everywhere() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_graph_without_negative_cycles(&mut rng, 100, 1500);

    // the source reaches every vertex through the spanning edges, so the added cycle is reachable
    let mut edges = graph.edges().to_vec();
    edges.push(Edge::new(10, 20, -1000));
    edges.push(Edge::new(20, 10, -1000));
    let graph = EdgeListGraph::from_edges(edges).unwrap();

    assert!(SequentialBellmanFord::new().solve(&graph, 0).unwrap_err().is_negative_cycle());
    for config in configs() {
        let err = ParallelBellmanFord::with_config(config).solve(&graph, 0).unwrap_err();
        assert!(err.is_negative_cycle(), "{:?}: {}", config, err);
    }
}

// map arbitrary ids to `0..n` so the graph can be built
fn densify(triples: Vec<(VertexId, VertexId, Weight)>) -> EdgeListGraph {
    let mut ids: Vec<VertexId> = triples.iter().flat_map(|&(from, to, _)| [from, to]).collect();
    ids.sort_unstable();
    ids.dedup();
    let rank = |id: VertexId| ids.binary_search(&id).unwrap() as VertexId;

    EdgeListGraph::from_triples(triples.iter().map(|&(from, to, weight)| (rank(from), rank(to), weight)).collect::<Vec<_>>()).unwrap()
}

proptest! {
    #[test]
    fn prop_same_outcome_as_sequential(
        triples in prop::collection::vec((0u32..10, 0u32..10, -20i32..40), 1..40),
        threads in 1usize..5,
        shards in 1usize..8,
    ) {
        let graph = densify(triples);
        let config = ParallelConfig::default().with_threads(threads).with_granularity(Granularity::Fixed(shards));
        let sequential = SequentialBellmanFord::new();
        let parallel = ParallelBellmanFord::with_config(config);

        for source in 0..graph.vertex_count() as VertexId {
            match (sequential.solve(&graph, source), parallel.solve(&graph, source)) {
                (Ok(expected), Ok(distances)) => prop_assert_eq!(expected, distances),
                (Err(a), Err(b)) => prop_assert!(a.is_negative_cycle() && b.is_negative_cycle()),
                (a, b) => prop_assert!(false, "diverging outcomes {:?} vs {:?}", a, b),
            }
        }
    }

    #[test]
    fn prop_partition_covers_every_edge_once(
        triples in prop::collection::vec((0u32..12, 0u32..12, -5i32..5), 1..60),
        parallelism in 1usize..10,
    ) {
        let graph = densify(triples);
        let partition = PartitionedGraph::new(&graph, parallelism);
        prop_assert_eq!(partition.num_shards(), parallelism);

        let sizes: Vec<usize> = partition.shard_ranges().iter().map(|range| range.len()).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);

        let mut heads_seen = vec![false; graph.vertex_count()];
        let mut edges = Vec::new();
        for shard in partition.shards() {
            let mut heads: Vec<VertexId> = shard.iter().map(|edge| edge.to).collect();
            heads.dedup();
            for head in heads {
                prop_assert!(!heads_seen[head as usize], "head {} owned by two shards", head);
                heads_seen[head as usize] = true;
            }
            edges.extend_from_slice(shard);
        }

        let mut expected = graph.edges().to_vec();
        let key = |edge: &Edge| (edge.from, edge.to, edge.weight);
        expected.sort_by_key(key);
        edges.sort_by_key(key);
        prop_assert_eq!(edges, expected);
    }
}
