//! End-to-end scenarios through the public pipeline API.

use planarity_core::{
    components, run, run_verified, Graph, MotifPolicy, PipelineConfig, PlanarityError, SeedPolicy,
};
use pretty_assertions::assert_eq;

/// A triangulated strip: 0-1-2, 1-2-3, 2-3-4, ... Every consecutive
/// triple forms a triangle, so motif propagation has plenty to chew on.
fn triangle_strip(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..n.saturating_sub(2) {
        edges.push((i, i + 1));
        edges.push((i, i + 2));
        edges.push((i + 1, i + 2));
    }
    Graph::from_edges(&edges)
}

#[test]
fn single_triangle_one_partition_is_identity() {
    let g = Graph::from_edges(&[(0, 1), (1, 2), (0, 2)]);
    let out = run(&g, &PipelineConfig::default()).unwrap();
    assert_eq!(out.edges(), vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn bridged_triangles_end_up_connected() {
    // Two triangles plus a bridge edge (2,3) present only in the input;
    // two partitions tend to split the triangles apart.
    let g = Graph::from_edges(&[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]);
    let out = run(&g, &PipelineConfig::default().with_workers(2)).unwrap();

    assert_eq!(components(&out).len(), 1);
    for (a, b) in out.edges() {
        assert!(
            g.neighbors(a).unwrap().contains(&b),
            "output edge ({a},{b}) was fabricated"
        );
    }
}

#[test]
fn six_node_path_is_rebuilt_from_singletons() {
    let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    let out = run(&g, &PipelineConfig::default()).unwrap();
    assert_eq!(out.edges(), g.edges());
}

#[test]
fn strip_output_covers_all_nodes_for_every_policy() {
    let g = triangle_strip(20);
    for motif in [MotifPolicy::Triangle, MotifPolicy::Diamond, MotifPolicy::House] {
        for workers in [1, 2, 4] {
            let config = PipelineConfig::default()
                .with_workers(workers)
                .with_motif(motif)
                .with_seed(3);
            let out = run(&g, &config).unwrap();
            assert_eq!(out.num_nodes(), g.num_nodes(), "{motif} x{workers}");
            for (a, b) in out.edges() {
                assert!(g.neighbors(a).unwrap().contains(&b));
            }
        }
    }
}

#[test]
fn degree_spread_seeding_runs_end_to_end() {
    let g = triangle_strip(16);
    let config = PipelineConfig::default()
        .with_workers(3)
        .with_seeding(SeedPolicy::DegreeSpread);
    let out = run(&g, &config).unwrap();
    assert_eq!(out.num_nodes(), g.num_nodes());
}

#[test]
fn repeated_runs_with_one_seed_are_identical() {
    let g = triangle_strip(24);
    let config = PipelineConfig::default().with_workers(4).with_seed(77);
    let first = run(&g, &config).unwrap();
    for _ in 0..3 {
        assert_eq!(run(&g, &config).unwrap().edges(), first.edges());
    }
}

#[test]
fn oracle_rejection_is_a_contract_failure() {
    let g = triangle_strip(8);
    let config = PipelineConfig::default();
    let err = run_verified(&g, &config, &|_: &Graph| false).unwrap_err();
    assert!(matches!(err, PlanarityError::NonPlanarResult { .. }));
}
