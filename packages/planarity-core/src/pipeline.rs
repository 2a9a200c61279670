//! Pipeline orchestration.
//!
//! Sequences the full heuristic: partition the input, propagate motifs
//! over each partition on a fixed-size worker pool, fan the per-task edge
//! lists into one output graph, dedupe, then reconnect the components the
//! partitioning split apart. Propagation is fully data-parallel — each
//! task reads only its own partition and returns its edge list; the merge
//! is a sequential fan-in after all tasks join, so no shared mutable
//! accumulator is needed. Component analysis and reconnection run
//! strictly sequentially afterwards.

use crate::components::{components, reconnect};
use crate::error::{PlanarityError, Result};
use crate::graph::{Graph, NodeId};
use crate::motif::{propagate, MotifPolicy};
use crate::oracle::PlanarityOracle;
use crate::partition::{partition, SeedPolicy};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info, warn};

/// Tunables for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Worker count; also the partition count. Independent of hardware
    /// concurrency — oversubscription only warns.
    pub workers: usize,
    /// PRNG seed for partition seeding; fixed seed, fixed partitions.
    pub seed: u64,
    pub motif: MotifPolicy,
    pub seeding: SeedPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            seed: 0,
            motif: MotifPolicy::default(),
            seeding: SeedPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_motif(mut self, motif: MotifPolicy) -> Self {
        self.motif = motif;
        self
    }

    pub fn with_seeding(mut self, seeding: SeedPolicy) -> Self {
        self.seeding = seeding;
        self
    }
}

/// Run the heuristic: input stays read-only, the returned graph is the
/// computed planar-subgraph candidate. The input must be deduplicated.
pub fn run(input: &Graph, config: &PipelineConfig) -> Result<Graph> {
    if config.workers == 0 {
        return Err(PlanarityError::InvalidWorkerCount(0));
    }
    if input.is_empty() {
        return Ok(Graph::new());
    }

    let available = num_cpus::get();
    if config.workers > available {
        warn!(
            workers = config.workers,
            available,
            "worker count exceeds detected hardware concurrency; \
             oversubscribed workers will contend for cores"
        );
    }

    info!(
        workers = config.workers,
        seed = config.seed,
        motif = %config.motif,
        seeding = %config.seeding,
        nodes = input.num_nodes(),
        edges = input.num_edges(),
        "starting planar subgraph pipeline"
    );

    let parts = partition(input, config.workers, config.seed, config.seeding)?;
    debug!(partitions = parts.len(), "partitioning complete");

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .map_err(|e| PlanarityError::ThreadPool(e.to_string()))?;

    let edge_lists: Vec<Vec<(NodeId, NodeId)>> = pool.install(|| {
        parts
            .par_iter()
            .map(|p| propagate(p, config.motif))
            .collect::<Result<Vec<_>>>()
    })?;

    // Fan-in merge; order across partitions is unconstrained because the
    // dedupe pass below makes the result order-independent.
    let mut out = Graph::new();
    for n in input.nodes() {
        out.add_node(n);
    }
    let mut motif_edges = 0usize;
    for edges in edge_lists {
        motif_edges += edges.len();
        for (a, b) in edges {
            out.add_edge(a, b);
        }
    }
    out.dedupe();
    debug!(motif_edges, merged_edges = out.num_edges(), "merge complete");

    let comps = components(&out);
    if comps.len() > 1 {
        let bridges = reconnect(&mut out, &comps, input)?;
        out.dedupe();
        debug!(
            components = comps.len(),
            bridges, "component reconnection complete"
        );
    }

    info!(
        nodes = out.num_nodes(),
        edges = out.num_edges(),
        "pipeline finished"
    );

    Ok(out)
}

/// Run the heuristic and check the result against an externally supplied
/// planarity oracle. A rejected result is the heuristic failing its
/// contract for this input — surfaced as an error, not a crash.
pub fn run_verified(
    input: &Graph,
    config: &PipelineConfig,
    oracle: &dyn PlanarityOracle,
) -> Result<Graph> {
    let out = run(input, config)?;
    if !oracle.is_planar(&out) {
        return Err(PlanarityError::NonPlanarResult {
            nodes: out.num_nodes(),
            edges: out.num_edges(),
        });
    }
    Ok(out)
}
