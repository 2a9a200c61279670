/*
 * planarity-core - Parallel planar subgraph heuristic
 *
 * Computes a large planar subgraph of an arbitrary undirected graph:
 * partition the node set, grow small planar motifs outward from seed
 * nodes inside each partition in parallel, merge and dedupe the per-task
 * edge sets, then reconnect the components the partitioning split apart
 * using edges borrowed from the original graph.
 *
 * Exact maximum planar subgraphs are NP-hard and not attempted; the
 * planarity verdict itself comes from an injected external oracle.
 */

pub mod components;
pub mod error;
pub mod graph;
pub mod motif;
pub mod oracle;
pub mod partition;
pub mod pipeline;

pub use components::{components, reconnect};
pub use error::{PlanarityError, Result};
pub use graph::{intersect, Graph, NodeId};
pub use motif::{match_at, propagate, Motif, MotifPolicy};
pub use oracle::PlanarityOracle;
pub use partition::{partition, Partition, SeedPolicy};
pub use pipeline::{run, run_verified, PipelineConfig};
