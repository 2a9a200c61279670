//! Planarity verification seam.
//!
//! The engine never decides planarity itself; the check is a pure boolean
//! supplied by the embedding application (e.g. a Boyer-Myrvold binding).
//! [`crate::pipeline::run_verified`] consumes an implementation to turn a
//! non-planar result into a caller-surfaced error.

use crate::graph::Graph;

/// External decision procedure for "is this edge set planar?". Assumed
/// correct; the engine only consumes the verdict.
pub trait PlanarityOracle {
    fn is_planar(&self, graph: &Graph) -> bool;
}

impl<F> PlanarityOracle for F
where
    F: Fn(&Graph) -> bool,
{
    fn is_planar(&self, graph: &Graph) -> bool {
        self(graph)
    }
}
