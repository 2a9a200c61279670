use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanarityError>;

#[derive(Error, Debug)]
pub enum PlanarityError {
    /// A producer looked up a node that is absent from the adjacency map.
    /// This violates the node-presence invariant and is a contract
    /// violation, not a recoverable runtime condition.
    #[error("node {node} is absent from the adjacency map")]
    MissingNode { node: NodeId },

    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("heuristic produced a non-planar result ({nodes} nodes, {edges} edges)")]
    NonPlanarResult { nodes: usize, edges: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_message_names_the_node() {
        let err = PlanarityError::MissingNode { node: 17 };
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_worker_count_message() {
        let err = PlanarityError::InvalidWorkerCount(0);
        assert!(err.to_string().contains('0'));
    }
}
