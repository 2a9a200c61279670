//! Motif propagation: grows an edge set from disjoint, outward-growing
//! planar motifs inside one partition.
//!
//! A double-ended frontier drives a depth-first continuation: matched
//! nodes are pushed to the *front* so growth keeps following the newest
//! motif. When the frontier drains with nodes still unexamined, growth
//! restarts at the smallest unexamined id, which guarantees full coverage
//! across disconnected pieces. Matching is greedy and first-found — at
//! most one motif is anchored per visit to a node.

use crate::error::{PlanarityError, Result};
use crate::graph::{Graph, NodeId};
use crate::partition::Partition;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Which planar pattern to grow. Policies are mutually exclusive and
/// share the same control shape; richer ones chain extra adjacency
/// checks onto a matched triangle and fall back to the plain triangle
/// when no extension node exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotifPolicy {
    /// 3 edges: x, y, z mutually adjacent.
    #[default]
    Triangle,
    /// 5 edges: triangle plus w adjacent to both y and z.
    Diamond,
    /// 7 edges: diamond plus v adjacent to both y and w.
    House,
}

impl MotifPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotifPolicy::Triangle => "triangle",
            MotifPolicy::Diamond => "diamond",
            MotifPolicy::House => "house",
        }
    }
}

impl std::fmt::Display for MotifPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A matched motif anchored at some node: the partner nodes it claims
/// and the edges it emits. Every edge connects nodes already adjacent
/// in the partition graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub claimed: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Grow an edge set over one partition, touching every node exactly once.
pub fn propagate(part: &Partition, policy: MotifPolicy) -> Result<Vec<(NodeId, NodeId)>> {
    let graph = &part.graph;
    let mut out = Vec::new();

    let mut unprocessed: FxHashSet<NodeId> = part.nodes.iter().copied().collect();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    if let Some(start) = graph.max_degree_node() {
        frontier.push_back(start);
    }

    // Restart order when the frontier drains: ascending node id.
    let mut restart_order = part.nodes.clone();
    restart_order.sort_unstable();
    let mut restart_cursor = 0usize;

    while !unprocessed.is_empty() || !frontier.is_empty() {
        let x = match frontier.pop_front() {
            Some(x) => x,
            None => {
                while restart_cursor < restart_order.len()
                    && !unprocessed.contains(&restart_order[restart_cursor])
                {
                    restart_cursor += 1;
                }
                match restart_order.get(restart_cursor) {
                    Some(&n) => n,
                    None => break,
                }
            }
        };
        unprocessed.remove(&x);

        if let Some(motif) = match_at(graph, x, &unprocessed, policy)? {
            for &n in &motif.claimed {
                unprocessed.remove(&n);
                frontier.push_front(n);
            }
            out.extend(motif.edges);
        }
    }

    Ok(out)
}

/// Greedy first-found motif match anchored at `x`. Returns the first
/// valid motif, or `None` when no triangle exists among the still
/// unprocessed neighbors of `x`.
pub fn match_at(
    graph: &Graph,
    x: NodeId,
    unprocessed: &FxHashSet<NodeId>,
    policy: MotifPolicy,
) -> Result<Option<Motif>> {
    let x_adjs = graph
        .neighbors(x)
        .ok_or(PlanarityError::MissingNode { node: x })?;
    let x_adj_set: FxHashSet<NodeId> = x_adjs.iter().copied().collect();

    for &y in x_adjs {
        if !unprocessed.contains(&y) {
            continue;
        }
        let y_adjs = graph
            .neighbors(y)
            .ok_or(PlanarityError::MissingNode { node: y })?;
        for &z in y_adjs {
            if z == x || !unprocessed.contains(&z) || !x_adj_set.contains(&z) {
                continue;
            }
            // Triangle x-y-z found; richer policies try to extend it.
            let mut motif = Motif {
                claimed: vec![y, z],
                edges: vec![(x, y), (x, z), (y, z)],
            };
            if policy != MotifPolicy::Triangle {
                extend_triangle(graph, x, y, z, unprocessed, policy, &mut motif)?;
            }
            return Ok(Some(motif));
        }
    }

    Ok(None)
}

/// Chain adjacency checks onto the triangle x-y-z: w adjacent to both
/// y and z (diamond), then v adjacent to both y and w (house). Leaves
/// the motif as-is when no extension node qualifies.
fn extend_triangle(
    graph: &Graph,
    x: NodeId,
    y: NodeId,
    z: NodeId,
    unprocessed: &FxHashSet<NodeId>,
    policy: MotifPolicy,
    motif: &mut Motif,
) -> Result<()> {
    let y_adjs = graph
        .neighbors(y)
        .ok_or(PlanarityError::MissingNode { node: y })?;
    let z_adj_set: FxHashSet<NodeId> = graph
        .neighbors(z)
        .ok_or(PlanarityError::MissingNode { node: z })?
        .iter()
        .copied()
        .collect();

    let w = y_adjs.iter().copied().find(|&w| {
        w != x && w != z && unprocessed.contains(&w) && z_adj_set.contains(&w)
    });
    let w = match w {
        Some(w) => w,
        None => return Ok(()),
    };
    motif.claimed.push(w);
    motif.edges.push((y, w));
    motif.edges.push((z, w));

    if policy != MotifPolicy::House {
        return Ok(());
    }

    let w_adj_set: FxHashSet<NodeId> = graph
        .neighbors(w)
        .ok_or(PlanarityError::MissingNode { node: w })?
        .iter()
        .copied()
        .collect();
    let v = y_adjs.iter().copied().find(|&v| {
        v != x && v != z && v != w && unprocessed.contains(&v) && w_adj_set.contains(&v)
    });
    if let Some(v) = v {
        motif.claimed.push(v);
        motif.edges.push((y, v));
        motif.edges.push((v, w));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::partition::SeedPolicy;

    fn whole_graph_partition(g: &Graph) -> Partition {
        let mut parts = partition(g, 1, 0, SeedPolicy::RandomSample).unwrap();
        parts.remove(0)
    }

    fn normalize(mut edges: Vec<(NodeId, NodeId)>) -> Vec<(NodeId, NodeId)> {
        for e in edges.iter_mut() {
            if e.0 > e.1 {
                *e = (e.1, e.0);
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    #[test]
    fn test_single_triangle_emits_exactly_its_edges() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        let part = whole_graph_partition(&g);
        let edges = propagate(&part, MotifPolicy::Triangle).unwrap();
        assert_eq!(normalize(edges), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_path_has_no_triangle_and_emits_nothing() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let part = whole_graph_partition(&g);
        let edges = propagate(&part, MotifPolicy::Triangle).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_emitted_edges_exist_in_partition() {
        let g = Graph::from_edges(&[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 4),
            (3, 5),
            (4, 5),
        ]);
        let part = whole_graph_partition(&g);
        for policy in [MotifPolicy::Triangle, MotifPolicy::Diamond, MotifPolicy::House] {
            let edges = propagate(&part, policy).unwrap();
            for (a, b) in edges {
                assert!(
                    part.graph.neighbors(a).unwrap().contains(&b),
                    "emitted edge ({a},{b}) not adjacent in partition"
                );
            }
        }
    }

    #[test]
    fn test_match_found_and_not_found_branches() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let unprocessed: FxHashSet<NodeId> = [1, 2, 3].into_iter().collect();

        let found = match_at(&g, 0, &unprocessed, MotifPolicy::Triangle).unwrap();
        assert!(found.is_some());
        let motif = found.unwrap();
        assert_eq!(motif.edges.len(), 3);

        // Node 3 has no unprocessed triangle around it.
        let miss = match_at(&g, 3, &unprocessed, MotifPolicy::Triangle).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn test_diamond_policy_extends_to_five_edges() {
        // K4 on {0,1,2,3}: any triangle extends with a fourth node.
        let g = Graph::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let part = whole_graph_partition(&g);
        let edges = propagate(&part, MotifPolicy::Diamond).unwrap();
        assert_eq!(normalize(edges).len(), 5);
    }

    #[test]
    fn test_diamond_policy_falls_back_to_triangle() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        let part = whole_graph_partition(&g);
        let edges = propagate(&part, MotifPolicy::Diamond).unwrap();
        assert_eq!(normalize(edges), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_house_policy_extends_to_seven_edges() {
        // K5 minus nothing: plenty of extension nodes.
        let mut edges = Vec::new();
        for a in 0..5 {
            for b in (a + 1)..5 {
                edges.push((a, b));
            }
        }
        let g = Graph::from_edges(&edges);
        let part = whole_graph_partition(&g);
        let out = propagate(&part, MotifPolicy::House).unwrap();
        assert_eq!(normalize(out).len(), 7);
    }

    #[test]
    fn test_disconnected_pieces_all_examined() {
        // Two triangles with no connection; both must be matched.
        let g = Graph::from_edges(&[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        let part = whole_graph_partition(&g);
        let edges = propagate(&part, MotifPolicy::Triangle).unwrap();
        assert_eq!(
            normalize(edges),
            vec![(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]
        );
    }

    #[test]
    fn test_motif_policy_labels() {
        assert_eq!(MotifPolicy::Triangle.as_str(), "triangle");
        assert_eq!(MotifPolicy::House.to_string(), "house");
    }
}
