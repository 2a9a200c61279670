//! Adjacency representation and primitive graph operations.
//!
//! Neighbor sets are stored as plain vectors and canonicalized (sorted,
//! duplicates removed) by an explicit [`Graph::dedupe`] pass. `add_edge`
//! deliberately does not deduplicate; callers must run `dedupe` before
//! relying on set semantics or trustworthy degrees. Wherever iteration
//! order leaks into results (max-degree ties, seed order), ascending node
//! id is the fixed tie-break.

use crate::error::{PlanarityError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Dense unsigned node identifier, assigned by the loader.
pub type NodeId = usize;

/// Hard cap on layered BFS depth for [`Graph::distant_nodes`].
const MAX_BFS_LAYERS: usize = 7;

/// Undirected graph as a node -> neighbor-vector map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, canonicalized. Self-loops are
    /// dropped but both endpoints are still registered as nodes.
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut g = Self::new();
        for &(a, b) in edges {
            g.add_node(a);
            g.add_node(b);
            g.add_edge(a, b);
        }
        g.dedupe();
        g
    }

    /// Idempotent; ensures presence with an empty neighbor vector.
    pub fn add_node(&mut self, n: NodeId) {
        self.adjacency.entry(n).or_default();
    }

    /// Appends each endpoint to the other's neighbor vector. Duplicates
    /// may accumulate until the next `dedupe`. Self-loops are ignored
    /// (the node is still ensured present).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            self.add_node(a);
            return;
        }
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Sorts and uniques every neighbor vector. Required before any
    /// degree-sensitive or set-semantics operation.
    pub fn dedupe(&mut self) {
        for adjs in self.adjacency.values_mut() {
            adjs.sort_unstable();
            adjs.dedup();
        }
    }

    pub fn contains(&self, n: NodeId) -> bool {
        self.adjacency.contains_key(&n)
    }

    pub fn neighbors(&self, n: NodeId) -> Option<&[NodeId]> {
        self.adjacency.get(&n).map(Vec::as_slice)
    }

    fn neighbors_checked(&self, n: NodeId) -> Result<&[NodeId]> {
        self.neighbors(n)
            .ok_or(PlanarityError::MissingNode { node: n })
    }

    /// Neighbor-vector length. Trustworthy only post-dedupe.
    pub fn degree(&self, n: NodeId) -> Option<usize> {
        self.adjacency.get(&n).map(Vec::len)
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edge count (half the summed degrees). Call post-dedupe.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All node ids in ascending order.
    pub fn nodes_sorted(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Each undirected edge once, as (low, high). Call post-dedupe.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut out = Vec::with_capacity(self.num_edges());
        for (&n, adjs) in &self.adjacency {
            for &m in adjs {
                if n < m {
                    out.push((n, m));
                }
            }
        }
        out.sort_unstable();
        out
    }

    /// A maximum-degree node; ties broken by ascending node id.
    pub fn max_degree_node(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for (&n, adjs) in &self.adjacency {
            let deg = adjs.len();
            match best {
                Some((bn, bd)) if deg < bd || (deg == bd && n > bn) => {}
                _ => best = Some((n, deg)),
            }
        }
        best.map(|(n, _)| n)
    }

    /// Maximum-degree node restricted to `subset`, degrees measured in
    /// this graph. Subset members absent from the graph count as degree 0.
    pub fn max_degree_node_in(&self, subset: &FxHashSet<NodeId>) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for &n in subset {
            let deg = self.adjacency.get(&n).map_or(0, Vec::len);
            match best {
                Some((bn, bd)) if deg < bd || (deg == bd && n > bn) => {}
                _ => best = Some((n, deg)),
            }
        }
        best.map(|(n, _)| n)
    }

    /// Layered BFS from `source`, capped at 7 layers. Returns every node
    /// first reached at layer >= `min_dist`, cumulative across the
    /// remaining layers. The source sits at layer 0.
    pub fn distant_nodes(&self, source: NodeId, min_dist: usize) -> Result<FxHashSet<NodeId>> {
        self.neighbors_checked(source)?;

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut layer = vec![source];
        visited.insert(source);

        let mut distant = FxHashSet::default();

        for depth in 1..=MAX_BFS_LAYERS {
            let mut next = Vec::new();
            for &n in &layer {
                for &m in self.neighbors_checked(n)? {
                    if visited.insert(m) {
                        next.push(m);
                    }
                }
            }
            if depth >= min_dist {
                distant.extend(next.iter().copied());
            }
            if next.is_empty() {
                break;
            }
            layer = next;
        }

        // min_dist of 0 includes the source itself
        if min_dist == 0 {
            distant.insert(source);
        }

        Ok(distant)
    }

    /// BFS from `start`, returning its full reachable set in visit order.
    pub(crate) fn reachable_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut queue = VecDeque::from([start]);
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut component = Vec::new();

        while let Some(n) = queue.pop_front() {
            if !visited.insert(n) {
                continue;
            }
            component.push(n);
            if let Some(adjs) = self.neighbors(n) {
                for &m in adjs {
                    if !visited.contains(&m) {
                        queue.push_back(m);
                    }
                }
            }
        }

        component
    }
}

/// In-place set intersection: retain in `target` only members of `other`.
pub fn intersect(target: &mut FxHashSet<NodeId>, other: &FxHashSet<NodeId>) {
    target.retain(|n| other.contains(n));
}
