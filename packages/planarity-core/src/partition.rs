//! Node-disjoint induced-subgraph partitioning.
//!
//! Splits the input into `k` partitions: seed sampling with a reproducible
//! PRNG, direct-neighbor absorption, bounded BFS growth, then round-robin
//! distribution of whatever the neighborhoods never reached. Node coverage
//! is exact and disjoint; edge coverage is not exhaustive — an input edge
//! survives only if both endpoints land in the same partition by the time
//! the later one is absorbed. That trade-off keeps partitioning O(V+E).

use crate::error::{PlanarityError, Result};
use crate::graph::{intersect, Graph, NodeId};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// How partition seed nodes are chosen from the unassigned pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Sample k distinct nodes with the seeded PRNG.
    #[default]
    RandomSample,
    /// Spread seeds by degree: start at the max-degree node, then
    /// repeatedly take the max-degree node among candidates at distance
    /// >= 2 from every seed so far. Falls back to random sampling when
    /// the candidate set empties early.
    DegreeSpread,
}

impl SeedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::RandomSample => "random-sample",
            SeedPolicy::DegreeSpread => "degree-spread",
        }
    }
}

impl std::fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One worker's share of the input: a disjoint node subset plus the
/// induced edges discovered while building it.
#[derive(Debug, Clone)]
pub struct Partition {
    pub nodes: Vec<NodeId>,
    pub graph: Graph,
}

impl Partition {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            graph: Graph::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct Assignment {
    parts: Vec<Partition>,
    owner: FxHashMap<NodeId, usize>,
}

impl Assignment {
    fn new(k: usize) -> Self {
        Self {
            parts: (0..k).map(|_| Partition::new()).collect(),
            owner: FxHashMap::default(),
        }
    }

    /// Move `node` into partition `idx`, wiring it to every partition
    /// member it is adjacent to in the input graph.
    fn absorb(&mut self, input: &Graph, idx: usize, node: NodeId) -> Result<()> {
        let Assignment { parts, owner } = self;
        let part = &mut parts[idx];
        part.nodes.push(node);
        part.graph.add_node(node);
        for &m in input
            .neighbors(node)
            .ok_or(PlanarityError::MissingNode { node })?
        {
            if owner.get(&m) == Some(&idx) {
                part.graph.add_edge(node, m);
            }
        }
        owner.insert(node, idx);
        Ok(())
    }
}

/// Split `input` into `k` node-disjoint induced subgraphs whose node sets
/// union to exactly the input's node set. Identical input, `k`, `seed`,
/// and policy give identical partitions across runs.
pub fn partition(
    input: &Graph,
    k: usize,
    seed: u64,
    policy: SeedPolicy,
) -> Result<Vec<Partition>> {
    if k == 0 {
        return Err(PlanarityError::InvalidWorkerCount(0));
    }

    // Sorted pool keeps the PRNG sequence independent of map iteration
    // order: same seed, same partitions.
    let pool = input.nodes_sorted();
    let mut rng = Pcg64::seed_from_u64(seed);
    let seeds = select_seeds(input, &pool, k, policy, &mut rng)?;

    let mut unassigned: FxHashSet<NodeId> = pool.iter().copied().collect();
    let mut assignment = Assignment::new(k);

    for (idx, &s) in seeds.iter().enumerate() {
        unassigned.remove(&s);
        assignment.absorb(input, idx, s)?;
    }

    // Absorb each seed's still-unassigned direct neighbors.
    for (idx, &s) in seeds.iter().enumerate() {
        for &m in input
            .neighbors(s)
            .ok_or(PlanarityError::MissingNode { node: s })?
        {
            if unassigned.remove(&m) {
                assignment.absorb(input, idx, m)?;
            }
        }
    }

    // Bounded BFS growth over the remaining unassigned nodes.
    let cap = input.num_nodes() / k;
    for idx in 0..seeds.len() {
        let mut queue: VecDeque<NodeId> = assignment.parts[idx].nodes.iter().copied().collect();
        let mut grown = 0usize;
        'grow: while let Some(x) = queue.pop_front() {
            for &m in input
                .neighbors(x)
                .ok_or(PlanarityError::MissingNode { node: x })?
            {
                if grown >= cap {
                    break 'grow;
                }
                if unassigned.remove(&m) {
                    assignment.absorb(input, idx, m)?;
                    queue.push_back(m);
                    grown += 1;
                }
            }
        }
    }

    // Leftovers (neighborhoods exhausted before the cap): round-robin.
    let mut leftovers: Vec<NodeId> = unassigned.iter().copied().collect();
    leftovers.sort_unstable();
    for (i, n) in leftovers.into_iter().enumerate() {
        assignment.absorb(input, i % k, n)?;
    }

    let mut parts = assignment.parts;
    for p in &mut parts {
        p.graph.dedupe();
    }
    Ok(parts)
}

fn select_seeds(
    input: &Graph,
    pool: &[NodeId],
    k: usize,
    policy: SeedPolicy,
    rng: &mut Pcg64,
) -> Result<Vec<NodeId>> {
    let mut seeds = match policy {
        SeedPolicy::RandomSample => Vec::new(),
        SeedPolicy::DegreeSpread => degree_spread_seeds(input, k)?,
    };

    if seeds.len() < k {
        let chosen: FxHashSet<NodeId> = seeds.iter().copied().collect();
        let remaining: Vec<NodeId> = pool
            .iter()
            .copied()
            .filter(|n| !chosen.contains(n))
            .collect();
        seeds.extend(
            remaining
                .choose_multiple(rng, k - seeds.len())
                .copied(),
        );
    }

    Ok(seeds)
}

fn degree_spread_seeds(input: &Graph, k: usize) -> Result<Vec<NodeId>> {
    let first = match input.max_degree_node() {
        Some(n) => n,
        None => return Ok(Vec::new()),
    };
    let mut seeds = vec![first];
    let mut candidates = input.distant_nodes(first, 2)?;

    while seeds.len() < k && !candidates.is_empty() {
        let next = match input.max_degree_node_in(&candidates) {
            Some(n) => n,
            None => break,
        };
        seeds.push(next);
        candidates.remove(&next);
        let next_distant = input.distant_nodes(next, 2)?;
        intersect(&mut candidates, &next_distant);
    }

    Ok(seeds)
}
