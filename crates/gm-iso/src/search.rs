use std::collections::{BTreeMap, HashMap};

use gm_core::{ErrorInfo, GmError, VertexId};
use gm_graph::Graph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::invariants::trivially_distinct;

/// Vertex bijection from the first graph onto the second.
pub type Mapping = BTreeMap<VertexId, VertexId>;

/// Options controlling the permutation search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoOptions {
    /// Maximum number of permutations to examine; `None` searches exhaustively.
    #[serde(default)]
    pub step_budget: Option<u64>,
}

impl IsoOptions {
    /// Options with a bounded search.
    pub fn with_budget(steps: u64) -> Self {
        Self {
            step_budget: Some(steps),
        }
    }
}

/// Returns whether `g1` and `g2` are isomorphic.
///
/// The search is factorial in the vertex count; it is only practical for
/// small graphs.
pub fn is_isomorphic(g1: &Graph, g2: &Graph) -> bool {
    matches!(find_isomorphism(g1, g2, &IsoOptions::default()), Ok(Some(_)))
}

/// Searches for an adjacency-preserving bijection from `g1` onto `g2`.
///
/// Pairs with different directedness, vertex counts or sorted degree
/// sequences are rejected before searching. Otherwise every permutation of
/// `g2`'s vertices is tried against `g1`'s vertex order and the first one
/// under which each mapped neighbour multiset equals the image's neighbour
/// multiset is returned.
pub fn find_isomorphism(
    g1: &Graph,
    g2: &Graph,
    opts: &IsoOptions,
) -> Result<Option<Mapping>, GmError> {
    if trivially_distinct(g1, g2) {
        debug!(left = g1.name(), right = g2.name(), "rejected by invariants");
        return Ok(None);
    }
    let left = IndexedAdjacency::new(g1);
    let right = IndexedAdjacency::new(g2);
    let right_sorted: Vec<Vec<Option<usize>>> = right
        .lists
        .iter()
        .map(|list| list.iter().copied().sorted().collect())
        .collect();

    let count = left.ids.len();
    let mut examined = 0u64;
    for perm in (0..count).permutations(count) {
        if let Some(budget) = opts.step_budget {
            if examined >= budget {
                return Err(GmError::SearchBudget(
                    ErrorInfo::new("iso-budget", "isomorphism search exceeded its step budget")
                        .with_context("budget", budget)
                        .with_context("vertices", count),
                ));
            }
        }
        examined += 1;
        if preserves_adjacency(&left.lists, &right_sorted, &perm) {
            debug!(
                left = g1.name(),
                right = g2.name(),
                examined,
                "found isomorphism"
            );
            let mapping = perm
                .iter()
                .enumerate()
                .map(|(idx, &image)| (left.ids[idx].clone(), right.ids[image].clone()))
                .collect();
            return Ok(Some(mapping));
        }
    }
    debug!(
        left = g1.name(),
        right = g2.name(),
        examined,
        "search exhausted"
    );
    Ok(None)
}

/// Adjacency lists rewritten over vertex positions; dangling ids become `None`.
struct IndexedAdjacency {
    ids: Vec<VertexId>,
    lists: Vec<Vec<Option<usize>>>,
}

impl IndexedAdjacency {
    fn new(graph: &Graph) -> Self {
        let ids: Vec<VertexId> = graph.vertex_ids().cloned().collect();
        let index: HashMap<&VertexId, usize> =
            ids.iter().enumerate().map(|(idx, id)| (id, idx)).collect();
        let lists = ids
            .iter()
            .map(|id| {
                graph
                    .adjacency()
                    .get(id)
                    .map(|neighbours| {
                        neighbours
                            .iter()
                            .map(|neighbour| index.get(neighbour).copied())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();
        Self { ids, lists }
    }
}

fn preserves_adjacency(
    left: &[Vec<Option<usize>>],
    right_sorted: &[Vec<Option<usize>>],
    perm: &[usize],
) -> bool {
    left.iter().enumerate().all(|(idx, neighbours)| {
        let target = &right_sorted[perm[idx]];
        if neighbours.len() != target.len() {
            return false;
        }
        let mapped: Vec<Option<usize>> = neighbours
            .iter()
            .map(|neighbour| neighbour.map(|n| perm[n]))
            .sorted()
            .collect();
        mapped == *target
    })
}
