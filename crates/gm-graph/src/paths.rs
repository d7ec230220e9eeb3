use std::collections::{BTreeMap, VecDeque};

use gm_core::{GmError, Label, VertexId};

use crate::graph::{vertex_not_found, Graph};

/// Shortest-path distance per vertex; `None` marks an unreachable vertex.
pub type DistanceMap = BTreeMap<VertexId, Option<usize>>;

/// Ten-colour palette indexed by `distance % 10`.
pub const LAYER_PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe",
];

/// Breadth-first distances (edge counts) from `start` to every vertex.
pub fn bfs_distances(graph: &Graph, start: &str) -> Result<DistanceMap, GmError> {
    if !graph.contains(start) {
        return Err(vertex_not_found(start));
    }
    let mut distances: DistanceMap = graph.vertex_ids().map(|id| (id.clone(), None)).collect();
    let mut frontier = VecDeque::new();
    distances.insert(VertexId::from(start), Some(0));
    frontier.push_back((VertexId::from(start), 0usize));
    while let Some((current, depth)) = frontier.pop_front() {
        for neighbour in graph.neighbors(current.as_str())? {
            // dangling ids from a trusted import have no slot
            if let Some(slot) = distances.get_mut(neighbour) {
                if slot.is_none() {
                    *slot = Some(depth + 1);
                    frontier.push_back((neighbour.clone(), depth + 1));
                }
            }
        }
    }
    Ok(distances)
}

/// Histogram of reachable vertices by distance from `start`.
///
/// Bucket `i` counts vertices at distance exactly `i`. The start vertex is
/// counted in bucket 0, so an isolated vertex yields `[1]`.
pub fn distance_distribution(graph: &Graph, start: &str) -> Result<Vec<usize>, GmError> {
    let distances = bfs_distances(graph, start)?;
    let reachable: Vec<usize> = distances.values().filter_map(|d| *d).collect();
    let Some(&max) = reachable.iter().max() else {
        return Ok(Vec::new());
    };
    let mut histogram = vec![0usize; max + 1];
    for distance in reachable {
        histogram[distance] += 1;
    }
    Ok(histogram)
}

/// Appends a BFS layer label to every reachable vertex.
///
/// With `colorize` the label is the palette colour for `distance % 10`,
/// otherwise the raw distance. Existing labels are kept and unreachable
/// vertices are left untouched.
pub fn label_by_bfs(graph: &mut Graph, start: &str, colorize: bool) -> Result<(), GmError> {
    let distances = bfs_distances(graph, start)?;
    for (id, distance) in distances {
        let Some(distance) = distance else {
            continue;
        };
        let label = if colorize {
            layer_color(distance)
        } else {
            Label::integer(distance)?
        };
        graph.add_label(id.as_str(), label)?;
    }
    Ok(())
}

/// Returns the palette colour label of a BFS layer.
pub fn layer_color(distance: usize) -> Label {
    Label::Color(LAYER_PALETTE[distance % LAYER_PALETTE.len()].to_string())
}
