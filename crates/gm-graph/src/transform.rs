use std::collections::BTreeMap;

use gm_core::{ErrorInfo, ErrorKind, GmError, Label, VertexId};
use tracing::debug;

use crate::flags::GraphConfig;
use crate::graph::{vertex_not_found, Graph, Vertex};

/// Builds the line graph of `graph`.
///
/// Each original vertex is visited in order: every edge still incident to it
/// becomes a new vertex at the edge midpoint labelled with the endpoint pair,
/// then the original vertex is removed, so each edge is materialised exactly
/// once. Derived vertices are joined when their pairs share an endpoint.
/// The result is simple and undirected; labels are stripped at the end.
/// Directed input is read through its underlying undirected multigraph, so
/// every arc becomes one derived vertex.
pub fn line_graph(graph: &Graph) -> Result<Graph, GmError> {
    let config = GraphConfig {
        simple: true,
        directed: false,
        id_seed: graph.config().id_seed,
    };
    let mut work = Graph::new(format!("Line: {}", graph.name()), config);
    for vertex in graph.vertices() {
        work.create_vertex(vertex.clone())?;
    }
    for (id, neighbours) in underlying_adjacency(graph) {
        work.replace_neighbors(&id, neighbours);
    }

    let originals: Vec<VertexId> = graph.vertex_ids().cloned().collect();
    let mut derived: Vec<VertexId> = Vec::new();
    for original in &originals {
        let origin = work.position(original.as_str())?;
        let incident = work.neighbors(original.as_str())?.to_vec();
        let mut loops = 0usize;
        for neighbour in incident {
            if neighbour == *original {
                // an undirected loop occupies two slots of its own list
                loops += 1;
                if loops % 2 == 0 {
                    continue;
                }
            }
            let far = work.position(neighbour.as_str()).unwrap_or(origin);
            let id = work.next_vertex_id();
            work.create_vertex(
                Vertex::new(id.clone(), origin.midpoint(far))
                    .with_labels([Label::Pair(original.clone(), neighbour)]),
            )?;
            derived.push(id);
        }
        work.remove_vertex(original.as_str())?;
    }

    for (idx, a) in derived.iter().enumerate() {
        for b in &derived[idx + 1..] {
            if pair_label(&work, a)?.shares_endpoint(pair_label(&work, b)?) {
                connect_once(&mut work, a, b)?;
            }
        }
    }
    work.clear_labels();
    debug!(
        source = graph.name(),
        vertices = work.len(),
        edges = work.edge_count(),
        "built line graph"
    );
    Ok(work)
}

/// Builds the Cartesian product of two graphs.
///
/// Product vertex `(u, v)` sits at the midpoint of `u` and `v`. `(u1, v)` and
/// `(u2, v)` are adjacent when `u1`-`u2` is an edge of `g1`; `(u, v1)` and
/// `(u, v2)` are adjacent when `v1`-`v2` is an edge of `g2`.
pub fn cartesian_product(g1: &Graph, g2: &Graph) -> Result<Graph, GmError> {
    let config = GraphConfig {
        simple: true,
        directed: false,
        id_seed: g1.config().id_seed,
    };
    let mut product = Graph::new(format!("Cartesian: {} x {}", g1.name(), g2.name()), config);
    for u in g1.vertices() {
        for v in g2.vertices() {
            let id = product.next_vertex_id();
            product.create_vertex(
                Vertex::new(id, u.position.midpoint(v.position))
                    .with_labels([Label::Pair(u.id().clone(), v.id().clone())]),
            )?;
        }
    }

    for u1 in g1.vertex_ids() {
        for u2 in g1.neighbors(u1.as_str())? {
            for v in g2.vertex_ids() {
                let a = product_vertex(&product, u1, v)?;
                let b = product_vertex(&product, u2, v)?;
                connect_once(&mut product, &a, &b)?;
            }
        }
    }
    for v1 in g2.vertex_ids() {
        for v2 in g2.neighbors(v1.as_str())? {
            for u in g1.vertex_ids() {
                let a = product_vertex(&product, u, v1)?;
                let b = product_vertex(&product, u, v2)?;
                connect_once(&mut product, &a, &b)?;
            }
        }
    }
    product.clear_labels();
    debug!(
        left = g1.name(),
        right = g2.name(),
        vertices = product.len(),
        edges = product.edge_count(),
        "built cartesian product"
    );
    Ok(product)
}

/// Tensor (categorical) product of two graphs.
///
/// Not implemented: always returns [`GmError::Unsupported`].
pub fn tensor_product(g1: &Graph, g2: &Graph) -> Result<Graph, GmError> {
    Err(GmError::Unsupported(
        ErrorInfo::new("tensor-product", "tensor product is not implemented")
            .with_context("left", g1.name())
            .with_context("right", g2.name())
            .with_hint("use cartesian_product for the supported product"),
    ))
}

fn underlying_adjacency(graph: &Graph) -> BTreeMap<VertexId, Vec<VertexId>> {
    if !graph.is_directed() {
        return graph.adjacency().clone();
    }
    let mut adjacency: BTreeMap<VertexId, Vec<VertexId>> = graph
        .vertex_ids()
        .map(|id| (id.clone(), Vec::new()))
        .collect();
    for (from, heads) in graph.adjacency() {
        for to in heads {
            if let Some(list) = adjacency.get_mut(from) {
                list.push(to.clone());
            }
            if let Some(list) = adjacency.get_mut(to) {
                list.push(from.clone());
            }
        }
    }
    adjacency
}

/// Joins two vertices; an existing edge counts as success and loops are skipped.
fn connect_once(graph: &mut Graph, a: &VertexId, b: &VertexId) -> Result<(), GmError> {
    if a == b {
        return Ok(());
    }
    match graph.create_edge(a.as_str(), b.as_str()) {
        Err(err) if err.is(ErrorKind::DuplicateEdge) => Ok(()),
        other => other,
    }
}

fn pair_label<'g>(graph: &'g Graph, id: &VertexId) -> Result<&'g Label, GmError> {
    graph
        .find_by_id(id.as_str())
        .and_then(Vertex::first_label)
        .ok_or_else(|| vertex_not_found(id.as_str()))
}

fn product_vertex(product: &Graph, u: &VertexId, v: &VertexId) -> Result<VertexId, GmError> {
    product
        .find_by_label(&Label::Pair(u.clone(), v.clone()))
        .map(|vertex| vertex.id().clone())
        .ok_or_else(|| vertex_not_found(&format!("({u}, {v})")))
}
