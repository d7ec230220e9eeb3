use std::fmt::{self, Display};

use gm_core::{invalid_parameter, ErrorInfo, GmError, Label, Position, Sentinel, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Graph, Vertex};

/// Circular layout shared by the cycle-based families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Centre of the circle.
    pub center: Position,
    /// Radius of the (outer) circle.
    pub radius: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            center: Position::new(250.0, 200.0),
            radius: 150.0,
        }
    }
}

/// Two-row layout used by the complete bipartite family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Centre of the top row.
    pub origin: Position,
    /// Horizontal distance between neighbouring vertices in a row.
    pub spacing: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            origin: Position::new(250.0, 100.0),
            spacing: 60.0,
        }
    }
}

/// Named graph families. Their names are reserved in the graph-name namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Circulant cycle.
    Cycle,
    /// Generalized Petersen graph.
    Petersen,
    /// Complete graph.
    Complete,
    /// Wheel graph.
    Wheel,
    /// Complete bipartite graph.
    CompleteBipartite,
}

impl Family {
    /// Every family, in registry order.
    pub const ALL: [Family; 5] = [
        Family::Cycle,
        Family::Petersen,
        Family::Complete,
        Family::Wheel,
        Family::CompleteBipartite,
    ];

    /// Returns the registry name of the family.
    pub fn name(self) -> &'static str {
        match self {
            Family::Cycle => "cycle",
            Family::Petersen => "petersen",
            Family::Complete => "complete",
            Family::Wheel => "wheel",
            Family::CompleteBipartite => "complete_bipartite",
        }
    }

    /// Looks a family up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns whether `name` collides with a generator family name.
pub fn is_reserved_name(name: &str) -> bool {
    Family::from_name(name).is_some()
}

/// A family together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum GeneratorSpec {
    /// See [`cycle`].
    Cycle {
        /// Vertex count.
        n: usize,
        /// Offset added to the bookkeeping labels.
        rotation_offset: usize,
        /// Index step between connected vertices.
        skip: usize,
    },
    /// See [`generalized_petersen`].
    Petersen {
        /// Vertices per ring.
        n: usize,
        /// Outer ring step.
        k: usize,
    },
    /// See [`complete`].
    Complete {
        /// Vertex count.
        n: usize,
    },
    /// See [`wheel`].
    Wheel {
        /// Rim vertex count.
        n: usize,
    },
    /// See [`complete_bipartite`].
    CompleteBipartite {
        /// Top row size.
        n1: usize,
        /// Bottom row size.
        n2: usize,
        /// Vertical offset of the bottom row.
        gap: f64,
    },
}

impl GeneratorSpec {
    /// Returns the family these parameters build.
    pub fn family(&self) -> Family {
        match self {
            GeneratorSpec::Cycle { .. } => Family::Cycle,
            GeneratorSpec::Petersen { .. } => Family::Petersen,
            GeneratorSpec::Complete { .. } => Family::Complete,
            GeneratorSpec::Wheel { .. } => Family::Wheel,
            GeneratorSpec::CompleteBipartite { .. } => Family::CompleteBipartite,
        }
    }
}

/// Clears `graph` and builds the family described by `spec` into it.
pub fn generate(graph: &mut Graph, spec: &GeneratorSpec, layout: &Layout) -> Result<(), GmError> {
    match *spec {
        GeneratorSpec::Cycle {
            n,
            rotation_offset,
            skip,
        } => cycle(graph, n, rotation_offset, skip, layout),
        GeneratorSpec::Petersen { n, k } => generalized_petersen(graph, n, k, layout),
        GeneratorSpec::Complete { n } => complete(graph, n, layout),
        GeneratorSpec::Wheel { n } => wheel(graph, n, layout),
        GeneratorSpec::CompleteBipartite { n1, n2, gap } => {
            let rows = RowLayout {
                origin: Position::new(layout.center.x, layout.center.y - gap / 2.0),
                ..RowLayout::default()
            };
            complete_bipartite(graph, n1, n2, gap, &rows)
        }
    }
}

/// Builds the circulant graph on `n` vertices with step `skip`; `skip = 1` is a plain cycle.
pub fn cycle(
    graph: &mut Graph,
    n: usize,
    rotation_offset: usize,
    skip: usize,
    layout: &Layout,
) -> Result<(), GmError> {
    ensure_positive("n", n)?;
    ensure_positive("skip", skip)?;
    let in_range = rotation_offset
        .checked_add(n)
        .is_some_and(|end| i64::try_from(end).is_ok());
    if !in_range {
        return Err(
            invalid_parameter("rotation_offset", "rotation offset pushes labels out of range")
                .with_context("value", rotation_offset),
        );
    }
    graph.clear();
    place_ring(graph, n, rotation_offset, skip, layout.center, layout.radius)?;
    graph.clear_labels();
    debug!(family = "cycle", n, skip, edges = graph.edge_count(), "generated graph");
    Ok(())
}

/// Builds the generalized Petersen graph: an outer ring of step `k`, an inner
/// ring of step 1 at half the radius, and spokes joining matching positions.
pub fn generalized_petersen(
    graph: &mut Graph,
    n: usize,
    k: usize,
    layout: &Layout,
) -> Result<(), GmError> {
    ensure_positive("n", n)?;
    ensure_positive("k", k)?;
    graph.clear();
    place_ring(graph, n, 0, k, layout.center, layout.radius)?;
    place_ring(graph, n, n, 1, layout.center, layout.radius / 2.0)?;
    for i in 0..n {
        let outer = labelled(graph, &Label::integer(i)?)?;
        let inner = labelled(graph, &Label::integer(n + i)?)?;
        graph.create_edge(outer.as_str(), inner.as_str())?;
    }
    graph.clear_labels();
    debug!(family = "petersen", n, k, edges = graph.edge_count(), "generated graph");
    Ok(())
}

/// Builds the complete graph on `n` vertices.
pub fn complete(graph: &mut Graph, n: usize, layout: &Layout) -> Result<(), GmError> {
    ensure_positive("n", n)?;
    graph.clear();
    place_circle(graph, n, 0, layout.center, layout.radius)?;
    for i in 0..n {
        let a = labelled(graph, &Label::integer(i)?)?;
        for j in (i + 1)..n {
            let b = labelled(graph, &Label::integer(j)?)?;
            graph.create_edge(a.as_str(), b.as_str())?;
        }
    }
    graph.clear_labels();
    debug!(family = "complete", n, edges = graph.edge_count(), "generated graph");
    Ok(())
}

/// Builds the wheel: a cycle on `n` vertices plus a hub joined to each of them.
pub fn wheel(graph: &mut Graph, n: usize, layout: &Layout) -> Result<(), GmError> {
    ensure_positive("n", n)?;
    graph.clear();
    place_ring(graph, n, 0, 1, layout.center, layout.radius)?;
    let hub = graph.next_vertex_id();
    graph.create_vertex(
        Vertex::new(hub.clone(), layout.center).with_labels([Label::Sentinel(Sentinel::Center)]),
    )?;
    for i in 0..n {
        let rim = labelled(graph, &Label::integer(i)?)?;
        graph.create_edge(hub.as_str(), rim.as_str())?;
    }
    graph.clear_labels();
    debug!(family = "wheel", n, edges = graph.edge_count(), "generated graph");
    Ok(())
}

/// Builds K(n1, n2): `n1` vertices on the top row, `n2` on a row `gap` below,
/// every top vertex joined to every bottom vertex.
pub fn complete_bipartite(
    graph: &mut Graph,
    n1: usize,
    n2: usize,
    gap: f64,
    rows: &RowLayout,
) -> Result<(), GmError> {
    ensure_positive("n1", n1)?;
    ensure_positive("n2", n2)?;
    if !gap.is_finite() {
        return Err(invalid_parameter("gap", "row gap must be finite").with_context("value", gap));
    }
    graph.clear();
    place_row(graph, n1, 0, rows.origin, rows.spacing)?;
    let bottom = Position::new(rows.origin.x, rows.origin.y + gap);
    place_row(graph, n2, n1, bottom, rows.spacing)?;
    for i in 0..n1 {
        let top = labelled(graph, &Label::integer(i)?)?;
        for j in 0..n2 {
            let below = labelled(graph, &Label::integer(n1 + j)?)?;
            graph.create_edge(top.as_str(), below.as_str())?;
        }
    }
    graph.clear_labels();
    debug!(
        family = "complete_bipartite",
        n1,
        n2,
        edges = graph.edge_count(),
        "generated graph"
    );
    Ok(())
}

/// Places `n` labelled vertices on a circle and wires vertex `offset+i` to `offset+(i+skip) mod n`.
///
/// `offset + n` must not overflow.
///
/// Wiring that would produce a self-loop or repeat an existing edge is
/// collapsed, so `Cycle(2)` is a single edge and even `n` with `skip = n/2`
/// yields a perfect matching.
fn place_ring(
    graph: &mut Graph,
    n: usize,
    offset: usize,
    skip: usize,
    center: Position,
    radius: f64,
) -> Result<(), GmError> {
    place_circle(graph, n, offset, center, radius)?;
    let step = skip % n;
    for i in 0..n {
        let a = labelled(graph, &Label::integer(offset + i)?)?;
        let b = labelled(graph, &Label::integer(offset + (i + step) % n)?)?;
        if a == b || graph.has_edge(a.as_str(), b.as_str()) {
            continue;
        }
        graph.create_edge(a.as_str(), b.as_str())?;
    }
    Ok(())
}

fn place_circle(
    graph: &mut Graph,
    n: usize,
    offset: usize,
    center: Position,
    radius: f64,
) -> Result<(), GmError> {
    for i in 0..n {
        let position = center.on_circle(radius, Position::slot_angle(i, n));
        let id = graph.add_vertex_at(position);
        push_label(graph, &id, Label::integer(offset + i)?);
    }
    Ok(())
}

fn place_row(
    graph: &mut Graph,
    n: usize,
    offset: usize,
    center: Position,
    spacing: f64,
) -> Result<(), GmError> {
    let half_width = (n.saturating_sub(1)) as f64 * spacing / 2.0;
    for i in 0..n {
        let position = Position::new(center.x - half_width + i as f64 * spacing, center.y);
        let id = graph.add_vertex_at(position);
        push_label(graph, &id, Label::integer(offset + i)?);
    }
    Ok(())
}

fn push_label(graph: &mut Graph, id: &VertexId, label: Label) {
    if let Some(vertex) = graph.vertex_mut(id.as_str()) {
        vertex.labels.push(label);
    }
}

fn labelled(graph: &Graph, label: &Label) -> Result<VertexId, GmError> {
    graph
        .find_by_label(label)
        .map(|vertex| vertex.id().clone())
        .ok_or_else(|| {
            GmError::VertexNotFound(
                ErrorInfo::new("unlabelled-vertex", "no vertex carries the bookkeeping label")
                    .with_context("label", label),
            )
        })
}

fn ensure_positive(parameter: &str, value: usize) -> Result<(), GmError> {
    if value == 0 {
        return Err(
            invalid_parameter(parameter, "parameter must be positive").with_context("value", 0),
        );
    }
    Ok(())
}
