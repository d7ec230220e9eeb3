use std::collections::{BTreeMap, HashMap};

use gm_core::{ErrorInfo, GmError, IdGenerator, Label, Position, VertexId};

use crate::flags::GraphConfig;

/// A vertex owned by a [`Graph`].
///
/// The identifier is fixed at construction; position and labels may change.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    /// Opaque drawing position.
    pub position: Position,
    /// Labels attached by generators, transformations and labeling passes.
    pub labels: Vec<Label>,
}

impl Vertex {
    /// Creates an unlabelled vertex.
    pub fn new(id: impl Into<VertexId>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            labels: Vec::new(),
        }
    }

    /// Builder-style helper attaching labels.
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    /// Returns the vertex identifier.
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// Returns whether the vertex carries `label`.
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Returns the first attached label.
    pub fn first_label(&self) -> Option<&Label> {
        self.labels.first()
    }
}

/// Mutable graph: an ordered vertex arena plus an identifier-keyed adjacency map.
///
/// Vertex order is insertion order and drives serialization and search order.
/// Every vertex has exactly one adjacency entry and vice versa. Undirected
/// graphs keep adjacency symmetric. Simple graphs hold no self-loops and no
/// parallel edges.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    config: GraphConfig,
    vertices: Vec<Vertex>,
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
    ids: IdGenerator,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(name: impl Into<String>, config: GraphConfig) -> Self {
        Self {
            name: name.into(),
            config,
            vertices: Vec::new(),
            adjacency: BTreeMap::new(),
            ids: IdGenerator::from_optional_seed(config.id_seed),
        }
    }

    /// Returns the graph name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the graph name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns whether the graph rejects self-loops and parallel edges.
    pub fn is_simple(&self) -> bool {
        self.config.simple
    }

    /// Returns whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex identifiers in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = &VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Returns the raw adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<VertexId, Vec<VertexId>> {
        &self.adjacency
    }

    /// Returns whether a vertex with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Draws a fresh identifier not used by any vertex of this graph.
    pub fn next_vertex_id(&mut self) -> VertexId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(id.as_str()) {
                return id;
            }
        }
    }

    /// Creates a vertex with a generated identifier and returns that identifier.
    pub fn add_vertex_at(&mut self, position: Position) -> VertexId {
        let id = self.next_vertex_id();
        self.vertices.push(Vertex::new(id.clone(), position));
        self.adjacency.insert(id.clone(), Vec::new());
        id
    }

    /// Appends `vertex` and gives it an empty adjacency list.
    pub fn create_vertex(&mut self, vertex: Vertex) -> Result<(), GmError> {
        if self.contains(vertex.id.as_str()) {
            return Err(GmError::DuplicateVertex(
                ErrorInfo::new("duplicate-vertex", "vertex already exists")
                    .with_context("vertex", &vertex.id),
            ));
        }
        self.adjacency.insert(vertex.id.clone(), Vec::new());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Removes a vertex, every reference to it in other adjacency lists and its own entry.
    pub fn remove_vertex(&mut self, id: &str) -> Result<Vertex, GmError> {
        let index = self.index_of(id).ok_or_else(|| vertex_not_found(id))?;
        let vertex = self.vertices.remove(index);
        self.adjacency.remove(id);
        for neighbours in self.adjacency.values_mut() {
            neighbours.retain(|neighbour| neighbour.as_str() != id);
        }
        Ok(vertex)
    }

    /// Connects `a` to `b` (and `b` to `a` when undirected).
    pub fn create_edge(&mut self, a: &str, b: &str) -> Result<(), GmError> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        if self.config.simple {
            if self.has_edge(a, b) {
                return Err(GmError::DuplicateEdge(
                    ErrorInfo::new("duplicate-edge", "edge already exists")
                        .with_context("from", a)
                        .with_context("to", b),
                ));
            }
            if a == b {
                return Err(GmError::SelfLoop(
                    ErrorInfo::new("self-loop", "simple graphs cannot connect a vertex to itself")
                        .with_context("vertex", a),
                ));
            }
        }
        self.push_neighbour(a, b);
        if !self.config.directed {
            self.push_neighbour(b, a);
        }
        Ok(())
    }

    /// Removes one occurrence of the edge; absent edges are a no-op.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<(), GmError> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        self.drop_neighbour(a, b);
        if !self.config.directed {
            self.drop_neighbour(b, a);
        }
        Ok(())
    }

    /// Returns whether `a` and `b` are connected in either direction.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        let forward = self
            .adjacency
            .get(a)
            .is_some_and(|list| list.iter().any(|n| n.as_str() == b));
        forward
            || self
                .adjacency
                .get(b)
                .is_some_and(|list| list.iter().any(|n| n.as_str() == a))
    }

    /// Returns the ordered neighbour list of a vertex.
    pub fn neighbors(&self, id: &str) -> Result<&[VertexId], GmError> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| vertex_not_found(id))
    }

    /// Returns the length of a vertex's adjacency list.
    pub fn degree(&self, id: &str) -> Result<usize, GmError> {
        Ok(self.neighbors(id)?.len())
    }

    /// Returns the degree of every vertex, in vertex order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .map(|vertex| self.adjacency.get(&vertex.id).map_or(0, Vec::len))
            .collect()
    }

    /// Returns the number of edges: half the degree sum when undirected.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.adjacency.values().map(Vec::len).sum();
        if self.config.directed {
            total
        } else {
            total / 2
        }
    }

    /// Lists edges as identifier pairs; undirected edges are reported once.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let order: HashMap<&VertexId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(idx, vertex)| (&vertex.id, idx))
            .collect();
        let mut edges = Vec::new();
        for (idx, vertex) in self.vertices.iter().enumerate() {
            let Some(neighbours) = self.adjacency.get(&vertex.id) else {
                continue;
            };
            let mut loops = 0usize;
            for neighbour in neighbours {
                let keep = if self.config.directed {
                    true
                } else if *neighbour == vertex.id {
                    // undirected loops are listed twice in their own adjacency
                    loops += 1;
                    loops % 2 == 1
                } else {
                    order.get(neighbour).map_or(true, |&other| idx < other)
                };
                if keep {
                    edges.push((vertex.id.clone(), neighbour.clone()));
                }
            }
        }
        edges
    }

    /// Empties vertices and adjacency.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    /// Looks a vertex up by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.id.as_str() == id)
    }

    /// Mutable variant of [`Graph::find_by_id`].
    pub fn vertex_mut(&mut self, id: &str) -> Option<&mut Vertex> {
        self.vertices
            .iter_mut()
            .find(|vertex| vertex.id.as_str() == id)
    }

    /// Returns the first vertex carrying `label`.
    pub fn find_by_label(&self, label: &Label) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.has_label(label))
    }

    /// Returns every vertex carrying `label`, in vertex order.
    pub fn find_all_by_label(&self, label: &Label) -> Vec<&Vertex> {
        self.vertices
            .iter()
            .filter(|vertex| vertex.has_label(label))
            .collect()
    }

    /// Returns the first vertex whose hit box of half-width `radius` contains `point`.
    pub fn vertex_at(&self, point: Position, radius: f64) -> Option<&Vertex> {
        self.vertices
            .iter()
            .find(|vertex| vertex.position.contains(point, radius))
    }

    /// Returns the position of a vertex.
    pub fn position(&self, id: &str) -> Result<Position, GmError> {
        self.find_by_id(id)
            .map(|vertex| vertex.position)
            .ok_or_else(|| vertex_not_found(id))
    }

    /// Moves a vertex.
    pub fn set_position(&mut self, id: &str, position: Position) -> Result<(), GmError> {
        let vertex = self.vertex_mut(id).ok_or_else(|| vertex_not_found(id))?;
        vertex.position = position;
        Ok(())
    }

    /// Appends a label to a vertex without touching existing labels.
    pub fn add_label(&mut self, id: &str, label: Label) -> Result<(), GmError> {
        let vertex = self.vertex_mut(id).ok_or_else(|| vertex_not_found(id))?;
        vertex.labels.push(label);
        Ok(())
    }

    /// Strips every label from every vertex.
    pub fn clear_labels(&mut self) {
        for vertex in &mut self.vertices {
            vertex.labels.clear();
        }
    }

    /// Overwrites a vertex's adjacency list without validating the entries.
    pub(crate) fn replace_neighbors(&mut self, id: &VertexId, neighbours: Vec<VertexId>) {
        self.adjacency.insert(id.clone(), neighbours);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.vertices
            .iter()
            .position(|vertex| vertex.id.as_str() == id)
    }

    fn ensure_vertex(&self, id: &str) -> Result<(), GmError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(vertex_not_found(id))
        }
    }

    fn push_neighbour(&mut self, from: &str, to: &str) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(VertexId::from(to));
        }
    }

    fn drop_neighbour(&mut self, from: &str, to: &str) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if let Some(pos) = list.iter().position(|n| n.as_str() == to) {
                list.remove(pos);
            }
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Graph1", GraphConfig::default())
    }
}

pub(crate) fn vertex_not_found(id: &str) -> GmError {
    GmError::VertexNotFound(
        ErrorInfo::new("unknown-vertex", "vertex does not exist").with_context("vertex", id),
    )
}
