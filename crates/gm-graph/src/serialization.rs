use std::collections::HashSet;
use std::fmt;

use gm_core::{ErrorInfo, GmError, Label, Position, VertexId};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::generators::is_reserved_name;
use crate::graph::{Graph, Vertex};

/// Serialized form of one vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Ordered neighbour identifiers, copied verbatim from the adjacency list.
    pub neighbors: Vec<VertexId>,
    /// `[x, y]` drawing position.
    pub position: Position,
    /// Attached labels; optional on import.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Serialized graph: a JSON object keyed by vertex identifier.
///
/// Entry order is the graph's vertex order and survives a JSON round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDocument {
    entries: Vec<(VertexId, VertexRecord)>,
}

impl GraphDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, id: impl Into<VertexId>, record: VertexRecord) {
        self.entries.push((id.into(), record));
    }

    /// Returns the entries in document order.
    pub fn entries(&self) -> &[(VertexId, VertexRecord)] {
        &self.entries
    }

    /// Looks an entry up by vertex identifier.
    pub fn get(&self, id: &str) -> Option<&VertexRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, record)| record)
    }

    /// Returns the number of vertices described.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the document describes no vertices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GraphDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GraphDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = GraphDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from vertex identifier to vertex record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, record)) = access.next_entry::<VertexId, VertexRecord>()? {
                    entries.push((id, record));
                }
                Ok(GraphDocument { entries })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Summary statistics of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Half the total neighbour-list length.
    pub edge_count: usize,
    /// SHA-256 of the compact JSON encoding.
    pub digest: String,
}

/// Exports `graph` for storage under `name`.
///
/// Fails with [`GmError::ReservedName`] when `name` is a generator family name.
pub fn export_graph(graph: &Graph, name: &str) -> Result<GraphDocument, GmError> {
    if is_reserved_name(name) {
        return Err(GmError::ReservedName(
            ErrorInfo::new("reserved-name", "graph name collides with a generator family")
                .with_context("name", name)
                .with_hint("pick a name that is not a generator family name"),
        ));
    }
    Ok(document_of(graph))
}

/// Builds the document of a graph without any name check.
pub fn document_of(graph: &Graph) -> GraphDocument {
    let mut document = GraphDocument::new();
    for vertex in graph.vertices() {
        let neighbors = graph
            .adjacency()
            .get(vertex.id())
            .cloned()
            .unwrap_or_default();
        document.push(
            vertex.id().clone(),
            VertexRecord {
                neighbors,
                position: vertex.position,
                labels: vertex.labels.clone(),
            },
        );
    }
    document
}

/// Clears `graph` and loads `document` into it.
///
/// Neighbour lists are copied verbatim; the document is trusted and edges are
/// not re-validated. Repeated keys fail with [`GmError::DuplicateVertex`]
/// before `graph` is touched.
pub fn import_graph(graph: &mut Graph, document: &GraphDocument) -> Result<(), GmError> {
    let mut seen = HashSet::with_capacity(document.len());
    if let Some((id, _)) = document.entries().iter().find(|(id, _)| !seen.insert(id)) {
        return Err(GmError::DuplicateVertex(
            ErrorInfo::new("duplicate-vertex", "document repeats a vertex identifier")
                .with_context("vertex", id),
        ));
    }
    graph.clear();
    for (id, record) in document.entries() {
        graph.create_vertex(
            Vertex::new(id.clone(), record.position).with_labels(record.labels.iter().cloned()),
        )?;
        graph.replace_neighbors(id, record.neighbors.clone());
    }
    Ok(())
}

/// Encodes a document as pretty-printed JSON.
pub fn to_json(document: &GraphDocument) -> Result<String, GmError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| GmError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Decodes a document from JSON.
pub fn from_json(json: &str) -> Result<GraphDocument, GmError> {
    serde_json::from_str(json)
        .map_err(|err| GmError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
}

/// Computes vertex count, edge count and content digest of a document.
pub fn document_stats(document: &GraphDocument) -> Result<DocumentStats, GmError> {
    let compact = serde_json::to_vec(document)
        .map_err(|err| GmError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
    let degree_sum: usize = document
        .entries()
        .iter()
        .map(|(_, record)| record.neighbors.len())
        .sum();
    Ok(DocumentStats {
        vertex_count: document.len(),
        edge_count: degree_sum / 2,
        digest: format!("{:x}", Sha256::digest(&compact)),
    })
}
