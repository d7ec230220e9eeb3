#![deny(missing_docs)]
#![doc = "Mutable graph store, named graph families, derived graphs, BFS distance \
statistics and the JSON document form used for persistence."]

mod flags;
mod generators;
mod graph;
mod paths;
mod serialization;
mod transform;

pub use flags::GraphConfig;
pub use generators::{
    complete, complete_bipartite, cycle, generalized_petersen, generate, is_reserved_name, wheel,
    Family, GeneratorSpec, Layout, RowLayout,
};
pub use graph::{Graph, Vertex};
pub use paths::{
    bfs_distances, distance_distribution, label_by_bfs, layer_color, DistanceMap, LAYER_PALETTE,
};
pub use serialization::{
    document_of, document_stats, export_graph, from_json, import_graph, to_json, DocumentStats,
    GraphDocument, VertexRecord,
};
pub use transform::{cartesian_product, line_graph, tensor_product};
