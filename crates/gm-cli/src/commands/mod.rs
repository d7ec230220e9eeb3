use std::error::Error;

use gm_graph::{Graph, GraphConfig};
use gm_store::GraphLibrary;

pub mod derive;
pub mod generate;
pub mod inspect;
pub mod iso;

/// Loads a stored graph, failing when no document carries `name`.
pub fn require_graph(
    library: &GraphLibrary,
    name: &str,
    seed: Option<u64>,
) -> Result<Graph, Box<dyn Error>> {
    let config = GraphConfig {
        id_seed: seed,
        ..GraphConfig::default()
    };
    match library.load_graph(name, config)? {
        Some(graph) => Ok(graph),
        None => Err(format!(
            "no graph named {name} in {}",
            library.config().root.display()
        )
        .into()),
    }
}
