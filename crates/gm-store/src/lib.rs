//! Flat key-value storage of serialized graphs: one JSON document per file,
//! keyed by file stem, plus the summary statistics a viewer displays.

mod config;
mod library;

pub use config::LibraryConfig;
pub use library::{GraphLibrary, GraphSummary};
