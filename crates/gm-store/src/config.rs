use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where and how the library stores documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Directory holding one file per document.
    pub root: PathBuf,
    /// File extension of document files, without the dot.
    pub extension: String,
    /// Whether documents are written pretty-printed.
    pub pretty: bool,
}

impl LibraryConfig {
    /// Default settings rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("storage/graphs"),
            extension: "json".to_string(),
            pretty: true,
        }
    }
}
