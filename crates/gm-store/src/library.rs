use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use gm_core::{invalid_parameter, ErrorInfo, GmError};
use gm_graph::{
    document_stats, export_graph, from_json, import_graph, Graph, GraphConfig, GraphDocument,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::LibraryConfig;

/// Display statistics of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Document name (file stem).
    pub name: String,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Half the total neighbour-list length.
    pub edge_count: usize,
    /// SHA-256 of the compact document encoding.
    pub digest: String,
}

/// Directory-backed collection of graph documents.
#[derive(Debug, Clone)]
pub struct GraphLibrary {
    config: LibraryConfig,
}

fn storage_error(code: &str, path: &Path, err: impl ToString) -> GmError {
    GmError::Storage(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display()),
    )
}

impl GraphLibrary {
    /// Opens the library, creating its root directory when missing.
    pub fn open(config: LibraryConfig) -> Result<Self, GmError> {
        fs::create_dir_all(&config.root)
            .map_err(|err| storage_error("library-root", &config.root, err))?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Returns the document names, sorted.
    pub fn list(&self) -> Result<Vec<String>, GmError> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.config.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| storage_error("library-scan", &self.config.root, err))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            // same spelling `path_for` builds, so every listed name loads
            let matches = path
                .extension()
                .is_some_and(|ext| ext == self.config.extension.as_str());
            if !matches {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the file path a document name maps to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, GmError> {
        validate_name(name)?;
        Ok(self
            .config
            .root
            .join(format!("{name}.{}", self.config.extension)))
    }

    /// Reads a document; `Ok(None)` when no such document exists.
    pub fn load_document(&self, name: &str) -> Result<Option<GraphDocument>, GmError> {
        let path = self.path_for(name)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(storage_error("document-read", &path, err)),
        };
        from_json(&json)
            .map(Some)
            .map_err(|err| err.with_context("path", path.display()))
    }

    /// Reads a document into a new graph named after it.
    pub fn load_graph(&self, name: &str, config: GraphConfig) -> Result<Option<Graph>, GmError> {
        let Some(document) = self.load_document(name)? else {
            return Ok(None);
        };
        let mut graph = Graph::new(name, config);
        import_graph(&mut graph, &document)?;
        Ok(Some(graph))
    }

    /// Exports `graph` and writes it under `name`, replacing any previous document.
    ///
    /// Fails with [`GmError::ReservedName`] for generator family names.
    pub fn save(&self, name: &str, graph: &Graph) -> Result<PathBuf, GmError> {
        let path = self.path_for(name)?;
        let document = export_graph(graph, name)?;
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|err| GmError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
        fs::write(&path, encoded).map_err(|err| storage_error("document-write", &path, err))?;
        info!(name, vertices = graph.len(), path = %path.display(), "saved graph document");
        Ok(path)
    }

    /// Deletes a document; returns whether one existed.
    pub fn remove(&self, name: &str) -> Result<bool, GmError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(name, "removed graph document");
                Ok(true)
            }
            Err(err) if err.kind() == IoErrorKind::NotFound => Ok(false),
            Err(err) => Err(storage_error("document-remove", &path, err)),
        }
    }

    /// Returns the summary of one document; `Ok(None)` when absent.
    pub fn summary(&self, name: &str) -> Result<Option<GraphSummary>, GmError> {
        let Some(document) = self.load_document(name)? else {
            return Ok(None);
        };
        let stats = document_stats(&document)?;
        Ok(Some(GraphSummary {
            name: name.to_string(),
            vertex_count: stats.vertex_count,
            edge_count: stats.edge_count,
            digest: stats.digest,
        }))
    }

    /// Summaries of every readable document. Unreadable documents are logged and skipped.
    pub fn summaries(&self) -> Result<Vec<GraphSummary>, GmError> {
        let mut summaries = Vec::new();
        for name in self.list()? {
            match self.summary(&name) {
                Ok(Some(summary)) => summaries.push(summary),
                Ok(None) => {}
                Err(err) => warn!(name = %name, error = %err, "skipping unreadable document"),
            }
        }
        Ok(summaries)
    }
}

fn validate_name(name: &str) -> Result<(), GmError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid_parameter("name", "document name must not be empty"));
    }
    if trimmed.starts_with('.') || name.contains(['/', '\\']) {
        return Err(
            invalid_parameter("name", "document name must be a plain file stem")
                .with_context("value", name),
        );
    }
    Ok(())
}
