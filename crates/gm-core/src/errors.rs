//! Structured error types shared across graphematics crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GmError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex identifiers, parameter values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the graphematics library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum GmError {
    /// A vertex with the same identifier is already part of the graph.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(ErrorInfo),
    /// A referenced vertex is not part of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(ErrorInfo),
    /// A simple graph already holds the requested edge.
    #[error("duplicate edge: {0}")]
    DuplicateEdge(ErrorInfo),
    /// A simple graph cannot hold an edge from a vertex to itself.
    #[error("self loop: {0}")]
    SelfLoop(ErrorInfo),
    /// A generator or configuration parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// The requested graph name collides with a generator family name.
    #[error("reserved name: {0}")]
    ReservedName(ErrorInfo),
    /// The requested operation is a documented gap.
    #[error("unsupported: {0}")]
    Unsupported(ErrorInfo),
    /// A bounded search ran out of its step budget.
    #[error("search budget exhausted: {0}")]
    SearchBudget(ErrorInfo),
    /// Serialization and document format errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors raised by the document library.
    #[error("storage error: {0}")]
    Storage(ErrorInfo),
}

/// Fieldless discriminant of [`GmError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// See [`GmError::DuplicateVertex`].
    DuplicateVertex,
    /// See [`GmError::VertexNotFound`].
    VertexNotFound,
    /// See [`GmError::DuplicateEdge`].
    DuplicateEdge,
    /// See [`GmError::SelfLoop`].
    SelfLoop,
    /// See [`GmError::InvalidParameter`].
    InvalidParameter,
    /// See [`GmError::ReservedName`].
    ReservedName,
    /// See [`GmError::Unsupported`].
    Unsupported,
    /// See [`GmError::SearchBudget`].
    SearchBudget,
    /// See [`GmError::Serde`].
    Serde,
    /// See [`GmError::Storage`].
    Storage,
}

impl GmError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GmError::DuplicateVertex(info)
            | GmError::VertexNotFound(info)
            | GmError::DuplicateEdge(info)
            | GmError::SelfLoop(info)
            | GmError::InvalidParameter(info)
            | GmError::ReservedName(info)
            | GmError::Unsupported(info)
            | GmError::SearchBudget(info)
            | GmError::Serde(info)
            | GmError::Storage(info) => info,
        }
    }

    /// Returns the kind of the error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GmError::DuplicateVertex(_) => ErrorKind::DuplicateVertex,
            GmError::VertexNotFound(_) => ErrorKind::VertexNotFound,
            GmError::DuplicateEdge(_) => ErrorKind::DuplicateEdge,
            GmError::SelfLoop(_) => ErrorKind::SelfLoop,
            GmError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            GmError::ReservedName(_) => ErrorKind::ReservedName,
            GmError::Unsupported(_) => ErrorKind::Unsupported,
            GmError::SearchBudget(_) => ErrorKind::SearchBudget,
            GmError::Serde(_) => ErrorKind::Serde,
            GmError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Returns whether the error is of the provided kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// Adds a context entry to the payload, keeping the variant.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Sets a hint on the payload, keeping the variant.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            GmError::DuplicateVertex(info) => GmError::DuplicateVertex(f(info)),
            GmError::VertexNotFound(info) => GmError::VertexNotFound(f(info)),
            GmError::DuplicateEdge(info) => GmError::DuplicateEdge(f(info)),
            GmError::SelfLoop(info) => GmError::SelfLoop(f(info)),
            GmError::InvalidParameter(info) => GmError::InvalidParameter(f(info)),
            GmError::ReservedName(info) => GmError::ReservedName(f(info)),
            GmError::Unsupported(info) => GmError::Unsupported(f(info)),
            GmError::SearchBudget(info) => GmError::SearchBudget(f(info)),
            GmError::Serde(info) => GmError::Serde(f(info)),
            GmError::Storage(info) => GmError::Storage(f(info)),
        }
    }
}

/// Shorthand for [`GmError::InvalidParameter`] with a `parameter` context entry.
pub fn invalid_parameter(parameter: &str, message: impl Into<String>) -> GmError {
    GmError::InvalidParameter(
        ErrorInfo::new("invalid-parameter", message).with_context("parameter", parameter),
    )
}
