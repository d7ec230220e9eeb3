//! Typed vertex labels.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{invalid_parameter, GmError};
use crate::ids::VertexId;

/// Marker labels carrying a fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentinel {
    /// Hub vertex placed at the centre of a circular layout.
    Center,
}

/// Value attached to a vertex by generators, transformations or labeling passes.
///
/// The JSON form is untagged: integers are numbers, the sentinel is its
/// lowercase name, colours are any other string and pairs are two-element
/// string arrays. Variant order matters for decoding, so `"center"` always
/// decodes as [`Sentinel::Center`] rather than as a colour.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Integer tag (generator bookkeeping, BFS layers).
    Integer(i64),
    /// Marker with a fixed meaning.
    Sentinel(Sentinel),
    /// Display colour, usually a `#rrggbb` string.
    Color(String),
    /// Pair of vertex identifiers from a source graph (line graphs, products).
    Pair(VertexId, VertexId),
}

impl Label {
    /// Builds an integer label from an index.
    ///
    /// Fails with [`GmError::InvalidParameter`] when `value` exceeds `i64::MAX`.
    pub fn integer(value: usize) -> Result<Self, GmError> {
        i64::try_from(value).map(Label::Integer).map_err(|_| {
            invalid_parameter("label", "integer label out of range").with_context("value", value)
        })
    }

    /// Builds a pair label.
    pub fn pair(first: impl Into<VertexId>, second: impl Into<VertexId>) -> Self {
        Label::Pair(first.into(), second.into())
    }

    /// Returns the integer payload, if any.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Label::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the pair payload, if any.
    pub fn as_pair(&self) -> Option<(&VertexId, &VertexId)> {
        match self {
            Label::Pair(first, second) => Some((first, second)),
            _ => None,
        }
    }

    /// Returns whether both labels are pairs with at least one identifier in common.
    pub fn shares_endpoint(&self, other: &Label) -> bool {
        match (self.as_pair(), other.as_pair()) {
            (Some((a1, a2)), Some((b1, b2))) => a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2,
            _ => false,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(value) => write!(f, "{value}"),
            Label::Sentinel(Sentinel::Center) => f.write_str("center"),
            Label::Color(color) => f.write_str(color),
            Label::Pair(first, second) => write!(f, "({first}, {second})"),
        }
    }
}
