//! Vertex identifiers and the random identifier generator.

use std::borrow::Borrow;
use std::fmt::{self, Display};

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng::RngHandle;

/// Length of generated identifiers.
pub const GENERATED_ID_LEN: usize = 8;

/// Identifier of a vertex, unique within its graph and immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Creates an identifier from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for VertexId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Produces random alphanumeric vertex identifiers.
///
/// The generator does not know which identifiers are in use; callers that need
/// uniqueness (the graph store) redraw on collision.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: RngHandle,
}

impl IdGenerator {
    /// Creates a generator replaying the sequence determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RngHandle::from_seed(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: RngHandle::from_entropy(),
        }
    }

    /// Creates a generator from an optional seed.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self {
            rng: RngHandle::from_optional_seed(seed),
        }
    }

    /// Draws the next identifier.
    pub fn next_id(&mut self) -> VertexId {
        let raw: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(GENERATED_ID_LEN)
            .map(char::from)
            .collect();
        VertexId(raw)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
