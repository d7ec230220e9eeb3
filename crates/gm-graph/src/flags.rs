use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether self-loops and parallel edges are rejected.
    pub simple: bool,
    /// Whether edges are one-way.
    pub directed: bool,
    /// Seed for generated vertex identifiers; `None` draws from OS entropy.
    #[serde(default)]
    pub id_seed: Option<u64>,
}

impl GraphConfig {
    /// Simple undirected graph with identifiers seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            id_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Multigraph configuration: self-loops and parallel edges allowed.
    pub fn multigraph() -> Self {
        Self {
            simple: false,
            ..Self::default()
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            simple: true,
            directed: false,
            id_seed: None,
        }
    }
}
