#![deny(missing_docs)]
#![doc = "Structural equivalence of graphematics graphs: a degree-sequence filter \
followed by an exhaustive permutation search."]

/// Cheap structural invariants used to reject non-isomorphic pairs early.
pub mod invariants;
/// Exhaustive isomorphism search.
pub mod search;

pub use invariants::degree_signature;
pub use search::{find_isomorphism, is_isomorphic, IsoOptions, Mapping};
