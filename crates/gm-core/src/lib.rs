#![deny(missing_docs)]
#![doc = "Core identifiers, labels, geometry and the error surface shared by the \
graphematics crates."]

pub mod errors;
pub mod geometry;
pub mod ids;
pub mod label;
pub mod rng;

pub use errors::{invalid_parameter, ErrorInfo, ErrorKind, GmError};
pub use geometry::Position;
pub use ids::{IdGenerator, VertexId, GENERATED_ID_LEN};
pub use label::{Label, Sentinel};
pub use rng::RngHandle;
