//! Domain types for protodiff.
//! Defines the versions, artifacts, ranges and highlight commands shared by every layer.

pub mod artifact;
pub mod error;
pub mod highlight;
pub mod version;

pub use artifact::*;
pub use error::*;
pub use highlight::*;
pub use version::*;
