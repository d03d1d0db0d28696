#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// the ordered command-to-transform catalog.
pub mod catalog;

/// Error types for the dispatch module.
pub mod error;

/// the closed set of transform operations.
pub mod transform;

pub use crate::catalog::{Catalog, CatalogEntry, Invocation};
pub use crate::error::DispatchError;
pub use crate::transform::{Arity, RotationDirection, ThresholdMode, TransformKind};
