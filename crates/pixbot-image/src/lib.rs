#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for the transform core.
pub mod image;

/// dynamic pixel-layout wrapper exchanged with the transport layer.
pub mod frame;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::frame::Frame;
pub use crate::image::{Image, ImageDtype, ImageSize};
