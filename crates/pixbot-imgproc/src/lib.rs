#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image contrast enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// gradient estimation module.
pub mod gradient;

/// compute image histogram module.
pub mod histogram;

/// module containing parallelization utilities.
pub mod parallel;

/// quarter-turn rotation module.
pub mod rotate;

/// discrete Fourier magnitude spectrum module.
pub mod spectrum;

/// operations to threshold images.
pub mod threshold;
