//! Small helpers shared across the crate.
//!
//! - [`hash`] - Composite hash codes for multi-part identity keys
//! - [`grouping`] - Order-preserving group-by

pub mod grouping;
pub mod hash;
