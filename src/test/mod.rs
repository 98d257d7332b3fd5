//! Shared functionality for unit tests.
//!
//! - [`factories`] - Recording markers and their registry

pub mod factories;
