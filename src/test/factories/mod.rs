//! Factories producing markers and graphs for unit tests.

mod markers;

pub use markers::*;
