//! Validation of markers across the metadata graph
//!
//! This module provides the validation driver and its supporting pieces:
//!
//! - [`MarkerValidator`] - Discovers markers and dispatches their hooks over targets, types
//!   and assemblies
//! - [`ValidationConfig`] - Switches for the validation phases and usage enforcement
//! - [`MarkerGroup`], [`MemberMarkerGroup`] - Markers grouped by concrete marker type
//! - [`TargetMarkerKey`] - Composite (target, marker type) identity used as grouping key

mod config;
mod driver;
mod group;

pub use config::ValidationConfig;
pub use driver::MarkerValidator;
pub use group::{MarkerGroup, MemberMarkerGroup, TargetMarkerKey};
