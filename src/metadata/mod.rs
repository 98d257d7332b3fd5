//! The annotated metadata graph and the marker validation built on top of it.
//!
//! # Key Components
//!
//! - [`token`] - Metadata tokens identifying graph nodes
//! - [`target`] - The [`target::Target`] abstraction and detached target identities
//! - [`graph`] - Assemblies, types and members carrying marker declarations
//! - [`customattributes`] - Marker declarations and their arguments
//! - [`markers`] - The validated marker capability and the marker registry
//! - [`validation`] - The validation driver
//!
//! # Examples
//!
//! ```rust
//! use attrscope::metadata::{
//!     customattributes::CustomAttribute,
//!     graph::{Assembly, TypeDef},
//!     markers::MarkerRegistry,
//!     validation::MarkerValidator,
//! };
//!
//! let assembly = Assembly::new("Demo")
//!     .with_type(TypeDef::with_row(1, "Demo", "Foo").with_attribute(CustomAttribute::new("Doc")));
//!
//! // Nothing is registered, so no declaration is a validated marker.
//! let registry = MarkerRegistry::new();
//! MarkerValidator::new(&registry).validate_assembly(&assembly)?;
//! # Ok::<(), attrscope::Error>(())
//! ```

/// Marker declarations and their arguments
pub mod customattributes;
/// Assemblies, types and members
pub mod graph;
/// The validated marker capability and registry
pub mod markers;
/// Marker targets and their identities
pub mod target;
/// Metadata tokens
pub mod token;
/// The marker validation driver
pub mod validation;
