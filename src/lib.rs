// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # attrscope
//!
//! A framework for validating declarative markers (attributes) attached to the elements of a
//! metadata graph. Assemblies, types and members carry marker declarations; `attrscope`
//! discovers the validated markers among them, groups them, and invokes their validation hooks
//! in a fixed, deterministic order.
//!
//! ## Features
//!
//! - **🧩 Explicit discovery** - Marker types register with a [`MarkerRegistry`], no runtime reflection
//! - **🔍 Three hook granularities** - Per instance, per target group, and across the members of a type
//! - **📐 Deterministic order** - Top-down, depth-first, left-to-right in declaration order
//! - **🛡️ Structured failures** - Every error names the marker type and a detached target identity
//! - **⚙️ Configurable** - Optional phases and attribute usage enforcement via [`ValidationConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use attrscope::prelude::*;
//!
//! /// Only one member of a type may be the key.
//! #[derive(Debug)]
//! struct Unique;
//!
//! impl Marker for Unique {
//!     fn validate(&self, _target: &dyn Target) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn validate_members(&self, pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
//!         if let [first, _, ..] = pairs {
//!             return Err(Error::usage::<Self>(
//!                 first.owner.id(),
//!                 "at most one member may be unique",
//!             ));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl MarkerType for Unique {
//!     const NAME: &'static str = "Unique";
//!     const VALID_ON: AttributeTargets = AttributeTargets::MEMBERS;
//!
//!     fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
//!         Ok(Unique)
//!     }
//! }
//!
//! let registry = MarkerRegistry::builder().marker::<Unique>().build()?;
//!
//! let assembly = Assembly::new("Demo").with_type(
//!     TypeDef::with_row(1, "Demo", "Foo")
//!         .with_member(Member::field(1, "id").with_attribute(CustomAttribute::new("Unique")))
//!         .with_member(Member::field(2, "code").with_attribute(CustomAttribute::new("Unique"))),
//! );
//!
//! let error = MarkerValidator::new(&registry)
//!     .validate_assembly(&assembly)
//!     .unwrap_err();
//!
//! assert_eq!(error.marker(), Some("Unique"));
//! assert_eq!(error.target().map(|target| target.name.as_str()), Some("Demo.Foo"));
//! # Ok::<(), attrscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - The metadata graph, marker declarations, marker capability and the driver
//! - [`utils`] - Composite hashing and order-preserving grouping
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### Validation Order
//!
//! For a single target, discovered markers are grouped by concrete marker type. For each
//! group, [`Marker::validate`] runs on every instance, then [`Marker::validate_multiple`] runs
//! once if the marker type allows multiple instances. A type is validated before its members,
//! and once the type and all members passed, [`Marker::validate_members`] runs once per marker
//! type found on the members. The first failure aborts the entry point.
//!
//! ## Logging
//!
//! The driver emits `debug` and `trace` records through the [`log`] facade. No logger is
//! installed by the library.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use attrscope::prelude::*;
///
/// let registry = MarkerRegistry::new();
/// let validator = MarkerValidator::new(&registry);
/// validator.validate_target(&Member::field(1, "value"))?;
/// # Ok::<(), attrscope::Error>(())
/// ```
pub mod prelude;

/// The annotated metadata graph and marker validation
///
/// This module provides:
///
/// - **Graph**: assemblies owning types owning members, each carrying marker declarations
/// - **Markers**: the validated marker capability and the registry discovering markers
/// - **Validation**: the driver dispatching marker hooks in a deterministic order
pub mod metadata;

/// Composite hashing and grouping helpers
pub mod utils;

/// `attrscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `attrscope` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the full list of
/// failure modes.
pub use error::Error;

/// Main entry point for validating markers.
///
/// See [`metadata::validation::MarkerValidator`] for details.
pub use metadata::validation::{MarkerValidator, ValidationConfig};

/// The marker capability and registry.
pub use metadata::markers::{Marker, MarkerRegistry, MarkerType, MemberMarkerPair};
