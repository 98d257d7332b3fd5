//! The validated marker capability.
//!
//! A marker is a live instance created from a [`crate::metadata::customattributes::CustomAttribute`]
//! declaration. Marker types opt into validation by implementing two traits:
//!
//! - [`Marker`] - the object-safe hooks the validation driver dispatches to
//! - [`MarkerType`] - the per-type declarations: name, multiplicity, valid targets and the
//!   factory creating an instance from declaration arguments
//!
//! Marker types are made discoverable by registering them with a [`MarkerRegistry`]. Discovery
//! never inspects types at runtime; a declaration whose name is not registered is simply not a
//! validated marker.
//!
//! # Hooks
//!
//! | Hook | Called | Receiver |
//! |------|--------|----------|
//! | [`Marker::validate`] | once per instance | the instance |
//! | [`Marker::validate_multiple`] | once per (target, marker type), only if [`MarkerType::ALLOW_MULTIPLE`] | first instance |
//! | [`Marker::validate_members`] | once per (owning type, marker type) | marker of the first pair |
//!
//! # Examples
//!
//! ```rust
//! use attrscope::prelude::*;
//!
//! /// At most one member of a type may carry this marker.
//! #[derive(Debug)]
//! struct Key;
//!
//! impl Marker for Key {
//!     fn validate(&self, _target: &dyn Target) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn validate_members(&self, pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
//!         match pairs {
//!             [] | [_] => Ok(()),
//!             [first, ..] => Err(Error::usage::<Self>(
//!                 first.owner.id(),
//!                 format!("{} members are marked, at most one is allowed", pairs.len()),
//!             )),
//!         }
//!     }
//! }
//!
//! impl MarkerType for Key {
//!     const NAME: &'static str = "Key";
//!     const VALID_ON: AttributeTargets = AttributeTargets::MEMBERS;
//!
//!     fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
//!         Ok(Key)
//!     }
//! }
//!
//! let registry = MarkerRegistry::builder().marker::<Key>().build()?;
//! assert!(registry.contains::<Key>());
//! # Ok::<(), attrscope::Error>(())
//! ```

mod pair;
mod registry;

pub use pair::MemberMarkerPair;
pub use registry::{
    DiscoveredMarker, MarkerDescriptor, MarkerDescriptorRc, MarkerRegistry, MarkerRegistryBuilder,
};

use std::{any::Any, fmt, sync::Arc};

use crate::{
    metadata::{customattributes::CustomAttributeValue, target::AttributeTargets, target::Target},
    Result,
};

/// A reference-counted pointer to a live marker instance
pub type MarkerRc = Arc<dyn Marker>;

/// Access to a marker as [`Any`], implemented for every sized `'static` type
pub trait AsAny {
    /// Returns `self` as [`Any`]
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Validation hooks of a marker instance.
///
/// Hooks are pure checks: they must not mutate the marker or the target, and must give the same
/// answer every time they are asked. A failing hook returns [`crate::Error::MarkerUsage`],
/// usually built with [`crate::Error::usage`].
pub trait Marker: Any + AsAny + Send + Sync + fmt::Debug {
    /// Validates this instance on the `target` it decorates.
    ///
    /// # Errors
    /// Returns an error if the preconditions of this marker on `target` are not met.
    fn validate(&self, target: &dyn Target) -> Result<()>;

    /// Validates all instances of this marker type on one target together.
    ///
    /// Only called for marker types with [`MarkerType::ALLOW_MULTIPLE`] set, once per target,
    /// with `group` holding every instance in discovery order. The receiver is the first
    /// instance of the group and carries no further meaning.
    ///
    /// # Errors
    /// Returns an error if the combination of instances is invalid.
    fn validate_multiple(&self, _target: &dyn Target, _group: &[MarkerRc]) -> Result<()> {
        Ok(())
    }

    /// Validates the use of this marker type across the members of one type.
    ///
    /// Called once per owning type, after the type and all of its members passed per-target
    /// validation, with one pair per marker instance on any member.
    ///
    /// # Errors
    /// Returns an error if the combination of members is invalid.
    fn validate_members(&self, _pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
        Ok(())
    }
}

impl dyn Marker {
    /// Returns this marker as a `T`, if that is its concrete type
    #[must_use]
    pub fn downcast_ref<T: Marker>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns true if the concrete type of this marker is `T`
    #[must_use]
    pub fn is<T: Marker>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Per-type declarations of a marker.
///
/// These replace the usage metadata a reflective system would attach to the marker class:
/// they are fixed once, at the point the marker type is defined.
pub trait MarkerType: Marker + Sized {
    /// Name declarations refer to this marker type by
    const NAME: &'static str;

    /// Whether more than one instance may decorate the same target
    const ALLOW_MULTIPLE: bool = false;

    /// Target kinds this marker may be declared on
    const VALID_ON: AttributeTargets = AttributeTargets::ALL;

    /// Creates an instance from the arguments of a declaration.
    ///
    /// # Errors
    /// Returns an error if the arguments are missing or malformed. Discovery reports it as
    /// [`crate::Error::MarkerInstantiation`].
    fn instantiate(value: &CustomAttributeValue) -> Result<Self>;
}
