//! # Marker Validation Driver
//!
//! This module provides [`MarkerValidator`], which walks the metadata graph and dispatches the
//! validation hooks of every validated marker it discovers.
//!
//! ## Traversal
//!
//! Validation runs top-down, depth-first and left-to-right in declaration order:
//!
//! ```text
//! validate_assembly(assembly)
//! ├── validate_target(assembly)
//! └── for each type: validate_type(type)
//!     ├── validate_target(type)
//!     ├── for each member: validate_target(member)
//!     └── cross-member phase: validate_members per marker type
//! ```
//!
//! ## Dispatch Per Target
//!
//! The markers discovered on a target are grouped by concrete marker type, in the order each
//! type was first discovered. For every group, [`Marker::validate`] runs on each instance, and
//! then [`Marker::validate_multiple`] runs once on the first instance if the marker type allows
//! multiple instances.
//!
//! ## Cross-Member Phase
//!
//! Once a type and all its members passed per-target validation, markers are discovered again
//! on every member, paired with their member, grouped by marker type, and each group is handed
//! to [`Marker::validate_members`] once. Discovery is not shared with the per-member step; both
//! produce the same instances since markers are stateless.
//!
//! ## Failure Policy
//!
//! The first failing hook aborts the whole entry point call and its error is returned
//! unchanged. There is no partial result and no aggregation across groups or targets.
//!
//! ## Thread Safety
//!
//! [`MarkerValidator`] holds no mutable state. It can validate independent targets from several
//! threads at once, as long as the markers' hooks are themselves free of shared mutable state.

use crate::{
    metadata::{
        graph::{Assembly, TypeDef},
        markers::{Marker, MarkerRegistry, MemberMarkerPair},
        target::Target,
        validation::{
            config::ValidationConfig,
            group::{MarkerGroup, MemberMarkerGroup},
        },
    },
    Error, Result,
};

/// Drives marker validation over targets, types and assemblies.
///
/// # Examples
///
/// ```rust
/// use attrscope::prelude::*;
///
/// #[derive(Debug)]
/// struct NonEmpty;
///
/// impl Marker for NonEmpty {
///     fn validate(&self, target: &dyn Target) -> Result<()> {
///         if target.name().is_empty() {
///             return Err(Error::usage::<Self>(target.id(), "target must be named"));
///         }
///         Ok(())
///     }
/// }
///
/// impl MarkerType for NonEmpty {
///     const NAME: &'static str = "NonEmpty";
///
///     fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
///         Ok(NonEmpty)
///     }
/// }
///
/// let registry = MarkerRegistry::builder().marker::<NonEmpty>().build()?;
/// let validator = MarkerValidator::new(&registry);
///
/// let assembly = Assembly::new("Demo").with_type(
///     TypeDef::with_row(1, "Demo", "Foo")
///         .with_member(Member::field(1, "").with_attribute(CustomAttribute::new("NonEmpty"))),
/// );
///
/// let error = validator.validate_assembly(&assembly).unwrap_err();
/// assert_eq!(error.marker(), Some("NonEmpty"));
/// # Ok::<(), attrscope::Error>(())
/// ```
pub struct MarkerValidator<'r> {
    registry: &'r MarkerRegistry,
    config: ValidationConfig,
}

impl<'r> MarkerValidator<'r> {
    /// Creates a validator discovering markers through `registry`, with the default
    /// configuration
    #[must_use]
    pub fn new(registry: &'r MarkerRegistry) -> Self {
        Self::with_config(registry, ValidationConfig::default())
    }

    /// Creates a validator with an explicit configuration
    #[must_use]
    pub fn with_config(registry: &'r MarkerRegistry, config: ValidationConfig) -> Self {
        MarkerValidator { registry, config }
    }

    /// The configuration of this validator
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates all markers attached to a single target.
    ///
    /// # Errors
    /// Returns the first error raised by discovery, usage enforcement or a marker hook.
    pub fn validate_target(&self, target: &dyn Target) -> Result<()> {
        if !self.config.enable_marker_validation {
            return Ok(());
        }

        let discovered = self.registry.discover(target)?;
        if discovered.is_empty() {
            return Ok(());
        }

        let groups = MarkerGroup::collect(target.token(), discovered)?;
        for group in &groups {
            log::trace!(
                "dispatching {} '{}' marker(s) on {} '{}'",
                group.markers.len(),
                group.descriptor.name,
                target.kind(),
                target.name()
            );

            self.enforce_usage(target, group)?;

            for marker in &group.markers {
                marker.validate(target)?;
            }

            if group.descriptor.allow_multiple {
                if let Some(representative) = group.representative() {
                    representative.validate_multiple(target, &group.markers)?;
                }
            }
        }

        Ok(())
    }

    /// Validates all markers on a type, its members, and across its members.
    ///
    /// # Errors
    /// Returns the first error raised while validating the type, any member, or any
    /// cross-member group.
    pub fn validate_type(&self, ty: &TypeDef) -> Result<()> {
        if !self.config.enable_marker_validation {
            return Ok(());
        }

        log::debug!("validating markers of type '{}'", ty.fullname);

        self.validate_target(ty)?;

        for member in ty.members() {
            self.validate_target(member.as_ref())?;
        }

        if self.config.enable_member_validation {
            self.validate_members(ty)?;
        }

        Ok(())
    }

    /// Validates all markers on an assembly and on every type it contains.
    ///
    /// # Errors
    /// Returns the first error raised while validating the assembly or any of its types.
    pub fn validate_assembly(&self, assembly: &Assembly) -> Result<()> {
        if !self.config.enable_marker_validation {
            return Ok(());
        }

        log::debug!("validating markers of assembly '{}'", assembly.name);

        self.validate_target(assembly)?;

        for ty in assembly.types() {
            self.validate_type(ty)?;
        }

        Ok(())
    }

    /// Runs the cross-member phase of `ty`
    fn validate_members(&self, ty: &TypeDef) -> Result<()> {
        let mut pairs = Vec::new();
        for member in ty.members() {
            for found in self.registry.discover(member.as_ref())? {
                pairs.push((
                    found.descriptor,
                    MemberMarkerPair::new(ty, member, found.marker),
                ));
            }
        }

        if pairs.is_empty() {
            return Ok(());
        }

        for group in MemberMarkerGroup::collect(ty.token, pairs)? {
            let Some(representative) = group.representative().cloned() else {
                continue;
            };

            log::trace!(
                "dispatching '{}' across {} member(s) of '{}'",
                group.descriptor.name,
                group.pairs.len(),
                ty.fullname
            );

            representative.validate_members(&group.pairs)?;
        }

        Ok(())
    }

    /// Checks the usage declarations of a group's marker type, as far as the configuration
    /// asks for it
    fn enforce_usage(&self, target: &dyn Target, group: &MarkerGroup) -> Result<()> {
        let descriptor = &group.descriptor;

        if self.config.enforce_valid_on && !descriptor.valid_on.contains(target.kind().flag()) {
            return Err(Error::MarkerUsage {
                marker: descriptor.name,
                target: target.id(),
                message: format!(
                    "marker is not valid on {} targets (valid on: {:?})",
                    target.kind(),
                    descriptor.valid_on
                ),
            });
        }

        if self.config.enforce_single_use && !descriptor.allow_multiple && group.markers.len() > 1
        {
            return Err(Error::MarkerUsage {
                marker: descriptor.name,
                target: target.id(),
                message: format!(
                    "marker may only be applied once, found {} instances",
                    group.markers.len()
                ),
            });
        }

        Ok(())
    }
}
