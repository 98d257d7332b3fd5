//! Marker targets and their identities.
//!
//! Every node of the metadata graph that can carry marker declarations implements [`Target`].
//! Validation errors never hold a reference into the graph; they carry a detached [`TargetId`]
//! instead, so a failure can outlive the assembly it was raised from.

use std::fmt;

use bitflags::bitflags;
use strum::{EnumCount, EnumIter};

use crate::metadata::{customattributes::CustomAttributeList, token::Token};

/// The kind of a metadata node carrying markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, strum::Display)]
pub enum TargetKind {
    /// An assembly, the root of the graph
    Assembly,
    /// A type definition owned by an assembly
    Type,
    /// A field owned by a type
    Field,
    /// A method owned by a type
    Method,
    /// A constructor owned by a type
    Constructor,
    /// A property owned by a type
    Property,
    /// An event owned by a type
    Event,
}

impl TargetKind {
    /// Returns the [`AttributeTargets`] flag matching this kind
    #[must_use]
    pub fn flag(self) -> AttributeTargets {
        match self {
            TargetKind::Assembly => AttributeTargets::ASSEMBLY,
            TargetKind::Type => AttributeTargets::TYPE,
            TargetKind::Field => AttributeTargets::FIELD,
            TargetKind::Method => AttributeTargets::METHOD,
            TargetKind::Constructor => AttributeTargets::CONSTRUCTOR,
            TargetKind::Property => AttributeTargets::PROPERTY,
            TargetKind::Event => AttributeTargets::EVENT,
        }
    }

    /// Returns true for kinds that are owned by a type
    #[must_use]
    pub fn is_member(self) -> bool {
        !matches!(self, TargetKind::Assembly | TargetKind::Type)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// The set of target kinds a marker type may be declared on
    ///
    /// Values mirror `System.AttributeTargets`; all type flavors collapse into [`AttributeTargets::TYPE`].
    pub struct AttributeTargets : u32 {
        /// Marker is valid on assemblies
        const ASSEMBLY = 0x0001;
        /// Marker is valid on types
        const TYPE = 0x0004;
        /// Marker is valid on constructors
        const CONSTRUCTOR = 0x0020;
        /// Marker is valid on methods
        const METHOD = 0x0040;
        /// Marker is valid on properties
        const PROPERTY = 0x0080;
        /// Marker is valid on fields
        const FIELD = 0x0100;
        /// Marker is valid on events
        const EVENT = 0x0200;
        /// Marker is valid on any member of a type
        const MEMBERS = Self::CONSTRUCTOR.bits()
            | Self::METHOD.bits()
            | Self::PROPERTY.bits()
            | Self::FIELD.bits()
            | Self::EVENT.bits();
        /// Marker is valid everywhere
        const ALL = Self::ASSEMBLY.bits() | Self::TYPE.bits() | Self::MEMBERS.bits();
    }
}

/// Detached identity of a target, used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetId {
    /// Token of the target
    pub token: Token,
    /// Kind of the target
    pub kind: TargetKind,
    /// Human readable name of the target
    pub name: String,
}

impl TargetId {
    /// Creates a new target identity
    pub fn new(token: Token, kind: TargetKind, name: impl Into<String>) -> Self {
        TargetId {
            token,
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' ({})", self.kind, self.name, self.token)
    }
}

/// A metadata node that can carry marker declarations.
///
/// Implemented by [`crate::metadata::graph::Assembly`], [`crate::metadata::graph::TypeDef`] and
/// [`crate::metadata::graph::Member`]. Hosts with their own metadata model may implement it to
/// run [`crate::MarkerValidator::validate_target`] on single nodes. Traversal through
/// [`crate::MarkerValidator::validate_type`] and [`crate::MarkerValidator::validate_assembly`],
/// including the cross-member phase, requires the graph types of this crate.
pub trait Target: Send + Sync {
    /// Token identifying this target
    fn token(&self) -> Token;

    /// Kind of this target
    fn kind(&self) -> TargetKind;

    /// Human readable name, used in error messages
    fn name(&self) -> &str;

    /// Marker declarations attached to this target, in declaration order
    fn custom_attributes(&self) -> &CustomAttributeList;

    /// Returns the detached identity of this target
    fn id(&self) -> TargetId {
        TargetId::new(self.token(), self.kind(), self.name())
    }
}
