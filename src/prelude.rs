//! # attrscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the attrscope library. Import this module to get quick access to everything needed
//! to define validated markers, build a metadata graph and validate it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all attrscope operations
pub use crate::Error;

/// The result type used throughout attrscope
pub use crate::Result;

// ================================================================================================
// Validation
// ================================================================================================

/// Driver dispatching marker hooks over targets, types and assemblies
pub use crate::metadata::validation::MarkerValidator;

/// Optional phases and usage enforcement of the driver
pub use crate::metadata::validation::ValidationConfig;

// ================================================================================================
// Markers
// ================================================================================================

/// Validation hooks and per-type declarations of a marker
pub use crate::metadata::markers::{Marker, MarkerRc, MarkerType};

/// A marker paired with the member it decorates
pub use crate::metadata::markers::MemberMarkerPair;

/// Registry making marker types discoverable
pub use crate::metadata::markers::MarkerRegistry;

// ================================================================================================
// Metadata Graph
// ================================================================================================

/// Targets and their identities
pub use crate::metadata::target::{AttributeTargets, Target, TargetId, TargetKind};

/// Marker declarations
pub use crate::metadata::customattributes::{
    CustomAttribute, CustomAttributeArgument, CustomAttributeValue,
};

/// Graph nodes
pub use crate::metadata::graph::{Assembly, Member, MemberKind, TypeDef};

/// Metadata tokens
pub use crate::metadata::token::Token;

// ================================================================================================
// Utilities
// ================================================================================================

/// Order-sensitive composite hashing
pub use crate::utils::hash::CompositeHash;
