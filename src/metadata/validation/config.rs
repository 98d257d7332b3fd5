//! Validation configuration for marker validation
//!
//! This module provides configuration options for a validation pass: which phases run, and
//! whether the driver enforces the usage declarations of marker types on top of the checks the
//! markers implement themselves.

/// Configuration for a marker validation pass
///
/// The default configuration runs every hook and leaves usage declarations to the markers.
/// [`ValidationConfig::strict`] additionally rejects markers placed on target kinds outside
/// their [`crate::MarkerType::VALID_ON`] set, and duplicates of single-use markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Master switch; when disabled every entry point succeeds without discovering markers
    pub enable_marker_validation: bool,

    /// Run the cross-member phase ([`crate::Marker::validate_members`]) of type validation
    pub enable_member_validation: bool,

    /// Reject markers on target kinds outside their declared valid targets
    pub enforce_valid_on: bool,

    /// Reject more than one instance of a marker type that does not allow multiple instances
    pub enforce_single_use: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_marker_validation: true,
            enable_member_validation: true,
            enforce_valid_on: false,
            enforce_single_use: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a disabled validation configuration
    ///
    /// No marker is discovered and no hook runs.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_marker_validation: false,
            enable_member_validation: false,
            enforce_valid_on: false,
            enforce_single_use: false,
        }
    }

    /// Creates a minimal validation configuration
    ///
    /// Only per-target hooks run; the cross-member phase is skipped.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_marker_validation: true,
            enable_member_validation: false,
            enforce_valid_on: false,
            enforce_single_use: false,
        }
    }

    /// Creates a validation configuration with all checks enabled
    ///
    /// On top of every hook, the usage declarations of each marker type are enforced before its
    /// hooks run.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_marker_validation: true,
            enable_member_validation: true,
            enforce_valid_on: true,
            enforce_single_use: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_presets() {
        let disabled = ValidationConfig::disabled();
        assert!(!disabled.enable_marker_validation);
        assert!(!disabled.enable_member_validation);
        assert!(!disabled.enforce_valid_on);
        assert!(!disabled.enforce_single_use);

        let minimal = ValidationConfig::minimal();
        assert!(minimal.enable_marker_validation);
        assert!(!minimal.enable_member_validation);
        assert!(!minimal.enforce_valid_on);
        assert!(!minimal.enforce_single_use);

        let strict = ValidationConfig::strict();
        assert!(strict.enable_marker_validation);
        assert!(strict.enable_member_validation);
        assert!(strict.enforce_valid_on);
        assert!(strict.enforce_single_use);
    }

    #[test]
    fn test_default_config() {
        let default = ValidationConfig::default();
        assert!(default.enable_marker_validation);
        assert!(default.enable_member_validation);
        assert!(!default.enforce_valid_on);
        assert!(!default.enforce_single_use);
        assert_ne!(default, ValidationConfig::strict());
    }
}
