use thiserror::Error;

use crate::metadata::{markers::MarkerType, target::TargetId};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure carries enough context to be reported without access to the metadata graph it
/// was raised from: marker failures name the marker type and carry a detached [`TargetId`] of
/// the offending target.
///
/// # Error Categories
///
/// ## Marker Errors
/// - [`Error::MarkerUsage`] - A marker reports that it is used incorrectly on a target
/// - [`Error::MarkerInstantiation`] - A marker could not be created from its declaration
/// - [`Error::Malformed`] - The arguments of a marker declaration have the wrong shape
///
/// ## Registry Errors
/// - [`Error::DuplicateMarker`] - Two distinct marker types claim the same name
///
/// ## Composite Key Errors
/// - [`Error::HashEmpty`] - A composite hash was finalized without any component
/// - [`Error::HashNullComponent`] - A composite hash was given an absent component
///
/// # Examples
///
/// ```rust,no_run
/// use attrscope::{Error, prelude::*};
///
/// # fn run(validator: &MarkerValidator, assembly: &Assembly) {
/// match validator.validate_assembly(assembly) {
///     Ok(()) => println!("All markers are used correctly"),
///     Err(Error::MarkerUsage { marker, target, message }) => {
///         eprintln!("{marker} misused on {target}: {message}");
///     }
///     Err(Error::MarkerInstantiation { marker, target, source }) => {
///         eprintln!("could not create {marker} on {target}: {source}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A marker determined that its usage preconditions are violated.
    ///
    /// Raised by the validation hooks of a marker, or by the driver itself when attribute usage
    /// enforcement is enabled in the [`crate::ValidationConfig`].
    ///
    /// # Fields
    ///
    /// * `marker` - Name of the marker type that reported the violation
    /// * `target` - Identity of the offending target
    /// * `message` - Description of the violated precondition
    #[error("Invalid usage of marker '{marker}' on {target}: {message}")]
    MarkerUsage {
        /// Name of the marker type
        marker: &'static str,
        /// The target the marker is misused on
        target: TargetId,
        /// What is wrong with the usage
        message: String,
    },

    /// A marker instance could not be created from its declaration.
    ///
    /// Discovery wraps any failure of [`MarkerType::instantiate`] into this variant, so callers
    /// can tell "the marker says its usage is wrong" apart from "the marker could not even be
    /// constructed".
    #[error("Failed to instantiate marker '{marker}' on {target}: {source}")]
    MarkerInstantiation {
        /// Name of the marker type
        marker: &'static str,
        /// The target carrying the declaration
        target: TargetId,
        /// The error returned by the marker factory
        #[source]
        source: Box<Error>,
    },

    /// The arguments of a marker declaration are missing or of an unexpected type.
    ///
    /// The error includes the source location where the problem was detected for debugging
    /// purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Two different marker types were registered under the same name.
    #[error("A different marker type is already registered as '{0}'")]
    DuplicateMarker(&'static str),

    /// A composite hash was requested from zero components.
    #[error("A composite hash requires at least one component")]
    HashEmpty,

    /// A composite hash was given an absent component.
    ///
    /// The associated value is the position of the first absent component.
    #[error("Composite hash component {0} is null")]
    HashNullComponent(usize),
}

impl Error {
    /// Creates a [`Error::MarkerUsage`] for the marker type `M`.
    ///
    /// This is the constructor marker hooks use to report a violated precondition.
    ///
    /// # Arguments
    ///
    /// * `target` - Identity of the offending target
    /// * `message` - Description of what is wrong
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// fn validate(&self, target: &dyn Target) -> Result<()> {
    ///     if target.name().is_empty() {
    ///         return Err(Error::usage::<Self>(target.id(), "target must be named"));
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn usage<M: MarkerType>(target: TargetId, message: impl Into<String>) -> Self {
        Error::MarkerUsage {
            marker: M::NAME,
            target,
            message: message.into(),
        }
    }

    /// Returns the name of the marker type this error is about, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Error::MarkerUsage { marker, .. } | Error::MarkerInstantiation { marker, .. } => {
                Some(*marker)
            }
            Error::DuplicateMarker(name) => Some(*name),
            _ => None,
        }
    }

    /// Returns the identity of the target this error is about, if any.
    #[must_use]
    pub fn target(&self) -> Option<&TargetId> {
        match self {
            Error::MarkerUsage { target, .. } | Error::MarkerInstantiation { target, .. } => {
                Some(target)
            }
            _ => None,
        }
    }
}
