//! Marker declarations and their arguments.
//!
//! Every target of the metadata graph carries a declaration-ordered list of
//! [`CustomAttribute`]s. A declaration is inert: it names a marker type and holds the fixed and
//! named arguments the marker is created from. Turning declarations into live markers is the job
//! of [`crate::metadata::markers::MarkerRegistry::discover`].
//!
//! # Argument Model
//!
//! Arguments follow the value shapes of ECMA-335 II.23.3:
//! - **Fixed Arguments** - Constructor parameter values in declaration order
//! - **Named Arguments** - Field and property values with name/value pairs
//!
//! The typed accessors ([`CustomAttributeValue::fixed_arg`], [`CustomAttributeArgument::as_str`],
//! ...) return [`crate::Error::Malformed`] on a shape mismatch, which lets marker factories use
//! `?` throughout.
//!
//! # Examples
//!
//! ```rust
//! use attrscope::metadata::customattributes::{CustomAttribute, CustomAttributeArgument};
//!
//! let declaration = CustomAttribute::new("Range")
//!     .with_fixed_arg(CustomAttributeArgument::I4(0))
//!     .with_fixed_arg(CustomAttributeArgument::I4(10))
//!     .with_property("Inclusive", CustomAttributeArgument::Bool(true));
//!
//! let min = declaration.value.fixed_arg(0)?.as_i64()?;
//! let inclusive = declaration
//!     .value
//!     .named_arg("Inclusive")
//!     .map(CustomAttributeArgument::as_bool)
//!     .transpose()?
//!     .unwrap_or(false);
//!
//! assert_eq!(min, 0);
//! assert!(inclusive);
//! # Ok::<(), attrscope::Error>(())
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.3 - Custom Attributes

mod types;

pub use types::*;
