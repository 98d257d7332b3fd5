//! CustomAttribute-specific types and data structures.
//!
//! This module contains the types used for representing marker declarations, including
//! argument values, named arguments, and the declaration itself. The argument model follows the
//! value shapes of ECMA-335 II.23.3 custom attribute blobs, without their binary encoding.

use std::sync::Arc;

use crate::Result;

/// A reference-counted pointer to a `CustomAttribute`
pub type CustomAttributeRc = Arc<CustomAttribute>;
/// A vector that holds a list of `CustomAttribute` instances for storage on targets
pub type CustomAttributeList = Arc<boxcar::Vec<CustomAttributeRc>>;

/// A marker declaration attached to a target
///
/// The declaration is inert data: it names the marker type and carries the arguments the
/// marker is instantiated from during discovery.
#[derive(Debug, Clone)]
pub struct CustomAttribute {
    /// Name of the marker type, matched against [`crate::metadata::markers::MarkerType::NAME`]
    pub type_name: String,
    /// Arguments of the declaration
    pub value: CustomAttributeValue,
}

impl CustomAttribute {
    /// Creates a declaration of `type_name` without arguments
    pub fn new(type_name: impl Into<String>) -> Self {
        CustomAttribute {
            type_name: type_name.into(),
            value: CustomAttributeValue::default(),
        }
    }

    /// Appends a fixed (constructor) argument
    #[must_use]
    pub fn with_fixed_arg(mut self, arg: CustomAttributeArgument) -> Self {
        self.value.fixed_args.push(arg);
        self
    }

    /// Appends a named property argument
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: CustomAttributeArgument) -> Self {
        self.value.named_args.push(CustomAttributeNamedArgument {
            is_field: false,
            name: name.into(),
            arg_type: value.type_name().to_string(),
            value,
        });
        self
    }

    /// Appends a named field argument
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: CustomAttributeArgument) -> Self {
        self.value.named_args.push(CustomAttributeNamedArgument {
            is_field: true,
            name: name.into(),
            arg_type: value.type_name().to_string(),
            value,
        });
        self
    }
}

/// Represents the arguments of a marker declaration
#[derive(Debug, Clone, Default)]
pub struct CustomAttributeValue {
    /// Fixed arguments from the constructor signature
    pub fixed_args: Vec<CustomAttributeArgument>,
    /// Named arguments (fields and properties)
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

impl CustomAttributeValue {
    /// Returns the fixed argument at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if there is no argument at `index`.
    pub fn fixed_arg(&self, index: usize) -> Result<&CustomAttributeArgument> {
        self.fixed_args.get(index).ok_or_else(|| {
            malformed_error!(
                "Expected a fixed argument at index {} - only {} present",
                index,
                self.fixed_args.len()
            )
        })
    }

    /// Returns the value of the named argument `name`, if present
    ///
    /// When a name is given more than once, the last assignment wins.
    #[must_use]
    pub fn named_arg(&self, name: &str) -> Option<&CustomAttributeArgument> {
        self.named_args
            .iter()
            .rev()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// Represents a single custom attribute argument value
#[derive(Debug, Clone, PartialEq)]
pub enum CustomAttributeArgument {
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Type reference (as string)
    Type(String),
    /// Array of arguments
    Array(Vec<CustomAttributeArgument>),
    /// Enum value (enum type name + underlying value)
    Enum(String, Box<CustomAttributeArgument>),
}

impl CustomAttributeArgument {
    /// Returns the serialization type name of this argument
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            CustomAttributeArgument::Bool(_) => "bool",
            CustomAttributeArgument::Char(_) => "char",
            CustomAttributeArgument::I4(_) => "int32",
            CustomAttributeArgument::U4(_) => "uint32",
            CustomAttributeArgument::I8(_) => "int64",
            CustomAttributeArgument::U8(_) => "uint64",
            CustomAttributeArgument::R8(_) => "float64",
            CustomAttributeArgument::String(_) => "string",
            CustomAttributeArgument::Type(_) => "type",
            CustomAttributeArgument::Array(_) => "array",
            CustomAttributeArgument::Enum(_, _) => "enum",
        }
    }

    /// Returns the string payload
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the argument is not a string.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            CustomAttributeArgument::String(value) => Ok(value),
            other => Err(malformed_error!(
                "Expected a string argument, found {}",
                other.type_name()
            )),
        }
    }

    /// Returns the type name of a type reference argument
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the argument is not a type reference.
    pub fn as_type(&self) -> Result<&str> {
        match self {
            CustomAttributeArgument::Type(value) => Ok(value),
            other => Err(malformed_error!(
                "Expected a type argument, found {}",
                other.type_name()
            )),
        }
    }

    /// Returns the boolean payload
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the argument is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            CustomAttributeArgument::Bool(value) => Ok(*value),
            other => Err(malformed_error!(
                "Expected a bool argument, found {}",
                other.type_name()
            )),
        }
    }

    /// Returns any integer payload widened to `i64`
    ///
    /// Enum arguments yield their underlying value.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the argument is not integral, or if an unsigned
    /// 64-bit value does not fit.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            CustomAttributeArgument::I4(value) => Ok(i64::from(*value)),
            CustomAttributeArgument::U4(value) => Ok(i64::from(*value)),
            CustomAttributeArgument::I8(value) => Ok(*value),
            CustomAttributeArgument::U8(value) => i64::try_from(*value)
                .map_err(|_| malformed_error!("Argument value {} does not fit into i64", value)),
            CustomAttributeArgument::Enum(_, underlying) => underlying.as_i64(),
            other => Err(malformed_error!(
                "Expected an integer argument, found {}",
                other.type_name()
            )),
        }
    }
}

/// Represents a named argument (field or property) in a custom attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Type of the argument
    pub arg_type: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}
