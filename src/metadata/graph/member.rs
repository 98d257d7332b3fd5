use std::sync::Arc;

use crate::metadata::{
    customattributes::{CustomAttribute, CustomAttributeList},
    target::{Target, TargetKind},
    token::Token,
};

/// A reference-counted pointer to a `Member`
pub type MemberRc = Arc<Member>;
/// A vector that holds the members of a type in declaration order
pub type MemberList = Arc<boxcar::Vec<MemberRc>>;

/// The flavor of a type member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A field
    Field,
    /// A method
    Method,
    /// An instance or type constructor
    Constructor,
    /// A property
    Property,
    /// An event
    Event,
}

impl MemberKind {
    /// Returns the ECMA-335 table id rows of this kind live in
    #[must_use]
    pub fn table(self) -> u8 {
        match self {
            MemberKind::Field => Token::TABLE_FIELD,
            MemberKind::Method | MemberKind::Constructor => Token::TABLE_METHODDEF,
            MemberKind::Property => Token::TABLE_PROPERTY,
            MemberKind::Event => Token::TABLE_EVENT,
        }
    }
}

impl From<MemberKind> for TargetKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Field => TargetKind::Field,
            MemberKind::Method => TargetKind::Method,
            MemberKind::Constructor => TargetKind::Constructor,
            MemberKind::Property => TargetKind::Property,
            MemberKind::Event => TargetKind::Event,
        }
    }
}

/// A member of a type: field, method, constructor, property or event
pub struct Member {
    /// Token of this member
    pub token: Token,
    /// Flavor of this member
    pub kind: MemberKind,
    /// Simple name of this member
    pub name: String,
    /// Marker declarations on this member
    pub custom_attributes: CustomAttributeList,
}

impl Member {
    /// Creates a member without marker declarations
    pub fn new(token: Token, kind: MemberKind, name: impl Into<String>) -> Self {
        Member {
            token,
            kind,
            name: name.into(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Creates a field, deriving the token from `row`
    pub fn field(row: u32, name: impl Into<String>) -> Self {
        Self::with_row(MemberKind::Field, row, name)
    }

    /// Creates a method, deriving the token from `row`
    pub fn method(row: u32, name: impl Into<String>) -> Self {
        Self::with_row(MemberKind::Method, row, name)
    }

    /// Creates a constructor, deriving the token from `row`
    pub fn constructor(row: u32) -> Self {
        Self::with_row(MemberKind::Constructor, row, ".ctor")
    }

    /// Creates a property, deriving the token from `row`
    pub fn property(row: u32, name: impl Into<String>) -> Self {
        Self::with_row(MemberKind::Property, row, name)
    }

    /// Creates an event, deriving the token from `row`
    pub fn event(row: u32, name: impl Into<String>) -> Self {
        Self::with_row(MemberKind::Event, row, name)
    }

    fn with_row(kind: MemberKind, row: u32, name: impl Into<String>) -> Self {
        Self::new(Token::from_parts(kind.table(), row), kind, name)
    }

    /// Attaches a marker declaration and returns the member
    #[must_use]
    pub fn with_attribute(self, attribute: CustomAttribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Attaches a marker declaration
    pub fn add_attribute(&self, attribute: CustomAttribute) {
        self.custom_attributes.push(Arc::new(attribute));
    }
}

impl Target for Member {
    fn token(&self) -> Token {
        self.token
    }

    fn kind(&self) -> TargetKind {
        self.kind.into()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn custom_attributes(&self) -> &CustomAttributeList {
        &self.custom_attributes
    }
}
