use std::sync::Arc;

use crate::metadata::{
    customattributes::{CustomAttribute, CustomAttributeList},
    graph::{Member, MemberList, MemberRc},
    target::{Target, TargetKind},
    token::Token,
};

/// A reference-counted pointer to a `TypeDef`
pub type TypeDefRc = Arc<TypeDef>;
/// A vector that holds the types of an assembly in declaration order
pub type TypeDefList = Arc<boxcar::Vec<TypeDefRc>>;

/// A type definition and the members it owns
///
/// Members are kept in declaration order, which is the order the validation driver visits
/// them in.
pub struct TypeDef {
    /// Token of this type
    pub token: Token,
    /// Namespace of this type, empty for the global namespace
    pub namespace: String,
    /// Simple name of this type
    pub name: String,
    /// Full name (`Namespace.Name`), used for display
    pub fullname: String,
    /// Marker declarations on this type
    pub custom_attributes: CustomAttributeList,
    /// Members in declaration order
    pub members: MemberList,
}

impl TypeDef {
    /// Creates a type without members or marker declarations
    pub fn new(token: Token, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        let fullname = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{namespace}.{name}")
        };

        TypeDef {
            token,
            namespace,
            name,
            fullname,
            custom_attributes: Arc::new(boxcar::Vec::new()),
            members: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Creates a type, deriving the `TypeDef` token from `row`
    pub fn with_row(row: u32, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Token::from_parts(Token::TABLE_TYPEDEF, row), namespace, name)
    }

    /// Attaches a marker declaration and returns the type
    #[must_use]
    pub fn with_attribute(self, attribute: CustomAttribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Appends a member and returns the type
    #[must_use]
    pub fn with_member(self, member: Member) -> Self {
        self.add_member(member);
        self
    }

    /// Attaches a marker declaration
    pub fn add_attribute(&self, attribute: CustomAttribute) {
        self.custom_attributes.push(Arc::new(attribute));
    }

    /// Appends a member, returning the shared handle to it
    pub fn add_member(&self, member: Member) -> MemberRc {
        let member = Arc::new(member);
        self.members.push(member.clone());
        member
    }

    /// Returns the members in declaration order
    pub fn members(&self) -> impl Iterator<Item = &MemberRc> {
        self.members.iter().map(|(_, member)| member)
    }

    /// Returns the first member called `name`
    #[must_use]
    pub fn member(&self, name: &str) -> Option<MemberRc> {
        self.members().find(|member| member.name == name).cloned()
    }
}

impl Target for TypeDef {
    fn token(&self) -> Token {
        self.token
    }

    fn kind(&self) -> TargetKind {
        TargetKind::Type
    }

    fn name(&self) -> &str {
        &self.fullname
    }

    fn custom_attributes(&self) -> &CustomAttributeList {
        &self.custom_attributes
    }
}
