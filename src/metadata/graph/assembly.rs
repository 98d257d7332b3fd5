use std::sync::Arc;

use crate::metadata::{
    customattributes::{CustomAttribute, CustomAttributeList},
    graph::{TypeDef, TypeDefList, TypeDefRc},
    target::{Target, TargetKind},
    token::Token,
};

/// An assembly, the root of the metadata graph
pub struct Assembly {
    /// Token of this assembly
    pub token: Token,
    /// Simple name of this assembly
    pub name: String,
    /// Marker declarations on this assembly
    pub custom_attributes: CustomAttributeList,
    /// Types in declaration order
    pub types: TypeDefList,
}

impl Assembly {
    /// Creates an empty assembly with the conventional token `0x20000001`
    pub fn new(name: impl Into<String>) -> Self {
        Assembly {
            token: Token::from_parts(Token::TABLE_ASSEMBLY, 1),
            name: name.into(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
            types: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Attaches a marker declaration and returns the assembly
    #[must_use]
    pub fn with_attribute(self, attribute: CustomAttribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Appends a type and returns the assembly
    #[must_use]
    pub fn with_type(self, ty: TypeDef) -> Self {
        self.add_type(ty);
        self
    }

    /// Attaches a marker declaration
    pub fn add_attribute(&self, attribute: CustomAttribute) {
        self.custom_attributes.push(Arc::new(attribute));
    }

    /// Appends a type, returning the shared handle to it
    pub fn add_type(&self, ty: TypeDef) -> TypeDefRc {
        let ty = Arc::new(ty);
        self.types.push(ty.clone());
        ty
    }

    /// Returns the types in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeDefRc> {
        self.types.iter().map(|(_, ty)| ty)
    }

    /// Returns the first type whose full name is `fullname`
    #[must_use]
    pub fn type_by_name(&self, fullname: &str) -> Option<TypeDefRc> {
        self.types().find(|ty| ty.fullname == fullname).cloned()
    }
}

impl Target for Assembly {
    fn token(&self) -> Token {
        self.token
    }

    fn kind(&self) -> TargetKind {
        TargetKind::Assembly
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn custom_attributes(&self) -> &CustomAttributeList {
        &self.custom_attributes
    }
}
