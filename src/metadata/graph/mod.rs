//! The annotated metadata graph: assembly → types → members.
//!
//! The graph is a strict tree. An [`Assembly`] owns its [`TypeDef`]s and every type owns its
//! [`Member`]s. All child lists and marker declaration lists are append-only
//! [`boxcar::Vec`]s behind an [`std::sync::Arc`], so a graph can be built up through shared
//! references and handed to several threads for validation.
//!
//! # Examples
//!
//! ```rust
//! use attrscope::metadata::{
//!     customattributes::CustomAttribute,
//!     graph::{Assembly, Member, TypeDef},
//! };
//!
//! let assembly = Assembly::new("Demo").with_type(
//!     TypeDef::with_row(1, "Demo", "Foo")
//!         .with_attribute(CustomAttribute::new("Required"))
//!         .with_member(Member::field(1, "id").with_attribute(CustomAttribute::new("Unique")))
//!         .with_member(Member::method(1, "Run")),
//! );
//!
//! let foo = assembly.type_by_name("Demo.Foo").unwrap();
//! assert_eq!(foo.members().count(), 2);
//! assert!(foo.member("id").is_some());
//! ```

mod assembly;
mod member;
mod typedef;

pub use assembly::Assembly;
pub use member::{Member, MemberKind, MemberList, MemberRc};
pub use typedef::{TypeDef, TypeDefList, TypeDefRc};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        customattributes::CustomAttribute,
        target::{Target, TargetKind},
        token::Token,
    };

    #[test]
    fn test_member_tokens_follow_tables() {
        assert_eq!(Member::field(3, "f").token, Token(0x04000003));
        assert_eq!(Member::method(3, "m").token, Token(0x06000003));
        assert_eq!(Member::constructor(4).token, Token(0x06000004));
        assert_eq!(Member::property(3, "p").token, Token(0x17000003));
        assert_eq!(Member::event(3, "e").token, Token(0x14000003));
    }

    #[test]
    fn test_member_target_kinds() {
        assert_eq!(Member::field(1, "f").kind(), TargetKind::Field);
        assert_eq!(Member::constructor(1).kind(), TargetKind::Constructor);
        assert_eq!(Member::constructor(1).name(), ".ctor");
    }

    #[test]
    fn test_type_fullname() {
        let global = TypeDef::with_row(1, "", "Module");
        assert_eq!(global.name(), "Module");

        let nested = TypeDef::with_row(2, "Demo.Models", "Foo");
        assert_eq!(nested.name(), "Demo.Models.Foo");
        assert_eq!(nested.token, Token(0x02000002));
        assert_eq!(nested.id().kind, TargetKind::Type);
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let ty = TypeDef::with_row(1, "Demo", "Foo")
            .with_attribute(CustomAttribute::new("A"))
            .with_attribute(CustomAttribute::new("B"));
        ty.add_member(Member::field(1, "first"));
        ty.add_member(Member::field(2, "second"));
        ty.add_member(Member::method(1, "third"));

        let names: Vec<_> = ty.members().map(|member| member.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);

        let attributes: Vec<_> = ty
            .custom_attributes()
            .iter()
            .map(|(_, attribute)| attribute.type_name.as_str())
            .collect();
        assert_eq!(attributes, ["A", "B"]);
    }

    #[test]
    fn test_assembly_lookup() {
        let assembly = Assembly::new("Demo");
        let foo = assembly.add_type(TypeDef::with_row(1, "Demo", "Foo"));
        assembly.add_type(TypeDef::with_row(2, "Demo", "Bar"));

        assert_eq!(assembly.token, Token(0x20000001));
        assert_eq!(assembly.types().count(), 2);
        assert!(std::sync::Arc::ptr_eq(
            &assembly.type_by_name("Demo.Foo").unwrap(),
            &foo
        ));
        assert!(assembly.type_by_name("Foo").is_none());
    }
}
