//! Recording markers for validation testing.
//!
//! Every hook of these markers appends an entry to a thread-local event log before deciding
//! its outcome, so tests can assert exactly which hooks ran, in which order, with which
//! inputs. The validation driver runs entirely on the calling thread, so each test sees only
//! its own events.

use std::cell::RefCell;

use crate::{
    metadata::{
        customattributes::{CustomAttribute, CustomAttributeArgument, CustomAttributeValue},
        markers::{Marker, MarkerRc, MarkerRegistry, MarkerType, MemberMarkerPair},
        target::{AttributeTargets, Target},
    },
    Error, Result,
};

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record(event: String) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

/// Clears the event log of the current thread
pub fn reset_events() {
    EVENTS.with(|events| events.borrow_mut().clear());
}

/// Returns the event log of the current thread
pub fn events() -> Vec<String> {
    EVENTS.with(|events| events.borrow().clone())
}

/// Creates a registry holding every recording marker
pub fn registry() -> MarkerRegistry {
    let registry = MarkerRegistry::new();
    for result in [
        registry.register::<Flag>(),
        registry.register::<Tag>(),
        registry.register::<AssemblyOnly>(),
    ] {
        if let Err(error) = result {
            panic!("failed to register test markers: {error}");
        }
    }
    registry
}

fn member_names(pairs: &[MemberMarkerPair<'_>]) -> String {
    pairs
        .iter()
        .map(|pair| pair.member.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Single-use marker; fails validation when declared with `Fail = true`
#[derive(Debug)]
pub struct Flag {
    pub fail: bool,
}

impl Flag {
    pub fn declare() -> CustomAttribute {
        CustomAttribute::new(Self::NAME)
    }

    pub fn fail() -> CustomAttribute {
        Self::declare().with_property("Fail", CustomAttributeArgument::Bool(true))
    }
}

impl Marker for Flag {
    fn validate(&self, target: &dyn Target) -> Result<()> {
        record(format!("validate Flag on {}", target.name()));
        if self.fail {
            return Err(Error::usage::<Self>(target.id(), "declared to fail"));
        }
        Ok(())
    }

    fn validate_multiple(&self, target: &dyn Target, group: &[MarkerRc]) -> Result<()> {
        record(format!("validate_multiple Flag x{} on {}", group.len(), target.name()));
        Ok(())
    }

    fn validate_members(&self, pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
        record(format!(
            "validate_members Flag [{}] of {}",
            member_names(pairs),
            pairs.first().map_or("", |pair| pair.owner.fullname.as_str())
        ));
        Ok(())
    }
}

impl MarkerType for Flag {
    const NAME: &'static str = "Flag";

    fn instantiate(value: &CustomAttributeValue) -> Result<Self> {
        let fail = value
            .named_arg("Fail")
            .map(CustomAttributeArgument::as_bool)
            .transpose()?
            .unwrap_or(false);
        Ok(Flag { fail })
    }
}

/// Multi-use marker carrying a mandatory string label
#[derive(Debug)]
pub struct Tag {
    pub label: String,
}

impl Tag {
    pub fn declare(label: &str) -> CustomAttribute {
        CustomAttribute::new(Self::NAME)
            .with_fixed_arg(CustomAttributeArgument::String(label.to_string()))
    }
}

impl Marker for Tag {
    fn validate(&self, target: &dyn Target) -> Result<()> {
        record(format!("validate Tag({}) on {}", self.label, target.name()));
        Ok(())
    }

    fn validate_multiple(&self, target: &dyn Target, group: &[MarkerRc]) -> Result<()> {
        let labels: Vec<_> = group
            .iter()
            .filter_map(|marker| marker.downcast_ref::<Tag>())
            .map(|tag| tag.label.as_str())
            .collect();
        record(format!(
            "validate_multiple Tag [{}] on {}",
            labels.join(","),
            target.name()
        ));
        Ok(())
    }

    fn validate_members(&self, pairs: &[MemberMarkerPair<'_>]) -> Result<()> {
        record(format!("validate_members Tag [{}]", member_names(pairs)));
        Ok(())
    }
}

impl MarkerType for Tag {
    const NAME: &'static str = "Tag";
    const ALLOW_MULTIPLE: bool = true;

    fn instantiate(value: &CustomAttributeValue) -> Result<Self> {
        Ok(Tag {
            label: value.fixed_arg(0)?.as_str()?.to_string(),
        })
    }
}

/// Marker only valid on assemblies
#[derive(Debug)]
pub struct AssemblyOnly;

impl AssemblyOnly {
    pub fn declare() -> CustomAttribute {
        CustomAttribute::new(Self::NAME)
    }
}

impl Marker for AssemblyOnly {
    fn validate(&self, target: &dyn Target) -> Result<()> {
        record(format!("validate AssemblyOnly on {}", target.name()));
        Ok(())
    }
}

impl MarkerType for AssemblyOnly {
    const NAME: &'static str = "AssemblyOnly";
    const VALID_ON: AttributeTargets = AttributeTargets::ASSEMBLY;

    fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
        Ok(AssemblyOnly)
    }
}
