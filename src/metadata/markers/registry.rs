//! Registry of validated marker types and marker discovery.
//!
//! The [`MarkerRegistry`] maps declaration names to [`MarkerDescriptor`]s. A descriptor captures
//! everything the validation driver needs to know about a marker type without naming it: its
//! [`TypeId`] as grouping key, its multiplicity policy, its valid targets and a factory turning
//! declaration arguments into a live [`MarkerRc`].
//!
//! # Thread Safety
//!
//! The registry is backed by a [`DashMap`], so marker types can be registered through a shared
//! reference while other threads discover markers. A registry is typically populated once at
//! startup, either through [`MarkerRegistry::builder`] or [`MarkerRegistry::register`].
//!
//! # Examples
//!
//! ```rust
//! use attrscope::prelude::*;
//!
//! #[derive(Debug)]
//! struct Obsolete {
//!     reason: String,
//! }
//!
//! impl Marker for Obsolete {
//!     fn validate(&self, target: &dyn Target) -> Result<()> {
//!         if self.reason.is_empty() {
//!             return Err(Error::usage::<Self>(target.id(), "a reason is required"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl MarkerType for Obsolete {
//!     const NAME: &'static str = "Obsolete";
//!
//!     fn instantiate(value: &CustomAttributeValue) -> Result<Self> {
//!         Ok(Obsolete {
//!             reason: value.fixed_arg(0)?.as_str()?.to_string(),
//!         })
//!     }
//! }
//!
//! let registry = MarkerRegistry::new();
//! registry.register::<Obsolete>()?;
//!
//! let method = Member::method(1, "Old").with_attribute(
//!     CustomAttribute::new("Obsolete")
//!         .with_fixed_arg(CustomAttributeArgument::String("use New".to_string())),
//! );
//! method.add_attribute(CustomAttribute::new("NotAMarker"));
//!
//! let found = registry.discover(&method)?;
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].descriptor.name, "Obsolete");
//! # Ok::<(), attrscope::Error>(())
//! ```

use std::{
    any::{type_name, TypeId},
    fmt,
    sync::Arc,
};

use dashmap::DashMap;

use crate::{
    metadata::{
        customattributes::CustomAttributeValue,
        markers::{MarkerRc, MarkerType},
        target::{AttributeTargets, Target},
    },
    Error, Result,
};

/// A reference-counted pointer to a `MarkerDescriptor`
pub type MarkerDescriptorRc = Arc<MarkerDescriptor>;

/// Creates a marker instance from declaration arguments
type MarkerFactory = fn(&CustomAttributeValue) -> Result<MarkerRc>;

/// Type-erased description of a registered marker type
pub struct MarkerDescriptor {
    /// Declaration name, [`MarkerType::NAME`]
    pub name: &'static str,
    /// Identity of the concrete marker type, the grouping key
    pub type_id: TypeId,
    /// Rust path of the concrete marker type, for diagnostics
    pub type_name: &'static str,
    /// [`MarkerType::ALLOW_MULTIPLE`]
    pub allow_multiple: bool,
    /// [`MarkerType::VALID_ON`]
    pub valid_on: AttributeTargets,
    factory: MarkerFactory,
}

impl MarkerDescriptor {
    /// Creates the descriptor of marker type `M`
    #[must_use]
    pub fn of<M: MarkerType>() -> Self {
        MarkerDescriptor {
            name: M::NAME,
            type_id: TypeId::of::<M>(),
            type_name: type_name::<M>(),
            allow_multiple: M::ALLOW_MULTIPLE,
            valid_on: M::VALID_ON,
            factory: instantiate_marker::<M>,
        }
    }

    /// Creates a marker instance from declaration arguments
    ///
    /// # Errors
    /// Returns the error of [`MarkerType::instantiate`] unchanged.
    pub fn instantiate(&self, value: &CustomAttributeValue) -> Result<MarkerRc> {
        (self.factory)(value)
    }
}

impl fmt::Debug for MarkerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerDescriptor")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("allow_multiple", &self.allow_multiple)
            .field("valid_on", &self.valid_on)
            .finish_non_exhaustive()
    }
}

fn instantiate_marker<M: MarkerType>(value: &CustomAttributeValue) -> Result<MarkerRc> {
    Ok(Arc::new(M::instantiate(value)?))
}

/// A marker instance produced by discovery, together with its descriptor
#[derive(Debug, Clone)]
pub struct DiscoveredMarker {
    /// Descriptor of the marker's type
    pub descriptor: MarkerDescriptorRc,
    /// The live marker instance
    pub marker: MarkerRc,
}

/// Registry of validated marker types, keyed by declaration name
#[derive(Default)]
pub struct MarkerRegistry {
    descriptors: DashMap<&'static str, MarkerDescriptorRc>,
}

impl MarkerRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        MarkerRegistry {
            descriptors: DashMap::new(),
        }
    }

    /// Starts building a registry from a list of marker types
    #[must_use]
    pub fn builder() -> MarkerRegistryBuilder {
        MarkerRegistryBuilder::default()
    }

    /// Registers marker type `M`
    ///
    /// Registering the same type twice is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateMarker`] if a different type is already registered under
    /// [`MarkerType::NAME`].
    pub fn register<M: MarkerType>(&self) -> Result<()> {
        self.insert(MarkerDescriptor::of::<M>())
    }

    fn insert(&self, descriptor: MarkerDescriptor) -> Result<()> {
        let name = descriptor.name;
        match self.descriptors.entry(name) {
            dashmap::mapref::entry::Entry::Occupied(existing) => {
                if existing.get().type_id == descriptor.type_id {
                    Ok(())
                } else {
                    Err(Error::DuplicateMarker(name))
                }
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(Arc::new(descriptor));
                Ok(())
            }
        }
    }

    /// Returns the descriptor registered under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MarkerDescriptorRc> {
        self.descriptors.get(name).map(|entry| entry.value().clone())
    }

    /// Returns true if marker type `M` is registered
    #[must_use]
    pub fn contains<M: MarkerType>(&self) -> bool {
        self.get(M::NAME)
            .is_some_and(|descriptor| descriptor.type_id == TypeId::of::<M>())
    }

    /// Number of registered marker types
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no marker type is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Discovers the validated markers attached to `target`
    ///
    /// Walks the marker declarations of `target` in declaration order and instantiates every
    /// one whose name is registered. Declarations of unregistered names are skipped. Nothing is
    /// cached: every call creates fresh instances.
    ///
    /// # Errors
    /// Returns [`Error::MarkerInstantiation`] for the first declaration whose factory fails.
    pub fn discover(&self, target: &dyn Target) -> Result<Vec<DiscoveredMarker>> {
        let mut found = Vec::new();

        for (_, attribute) in target.custom_attributes().iter() {
            let Some(descriptor) = self.get(&attribute.type_name) else {
                continue;
            };

            let marker = descriptor.instantiate(&attribute.value).map_err(|error| {
                Error::MarkerInstantiation {
                    marker: descriptor.name,
                    target: target.id(),
                    source: Box::new(error),
                }
            })?;

            found.push(DiscoveredMarker { descriptor, marker });
        }

        Ok(found)
    }
}

/// Builder collecting marker types before creating a [`MarkerRegistry`]
#[derive(Default)]
pub struct MarkerRegistryBuilder {
    descriptors: Vec<MarkerDescriptor>,
}

impl MarkerRegistryBuilder {
    /// Adds marker type `M`
    #[must_use]
    pub fn marker<M: MarkerType>(mut self) -> Self {
        self.descriptors.push(MarkerDescriptor::of::<M>());
        self
    }

    /// Creates the registry
    ///
    /// # Errors
    /// Returns [`Error::DuplicateMarker`] if two different types share a name.
    pub fn build(self) -> Result<MarkerRegistry> {
        let registry = MarkerRegistry::new();
        for descriptor in self.descriptors {
            registry.insert(descriptor)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            customattributes::{CustomAttribute, CustomAttributeArgument},
            graph::Member,
            target::TargetKind,
        },
        test::factories::{Flag, Tag},
    };

    mod shadow {
        use crate::{
            metadata::{
                customattributes::CustomAttributeValue,
                markers::{Marker, MarkerType},
                target::Target,
            },
            Result,
        };

        /// Claims the name of [`crate::test::factories::Flag`]
        #[derive(Debug)]
        pub struct Flag;

        impl Marker for Flag {
            fn validate(&self, _target: &dyn Target) -> Result<()> {
                Ok(())
            }
        }

        impl MarkerType for Flag {
            const NAME: &'static str = "Flag";

            fn instantiate(_value: &CustomAttributeValue) -> Result<Self> {
                Ok(Flag)
            }
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = MarkerRegistry::new();
        assert!(registry.is_empty());

        registry.register::<Flag>().unwrap();
        registry.register::<Tag>().unwrap();
        registry.register::<Flag>().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains::<Flag>());
        assert!(registry.contains::<Tag>());

        let tag = registry.get("Tag").unwrap();
        assert!(tag.allow_multiple);
        assert_eq!(tag.type_id, TypeId::of::<Tag>());
        assert!(registry.get("Unknown").is_none());
    }

    #[test]
    fn test_name_clash_is_rejected() {
        let registry = MarkerRegistry::new();
        registry.register::<Flag>().unwrap();

        let result = registry.register::<shadow::Flag>();
        assert!(matches!(result, Err(Error::DuplicateMarker("Flag"))));
        assert!(registry.contains::<Flag>());
        assert!(!registry.contains::<shadow::Flag>());

        let result = MarkerRegistry::builder()
            .marker::<shadow::Flag>()
            .marker::<Flag>()
            .build();
        assert!(matches!(result, Err(Error::DuplicateMarker("Flag"))));
    }

    #[test]
    fn test_discover_keeps_declaration_order_and_skips_unknown() {
        let registry = MarkerRegistry::builder()
            .marker::<Flag>()
            .marker::<Tag>()
            .build()
            .unwrap();

        let member = Member::field(1, "value")
            .with_attribute(Tag::declare("a"))
            .with_attribute(CustomAttribute::new("Serializable"))
            .with_attribute(Flag::declare())
            .with_attribute(Tag::declare("b"));

        let found = registry.discover(&member).unwrap();
        let names: Vec<_> = found.iter().map(|found| found.descriptor.name).collect();
        assert_eq!(names, ["Tag", "Flag", "Tag"]);

        let labels: Vec<_> = found
            .iter()
            .filter_map(|found| found.marker.downcast_ref::<Tag>())
            .map(|tag| tag.label.as_str())
            .collect();
        assert_eq!(labels, ["a", "b"]);
    }

    #[test]
    fn test_discover_creates_fresh_instances() {
        let registry = MarkerRegistry::builder().marker::<Flag>().build().unwrap();
        let member = Member::field(1, "value").with_attribute(Flag::declare());

        let first = registry.discover(&member).unwrap();
        let second = registry.discover(&member).unwrap();
        assert!(!Arc::ptr_eq(&first[0].marker, &second[0].marker));
    }

    #[test]
    fn test_instantiation_failure_is_wrapped() {
        let registry = MarkerRegistry::builder().marker::<Tag>().build().unwrap();
        let member = Member::property(2, "Broken").with_attribute(
            CustomAttribute::new("Tag").with_fixed_arg(CustomAttributeArgument::I4(3)),
        );

        match registry.discover(&member) {
            Err(Error::MarkerInstantiation {
                marker,
                target,
                source,
            }) => {
                assert_eq!(marker, "Tag");
                assert_eq!(target.kind, TargetKind::Property);
                assert_eq!(target.name, "Broken");
                assert!(matches!(*source, Error::Malformed { .. }));
            }
            other => panic!("expected an instantiation error, got {other:?}"),
        }
    }
}
