//! Composite hash codes for structural identity of multi-part keys.
//!
//! This module provides [`CompositeHash`] and [`compute_hash_code`] for combining the hash codes
//! of several identity components into one. Components are mixed FNV-1a style in sequence, so
//! the result depends on their order:
//!
//! ```text
//! hash = 2166136261
//! for each component: hash = hash * 16777619 ^ component
//! ```
//!
//! All arithmetic wraps at 32 bits.
//!
//! A composite identity must describe at least one component, and every component must be
//! present. Finalizing an empty builder fails with [`crate::Error::HashEmpty`], and an absent
//! component fails with [`crate::Error::HashNullComponent`].
//!
//! # Example Usage
//!
//! ```rust
//! use attrscope::utils::hash::CompositeHash;
//!
//! let hash = CompositeHash::new()
//!     .add_component(&"Demo.Foo")
//!     .add_component(&42u32)
//!     .finalize()?;
//!
//! let again = CompositeHash::new()
//!     .add_component(&"Demo.Foo")
//!     .add_component(&42u32)
//!     .finalize()?;
//!
//! assert_eq!(hash, again);
//! # Ok::<(), attrscope::Error>(())
//! ```

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::{Error, Result};

/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 16_777_619;

/// Builder combining component hash codes into one composite hash
///
/// Errors are deferred to [`CompositeHash::finalize`], which reports the first absent
/// component, or an empty builder.
#[derive(Debug, Clone, Copy)]
pub struct CompositeHash {
    state: u32,
    components: usize,
    first_null: Option<usize>,
}

impl CompositeHash {
    /// Create a new composite hash builder
    #[must_use]
    pub fn new() -> Self {
        CompositeHash {
            state: FNV_OFFSET_BASIS,
            components: 0,
            first_null: None,
        }
    }

    fn mix(&mut self, value: u32) {
        self.state = self.state.wrapping_mul(FNV_PRIME) ^ value;
    }

    /// Add an already computed component hash code, `None` standing for a null component
    #[must_use]
    pub fn add_hash(mut self, hash: Option<u32>) -> Self {
        match hash {
            Some(value) => self.mix(value),
            None => {
                self.first_null.get_or_insert(self.components);
            }
        }
        self.components += 1;
        self
    }

    /// Add a hashable component
    #[must_use]
    pub fn add_component<T: Hash + ?Sized>(self, component: &T) -> Self {
        self.add_hash(Some(component_hash(component)))
    }

    /// Add a component that may be absent
    #[must_use]
    pub fn add_optional<T: Hash>(self, component: Option<&T>) -> Self {
        self.add_hash(component.map(component_hash))
    }

    /// Finalize the builder and return the composite hash
    ///
    /// # Errors
    /// Returns [`Error::HashEmpty`] if no component was added, or [`Error::HashNullComponent`]
    /// with the position of the first absent component.
    pub fn finalize(self) -> Result<u32> {
        if let Some(index) = self.first_null {
            return Err(Error::HashNullComponent(index));
        }
        if self.components == 0 {
            return Err(Error::HashEmpty);
        }
        Ok(self.state)
    }
}

impl Default for CompositeHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine a sequence of component hash codes, in order
///
/// Fails on the first absent component without looking at the rest.
///
/// # Errors
/// Returns [`Error::HashNullComponent`] for an absent component and [`Error::HashEmpty`] for
/// an empty sequence.
pub fn compute_hash_code<I>(components: I) -> Result<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let mut hash = CompositeHash::new();
    for (index, component) in components.into_iter().enumerate() {
        let Some(value) = component else {
            return Err(Error::HashNullComponent(index));
        };
        hash = hash.add_hash(Some(value));
    }
    hash.finalize()
}

/// Compute the 32-bit hash code of a single component
///
/// Uses the standard library hasher with its fixed default keys, so the value is stable within
/// one build of the crate.
pub fn component_hash<T: Hash + ?Sized>(component: &T) -> u32 {
    let mut hasher = DefaultHasher::new();
    component.hash(&mut hasher);
    let wide = hasher.finish();
    (wide ^ (wide >> 32)) as u32
}
