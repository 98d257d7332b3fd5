//! Grouping of discovered markers by concrete marker type.
//!
//! Both dispatch phases of the driver work on groups: all instances of one marker type on one
//! target ([`MarkerGroup`]), or all (member, marker) pairs of one marker type across the members
//! of one type ([`MemberMarkerGroup`]). Groups are keyed by [`TargetMarkerKey`] and come out in
//! the order their first marker was discovered.

use std::{
    any::TypeId,
    hash::{Hash, Hasher},
};

use crate::{
    metadata::{
        markers::{DiscoveredMarker, MarkerDescriptorRc, MarkerRc, MemberMarkerPair},
        token::Token,
    },
    utils::{grouping::try_group_by, hash::CompositeHash},
    Result,
};

/// Composite identity of a (target, marker type) pair
///
/// Equality compares the target token and the marker [`TypeId`]; the hash is the composite
/// hash of both, computed once on construction.
#[derive(Debug, Clone, Copy)]
pub struct TargetMarkerKey {
    target: Token,
    marker: TypeId,
    hash: u32,
}

impl TargetMarkerKey {
    /// Creates the key of marker type `marker` on `target`
    ///
    /// # Errors
    /// Propagates the precondition errors of [`CompositeHash::finalize`].
    pub fn new(target: Token, marker: TypeId) -> Result<Self> {
        let hash = CompositeHash::new()
            .add_component(&target)
            .add_component(&marker)
            .finalize()?;

        Ok(TargetMarkerKey {
            target,
            marker,
            hash,
        })
    }

    /// Token of the target (or owning type) this key belongs to
    #[must_use]
    pub fn target(&self) -> Token {
        self.target
    }

    /// Identity of the marker type
    #[must_use]
    pub fn marker(&self) -> TypeId {
        self.marker
    }
}

impl PartialEq for TargetMarkerKey {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.marker == other.marker
    }
}

impl Eq for TargetMarkerKey {}

impl Hash for TargetMarkerKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

/// All instances of one marker type on one target, in discovery order
///
/// Never empty.
#[derive(Debug)]
pub struct MarkerGroup {
    /// Key of this group
    pub key: TargetMarkerKey,
    /// Descriptor of the marker type
    pub descriptor: MarkerDescriptorRc,
    /// Instances in discovery order
    pub markers: Vec<MarkerRc>,
}

impl MarkerGroup {
    /// Groups the markers discovered on `target` by concrete type
    ///
    /// # Errors
    /// Propagates key construction errors.
    pub fn collect(target: Token, discovered: Vec<DiscoveredMarker>) -> Result<Vec<MarkerGroup>> {
        let groups = try_group_by(discovered, |found| {
            TargetMarkerKey::new(target, found.descriptor.type_id)
        })?;

        Ok(groups
            .into_iter()
            .filter_map(|(key, members)| {
                let descriptor = members.first()?.descriptor.clone();
                Some(MarkerGroup {
                    key,
                    descriptor,
                    markers: members.into_iter().map(|found| found.marker).collect(),
                })
            })
            .collect())
    }

    /// Instance hooks spanning the whole group are dispatched to
    #[must_use]
    pub fn representative(&self) -> Option<&MarkerRc> {
        self.markers.first()
    }
}

/// All (member, marker) pairs of one marker type across the members of one type
///
/// Never empty.
#[derive(Debug)]
pub struct MemberMarkerGroup<'a> {
    /// Key of this group, built from the owning type's token
    pub key: TargetMarkerKey,
    /// Descriptor of the marker type
    pub descriptor: MarkerDescriptorRc,
    /// Pairs in member declaration order, then discovery order
    pub pairs: Vec<MemberMarkerPair<'a>>,
}

impl<'a> MemberMarkerGroup<'a> {
    /// Groups `pairs` collected from the members of the type `owner` by marker type
    ///
    /// # Errors
    /// Propagates key construction errors.
    pub fn collect(
        owner: Token,
        pairs: Vec<(MarkerDescriptorRc, MemberMarkerPair<'a>)>,
    ) -> Result<Vec<MemberMarkerGroup<'a>>> {
        let groups = try_group_by(pairs, |(descriptor, _)| {
            TargetMarkerKey::new(owner, descriptor.type_id)
        })?;

        Ok(groups
            .into_iter()
            .filter_map(|(key, entries)| {
                let descriptor = entries.first()?.0.clone();
                Some(MemberMarkerGroup {
                    key,
                    descriptor,
                    pairs: entries.into_iter().map(|(_, pair)| pair).collect(),
                })
            })
            .collect())
    }

    /// Marker the cross-member hook of this group is dispatched to
    #[must_use]
    pub fn representative(&self) -> Option<&MarkerRc> {
        self.pairs.first().map(|pair| &pair.marker)
    }
}
