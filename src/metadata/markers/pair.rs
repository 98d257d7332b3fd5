use crate::metadata::{
    graph::{Member, TypeDef},
    markers::{Marker, MarkerRc, MarkerType},
};

/// A marker instance together with the member it decorates
///
/// Pairs only exist during the cross-member phase of one type's validation. They borrow the
/// owning type and member from the graph being validated, so [`Marker::validate_members`]
/// implementations can name either in a failure.
#[derive(Clone)]
pub struct MemberMarkerPair<'a> {
    /// The type owning `member`
    pub owner: &'a TypeDef,
    /// The member decorated by `marker`
    pub member: &'a Member,
    /// The marker instance
    pub marker: MarkerRc,
}

impl<'a> MemberMarkerPair<'a> {
    /// Creates a new pair
    pub fn new(owner: &'a TypeDef, member: &'a Member, marker: MarkerRc) -> Self {
        MemberMarkerPair {
            owner,
            member,
            marker,
        }
    }

    /// Returns the marker as its concrete type `T`, if it is one
    #[must_use]
    pub fn marker_as<T: MarkerType>(&self) -> Option<&T> {
        let marker: &dyn Marker = self.marker.as_ref();
        marker.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for MemberMarkerPair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberMarkerPair")
            .field("owner", &self.owner.fullname)
            .field("member", &self.member.name)
            .field("marker", &self.marker)
            .finish()
    }
}
