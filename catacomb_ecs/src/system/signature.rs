//! Utilities for signature of *systems* in ECS.

use crate::ComponentKind;

// Each kind occupies one bit of the signature.
const _: () = assert!(ComponentKind::COUNT <= u64::BITS as usize);

/// Set of component kinds.
///
/// Describes which components are attached to some entity
/// or which components are required by some system.
///
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(u64);

impl Signature {
    /// Creates signature without any component kinds.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates signature from the slice of component kinds.
    pub fn of(kinds: &[ComponentKind]) -> Self {
        kinds.iter().copied().collect()
    }

    /// Returns copy of this signature with given kind added.
    pub const fn with(self, kind: ComponentKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= Self::bit(kind);
    }

    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !Self::bit(kind);
    }

    /// Returns `true` if given kind is a part of this signature.
    pub const fn contains(self, kind: ComponentKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    /// Returns `true` if this signature is a superset of the other one.
    pub const fn contains_all(self, other: Signature) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count of kinds in this signature.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns iterator over all kinds of this signature in order of declaration.
    pub fn kinds(self) -> impl Iterator<Item = ComponentKind> {
        ComponentKind::ALL
            .iter()
            .copied()
            .filter(move |&kind| self.contains(kind))
    }

    const fn bit(kind: ComponentKind) -> u64 {
        1 << kind.index()
    }
}

impl FromIterator<ComponentKind> for Signature {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = ComponentKind>,
    {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<const N: usize> From<[ComponentKind; N]> for Signature {
    fn from(kinds: [ComponentKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}
