//! Utilities for the list of entities handled by a *system*.

use std::slice;

use crate::EntityId;

/// List of entities which are handled by some system.
///
/// Contains every entity whose signature is a superset of the system's signature,
/// in order of joining. Activity of the entity is not taken into account.
///
#[derive(Debug, Default, Clone)]
pub struct Membership {
    entities: Vec<EntityId>,
}

impl Membership {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if entity is a member.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns iterator over all members in order of joining.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().copied()
    }

    pub fn as_slice(&self) -> &[EntityId] {
        &self.entities
    }

    /// Adds entity to the list, if it is not a member yet.
    pub(crate) fn insert(&mut self, id: EntityId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entities.push(id);
        true
    }

    /// Removes entity from the list preserving order of other members.
    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|&member| member == id) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Membership {
    type Item = &'a EntityId;
    type IntoIter = slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
