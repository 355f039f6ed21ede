//! Queue of deferred structural changes of ECS.
//!
//! Changes are kept in four separate lists, each in order of submission.
//! On commit, lists are applied in fixed order: creations, attachments,
//! detachments, destructions.
//!

use std::vec::Drain;

use crate::{Component, ComponentKind, EntityId};

/// Queue of structural changes requested during the tick.
#[derive(Debug, Default)]
pub struct CommandQueue {
    next_id: u64,
    creations: Vec<EntityId>,
    attachments: Vec<(EntityId, Component)>,
    detachments: Vec<(EntityId, ComponentKind)>,
    destructions: Vec<EntityId>,
}

impl CommandQueue {
    /// Creates an empty queue with lists preallocated for given count of commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 0,
            creations: Vec::with_capacity(capacity),
            attachments: Vec::with_capacity(capacity),
            detachments: Vec::with_capacity(capacity),
            destructions: Vec::with_capacity(capacity),
        }
    }

    /// Reserves identifier for the new entity and queues its creation.
    ///
    /// Returned identifier can be used as the target of other commands right away.
    ///
    pub fn create_entity(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.creations.push(id);
        id
    }

    /// Queues attachment of the component to the entity.
    pub fn add_component(&mut self, entity: EntityId, component: impl Into<Component>) {
        self.attachments.push((entity, component.into()));
    }

    /// Queues detachment of the component of given kind from the entity.
    pub fn remove_component(&mut self, entity: EntityId, kind: ComponentKind) {
        self.detachments.push((entity, kind));
    }

    /// Queues destruction of the entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.destructions.push(entity);
    }

    /// Count of queued commands.
    pub fn len(&self) -> usize {
        self.creations.len()
            + self.attachments.len()
            + self.detachments.len()
            + self.destructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if creation of the entity is queued.
    pub fn is_pending(&self, entity: EntityId) -> bool {
        self.creations.contains(&entity)
    }

    pub(crate) fn drain_creations(&mut self) -> Drain<'_, EntityId> {
        self.creations.drain(..)
    }

    pub(crate) fn drain_attachments(&mut self) -> Drain<'_, (EntityId, Component)> {
        self.attachments.drain(..)
    }

    pub(crate) fn drain_detachments(&mut self) -> Drain<'_, (EntityId, ComponentKind)> {
        self.detachments.drain(..)
    }

    pub(crate) fn drain_destructions(&mut self) -> Drain<'_, EntityId> {
        self.destructions.drain(..)
    }
}
