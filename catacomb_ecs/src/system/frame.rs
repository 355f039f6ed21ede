//! View of ECS which is given to the *system* while it is updated.

use crate::{CommandQueue, ComponentData, Entity, EntityId, EntityStorage, Resources};

/// Access to ECS for the system which is being updated.
///
/// Component data can be read and modified in place, but components cannot be
/// attached or detached directly: such changes are queued with [`Frame::commands`].
///
pub struct Frame<'a> {
    entities: &'a mut EntityStorage,
    commands: &'a mut CommandQueue,
    resources: &'a mut Resources,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(
        entities: &'a mut EntityStorage,
        commands: &'a mut CommandQueue,
        resources: &'a mut Resources,
    ) -> Self {
        Self {
            entities,
            commands,
            resources,
        }
    }

    /// Retrieves the entity with given identifier.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Retrieves statically typed component data attached to the entity.
    pub fn get<T>(&self, id: EntityId) -> Option<&T>
    where
        T: ComponentData,
    {
        self.entities.get(id)?.get()
    }

    /// Retrieves mutable reference to statically typed component data attached to the entity.
    pub fn get_mut<T>(&mut self, id: EntityId) -> Option<&mut T>
    where
        T: ComponentData,
    {
        self.entities.get_mut(id)?.get_mut()
    }

    /// Returns `true` if entity exists and is active.
    pub fn is_active(&self, id: EntityId) -> bool {
        self.entities
            .get(id)
            .map(Entity::is_active)
            .unwrap_or(false)
    }

    /// Queue of structural changes which will be applied on the next tick.
    pub fn commands(&mut self) -> &mut CommandQueue {
        self.commands
    }

    pub fn resources(&self) -> &Resources {
        self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.resources
    }
}
