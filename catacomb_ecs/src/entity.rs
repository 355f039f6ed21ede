//! Utilities for *entities* in ECS.

use std::collections::BTreeMap;
use std::fmt;

use crate::component::{Component, ComponentData, ComponentKind};
use crate::system::Signature;

/// Unique identifier of the *entity* of ECS.
///
/// Identifiers grow monotonically and are never reused during the lifetime of the process.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value of the identifier.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Game object of ECS.
///
/// Thin container which holds at most one component of each kind
/// and a flag which tells systems whether to handle the entity this tick.
///
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    active: bool,
    signature: Signature,
    components: [Option<Component>; ComponentKind::COUNT],
}

impl Entity {
    /// Creates new active entity without any components.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            signature: Signature::empty(),
            components: std::array::from_fn(|_| None),
        }
    }

    /// Identifier of the entity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns `false` if systems should skip this entity.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Set of component kinds currently attached to the entity.
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Attaches component to the entity.
    ///
    /// Returns `false` if component of the same kind was already attached:
    /// in that case the attached component is left untouched.
    ///
    pub fn attach(&mut self, component: Component) -> bool {
        let kind = component.kind();
        let slot = &mut self.components[kind.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(component);
        self.signature.insert(kind);
        true
    }

    /// Detaches component of given kind from the entity.
    ///
    /// Returns component that was attached to the entity, if any.
    ///
    pub fn detach(&mut self, kind: ComponentKind) -> Option<Component> {
        let component = self.components[kind.index()].take()?;
        self.signature.remove(kind);
        Some(component)
    }

    /// Returns `true` if component of given kind is attached to the entity.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.signature.contains(kind)
    }

    /// Retrieves component of given kind attached to the entity.
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components[kind.index()].as_ref()
    }

    /// Retrieves statically typed component data attached to the entity.
    pub fn get<T>(&self) -> Option<&T>
    where
        T: ComponentData,
    {
        self.component(T::KIND).and_then(T::from_component)
    }

    /// Retrieves mutable reference to statically typed component data attached to the entity.
    pub fn get_mut<T>(&mut self) -> Option<&mut T>
    where
        T: ComponentData,
    {
        self.components[T::KIND.index()]
            .as_mut()
            .and_then(T::from_component_mut)
    }

    /// Returns iterator over all components attached to the entity.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().flatten()
    }

    pub(crate) fn into_components(self) -> impl Iterator<Item = Component> {
        self.components.into_iter().flatten()
    }
}

/// Storage for all committed entities of ECS, ordered by identifier.
#[derive(Debug, Default)]
pub struct EntityStorage {
    entities: BTreeMap<EntityId, Entity>,
}

impl EntityStorage {
    /// Creates an empty entity storage.
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.id(), entity)
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Retrieves an immutable reference to the entity with given identifier.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Returns `true` if entity with given identifier is stored here.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Count of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if there are no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns iterator over all entities in order of their creation.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }
}
