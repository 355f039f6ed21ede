//! Orchestrator of ECS: owns entities, queued commands, external resources and systems.
//!
//! Each tick consists of two phases. First, every command queued since the previous tick
//! is committed and memberships of all systems are brought up to date. Then systems are
//! updated in order of their registration, each one iterating over its own membership.
//! Memberships never change while systems are updated.
//!

use std::fmt;

use crate::{
    CommandError, CommandQueue, Component, ComponentKind, Config, DeltaTime, Entity, EntityId,
    EntityStorage, Frame, Membership, RegistryError, Resources, Signature, System,
};

mod tests;

/// Group of systems which are updated together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Gameplay systems, updated by [`EcsManager::update`].
    Simulation,
    /// Presentation-only systems, updated by [`EcsManager::update_rendering_systems`].
    Presentation,
}

/// Statistics of the commit of queued commands.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DrainStats {
    pub created: usize,
    pub attached: usize,
    pub detached: usize,
    pub destroyed: usize,
    /// External resources released by detached, rejected or destroyed components.
    pub released: usize,
    /// Commands which could not be applied.
    pub dropped: usize,
}

impl DrainStats {
    /// Count of commands which were applied.
    pub fn applied(&self) -> usize {
        self.created + self.attached + self.detached + self.destroyed
    }
}

/// Registered system together with its membership.
struct Slot {
    stage: Stage,
    signature: Signature,
    members: Membership,
    system: Box<dyn System>,
}

impl Slot {
    fn name(&self) -> &'static str {
        self.system.name()
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.signature().contains_all(self.signature)
    }

    /// Adds entity to the membership if it satisfies requirements of the system.
    fn offer(&mut self, entity: &Entity) {
        if !self.members.contains(entity.id()) && self.matches(entity) {
            self.members.insert(entity.id());
        }
    }

    /// Removes entity from the membership if it does not satisfy requirements anymore.
    fn revoke(&mut self, entity: &Entity) {
        if !self.matches(entity) {
            self.members.remove(entity.id());
        }
    }
}

/// Borrowed system registered in the [`EcsManager`].
#[derive(Clone, Copy)]
pub struct SystemRef<'a> {
    slot: &'a Slot,
}

impl<'a> SystemRef<'a> {
    pub fn name(&self) -> &'static str {
        self.slot.name()
    }

    pub fn stage(&self) -> Stage {
        self.slot.stage
    }

    /// Signature which was declared by the system on registration.
    pub fn signature(&self) -> Signature {
        self.slot.signature
    }

    /// Entities which are handled by the system.
    pub fn members(&self) -> &'a Membership {
        &self.slot.members
    }

    pub fn system(&self) -> &'a dyn System {
        &*self.slot.system
    }

    /// Downcasts the system to its concrete type.
    pub fn downcast<T>(&self) -> Option<&'a T>
    where
        T: System,
    {
        self.system().as_any().downcast_ref()
    }
}

impl fmt::Debug for SystemRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SystemRef")
            .field("name", &self.name())
            .field("stage", &self.stage())
            .field("signature", &self.signature())
            .field("members", self.members())
            .finish()
    }
}

/// Manager of all entities and systems of ECS.
///
/// Structural changes requested through the manager (or through [`Frame::commands`]
/// while systems are updated) take effect at the start of the next [`update`](Self::update).
///
pub struct EcsManager {
    config: Config,
    entities: EntityStorage,
    commands: CommandQueue,
    resources: Resources,
    systems: Vec<Slot>,
    last_drain: DrainStats,
}

impl EcsManager {
    /// Creates new manager without any entities and systems.
    pub fn new(config: Config) -> Self {
        Self::with_resources(config, Resources::new())
    }

    /// Creates new manager which will own given external resources.
    pub fn with_resources(config: Config, resources: Resources) -> Self {
        log::debug!(
            "creating ECS manager for {} v{}",
            config.name(),
            config.version(),
        );
        let commands = CommandQueue::with_capacity(config.command_capacity());
        Self {
            config,
            entities: EntityStorage::new(),
            commands,
            resources,
            systems: Vec::new(),
            last_drain: DrainStats::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers the system in given stage.
    ///
    /// Systems of one stage are updated in order of their registration.
    /// Already committed entities which satisfy requirements of the system join it immediately.
    ///
    /// # Errors
    ///
    /// An error is returned if system with the same name was already registered.
    ///
    pub fn register<S>(&mut self, stage: Stage, system: S) -> Result<(), RegistryError>
    where
        S: System,
    {
        let name = system.name();
        if self.systems.iter().any(|slot| slot.name() == name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let signature = system.signature();
        let mut slot = Slot {
            stage,
            signature,
            members: Membership::with_capacity(self.config.entity_capacity()),
            system: Box::new(system),
        };
        for entity in self.entities.iter() {
            slot.offer(entity);
        }
        log::debug!(
            "registered system `{}` in {:?} stage with signature {:?}",
            name,
            stage,
            signature.kinds().collect::<Vec<_>>(),
        );
        self.systems.push(slot);
        Ok(())
    }

    /// Commits all queued commands, then updates all systems of the simulation stage.
    pub fn update(&mut self, delta_time: DeltaTime) {
        let stats = self.drain();
        if stats != DrainStats::default() {
            log::trace!("committed queued commands: {:?}", stats);
        }
        self.last_drain = stats;
        self.run(Stage::Simulation, delta_time);
    }

    /// Updates all systems of the presentation stage.
    ///
    /// Queued commands are not committed here, so rendering can run
    /// with its own cadence independently of the simulation.
    ///
    pub fn update_rendering_systems(&mut self, delta_time: DeltaTime) {
        self.run(Stage::Presentation, delta_time);
    }

    /// Reserves identifier for the new entity and queues its creation.
    pub fn create_entity(&mut self) -> EntityId {
        self.commands.create_entity()
    }

    /// Queues attachment of the component to the entity.
    pub fn add_component(&mut self, entity: EntityId, component: impl Into<Component>) {
        self.commands.add_component(entity, component)
    }

    /// Queues detachment of the component of given kind from the entity.
    pub fn remove_component(&mut self, entity: EntityId, kind: ComponentKind) {
        self.commands.remove_component(entity, kind)
    }

    /// Queues destruction of the entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.commands.remove_entity(entity)
    }

    /// Retrieves committed entity with given identifier.
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Retrieves registered system by its name.
    pub fn get_system(&self, name: &str) -> Option<SystemRef<'_>> {
        self.systems
            .iter()
            .find(|slot| slot.name() == name)
            .map(|slot| SystemRef { slot })
    }

    /// Retrieves registered system by its concrete type.
    pub fn system<T>(&self) -> Option<&T>
    where
        T: System,
    {
        self.systems.iter().find_map(|slot| {
            let system: &dyn System = &*slot.system;
            system.as_any().downcast_ref()
        })
    }

    /// Retrieves mutable reference to registered system by its concrete type.
    pub fn system_mut<T>(&mut self) -> Option<&mut T>
    where
        T: System,
    {
        self.systems.iter_mut().find_map(|slot| {
            let system: &mut dyn System = &mut *slot.system;
            system.as_any_mut().downcast_mut()
        })
    }

    /// Returns iterator over all registered systems in order of registration.
    pub fn systems(&self) -> impl Iterator<Item = SystemRef<'_>> {
        self.systems.iter().map(|slot| SystemRef { slot })
    }

    /// Activates committed entities with given identifiers.
    ///
    /// Unlike structural changes, activation is applied immediately:
    /// it does not change memberships, only behavior of systems.
    ///
    pub fn activate_entities<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        self.set_active(ids, true)
    }

    /// Deactivates committed entities with given identifiers immediately.
    pub fn deactivate_entities<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        self.set_active(ids, false)
    }

    pub fn entities(&self) -> &EntityStorage {
        &self.entities
    }

    /// Commands which will be committed on the next tick.
    pub fn commands(&self) -> &CommandQueue {
        &self.commands
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    /// Statistics of the last commit of queued commands.
    pub fn last_drain(&self) -> DrainStats {
        self.last_drain
    }

    fn set_active<I>(&mut self, ids: I, active: bool)
    where
        I: IntoIterator<Item = EntityId>,
    {
        for id in ids {
            match self.entities.get_mut(id) {
                Some(entity) => entity.set_active(active),
                None => log::debug!("cannot set activity of entity {}: not found", id),
            }
        }
    }

    fn run(&mut self, stage: Stage, delta_time: DeltaTime) {
        let Self {
            entities,
            commands,
            resources,
            systems,
            ..
        } = self;
        let mut frame = Frame::new(entities, commands, resources);
        for slot in systems.iter_mut().filter(|slot| slot.stage == stage) {
            slot.system.update(&slot.members, &mut frame, delta_time);
        }
    }

    /// Commits all queued commands in fixed order:
    /// creations, attachments, detachments and destructions.
    ///
    /// Every queue is emptied; commands which cannot be applied are dropped.
    ///
    fn drain(&mut self) -> DrainStats {
        let Self {
            entities,
            commands,
            resources,
            systems,
            ..
        } = self;
        let mut stats = DrainStats::default();

        for id in commands.drain_creations() {
            let entity = Entity::new(id);
            for slot in systems.iter_mut() {
                slot.offer(&entity);
            }
            entities.insert(entity);
            stats.created += 1;
        }

        for (id, component) in commands.drain_attachments() {
            match commit_attach(entities, systems, id, component) {
                Ok(()) => stats.attached += 1,
                Err((error, component)) => {
                    log::debug!("attachment dropped: {}", error);
                    stats.dropped += 1;
                    stats.released += release(resources, &component);
                }
            }
        }

        for (id, kind) in commands.drain_detachments() {
            match commit_detach(entities, systems, resources, id, kind) {
                Ok(released) => {
                    stats.detached += 1;
                    stats.released += released;
                }
                Err(error) => {
                    log::debug!("detachment dropped: {}", error);
                    stats.dropped += 1;
                }
            }
        }

        for id in commands.drain_destructions() {
            match commit_destroy(entities, systems, resources, id) {
                Ok(released) => {
                    stats.destroyed += 1;
                    stats.released += released;
                }
                Err(error) => {
                    log::debug!("destruction dropped: {}", error);
                    stats.dropped += 1;
                }
            }
        }

        stats
    }
}

impl fmt::Debug for EcsManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EcsManager")
            .field("config", &self.config)
            .field("entities", &self.entities.len())
            .field("commands", &self.commands.len())
            .field("resources", &self.resources.len())
            .field("systems", &self.systems().map(|system| system.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Rejected component is handed back so its external resource can be released.
fn commit_attach(
    entities: &mut EntityStorage,
    systems: &mut [Slot],
    id: EntityId,
    component: Component,
) -> Result<(), (CommandError, Component)> {
    let entity = match entities.get_mut(id) {
        Some(entity) => entity,
        None => return Err((CommandError::EntityNotFound(id), component)),
    };
    let kind = component.kind();
    if entity.has(kind) {
        return Err((CommandError::DuplicateComponent { entity: id, kind }, component));
    }
    entity.attach(component);
    for slot in systems.iter_mut() {
        slot.offer(entity);
    }
    Ok(())
}

/// Returns count of released external resources.
fn commit_detach(
    entities: &mut EntityStorage,
    systems: &mut [Slot],
    resources: &mut Resources,
    id: EntityId,
    kind: ComponentKind,
) -> Result<usize, CommandError> {
    let entity = entities
        .get_mut(id)
        .ok_or(CommandError::EntityNotFound(id))?;
    let component = entity
        .detach(kind)
        .ok_or(CommandError::ComponentNotFound { entity: id, kind })?;
    for slot in systems.iter_mut() {
        slot.revoke(entity);
    }
    Ok(release(resources, &component))
}

/// Returns count of released external resources.
fn commit_destroy(
    entities: &mut EntityStorage,
    systems: &mut [Slot],
    resources: &mut Resources,
    id: EntityId,
) -> Result<usize, CommandError> {
    let entity = entities.remove(id).ok_or(CommandError::EntityNotFound(id))?;
    for slot in systems.iter_mut() {
        slot.members.remove(id);
    }
    Ok(entity
        .into_components()
        .map(|component| release(resources, &component))
        .sum())
}

fn release(resources: &mut Resources, component: &Component) -> usize {
    match component.resource() {
        Some(resource) if resources.release(resource) => 1,
        _ => 0,
    }
}
