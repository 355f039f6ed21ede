#![cfg(test)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use ultraviolet::Vec3;

use super::*;
use crate::component::{Damage, Graphics, Movement, PointLight, Position, Projectile, Weapon};
use crate::resource::{ExternalResource, Light};

const TICK: DeltaTime = DeltaTime::from_millis(16);

type Journal = Rc<RefCell<Vec<&'static str>>>;

/// System which records what it observed on every update.
struct Recorder {
    name: &'static str,
    signature: Signature,
    journal: Option<Journal>,
    members: Vec<Vec<EntityId>>,
    active: Vec<Vec<EntityId>>,
}

impl Recorder {
    fn new(name: &'static str, kinds: &[ComponentKind]) -> Self {
        Self {
            name,
            signature: Signature::of(kinds),
            journal: None,
            members: Vec::new(),
            active: Vec::new(),
        }
    }

    fn journaled(name: &'static str, journal: &Journal) -> Self {
        Self {
            journal: Some(Rc::clone(journal)),
            ..Self::new(name, &[])
        }
    }
}

impl System for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn signature(&self) -> Signature {
        self.signature
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, _: DeltaTime) {
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(self.name);
        }
        self.members.push(members.as_slice().to_vec());
        let active = members.iter().filter(|&id| frame.is_active(id)).collect();
        self.active.push(active);
    }
}

/// System which spawns a damage entity for every member on each update.
struct Spawner {
    spawned: Vec<EntityId>,
}

impl System for Spawner {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::Weapon])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, _: DeltaTime) {
        for _ in members {
            let commands = frame.commands();
            let entity = commands.create_entity();
            commands.add_component(entity, Damage::new(1.0));
            self.spawned.push(entity);
        }
    }
}

fn manager() -> EcsManager {
    EcsManager::new(Config::default())
}

fn members(manager: &EcsManager, name: &str) -> Vec<EntityId> {
    manager.get_system(name).unwrap().members().iter().collect()
}

fn recorder<'a>(manager: &'a EcsManager, name: &str) -> &'a Recorder {
    manager.get_system(name).unwrap().downcast().unwrap()
}

#[test]
fn test_deferred_creation() {
    let mut manager = manager();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("moving", &[ComponentKind::Position, ComponentKind::Movement]),
        )
        .unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.add_component(entity, Movement::default());
    assert!(manager.get_entity(entity).is_none());
    assert!(members(&manager, "moving").is_empty());
    assert_eq!(manager.commands().len(), 3);

    manager.update(TICK);
    assert!(manager.get_entity(entity).is_some());
    assert_eq!(recorder(&manager, "moving").members, [vec![entity]]);
    assert!(manager.commands().is_empty());
}

#[test]
fn test_deferred_attachment() {
    let mut manager = manager();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("moving", &[ComponentKind::Position, ComponentKind::Movement]),
        )
        .unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.update(TICK);

    manager.add_component(entity, Movement::default());
    assert!(members(&manager, "moving").is_empty());
    assert!(!manager.get_entity(entity).unwrap().has(ComponentKind::Movement));

    manager.update(TICK);
    assert_eq!(members(&manager, "moving"), [entity]);
    assert_eq!(recorder(&manager, "moving").members, [vec![], vec![entity]]);
}

#[test]
fn test_duplicate_attachment() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.add_component(entity, Damage::new(1.0));
    manager.add_component(entity, Damage::new(2.0));
    manager.update(TICK);

    let stored = manager.get_entity(entity).unwrap();
    assert_eq!(stored.get::<Damage>(), Some(&Damage::new(1.0)));
    assert_eq!(stored.components().count(), 1);

    let stats = manager.last_drain();
    assert_eq!(stats.attached, 1);
    assert_eq!(stats.dropped, 1);
}

#[test]
fn test_detach_absent() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.add_component(entity, Damage::new(1.0));
    manager.update(TICK);

    manager.remove_component(entity, ComponentKind::Movement);
    manager.update(TICK);

    let stored = manager.get_entity(entity).unwrap();
    assert_eq!(stored.get::<Damage>(), Some(&Damage::new(1.0)));
    assert_eq!(stored.components().count(), 1);
    assert_eq!(manager.last_drain().dropped, 1);
    assert_eq!(manager.last_drain().detached, 0);
}

#[test]
fn test_detach_leaves_membership() {
    let mut manager = manager();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("moving", &[ComponentKind::Position, ComponentKind::Movement]),
        )
        .unwrap();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("placed", &[ComponentKind::Position]),
        )
        .unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.add_component(entity, Movement::default());
    manager.update(TICK);
    assert_eq!(members(&manager, "moving"), [entity]);

    manager.remove_component(entity, ComponentKind::Movement);
    manager.update(TICK);
    assert!(members(&manager, "moving").is_empty());
    assert_eq!(members(&manager, "placed"), [entity]);
    assert_eq!(recorder(&manager, "moving").members, [vec![entity], vec![]]);
}

#[test]
fn test_destruction() {
    let mut manager = manager();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("placed", &[ComponentKind::Position]),
        )
        .unwrap();
    manager
        .register(Stage::Presentation, Recorder::new("everything", &[]))
        .unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.update(TICK);
    assert_eq!(members(&manager, "placed"), [entity]);
    assert_eq!(members(&manager, "everything"), [entity]);

    manager.remove_entity(entity);
    assert!(manager.get_entity(entity).is_some());

    manager.update(TICK);
    assert!(manager.get_entity(entity).is_none());
    assert!(members(&manager, "placed").is_empty());
    assert!(members(&manager, "everything").is_empty());
    assert_eq!(recorder(&manager, "placed").members, [vec![entity], vec![]]);
    assert!(manager.entities().is_empty());
}

#[test]
fn test_stale_identifier() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.update(TICK);
    manager.remove_entity(entity);
    manager.update(TICK);

    manager.add_component(entity, Position::default());
    manager.remove_component(entity, ComponentKind::Position);
    manager.remove_entity(entity);
    manager.update(TICK);

    assert!(manager.get_entity(entity).is_none());
    assert_eq!(manager.last_drain().dropped, 3);
    assert_eq!(manager.last_drain().applied(), 0);
}

#[test]
fn test_create_and_destroy_in_one_tick() {
    let mut manager = manager();
    manager
        .register(Stage::Simulation, Recorder::new("everything", &[]))
        .unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.remove_entity(entity);
    manager.update(TICK);

    let stats = manager.last_drain();
    assert_eq!((stats.created, stats.attached, stats.destroyed), (1, 1, 1));
    assert!(manager.get_entity(entity).is_none());
    assert_eq!(recorder(&manager, "everything").members, [Vec::<EntityId>::new()]);
}

#[test]
fn test_attach_and_detach_in_one_tick() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.add_component(entity, Damage::new(1.0));
    manager.update(TICK);

    // Attachments are committed before detachments, so the new one is rejected
    // and then the old one is removed.
    manager.remove_component(entity, ComponentKind::Damage);
    manager.add_component(entity, Damage::new(2.0));
    manager.update(TICK);

    assert!(!manager.get_entity(entity).unwrap().has(ComponentKind::Damage));
    assert_eq!(manager.last_drain().dropped, 1);
}

#[test]
fn test_release_on_detach() {
    let mut manager = manager();
    let object = manager.resources_mut().create_graphics("player.png");
    let entity = manager.create_entity();
    manager.add_component(entity, Graphics::new(object));
    manager.update(TICK);

    manager.remove_component(entity, ComponentKind::Graphics);
    manager.update(TICK);
    assert_eq!(manager.resources().released(), 1);
    assert_eq!(manager.last_drain().released, 1);
    assert!(manager.resources().graphics(object).is_none());
    assert!(manager.get_entity(entity).unwrap().component(ComponentKind::Graphics).is_none());

    manager.remove_component(entity, ComponentKind::Graphics);
    manager.update(TICK);
    assert_eq!(manager.resources().released(), 1);
}

#[test]
fn test_release_on_destruction() {
    let mut manager = manager();
    let resources = manager.resources_mut();
    let object = resources.create_graphics("torch.png");
    let light = resources.create_light(Light::default());

    let entity = manager.create_entity();
    manager.add_component(entity, Graphics::new(object));
    manager.add_component(entity, PointLight::new(light));
    manager.add_component(entity, Damage::new(1.0));
    manager.update(TICK);
    assert_eq!(manager.resources().len(), 2);

    manager.remove_entity(entity);
    manager.update(TICK);
    assert_eq!(manager.last_drain().released, 2);
    assert!(!manager.resources().contains(ExternalResource::Graphics(object)));
    assert!(!manager.resources().contains(ExternalResource::Light(light)));
    assert!(manager.resources().is_empty());
}

#[test]
fn test_release_on_rejected_attachment() {
    let mut manager = manager();
    let resources = manager.resources_mut();
    let first = resources.create_graphics("first.png");
    let second = resources.create_graphics("second.png");
    let late = resources.create_graphics("late.png");

    let entity = manager.create_entity();
    manager.add_component(entity, Graphics::new(first));
    manager.add_component(entity, Graphics::new(second));
    manager.update(TICK);

    let stats = manager.last_drain();
    assert_eq!(stats.attached, 1);
    assert_eq!(stats.dropped, 1);
    assert_eq!(stats.released, 1);
    assert!(manager.resources().contains(ExternalResource::Graphics(first)));
    assert!(!manager.resources().contains(ExternalResource::Graphics(second)));

    manager.remove_entity(entity);
    manager.update(TICK);
    manager.add_component(entity, Graphics::new(late));
    manager.update(TICK);

    let stats = manager.last_drain();
    assert_eq!(stats.dropped, 1);
    assert_eq!(stats.released, 1);
    assert!(!manager.resources().contains(ExternalResource::Graphics(late)));
    assert!(manager.resources().is_empty());
    assert_eq!(manager.resources().released(), 3);
}

#[test]
fn test_update_order() {
    let journal = Journal::default();
    let mut manager = manager();
    for name in ["animation", "movement", "graphics"] {
        manager
            .register(Stage::Simulation, Recorder::journaled(name, &journal))
            .unwrap();
    }
    manager
        .register(Stage::Presentation, Recorder::journaled("particles", &journal))
        .unwrap();

    manager.update(TICK);
    manager.update(TICK);
    assert_eq!(
        *journal.borrow(),
        ["animation", "movement", "graphics", "animation", "movement", "graphics"],
    );

    journal.borrow_mut().clear();
    manager.update_rendering_systems(TICK);
    assert_eq!(*journal.borrow(), ["particles"]);
}

#[test]
fn test_rendering_update_does_not_commit() {
    let mut manager = manager();
    manager
        .register(Stage::Presentation, Recorder::new("particles", &[]))
        .unwrap();

    let entity = manager.create_entity();
    manager.update_rendering_systems(TICK);
    assert!(manager.get_entity(entity).is_none());
    assert_eq!(recorder(&manager, "particles").members, [Vec::<EntityId>::new()]);

    manager.update(TICK);
    manager.update_rendering_systems(TICK);
    assert_eq!(recorder(&manager, "particles").members, [vec![], vec![entity]]);
}

#[test]
fn test_commands_from_systems() {
    let mut manager = manager();
    manager
        .register(Stage::Simulation, Spawner { spawned: Vec::new() })
        .unwrap();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("damage", &[ComponentKind::Damage]),
        )
        .unwrap();

    let shooter = manager.create_entity();
    manager.add_component(shooter, Weapon::new(1.0, 0.5, true));
    manager.update(TICK);

    let spawned = manager.system::<Spawner>().unwrap().spawned.clone();
    assert_eq!(spawned.len(), 1);
    assert!(manager.get_entity(spawned[0]).is_none());
    assert_eq!(recorder(&manager, "damage").members, [Vec::<EntityId>::new()]);

    manager.update(TICK);
    assert!(manager.get_entity(spawned[0]).is_some());
    assert_eq!(recorder(&manager, "damage").members[1], [spawned[0]]);
}

#[test]
fn test_activation() {
    let mut manager = manager();
    manager
        .register(
            Stage::Simulation,
            Recorder::new("placed", &[ComponentKind::Position]),
        )
        .unwrap();

    let first = manager.create_entity();
    let second = manager.create_entity();
    for entity in [first, second] {
        manager.add_component(entity, Position::default());
    }
    manager.update(TICK);

    manager.deactivate_entities([first]);
    assert!(!manager.get_entity(first).unwrap().is_active());

    manager.update(TICK);
    assert_eq!(members(&manager, "placed"), [first, second]);
    assert_eq!(recorder(&manager, "placed").active[1], [second]);

    manager.activate_entities([first]);
    manager.update(TICK);
    assert_eq!(recorder(&manager, "placed").active[2], [first, second]);
}

#[test]
fn test_activation_of_pending_entity() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.deactivate_entities([entity]);
    manager.update(TICK);
    assert!(manager.get_entity(entity).unwrap().is_active());
}

#[test]
fn test_registration() {
    let mut manager = manager();
    let entity = manager.create_entity();
    manager.add_component(entity, Projectile::new(1.0));
    manager.update(TICK);

    manager
        .register(
            Stage::Simulation,
            Recorder::new("projectiles", &[ComponentKind::Projectile]),
        )
        .unwrap();
    assert_eq!(members(&manager, "projectiles"), [entity]);

    let error = manager
        .register(Stage::Presentation, Recorder::new("projectiles", &[]))
        .unwrap_err();
    assert_eq!(error, RegistryError::DuplicateName("projectiles"));
    assert_eq!(manager.systems().count(), 1);
}

#[test]
fn test_lookup() {
    let mut manager = manager();
    manager
        .register(
            Stage::Presentation,
            Recorder::new("lights", &[ComponentKind::PointLight]),
        )
        .unwrap();

    let system = manager.get_system("lights").unwrap();
    assert_eq!(system.stage(), Stage::Presentation);
    assert_eq!(system.signature(), Signature::from([ComponentKind::PointLight]));
    assert!(manager.get_system("missing").is_none());
    assert!(manager.system::<Spawner>().is_none());

    manager.system_mut::<Recorder>().unwrap().members.push(Vec::new());
    assert_eq!(recorder(&manager, "lights").members.len(), 1);
}

#[test]
fn test_frame_access() {
    struct Mover;

    impl System for Mover {
        fn name(&self) -> &'static str {
            "mover"
        }

        fn signature(&self) -> Signature {
            Signature::from([ComponentKind::Position, ComponentKind::Movement])
        }

        fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, _: DeltaTime) {
            for &id in members {
                let velocity = frame.get::<Movement>(id).unwrap().velocity;
                frame.get_mut::<Position>(id).unwrap().position += velocity;
            }
        }
    }

    let mut manager = manager();
    manager.register(Stage::Simulation, Mover).unwrap();

    let entity = manager.create_entity();
    manager.add_component(entity, Position::default());
    manager.add_component(
        entity,
        Movement {
            velocity: Vec3::unit_x(),
            ..Default::default()
        },
    );
    manager.update(TICK);
    manager.update(TICK);

    let position = manager.get_entity(entity).unwrap().get::<Position>().unwrap();
    assert_eq!(position.position, Vec3::new(2.0, 0.0, 0.0));
}

/// Memberships must match signatures of all alive entities after every tick,
/// whatever sequence of commands was queued.
#[test]
fn test_membership_invariant() {
    let requirements: [&[ComponentKind]; 4] = [
        &[],
        &[ComponentKind::Position],
        &[ComponentKind::Position, ComponentKind::Movement],
        &[ComponentKind::Damage, ComponentKind::Projectile],
    ];
    let names = ["all", "placed", "moving", "projectiles"];

    let mut manager = manager();
    for (name, kinds) in names.into_iter().zip(requirements) {
        manager
            .register(Stage::Simulation, Recorder::new(name, kinds))
            .unwrap();
    }

    let kinds = [
        ComponentKind::Position,
        ComponentKind::Movement,
        ComponentKind::Damage,
        ComponentKind::Projectile,
    ];
    let component = |kind: ComponentKind| -> Component {
        match kind {
            ComponentKind::Position => Position::default().into(),
            ComponentKind::Movement => Movement::default().into(),
            ComponentKind::Damage => Damage::new(1.0).into(),
            _ => Projectile::new(1.0).into(),
        }
    };

    // Linear congruential generator keeps the sequence deterministic.
    let mut state = 0x2545_f491_u64;
    let mut next = move |bound: usize| {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        ((state >> 33) as usize) % bound
    };

    let mut known = Vec::new();
    for _ in 0..200 {
        for _ in 0..next(8) {
            match next(4) {
                0 => known.push(manager.create_entity()),
                _ if known.is_empty() => {}
                1 => {
                    let entity = known[next(known.len())];
                    manager.add_component(entity, component(kinds[next(kinds.len())]));
                }
                2 => {
                    let entity = known[next(known.len())];
                    manager.remove_component(entity, kinds[next(kinds.len())]);
                }
                _ => {
                    let entity = known[next(known.len())];
                    manager.remove_entity(entity);
                }
            }
        }
        manager.update(TICK);

        for (name, kinds) in names.into_iter().zip(requirements) {
            let required = Signature::of(kinds);
            let expected: BTreeSet<_> = manager
                .entities()
                .iter()
                .filter(|entity| entity.signature().contains_all(required))
                .map(Entity::id)
                .collect();
            let actual: BTreeSet<_> = members(&manager, name).into_iter().collect();
            assert_eq!(actual, expected, "membership of `{}` is broken", name);

            let observed = recorder(&manager, name).members.last().unwrap();
            assert_eq!(observed.len(), expected.len());
        }
    }
}
