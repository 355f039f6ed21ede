//! Factories of game objects.
//!
//! Factories only queue commands: spawned entities appear on the next tick.
//!

use ultraviolet::{Vec2, Vec3};

use catacomb_ecs::component::{
    Animation, Damage, Graphics, Movement, ParticleSpawner, PointLight, Position, Projectile,
    Weapon,
};
use catacomb_ecs::resource::{Light, Spawner};
use catacomb_ecs::{EcsManager, EntityId, Frame};

const PLAYER_TEXTURE: &str = "assets/textures/player.png";
const PROJECTILE_TEXTURE: &str = "assets/textures/projectiles.png";
const BRAZIER_TEXTURE: &str = "assets/textures/brazier.png";

/// Lifetime in seconds of projectiles of ranged and melee weapons.
const RANGED_LIFETIME: f32 = 2.0;
const MELEE_LIFETIME: f32 = 0.2;

/// Queues creation of the player armed with a ranged weapon.
pub fn spawn_player(manager: &mut EcsManager, position: Vec3) -> EntityId {
    let object = manager.resources_mut().create_graphics(PLAYER_TEXTURE);

    let entity = manager.create_entity();
    manager.add_component(entity, Position::new(position));
    manager.add_component(
        entity,
        Movement {
            constant_acceleration: Vec3::zero(),
            ..Movement::new(10.0)
        },
    );
    manager.add_component(entity, Graphics::new(object));
    manager.add_component(
        entity,
        Animation {
            advance_by: Vec2::new(1.0, 0.0),
            mod_advancement: Vec2::new(4.0, 1.0),
            update_interval: 0.3,
            sprite_count: Vec2::new(4.0, 1.0),
            ..Default::default()
        },
    );
    manager.add_component(entity, Weapon::new(10.0, 0.5, true));
    entity
}

/// Queues creation of the static brazier which emits light and sparks.
pub fn spawn_brazier(manager: &mut EcsManager, position: Vec3) -> EntityId {
    let resources = manager.resources_mut();
    let object = resources.create_graphics(BRAZIER_TEXTURE);
    let light = resources.create_light(Light {
        colour: Vec3::new(1.0, 0.6, 0.2),
        position,
        ..Default::default()
    });
    let spawner = resources.create_spawner(Spawner::new(30.0));

    let entity = manager.create_entity();
    manager.add_component(entity, Position::new(position));
    manager.add_component(entity, Graphics::new(object));
    manager.add_component(
        entity,
        PointLight {
            offset: Vec3::new(0.0, 0.5, 0.1),
            ..PointLight::new(light)
        },
    );
    manager.add_component(
        entity,
        ParticleSpawner {
            offset: Vec3::new(0.0, 0.5, 0.0),
            ..ParticleSpawner::new(spawner)
        },
    );
    entity
}

/// Queues creation of the projectile fired by given weapon.
///
/// Intended to be called by systems while they are updated.
///
pub fn spawn_projectile(frame: &mut Frame<'_>, weapon: &Weapon) -> EntityId {
    let resources = frame.resources_mut();
    let object = resources.create_graphics(PROJECTILE_TEXTURE);
    if let Some(graphics) = resources.graphics_mut(object) {
        graphics.position = weapon.position;
        graphics.flipped = weapon.direction.x > 0.0;
    }
    let light = resources.create_light(Light {
        colour: Vec3::new(3.0, 0.0, 0.0),
        position: weapon.position,
        linear: 3.0,
        quadratic: 6.0,
    });

    // Melee hits are short-lived but fast.
    let (speed, lifetime) = if weapon.shoots {
        (1.0, RANGED_LIFETIME)
    } else {
        (3.0, MELEE_LIFETIME)
    };

    let commands = frame.commands();
    let entity = commands.create_entity();
    commands.add_component(entity, Damage::new(weapon.damage));
    commands.add_component(entity, Position::new(weapon.position));
    commands.add_component(
        entity,
        Movement {
            constant_acceleration: Vec3::zero(),
            acceleration_direction: weapon.direction,
            acceleration: 0.0,
            velocity: weapon.direction * speed,
            drag: 0.0,
        },
    );
    commands.add_component(entity, Projectile::new(lifetime));
    commands.add_component(entity, Graphics::new(object));
    commands.add_component(
        entity,
        Animation {
            advance_by: Vec2::new(1.0, 0.0),
            mod_advancement: Vec2::new(3.0, 0.0),
            update_interval: 0.2,
            sprite_count: Vec2::new(3.0, 2.0),
            ..Default::default()
        },
    );
    commands.add_component(
        entity,
        PointLight {
            offset: Vec3::new(0.0, 0.0, 0.1),
            ..PointLight::new(light)
        },
    );
    entity
}
