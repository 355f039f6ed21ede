//! Plain data payloads of all component kinds.

use ultraviolet::{Vec2, Vec3};

use crate::resource::{GraphicsKey, LightKey, SpawnerKey};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: f32,
}

impl Position {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            scale: Vec3::one(),
            rotation: 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Movement {
    /// Acceleration applied every tick regardless of direction (gravity).
    pub constant_acceleration: Vec3,
    pub acceleration_direction: Vec3,
    pub acceleration: f32,
    pub velocity: Vec3,
    pub drag: f32,
}

impl Movement {
    pub fn new(acceleration: f32) -> Self {
        Self {
            acceleration,
            ..Default::default()
        }
    }
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            constant_acceleration: Vec3::new(0.0, -9.8, 0.0),
            acceleration_direction: Vec3::zero(),
            acceleration: 10.0,
            velocity: Vec3::zero(),
            drag: 2.5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Graphics {
    pub object: GraphicsKey,
}

impl Graphics {
    pub fn new(object: GraphicsKey) -> Self {
        Self { object }
    }
}

/// Sprite sheet animation state.
///
/// Sprite is advanced by `advance_by` every `update_interval` seconds,
/// wrapping around `mod_advancement` on each axis.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Animation {
    pub starting_tile: Vec2,
    pub advance_by: Vec2,
    pub mod_advancement: Vec2,
    pub update_interval: f32,
    pub update_timer: f32,
    pub advancements: u32,
    pub stop_at_last: bool,
    pub invert: bool,
    pub sprite_count: Vec2,
    pub current_sprite: Vec2,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            starting_tile: Vec2::zero(),
            advance_by: Vec2::zero(),
            mod_advancement: Vec2::one(),
            update_interval: 1.0,
            update_timer: 0.0,
            advancements: 0,
            stop_at_last: false,
            invert: false,
            sprite_count: Vec2::one(),
            current_sprite: Vec2::zero(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Weapon {
    pub damage: f32,
    pub attack_cooldown: f32,
    pub attack_timer: f32,
    pub attack_requested: bool,
    /// Ranged weapons spawn slow projectiles, melee ones spawn fast short-lived hits.
    pub shoots: bool,
    pub position: Vec3,
    pub direction: Vec3,
}

impl Weapon {
    pub fn new(damage: f32, attack_cooldown: f32, shoots: bool) -> Self {
        Self {
            damage,
            attack_cooldown,
            attack_timer: 0.0,
            attack_requested: false,
            shoots,
            position: Vec3::zero(),
            direction: Vec3::unit_x(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Damage {
    pub amount: f32,
}

impl Damage {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projectile {
    /// Seconds left before projectile is destroyed.
    pub lifetime: f32,
}

impl Projectile {
    pub fn new(lifetime: f32) -> Self {
        Self { lifetime }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub light: LightKey,
    pub offset: Vec3,
}

impl PointLight {
    pub fn new(light: LightKey) -> Self {
        Self {
            light,
            offset: Vec3::zero(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParticleSpawner {
    pub spawner: SpawnerKey,
    pub offset: Vec3,
}

impl ParticleSpawner {
    pub fn new(spawner: SpawnerKey) -> Self {
        Self {
            spawner,
            offset: Vec3::zero(),
        }
    }
}
