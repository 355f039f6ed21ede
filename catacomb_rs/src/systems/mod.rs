//! Gameplay systems of the catacomb game.

use catacomb_ecs::{EcsManager, Stage};

use crate::error::AppError;

pub use animation::AnimationSystem;
pub use light::LightSystem;
pub use movement::MovementSystem;
pub use particle::ParticleSystem;
pub use player::PlayerSystem;
pub use projectile::ProjectileSystem;
pub use weapon::WeaponSystem;

mod animation;
mod light;
mod movement;
mod particle;
mod player;
mod projectile;
mod weapon;

/// Registers all systems of the game.
///
/// Order of simulation systems matters: each system relies on
/// state advanced by the previous ones during the same tick.
///
pub fn register_all(manager: &mut EcsManager) -> Result<(), AppError> {
    manager.register(Stage::Simulation, PlayerSystem::default())?;
    manager.register(Stage::Simulation, AnimationSystem)?;
    manager.register(Stage::Simulation, MovementSystem)?;
    manager.register(Stage::Simulation, WeaponSystem)?;
    manager.register(Stage::Simulation, ProjectileSystem)?;
    manager.register(Stage::Simulation, LightSystem)?;
    manager.register(Stage::Presentation, ParticleSystem)?;
    Ok(())
}
