//! Headless driver of the catacomb game.

use std::error::Error;

use ultraviolet::Vec3;

use catacomb_ecs::config::{ENGINE_NAME, ENGINE_VERSION};
use catacomb_ecs::{Config, EcsManager};

use config::AppConfig;
use systems::PlayerSystem;

mod config;
mod error;
mod logger;
mod spawn;
mod systems;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");

/// Player attacks once per this count of ticks.
const ATTACK_PERIOD: u32 = 45;

/// Entry point of `catacomb` game
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let config = AppConfig::from_env()?;
    let _handle = logger::init(config.log_level())?;
    log::info!("logger initialized successfully");
    log::info!("running on {} v{}", ENGINE_NAME, *ENGINE_VERSION);

    let version: semver::Version = APP_VERSION_STR.parse()?;
    let mut manager = EcsManager::new(Config::new(APP_NAME.to_string(), version));
    systems::register_all(&mut manager)?;

    let player = spawn::spawn_player(&mut manager, Vec3::zero());
    spawn::spawn_brazier(&mut manager, Vec3::new(3.0, 0.0, -1.0));
    log::debug!("player {} is queued", player);

    run(&mut manager, &config);

    manager.remove_entity(player);
    manager.update(config.step());
    log::info!(
        "finished after {} ticks: {} entities, {} resources alive, {} released",
        config.ticks(),
        manager.entities().len(),
        manager.resources().len(),
        manager.resources().released(),
    );
    Ok(())
}

fn run(manager: &mut EcsManager, config: &AppConfig) {
    let render_every = config.render_every().max(1);
    for tick in 0..config.ticks() {
        if tick % ATTACK_PERIOD == 0 {
            if let Some(player) = manager.system_mut::<PlayerSystem>() {
                player.request_attack();
            }
        }
        manager.update(config.step());
        if tick % render_every == 0 {
            manager.update_rendering_systems(config.step() * render_every);
        }
    }
}
