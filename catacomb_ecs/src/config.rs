//! Configuration utilities for ECS of the game.

use semver::Version;

pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref ENGINE_VERSION: Version = Version::parse(ENGINE_VERSION_STR)
        .unwrap_or_else(|_| Version::new(0, 0, 0));
}

/// This struct represents general configuration of ECS.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    entity_capacity: usize,
    command_capacity: usize,
}

impl Config {
    /// Creates new configuration with given name and version of the game.
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            ..Default::default()
        }
    }

    /// Sets count of entities expected to be alive at once.
    pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
        self.entity_capacity = capacity;
        self
    }

    /// Sets count of commands of each kind expected to be queued during one tick.
    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    /// Name of your game.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of your game.
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn entity_capacity(&self) -> usize {
        self.entity_capacity
    }

    pub fn command_capacity(&self) -> usize {
        self.command_capacity
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Hello World".to_string(),
            version: Version::new(0, 0, 0),
            entity_capacity: 256,
            command_capacity: 64,
        }
    }
}
