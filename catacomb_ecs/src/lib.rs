//! Entity Component System (ECS) runtime for the catacomb game.
//!
//! Structural changes (creating and destroying entities, attaching and detaching components)
//! are never applied immediately. They are queued and committed at the start of the next
//! tick, before any system is updated, so that no system ever observes its membership
//! changing while it iterates over it.

pub use command::CommandQueue;
pub use component::{Component, ComponentData, ComponentKind};
pub use config::Config;
pub use entity::{Entity, EntityId, EntityStorage};
pub use error::{CommandError, RegistryError};
pub use manager::{DrainStats, EcsManager, Stage, SystemRef};
pub use resource::{ExternalResource, Resources};
pub use system::{DeltaTime, Frame, Membership, Signature, System};

pub mod command;
pub mod component;
pub mod config;
pub mod entity;
pub mod error;
pub mod manager;
pub mod resource;
pub mod system;
