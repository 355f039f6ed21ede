//! Error types of ECS.
//!
//! None of them is fatal: failed commands are dropped while the queue is committed,
//! and lookups by stale identifiers just return `None`.
//!

use thiserror::Error;

use crate::{ComponentKind, EntityId};

/// Error that can happen while committing a single queued command.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("entity {0} does not exist")]
    EntityNotFound(EntityId),

    #[error("entity {entity} already has component of kind {kind:?}")]
    DuplicateComponent {
        entity: EntityId,
        kind: ComponentKind,
    },

    #[error("entity {entity} has no component of kind {kind:?}")]
    ComponentNotFound {
        entity: EntityId,
        kind: ComponentKind,
    },
}

/// Error that can happen on registration of the system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("system with name `{0}` is already registered")]
    DuplicateName(&'static str),
}
