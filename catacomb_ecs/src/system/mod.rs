//! Utilities for *systems* in ECS.

use std::any::Any;
use std::time::Duration;

pub use frame::Frame;
pub use membership::Membership;
pub use signature::Signature;

mod frame;
mod membership;
mod signature;

/// Type which represents duration between two ticks.
pub type DeltaTime = Duration;

/// Objects of this trait represent *system* of ECS.
///
/// System declares which components it requires and is updated once per tick
/// with the list of entities which have all of them.
///
pub trait System: AsAny {
    /// Name of the system, unique among all registered systems.
    fn name(&self) -> &'static str;

    /// Component kinds which entity must have to become a member of this system.
    ///
    /// Queried once on registration, so it cannot change later.
    ///
    fn signature(&self) -> Signature;

    /// Handles state of the current system.
    ///
    /// Members which are not active should be skipped. Structural changes
    /// must be requested through [`Frame::commands`]: they are applied on the next tick.
    ///
    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime);
}

/// Conversion into [`Any`] for downcasting of systems to their concrete types.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> AsAny for T
where
    T: Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
