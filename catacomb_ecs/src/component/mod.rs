//! Utilities for *components* in ECS.
//!
//! Set of component kinds is closed: every kind is a variant of [`Component`],
//! so code which is polymorphic over component kind is just a `match`.
//!

pub use payload::*;

use crate::resource::ExternalResource;

mod payload;

/// Objects of this trait are payloads of some [`Component`] variant.
///
/// Allows to access components by their static type instead of matching on [`Component`].
///
pub trait ComponentData: Sized + 'static {
    /// Kind of component which contains payload of this type.
    const KIND: ComponentKind;

    /// Extracts payload from the component, if kinds are matched.
    fn from_component(component: &Component) -> Option<&Self>;

    /// Extracts mutable payload from the component, if kinds are matched.
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! components {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        /// Kind of the *component* of ECS.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ComponentKind {
            $($(#[$meta])* $name,)+
        }

        impl ComponentKind {
            /// All component kinds in order of declaration.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$name,)+];

            /// Count of component kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// Position of the kind in [`ComponentKind::ALL`].
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        /// *Component* of ECS: plain data tagged with its kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Component {
            $($(#[$meta])* $name($name),)+
        }

        impl Component {
            /// Kind of this component.
            pub const fn kind(&self) -> ComponentKind {
                match self {
                    $(Component::$name(_) => ComponentKind::$name,)+
                }
            }
        }

        $(
            impl ComponentData for $name {
                const KIND: ComponentKind = ComponentKind::$name;

                fn from_component(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$name(data) => Some(data),
                        _ => None,
                    }
                }

                fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$name(data) => Some(data),
                        _ => None,
                    }
                }
            }

            impl From<$name> for Component {
                fn from(data: $name) -> Self {
                    Component::$name(data)
                }
            }
        )+
    };
}

components! {
    /// Placement of the entity in the world.
    Position,
    /// Velocity and acceleration of the entity.
    Movement,
    /// Renderable quad owned by the renderer.
    Graphics,
    /// Sprite sheet animation state.
    Animation,
    /// Weapon which spawns projectiles.
    Weapon,
    /// Damage dealt on contact.
    Damage,
    /// Projectile with limited lifetime.
    Projectile,
    /// Point light owned by the renderer.
    PointLight,
    /// Particle spawner owned by the renderer.
    ParticleSpawner,
}

impl Component {
    /// External resource owned by this component, if any.
    ///
    /// Such resource must be released when component is detached or its entity is destroyed.
    ///
    pub fn resource(&self) -> Option<ExternalResource> {
        match self {
            Component::Graphics(graphics) => Some(ExternalResource::Graphics(graphics.object)),
            Component::PointLight(light) => Some(ExternalResource::Light(light.light)),
            Component::ParticleSpawner(spawner) => {
                Some(ExternalResource::Spawner(spawner.spawner))
            }
            _ => None,
        }
    }
}
