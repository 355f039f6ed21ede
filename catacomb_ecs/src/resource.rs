//! Registry of external resources which can be owned by components.
//!
//! Renderer keeps graphics objects, point lights and particle spawners here;
//! components hold only keys into this registry. When such component is detached
//! (or its entity destroyed), [`EcsManager`](crate::EcsManager) releases the resource
//! synchronously while committing the queued change.
//!

use slotmap::{new_key_type, SlotMap};
use ultraviolet::{Vec2, Vec3};

new_key_type! {
    /// Handle of the graphics object (textured quad) owned by the renderer.
    pub struct GraphicsKey;

    /// Handle of the point light owned by the renderer.
    pub struct LightKey;

    /// Handle of the particle spawner owned by the renderer.
    pub struct SpawnerKey;
}

/// Any resource which is owned by some component.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExternalResource {
    Graphics(GraphicsKey),
    Light(LightKey),
    Spawner(SpawnerKey),
}

/// Textured quad drawn by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsObject {
    pub texture: String,
    pub position: Vec3,
    /// Offset of current sprite in the sprite sheet.
    pub sprite: Vec2,
    pub flipped: bool,
}

impl GraphicsObject {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            position: Vec3::zero(),
            sprite: Vec2::zero(),
            flipped: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub colour: Vec3,
    pub position: Vec3,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            colour: Vec3::one(),
            position: Vec3::zero(),
            linear: 0.35,
            quadratic: 0.44,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spawner {
    pub position: Vec3,
    /// Particles emitted per second.
    pub rate: f32,
    pub timer: f32,
    pub emitted: u64,
}

impl Spawner {
    pub fn new(rate: f32) -> Self {
        Self {
            position: Vec3::zero(),
            rate,
            timer: 0.0,
            emitted: 0,
        }
    }
}

/// Storage of all external resources.
#[derive(Debug, Default)]
pub struct Resources {
    graphics: SlotMap<GraphicsKey, GraphicsObject>,
    lights: SlotMap<LightKey, Light>,
    spawners: SlotMap<SpawnerKey, Spawner>,
    released: usize,
}

impl Resources {
    /// Creates an empty resource registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new graphics object with given texture.
    pub fn create_graphics(&mut self, texture: impl Into<String>) -> GraphicsKey {
        self.graphics.insert(GraphicsObject::new(texture))
    }

    pub fn graphics(&self, key: GraphicsKey) -> Option<&GraphicsObject> {
        self.graphics.get(key)
    }

    pub fn graphics_mut(&mut self, key: GraphicsKey) -> Option<&mut GraphicsObject> {
        self.graphics.get_mut(key)
    }

    pub fn create_light(&mut self, light: Light) -> LightKey {
        self.lights.insert(light)
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    pub fn create_spawner(&mut self, spawner: Spawner) -> SpawnerKey {
        self.spawners.insert(spawner)
    }

    pub fn spawner(&self, key: SpawnerKey) -> Option<&Spawner> {
        self.spawners.get(key)
    }

    pub fn spawner_mut(&mut self, key: SpawnerKey) -> Option<&mut Spawner> {
        self.spawners.get_mut(key)
    }

    /// Returns `true` if resource is still alive.
    pub fn contains(&self, resource: ExternalResource) -> bool {
        match resource {
            ExternalResource::Graphics(key) => self.graphics.contains_key(key),
            ExternalResource::Light(key) => self.lights.contains_key(key),
            ExternalResource::Spawner(key) => self.spawners.contains_key(key),
        }
    }

    /// Releases the resource.
    ///
    /// Returns `false` if resource was already released (or never existed).
    ///
    pub fn release(&mut self, resource: ExternalResource) -> bool {
        let released = match resource {
            ExternalResource::Graphics(key) => self.graphics.remove(key).is_some(),
            ExternalResource::Light(key) => self.lights.remove(key).is_some(),
            ExternalResource::Spawner(key) => self.spawners.remove(key).is_some(),
        };
        if released {
            self.released += 1;
            log::trace!("released {:?}", resource);
        } else {
            log::warn!("attempt to release dead resource {:?}", resource);
        }
        released
    }

    /// Count of resources released so far.
    pub fn released(&self) -> usize {
        self.released
    }

    /// Count of alive resources of all types.
    pub fn len(&self) -> usize {
        self.graphics.len() + self.lights.len() + self.spawners.len()
    }

    /// Returns `true` if there are no alive resources.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
