use catacomb_ecs::component::{PointLight, Position};
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Moves point lights of the renderer along with their entities.
#[derive(Debug)]
pub struct LightSystem;

impl System for LightSystem {
    fn name(&self) -> &'static str {
        "light"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::PointLight, ComponentKind::Position])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, _: DeltaTime) {
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let (Some(light), Some(position)) =
                (frame.get::<PointLight>(id), frame.get::<Position>(id))
            else {
                continue;
            };
            let (key, position) = (light.light, position.position + light.offset);
            if let Some(light) = frame.resources_mut().light_mut(key) {
                light.position = position;
            }
        }
    }
}
