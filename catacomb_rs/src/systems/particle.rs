use catacomb_ecs::component::{ParticleSpawner, Position};
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Emits particles of particle spawners.
///
/// Presentation-only: updated with the rendering cadence, not with the simulation.
///
#[derive(Debug)]
pub struct ParticleSystem;

impl System for ParticleSystem {
    fn name(&self) -> &'static str {
        "particle"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::ParticleSpawner, ComponentKind::Position])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime) {
        let delta_time = delta_time.as_secs_f32();
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let (Some(spawner), Some(position)) =
                (frame.get::<ParticleSpawner>(id), frame.get::<Position>(id))
            else {
                continue;
            };
            let (key, position) = (spawner.spawner, position.position + spawner.offset);
            let Some(spawner) = frame.resources_mut().spawner_mut(key) else {
                continue;
            };
            spawner.position = position;
            if spawner.rate <= 0.0 {
                continue;
            }
            spawner.timer += delta_time;
            let count = (spawner.timer * spawner.rate).floor();
            spawner.timer -= count / spawner.rate;
            spawner.emitted += count as u64;
        }
    }
}
