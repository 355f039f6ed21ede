use catacomb_ecs::component::Projectile;
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Destroys projectiles when their lifetime is over.
#[derive(Debug)]
pub struct ProjectileSystem;

impl System for ProjectileSystem {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::Projectile])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime) {
        let delta_time = delta_time.as_secs_f32();
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let Some(projectile) = frame.get_mut::<Projectile>(id) else {
                continue;
            };
            projectile.lifetime -= delta_time;
            if projectile.lifetime <= 0.0 {
                frame.commands().remove_entity(id);
            }
        }
    }
}
