use catacomb_ecs::component::{Movement, Position};
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Integrates velocities and positions of moving entities.
#[derive(Debug)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::Position, ComponentKind::Movement])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime) {
        let delta_time = delta_time.as_secs_f32();
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let Some(movement) = frame.get_mut::<Movement>(id) else {
                continue;
            };
            let velocity = integrate(movement, delta_time);
            if let Some(position) = frame.get_mut::<Position>(id) {
                position.position += velocity * delta_time;
            }
        }
    }
}

/// Applies acceleration and drag to the velocity, returning the new one.
fn integrate(movement: &mut Movement, delta_time: f32) -> ultraviolet::Vec3 {
    let acceleration = movement.constant_acceleration
        + movement.acceleration_direction * movement.acceleration;
    movement.velocity += acceleration * delta_time;
    movement.velocity *= (1.0 - movement.drag * delta_time).max(0.0);
    movement.velocity
}
