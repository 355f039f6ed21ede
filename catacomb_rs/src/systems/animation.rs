use ultraviolet::Vec2;

use catacomb_ecs::component::{Animation, Graphics};
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Advances sprite sheet animations and updates sprites of graphics objects.
#[derive(Debug)]
pub struct AnimationSystem;

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::Graphics, ComponentKind::Animation])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime) {
        let delta_time = delta_time.as_secs_f32();
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let Some(&Graphics { object }) = frame.get::<Graphics>(id) else {
                continue;
            };
            let Some(sprite) = frame
                .get_mut::<Animation>(id)
                .and_then(|animation| advance(animation, delta_time))
            else {
                continue;
            };
            if let Some(graphics) = frame.resources_mut().graphics_mut(object) {
                graphics.sprite = sprite;
            }
        }
    }
}

/// Advances the animation by given count of seconds.
///
/// Returns new sprite, or `None` if animation has stopped at its last sprite.
///
fn advance(animation: &mut Animation, delta_time: f32) -> Option<Vec2> {
    if animation.stop_at_last && animation.current_sprite.x >= animation.sprite_count.x - 1.0 {
        return None;
    }

    let interval = animation.update_interval.max(f32::EPSILON);
    animation.update_timer += delta_time;
    let steps = (animation.update_timer / interval).floor() as u32;
    animation.advancements = animation.advancements.saturating_add(steps);
    animation.update_timer %= interval;

    let advancements = animation.advancements as f32;
    let advance = Vec2::new(
        (animation.advance_by.x * advancements) % animation.mod_advancement.x.max(1.0),
        (animation.advance_by.y * advancements) % animation.mod_advancement.y.max(1.0),
    );
    animation.current_sprite = if animation.invert {
        Vec2::new(
            animation.sprite_count.x - advance.x - 1.0,
            animation.starting_tile.y + advance.y,
        )
    } else {
        animation.starting_tile + advance
    };
    Some(animation.current_sprite)
}
