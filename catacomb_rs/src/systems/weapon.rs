use catacomb_ecs::component::Weapon;
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

use crate::spawn;

/// Cools weapons down and fires projectiles when attack was requested.
#[derive(Debug)]
pub struct WeaponSystem;

impl System for WeaponSystem {
    fn name(&self) -> &'static str {
        "weapon"
    }

    fn signature(&self) -> Signature {
        Signature::from([ComponentKind::Weapon])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, delta_time: DeltaTime) {
        let delta_time = delta_time.as_secs_f32();
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let Some(weapon) = frame.get_mut::<Weapon>(id) else {
                continue;
            };
            weapon.attack_timer = (weapon.attack_timer - delta_time).max(0.0);
            if !weapon.attack_requested || weapon.attack_timer > 0.0 {
                continue;
            }
            weapon.attack_requested = false;
            weapon.attack_timer = weapon.attack_cooldown;

            let weapon = *weapon;
            let projectile = spawn::spawn_projectile(frame, &weapon);
            log::debug!("entity {} fired projectile {}", id, projectile);
        }
    }
}
