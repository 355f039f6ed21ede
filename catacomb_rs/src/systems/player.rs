use catacomb_ecs::component::{Position, Weapon};
use catacomb_ecs::{ComponentKind, DeltaTime, Frame, Membership, Signature, System};

/// Translates player input into state of the player's weapon.
#[derive(Debug, Default)]
pub struct PlayerSystem {
    attack: bool,
}

impl PlayerSystem {
    /// Requests an attack on the next update.
    pub fn request_attack(&mut self) {
        self.attack = true;
    }
}

impl System for PlayerSystem {
    fn name(&self) -> &'static str {
        "player"
    }

    fn signature(&self) -> Signature {
        Signature::from([
            ComponentKind::Position,
            ComponentKind::Movement,
            ComponentKind::Weapon,
        ])
    }

    fn update(&mut self, members: &Membership, frame: &mut Frame<'_>, _: DeltaTime) {
        let attack = std::mem::take(&mut self.attack);
        for &id in members {
            if !frame.is_active(id) {
                continue;
            }
            let Some(position) = frame.get::<Position>(id).map(|position| position.position) else {
                continue;
            };
            if let Some(weapon) = frame.get_mut::<Weapon>(id) {
                weapon.position = position;
                weapon.attack_requested |= attack;
            }
        }
    }
}
