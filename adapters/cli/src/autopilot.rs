//! Scripted controls that stand in for a human player.

use horde_core::{Aim, FrameInput, Rarity, UpgradeChoice, UpgradeOffer, Vec2};
use horde_world::{query, World};

const THREAT_RADIUS: f32 = 250.0;
const AIM_RANGE: f32 = 900.0;

/// Steers away from nearby zombies and shoots at the closest one.
pub(crate) fn input(world: &World) -> FrameInput {
    let player = query::player(world).position;

    let flee = query::zombies(world)
        .iter()
        .filter(|zombie| zombie.position.distance(player) < THREAT_RADIUS)
        .fold(Vec2::ZERO, |acc, zombie| {
            let away = player - zombie.position;
            acc + away.normalize_or_zero() / away.length().max(1.0)
        });
    let centre = query::bounds(world).size * 0.5;
    let homeward = (centre - player).normalize_or_zero() * 0.002;

    let aim = query::nearest_zombie(world, player, AIM_RANGE)
        .map_or(Aim::Stick(Vec2::X), |zombie| Aim::Pointer(zombie.position));
    FrameInput {
        keyboard: (flee + homeward).normalize_or_zero(),
        joystick: Vec2::ZERO,
        aim,
        fire: true,
    }
}

/// Picks the choice that evolves an upgrade, otherwise the rarest one.
pub(crate) fn pick(offer: &UpgradeOffer) -> Option<&UpgradeChoice> {
    offer
        .choices()
        .iter()
        .max_by_key(|choice| (choice.evolves, rank(choice.rarity), choice.current_level))
}

fn rank(rarity: Rarity) -> u8 {
    match rarity {
        Rarity::Common => 0,
        Rarity::Rare => 1,
        Rarity::Legendary => 2,
    }
}
