#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player progression: regeneration, experience pickup, contact damage and defeat.

use horde_core::{palette, resolver, Burst, Cooldown, Cue, Event, XP_GROWTH_FACTOR};
use horde_world::{Player, WorldParts};
use tracing::debug;

const PICKUP_MARGIN: f32 = 10.0;
const CONTACT_LENIENCY: f32 = 5.0;
const CONTACT_DAMAGE: f32 = 1.0;
const CONTACT_PUSH: f32 = 2.0;
const HIT_FLASH_EVERY: u64 = 10;

/// Progression system owning the regeneration timer.
#[derive(Debug, Default)]
pub struct Progression {
    regen: Cooldown,
}

impl Progression {
    /// Creates a new progression system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Heals the player on the regeneration cadence of the current inventory.
    ///
    /// The timer restarts whenever `events` announce a new run.
    pub fn regenerate(&mut self, events: &[Event], parts: &mut WorldParts<'_>) {
        if events
            .iter()
            .any(|event| matches!(event, Event::RunStarted { .. }))
        {
            self.regen.reset();
        }

        let Some(regen) = resolver::regen(parts.run.inventory()) else {
            return;
        };
        if !self.regen.try_trigger(parts.run.now(), regen.interval) {
            return;
        }
        let player = &mut parts.store.player;
        if player.hp < player.max_hp {
            player.hp = (player.hp + regen.amount).min(player.max_hp);
        }
    }

    /// Collects experience orbs touching the player and applies level-ups.
    pub fn collect_experience(&mut self, parts: &mut WorldParts<'_>, out: &mut Vec<Event>) {
        let store = &mut *parts.store;
        let player = &mut store.player;
        let reach = player.radius + PICKUP_MARGIN;
        let centre = player.position;

        let mut gained = Vec::new();
        store.xp_orbs.retain(|orb| {
            if orb.position.distance(centre) < reach {
                gained.push(orb.value);
                false
            } else {
                true
            }
        });

        for value in gained {
            out.push(Event::XpCollected { amount: value });
            out.push(Event::Cue { cue: Cue::XpPickup });
            for level in gain_experience(player, value) {
                debug!(level, "level up");
                out.push(Event::LevelUp { level });
                out.push(Event::Cue { cue: Cue::LevelUp });
            }
        }
    }

    /// Damages and pushes the player for every zombie touching it.
    pub fn contact_damage(&mut self, parts: &mut WorldParts<'_>, out: &mut Vec<Event>) {
        let store = &mut *parts.store;
        let flash = parts.run.frame() % HIT_FLASH_EVERY == 0;
        let player = &mut store.player;
        let mut flashes = Vec::new();
        let mut touching = 0_u32;

        for zombie in &store.zombies {
            let reach = zombie.radius + player.radius - CONTACT_LENIENCY;
            if zombie.position.distance(player.position) >= reach {
                continue;
            }
            touching += 1;
            player.hp -= CONTACT_DAMAGE;
            if flash {
                flashes.push(player.position);
            }
            let away = (player.position - zombie.position).normalize_or_zero();
            player.position += away * CONTACT_PUSH;
        }

        if touching == 0 {
            return;
        }
        player.position = parts.bounds.clamp_inset(player.position, player.radius);
        out.push(Event::PlayerDamaged {
            amount: CONTACT_DAMAGE * touching as f32,
            hp: player.hp,
        });
        for origin in flashes {
            store.burst(
                &mut *parts.rng,
                Burst::new(origin, palette::PLAYER_HIT, 1, 1.0),
            );
        }
    }
}

/// Adds experience to the player and returns every level reached.
pub fn gain_experience(player: &mut Player, amount: u32) -> Vec<u32> {
    player.xp = player.xp.saturating_add(amount);
    let mut reached = Vec::new();
    while player.xp >= player.next_level_xp {
        player.level += 1;
        player.xp -= player.next_level_xp;
        player.next_level_xp = grow_threshold(player.next_level_xp);
        reached.push(player.level);
    }
    reached
}

fn grow_threshold(threshold: u32) -> u32 {
    let grown = (f64::from(threshold) * XP_GROWTH_FACTOR).floor() as u32;
    grown.max(threshold.saturating_add(1))
}

/// Reports whether the player has run out of hit points.
#[must_use]
pub fn is_defeated(player: &Player) -> bool {
    player.hp <= 0.0
}
