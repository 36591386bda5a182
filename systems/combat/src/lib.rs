#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision and damage resolution between projectiles and zombies.
//!
//! Every frame the resolver checks all projectile and zombie pairs, applies
//! direct hits, piercing, knockback and area detonations, then removes dead
//! zombies exactly once and grants their rewards.

use horde_core::{Burst, Event};
use horde_world::{WorldParts, Zombie};

mod collision;
mod deaths;

/// Combat system that resolves contacts and deaths for one frame.
#[derive(Debug, Default)]
pub struct Combat {
    bursts: Vec<Burst>,
    fallen: Vec<Zombie>,
}

impl Combat {
    /// Creates a new combat system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves projectile contacts, removes dead zombies and grants their rewards.
    pub fn resolve(&mut self, parts: &mut WorldParts<'_>, out: &mut Vec<Event>) {
        self.bursts.clear();

        collision::resolve_contacts(parts.store, &mut self.bursts, out);
        parts.store.bullets.retain(|bullet| !bullet.spent);

        deaths::reap(&mut parts.store.zombies, &mut self.fallen);
        for zombie in &self.fallen {
            deaths::reward(zombie, parts, &mut self.bursts, out);
        }

        for burst in self.bursts.drain(..) {
            parts.store.burst(&mut *parts.rng, burst);
        }
    }
}
