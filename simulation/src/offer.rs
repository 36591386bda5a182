use horde_core::{Inventory, UpgradeChoice, UpgradeId, UpgradeOffer, MAX_LEVEL};
use rand::{seq::SliceRandom, Rng};

/// Draws up to three upgrades that have not reached the evolved level yet.
pub(crate) fn draw<R: Rng>(inventory: &Inventory, rng: &mut R) -> UpgradeOffer {
    let mut eligible: Vec<UpgradeId> = UpgradeId::ALL
        .into_iter()
        .filter(|upgrade| inventory.level(*upgrade) < MAX_LEVEL)
        .collect();
    eligible.shuffle(rng);

    let choices = eligible
        .into_iter()
        .take(UpgradeOffer::MAX_CHOICES)
        .map(|upgrade| {
            let current_level = inventory.level(upgrade);
            UpgradeChoice {
                upgrade,
                rarity: upgrade.definition().rarity,
                current_level,
                evolves: current_level + 1 == MAX_LEVEL,
            }
        })
        .collect();
    UpgradeOffer::new(choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn maxed_upgrades_are_never_offered() {
        let mut inventory = Inventory::default();
        for upgrade in UpgradeId::ALL.into_iter().skip(2) {
            inventory = inventory.with_level(upgrade, MAX_LEVEL);
        }
        let inventory = inventory.with_level(UpgradeId::Multishot, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let offer = draw(&inventory, &mut rng);

        assert_eq!(offer.choices().len(), 2);
        assert!(offer.contains(UpgradeId::FireRate));
        let multishot = offer
            .choices()
            .iter()
            .find(|choice| choice.upgrade == UpgradeId::Multishot)
            .copied();
        assert_eq!(multishot.map(|choice| choice.evolves), Some(true));
        assert_eq!(multishot.map(|choice| choice.current_level), Some(4));
    }

    #[test]
    fn fresh_inventory_offers_three_distinct_upgrades() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let offer = draw(&Inventory::default(), &mut rng);
        let choices = offer.choices();
        assert_eq!(choices.len(), 3);
        assert_ne!(choices[0].upgrade, choices[1].upgrade);
        assert_ne!(choices[1].upgrade, choices[2].upgrade);
        assert!(choices.iter().all(|choice| !choice.evolves));
    }

    #[test]
    fn fully_evolved_inventory_yields_empty_offer() {
        let inventory = UpgradeId::ALL
            .into_iter()
            .fold(Inventory::default(), |inventory, upgrade| {
                inventory.with_level(upgrade, MAX_LEVEL)
            });
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(draw(&inventory, &mut rng).is_empty());
    }
}
