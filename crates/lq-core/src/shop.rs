//! Shop and inventory effects
//!
//! Buying and using are separate operations: a purchase only moves gold and
//! stock, and only using an item applies its effect.

use crate::achievement;
use crate::catalog::{Catalog, ItemDef, ItemEffect};
use crate::error::GameError;
use crate::player::{AttrId, Player};

/// The concrete effect one item use had
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedEffect {
    /// Energy actually gained after clamping to max
    EnergyRestored(u32),
    XpGained {
        target: AttrId,
        amount: u32,
        levels_gained: u32,
    },
    LevelsBoosted {
        target: AttrId,
        amount: u32,
    },
    GoldGained(u32),
}

/// Everything one item use changed, for reporting
#[derive(Debug, Clone)]
pub struct UseReport {
    pub item: &'static ItemDef,
    pub effect: AppliedEffect,
    pub unlocked_achievements: Vec<&'static str>,
}

/// Buy one unit of an item.
///
/// Debits the price and adds the unit to the inventory; the effect is not
/// applied. Returns the price paid.
pub fn buy(player: &mut Player, catalog: &Catalog, item_id: &str) -> Result<u32, GameError> {
    let def = catalog
        .item(item_id)
        .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    player.spend_gold(def.price)?;
    player.add_item(def.id);
    Ok(def.price)
}

/// Use one owned unit of an item.
///
/// Removes exactly one unit, applies exactly one effect, then re-evaluates
/// achievements once (xp and boost effects can cross level floors).
pub fn use_item(
    player: &mut Player,
    catalog: &Catalog,
    item_id: &str,
) -> Result<UseReport, GameError> {
    let def = catalog
        .item(item_id)
        .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    player.remove_item(def.id)?;

    let effect = match def.effect {
        ItemEffect::RestoreEnergy(amount) => {
            AppliedEffect::EnergyRestored(player.energy.credit(amount))
        }
        ItemEffect::AddXp(target, amount) => AppliedEffect::XpGained {
            target,
            amount,
            levels_gained: player.attribute_mut(target).add_xp(amount),
        },
        ItemEffect::PermanentBoost(target, amount) => {
            player.attribute_mut(target).boost(amount);
            AppliedEffect::LevelsBoosted { target, amount }
        }
        ItemEffect::AddGold(amount) => {
            player.gold += amount;
            AppliedEffect::GoldGained(amount)
        }
    };
    let unlocked_achievements = achievement::evaluate(player, catalog.achievements);

    Ok(UseReport {
        item: def,
        effect,
        unlocked_achievements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AchievementDef;
    use crate::player::StatId;

    static ITEMS: &[ItemDef] = &[
        ItemDef {
            id: "energy-potion",
            name: "Energy Potion",
            price: 50,
            effect: ItemEffect::RestoreEnergy(50),
        },
        ItemDef {
            id: "protein-shake",
            name: "Protein Shake",
            price: 30,
            effect: ItemEffect::AddXp(AttrId::Stat(StatId::Strength), 120),
        },
        ItemDef {
            id: "golden-amulet",
            name: "Golden Amulet",
            price: 200,
            effect: ItemEffect::PermanentBoost(AttrId::Stat(StatId::Charisma), 1),
        },
        ItemDef {
            id: "treasure-map",
            name: "Treasure Map",
            price: 100,
            effect: ItemEffect::AddGold(150),
        },
    ];

    static ACHIEVEMENTS: &[AchievementDef] = &[AchievementDef {
        id: "iron-body",
        name: "Iron Body",
        attribute: AttrId::Stat(StatId::Strength),
        min_level: 2,
        gold_reward: 50,
    }];

    fn test_catalog() -> Catalog {
        Catalog {
            tasks: &[],
            items: ITEMS,
            achievements: ACHIEVEMENTS,
            quests: &[],
        }
    }

    #[test]
    fn test_buy_debits_gold_without_applying() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.gold = 50;
        player.energy.spend(60).unwrap();
        buy(&mut player, &catalog, "energy-potion").unwrap();
        assert_eq!(player.gold, 0);
        assert_eq!(player.item_count("energy-potion"), 1);
        // Purchase never restores energy.
        assert_eq!(player.energy.current(), 40);
    }

    #[test]
    fn test_buy_requires_gold() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.gold = 49;
        assert_eq!(
            buy(&mut player, &catalog, "energy-potion").unwrap_err(),
            GameError::InsufficientGold { needed: 50, have: 49 }
        );
        assert_eq!(player.item_count("energy-potion"), 0);
    }

    #[test]
    fn test_use_restores_energy_clamped() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.add_item("energy-potion");
        player.energy.spend(20).unwrap();
        let report = use_item(&mut player, &catalog, "energy-potion").unwrap();
        assert_eq!(report.effect, AppliedEffect::EnergyRestored(20));
        assert_eq!(player.energy.current(), 100);
        assert_eq!(player.item_count("energy-potion"), 0);
    }

    #[test]
    fn test_use_unowned_item() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        assert_eq!(
            use_item(&mut player, &catalog, "energy-potion").unwrap_err(),
            GameError::ItemNotOwned("energy-potion".into())
        );
        assert_eq!(
            use_item(&mut player, &catalog, "nonsense").unwrap_err(),
            GameError::UnknownItem("nonsense".into())
        );
    }

    #[test]
    fn test_xp_item_can_unlock_achievement() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.add_item("protein-shake");
        let report = use_item(&mut player, &catalog, "protein-shake").unwrap();
        assert_eq!(
            report.effect,
            AppliedEffect::XpGained {
                target: AttrId::Stat(StatId::Strength),
                amount: 120,
                levels_gained: 1,
            }
        );
        assert_eq!(report.unlocked_achievements, vec!["iron-body"]);
        assert_eq!(player.gold, 50);
    }

    #[test]
    fn test_permanent_boost_bypasses_curve() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.add_item("golden-amulet");
        use_item(&mut player, &catalog, "golden-amulet").unwrap();
        let charisma = player.attribute(AttrId::Stat(StatId::Charisma));
        assert_eq!(charisma.level, 2);
        assert_eq!(charisma.xp, 0);
        assert_eq!(charisma.threshold, 100);
    }

    #[test]
    fn test_gold_item() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.add_item("treasure-map");
        use_item(&mut player, &catalog, "treasure-map").unwrap();
        assert_eq!(player.gold, 150);
    }

    #[test]
    fn test_use_consumes_one_unit_of_many() {
        let mut player = Player::new("Alex");
        let catalog = test_catalog();
        player.add_item("treasure-map");
        player.add_item("treasure-map");
        use_item(&mut player, &catalog, "treasure-map").unwrap();
        assert_eq!(player.item_count("treasure-map"), 1);
    }
}
