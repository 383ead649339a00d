//! The shop-item table

use lq_core::catalog::{ItemDef, ItemEffect};
use lq_core::player::{AttrId, SkillId, StatId};

/// All shop items
pub static ITEMS: &[ItemDef] = &[
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
        effect: ItemEffect::AddXp(AttrId::Stat(StatId::Strength), 25),
    },
    ItemDef {
        id: "wisdom-scroll",
        name: "Scroll of Wisdom",
        price: 75,
        effect: ItemEffect::AddXp(AttrId::Stat(StatId::Mind), 50),
    },
    ItemDef {
        id: "code-kata-book",
        name: "Book of Code Katas",
        price: 90,
        effect: ItemEffect::AddXp(AttrId::Skill(SkillId::Programming), 60),
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

/// Look up an item by id
pub fn get_item(id: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.id == id)
}

/// Number of shop items
pub fn num_items() -> usize {
    ITEMS.len()
}
