//! lq-data: Static reference data for LifeQuest
//!
//! Contains the task, shop-item, achievement, and quest tables. Tables are
//! immutable, keyed by string id, and shared by reference for the life of
//! the process.

pub mod achievements;
pub mod items;
pub mod quests;
pub mod tasks;

pub use achievements::{ACHIEVEMENTS, get_achievement, num_achievements};
pub use items::{ITEMS, get_item, num_items};
pub use quests::{QUESTS, get_quest, num_quests};
pub use tasks::{TASKS, get_task, num_tasks};

use lq_core::catalog::Catalog;

/// The standard catalog over all four tables
pub fn catalog() -> Catalog {
    Catalog {
        tasks: TASKS,
        items: ITEMS,
        achievements: ACHIEVEMENTS,
        quests: QUESTS,
    }
}
