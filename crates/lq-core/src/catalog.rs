//! Static reference data: task, shop-item, achievement, and quest
//! definitions plus the lookup bundle handed to the engine at startup.
//!
//! Definitions are immutable and id-unique; the tables themselves live in
//! lq-data and are shared by reference for the life of the process.

use crate::player::AttrId;
use crate::rng::RngSource;

/// Gold paid out by a successful task.
///
/// Ranged rewards are drawn at resolution time, so two attempts of the same
/// task may pay differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldReward {
    Fixed(u32),
    /// Inclusive bounds
    Range(u32, u32),
}

impl GoldReward {
    /// Draw the concrete payout
    pub fn roll(&self, rng: &mut impl RngSource) -> u32 {
        match *self {
            GoldReward::Fixed(g) => g,
            GoldReward::Range(lo, hi) => rng.range(lo, hi),
        }
    }
}

/// A loggable real-life task
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Attribute trained by this task
    pub target: AttrId,
    pub xp_reward: u32,
    pub gold_reward: GoldReward,
    /// Debited on every attempt, success or not
    pub energy_cost: u32,
    /// Base success probability in (0, 1]
    pub base_success_prob: f64,
}

/// Effect applied when an item is used (never when it is bought)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    RestoreEnergy(u32),
    AddXp(AttrId, u32),
    /// Direct level increase, bypassing the xp curve
    PermanentBoost(AttrId, u32),
    AddGold(u32),
}

/// A shop item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub effect: ItemEffect,
}

/// A once-only reward unlocked when an attribute crosses a level floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub attribute: AttrId,
    pub min_level: u32,
    pub gold_reward: u32,
}

/// A named set of required task completions with a bundled reward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Set semantics: duplicates and order carry no meaning
    pub required_tasks: &'static [&'static str],
    pub gold_reward: u32,
    pub xp_rewards: &'static [(AttrId, u32)],
}

/// Lookup bundle over the four reference tables
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub tasks: &'static [TaskDef],
    pub items: &'static [ItemDef],
    pub achievements: &'static [AchievementDef],
    pub quests: &'static [QuestDef],
}

impl Catalog {
    pub fn task(&self, id: &str) -> Option<&'static TaskDef> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&'static ItemDef> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn quest(&self, id: &str) -> Option<&'static QuestDef> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn achievement(&self, id: &str) -> Option<&'static AchievementDef> {
        self.achievements.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRoll;

    #[test]
    fn test_gold_reward_roll() {
        let mut roll = FixedRoll(0.0);
        assert_eq!(GoldReward::Fixed(25).roll(&mut roll), 25);
        assert_eq!(GoldReward::Range(5, 15).roll(&mut roll), 5);
    }
}
