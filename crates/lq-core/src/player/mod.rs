//! The player aggregate and session orchestration

mod attribute;
mod energy;

pub use attribute::{AttrId, Attribute, SkillId, StatId};
pub use energy::EnergyLedger;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, QuestDef, TaskDef};
use crate::error::GameError;
use crate::rng::RngSource;
use crate::shop::{self, UseReport};
use crate::task::{self, TaskOutcome};
use crate::{achievement, quest};

/// Everything a task attempt changed, for reporting
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task: &'static TaskDef,
    pub outcome: TaskOutcome,
    /// Levels the target attribute gained from the awarded xp
    pub levels_gained: u32,
    /// Quests this attempt completed
    pub completed_quests: Vec<&'static str>,
    /// Achievements unlocked by any mutation this attempt caused
    pub unlocked_achievements: Vec<&'static str>,
}

/// The player: sole owner of all progression state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Set once at creation
    pub name: String,
    /// One entry per stat, indexed by `StatId`
    pub stats: [Attribute; StatId::COUNT],
    /// One entry per skill, indexed by `SkillId`
    pub skills: [Attribute; SkillId::COUNT],
    pub gold: u32,
    /// Multiset: item id -> owned count
    pub inventory: BTreeMap<String, u32>,
    pub energy: EnergyLedger,
    /// Monotonic: ids are added, never removed
    pub unlocked_achievements: BTreeSet<String>,
    /// Quest id -> tasks already completed within that quest
    pub active_quests: BTreeMap<String, BTreeSet<String>>,
    /// Disjoint from the active map's keys
    pub completed_quests: BTreeSet<String>,
}

impl Player {
    /// Fresh player: all attributes at level 1, full energy, empty pockets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: [Attribute::new(); StatId::COUNT],
            skills: [Attribute::new(); SkillId::COUNT],
            gold: 0,
            inventory: BTreeMap::new(),
            energy: EnergyLedger::default(),
            unlocked_achievements: BTreeSet::new(),
            active_quests: BTreeMap::new(),
            completed_quests: BTreeSet::new(),
        }
    }

    pub fn attribute(&self, id: AttrId) -> &Attribute {
        match id {
            AttrId::Stat(s) => &self.stats[s as usize],
            AttrId::Skill(s) => &self.skills[s as usize],
        }
    }

    pub fn attribute_mut(&mut self, id: AttrId) -> &mut Attribute {
        match id {
            AttrId::Stat(s) => &mut self.stats[s as usize],
            AttrId::Skill(s) => &mut self.skills[s as usize],
        }
    }

    /// Debit gold, failing without change if the purse is short
    pub fn spend_gold(&mut self, cost: u32) -> Result<(), GameError> {
        if self.gold < cost {
            return Err(GameError::InsufficientGold {
                needed: cost,
                have: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    /// How many units of an item the player owns
    pub fn item_count(&self, item_id: &str) -> u32 {
        self.inventory.get(item_id).copied().unwrap_or(0)
    }

    /// Add one unit of an item to the inventory
    pub fn add_item(&mut self, item_id: &str) {
        *self.inventory.entry(item_id.to_string()).or_insert(0) += 1;
    }

    /// Remove one unit of an item, failing if none is owned
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), GameError> {
        match self.inventory.get_mut(item_id) {
            Some(count) if *count > 1 => {
                *count -= 1;
                Ok(())
            }
            Some(_) => {
                self.inventory.remove(item_id);
                Ok(())
            }
            None => Err(GameError::ItemNotOwned(item_id.to_string())),
        }
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievements.contains(id)
    }

    /// Attempt a task: the core turn of the game.
    ///
    /// Order matters. Energy is checked and debited first so a short
    /// balance changes nothing; resolution then awards xp (and gold on
    /// success), a successful attempt advances quests, and achievements
    /// are re-evaluated once after all mutations.
    pub fn perform_task(
        &mut self,
        catalog: &Catalog,
        task_id: &str,
        rng: &mut impl RngSource,
    ) -> Result<TaskReport, GameError> {
        let task = catalog
            .task(task_id)
            .ok_or_else(|| GameError::UnknownTask(task_id.to_string()))?;
        self.energy.spend(task.energy_cost)?;

        let outcome = task::resolve(task, self.attribute(task.target).level, rng);
        let levels_gained = self.attribute_mut(task.target).add_xp(outcome.xp_awarded);
        self.gold += outcome.gold_awarded;

        let completed_quests = if outcome.success {
            quest::record_task_completion(self, catalog, task.id)
        } else {
            Vec::new()
        };
        let unlocked_achievements = achievement::evaluate(self, catalog.achievements);

        Ok(TaskReport {
            task,
            outcome,
            levels_gained,
            completed_quests,
            unlocked_achievements,
        })
    }

    /// Take on a quest. See [`quest::start`].
    pub fn start_quest(
        &mut self,
        catalog: &Catalog,
        quest_id: &str,
    ) -> Result<&'static QuestDef, GameError> {
        quest::start(self, catalog, quest_id)
    }

    /// Buy one unit of a shop item. See [`shop::buy`].
    pub fn buy_item(&mut self, catalog: &Catalog, item_id: &str) -> Result<u32, GameError> {
        shop::buy(self, catalog, item_id)
    }

    /// Use one owned item. See [`shop::use_item`].
    pub fn use_item(&mut self, catalog: &Catalog, item_id: &str) -> Result<UseReport, GameError> {
        shop::use_item(self, catalog, item_id)
    }
}
