//! Quest tracking
//!
//! A quest is a set of required task ids. It must be started explicitly;
//! from then on every successful completion of a required task is unioned
//! into the quest's progress set. When the progress set covers the required
//! set the quest completes atomically: gold and xp rewards are granted and
//! the quest moves from the active map to the completed set.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, QuestDef};
use crate::error::GameError;
use crate::player::Player;

/// Take on a quest.
///
/// Fails if the id is unknown, already in progress, or already done.
pub fn start(
    player: &mut Player,
    catalog: &Catalog,
    quest_id: &str,
) -> Result<&'static QuestDef, GameError> {
    let def = catalog
        .quest(quest_id)
        .ok_or_else(|| GameError::UnknownQuest(quest_id.to_string()))?;
    if player.active_quests.contains_key(def.id) || player.completed_quests.contains(def.id) {
        return Err(GameError::AlreadyActiveOrCompleted(def.id.to_string()));
    }
    player
        .active_quests
        .insert(def.id.to_string(), BTreeSet::new());
    Ok(def)
}

/// Record a successful task against every active quest that requires it.
///
/// Repeating a task contributes nothing extra; one task may advance several
/// quests at once. Returns the ids of quests completed by this task.
pub fn record_task_completion(
    player: &mut Player,
    catalog: &Catalog,
    task_id: &str,
) -> Vec<&'static str> {
    let mut completed = Vec::new();
    for def in catalog.quests {
        let Some(progress) = player.active_quests.get_mut(def.id) else {
            continue;
        };
        if !def.required_tasks.contains(&task_id) {
            continue;
        }
        progress.insert(task_id.to_string());
        if def
            .required_tasks
            .iter()
            .all(|required| progress.contains(*required))
        {
            complete(player, def);
            completed.push(def.id);
        }
    }
    completed
}

/// Grant a finished quest's rewards and retire it from the active map.
fn complete(player: &mut Player, def: &QuestDef) {
    player.gold += def.gold_reward;
    for &(attr, xp) in def.xp_rewards {
        player.attribute_mut(attr).add_xp(xp);
    }
    player.active_quests.remove(def.id);
    player.completed_quests.insert(def.id.to_string());
}
