//! Task resolution: one probability roll deciding success, xp, and gold

use crate::catalog::TaskDef;
use crate::consts::{LEVEL_PROB_BONUS, PROB_CAP};
use crate::rng::RngSource;

/// Result of resolving one task attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOutcome {
    pub success: bool,
    pub xp_awarded: u32,
    pub gold_awarded: u32,
}

/// Success chance for a task at the given attribute level.
///
/// Each level adds 5%, the base rate is never reduced, and no task can
/// exceed 95% regardless of level.
pub fn effective_success_prob(task: &TaskDef, attribute_level: u32) -> f64 {
    (task.base_success_prob + LEVEL_PROB_BONUS * attribute_level as f64).min(PROB_CAP)
}

/// Resolve one attempt with a single uniform draw.
///
/// Success pays full xp and gold (ranged gold drawn now); failure pays half
/// xp, floored, and no gold. Energy is the caller's concern: it is debited
/// before resolution, in both outcomes.
pub fn resolve(task: &TaskDef, attribute_level: u32, rng: &mut impl RngSource) -> TaskOutcome {
    let success = rng.uniform() < effective_success_prob(task, attribute_level);
    if success {
        TaskOutcome {
            success: true,
            xp_awarded: task.xp_reward,
            gold_awarded: task.gold_reward.roll(rng),
        }
    } else {
        TaskOutcome {
            success: false,
            xp_awarded: task.xp_reward / 2,
            gold_awarded: 0,
        }
    }
}
