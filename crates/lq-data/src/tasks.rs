//! The task table: real-life activities and what they train

use lq_core::catalog::{GoldReward, TaskDef};
use lq_core::player::{AttrId, SkillId, StatId};

/// All task definitions
pub static TASKS: &[TaskDef] = &[
    TaskDef {
        id: "workout",
        name: "Workout Schedule",
        target: AttrId::Stat(StatId::Strength),
        xp_reward: 20,
        gold_reward: GoldReward::Fixed(5),
        energy_cost: 10,
        base_success_prob: 0.80,
    },
    TaskDef {
        id: "morning-run",
        name: "Morning Run",
        target: AttrId::Stat(StatId::Stamina),
        xp_reward: 15,
        gold_reward: GoldReward::Fixed(5),
        energy_cost: 10,
        base_success_prob: 0.85,
    },
    TaskDef {
        id: "cold-shower",
        name: "Cold Shower",
        target: AttrId::Stat(StatId::Endurance),
        xp_reward: 10,
        gold_reward: GoldReward::Fixed(2),
        energy_cost: 5,
        base_success_prob: 0.90,
    },
    TaskDef {
        id: "stretching",
        name: "Stretching Session",
        target: AttrId::Stat(StatId::Flexibility),
        xp_reward: 10,
        gold_reward: GoldReward::Fixed(2),
        energy_cost: 5,
        base_success_prob: 0.90,
    },
    TaskDef {
        id: "small-talk",
        name: "Small Talk with a Stranger",
        target: AttrId::Stat(StatId::Charisma),
        xp_reward: 12,
        gold_reward: GoldReward::Fixed(3),
        energy_cost: 5,
        base_success_prob: 0.75,
    },
    TaskDef {
        id: "meditation",
        name: "Meditation",
        target: AttrId::Stat(StatId::Mind),
        xp_reward: 15,
        gold_reward: GoldReward::Fixed(0),
        energy_cost: 5,
        base_success_prob: 0.95,
    },
    TaskDef {
        id: "look-maxing",
        name: "Look Maxing",
        target: AttrId::Stat(StatId::Looks),
        xp_reward: 10,
        gold_reward: GoldReward::Fixed(3),
        energy_cost: 5,
        base_success_prob: 0.85,
    },
    TaskDef {
        id: "combo-practice",
        name: "Combo Practice",
        target: AttrId::Skill(SkillId::Combat),
        xp_reward: 20,
        gold_reward: GoldReward::Fixed(5),
        energy_cost: 15,
        base_success_prob: 0.70,
    },
    TaskDef {
        id: "boxing-sparring",
        name: "Boxing Sparring",
        target: AttrId::Skill(SkillId::Combat),
        xp_reward: 30,
        gold_reward: GoldReward::Fixed(10),
        energy_cost: 20,
        base_success_prob: 0.55,
    },
    TaskDef {
        id: "app-dev",
        name: "App Development",
        target: AttrId::Skill(SkillId::Programming),
        xp_reward: 25,
        gold_reward: GoldReward::Range(5, 15),
        energy_cost: 15,
        base_success_prob: 0.65,
    },
];

/// Look up a task by id
pub fn get_task(id: &str) -> Option<&'static TaskDef> {
    TASKS.iter().find(|t| t.id == id)
}

/// Number of task definitions
pub fn num_tasks() -> usize {
    TASKS.len()
}
