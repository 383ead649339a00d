//! The quest table: bundled task sets and their chained rewards

use lq_core::catalog::QuestDef;
use lq_core::player::{AttrId, SkillId, StatId};

/// All quests
pub static QUESTS: &[QuestDef] = &[
    QuestDef {
        id: "morning-routine",
        name: "The Morning Routine",
        required_tasks: &["morning-run", "stretching", "meditation"],
        gold_reward: 30,
        xp_rewards: &[
            (AttrId::Stat(StatId::Stamina), 10),
            (AttrId::Stat(StatId::Mind), 10),
        ],
    },
    QuestDef {
        id: "ship-an-app",
        name: "Ship an App",
        required_tasks: &["app-dev", "meditation"],
        gold_reward: 100,
        xp_rewards: &[(AttrId::Skill(SkillId::Programming), 40)],
    },
    QuestDef {
        id: "fight-camp",
        name: "Fight Camp",
        required_tasks: &["workout", "combo-practice", "boxing-sparring"],
        gold_reward: 80,
        xp_rewards: &[
            (AttrId::Skill(SkillId::Combat), 30),
            (AttrId::Stat(StatId::Strength), 15),
        ],
    },
    QuestDef {
        id: "glow-up",
        name: "The Glow-Up",
        required_tasks: &["look-maxing", "small-talk", "cold-shower"],
        gold_reward: 60,
        xp_rewards: &[
            (AttrId::Stat(StatId::Looks), 20),
            (AttrId::Stat(StatId::Charisma), 20),
        ],
    },
];

/// Look up a quest by id
pub fn get_quest(id: &str) -> Option<&'static QuestDef> {
    QUESTS.iter().find(|q| q.id == id)
}

/// Number of quests
pub fn num_quests() -> usize {
    QUESTS.len()
}
