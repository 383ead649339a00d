//! The achievement table: level floors and their one-time rewards

use lq_core::catalog::AchievementDef;
use lq_core::player::{AttrId, SkillId, StatId};

/// All achievements
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "iron-body",
        name: "Iron Body",
        attribute: AttrId::Stat(StatId::Strength),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "marathoner",
        name: "Marathoner",
        attribute: AttrId::Stat(StatId::Stamina),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "unbreakable",
        name: "Unbreakable",
        attribute: AttrId::Stat(StatId::Endurance),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "contortionist",
        name: "Contortionist",
        attribute: AttrId::Stat(StatId::Flexibility),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "silver-tongue",
        name: "Silver Tongue",
        attribute: AttrId::Stat(StatId::Charisma),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "clear-mind",
        name: "Clear Mind",
        attribute: AttrId::Stat(StatId::Mind),
        min_level: 3,
        gold_reward: 25,
    },
    AchievementDef {
        id: "head-turner",
        name: "Head Turner",
        attribute: AttrId::Stat(StatId::Looks),
        min_level: 5,
        gold_reward: 50,
    },
    AchievementDef {
        id: "street-fighter",
        name: "Street Fighter",
        attribute: AttrId::Skill(SkillId::Combat),
        min_level: 3,
        gold_reward: 25,
    },
    AchievementDef {
        id: "code-apprentice",
        name: "Code Apprentice",
        attribute: AttrId::Skill(SkillId::Programming),
        min_level: 3,
        gold_reward: 25,
    },
    AchievementDef {
        id: "code-master",
        name: "Code Master",
        attribute: AttrId::Skill(SkillId::Programming),
        min_level: 10,
        gold_reward: 200,
    },
];

/// Look up an achievement by id
pub fn get_achievement(id: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Number of achievements
pub fn num_achievements() -> usize {
    ACHIEVEMENTS.len()
}
