//! Achievement unlocking
//!
//! Achievements unlock when an attribute meets a level floor. Unlocking is
//! monotonic and once-only: the engine never removes an id and never grants
//! the same reward twice, even if an attribute were ever to drop back below
//! its floor.

use crate::catalog::AchievementDef;
use crate::player::Player;

/// Scan the table and unlock everything newly earned.
///
/// Idempotent: a second call with no intervening mutation unlocks nothing
/// and credits no gold. Returns the newly unlocked ids. Run after every
/// attribute mutation that could cross a floor (task xp, item effects,
/// quest rewards).
pub fn evaluate(player: &mut Player, achievements: &'static [AchievementDef]) -> Vec<&'static str> {
    let mut newly = Vec::new();
    for def in achievements {
        if player.has_achievement(def.id) {
            continue;
        }
        if player.attribute(def.attribute).level >= def.min_level {
            player.unlocked_achievements.insert(def.id.to_string());
            player.gold += def.gold_reward;
            newly.push(def.id);
        }
    }
    newly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{AttrId, SkillId, StatId};

    static ACHIEVEMENTS: &[AchievementDef] = &[
        AchievementDef {
            id: "iron-body",
            name: "Iron Body",
            attribute: AttrId::Stat(StatId::Strength),
            min_level: 3,
            gold_reward: 50,
        },
        AchievementDef {
            id: "code-apprentice",
            name: "Code Apprentice",
            attribute: AttrId::Skill(SkillId::Programming),
            min_level: 2,
            gold_reward: 25,
        },
    ];

    #[test]
    fn test_unlocks_at_floor() {
        let mut player = Player::new("Alex");
        assert!(evaluate(&mut player, ACHIEVEMENTS).is_empty());

        player
            .attribute_mut(AttrId::Stat(StatId::Strength))
            .boost(2);
        let newly = evaluate(&mut player, ACHIEVEMENTS);
        assert_eq!(newly, vec!["iron-body"]);
        assert!(player.has_achievement("iron-body"));
        assert_eq!(player.gold, 50);
    }

    #[test]
    fn test_idempotent_no_double_gold() {
        let mut player = Player::new("Alex");
        player
            .attribute_mut(AttrId::Stat(StatId::Strength))
            .boost(5);
        assert_eq!(evaluate(&mut player, ACHIEVEMENTS).len(), 1);
        assert!(evaluate(&mut player, ACHIEVEMENTS).is_empty());
        assert_eq!(player.gold, 50);
    }

    #[test]
    fn test_multiple_unlocks_in_one_pass() {
        let mut player = Player::new("Alex");
        player
            .attribute_mut(AttrId::Stat(StatId::Strength))
            .boost(2);
        player
            .attribute_mut(AttrId::Skill(SkillId::Programming))
            .boost(1);
        let newly = evaluate(&mut player, ACHIEVEMENTS);
        assert_eq!(newly, vec!["iron-body", "code-apprentice"]);
        assert_eq!(player.gold, 75);
    }
}
