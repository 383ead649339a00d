//! Stats, skills, and the shared level/xp progression curve

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::XP_PER_LEVEL;

/// Stat identity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum StatId {
    Strength = 0,
    Stamina = 1,
    Endurance = 2,
    Flexibility = 3,
    Charisma = 4,
    Mind = 5,
    Looks = 6,
}

impl StatId {
    /// Number of stats
    pub const COUNT: usize = 7;

    /// All stats in order
    pub const ALL: [StatId; Self::COUNT] = [
        StatId::Strength,
        StatId::Stamina,
        StatId::Endurance,
        StatId::Flexibility,
        StatId::Charisma,
        StatId::Mind,
        StatId::Looks,
    ];

    /// Stable lowercase name, used as the persistence key
    pub const fn name(&self) -> &'static str {
        match self {
            StatId::Strength => "strength",
            StatId::Stamina => "stamina",
            StatId::Endurance => "endurance",
            StatId::Flexibility => "flexibility",
            StatId::Charisma => "charisma",
            StatId::Mind => "mind",
            StatId::Looks => "looks",
        }
    }

    /// Parse a persistence key back into a stat
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Skill identity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SkillId {
    Combat = 0,
    Programming = 1,
}

impl SkillId {
    /// Number of skills
    pub const COUNT: usize = 2;

    /// All skills in order
    pub const ALL: [SkillId; Self::COUNT] = [SkillId::Combat, SkillId::Programming];

    /// Stable lowercase name, used as the persistence key
    pub const fn name(&self) -> &'static str {
        match self {
            SkillId::Combat => "combat",
            SkillId::Programming => "programming",
        }
    }

    /// Parse a persistence key back into a skill
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Tagged attribute identity
///
/// Stats and skills are disjoint namespaces with the same progression shape.
/// The tag is fixed at catalog-definition time, so no lookup ever has to
/// probe both namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttrId {
    Stat(StatId),
    Skill(SkillId),
}

impl AttrId {
    /// Stable lowercase name of the underlying stat or skill
    pub const fn name(&self) -> &'static str {
        match self {
            AttrId::Stat(s) => s.name(),
            AttrId::Skill(s) => s.name(),
        }
    }

    /// "stat" or "skill"
    pub const fn kind(&self) -> &'static str {
        match self {
            AttrId::Stat(_) => "stat",
            AttrId::Skill(_) => "skill",
        }
    }
}

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrId::Stat(s) => write!(f, "{s}"),
            AttrId::Skill(s) => write!(f, "{s}"),
        }
    }
}

/// One stat or skill instance: level, xp into the level, and the xp
/// threshold for the next level.
///
/// Invariant after [`Attribute::add_xp`]: `xp < threshold` and
/// `threshold == 100 * level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub level: u32,
    pub xp: u32,
    pub threshold: u32,
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new()
    }
}

impl Attribute {
    /// Fresh attribute: level 1, no xp, 100 xp to level 2
    pub const fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            threshold: XP_PER_LEVEL,
        }
    }

    /// Add xp, cascading through as many level-ups as the total covers.
    ///
    /// The threshold grows with the level, so overflow is consumed one
    /// level at a time rather than by a single division. Returns the number
    /// of levels gained; `amount = 0` is a legal no-op probe.
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        let mut total = self.xp + amount;
        let mut gained = 0;
        while total >= self.threshold {
            total -= self.threshold;
            self.level += 1;
            self.threshold = XP_PER_LEVEL * self.level;
            gained += 1;
        }
        self.xp = total;
        gained
    }

    /// Raise the level directly, bypassing the xp curve.
    ///
    /// Used by permanent-boost items. Current xp and threshold are left
    /// untouched; the threshold catches up on the next earned level-up.
    pub fn boost(&mut self, levels: u32) {
        self.level += levels;
    }
}
