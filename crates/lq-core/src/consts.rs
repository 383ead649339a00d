//! Tuning constants for the progression rules

/// Xp threshold factor: advancing out of `level` costs `100 * level` xp.
pub const XP_PER_LEVEL: u32 = 100;

/// Default maximum energy for a new player.
pub const MAX_ENERGY: u32 = 100;

/// Energy regenerated per real-world hour away from the game.
pub const ENERGY_PER_HOUR: i64 = 10;

/// Success probability bonus per level of the targeted attribute.
pub const LEVEL_PROB_BONUS: f64 = 0.05;

/// No task ever succeeds with more than this probability.
pub const PROB_CAP: f64 = 0.95;
