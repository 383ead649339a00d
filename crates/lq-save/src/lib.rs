//! lq-save: Save/restore system for LifeQuest
//!
//! Owns the on-disk JSON schema and the load/save boundary. Loading also
//! applies time-based energy regeneration, exactly once, from the delta
//! between the persisted timestamp and now.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lq_core::player::{AttrId, Attribute, EnergyLedger, Player, SkillId, StatId};

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Save file corrupted: {0}")]
    Corrupted(String),

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,
}

/// Save file header for versioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    /// Player name
    pub player_name: String,
}

impl SaveHeader {
    const MAGIC: &'static str = "LQRS";

    fn new(player: &Player) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            player_name: player.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Persisted level/xp/threshold triple for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeState {
    pub level: u32,
    pub xp: u32,
    pub threshold: u32,
}

impl From<Attribute> for AttributeState {
    fn from(a: Attribute) -> Self {
        Self {
            level: a.level,
            xp: a.xp,
            threshold: a.threshold,
        }
    }
}

/// The snapshot record crossing the persistence boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    /// Stat name -> state
    pub stats: BTreeMap<String, AttributeState>,
    /// Skill name -> state
    pub skills: BTreeMap<String, AttributeState>,
    pub gold: u32,
    /// Item ids, one entry per owned unit
    pub inventory: Vec<String>,
    pub energy: u32,
    pub max_energy: u32,
    pub unlocked_achievements: Vec<String>,
    /// Quest id -> completed task ids within that quest
    pub active_quests: BTreeMap<String, Vec<String>>,
    pub completed_quests: Vec<String>,
    /// RFC 3339 timestamp of the save
    pub last_saved: String,
}

/// Complete save file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub player: PlayerSnapshot,
}

/// Capture a player into a snapshot stamped with the given time
pub fn snapshot(player: &Player, at: DateTime<Utc>) -> PlayerSnapshot {
    let mut inventory = Vec::new();
    for (item_id, count) in &player.inventory {
        for _ in 0..*count {
            inventory.push(item_id.clone());
        }
    }
    PlayerSnapshot {
        name: player.name.clone(),
        stats: StatId::ALL
            .iter()
            .map(|s| {
                (
                    s.name().to_string(),
                    AttributeState::from(*player.attribute(AttrId::Stat(*s))),
                )
            })
            .collect(),
        skills: SkillId::ALL
            .iter()
            .map(|s| {
                (
                    s.name().to_string(),
                    AttributeState::from(*player.attribute(AttrId::Skill(*s))),
                )
            })
            .collect(),
        gold: player.gold,
        inventory,
        energy: player.energy.current(),
        max_energy: player.energy.max(),
        unlocked_achievements: player.unlocked_achievements.iter().cloned().collect(),
        active_quests: player
            .active_quests
            .iter()
            .map(|(id, tasks)| (id.clone(), tasks.iter().cloned().collect()))
            .collect(),
        completed_quests: player.completed_quests.iter().cloned().collect(),
        last_saved: at.to_rfc3339(),
    }
}

/// Rebuild a player from a snapshot and regenerate energy for the time
/// elapsed since it was saved.
///
/// Returns the player and the energy credited. An unparseable or
/// future-dated timestamp regenerates nothing; unknown attribute names are
/// a corruption error, missing ones stay at their fresh defaults.
pub fn restore(snap: &PlayerSnapshot, now: DateTime<Utc>) -> Result<(Player, u32), SaveError> {
    let mut player = Player::new(snap.name.clone());

    for (name, state) in &snap.stats {
        let stat = StatId::from_name(name)
            .ok_or_else(|| SaveError::Corrupted(format!("unknown stat: {name}")))?;
        *player.attribute_mut(AttrId::Stat(stat)) = Attribute {
            level: state.level,
            xp: state.xp,
            threshold: state.threshold,
        };
    }
    for (name, state) in &snap.skills {
        let skill = SkillId::from_name(name)
            .ok_or_else(|| SaveError::Corrupted(format!("unknown skill: {name}")))?;
        *player.attribute_mut(AttrId::Skill(skill)) = Attribute {
            level: state.level,
            xp: state.xp,
            threshold: state.threshold,
        };
    }

    player.gold = snap.gold;
    for item_id in &snap.inventory {
        player.add_item(item_id);
    }
    player.energy = EnergyLedger::from_parts(snap.energy, snap.max_energy);
    player.unlocked_achievements = snap.unlocked_achievements.iter().cloned().collect();
    player.active_quests = snap
        .active_quests
        .iter()
        .map(|(id, tasks)| (id.clone(), tasks.iter().cloned().collect::<BTreeSet<_>>()))
        .collect();
    player.completed_quests = snap.completed_quests.iter().cloned().collect();

    let regenerated = match DateTime::parse_from_rfc3339(&snap.last_saved) {
        Ok(saved_at) => {
            let elapsed = (now - saved_at.with_timezone(&Utc)).num_seconds();
            player.energy.regenerate(elapsed)
        }
        Err(_) => 0,
    };
    Ok((player, regenerated))
}

/// Save a player to a file, stamped with the current time
pub fn save_game(player: &Player, path: impl AsRef<Path>) -> Result<(), SaveError> {
    save_game_at(player, path, Utc::now())
}

/// Save a player stamped with an explicit time
pub fn save_game_at(
    player: &Player,
    path: impl AsRef<Path>,
    at: DateTime<Utc>,
) -> Result<(), SaveError> {
    let save_file = SaveFile {
        header: SaveHeader::new(player),
        player: snapshot(player, at),
    };
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &save_file)?;
    Ok(())
}

/// Load a player from a file, regenerating energy up to now
pub fn load_game(path: impl AsRef<Path>) -> Result<(Player, u32), SaveError> {
    load_game_at(path, Utc::now())
}

/// Load a player, regenerating energy up to an explicit time
pub fn load_game_at(
    path: impl AsRef<Path>,
    now: DateTime<Utc>,
) -> Result<(Player, u32), SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save_file: SaveFile = serde_json::from_reader(reader)?;
    save_file.header.validate()?;
    restore(&save_file.player, now)
}

/// Check if a save file exists
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Delete a save file
pub fn delete_save(path: impl AsRef<Path>) -> Result<(), SaveError> {
    std::fs::remove_file(path)?;
    Ok(())
}

/// Get the default save path
pub fn default_save_path() -> std::path::PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("lifequest");
    std::fs::create_dir_all(&path).ok();
    path.push("save.json");
    path
}
