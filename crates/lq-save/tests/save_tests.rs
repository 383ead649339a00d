//! Round-trip and regeneration tests for the save boundary

use chrono::{Duration, Utc};
use lq_core::player::{AttrId, Player, SkillId, StatId};
use lq_save::{
    SaveError, default_save_path, load_game_at, restore, save_exists, save_game_at, snapshot,
};

fn sample_player() -> Player {
    let mut player = Player::new("Alex");
    player.attribute_mut(AttrId::Stat(StatId::Strength)).add_xp(250);
    player.attribute_mut(AttrId::Skill(SkillId::Programming)).add_xp(80);
    player.gold = 120;
    player.add_item("energy-potion");
    player.add_item("energy-potion");
    player.add_item("treasure-map");
    player.energy.spend(35).unwrap();
    player.unlocked_achievements.insert("clear-mind".to_string());
    player
        .active_quests
        .insert("fight-camp".to_string(), ["workout".to_string()].into());
    player.completed_quests.insert("morning-routine".to_string());
    player
}

#[test]
fn test_snapshot_restore_round_trip() {
    let player = sample_player();
    let at = Utc::now();
    let snap = snapshot(&player, at);
    // Loading at the same instant regenerates nothing.
    let (restored, regenerated) = restore(&snap, at).unwrap();
    assert_eq!(regenerated, 0);
    assert_eq!(restored, player);
}

#[test]
fn test_file_round_trip_with_regeneration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let player = sample_player();
    let saved_at = Utc::now();
    save_game_at(&player, &path, saved_at).unwrap();
    assert!(save_exists(&path));

    // Two hours later: 20 energy regenerated, everything else identical.
    let (restored, regenerated) = load_game_at(&path, saved_at + Duration::hours(2)).unwrap();
    assert_eq!(regenerated, 20);
    assert_eq!(restored.energy.current(), player.energy.current() + 20);
    let mut expected = player.clone();
    expected.energy.credit(20);
    assert_eq!(restored, expected);
}

#[test]
fn test_clock_moving_backwards_regenerates_nothing() {
    let player = sample_player();
    let saved_at = Utc::now();
    let snap = snapshot(&player, saved_at);
    let (restored, regenerated) = restore(&snap, saved_at - Duration::hours(5)).unwrap();
    assert_eq!(regenerated, 0);
    assert_eq!(restored.energy.current(), player.energy.current());
}

#[test]
fn test_garbled_timestamp_regenerates_nothing() {
    let player = sample_player();
    let mut snap = snapshot(&player, Utc::now());
    snap.last_saved = "yesterday-ish".to_string();
    let (_, regenerated) = restore(&snap, Utc::now()).unwrap();
    assert_eq!(regenerated, 0);
}

#[test]
fn test_unknown_stat_is_corruption() {
    let player = sample_player();
    let mut snap = snapshot(&player, Utc::now());
    let state = snap.stats["strength"];
    snap.stats.insert("luck".to_string(), state);
    assert!(matches!(
        restore(&snap, Utc::now()),
        Err(SaveError::Corrupted(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(
        load_game_at(&path, Utc::now()),
        Err(SaveError::NotFound)
    ));
}

#[test]
fn test_inventory_multiset_survives() {
    let player = sample_player();
    let snap = snapshot(&player, Utc::now());
    assert_eq!(
        snap.inventory.iter().filter(|i| *i == "energy-potion").count(),
        2
    );
    let (restored, _) = restore(&snap, Utc::now()).unwrap();
    assert_eq!(restored.item_count("energy-potion"), 2);
    assert_eq!(restored.item_count("treasure-map"), 1);
}

#[test]
fn test_default_save_path_is_stable() {
    assert_eq!(default_save_path(), default_save_path());
}
