//! LifeQuest: a personal-development tracker styled as an RPG
//!
//! Main entry point. Each subcommand loads the save, runs one core
//! operation, reports what happened, and saves again.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use lq_core::player::{AttrId, Player, SkillId, StatId};
use lq_core::shop::AppliedEffect;
use lq_core::task::effective_success_prob;
use lq_core::{GameRng, catalog::Catalog, player::TaskReport};
use lq_save::SaveError;

#[derive(Parser)]
#[command(name = "lifequest", about = "Level up your real life", version)]
struct Cli {
    /// Path to the save file (defaults to the platform data directory)
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,

    /// Fix the RNG seed for reproducible task rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game
    New { name: String },
    /// Show the character sheet
    Status,
    /// List available tasks with your current success chances
    Tasks,
    /// Log a completed real-life task
    Task { id: String },
    /// List the shop's wares
    Shop,
    /// Buy one unit of an item
    Buy { id: String },
    /// Use one owned item
    Use { id: String },
    /// List quests and their progress
    Quests,
    /// Take on a quest
    QuestStart { id: String },
    /// List achievements
    Achievements,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let path = cli
        .save_file
        .clone()
        .unwrap_or_else(lq_save::default_save_path);
    let catalog = lq_data::catalog();

    match cli.command {
        Command::New { name } => {
            if lq_save::save_exists(&path) {
                return Err(format!("a save already exists at {}", path.display()).into());
            }
            let player = Player::new(name);
            lq_save::save_game(&player, &path)?;
            println!("Welcome, {}! Your journey begins.", player.name);
        }
        Command::Status => {
            let player = load(&path)?;
            print_status(&player);
        }
        Command::Tasks => {
            let player = load(&path)?;
            println!("Available tasks:");
            for task in catalog.tasks {
                let level = player.attribute(task.target).level;
                println!(
                    "  {:<16} {} ({} {}) - {} xp, {} energy, {:.0}% success",
                    task.id,
                    task.name,
                    task.target.kind(),
                    task.target,
                    task.xp_reward,
                    task.energy_cost,
                    effective_success_prob(task, level) * 100.0,
                );
            }
        }
        Command::Task { id } => {
            let mut player = load(&path)?;
            let mut rng = match cli.seed {
                Some(seed) => GameRng::new(seed),
                None => GameRng::from_entropy(),
            };
            let report = player.perform_task(&catalog, &id, &mut rng)?;
            print_task_report(&player, &catalog, &report);
            lq_save::save_game(&player, &path)?;
        }
        Command::Shop => {
            let player = load(&path)?;
            println!("The shop (you carry {} gold):", player.gold);
            for item in catalog.items {
                println!("  {:<16} {} - {} gold", item.id, item.name, item.price);
            }
        }
        Command::Buy { id } => {
            let mut player = load(&path)?;
            let price = player.buy_item(&catalog, &id)?;
            println!("Bought {id} for {price} gold ({} left).", player.gold);
            lq_save::save_game(&player, &path)?;
        }
        Command::Use { id } => {
            let mut player = load(&path)?;
            let report = player.use_item(&catalog, &id)?;
            print_use_report(&player, &catalog, &report);
            lq_save::save_game(&player, &path)?;
        }
        Command::Quests => {
            let player = load(&path)?;
            println!("Quests:");
            for quest in catalog.quests {
                let status = if player.completed_quests.contains(quest.id) {
                    "done".to_string()
                } else if let Some(progress) = player.active_quests.get(quest.id) {
                    format!("{}/{}", progress.len(), quest.required_tasks.len())
                } else {
                    "not started".to_string()
                };
                println!(
                    "  {:<16} {} [{}] - needs {}, pays {} gold",
                    quest.id,
                    quest.name,
                    status,
                    quest.required_tasks.join(", "),
                    quest.gold_reward,
                );
            }
        }
        Command::QuestStart { id } => {
            let mut player = load(&path)?;
            let quest = player.start_quest(&catalog, &id)?;
            println!("Quest accepted: {}. Complete: {}.", quest.name, quest.required_tasks.join(", "));
            lq_save::save_game(&player, &path)?;
        }
        Command::Achievements => {
            let player = load(&path)?;
            println!("Achievements:");
            for def in catalog.achievements {
                let mark = if player.has_achievement(def.id) { "x" } else { " " };
                println!(
                    "  [{mark}] {} - {} level {} ({} gold)",
                    def.name, def.attribute, def.min_level, def.gold_reward,
                );
            }
        }
    }
    Ok(())
}

/// Load the save, reporting regenerated energy and a friendly hint when no
/// game exists yet.
fn load(path: &Path) -> Result<Player, Box<dyn Error>> {
    match lq_save::load_game(path) {
        Ok((player, regenerated)) => {
            if regenerated > 0 {
                println!("You feel rested: +{regenerated} energy while you were away.");
            }
            Ok(player)
        }
        Err(SaveError::NotFound) => {
            Err("no save found; start with `lifequest new <name>`".into())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_status(player: &Player) {
    println!("{}", player.name);
    println!(
        "  energy {}/{}  gold {}",
        player.energy.current(),
        player.energy.max(),
        player.gold,
    );
    println!("  stats:");
    for stat in StatId::ALL {
        let a = player.attribute(AttrId::Stat(stat));
        println!("    {:<12} level {:>3}  {}/{} xp", stat, a.level, a.xp, a.threshold);
    }
    println!("  skills:");
    for skill in SkillId::ALL {
        let a = player.attribute(AttrId::Skill(skill));
        println!("    {:<12} level {:>3}  {}/{} xp", skill, a.level, a.xp, a.threshold);
    }
    if !player.inventory.is_empty() {
        println!("  inventory:");
        for (item, count) in &player.inventory {
            println!("    {item} x{count}");
        }
    }
    if !player.active_quests.is_empty() {
        println!("  active quests: {}", player.active_quests.len());
    }
    println!(
        "  achievements: {}  quests completed: {}",
        player.unlocked_achievements.len(),
        player.completed_quests.len(),
    );
}

fn print_task_report(player: &Player, catalog: &Catalog, report: &TaskReport) {
    let target = report.task.target;
    if report.outcome.success {
        print!(
            "Success! {} +{} xp",
            target, report.outcome.xp_awarded
        );
        if report.outcome.gold_awarded > 0 {
            print!(", +{} gold", report.outcome.gold_awarded);
        }
        println!(".");
    } else {
        println!(
            "You failed {}. +{} xp for the effort.",
            report.task.name, report.outcome.xp_awarded,
        );
    }
    if report.levels_gained > 0 {
        println!(
            "Congratulations! {} reached level {}.",
            target,
            player.attribute(target).level,
        );
    }
    print_unlocks(catalog, &report.completed_quests, &report.unlocked_achievements);
    println!(
        "Energy: {}/{}",
        player.energy.current(),
        player.energy.max()
    );
}

fn print_use_report(player: &Player, catalog: &Catalog, report: &lq_core::shop::UseReport) {
    match report.effect {
        AppliedEffect::EnergyRestored(amount) => println!(
            "You drink the {}: +{} energy ({}/{}).",
            report.item.name,
            amount,
            player.energy.current(),
            player.energy.max(),
        ),
        AppliedEffect::XpGained { target, amount, levels_gained } => {
            println!("You use the {}: {} +{} xp.", report.item.name, target, amount);
            if levels_gained > 0 {
                println!(
                    "Congratulations! {} reached level {}.",
                    target,
                    player.attribute(target).level,
                );
            }
        }
        AppliedEffect::LevelsBoosted { target, amount } => println!(
            "You use the {}: {} permanently +{} level(s), now {}.",
            report.item.name,
            target,
            amount,
            player.attribute(target).level,
        ),
        AppliedEffect::GoldGained(amount) => println!(
            "You use the {}: +{} gold ({} total).",
            report.item.name, amount, player.gold,
        ),
    }
    print_unlocks(catalog, &[], &report.unlocked_achievements);
}

fn print_unlocks(catalog: &Catalog, quests: &[&'static str], achievements: &[&'static str]) {
    for id in quests {
        if let Some(quest) = catalog.quest(id) {
            println!("Quest complete: {} (+{} gold)!", quest.name, quest.gold_reward);
        }
    }
    for id in achievements {
        if let Some(def) = catalog.achievement(id) {
            println!(
                "Achievement unlocked: {} (+{} gold)!",
                def.name, def.gold_reward
            );
        }
    }
}
