//! Scouting desk CLI
//!
//! Loads a scouted player (JSON file or deterministic sample) and prints
//! formation rankings, per-slot fit reports and role compatibility
//! tables from the built-in catalogs.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scout_core::{
    best_formation, formation_fit, formation_overall_fit, rank_formations, role_compatibility,
    stars_for_fit, FormationCatalog, Position, PositionTier, RoleCatalog, ScoutedPlayer,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout_cli")]
#[command(about = "Formation fit and role compatibility reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the player record comes from: a JSON file, or a generated
/// sample when no file is given.
#[derive(Args)]
struct PlayerSource {
    /// Player JSON file
    #[arg(long)]
    player: Option<PathBuf>,

    /// Seed for a generated sample player (used when --player is absent)
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Primary position of the generated sample player
    #[arg(long, default_value = "CM")]
    position: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every catalog formation for a player
    Rank {
        #[command(flatten)]
        source: PlayerSource,
    },

    /// Per-slot fit report for one formation
    Fit {
        #[command(flatten)]
        source: PlayerSource,

        /// Formation id, e.g. "4-3-3"
        #[arg(long)]
        formation: String,
    },

    /// Role compatibility table for a formation slot
    Roles {
        #[command(flatten)]
        source: PlayerSource,

        /// Slot code, e.g. "CDM"
        #[arg(long)]
        slot: String,
    },

    /// Write a generated sample player to a JSON file
    Sample {
        /// Seed for the generator
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Primary position
        #[arg(long, default_value = "CM")]
        position: String,

        /// Output JSON file path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { source } => {
            let player = load_player(&source)?;
            print_ranking(&player);
        }
        Commands::Fit { source, formation } => {
            let player = load_player(&source)?;
            print_fit_report(&player, &formation)?;
        }
        Commands::Roles { source, slot } => {
            let player = load_player(&source)?;
            let slot: Position = slot
                .parse()
                .with_context(|| format!("unknown slot code: {}", slot))?;
            print_roles(&player, slot);
        }
        Commands::Sample { seed, position, out } => {
            let position: Position = position
                .parse()
                .with_context(|| format!("unknown position code: {}", position))?;
            let player = ScoutedPlayer::generate("Sample Player", position, seed);
            fs::write(&out, player.to_json_string()?)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote sample player to {}", out.display());
        }
    }

    Ok(())
}

fn load_player(source: &PlayerSource) -> Result<ScoutedPlayer> {
    match &source.player {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let player = ScoutedPlayer::from_json_str(&json)
                .with_context(|| format!("parsing {}", path.display()))?;
            player.validate().context("player record failed validation")?;
            Ok(player)
        }
        None => {
            let position: Position = source
                .position
                .parse()
                .with_context(|| format!("unknown position code: {}", source.position))?;
            Ok(ScoutedPlayer::generate("Sample Player", position, source.seed))
        }
    }
}

fn print_ranking(player: &ScoutedPlayer) {
    let catalog = FormationCatalog::builtin();
    println!("Formation fit for {}", player.name);
    println!("{:<10} {:>5}  {}", "formation", "fit", "stars");

    for score in rank_formations(&player.positions_data, catalog) {
        println!(
            "{:<10} {:>4}%  {}",
            score.formation_id,
            score.percent,
            star_bar(score.stars)
        );
    }

    if let Some((formation, percent)) = best_formation(&player.positions_data, catalog) {
        println!("\nBest formation: {} ({}%)", formation.id, percent);
    }
}

fn print_fit_report(player: &ScoutedPlayer, formation_id: &str) -> Result<()> {
    let catalog = FormationCatalog::builtin();
    let formation = catalog.require(formation_id)?;

    let percent = formation_overall_fit(&player.positions_data, formation);
    println!("{} in {}: {}% ({})", player.name, formation.name, percent, star_bar(stars_for_fit(percent)));
    println!("{:<12} {:>6}  {}", "slot", "rating", "tier");

    for slot in formation_fit(&player.positions_data, formation) {
        let rating = if slot.tier == PositionTier::Unsuited {
            "-".to_string()
        } else {
            format!("{}/10", slot.rating)
        };
        println!("{:<12} {:>6}  {}", slot.position.code(), rating, slot.tier.display_name());
    }

    Ok(())
}

fn print_roles(player: &ScoutedPlayer, slot: Position) {
    let catalog = RoleCatalog::builtin();
    let roles = catalog.roles_for_position(slot);

    if roles.is_empty() {
        println!("No roles defined for {}", slot);
        return;
    }

    println!("Roles for {} (as {})", slot, slot.generalize());
    for role in roles {
        let percent = role_compatibility(&player.attributes, role);
        println!("{:>4}%  {} - {}", percent, role.name, role.description);
    }
}

fn star_bar(stars: f32) -> String {
    let halves = (stars * 2.0).round() as usize;
    let mut bar = "*".repeat(halves / 2);
    if halves % 2 == 1 {
        bar.push('+');
    }
    format!("{} ({:.1})", bar, stars)
}
