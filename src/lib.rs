pub mod ai;
pub mod config;
pub mod error;
pub mod matrix;
pub mod presets;
pub mod service;
pub mod store;
pub mod view;

pub use crate::config::EngineConfig;
pub use crate::error::{MatchError, MatchResult};
pub use crate::presets::{Preset, PresetBook, PresetConfig};
pub use crate::service::{Match, MatchService, SubmitOutcome};
pub use crate::store::MatchStore;
pub use crate::view::BattleSnapshot;

use crate::matrix::{popular_teams, win_rate_matrix};
use anyhow::Context;
use pokemon_duel_core::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_KEY: &str = "demo";
const DEMO_PLAYERS: [(&str, &str); 2] = [("red", "Red"), ("blue", "Blue")];

#[derive(Debug, Clone)]
pub enum Command {
    Demo { seed: u64, team_size: Option<usize> },
    Matrix { sims_per_cell: usize, seed: u64, output_path: PathBuf },
    Species,
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

pub fn load_config(opts: &CliOptions) -> anyhow::Result<EngineConfig> {
    match &opts.config_path {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let config = load_config(&opts)?;
    match opts.command {
        Command::Demo { seed, team_size } => {
            let team_size = team_size.unwrap_or(config.default_team_size);
            for line in run_demo(config, seed, team_size)? {
                println!("{line}");
            }
        }
        Command::Matrix {
            sims_per_cell,
            seed,
            output_path,
        } => {
            if sims_per_cell == 0 {
                anyhow::bail!("--sims must be > 0");
            }
            let catalog = Catalog::builtin();
            let registry = Arc::new(AbilityRegistry::with_defaults());
            let teams = popular_teams(&catalog).context("Built-in popular teams are incomplete")?;
            let matrix = win_rate_matrix(&catalog, &registry, &teams, &teams, sims_per_cell, seed, config.max_turns);
            matrix::write_csv(&matrix, &output_path)
                .with_context(|| format!("Failed to write matrix to {}", output_path.display()))?;
            println!(
                "Wrote {}x{} matrix to {}",
                matrix.len(),
                matrix.first().map(|r| r.len()).unwrap_or(0),
                output_path.display()
            );
        }
        Command::Species => {
            let catalog = Catalog::builtin();
            for id in catalog.species_ids() {
                let species = catalog.lookup_species(id)?;
                println!("{:>4}  {}", species.id, species.name);
            }
        }
    }
    Ok(())
}

/// Plays two AI trainers against each other through a [`MatchService`] and
/// returns the full battle log.
pub fn run_demo(config: EngineConfig, seed: u64, team_size: usize) -> anyhow::Result<Vec<String>> {
    let max_turns = config.max_turns;
    let level = config.default_level;
    let service = MatchService::new(config);
    service.create_match_seeded(DEMO_KEY, team_size, false, seed)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    for (id, name) in DEMO_PLAYERS {
        service.join(DEMO_KEY, id, name)?;
    }
    for (id, _) in DEMO_PLAYERS {
        let pool = &service.config().ai_pool;
        let team = ai::pick_team(service.catalog(), pool, team_size, level, &mut rng)?;
        for build in &team {
            service.select_creature(DEMO_KEY, id, build)?;
        }
    }

    while !service.with_battle(DEMO_KEY, Battle::is_finished)? {
        if service.with_battle(DEMO_KEY, Battle::turn)? > max_turns {
            service.forfeit(DEMO_KEY, DEMO_PLAYERS[1].0)?;
            break;
        }
        for (side, (id, _)) in Side::BOTH.into_iter().zip(DEMO_PLAYERS) {
            let action = service.with_battle(DEMO_KEY, |battle| ai::choose_action(battle, side, &mut rng))?;
            if service.submit_action(DEMO_KEY, id, action).is_err() {
                service.submit_action(DEMO_KEY, id, Action::Forfeit)?;
            }
        }
    }

    let log = service.with_battle(DEMO_KEY, |battle| battle.log().lines().to_vec())?;
    service.end_match(DEMO_KEY)?;
    Ok(log)
}
