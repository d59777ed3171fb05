use crate::config::POPULAR_SPECIES;
use pokemon_duel_core::engine::Outcome;
use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::ai::{BattleAi, GreedyAi};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// Size of each built-in popular team.
pub const POPULAR_TEAM_SIZE: usize = 3;

const AI_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SimOutcome {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

/// Plays a greedy-vs-greedy battle to the end. Hitting `max_turns`, or an
/// action the engine rejects, counts as a draw.
pub fn simulate_ai_match(
    catalog: &Catalog,
    registry: &Arc<AbilityRegistry>,
    team_a: &[PokemonBuild],
    team_b: &[PokemonBuild],
    seed: u64,
    max_turns: u32,
) -> Result<SimOutcome, BattleError> {
    let mut engine = BattleEngine::new(team_a, team_b, catalog, Arc::clone(registry), seed)?;
    let mut ai_rng = SmallRng::seed_from_u64(seed ^ AI_SEED_SALT);
    while engine.battle().turn() <= max_turns {
        let one = GreedyAi.choose_action(engine.battle(), Side::One, &mut ai_rng);
        let two = GreedyAi.choose_action(engine.battle(), Side::Two, &mut ai_rng);
        let step = match engine.step(one, two) {
            Ok(step) => step,
            Err(err) => {
                debug!(%err, turn = engine.battle().turn(), "simulation stalled");
                return Ok(SimOutcome::Draw);
            }
        };
        match step.outcome {
            Some(Outcome::Winner(Side::One)) => return Ok(SimOutcome::PlayerOneWins),
            Some(Outcome::Winner(Side::Two)) => return Ok(SimOutcome::PlayerTwoWins),
            Some(Outcome::Draw) => return Ok(SimOutcome::Draw),
            None => {}
        }
    }
    Ok(SimOutcome::Draw)
}

/// The popular species split into teams of [`POPULAR_TEAM_SIZE`].
pub fn popular_teams(catalog: &Catalog) -> Result<Vec<Vec<PokemonBuild>>, CatalogError> {
    POPULAR_SPECIES
        .chunks(POPULAR_TEAM_SIZE)
        .map(|ids| {
            ids.iter()
                .map(|id| {
                    catalog
                        .lookup_species(*id)
                        .map(|species| PokemonBuild::from_species(species, catalog))
                })
                .collect()
        })
        .collect()
}

/// Row `a`, column `b` is the rate at which `teams_a[a]` beats `teams_b[b]`,
/// draws counting half.
pub fn win_rate_matrix(
    catalog: &Catalog,
    registry: &Arc<AbilityRegistry>,
    teams_a: &[Vec<PokemonBuild>],
    teams_b: &[Vec<PokemonBuild>],
    sims_per_cell: usize,
    seed: u64,
    max_turns: u32,
) -> Vec<Vec<f64>> {
    let tasks: Vec<(usize, usize)> = (0..teams_a.len())
        .flat_map(|a| (0..teams_b.len()).map(move |b| (a, b)))
        .collect();
    let cell_results: Vec<CellResult> = tasks
        .par_iter()
        .map(|(a_idx, b_idx)| {
            let mut cell_rng =
                SmallRng::seed_from_u64(seed ^ ((*a_idx as u64) << 32) ^ (*b_idx as u64));
            let mut a_wins = 0u64;
            let mut ties = 0u64;
            for _ in 0..sims_per_cell {
                let battle_seed = cell_rng.gen();
                match simulate_ai_match(
                    catalog,
                    registry,
                    &teams_a[*a_idx],
                    &teams_b[*b_idx],
                    battle_seed,
                    max_turns,
                ) {
                    Ok(SimOutcome::PlayerOneWins) => a_wins += 1,
                    Ok(SimOutcome::PlayerTwoWins) => {}
                    Ok(SimOutcome::Draw) => ties += 1,
                    Err(err) => {
                        warn!(a = a_idx, b = b_idx, %err, "cell could not be simulated");
                        ties += 1;
                    }
                }
            }
            let total = sims_per_cell.max(1) as f64;
            let win_rate = (a_wins as f64 + 0.5 * ties as f64) / total;
            CellResult {
                a_idx: *a_idx,
                b_idx: *b_idx,
                win_rate,
            }
        })
        .collect();

    let mut matrix = vec![vec![0.0; teams_b.len()]; teams_a.len()];
    for cell in cell_results {
        matrix[cell.a_idx][cell.b_idx] = cell.win_rate;
    }
    matrix
}

pub fn write_csv(matrix: &[Vec<f64>], path: &std::path::Path) -> anyhow::Result<()> {
    std::fs::write(path, to_csv(matrix))?;
    Ok(())
}

fn to_csv(matrix: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&format!("{value:.4}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    out
}

struct CellResult {
    a_idx: usize,
    b_idx: usize,
    win_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout() {
        let csv = to_csv(&[vec![0.5, 1.0], vec![0.0, 0.25]]);
        assert_eq!(csv, "0.5000,1.0000\n0.0000,0.2500");
    }

    #[test]
    fn popular_teams_cover_the_pool() {
        let catalog = Catalog::builtin();
        let teams = popular_teams(&catalog).unwrap();
        assert_eq!(teams.len(), POPULAR_SPECIES.len() / POPULAR_TEAM_SIZE);
        assert!(teams.iter().all(|team| team.len() == POPULAR_TEAM_SIZE));
    }

    #[test]
    fn simulation_is_deterministic_per_seed() {
        let catalog = Catalog::builtin();
        let registry = Arc::new(AbilityRegistry::with_defaults());
        let teams = popular_teams(&catalog).unwrap();
        let first = simulate_ai_match(&catalog, &registry, &teams[0], &teams[1], 11, 200).unwrap();
        let again = simulate_ai_match(&catalog, &registry, &teams[0], &teams[1], 11, 200).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn empty_team_is_rejected() {
        let catalog = Catalog::builtin();
        let registry = Arc::new(AbilityRegistry::with_defaults());
        let teams = popular_teams(&catalog).unwrap();
        assert_eq!(
            simulate_ai_match(&catalog, &registry, &[], &teams[0], 1, 10),
            Err(BattleError::EmptyTeam)
        );
    }
}
