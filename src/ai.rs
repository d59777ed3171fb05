//! The computer opponent seated in vs-AI matches.

use crate::error::{MatchError, MatchResult};
use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::ai::{BattleAi, GreedyAi};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::warn;

pub const AI_PLAYER_ID: &str = "ai";
pub const AI_PLAYER_NAME: &str = "AI Trainer";

/// Natures the AI rolls from for each pick.
pub const AI_NATURES: [Nature; 5] = [
    Nature::Adamant,
    Nature::Jolly,
    Nature::Modest,
    Nature::Timid,
    Nature::Bold,
];

/// Draws up to `team_size` builds from the shuffled pool. Species the catalog
/// does not know are skipped.
pub fn pick_team(
    catalog: &Catalog,
    pool: &[u32],
    team_size: usize,
    level: u8,
    rng: &mut SmallRng,
) -> MatchResult<Vec<PokemonBuild>> {
    let mut ids = pool.to_vec();
    ids.shuffle(rng);
    let mut team: Vec<PokemonBuild> = Vec::with_capacity(team_size);
    for id in ids {
        if team.len() >= team_size {
            break;
        }
        if team.iter().any(|build| build.species_id == id) {
            continue;
        }
        let species = match catalog.lookup_species(id) {
            Ok(species) => species,
            Err(err) => {
                warn!(species_id = id, %err, "skipping AI pick missing from catalog");
                continue;
            }
        };
        let options = BuildOptions {
            level: Some(level),
            nature: AI_NATURES.choose(rng).copied(),
            ..BuildOptions::default()
        };
        match PokemonBuild::with_options(species, catalog, &options) {
            Ok(build) => team.push(build),
            Err(err) => warn!(species_id = id, %err, "skipping invalid AI build"),
        }
    }
    if team.is_empty() {
        return Err(MatchError::AiSelectionFailed);
    }
    Ok(team)
}

/// The AI's action for this turn.
pub fn choose_action(battle: &Battle, side: Side, rng: &mut SmallRng) -> Action {
    GreedyAi.choose_action(battle, side, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn picks_distinct_species_with_ai_natures() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(3);
        let team = pick_team(&catalog, &crate::config::POPULAR_SPECIES, 6, 50, &mut rng).unwrap();
        assert_eq!(team.len(), 6);
        for (i, build) in team.iter().enumerate() {
            assert!(AI_NATURES.contains(&build.nature));
            assert_eq!(build.level, 50);
            assert!(build.moves.len() <= 4);
            assert!(team[i + 1..].iter().all(|other| other.species_id != build.species_id));
        }
    }

    #[test]
    fn unknown_species_are_skipped() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(4);
        let team = pick_team(&catalog, &[99_999, 6], 2, 50, &mut rng).unwrap();
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].species_id, 6);
        assert_eq!(
            pick_team(&catalog, &[99_999], 1, 50, &mut rng),
            Err(MatchError::AiSelectionFailed)
        );
    }
}
