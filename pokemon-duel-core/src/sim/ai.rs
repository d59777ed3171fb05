use crate::data::types::effectiveness;
use crate::sim::battle::{Action, Battle, Side};
use crate::sim::switching::next_living;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

const STAB_WEIGHT: f64 = 1.5;

/// Picks one action for `side` from the current battle state.
pub trait BattleAi {
    fn choose_action(&mut self, battle: &Battle, side: Side, rng: &mut SmallRng) -> Action;
}

/// Switch to the first living teammate, or fall back to the first move.
fn fallback(battle: &Battle, side: Side) -> Action {
    battle
        .player(side)
        .and_then(next_living)
        .map(Action::Switch)
        .unwrap_or(Action::attack(0))
}

/// Any usable move, uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAi;

impl BattleAi for RandomAi {
    fn choose_action(&mut self, battle: &Battle, side: Side, rng: &mut SmallRng) -> Action {
        let usable = battle.active(side).map(|battler| battler.usable_moves()).unwrap_or_default();
        match usable.choose(rng) {
            Some(index) => Action::attack(*index),
            None => fallback(battle, side),
        }
    }
}

/// Highest `power * effectiveness * STAB` with a little noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAi;

impl GreedyAi {
    pub fn score_moves(battle: &Battle, side: Side, rng: &mut SmallRng) -> Vec<(usize, f64)> {
        let (Some(battler), Some(opponent)) = (battle.active(side), battle.active(side.opponent())) else {
            return Vec::new();
        };
        let defending = opponent.defending_types();
        battler
            .usable_moves()
            .into_iter()
            .map(|index| {
                let mv = &battler.moves[index];
                let mut score = mv.power as f64 * effectiveness(mv.move_type, &defending);
                if battler.is_stab(mv.move_type) {
                    score *= STAB_WEIGHT;
                }
                (index, score * rng.gen_range(0.9..1.1))
            })
            .collect()
    }
}

impl BattleAi for GreedyAi {
    fn choose_action(&mut self, battle: &Battle, side: Side, rng: &mut SmallRng) -> Action {
        let scores = Self::score_moves(battle, side, rng);
        if scores.is_empty() {
            return fallback(battle, side);
        }
        let best = scores
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0, |(index, _)| index);
        Action::attack(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::Catalog;
    use crate::sim::abilities::AbilityRegistry;
    use crate::sim::build::{BuildOptions, PokemonBuild};
    use rand::SeedableRng;

    fn battle_with_moves(one: (u32, Vec<u32>), two: u32) -> Battle {
        let catalog = Catalog::builtin();
        let registry = AbilityRegistry::with_defaults();
        let mut battle = Battle::new(1);
        battle.add_player("p1", "Red").unwrap();
        battle.add_player("p2", "Blue").unwrap();
        let species = catalog.lookup_species(one.0).unwrap();
        let options = BuildOptions {
            moves: Some(one.1),
            ..BuildOptions::default()
        };
        let build = PokemonBuild::with_options(species, &catalog, &options).unwrap();
        battle.select_creature("p1", &build, &catalog, &registry).unwrap();
        let species = catalog.lookup_species(two).unwrap();
        let build = PokemonBuild::from_species(species, &catalog);
        battle.select_creature("p2", &build, &catalog, &registry).unwrap();
        battle
    }

    #[test]
    fn greedy_prefers_super_effective_stab() {
        // Charizard: Tackle, Flamethrower against Venusaur.
        let battle = battle_with_moves((6, vec![33, 53]), 3);
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(GreedyAi.choose_action(&battle, Side::One, &mut rng), Action::attack(1));
        }
    }

    #[test]
    fn random_only_picks_usable_moves() {
        let battle = battle_with_moves((6, vec![33, 53]), 3);
        let mut rng = SmallRng::seed_from_u64(6);
        for _ in 0..20 {
            match RandomAi.choose_action(&battle, Side::One, &mut rng) {
                Action::Move { index, gimmick } => {
                    assert!(index < 2);
                    assert_eq!(gimmick, None);
                }
                other => panic!("unexpected action {other:?}"),
            }
        }
    }
}
