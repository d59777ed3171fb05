//! Step-based battle engine for simulations and reinforcement-learning loops.

use crate::data::catalog::Catalog;
use crate::error::{BattleError, BattleResult};
use crate::sim::abilities::AbilityRegistry;
use crate::sim::battle::{Action, Battle, BattlePhase, Side, MAX_TEAM_SIZE};
use crate::sim::build::PokemonBuild;
use crate::sim::switching::validate_switch;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;

const PLAYER_IDS: [&str; 2] = ["player-one", "player-two"];

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    /// Rewards for side one and side two.
    pub fn rewards(self) -> (f32, f32) {
        match self {
            Outcome::Winner(Side::One) => (1.0, -1.0),
            Outcome::Winner(Side::Two) => (-1.0, 1.0),
            Outcome::Draw => (0.0, 0.0),
        }
    }
}

/// Result of a single engine step.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Log lines the turn produced.
    pub events: Vec<String>,
    /// Turn counter after the step.
    pub turn: u32,
    pub outcome: Option<Outcome>,
    /// Rewards for side one and side two; zero until the battle ends.
    pub rewards: (f32, f32),
}

/// A battle bundled with its registry and random source.
pub struct BattleEngine {
    battle: Battle,
    registry: Arc<AbilityRegistry>,
    rng: SmallRng,
}

impl BattleEngine {
    /// Seats both teams and starts the battle. The longer team is cut to the
    /// shorter one's size.
    pub fn new(
        team_one: &[PokemonBuild],
        team_two: &[PokemonBuild],
        catalog: &Catalog,
        registry: Arc<AbilityRegistry>,
        seed: u64,
    ) -> BattleResult<Self> {
        let size = team_one.len().min(team_two.len()).min(MAX_TEAM_SIZE);
        if size == 0 {
            return Err(BattleError::EmptyTeam);
        }
        let mut battle = Battle::new(size);
        battle.add_player(PLAYER_IDS[0], "Player 1")?;
        battle.add_player(PLAYER_IDS[1], "Player 2")?;
        for (id, team) in PLAYER_IDS.iter().zip([team_one, team_two]) {
            for build in &team[..size] {
                battle.select_creature(id, build, catalog, &registry)?;
            }
        }
        Ok(Self {
            battle,
            registry,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Advances the battle by one turn. A finished battle returns its outcome
    /// again without changing anything.
    pub fn step(&mut self, one: Action, two: Action) -> BattleResult<StepResult> {
        if let Some(outcome) = self.outcome() {
            return Ok(StepResult {
                events: Vec::new(),
                turn: self.battle.turn(),
                outcome: Some(outcome),
                rewards: outcome.rewards(),
            });
        }
        self.battle.set_action(PLAYER_IDS[0], one)?;
        if let Err(err) = self.battle.set_action(PLAYER_IDS[1], two) {
            if let Some(player) = self.battle.players.get_mut(0) {
                player.pending = None;
            }
            return Err(err);
        }
        let events = self.battle.execute_turn(&self.registry, &mut self.rng);
        let outcome = self.outcome();
        Ok(StepResult {
            events,
            turn: self.battle.turn(),
            outcome,
            rewards: outcome.map_or((0.0, 0.0), Outcome::rewards),
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.battle.phase() == BattlePhase::Finished
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(self.battle.winner().map_or(Outcome::Draw, Outcome::Winner))
    }

    /// Usable moves followed by valid switches.
    pub fn legal_actions(&self, side: Side) -> Vec<Action> {
        let Some(player) = self.battle.player(side) else {
            return Vec::new();
        };
        let mut actions: Vec<Action> = player
            .active()
            .map(|battler| battler.usable_moves())
            .unwrap_or_default()
            .into_iter()
            .map(Action::attack)
            .collect();
        actions.extend(
            (0..player.team.len())
                .filter(|index| validate_switch(player, *index).is_ok())
                .map(Action::Switch),
        );
        actions
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
