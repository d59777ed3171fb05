//! Match lifecycle: creation, seating, team selection, turns and views.

use crate::ai::{self, AI_PLAYER_ID, AI_PLAYER_NAME};
use crate::config::EngineConfig;
use crate::error::{MatchError, MatchResult};
use crate::presets::PresetBook;
use crate::store::{lock, MatchStore};
use crate::view::BattleSnapshot;
use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::battle::MAX_TEAM_SIZE;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One stored match: the battle plus the random source its turns draw from.
#[derive(Debug)]
pub struct Match {
    pub key: String,
    pub battle: Battle,
    rng: SmallRng,
}

impl Match {
    pub fn is_vs_ai(&self) -> bool {
        self.battle.is_vs_ai()
    }

    fn has_player(&self, player_id: &str) -> bool {
        self.battle.side_of(player_id).is_some()
    }
}

impl MatchStore<Match> {
    /// Key of the first match the player is seated in.
    pub fn find_by_player(&self, player_id: &str) -> Option<String> {
        self.find_by(|entry| entry.has_player(player_id))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Both actions were in and the turn ran; these are its log lines.
    Resolved(Vec<String>),
    /// Waiting on the opponent.
    Pending,
}

pub struct MatchService {
    store: MatchStore<Match>,
    registry: Arc<AbilityRegistry>,
    catalog: Arc<Catalog>,
    config: EngineConfig,
    presets: PresetBook,
    seed_base: u64,
}

impl MatchService {
    /// Built-in catalog and the default ability roster.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(Catalog::builtin()),
            Arc::new(AbilityRegistry::with_defaults()),
        )
    }

    pub fn with_parts(config: EngineConfig, catalog: Arc<Catalog>, registry: Arc<AbilityRegistry>) -> Self {
        let seed_base = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        Self {
            store: MatchStore::new(),
            registry,
            catalog,
            presets: PresetBook::new(config.max_presets),
            config,
            seed_base,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &AbilityRegistry {
        &self.registry
    }

    pub fn presets(&self) -> &PresetBook {
        &self.presets
    }

    pub fn store(&self) -> &MatchStore<Match> {
        &self.store
    }

    fn seed_for(&self, key: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.seed_base ^ hasher.finish()
    }

    /// Seeds the match from the configured base and the key.
    pub fn create_match(&self, key: &str, team_size: usize, vs_ai: bool) -> MatchResult<()> {
        self.create_match_seeded(key, team_size, vs_ai, self.seed_for(key))
    }

    pub fn create_match_seeded(&self, key: &str, team_size: usize, vs_ai: bool, seed: u64) -> MatchResult<()> {
        if !(1..=MAX_TEAM_SIZE).contains(&team_size) {
            return Err(MatchError::InvalidTeamSize(team_size));
        }
        let battle = Battle::new(team_size)
            .with_vs_ai(vs_ai)
            .with_weather_turns(self.config.weather_turns);
        self.store.insert(
            key,
            Match {
                key: key.to_string(),
                battle,
                rng: SmallRng::seed_from_u64(seed),
            },
        )?;
        info!(key, team_size, vs_ai, "match created");
        Ok(())
    }

    /// Seats a player. The first join of a vs-AI match also seats the AI
    /// with a full team; nothing changes if that team cannot be drawn.
    pub fn join(&self, key: &str, player_id: &str, username: &str) -> MatchResult<Side> {
        let handle = self.store.get(key)?;
        let mut guard = lock(&handle);
        let entry = &mut *guard;
        let seats_ai = entry.is_vs_ai() && entry.battle.players().is_empty() && player_id != AI_PLAYER_ID;
        if !seats_ai {
            return Ok(entry.battle.add_player(player_id, username)?);
        }

        let team_size = entry.battle.team_size();
        let team = ai::pick_team(
            &self.catalog,
            &self.config.ai_pool,
            team_size,
            self.config.default_level,
            &mut entry.rng,
        )?;
        if team.len() < team_size {
            warn!(key, picked = team.len(), team_size, "AI pool too small for the match");
            return Err(MatchError::AiSelectionFailed);
        }
        let side = entry.battle.add_player(player_id, username)?;
        entry.battle.add_player(AI_PLAYER_ID, AI_PLAYER_NAME)?;
        for build in &team {
            entry
                .battle
                .select_creature(AI_PLAYER_ID, build, &self.catalog, &self.registry)?;
        }
        debug!(key, team = team.len(), "AI seated");
        Ok(side)
    }

    pub fn select_creature(&self, key: &str, player_id: &str, build: &PokemonBuild) -> MatchResult<()> {
        let handle = self.store.get(key)?;
        let mut entry = lock(&handle);
        entry
            .battle
            .select_creature(player_id, build, &self.catalog, &self.registry)?;
        Ok(())
    }

    /// Builds from the catalog; an unset level means the configured default.
    pub fn select_species(
        &self,
        key: &str,
        player_id: &str,
        species_id: u32,
        options: &BuildOptions,
    ) -> MatchResult<()> {
        let species = self.catalog.lookup_species(species_id)?;
        let mut options = options.clone();
        options.level = options.level.or(Some(self.config.default_level));
        let build = PokemonBuild::with_options(species, &self.catalog, &options)?;
        self.select_creature(key, player_id, &build)
    }

    pub fn select_preset(&self, key: &str, player_id: &str, preset_id: u32) -> MatchResult<()> {
        let build = self.presets.preset_build(player_id, preset_id, &self.catalog)?;
        self.select_creature(key, player_id, &build)
    }

    /// Queues the action and runs the turn once both sides are in. The AI
    /// answers immediately in vs-AI matches and forfeits if its pick is
    /// rejected.
    pub fn submit_action(&self, key: &str, player_id: &str, action: Action) -> MatchResult<SubmitOutcome> {
        let handle = self.store.get(key)?;
        let mut guard = lock(&handle);
        let Match { battle, rng, .. } = &mut *guard;
        battle.set_action(player_id, action)?;

        if battle.is_vs_ai() && player_id != AI_PLAYER_ID {
            if let Some(ai_side) = battle.side_of(AI_PLAYER_ID) {
                if battle.pending_action(ai_side).is_none() {
                    let choice = ai::choose_action(battle, ai_side, rng);
                    if let Err(err) = battle.set_action(AI_PLAYER_ID, choice) {
                        warn!(key, %err, ?choice, "AI action rejected, forfeiting");
                        battle.set_action(AI_PLAYER_ID, Action::Forfeit)?;
                    }
                }
            }
        }

        if !battle.actions_ready() {
            return Ok(SubmitOutcome::Pending);
        }
        let lines = battle.execute_turn(&self.registry, rng);
        if let Some(winner) = battle.winner_player() {
            info!(key, winner = %winner.name, "match finished");
        }
        Ok(SubmitOutcome::Resolved(lines))
    }

    pub fn forfeit(&self, key: &str, player_id: &str) -> MatchResult<Vec<String>> {
        let handle = self.store.get(key)?;
        let mut guard = lock(&handle);
        let Match { battle, rng, .. } = &mut *guard;
        let lines = battle.forfeit(player_id, &self.registry, rng)?;
        info!(key, player_id, "player forfeited");
        Ok(lines)
    }

    pub fn end_match(&self, key: &str) -> MatchResult<()> {
        self.store.remove(key)?;
        info!(key, "match ended");
        Ok(())
    }

    pub fn snapshot(&self, key: &str) -> MatchResult<BattleSnapshot> {
        let handle = self.store.get(key)?;
        let entry = lock(&handle);
        Ok(BattleSnapshot::capture(key, &entry.battle, self.config.log_tail))
    }

    /// Read access to a stored battle.
    pub fn with_battle<R>(&self, key: &str, f: impl FnOnce(&Battle) -> R) -> MatchResult<R> {
        let handle = self.store.get(key)?;
        let entry = lock(&handle);
        Ok(f(&entry.battle))
    }

    pub fn find_match_by_player(&self, player_id: &str) -> Option<String> {
        self.store.find_by_player(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MatchService {
        MatchService::new(EngineConfig {
            seed: Some(7),
            ..EngineConfig::default()
        })
    }

    #[test]
    fn team_size_bounds() {
        let service = service();
        assert_eq!(service.create_match("m", 0, false), Err(MatchError::InvalidTeamSize(0)));
        assert_eq!(service.create_match("m", 7, false), Err(MatchError::InvalidTeamSize(7)));
        service.create_match("m", 6, false).unwrap();
        assert_eq!(
            service.create_match("m", 1, false),
            Err(MatchError::AlreadyExists("m".to_string()))
        );
    }

    #[test]
    fn seeds_differ_per_key_but_not_per_run() {
        let one = service();
        let two = service();
        assert_eq!(one.seed_for("a"), two.seed_for("a"));
        assert_ne!(one.seed_for("a"), one.seed_for("b"));
    }

    #[test]
    fn vs_ai_join_seats_a_full_ai_team() {
        let service = service();
        service.create_match("m", 3, true).unwrap();
        assert_eq!(service.join("m", "ash", "Ash").unwrap(), Side::One);
        service
            .with_battle("m", |battle| {
                let ai = battle.player(Side::Two).unwrap();
                assert_eq!(ai.id, AI_PLAYER_ID);
                assert_eq!(ai.team.len(), 3);
                assert!(ai.ready);
                assert_eq!(battle.phase(), BattlePhase::Choosing);
            })
            .unwrap();
        assert_eq!(service.find_match_by_player("ash"), Some("m".to_string()));
    }

    #[test]
    fn ai_seat_fails_cleanly_when_the_pool_is_short() {
        let service = MatchService::new(EngineConfig {
            seed: Some(1),
            ai_pool: vec![6, 9],
            ..EngineConfig::default()
        });
        service.create_match("m", 3, true).unwrap();
        assert_eq!(service.join("m", "ash", "Ash"), Err(MatchError::AiSelectionFailed));
        service
            .with_battle("m", |battle| assert!(battle.players().is_empty()))
            .unwrap();
    }
}
