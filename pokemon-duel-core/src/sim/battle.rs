//! The battle state machine.
//!
//! A [`Battle`] moves from `Waiting` (players joining) through `Choosing`
//! (team building) into `Battling`, where both sides submit one [`Action`]
//! per turn and [`Battle::execute_turn`] resolves them. It ends in `Finished`
//! once a side has no usable creature left or forfeits.

use crate::battle_logger::BattleLogger;
use crate::data::catalog::Catalog;
use crate::error::{BattleError, BattleResult};
use crate::sim::abilities::{AbilityRegistry, AbilityService, BattleContext, FormTrigger, HitResult};
use crate::sim::build::PokemonBuild;
use crate::sim::damage::base_damage;
use crate::sim::faint_handler;
use crate::sim::items::battle_items::{self, EndOfTurnEffect};
use crate::sim::items::consumable;
use crate::sim::moves::status::{apply_move_effect, apply_stage_changes, inflict};
use crate::sim::moves::{attacking, secondary, EffectTarget, MoveData, MoveEffect};
use crate::sim::pokemon::{Battler, StageStat, Status, Volatile};
use crate::sim::switching;
use crate::sim::weather_field::{
    weather_damage, weather_damage_message, Terrain, WeatherState, DEFAULT_WEATHER_TURNS,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

pub const MAX_TEAM_SIZE: usize = 6;
pub const DYNAMAX_TURNS: u8 = 3;

const CONFUSION_SELF_HIT_POWER: u16 = 40;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn from_index(index: usize) -> Side {
        if index == 0 {
            Side::One
        } else {
            Side::Two
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Gimmick {
    Terastallize,
    Dynamax,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Action {
    Move {
        index: usize,
        gimmick: Option<Gimmick>,
    },
    Switch(usize),
    Forfeit,
}

impl Action {
    pub const fn attack(index: usize) -> Action {
        Action::Move {
            index,
            gimmick: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum BattlePhase {
    Waiting,
    Choosing,
    Battling,
    Finished,
}

#[derive(Clone, Debug, Serialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team: Vec<Battler>,
    pub active: usize,
    #[serde(skip)]
    pub pending: Option<Action>,
    pub ready: bool,
    pub gimmick_used: bool,
}

impl Player {
    pub(crate) fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            team: Vec::new(),
            active: 0,
            pending: None,
            ready: false,
            gimmick_used: false,
        }
    }

    pub fn active(&self) -> Option<&Battler> {
        self.team.get(self.active)
    }

    pub fn has_usable(&self) -> bool {
        self.team.iter().any(|battler| !battler.is_fainted())
    }

    pub fn remaining(&self) -> usize {
        self.team.iter().filter(|battler| !battler.is_fainted()).count()
    }
}

/// Both active battlers, the acting side's first.
pub(crate) fn actives_mut(players: &mut [Player], side: Side) -> Option<(&mut Battler, &mut Battler)> {
    let [one, two] = players else {
        return None;
    };
    let first = one.team.get_mut(one.active)?;
    let second = two.team.get_mut(two.active)?;
    Some(match side {
        Side::One => (first, second),
        Side::Two => (second, first),
    })
}

#[derive(Clone, Debug)]
pub struct Battle {
    pub(crate) players: Vec<Player>,
    pub(crate) turn: u32,
    pub(crate) phase: BattlePhase,
    pub(crate) weather: WeatherState,
    pub(crate) terrain: Option<Terrain>,
    pub(crate) winner: Option<Side>,
    pub(crate) log: BattleLogger,
    pub(crate) weather_turns: u8,
    team_size: usize,
    vs_ai: bool,
}

impl Battle {
    pub fn new(team_size: usize) -> Self {
        Self {
            players: Vec::with_capacity(2),
            turn: 1,
            phase: BattlePhase::Waiting,
            weather: WeatherState::default(),
            terrain: None,
            winner: None,
            log: BattleLogger::new(),
            weather_turns: DEFAULT_WEATHER_TURNS,
            team_size: team_size.clamp(1, MAX_TEAM_SIZE),
            vs_ai: false,
        }
    }

    pub fn with_vs_ai(mut self, vs_ai: bool) -> Self {
        self.vs_ai = vs_ai;
        self
    }

    pub fn with_weather_turns(mut self, turns: u8) -> Self {
        self.weather_turns = turns.max(1);
        self
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn terrain(&self) -> Option<Terrain> {
        self.terrain
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|side| self.players.get(side.index()))
    }

    pub fn log(&self) -> &BattleLogger {
        &self.log
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn is_vs_ai(&self) -> bool {
        self.vs_ai
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BattlePhase::Finished
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, side: Side) -> Option<&Player> {
        self.players.get(side.index())
    }

    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        self.players
            .iter()
            .position(|player| player.id == player_id)
            .map(Side::from_index)
    }

    pub fn active(&self, side: Side) -> Option<&Battler> {
        self.player(side).and_then(Player::active)
    }

    pub fn context(&self) -> BattleContext {
        BattleContext {
            weather: self.weather.weather,
            terrain: self.terrain,
            turn: self.turn,
        }
    }

    /// Both sides have an action queued.
    pub fn actions_ready(&self) -> bool {
        self.players.len() == 2 && self.players.iter().all(|player| player.pending.is_some())
    }

    fn expect_phase(&self, expected: BattlePhase) -> BattleResult<()> {
        if self.phase != expected {
            return Err(BattleError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn require_side(&self, player_id: &str) -> BattleResult<Side> {
        self.side_of(player_id)
            .ok_or_else(|| BattleError::NotInBattle(player_id.to_string()))
    }

    pub fn add_player(&mut self, id: impl Into<String>, name: impl Into<String>) -> BattleResult<Side> {
        let id = id.into();
        if self.players.iter().any(|player| player.id == id) {
            return Err(BattleError::AlreadyJoined(id));
        }
        if matches!(self.phase, BattlePhase::Battling | BattlePhase::Finished) {
            return Err(BattleError::WrongPhase {
                expected: BattlePhase::Waiting,
                actual: self.phase,
            });
        }
        if self.players.len() >= 2 {
            return Err(BattleError::MatchFull);
        }
        self.players.push(Player::new(id, name.into()));
        let side = Side::from_index(self.players.len() - 1);
        if self.players.len() == 2 {
            self.phase = BattlePhase::Choosing;
            info!(team_size = self.team_size, "both players joined");
        }
        Ok(side)
    }

    /// Adds a creature to the player's team. The battle starts once both
    /// teams are full.
    pub fn select_creature(
        &mut self,
        player_id: &str,
        build: &PokemonBuild,
        catalog: &Catalog,
        registry: &AbilityRegistry,
    ) -> BattleResult<()> {
        self.expect_phase(BattlePhase::Choosing)?;
        let side = self.require_side(player_id)?;
        let team_size = self.team_size;
        let player = &mut self.players[side.index()];
        if player.team.len() >= team_size {
            return Err(BattleError::TeamFull);
        }
        if let Some(existing) = player
            .team
            .iter()
            .find(|battler| battler.species_id == build.species_id)
        {
            return Err(BattleError::DuplicateSpecies(existing.species_name.clone()));
        }
        let battler = Battler::new(build, catalog)?;
        debug!(player = %player.name, creature = %battler.name, "creature selected");
        player.team.push(battler);
        if player.team.len() == team_size {
            player.ready = true;
        }
        if self.players.iter().all(|player| player.ready) {
            self.start(&AbilityService::new(registry));
        }
        Ok(())
    }

    fn start(&mut self, service: &AbilityService<'_>) {
        self.phase = BattlePhase::Battling;
        self.log.push("Battle start!");
        for player in &self.players {
            if let Some(lead) = player.active() {
                self.log.push(format!("{} sent out {}!", player.name, lead.name));
            }
        }
        info!(vs_ai = self.vs_ai, "battle started");
        for side in Side::BOTH {
            switching::fire_entry(self, side, service);
        }
    }

    /// Queues an action for the player's side. Nothing is mutated when the
    /// action is rejected.
    pub fn set_action(&mut self, player_id: &str, action: Action) -> BattleResult<()> {
        self.expect_phase(BattlePhase::Battling)?;
        let side = self.require_side(player_id)?;
        let player = &self.players[side.index()];
        if player.pending.is_some() {
            return Err(BattleError::AlreadyActed);
        }
        match action {
            Action::Move { index, gimmick } => {
                let active = player
                    .active()
                    .ok_or_else(|| BattleError::NotInBattle(player_id.to_string()))?;
                let slot = active.moves.get(index).ok_or(BattleError::InvalidMove(index))?;
                if !slot.has_pp() {
                    return Err(BattleError::NoPpLeft(slot.name.clone()));
                }
                if active.is_move_disabled(index) {
                    return Err(BattleError::InvalidMove(index));
                }
                if gimmick.is_some() && player.gimmick_used {
                    return Err(BattleError::GimmickUsed);
                }
            }
            Action::Switch(index) => switching::validate_switch(player, index)?,
            Action::Forfeit => {}
        }
        self.players[side.index()].pending = Some(action);
        Ok(())
    }

    /// Forfeits on the player's behalf and resolves the turn right away. The
    /// opponent's slot is filled if it was still empty.
    pub fn forfeit(
        &mut self,
        player_id: &str,
        registry: &AbilityRegistry,
        rng: &mut impl Rng,
    ) -> BattleResult<Vec<String>> {
        self.expect_phase(BattlePhase::Battling)?;
        let side = self.require_side(player_id)?;
        self.players[side.index()].pending = Some(Action::Forfeit);
        let opponent = &mut self.players[side.opponent().index()];
        if opponent.pending.is_none() {
            opponent.pending = Some(Action::attack(0));
        }
        Ok(self.execute_turn(registry, rng))
    }

    pub fn pending_action(&self, side: Side) -> Option<Action> {
        self.player(side).and_then(|player| player.pending)
    }

    /// Resolves the queued turn and returns the lines it logged. Does nothing
    /// unless both actions are in.
    pub fn execute_turn(&mut self, registry: &AbilityRegistry, rng: &mut impl Rng) -> Vec<String> {
        if self.phase != BattlePhase::Battling || !self.actions_ready() {
            return Vec::new();
        }
        let (Some(first), Some(second)) = (self.players[0].pending.take(), self.players[1].pending.take())
        else {
            return Vec::new();
        };
        let actions = [first, second];
        let service = AbilityService::new(registry);
        let start = self.log.len();
        self.log.push(format!("Turn {}", self.turn));
        debug!(turn = self.turn, ?actions, "executing turn");

        for side in Side::BOTH {
            if actions[side.index()] == Action::Forfeit {
                let name = self.players[side.index()].name.clone();
                self.log.push(format!("{name} forfeited!"));
                self.finish(Some(side.opponent()));
                return self.log.since(start).to_vec();
            }
        }

        for side in Side::BOTH {
            if let Action::Switch(index) = actions[side.index()] {
                switching::switch_in(self, side, index, &service);
            }
        }

        for side in Side::BOTH {
            if let Action::Move {
                gimmick: Some(gimmick),
                ..
            } = actions[side.index()]
            {
                self.activate_gimmick(side, gimmick);
            }
        }

        let movers: Vec<(Side, usize)> = Side::BOTH
            .iter()
            .filter_map(|&side| match actions[side.index()] {
                Action::Move { index, .. } => Some((side, index)),
                _ => None,
            })
            .collect();
        for (side, index) in self.move_order(&movers, &service) {
            // A creature sent in after a faint uses the queued slot with its own moves.
            if self.active(side).map_or(true, Battler::is_fainted) {
                continue;
            }
            self.resolve_move(side, index, &service, rng);
            if faint_handler::resolve_faints(self, &service, Some(side)) {
                return self.log.since(start).to_vec();
            }
        }

        self.end_of_turn(&service, rng);
        if self.phase == BattlePhase::Battling {
            self.turn += 1;
        }
        self.log.since(start).to_vec()
    }

    /// Priority first, then effective speed. The sort is stable, so ties keep
    /// side one ahead.
    fn move_order(&self, movers: &[(Side, usize)], service: &AbilityService<'_>) -> Vec<(Side, usize)> {
        let ctx = self.context();
        let mut keyed: Vec<(Side, usize, i8, u32)> = movers
            .iter()
            .map(|&(side, index)| match self.active(side) {
                Some(battler) => {
                    let priority = battler
                        .moves
                        .get(index)
                        .map_or(0, |mv| service.effective_priority(battler, mv, mv.priority, &ctx));
                    let speed = service.effective_speed(battler, battler.base_speed(), &ctx);
                    (side, index, priority, speed)
                }
                None => (side, index, 0, 0),
            })
            .collect();
        keyed.sort_by(|a, b| b.2.cmp(&a.2).then(b.3.cmp(&a.3)));
        keyed.into_iter().map(|(side, index, _, _)| (side, index)).collect()
    }

    fn activate_gimmick(&mut self, side: Side, gimmick: Gimmick) {
        let player = &mut self.players[side.index()];
        if player.gimmick_used {
            return;
        }
        let Some(active) = player.team.get_mut(player.active) else {
            return;
        };
        if active.is_fainted() {
            return;
        }
        let line = match gimmick {
            Gimmick::Terastallize => {
                active.terastallized = true;
                format!("{} terastallized into the {} type!", active.name, active.tera_type.name())
            }
            Gimmick::Dynamax => {
                active.dynamax_turns = DYNAMAX_TURNS;
                format!("{} dynamaxed!", active.name)
            }
        };
        player.gimmick_used = true;
        self.log.push(line);
    }

    fn resolve_move(&mut self, side: Side, index: usize, service: &AbilityService<'_>, rng: &mut impl Rng) {
        let ctx = self.context();
        let Some((attacker, defender)) = actives_mut(&mut self.players, side) else {
            return;
        };
        let mut lines = Vec::new();
        run_move(attacker, defender, index, &ctx, service, rng, &mut lines);
        self.log.extend(lines);
    }

    /// Weather chip for both sides, then residual status damage, then held
    /// items, then each side's turn-end ability on the post-damage state.
    fn end_of_turn(&mut self, service: &AbilityService<'_>, rng: &mut impl Rng) {
        let ctx = self.context();
        let mut lines = Vec::new();
        for_each_active(&mut self.players, |battler| weather_chip(battler, &ctx, &mut lines));
        for_each_active(&mut self.players, |battler| residual_damage(battler, service, &mut lines));
        for_each_active(&mut self.players, |battler| held_item_turn_end(battler, &mut lines));
        for_each_active(&mut self.players, |battler| {
            turn_end_hooks(battler, &ctx, service, &mut *rng, &mut lines)
        });
        if let Some(ended) = self.weather.tick() {
            lines.push(ended.end_message().to_string());
        }
        self.log.extend(lines);
        faint_handler::resolve_faints(self, service, None);
    }

    /// Ends the battle. `None` is a draw.
    pub(crate) fn finish(&mut self, winner: Option<Side>) {
        self.phase = BattlePhase::Finished;
        self.winner = winner;
        for player in &mut self.players {
            player.pending = None;
        }
        match winner.and_then(|side| self.players.get(side.index())) {
            Some(player) => {
                let line = format!("{} wins!", player.name);
                info!(winner = %player.name, turn = self.turn, "battle finished");
                self.log.push(line);
            }
            None => {
                info!(turn = self.turn, "battle ended in a draw");
                self.log.push("The battle ended in a draw!");
            }
        }
    }
}

/// Status and volatile checks that can stop a battler before it moves.
fn can_act(battler: &mut Battler, rng: &mut impl Rng, lines: &mut Vec<String>) -> bool {
    if battler.remove_volatile(Volatile::Flinch) {
        lines.push(format!("{} flinched and couldn't move!", battler.name));
        return false;
    }
    match battler.status {
        Some(Status::Sleep) => {
            if battler.status_turns == 0 {
                battler.cure_status();
                lines.push(format!("{} woke up!", battler.name));
            } else {
                battler.status_turns -= 1;
                lines.push(format!("{} is fast asleep.", battler.name));
                return false;
            }
        }
        Some(Status::Freeze) => {
            if rng.gen_range(0..100) < 20 {
                battler.cure_status();
                lines.push(format!("{} thawed out!", battler.name));
            } else {
                lines.push(format!("{} is frozen solid!", battler.name));
                return false;
            }
        }
        Some(Status::Paralysis) if rng.gen_range(0..100) < 25 => {
            lines.push(format!("{} is paralyzed! It can't move!", battler.name));
            return false;
        }
        _ => {}
    }
    if battler.has_volatile(Volatile::Infatuation) && rng.gen_bool(0.5) {
        lines.push(format!("{} is immobilized by love!", battler.name));
        return false;
    }
    if battler.has_volatile(Volatile::Confusion) {
        if rng.gen_range(0..4) == 0 {
            battler.remove_volatile(Volatile::Confusion);
            lines.push(format!("{} snapped out of its confusion!", battler.name));
        } else if rng.gen_range(0..3) == 0 {
            let damage = base_damage(
                battler.level,
                CONFUSION_SELF_HIT_POWER,
                battler.staged_stat(StageStat::Attack) as f64,
                battler.staged_stat(StageStat::Defense) as f64,
            ) as u16;
            battler.take_damage(damage);
            lines.push(format!("{} hurt itself in its confusion!", battler.name));
            return false;
        }
    }
    true
}

fn run_move(
    attacker: &mut Battler,
    defender: &mut Battler,
    index: usize,
    ctx: &BattleContext,
    service: &AbilityService<'_>,
    rng: &mut impl Rng,
    lines: &mut Vec<String>,
) {
    if attacker.must_recharge {
        attacker.must_recharge = false;
        lines.push(format!("{} must recharge!", attacker.name));
        return;
    }
    if !can_act(attacker, rng, lines) {
        return;
    }
    if attacker.is_move_disabled(index) {
        lines.push(format!("{}'s move is disabled!", attacker.name));
        return;
    }
    if let Err(err) = attacker.use_move(index) {
        debug!(%err, battler = %attacker.name, "move rejected at resolution");
        lines.push(format!("{} couldn't use its move!", attacker.name));
        return;
    }
    let Some(move_data) = attacker.moves.get(index).map(|mv| mv.data().clone()) else {
        return;
    };
    lines.push(format!("{} used {}!", attacker.name, move_data.name));

    if let Some(change) = service.check_form_change(attacker, FormTrigger::BeforeMove, Some(&move_data), ctx) {
        lines.extend(change.messages.iter().cloned());
        attacker.apply_form(&change);
    }

    let result = attacker.calculate_damage(&move_data, defender, rng);
    if !result.hit {
        lines.push("But it missed!".to_string());
        return;
    }
    if move_data.is_status() {
        apply_move_effect(move_data.effect, attacker, defender, service, rng, true, lines);
        return;
    }

    let mods = service.calculate_damage_with_abilities(attacker, defender, &move_data, ctx);
    if mods.immune {
        lines.extend(mods.messages);
        if mods.heal_percent > 0 {
            let amount = (defender.max_hp() as u32 * mods.heal_percent as u32 / 100) as u16;
            if defender.heal(amount.max(1)) > 0 {
                lines.push(format!("{} restored HP!", defender.name));
            }
        }
        if let Some(boost) = service.absorb_boost(defender) {
            apply_stage_changes(defender, &[boost], lines);
        }
        return;
    }
    if result.effectiveness == 0.0 {
        lines.push(format!("It had no effect on {}...", defender.name));
        return;
    }

    let scaled = (result.damage as f64 * mods.total())
        .floor()
        .clamp(1.0, u16::MAX as f64) as u16;
    let (dealt, sash_used) = defender.take_damage_with_item(scaled);
    if result.critical {
        lines.push("A critical hit!".to_string());
    }
    if result.effectiveness > 1.0 {
        lines.push("It's super effective!".to_string());
    } else if result.effectiveness < 1.0 {
        lines.push("It's not very effective...".to_string());
    }
    lines.push(format!(
        "{} took {} damage! ({}/{} HP)",
        defender.name,
        dealt,
        defender.current_hp,
        defender.max_hp()
    ));
    if sash_used {
        lines.push(format!("{} hung on using its Focus Sash!", defender.name));
    }

    if let Some(recoil) = attacking::recoil_damage(&move_data, dealt) {
        attacker.take_damage(recoil);
        lines.push(format!("{} is damaged by recoil!", attacker.name));
    }
    if let Some(cost) = battle_items::life_orb_recoil(attacker) {
        attacker.take_damage(cost);
        lines.push(format!("{} lost some of its HP!", attacker.name));
    }
    if let Some(helmet) = battle_items::rocky_helmet_damage(defender, attacker, &move_data) {
        attacker.take_damage(helmet);
        lines.push(format!("{} was hurt by {}'s Rocky Helmet!", attacker.name, defender.name));
    }

    if !service.suppresses_secondary(attacker) {
        if let Some(effect) = secondary::roll_secondary(&move_data, rng) {
            let self_targeted = matches!(
                effect,
                MoveEffect::StatChange {
                    target: EffectTarget::SelfSide,
                    ..
                }
            );
            if self_targeted || !defender.is_fainted() {
                apply_move_effect(effect, attacker, defender, service, rng, false, lines);
            }
        }
    }

    if defender.is_fainted() {
        after_knockout(attacker, defender, ctx, service, lines);
    } else {
        if let Some(hit) = service.trigger_being_hit(defender, attacker, &move_data, ctx) {
            apply_hit_result(hit, defender, attacker, dealt, index, service, rng, lines);
        }
        if let Some(healed) = consumable::try_consume_sitrus_berry(defender) {
            lines.push(format!("{} restored {} HP with its Sitrus Berry!", defender.name, healed));
        }
    }

    if attacking::requires_recharge(&move_data) && !attacker.is_fainted() {
        attacker.must_recharge = true;
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_hit_result(
    hit: HitResult,
    defender: &mut Battler,
    attacker: &mut Battler,
    dealt: u16,
    move_index: usize,
    service: &AbilityService<'_>,
    rng: &mut impl Rng,
    lines: &mut Vec<String>,
) {
    lines.extend(hit.messages);
    if hit.damage_reduction_pct > 0 {
        let restored = (dealt as u32 * hit.damage_reduction_pct as u32 / 100) as u16;
        defender.heal(restored);
    }
    if let Some(affliction) = hit.contact_status {
        if !attacker.is_fainted() && rng.gen_range(0..100u8) < hit.contact_chance {
            inflict(attacker, affliction, service, rng, false, lines);
        }
    }
    if hit.recoil_damage > 0 {
        attacker.take_damage(hit.recoil_damage);
    }
    apply_stage_changes(attacker, &hit.stat_changes, lines);
    if hit.disable_chance > 0
        && !attacker.is_fainted()
        && rng.gen_range(0..100u8) < hit.disable_chance
        && attacker.add_volatile(Volatile::Disable)
    {
        attacker.disabled_move = Some(move_index);
        if let Some(mv) = attacker.moves.get(move_index) {
            lines.push(format!("{}'s {} was disabled!", attacker.name, mv.name));
        }
    }
    apply_stage_changes(defender, &hit.self_stat_changes, lines);
}

fn after_knockout(
    attacker: &mut Battler,
    defender: &mut Battler,
    ctx: &BattleContext,
    service: &AbilityService<'_>,
    lines: &mut Vec<String>,
) {
    if !attacker.is_fainted() {
        if let Some(knockout) = service.trigger_knockout(attacker, ctx) {
            lines.extend(knockout.messages);
            for (stat, delta) in knockout.stat_boosts {
                attacker.modify_stat(stat, delta);
            }
        }
        if let Some(change) = service.check_form_change(attacker, FormTrigger::Knockout, None, ctx) {
            lines.extend(change.messages.iter().cloned());
            attacker.apply_form(&change);
            attacker.battle_bond_spent = true;
        }
    }
    if defender.form.as_ref().is_some_and(|form| form.revert_on_faint) {
        defender.revert_form();
    }
}

/// Runs `f` on each player's active battler, in player order.
fn for_each_active(players: &mut [Player], mut f: impl FnMut(&mut Battler)) {
    for player in players {
        if let Some(battler) = player.team.get_mut(player.active) {
            f(battler);
        }
    }
}

fn weather_chip(battler: &mut Battler, ctx: &BattleContext, lines: &mut Vec<String>) {
    if battler.is_fainted() {
        return;
    }
    if let (Some(weather), Some(chip)) = (ctx.weather, weather_damage(ctx.weather, battler)) {
        battler.take_damage(chip);
        lines.push(weather_damage_message(weather, &battler.name));
    }
}

fn residual_damage(battler: &mut Battler, service: &AbilityService<'_>, lines: &mut Vec<String>) {
    if battler.is_fainted() {
        return;
    }
    let negate_poison = service.negates_poison_damage(battler);
    match battler.status {
        Some(Status::Burn) => {
            battler.take_damage(battler.fraction_of_max_hp(16));
            lines.push(format!("{} was hurt by its burn!", battler.name));
        }
        Some(Status::Poison) if !negate_poison => {
            battler.take_damage(battler.fraction_of_max_hp(8));
            lines.push(format!("{} was hurt by poison!", battler.name));
        }
        Some(Status::Toxic) if !negate_poison => {
            let counter = battler.status_turns.max(1);
            let damage = ((battler.max_hp() as u32 * counter as u32 / 16) as u16).max(1);
            battler.take_damage(damage);
            battler.status_turns = (counter + 1).min(15);
            lines.push(format!("{} was hurt by poison!", battler.name));
        }
        _ => {}
    }
}

fn held_item_turn_end(battler: &mut Battler, lines: &mut Vec<String>) {
    if battler.is_fainted() {
        return;
    }
    match battle_items::end_of_turn_effect(battler) {
        Some(EndOfTurnEffect::Heal { amount, item }) => {
            if battler.heal(amount) > 0 {
                lines.push(format!("{} restored a little HP using its {}!", battler.name, item.name()));
            }
        }
        Some(EndOfTurnEffect::Damage { amount, item }) => {
            battler.take_damage(amount);
            lines.push(format!("{} was hurt by its {}!", battler.name, item.name()));
        }
        None => {}
    }
    if let Some(healed) = consumable::try_consume_sitrus_berry(battler) {
        lines.push(format!("{} restored {} HP with its Sitrus Berry!", battler.name, healed));
    }
}

fn turn_end_hooks(
    battler: &mut Battler,
    ctx: &BattleContext,
    service: &AbilityService<'_>,
    rng: &mut impl Rng,
    lines: &mut Vec<String>,
) {
    if !battler.is_fainted() {
        if let Some(result) = service.trigger_turn_end(battler, ctx) {
            lines.extend(result.messages);
            if result.heal_amount > 0 {
                battler.heal(result.heal_amount);
            }
            if result.damage_amount > 0 {
                battler.take_damage(result.damage_amount);
            }
            for (stat, delta) in result.stat_boosts {
                battler.modify_stat(stat, delta);
            }
            if result.cure_status
                && battler.status.is_some()
                && rng.gen_range(0..100u8) < result.cure_chance
            {
                if let Some(cured) = battler.cure_status() {
                    lines.push(format!("{}'s {} was cured!", battler.name, cured.name()));
                }
            }
        }
    }

    if !battler.is_fainted() {
        if let Some(change) = service.check_form_change(battler, FormTrigger::TurnEnd, None, ctx) {
            lines.extend(change.messages.iter().cloned());
            battler.apply_form(&change);
        }
    }

    if battler.dynamax_turns > 0 {
        battler.dynamax_turns -= 1;
        if battler.dynamax_turns == 0 && !battler.is_fainted() {
            lines.push(format!("{} returned to its normal size!", battler.name));
        }
    }
    battler.remove_volatile(Volatile::Flinch);
}

/// Move data for the given slot of a side's active battler.
pub fn active_move(battle: &Battle, side: Side, index: usize) -> Option<&MoveData> {
    battle
        .active(side)
        .and_then(|battler| battler.moves.get(index))
        .map(|mv| mv.data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::build;
    use crate::sim::weather_field::Weather;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ready_battle(one: &[u32], two: &[u32]) -> (Battle, AbilityRegistry) {
        let catalog = Catalog::builtin();
        let registry = AbilityRegistry::with_defaults();
        let mut battle = Battle::new(one.len());
        battle.add_player("p1", "Red").unwrap();
        battle.add_player("p2", "Blue").unwrap();
        for id in one {
            battle.select_creature("p1", &build(*id), &catalog, &registry).unwrap();
        }
        for id in two {
            battle.select_creature("p2", &build(*id), &catalog, &registry).unwrap();
        }
        (battle, registry)
    }

    #[test]
    fn join_and_team_errors() {
        let catalog = Catalog::builtin();
        let registry = AbilityRegistry::with_defaults();
        let mut battle = Battle::new(2);
        assert_eq!(battle.add_player("p1", "Red"), Ok(Side::One));
        assert_eq!(
            battle.add_player("p1", "Red"),
            Err(BattleError::AlreadyJoined("p1".into()))
        );
        assert!(matches!(
            battle.select_creature("p1", &build(6), &catalog, &registry),
            Err(BattleError::WrongPhase { .. })
        ));
        assert_eq!(battle.add_player("p2", "Blue"), Ok(Side::Two));
        assert_eq!(battle.add_player("p3", "Green"), Err(BattleError::MatchFull));
        assert_eq!(battle.phase(), BattlePhase::Choosing);

        battle.select_creature("p1", &build(6), &catalog, &registry).unwrap();
        assert!(matches!(
            battle.select_creature("p1", &build(6), &catalog, &registry),
            Err(BattleError::DuplicateSpecies(_))
        ));
        battle.select_creature("p1", &build(9), &catalog, &registry).unwrap();
        assert_eq!(
            battle.select_creature("p1", &build(3), &catalog, &registry),
            Err(BattleError::TeamFull)
        );
        assert_eq!(
            battle.select_creature("ghost", &build(3), &catalog, &registry),
            Err(BattleError::NotInBattle("ghost".into()))
        );
    }

    #[test]
    fn starts_when_both_teams_are_full() {
        let (battle, _) = ready_battle(&[6], &[9]);
        assert_eq!(battle.phase(), BattlePhase::Battling);
        assert_eq!(battle.turn(), 1);
        let lines = battle.log().lines();
        assert_eq!(lines[0], "Battle start!");
        assert_eq!(lines[1], "Red sent out Charizard!");
        assert_eq!(lines[2], "Blue sent out Blastoise!");
    }

    #[test]
    fn action_validation_leaves_state_untouched() {
        let (mut battle, _) = ready_battle(&[6], &[9]);
        assert_eq!(
            battle.set_action("p1", Action::attack(7)),
            Err(BattleError::InvalidMove(7))
        );
        assert!(battle.pending_action(Side::One).is_none());
        assert_eq!(battle.set_action("p1", Action::Switch(0)).map_err(|_| ()), Err(()));
        battle.set_action("p1", Action::attack(0)).unwrap();
        assert_eq!(
            battle.set_action("p1", Action::attack(1)),
            Err(BattleError::AlreadyActed)
        );
    }

    #[test]
    fn speed_decides_order_and_ties_favor_side_one() {
        let (battle, registry) = ready_battle(&[9], &[6]);
        let service = AbilityService::new(&registry);
        let order = battle.move_order(&[(Side::One, 0), (Side::Two, 0)], &service);
        assert_eq!(order[0].0, Side::Two);

        let (battle, registry) = ready_battle(&[6], &[6]);
        let service = AbilityService::new(&registry);
        let order = battle.move_order(&[(Side::Two, 0), (Side::One, 0)], &service);
        assert_eq!(order[0].0, Side::Two);
        let order = battle.move_order(&[(Side::One, 0), (Side::Two, 0)], &service);
        assert_eq!(order[0].0, Side::One);
    }

    #[test]
    fn forfeit_ends_the_battle() {
        let (mut battle, registry) = ready_battle(&[6], &[9]);
        let mut rng = SmallRng::seed_from_u64(1);
        battle.set_action("p1", Action::Forfeit).unwrap();
        battle.set_action("p2", Action::attack(0)).unwrap();
        let lines = battle.execute_turn(&registry, &mut rng);
        assert!(lines.contains(&"Red forfeited!".to_string()));
        assert_eq!(battle.winner(), Some(Side::Two));
        assert!(battle.is_finished());
        assert_eq!(
            battle.set_action("p1", Action::attack(0)),
            Err(BattleError::WrongPhase {
                expected: BattlePhase::Battling,
                actual: BattlePhase::Finished
            })
        );
    }

    #[test]
    fn forfeit_resolves_without_the_opponent() {
        let (mut battle, registry) = ready_battle(&[6], &[9]);
        let mut rng = SmallRng::seed_from_u64(7);
        let lines = battle.forfeit("p2", &registry, &mut rng).unwrap();
        assert_eq!(lines.last().map(String::as_str), Some("Red wins!"));
        assert_eq!(battle.winner(), Some(Side::One));
        assert_eq!(
            battle.forfeit("p1", &registry, &mut rng).map_err(|_| ()),
            Err(())
        );
    }

    #[test]
    fn recharge_skips_the_next_turn() {
        let mut battler = crate::sim::test_support::battler(6);
        battler.must_recharge = true;
        let mut defender = crate::sim::test_support::battler(9);
        let registry = AbilityRegistry::with_defaults();
        let service = AbilityService::new(&registry);
        let mut rng = SmallRng::seed_from_u64(2);
        let mut lines = Vec::new();
        run_move(&mut battler, &mut defender, 0, &BattleContext::default(), &service, &mut rng, &mut lines);
        assert_eq!(lines, vec!["Charizard must recharge!".to_string()]);
        assert!(!battler.must_recharge);
        assert!(defender.is_full_hp());
    }

    #[test]
    fn flinch_and_sleep_block_moves() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut battler = crate::sim::test_support::battler(143);
        battler.add_volatile(Volatile::Flinch);
        let mut lines = Vec::new();
        assert!(!can_act(&mut battler, &mut rng, &mut lines));
        assert!(!battler.has_volatile(Volatile::Flinch));

        battler.status = Some(Status::Sleep);
        battler.status_turns = 1;
        assert!(!can_act(&mut battler, &mut rng, &mut lines));
        assert!(can_act(&mut battler, &mut rng, &mut lines));
        assert_eq!(battler.status, None);
        assert_eq!(lines.last().map(String::as_str), Some("Snorlax woke up!"));
    }

    #[test]
    fn toxic_counter_escalates() {
        let registry = AbilityRegistry::with_defaults();
        let service = AbilityService::new(&registry);
        let mut battler = crate::sim::test_support::battler(143);
        battler.status = Some(Status::Toxic);
        battler.status_turns = 1;
        let max = battler.max_hp();
        let mut lines = Vec::new();
        residual_damage(&mut battler, &service, &mut lines);
        assert_eq!(max - battler.current_hp, max / 16);
        residual_damage(&mut battler, &service, &mut lines);
        assert_eq!(max - battler.current_hp, max / 16 + max * 2 / 16);
        assert_eq!(battler.status_turns, 3);
    }

    #[test]
    fn weather_chips_both_sides_before_turn_end_abilities() {
        let (mut battle, registry) = ready_battle(&[6], &[9]);
        let service = AbilityService::new(&registry);
        let mut rng = SmallRng::seed_from_u64(5);
        battle.players[0].team[0].ability = 3;
        battle.weather.set(Weather::Sand, 5);
        let start = battle.log.len();
        battle.end_of_turn(&service, &mut rng);
        let lines = battle.log.since(start);
        let position = |text: &str| lines.iter().position(|line| line == text).unwrap();
        let boost = position("Charizard's Speed Boost raised its speed!");
        assert!(position("Charizard is buffeted by the sandstorm!") < boost);
        assert!(position("Blastoise is buffeted by the sandstorm!") < boost);
    }

    #[test]
    fn turn_end_heal_sees_residual_damage() {
        let (mut battle, registry) = ready_battle(&[6], &[9]);
        let service = AbilityService::new(&registry);
        let mut rng = SmallRng::seed_from_u64(6);
        let blastoise = &mut battle.players[1].team[0];
        blastoise.ability = 44;
        blastoise.status = Some(Status::Burn);
        battle.weather.set(Weather::Rain, 5);
        let start = battle.log.len();
        battle.end_of_turn(&service, &mut rng);
        let lines = battle.log.since(start);
        let burn = lines.iter().position(|line| line == "Blastoise was hurt by its burn!").unwrap();
        let dish = lines
            .iter()
            .position(|line| line == "Blastoise's Rain Dish restored its HP!")
            .unwrap();
        assert!(burn < dish);
        assert!(battle.active(Side::Two).unwrap().is_full_hp());
    }
}
