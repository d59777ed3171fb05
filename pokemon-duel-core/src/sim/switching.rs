use crate::error::{BattleError, BattleResult};
use crate::sim::abilities::AbilityService;
use crate::sim::battle::{actives_mut, Battle, Player, Side};
use crate::sim::moves::status::apply_stage_changes;
use tracing::debug;

/// Only a living benched team member can come in.
pub fn validate_switch(player: &Player, index: usize) -> BattleResult<()> {
    let target = player.team.get(index).ok_or(BattleError::InvalidSwitch(index))?;
    if index == player.active {
        return Err(BattleError::AlreadyActive(target.name.clone()));
    }
    if target.is_fainted() {
        return Err(BattleError::FaintedTarget(target.name.clone()));
    }
    Ok(())
}

/// First living team member other than the active one, in team order.
pub fn next_living(player: &Player) -> Option<usize> {
    player
        .team
        .iter()
        .enumerate()
        .find(|(index, battler)| *index != player.active && !battler.is_fainted())
        .map(|(index, _)| index)
}

/// Voluntary switch chosen as the turn's action.
pub(crate) fn switch_in(battle: &mut Battle, side: Side, index: usize, service: &AbilityService<'_>) {
    let player = &mut battle.players[side.index()];
    if validate_switch(player, index).is_err() {
        return;
    }
    let outgoing = player.active;
    if let Some(leaving) = player.team.get_mut(outgoing) {
        leaving.reset_on_switch_out();
        let line = format!("{} withdrew {}!", player.name, leaving.name);
        battle.log.push(line);
    }
    bring_in(battle, side, index, service);
}

/// Replaces a fainted active battler. Returns false when nobody is left.
pub(crate) fn send_replacement(battle: &mut Battle, side: Side, service: &AbilityService<'_>) -> bool {
    let player = &battle.players[side.index()];
    let Some(index) = next_living(player) else {
        return false;
    };
    bring_in(battle, side, index, service);
    true
}

fn bring_in(battle: &mut Battle, side: Side, index: usize, service: &AbilityService<'_>) {
    let player = &mut battle.players[side.index()];
    player.active = index;
    if let Some(incoming) = player.team.get(index) {
        debug!(player = %player.name, creature = %incoming.name, "switching in");
        let line = format!("{} sent out {}!", player.name, incoming.name);
        battle.log.push(line);
    }
    fire_entry(battle, side, service);
}

/// Runs the entering battler's entry ability against the opposing active.
pub(crate) fn fire_entry(battle: &mut Battle, side: Side, service: &AbilityService<'_>) {
    let ctx = battle.context();
    let Some((this, other)) = actives_mut(&mut battle.players, side) else {
        return;
    };
    if this.is_fainted() {
        return;
    }
    let Some(result) = service.trigger_entry(this, other, &ctx) else {
        return;
    };
    let mut lines = result.messages;
    if let Some(traced) = result.traced_ability {
        this.traced_ability = Some(traced);
    }
    apply_stage_changes(this, &result.self_stat_changes, &mut lines);
    apply_stage_changes(other, &result.opponent_stat_changes, &mut lines);
    if let Some(weather) = result.weather_to_set {
        if battle.weather.set(weather, battle.weather_turns) {
            lines.push(weather.start_message().to_string());
        }
    }
    battle.log.extend(lines);
}
