use crate::sim::abilities::AbilityService;
use crate::sim::battle::{Battle, Player, Side};
use crate::sim::pokemon::Battler;
use crate::sim::switching;
use tracing::debug;

fn active_fainted(player: &Player) -> bool {
    player.active().is_some_and(Battler::is_fainted)
}

/// Decides the outcome when at least one side is out of usable creatures.
/// Both sides out goes to `last_actor`; `None` there is a draw.
pub fn decide_winner(players: &[Player], last_actor: Option<Side>) -> Option<Option<Side>> {
    let out: Vec<Side> = Side::BOTH
        .into_iter()
        .filter(|side| players.get(side.index()).is_some_and(|player| !player.has_usable()))
        .collect();
    match out.as_slice() {
        [] => None,
        [loser] => Some(Some(loser.opponent())),
        _ => Some(last_actor),
    }
}

/// Announces fainted actives, ends the battle when a side is wiped out and
/// otherwise sends in replacements. Returns true when the battle ended.
pub(crate) fn resolve_faints(
    battle: &mut Battle,
    service: &AbilityService<'_>,
    last_actor: Option<Side>,
) -> bool {
    let fainted: Vec<Side> = Side::BOTH
        .into_iter()
        .filter(|side| battle.players.get(side.index()).is_some_and(active_fainted))
        .collect();
    if fainted.is_empty() {
        return false;
    }
    for side in &fainted {
        if let Some(battler) = battle.active(*side) {
            debug!(creature = %battler.name, ?side, "fainted");
            let line = format!("{} fainted!", battler.name);
            battle.log.push(line);
        }
    }
    if let Some(winner) = decide_winner(&battle.players, last_actor) {
        battle.finish(winner);
        return true;
    }
    for side in fainted {
        switching::send_replacement(battle, side, service);
    }
    false
}
