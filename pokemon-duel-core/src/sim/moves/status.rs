//! Applying move effects, stage changes and afflictions to battlers.

use crate::sim::abilities::{Affliction, AbilityService};
use crate::sim::moves::{EffectTarget, MoveEffect};
use crate::sim::pokemon::{Battler, StageStat, Volatile};
use rand::Rng;

pub(crate) fn stage_message(name: &str, stat: StageStat, delta: i8, changed: bool) -> String {
    let label = stat.label();
    if !changed {
        let direction = if delta > 0 { "higher" } else { "lower" };
        return format!("{name}'s {label} won't go any {direction}!");
    }
    let verb = match delta {
        d if d >= 3 => "rose drastically",
        2 => "rose sharply",
        1 => "rose",
        -1 => "fell",
        -2 => "harshly fell",
        _ => "severely fell",
    };
    format!("{name}'s {label} {verb}!")
}

pub(crate) fn apply_stage_changes(
    battler: &mut Battler,
    changes: &[(StageStat, i8)],
    lines: &mut Vec<String>,
) {
    if battler.is_fainted() {
        return;
    }
    for (stat, delta) in changes {
        let (_, changed) = battler.modify_stat(*stat, *delta);
        lines.push(stage_message(&battler.name, *stat, *delta, changed));
    }
}

/// Inflicts a status or volatile, honouring type and ability immunity.
/// Failures are only announced when `announce` is set.
pub(crate) fn inflict(
    target: &mut Battler,
    affliction: Affliction,
    service: &AbilityService<'_>,
    rng: &mut impl Rng,
    announce: bool,
    lines: &mut Vec<String>,
) -> bool {
    if target.is_fainted() {
        return false;
    }
    if let Some(check) = service.check_status_immunity(target, affliction) {
        if check.immune {
            if announce {
                lines.extend(check.message);
            }
            return false;
        }
    }
    let applied = match affliction {
        Affliction::Status(status) => {
            let applied = target.try_set_status(status, rng);
            if applied {
                lines.push(format!("{} was {}!", target.name, status.inflicted()));
            }
            applied
        }
        Affliction::Volatile(volatile) => {
            let applied = target.add_volatile(volatile);
            if applied {
                match volatile {
                    Volatile::Flinch => {}
                    Volatile::Confusion => lines.push(format!("{} became confused!", target.name)),
                    Volatile::Infatuation => lines.push(format!("{} fell in love!", target.name)),
                    other => lines.push(format!("{} is affected by {}!", target.name, other.name())),
                }
            }
            applied
        }
    };
    if !applied && announce {
        lines.push("But it failed!".to_string());
    }
    applied
}

/// Runs a move's effect. `primary` is set for status moves, whose failures
/// are announced.
pub(crate) fn apply_move_effect(
    effect: MoveEffect,
    attacker: &mut Battler,
    defender: &mut Battler,
    service: &AbilityService<'_>,
    rng: &mut impl Rng,
    primary: bool,
    lines: &mut Vec<String>,
) {
    match effect {
        MoveEffect::None => {}
        MoveEffect::StatChange {
            target,
            stat,
            stages,
        } => {
            let battler = match target {
                EffectTarget::SelfSide => attacker,
                EffectTarget::Target => defender,
            };
            apply_stage_changes(battler, &[(stat, stages)], lines);
        }
        MoveEffect::Status(status) => {
            if primary && defender.status.is_some() {
                lines.push("But it failed!".to_string());
                return;
            }
            inflict(defender, Affliction::Status(status), service, rng, primary, lines);
        }
        MoveEffect::Volatile(volatile) => {
            inflict(defender, Affliction::Volatile(volatile), service, rng, primary, lines);
        }
        MoveEffect::FocusEnergy => {
            if attacker.add_volatile(Volatile::FocusEnergy) {
                lines.push(format!("{} is getting pumped!", attacker.name));
            } else {
                lines.push("But it failed!".to_string());
            }
        }
        MoveEffect::HealPercent(percent) => {
            let amount = (attacker.max_hp() as u32 * percent as u32 / 100) as u16;
            if attacker.heal(amount.max(1)) > 0 {
                lines.push(format!("{} restored its HP!", attacker.name));
            } else {
                lines.push(format!("{}'s HP is full!", attacker.name));
            }
        }
        MoveEffect::ShieldStance => {
            lines.push(format!("{} raised its shield!", attacker.name));
        }
    }
}
