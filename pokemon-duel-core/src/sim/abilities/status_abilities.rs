use super::events::{Affliction, StatusCheckResult};
use super::registry::AbilityEffect;
use crate::data::abilities::ability_name;
use crate::sim::pokemon::{Battler, Status, Volatile};

fn blocks(effect: AbilityEffect, affliction: Affliction) -> bool {
    use Affliction::{Status as S, Volatile as V};
    matches!(
        (effect, affliction),
        (AbilityEffect::Immunity, S(Status::Poison | Status::Toxic))
            | (AbilityEffect::Limber, S(Status::Paralysis))
            | (AbilityEffect::Insomnia | AbilityEffect::VitalSpirit, S(Status::Sleep))
            | (AbilityEffect::MagmaArmor, S(Status::Freeze))
            | (AbilityEffect::WaterVeil, S(Status::Burn))
            | (AbilityEffect::OwnTempo, V(Volatile::Confusion))
            | (AbilityEffect::Oblivious, V(Volatile::Infatuation))
            | (AbilityEffect::InnerFocus, V(Volatile::Flinch))
    )
}

pub(crate) fn check_immunity(
    effect: AbilityEffect,
    battler: &Battler,
    affliction: Affliction,
) -> Option<StatusCheckResult> {
    if !blocks(effect, affliction) {
        return None;
    }
    let ability = ability_name(battler.effective_ability()).unwrap_or("ability");
    Some(StatusCheckResult {
        immune: true,
        message: Some(format!(
            "{}'s {ability} prevents {}!",
            battler.name,
            affliction.name()
        )),
    })
}
