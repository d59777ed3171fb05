use super::events::{BattleContext, KnockoutResult, PriorityModifier, SpeedModifier};
use super::registry::AbilityEffect;
use crate::data::types::Type;
use crate::sim::moves::MoveData;
use crate::sim::pokemon::{Battler, StageStat};
use crate::sim::weather_field::Weather;

pub(crate) fn speed_modifier(
    effect: AbilityEffect,
    battler: &Battler,
    ctx: &BattleContext,
) -> Option<SpeedModifier> {
    let multiplier = match effect {
        AbilityEffect::SwiftSwim if ctx.is_weather(Weather::Rain) => 2.0,
        AbilityEffect::Chlorophyll if ctx.is_weather(Weather::Sun) => 2.0,
        AbilityEffect::SandRush if ctx.is_weather(Weather::Sand) => 2.0,
        AbilityEffect::SlushRush if ctx.is_weather(Weather::Hail) => 2.0,
        AbilityEffect::QuickFeet if battler.status.is_some() => 1.5,
        _ => return None,
    };
    Some(SpeedModifier { multiplier })
}

pub(crate) fn priority_modifier(
    effect: AbilityEffect,
    battler: &Battler,
    move_data: &MoveData,
) -> Option<PriorityModifier> {
    let bonus = match effect {
        AbilityEffect::Prankster if move_data.is_status() => 1,
        AbilityEffect::GaleWings if move_data.move_type == Type::Flying && battler.is_full_hp() => 1,
        AbilityEffect::Triage if move_data.is_healing() => 3,
        _ => return None,
    };
    Some(PriorityModifier {
        bonus,
        applies: true,
    })
}

/// `this` just knocked out an opponent.
pub(crate) fn on_knockout(effect: AbilityEffect, this: &Battler) -> Option<KnockoutResult> {
    let (ability, stat) = match effect {
        AbilityEffect::Moxie => ("Moxie", StageStat::Attack),
        AbilityEffect::BeastBoost => ("Beast Boost", highest_stat(this)),
        AbilityEffect::SoulHeart => ("Soul-Heart", StageStat::SpAttack),
        AbilityEffect::ChillingNeigh => ("Chilling Neigh", StageStat::Attack),
        AbilityEffect::GrimNeigh => ("Grim Neigh", StageStat::SpAttack),
        _ => return None,
    };
    Some(KnockoutResult {
        messages: vec![format!(
            "{}'s {ability} raised its {}!",
            this.name,
            stat.label()
        )],
        stat_boosts: vec![(stat, 1)],
    })
}

/// Earlier stats win ties.
fn highest_stat(battler: &Battler) -> StageStat {
    let candidates = [
        StageStat::Attack,
        StageStat::Defense,
        StageStat::SpAttack,
        StageStat::SpDefense,
        StageStat::Speed,
    ];
    let mut best = StageStat::Attack;
    let mut best_value = 0;
    for stat in candidates {
        let value = battler.staged_stat(stat);
        if value > best_value {
            best = stat;
            best_value = value;
        }
    }
    best
}
