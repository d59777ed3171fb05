use super::events::{BattleContext, TurnEndResult};
use super::registry::AbilityEffect;
use crate::sim::pokemon::{Battler, StageStat};
use crate::sim::weather_field::Weather;

pub(crate) fn on_turn_end(
    effect: AbilityEffect,
    battler: &Battler,
    ctx: &BattleContext,
) -> Option<TurnEndResult> {
    if battler.is_fainted() {
        return None;
    }
    let name = &battler.name;
    let result = match effect {
        AbilityEffect::SpeedBoost => TurnEndResult {
            messages: vec![format!("{name}'s Speed Boost raised its speed!")],
            stat_boosts: vec![(StageStat::Speed, 1)],
            ..TurnEndResult::default()
        },
        AbilityEffect::RainDish if ctx.is_weather(Weather::Rain) => {
            heal(battler, 16, format!("{name}'s Rain Dish restored its HP!"))?
        }
        AbilityEffect::IceBody if ctx.is_weather(Weather::Hail) => {
            heal(battler, 16, format!("{name}'s Ice Body restored its HP!"))?
        }
        AbilityEffect::DrySkin if ctx.is_weather(Weather::Rain) => {
            heal(battler, 8, format!("{name}'s Dry Skin restored its HP!"))?
        }
        AbilityEffect::DrySkin if ctx.is_weather(Weather::Sun) => TurnEndResult {
            messages: vec![format!("{name}'s Dry Skin hurts in the sun!")],
            damage_amount: battler.fraction_of_max_hp(8),
            ..TurnEndResult::default()
        },
        AbilityEffect::SolarPower if ctx.is_weather(Weather::Sun) => TurnEndResult {
            messages: vec![format!("{name} is hurt by Solar Power!")],
            damage_amount: battler.fraction_of_max_hp(8),
            ..TurnEndResult::default()
        },
        AbilityEffect::ShedSkin if battler.status.is_some() => TurnEndResult {
            cure_status: true,
            cure_chance: 30,
            ..TurnEndResult::default()
        },
        AbilityEffect::PoisonHeal if battler.status.is_some_and(|s| s.is_poison()) => {
            let heal_amount = if battler.is_full_hp() {
                0
            } else {
                battler.fraction_of_max_hp(8)
            };
            TurnEndResult {
                messages: if heal_amount > 0 {
                    vec![format!("{name}'s Poison Heal restored its HP!")]
                } else {
                    Vec::new()
                },
                heal_amount,
                negate_poison: true,
                ..TurnEndResult::default()
            }
        }
        AbilityEffect::Hydration if ctx.is_weather(Weather::Rain) && battler.status.is_some() => {
            TurnEndResult {
                cure_status: true,
                cure_chance: 100,
                ..TurnEndResult::default()
            }
        }
        _ => return None,
    };
    Some(result)
}

fn heal(battler: &Battler, divisor: u16, message: String) -> Option<TurnEndResult> {
    if battler.is_full_hp() {
        return None;
    }
    Some(TurnEndResult {
        messages: vec![message],
        heal_amount: battler.fraction_of_max_hp(divisor),
        ..TurnEndResult::default()
    })
}
