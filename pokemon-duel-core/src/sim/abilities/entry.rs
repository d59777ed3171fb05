use super::events::{BattleContext, EntryResult};
use super::registry::ids;
use super::registry::AbilityEffect;
use crate::data::abilities::ability_name;
use crate::data::items::item_name;
use crate::sim::pokemon::{Battler, StageStat};
use crate::sim::weather_field::Weather;

/// Abilities that shrug off Intimidate.
const INTIMIDATE_BLOCKERS: [u32; 4] = [
    ids::INNER_FOCUS,
    ids::OWN_TEMPO,
    ids::OBLIVIOUS,
    ids::SCRAPPY,
];

pub(crate) fn on_entry(
    effect: AbilityEffect,
    this: &Battler,
    other: &Battler,
    _ctx: &BattleContext,
) -> Option<EntryResult> {
    let result = match effect {
        AbilityEffect::Intimidate => intimidate(this, other),
        AbilityEffect::Drizzle => set_weather(this, "Drizzle", Weather::Rain),
        AbilityEffect::Drought => set_weather(this, "Drought", Weather::Sun),
        AbilityEffect::SandStream => set_weather(this, "Sand Stream", Weather::Sand),
        AbilityEffect::SnowWarning => set_weather(this, "Snow Warning", Weather::Hail),
        AbilityEffect::Pressure => {
            EntryResult::message(format!("{} is exerting its pressure!", this.name))
        }
        AbilityEffect::Unnerve => EntryResult::message(format!(
            "{}'s team is too nervous to eat berries!",
            other.name
        )),
        AbilityEffect::Download => {
            let boosted = if other.staged_stat(StageStat::Defense)
                < other.staged_stat(StageStat::SpDefense)
            {
                StageStat::Attack
            } else {
                StageStat::SpAttack
            };
            EntryResult {
                messages: vec![format!("{}'s Download activated!", this.name)],
                self_stat_changes: vec![(boosted, 1)],
                ..EntryResult::default()
            }
        }
        AbilityEffect::IntrepidSword => EntryResult {
            messages: vec![format!("{}'s Intrepid Sword activated!", this.name)],
            self_stat_changes: vec![(StageStat::Attack, 1)],
            ..EntryResult::default()
        },
        AbilityEffect::DauntlessShield => EntryResult {
            messages: vec![format!("{}'s Dauntless Shield activated!", this.name)],
            self_stat_changes: vec![(StageStat::Defense, 1)],
            ..EntryResult::default()
        },
        AbilityEffect::Frisk => {
            let item = other.item.filter(|_| !other.item_consumed)?;
            let item = item_name(item).unwrap_or("an item");
            EntryResult::message(format!(
                "{} frisked {} and found its {item}!",
                this.name, other.name
            ))
        }
        AbilityEffect::Trace => trace(this, other)?,
        _ => return None,
    };
    Some(result)
}

fn intimidate(this: &Battler, other: &Battler) -> EntryResult {
    let blocker = other.effective_ability();
    if INTIMIDATE_BLOCKERS.contains(&blocker) {
        let name = ability_name(blocker).unwrap_or("ability");
        return EntryResult::message(format!(
            "{}'s {name} prevents it from being intimidated!",
            other.name
        ));
    }
    EntryResult {
        messages: vec![format!("{}'s Intimidate cuts {}'s attack!", this.name, other.name)],
        opponent_stat_changes: vec![(StageStat::Attack, -1)],
        ..EntryResult::default()
    }
}

fn set_weather(this: &Battler, ability: &str, weather: Weather) -> EntryResult {
    EntryResult {
        messages: vec![format!("{}'s {ability} activated!", this.name)],
        weather_to_set: Some(weather),
        ..EntryResult::default()
    }
}

/// Nothing to copy from an opponent without a nameable ability or with Trace.
fn trace(this: &Battler, other: &Battler) -> Option<EntryResult> {
    let target = other.effective_ability();
    if target == ids::TRACE {
        return None;
    }
    let name = ability_name(target)?;
    Some(EntryResult {
        messages: vec![format!("{} traced {name}!", this.name)],
        traced_ability: Some(target),
        ..EntryResult::default()
    })
}
