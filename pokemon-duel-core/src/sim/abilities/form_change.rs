use super::events::{FormChangeResult, FormTrigger};
use super::registry::AbilityEffect;
use crate::data::types::Type;
use crate::sim::moves::{MoveData, MoveEffect};
use crate::sim::pokemon::Battler;
use crate::sim::stats::Stat;

pub const ASH_GRENINJA: u32 = 10116;
pub const DARMANITAN_ZEN: u32 = 10017;
pub const ZYGARDE_COMPLETE: u32 = 10118;
pub const AEGISLASH_BLADE: u32 = 10026;
pub const AEGISLASH_SHIELD: u32 = 681;

pub(crate) fn check_form_change(
    effect: AbilityEffect,
    battler: &Battler,
    trigger: FormTrigger,
    move_data: Option<&MoveData>,
) -> Option<FormChangeResult> {
    match (effect, trigger) {
        (AbilityEffect::BattleBond, FormTrigger::Knockout)
            if !battler.battle_bond_spent && battler.form.is_none() =>
        {
            Some(FormChangeResult {
                triggered: true,
                new_species_id: ASH_GRENINJA,
                new_form_name: "Ash-Greninja".to_string(),
                new_types: vec![Type::Water, Type::Dark],
                stat_boosts: vec![(Stat::Atk, 50), (Stat::Spa, 50), (Stat::Spe, 10)],
                messages: vec![
                    format!("{} became fully charged due to its bond with its trainer!", battler.name),
                    format!("{} became Ash-Greninja!", battler.name),
                ],
                revert_on_switch_out: true,
                revert_on_faint: true,
            })
        }
        (AbilityEffect::ZenMode, FormTrigger::TurnEnd) if at_half(battler) => {
            Some(FormChangeResult {
                triggered: true,
                new_species_id: DARMANITAN_ZEN,
                new_form_name: "Darmanitan-Zen".to_string(),
                new_types: vec![Type::Fire, Type::Psychic],
                stat_boosts: vec![(Stat::Atk, -60), (Stat::Spa, 90), (Stat::Spe, 55)],
                messages: vec![format!("{} triggered Zen Mode!", battler.name)],
                revert_on_switch_out: true,
                revert_on_faint: true,
            })
        }
        (AbilityEffect::PowerConstruct, FormTrigger::TurnEnd) if at_half(battler) => {
            Some(FormChangeResult {
                triggered: true,
                new_species_id: ZYGARDE_COMPLETE,
                new_form_name: "Zygarde-Complete".to_string(),
                new_types: vec![Type::Dragon, Type::Ground],
                stat_boosts: vec![(Stat::Hp, 108)],
                messages: vec![
                    "You sense the presence of many!".to_string(),
                    format!("{} transformed into its Complete Forme!", battler.name),
                ],
                revert_on_switch_out: true,
                revert_on_faint: false,
            })
        }
        (AbilityEffect::StanceChange, FormTrigger::BeforeMove) => {
            stance_change(battler, move_data?)
        }
        _ => None,
    }
}

fn at_half(battler: &Battler) -> bool {
    battler.form.is_none()
        && !battler.is_fainted()
        && battler.current_hp as u32 * 2 <= battler.max_hp() as u32
}

fn stance_change(battler: &Battler, move_data: &MoveData) -> Option<FormChangeResult> {
    let blade = battler.current_species_id() == AEGISLASH_BLADE;
    if !blade && !move_data.is_status() {
        return Some(FormChangeResult {
            triggered: true,
            new_species_id: AEGISLASH_BLADE,
            new_form_name: "Aegislash-Blade".to_string(),
            new_types: battler.types.clone(),
            stat_boosts: vec![
                (Stat::Atk, 100),
                (Stat::Def, -100),
                (Stat::Spa, 100),
                (Stat::Spd, -100),
            ],
            messages: vec![format!("{} changed to Blade Forme!", battler.name)],
            revert_on_switch_out: true,
            revert_on_faint: false,
        });
    }
    if blade && move_data.effect == MoveEffect::ShieldStance {
        return Some(FormChangeResult {
            triggered: true,
            new_species_id: AEGISLASH_SHIELD,
            new_form_name: "Aegislash-Shield".to_string(),
            new_types: battler.types.clone(),
            messages: vec![format!("{} changed to Shield Forme!", battler.name)],
            ..FormChangeResult::default()
        });
    }
    None
}
