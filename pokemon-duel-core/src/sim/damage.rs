use crate::data::types::effectiveness;
use crate::sim::abilities::registry::ids::{ADAPTABILITY, GUTS, SNIPER};
use crate::sim::items::battle_items;
use crate::sim::moves::{MoveCategory, MoveData};
use crate::sim::pokemon::{Battler, StageStat, Status};
use crate::sim::stats::apply_stage;
use rand::Rng;

/// Crit odds (1 in n) by crit stage.
pub const CRIT_CHANCES: [u32; 4] = [24, 8, 2, 1];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageResult {
    pub damage: u32,
    pub effectiveness: f64,
    pub hit: bool,
    pub critical: bool,
}

impl DamageResult {
    fn miss(effectiveness: f64) -> Self {
        Self {
            damage: 0,
            effectiveness,
            hit: false,
            critical: false,
        }
    }
}

/// Dynamax power for a move's base power.
pub fn max_power(base_power: u16) -> u16 {
    match base_power {
        0..=39 => 90,
        40..=49 => 100,
        50..=59 => 110,
        60..=69 => 120,
        70..=99 => 130,
        100..=139 => 140,
        _ => 150,
    }
}

/// `floor((floor(2L/5) + 2) * P * A / D / 50) + 2`
pub fn base_damage(level: u8, power: u16, attack: f64, defense: f64) -> f64 {
    let level_factor = (2 * level as u32 / 5 + 2) as f64;
    (level_factor * power as f64 * attack / defense.max(1.0) / 50.0).floor() + 2.0
}

impl Battler {
    pub fn calculate_damage(
        &self,
        move_data: &MoveData,
        target: &Battler,
        rng: &mut impl Rng,
    ) -> DamageResult {
        let type_mult = effectiveness(move_data.move_type, &target.defending_types());

        if move_data.accuracy > 0 {
            let stage = self
                .stages
                .get(StageStat::Accuracy)
                .saturating_sub(target.stages.get(StageStat::Evasion));
            let threshold = move_data.accuracy as u32 * apply_stage(100, stage) as u32 / 100;
            let roll: u32 = rng.gen_range(0..100);
            if roll >= threshold {
                return DamageResult::miss(type_mult);
            }
        }

        if move_data.category == MoveCategory::Status {
            return DamageResult {
                damage: 0,
                effectiveness: 1.0,
                hit: true,
                critical: false,
            };
        }

        let (attack_stat, defense_stat) = match move_data.category {
            MoveCategory::Physical => (StageStat::Attack, StageStat::Defense),
            _ => (StageStat::SpAttack, StageStat::SpDefense),
        };
        let mut attack = self.staged_stat(attack_stat) as f64;
        if move_data.category == MoveCategory::Physical
            && self.status == Some(Status::Burn)
            && self.effective_ability() != GUTS
        {
            attack *= 0.5;
        }
        attack *= battle_items::attack_stat_modifier(self, move_data.category);
        let defense = target.staged_stat(defense_stat) as f64
            * battle_items::defense_stat_modifier(target, move_data.category);

        let power = if self.is_dynamaxed() {
            max_power(move_data.power)
        } else {
            move_data.power
        };
        let base = base_damage(self.level, power, attack, defense);

        let stab = if self.is_stab(move_data.move_type) {
            if self.effective_ability() == ADAPTABILITY {
                2.0
            } else {
                1.5
            }
        } else {
            1.0
        };

        let random = rng.gen_range(85..=100) as f64 / 100.0;

        let crit_stage = self.crit_stage().min(CRIT_CHANCES.len() - 1);
        let critical = rng.gen_range(0..CRIT_CHANCES[crit_stage]) == 0;
        let crit_mult = match (critical, self.effective_ability() == SNIPER) {
            (false, _) => 1.0,
            (true, false) => 1.5,
            (true, true) => 2.25,
        };

        let item_mult = battle_items::power_modifier(self, move_data, type_mult);

        let raw = (base * type_mult * stab * random * crit_mult * item_mult).floor();
        let damage = if type_mult > 0.0 { raw.max(1.0) as u32 } else { 0 };
        DamageResult {
            damage,
            effectiveness: type_mult,
            hit: true,
            critical,
        }
    }
}
