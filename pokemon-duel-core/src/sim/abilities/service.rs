use super::events::{
    Affliction, BattleContext, DamageModifier, EntryResult, FormChangeResult, FormTrigger,
    HitResult, KnockoutResult, PriorityModifier, SpeedModifier, StatusCheckResult, TurnEndResult,
};
use super::registry::{AbilityEffect, AbilityRegistry};
use super::{contact, damage_modifiers, entry, form_change, misc_abilities, status_abilities, turn_end};
use crate::data::abilities::ability_name;
use crate::data::types::effectiveness;
use crate::sim::moves::MoveData;
use crate::sim::pokemon::{Battler, StageStat};
use tracing::debug;

/// Combined ability factors for one attack.
#[derive(Clone, Debug, PartialEq)]
pub struct AbilityDamageMods {
    pub power: f64,
    pub attack: f64,
    pub defense: f64,
    pub damage: f64,
    pub stab: f64,
    pub crit: f64,
    pub immune: bool,
    pub heal_percent: u8,
    pub messages: Vec<String>,
}

impl Default for AbilityDamageMods {
    fn default() -> Self {
        Self {
            power: 1.0,
            attack: 1.0,
            defense: 1.0,
            damage: 1.0,
            stab: 1.0,
            crit: 1.0,
            immune: false,
            heal_percent: 0,
            messages: Vec::new(),
        }
    }
}

impl AbilityDamageMods {
    fn fold(&mut self, modifier: &DamageModifier) {
        self.power *= modifier.power_mult;
        self.attack *= modifier.attack_mult;
        self.defense *= modifier.defense_mult;
        self.damage *= modifier.damage_mult;
        self.stab *= modifier.stab_mult;
        self.crit *= modifier.crit_mult;
    }

    /// `power * attack / defense * damage`. STAB and crit factors are already
    /// part of the battler's own calculation.
    pub fn total(&self) -> f64 {
        self.power * self.attack / self.defense * self.damage
    }
}

/// Trigger dispatch over a borrowed registry.
#[derive(Clone, Copy, Debug)]
pub struct AbilityService<'r> {
    registry: &'r AbilityRegistry,
}

impl<'r> AbilityService<'r> {
    pub fn new(registry: &'r AbilityRegistry) -> Self {
        Self { registry }
    }

    pub fn effect_of(&self, battler: &Battler) -> Option<AbilityEffect> {
        self.registry.get(battler.effective_ability())
    }

    pub fn has_effect(&self, battler: &Battler, effect: AbilityEffect) -> bool {
        self.effect_of(battler) == Some(effect)
    }

    /// A Trace holder copies the opponent's ability and runs its entry
    /// handler right away.
    pub fn trigger_entry(
        &self,
        this: &Battler,
        other: &Battler,
        ctx: &BattleContext,
    ) -> Option<EntryResult> {
        let effect = self.effect_of(this)?;
        let mut result = entry::on_entry(effect, this, other, ctx)?;
        if let Some(traced) = result.traced_ability {
            if let Some(copied) = self.registry.get(traced) {
                if copied != AbilityEffect::Trace {
                    let mut tracer = this.clone();
                    tracer.traced_ability = Some(traced);
                    if let Some(chained) = entry::on_entry(copied, &tracer, other, ctx) {
                        result.absorb(chained);
                    }
                }
            }
        }
        debug!(battler = %this.name, ?effect, "entry ability");
        Some(result)
    }

    pub fn attacker_damage_mods(
        &self,
        attacker: &Battler,
        defender: &Battler,
        move_data: &MoveData,
        ctx: &BattleContext,
    ) -> Option<DamageModifier> {
        let effect = self.effect_of(attacker)?;
        let eff = effectiveness(move_data.move_type, &defender.defending_types());
        damage_modifiers::attacker_modifier(effect, attacker, move_data, eff, ctx)
    }

    pub fn defender_damage_mods(
        &self,
        defender: &Battler,
        move_data: &MoveData,
        ctx: &BattleContext,
    ) -> Option<DamageModifier> {
        let effect = self.effect_of(defender)?;
        let eff = effectiveness(move_data.move_type, &defender.defending_types());
        damage_modifiers::defender_modifier(effect, defender, move_data, eff, ctx)
    }

    pub fn trigger_being_hit(
        &self,
        defender: &Battler,
        attacker: &Battler,
        move_data: &MoveData,
        ctx: &BattleContext,
    ) -> Option<HitResult> {
        let effect = self.effect_of(defender)?;
        contact::on_being_hit(effect, defender, attacker, move_data, ctx)
    }

    pub fn trigger_turn_end(&self, battler: &Battler, ctx: &BattleContext) -> Option<TurnEndResult> {
        let effect = self.effect_of(battler)?;
        turn_end::on_turn_end(effect, battler, ctx)
    }

    pub fn check_status_immunity(
        &self,
        battler: &Battler,
        affliction: Affliction,
    ) -> Option<StatusCheckResult> {
        let effect = self.effect_of(battler)?;
        status_abilities::check_immunity(effect, battler, affliction)
    }

    pub fn speed_modifier(&self, battler: &Battler, ctx: &BattleContext) -> SpeedModifier {
        self.effect_of(battler)
            .and_then(|effect| misc_abilities::speed_modifier(effect, battler, ctx))
            .unwrap_or_default()
    }

    pub fn priority_modifier(
        &self,
        battler: &Battler,
        move_data: &MoveData,
        _ctx: &BattleContext,
    ) -> PriorityModifier {
        self.effect_of(battler)
            .and_then(|effect| misc_abilities::priority_modifier(effect, battler, move_data))
            .unwrap_or_default()
    }

    pub fn trigger_knockout(&self, battler: &Battler, _ctx: &BattleContext) -> Option<KnockoutResult> {
        let effect = self.effect_of(battler)?;
        misc_abilities::on_knockout(effect, battler)
    }

    pub fn check_form_change(
        &self,
        battler: &Battler,
        trigger: FormTrigger,
        move_data: Option<&MoveData>,
        _ctx: &BattleContext,
    ) -> Option<FormChangeResult> {
        let effect = self.effect_of(battler)?;
        form_change::check_form_change(effect, battler, trigger, move_data)
    }

    /// Stage boost granted when the defender's immunity absorbs a move.
    pub fn absorb_boost(&self, defender: &Battler) -> Option<(StageStat, i8)> {
        self.effect_of(defender).and_then(damage_modifiers::absorb_boost)
    }

    /// Secondary effects are dropped for attackers with Sheer Force.
    pub fn suppresses_secondary(&self, attacker: &Battler) -> bool {
        self.has_effect(attacker, AbilityEffect::SheerForce)
    }

    /// Poison Heal turns poison residuals into healing.
    pub fn negates_poison_damage(&self, battler: &Battler) -> bool {
        self.has_effect(battler, AbilityEffect::PoisonHeal)
    }

    pub fn calculate_damage_with_abilities(
        &self,
        attacker: &Battler,
        defender: &Battler,
        move_data: &MoveData,
        ctx: &BattleContext,
    ) -> AbilityDamageMods {
        let mut mods = AbilityDamageMods::default();
        if let Some(defending) = self.defender_damage_mods(defender, move_data, ctx) {
            if defending.immune {
                let name = ability_name(defender.effective_ability()).unwrap_or("Its ability");
                mods.immune = true;
                mods.heal_percent = defending.heal_percent;
                mods.messages
                    .push(format!("{name} made the attack ineffective!"));
                return mods;
            }
            mods.fold(&defending);
        }
        if let Some(attacking) = self.attacker_damage_mods(attacker, defender, move_data, ctx) {
            mods.fold(&attacking);
        }
        mods
    }

    pub fn effective_speed(&self, battler: &Battler, base: u32, ctx: &BattleContext) -> u32 {
        (base as f64 * self.speed_modifier(battler, ctx).multiplier).floor() as u32
    }

    pub fn effective_priority(
        &self,
        battler: &Battler,
        move_data: &MoveData,
        base: i8,
        ctx: &BattleContext,
    ) -> i8 {
        let modifier = self.priority_modifier(battler, move_data, ctx);
        if modifier.applies {
            base.saturating_add(modifier.bonus)
        } else {
            base
        }
    }
}
