use crate::data::types::Type;
use crate::sim::pokemon::{StageStat, Status, Volatile};
use crate::sim::stats::Stat;
use crate::sim::weather_field::{Terrain, Weather};
use serde::Serialize;

/// Field state handed to every handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleContext {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub turn: u32,
}

impl BattleContext {
    pub fn is_weather(&self, weather: Weather) -> bool {
        self.weather == Some(weather)
    }
}

/// Anything an ability can inflict or block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Affliction {
    Status(Status),
    Volatile(Volatile),
}

impl Affliction {
    pub const fn name(self) -> &'static str {
        match self {
            Affliction::Status(status) => status.name(),
            Affliction::Volatile(volatile) => volatile.name(),
        }
    }
}

/// Points where a form-change ability is consulted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormTrigger {
    BeforeMove,
    TurnEnd,
    Knockout,
}

pub type StageChanges = Vec<(StageStat, i8)>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryResult {
    pub messages: Vec<String>,
    pub weather_to_set: Option<Weather>,
    pub opponent_stat_changes: StageChanges,
    pub self_stat_changes: StageChanges,
    pub traced_ability: Option<u32>,
}

impl EntryResult {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            ..Self::default()
        }
    }

    pub(crate) fn absorb(&mut self, other: EntryResult) {
        self.messages.extend(other.messages);
        self.weather_to_set = other.weather_to_set.or(self.weather_to_set);
        self.opponent_stat_changes.extend(other.opponent_stat_changes);
        self.self_stat_changes.extend(other.self_stat_changes);
    }
}

/// Multiplicative factors contributed by one side of an attack.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageModifier {
    pub power_mult: f64,
    pub attack_mult: f64,
    pub defense_mult: f64,
    pub damage_mult: f64,
    pub stab_mult: f64,
    pub crit_mult: f64,
    pub immune: bool,
    pub heal_percent: u8,
    pub type_override: Option<Type>,
}

impl Default for DamageModifier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl DamageModifier {
    pub const NEUTRAL: DamageModifier = DamageModifier {
        power_mult: 1.0,
        attack_mult: 1.0,
        defense_mult: 1.0,
        damage_mult: 1.0,
        stab_mult: 1.0,
        crit_mult: 1.0,
        immune: false,
        heal_percent: 0,
        type_override: None,
    };

    pub fn power(mult: f64) -> Self {
        Self {
            power_mult: mult,
            ..Self::NEUTRAL
        }
    }

    pub fn attack(mult: f64) -> Self {
        Self {
            attack_mult: mult,
            ..Self::NEUTRAL
        }
    }

    pub fn defense(mult: f64) -> Self {
        Self {
            defense_mult: mult,
            ..Self::NEUTRAL
        }
    }

    pub fn damage(mult: f64) -> Self {
        Self {
            damage_mult: mult,
            ..Self::NEUTRAL
        }
    }

    pub fn immunity(heal_percent: u8) -> Self {
        Self {
            immune: true,
            heal_percent,
            ..Self::NEUTRAL
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HitResult {
    pub messages: Vec<String>,
    /// Share of the damage just taken that is given back.
    pub damage_reduction_pct: u8,
    /// Inflicted on the attacker when `roll < contact_chance`.
    pub contact_status: Option<Affliction>,
    pub contact_chance: u8,
    pub recoil_damage: u16,
    /// Applied to the attacker.
    pub stat_changes: StageChanges,
    pub disable_chance: u8,
    /// Applied to the battler that was hit.
    pub self_stat_changes: StageChanges,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnEndResult {
    pub messages: Vec<String>,
    pub stat_boosts: StageChanges,
    pub heal_amount: u16,
    pub damage_amount: u16,
    pub cure_status: bool,
    /// Percent; 100 always cures.
    pub cure_chance: u8,
    pub negate_poison: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCheckResult {
    pub immune: bool,
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedModifier {
    pub multiplier: f64,
}

impl Default for SpeedModifier {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriorityModifier {
    pub bonus: i8,
    pub applies: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnockoutResult {
    pub messages: Vec<String>,
    pub stat_boosts: StageChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormChangeResult {
    pub triggered: bool,
    pub new_species_id: u32,
    pub new_form_name: String,
    pub new_types: Vec<Type>,
    pub stat_boosts: Vec<(Stat, i16)>,
    pub messages: Vec<String>,
    pub revert_on_switch_out: bool,
    pub revert_on_faint: bool,
}
