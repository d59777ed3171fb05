pub mod attacking;
pub mod flags;
pub(crate) mod secondary;
pub(crate) mod status;

pub use flags::MoveFlags;

use crate::data::types::Type;
use crate::error::{BattleError, BattleResult};
use crate::sim::pokemon::{StageStat, Status, Volatile};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    SelfSide,
    Target,
}

/// What a move does besides dealing damage. Status moves carry their primary
/// effect here; damaging moves carry a secondary effect with a chance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveEffect {
    #[default]
    None,
    StatChange {
        target: EffectTarget,
        stat: StageStat,
        stages: i8,
    },
    Status(Status),
    FocusEnergy,
    HealPercent(u8),
    ShieldStance,
    Volatile(Volatile),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u16,
    /// 0 means the move never misses.
    #[serde(default)]
    pub accuracy: u8,
    pub pp: u8,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub flags: MoveFlags,
    #[serde(default)]
    pub effect: MoveEffect,
    /// 0 for primary effects, 1..=100 for secondary ones.
    #[serde(default)]
    pub effect_chance: u8,
}

impl MoveData {
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn has_secondary(&self) -> bool {
        !self.is_status() && self.effect_chance > 0 && self.effect != MoveEffect::None
    }

    pub fn is_healing(&self) -> bool {
        matches!(self.effect, MoveEffect::HealPercent(_))
    }
}

/// A move slot owned by one battler, with its own remaining uses.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Move {
    data: MoveData,
    pp: u8,
}

impl Move {
    pub fn new(data: MoveData) -> Self {
        let pp = data.pp;
        Self { data, pp }
    }

    pub fn data(&self) -> &MoveData {
        &self.data
    }

    pub fn pp(&self) -> u8 {
        self.pp
    }

    pub fn max_pp(&self) -> u8 {
        self.data.pp
    }

    pub fn has_pp(&self) -> bool {
        self.pp > 0
    }

    pub(crate) fn spend_pp(&mut self) -> BattleResult<()> {
        if self.pp == 0 {
            return Err(BattleError::NoPpLeft(self.data.name.clone()));
        }
        self.pp -= 1;
        Ok(())
    }
}

impl Deref for Move {
    type Target = MoveData;

    fn deref(&self) -> &MoveData {
        &self.data
    }
}
