use crate::data::catalog::Catalog;
use crate::data::types::Type;
use crate::error::{BattleError, BattleResult};
use crate::sim::abilities::events::FormChangeResult;
use crate::sim::build::PokemonBuild;
use crate::sim::items::HeldItem;
use crate::sim::moves::Move;
use crate::sim::stats::{apply_stage, Stat, StatsSet, MAX_STAGE, MIN_STAGE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Poison,
    Toxic,
    Burn,
    Paralysis,
    Sleep,
    Freeze,
}

impl Status {
    pub const fn name(self) -> &'static str {
        match self {
            Status::Poison => "poison",
            Status::Toxic => "toxic",
            Status::Burn => "burn",
            Status::Paralysis => "paralysis",
            Status::Sleep => "sleep",
            Status::Freeze => "freeze",
        }
    }

    pub fn is_poison(self) -> bool {
        matches!(self, Status::Poison | Status::Toxic)
    }

    /// Past-tense phrase used in "X was ...!" log lines.
    pub const fn inflicted(self) -> &'static str {
        match self {
            Status::Poison => "poisoned",
            Status::Toxic => "badly poisoned",
            Status::Burn => "burned",
            Status::Paralysis => "paralyzed",
            Status::Sleep => "put to sleep",
            Status::Freeze => "frozen solid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// States cleared on switch-out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatile {
    Confusion,
    Infatuation,
    Taunt,
    Torment,
    Disable,
    Encore,
    LeechSeed,
    Substitute,
    FocusEnergy,
    Flinch,
}

impl Volatile {
    pub const fn name(self) -> &'static str {
        match self {
            Volatile::Confusion => "confusion",
            Volatile::Infatuation => "infatuation",
            Volatile::Taunt => "taunt",
            Volatile::Torment => "torment",
            Volatile::Disable => "disable",
            Volatile::Encore => "encore",
            Volatile::LeechSeed => "leech seed",
            Volatile::Substitute => "substitute",
            Volatile::FocusEnergy => "focus energy",
            Volatile::Flinch => "flinch",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStat {
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl StageStat {
    pub const ALL: [StageStat; 7] = [
        StageStat::Attack,
        StageStat::Defense,
        StageStat::SpAttack,
        StageStat::SpDefense,
        StageStat::Speed,
        StageStat::Accuracy,
        StageStat::Evasion,
    ];

    const fn index(self) -> usize {
        match self {
            StageStat::Attack => 0,
            StageStat::Defense => 1,
            StageStat::SpAttack => 2,
            StageStat::SpDefense => 3,
            StageStat::Speed => 4,
            StageStat::Accuracy => 5,
            StageStat::Evasion => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StageStat::Attack => "Attack",
            StageStat::Defense => "Defense",
            StageStat::SpAttack => "Sp. Atk",
            StageStat::SpDefense => "Sp. Def",
            StageStat::Speed => "Speed",
            StageStat::Accuracy => "accuracy",
            StageStat::Evasion => "evasiveness",
        }
    }

    pub fn from_name(name: &str) -> Option<StageStat> {
        let key: String = name
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "atk" | "attack" => Some(StageStat::Attack),
            "def" | "defense" => Some(StageStat::Defense),
            "spa" | "spatk" | "specialattack" => Some(StageStat::SpAttack),
            "spd" | "spdef" | "specialdefense" => Some(StageStat::SpDefense),
            "spe" | "speed" => Some(StageStat::Speed),
            "acc" | "accuracy" => Some(StageStat::Accuracy),
            "eva" | "evasion" => Some(StageStat::Evasion),
            _ => None,
        }
    }

    /// Realized stat the stage scales, if any.
    pub const fn base_stat(self) -> Option<Stat> {
        match self {
            StageStat::Attack => Some(Stat::Atk),
            StageStat::Defense => Some(Stat::Def),
            StageStat::SpAttack => Some(Stat::Spa),
            StageStat::SpDefense => Some(Stat::Spd),
            StageStat::Speed => Some(Stat::Spe),
            StageStat::Accuracy | StageStat::Evasion => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatStages([i8; 7]);

impl StatStages {
    pub fn get(&self, stat: StageStat) -> i8 {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: StageStat, value: i8) {
        self.0[stat.index()] = value.clamp(MIN_STAGE, MAX_STAGE);
    }

    pub fn clear(&mut self) {
        self.0 = [0; 7];
    }

    pub fn is_neutral(&self) -> bool {
        self.0.iter().all(|stage| *stage == 0)
    }
}

/// A temporary species override left behind by a form-change ability.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActiveForm {
    pub species_id: u32,
    pub name: String,
    pub previous_types: Vec<Type>,
    pub applied_deltas: Vec<(Stat, i32)>,
    pub revert_on_switch_out: bool,
    pub revert_on_faint: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Battler {
    pub species_id: u32,
    pub species_name: String,
    pub name: String,
    pub level: u8,
    pub types: Vec<Type>,
    pub stats: StatsSet,
    pub current_hp: u16,
    pub stages: StatStages,
    pub status: Option<Status>,
    /// Sleep turns remaining, or the toxic counter.
    pub status_turns: u8,
    pub volatiles: BTreeSet<Volatile>,
    pub moves: Vec<Move>,
    pub ability: u32,
    pub traced_ability: Option<u32>,
    pub item: Option<u32>,
    pub item_consumed: bool,
    pub must_recharge: bool,
    pub disabled_move: Option<usize>,
    pub tera_type: Type,
    pub terastallized: bool,
    pub dynamax_turns: u8,
    pub form: Option<ActiveForm>,
    pub battle_bond_spent: bool,
}

impl Battler {
    pub fn new(build: &PokemonBuild, catalog: &Catalog) -> BattleResult<Self> {
        build.validate()?;
        let species = catalog.lookup_species(build.species_id)?;
        let stats = StatsSet::calculate(
            &species.base_stats,
            &build.ivs,
            &build.evs,
            build.level,
            build.nature,
        );
        let moves = build
            .moves
            .iter()
            .map(|id| catalog.lookup_move(*id).map(|data| Move::new(data.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            species_id: species.id,
            species_name: species.name.clone(),
            name: build
                .nickname
                .clone()
                .filter(|nick| !nick.trim().is_empty())
                .unwrap_or_else(|| species.name.clone()),
            level: build.level,
            types: species.types.clone(),
            current_hp: stats.hp,
            stats,
            stages: StatStages::default(),
            status: None,
            status_turns: 0,
            volatiles: BTreeSet::new(),
            moves,
            ability: build.ability,
            traced_ability: None,
            item: build.item,
            item_consumed: false,
            must_recharge: false,
            disabled_move: None,
            tera_type: build.tera_type,
            terastallized: false,
            dynamax_turns: 0,
            form: None,
            battle_bond_spent: false,
        })
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.current_hp == self.stats.hp
    }

    pub fn hp_percent(&self) -> f64 {
        if self.stats.hp == 0 {
            return 0.0;
        }
        self.current_hp as f64 * 100.0 / self.stats.hp as f64
    }

    /// Ability id used for dispatch; a traced ability shadows the original.
    pub fn effective_ability(&self) -> u32 {
        self.traced_ability.unwrap_or(self.ability)
    }

    pub fn held_item(&self) -> Option<HeldItem> {
        if self.item_consumed {
            return None;
        }
        self.item.and_then(HeldItem::from_id)
    }

    pub fn is_dynamaxed(&self) -> bool {
        self.dynamax_turns > 0
    }

    /// Types used when this battler is the target of an attack.
    pub fn defending_types(&self) -> Vec<Type> {
        if self.terastallized {
            vec![self.tera_type]
        } else {
            self.types.clone()
        }
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }

    pub fn is_stab(&self, move_type: Type) -> bool {
        self.has_type(move_type) || (self.terastallized && self.tera_type == move_type)
    }

    pub fn stat(&self, stat: Stat) -> u16 {
        self.stats.get(stat)
    }

    /// Stat after stage scaling.
    pub fn staged_stat(&self, stat: StageStat) -> u16 {
        match stat.base_stat() {
            Some(base) => apply_stage(self.stats.get(base), self.stages.get(stat)),
            None => 0,
        }
    }

    /// Speed with stages, paralysis and Choice Scarf applied. Speed abilities
    /// are layered on by the ability service.
    pub fn base_speed(&self) -> u32 {
        let mut speed = self.staged_stat(StageStat::Speed) as f64;
        if self.status == Some(Status::Paralysis) {
            speed /= 2.0;
        }
        if self.held_item() == Some(HeldItem::ChoiceScarf) {
            speed *= 1.5;
        }
        speed.floor() as u32
    }

    /// Floors at 0 HP and returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let dealt = amount.min(self.current_hp);
        self.current_hp -= dealt;
        dealt
    }

    /// Like [`Battler::take_damage`], but a Focus Sash at full HP survives a
    /// lethal hit with 1 HP. The flag reports whether the sash was used.
    pub fn take_damage_with_item(&mut self, amount: u16) -> (u16, bool) {
        if self.held_item() == Some(HeldItem::FocusSash)
            && self.is_full_hp()
            && self.current_hp > 1
            && amount >= self.current_hp
        {
            self.item_consumed = true;
            let dealt = self.current_hp - 1;
            self.current_hp = 1;
            return (dealt, true);
        }
        (self.take_damage(amount), false)
    }

    /// Capped at max HP; returns the amount restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if self.is_fainted() {
            return 0;
        }
        let healed = amount.min(self.stats.hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    pub fn fraction_of_max_hp(&self, divisor: u16) -> u16 {
        (self.stats.hp / divisor.max(1)).max(1)
    }

    /// Returns the new stage and whether it moved.
    pub fn modify_stat(&mut self, stat: StageStat, delta: i8) -> (i8, bool) {
        let current = self.stages.get(stat);
        let next = (current as i16 + delta as i16).clamp(MIN_STAGE as i16, MAX_STAGE as i16) as i8;
        self.stages.set(stat, next);
        (next, next != current)
    }

    /// Unknown names are a no-op reported as `(0, false)`.
    pub fn modify_stat_named(&mut self, stat: &str, delta: i8) -> (i8, bool) {
        match StageStat::from_name(stat) {
            Some(stat) => self.modify_stat(stat, delta),
            None => (0, false),
        }
    }

    /// The only path that spends a move's remaining uses.
    pub fn use_move(&mut self, index: usize) -> BattleResult<()> {
        let slot = self
            .moves
            .get_mut(index)
            .ok_or(BattleError::InvalidMove(index))?;
        slot.spend_pp()
    }

    pub fn can_use_move(&self, index: usize) -> bool {
        !self.is_move_disabled(index) && self.moves.get(index).is_some_and(|mv| mv.has_pp())
    }

    pub fn is_move_disabled(&self, index: usize) -> bool {
        self.disabled_move == Some(index) && self.has_volatile(Volatile::Disable)
    }

    pub fn usable_moves(&self) -> Vec<usize> {
        (0..self.moves.len()).filter(|idx| self.can_use_move(*idx)).collect()
    }

    pub fn add_volatile(&mut self, volatile: Volatile) -> bool {
        self.volatiles.insert(volatile)
    }

    pub fn has_volatile(&self, volatile: Volatile) -> bool {
        self.volatiles.contains(&volatile)
    }

    pub fn remove_volatile(&mut self, volatile: Volatile) -> bool {
        self.volatiles.remove(&volatile)
    }

    pub fn clear_volatiles(&mut self) {
        self.volatiles.clear();
    }

    /// Statuses the battler's own types rule out.
    pub fn type_blocks_status(&self, status: Status) -> bool {
        match status {
            Status::Burn => self.has_type(Type::Fire),
            Status::Paralysis => self.has_type(Type::Electric),
            Status::Poison | Status::Toxic => {
                self.has_type(Type::Poison) || self.has_type(Type::Steel)
            }
            Status::Freeze => self.has_type(Type::Ice),
            Status::Sleep => false,
        }
    }

    /// Sets `status` only when no status is active. Ability immunities are
    /// checked by the caller through the ability service.
    pub fn try_set_status(&mut self, status: Status, rng: &mut impl Rng) -> bool {
        if self.is_fainted() || self.status.is_some() || self.type_blocks_status(status) {
            return false;
        }
        self.status_turns = match status {
            Status::Sleep => rng.gen_range(1..=3),
            Status::Toxic => 1,
            _ => 0,
        };
        self.status = Some(status);
        true
    }

    pub fn cure_status(&mut self) -> Option<Status> {
        self.status_turns = 0;
        self.status.take()
    }

    /// Stages from focus energy, capped at 3.
    pub fn crit_stage(&self) -> usize {
        if self.has_volatile(Volatile::FocusEnergy) {
            2
        } else {
            0
        }
    }

    pub fn reset_on_switch_out(&mut self) {
        self.stages.clear();
        self.clear_volatiles();
        if self.status == Some(Status::Toxic) {
            self.status_turns = 1;
        }
        self.dynamax_turns = 0;
        self.must_recharge = false;
        self.disabled_move = None;
        self.traced_ability = None;
        if self.form.as_ref().is_some_and(|form| form.revert_on_switch_out) {
            self.revert_form();
        }
    }

    /// Applies a triggered form change. Returning to the base species reverts
    /// the active form instead. A max-HP delta heals the same amount while max
    /// HP itself stays fixed.
    pub fn apply_form(&mut self, change: &FormChangeResult) {
        if !change.triggered {
            return;
        }
        if change.new_species_id == self.species_id {
            self.revert_form();
            return;
        }
        if self.form.is_some() {
            self.revert_form();
        }
        let mut applied = Vec::new();
        for (stat, delta) in &change.stat_boosts {
            if *stat == Stat::Hp {
                if *delta > 0 {
                    self.heal(*delta as u16);
                }
                continue;
            }
            let slot = self.stats.get_mut(*stat);
            let before = *slot as i32;
            let after = (before + *delta as i32).clamp(1, u16::MAX as i32);
            *slot = after as u16;
            applied.push((*stat, after - before));
        }
        let previous_types = std::mem::replace(&mut self.types, change.new_types.clone());
        self.form = Some(ActiveForm {
            species_id: change.new_species_id,
            name: change.new_form_name.clone(),
            previous_types,
            applied_deltas: applied,
            revert_on_switch_out: change.revert_on_switch_out,
            revert_on_faint: change.revert_on_faint,
        });
    }

    pub fn revert_form(&mut self) -> bool {
        let Some(form) = self.form.take() else {
            return false;
        };
        for (stat, delta) in form.applied_deltas {
            let slot = self.stats.get_mut(stat);
            *slot = (*slot as i32 - delta).clamp(1, u16::MAX as i32) as u16;
        }
        self.types = form.previous_types;
        true
    }

    /// Species currently on the field, accounting for forms.
    pub fn current_species_id(&self) -> u32 {
        self.form
            .as_ref()
            .map(|form| form.species_id)
            .unwrap_or(self.species_id)
    }
}
