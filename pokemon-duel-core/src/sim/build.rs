use crate::data::catalog::{Catalog, Species};
use crate::data::types::Type;
use crate::error::{BattleError, BattleResult};
use crate::sim::stats::{Nature, Stat, StatsSet};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL: u8 = 50;
pub const MAX_MOVES: usize = 4;
pub const MAX_IV: u16 = 31;
pub const MAX_EV: u16 = 252;
pub const MAX_EV_TOTAL: u32 = 510;

/// A creature's pre-battle configuration. Never mutated once selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonBuild {
    pub species_id: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    pub level: u8,
    pub ability: u32,
    pub nature: Nature,
    #[serde(default)]
    pub item: Option<u32>,
    pub moves: Vec<u32>,
    pub ivs: StatsSet,
    pub evs: StatsSet,
    pub tera_type: Type,
}

/// Caller overrides for [`PokemonBuild::with_options`]. Every field falls back
/// to the build defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub nickname: Option<String>,
    pub level: Option<u8>,
    /// 0 and 1 pick a normal ability, -1 the hidden one.
    pub ability_slot: i8,
    pub nature: Option<Nature>,
    pub item: Option<u32>,
    pub moves: Option<Vec<u32>>,
    pub ivs: Option<StatsSet>,
    pub evs: Option<StatsSet>,
    pub tera_type: Option<Type>,
}

impl PokemonBuild {
    /// Level 50, Hardy, perfect IVs, no EVs, the first four learnable moves
    /// the catalog knows and the first normal ability.
    pub fn from_species(species: &Species, catalog: &Catalog) -> Self {
        Self {
            species_id: species.id,
            nickname: None,
            level: DEFAULT_LEVEL,
            ability: resolve_ability(species, 0),
            nature: Nature::Hardy,
            item: None,
            moves: default_moves(species, catalog),
            ivs: StatsSet::uniform(MAX_IV),
            evs: StatsSet::default(),
            tera_type: species.primary_type(),
        }
    }

    pub fn with_options(
        species: &Species,
        catalog: &Catalog,
        options: &BuildOptions,
    ) -> BattleResult<Self> {
        let mut build = Self::from_species(species, catalog);
        build.nickname = options.nickname.clone();
        build.level = options.level.unwrap_or(DEFAULT_LEVEL);
        build.ability = resolve_ability(species, options.ability_slot);
        build.nature = options.nature.unwrap_or_default();
        if let Some(item) = options.item {
            catalog.lookup_item(item)?;
            build.item = Some(item);
        }
        if let Some(moves) = &options.moves {
            if moves.len() > MAX_MOVES {
                return Err(BattleError::TooManyMoves);
            }
            for id in moves {
                catalog.lookup_move(*id)?;
            }
            build.moves = moves.clone();
        }
        if let Some(ivs) = options.ivs {
            build.ivs = ivs;
        }
        if let Some(evs) = options.evs {
            build.evs = evs;
        }
        if let Some(tera) = options.tera_type {
            build.tera_type = tera;
        }
        build.validate()?;
        Ok(build)
    }

    /// Looks a species up by name and builds it with defaults.
    pub fn from_species_name(name: &str, catalog: &Catalog) -> anyhow::Result<Self> {
        let species = catalog
            .find_species_by_name(name)
            .ok_or_else(|| anyhow!("species '{name}' not found in catalog"))?;
        let build = Self::from_species(species, catalog);
        build
            .validate()
            .with_context(|| format!("default build for {} is invalid", species.name))?;
        Ok(build)
    }

    pub fn validate(&self) -> BattleResult<()> {
        if !(1..=100).contains(&self.level) {
            return Err(BattleError::InvalidLevel(self.level));
        }
        if self.moves.len() > MAX_MOVES {
            return Err(BattleError::TooManyMoves);
        }
        for stat in Stat::ALL {
            if self.ivs.get(stat) > MAX_IV {
                return Err(BattleError::InvalidIvs(format!(
                    "{stat:?} IV {} exceeds {MAX_IV}",
                    self.ivs.get(stat)
                )));
            }
            if self.evs.get(stat) > MAX_EV {
                return Err(BattleError::InvalidEvs(format!(
                    "{stat:?} EV {} exceeds {MAX_EV}",
                    self.evs.get(stat)
                )));
            }
        }
        if self.evs.total() > MAX_EV_TOTAL {
            return Err(BattleError::InvalidEvs(format!(
                "total {} exceeds {MAX_EV_TOTAL}",
                self.evs.total()
            )));
        }
        Ok(())
    }
}

fn default_moves(species: &Species, catalog: &Catalog) -> Vec<u32> {
    species
        .moves
        .iter()
        .copied()
        .filter(|id| catalog.lookup_move(*id).is_ok())
        .take(MAX_MOVES)
        .collect()
}

/// Missing slots fall back to the first normal ability, then the hidden one.
fn resolve_ability(species: &Species, slot: i8) -> u32 {
    let picked = match slot {
        -1 => species.hidden_ability,
        slot if slot >= 0 => species.abilities.get(slot as usize).copied(),
        _ => None,
    };
    picked
        .or_else(|| species.abilities.first().copied())
        .or(species.hidden_ability)
        .unwrap_or(0)
}
