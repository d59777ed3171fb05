//! Read-only reference lookups consumed by the battle core.
//!
//! The built-in catalog is assembled from the static tables in this module's
//! siblings; an external loader can hand over JSON instead, and the two can be
//! merged with later entries overriding earlier ones.

use crate::data::abilities::ABILITY_NAMES;
use crate::data::items::ITEMS;
use crate::data::moves::MOVEDEX;
use crate::data::species::{SpeciesRecord, POKEDEX};
use crate::data::types::Type;
use crate::error::CatalogError;
use crate::sim::moves::MoveData;
use crate::sim::stats::StatsSet;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: StatsSet,
    #[serde(default)]
    pub abilities: Vec<u32>,
    #[serde(default)]
    pub hidden_ability: Option<u32>,
    #[serde(default)]
    pub moves: Vec<u32>,
    #[serde(default)]
    pub sprite: String,
}

impl Species {
    pub fn primary_type(&self) -> Type {
        self.types.first().copied().unwrap_or(Type::Normal)
    }
}

impl From<&SpeciesRecord> for Species {
    fn from(record: &SpeciesRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.to_string(),
            types: record.types.to_vec(),
            base_stats: record.base_stats,
            abilities: record.abilities.to_vec(),
            hidden_ability: record.hidden_ability,
            moves: record.moves.to_vec(),
            sprite: record.sprite(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: u32,
    pub name: String,
}

#[derive(Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    species: Vec<Species>,
    #[serde(default)]
    moves: Vec<MoveData>,
    #[serde(default)]
    abilities: Vec<AbilityData>,
    #[serde(default)]
    items: Vec<ItemData>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::default();
    for record in POKEDEX.values() {
        catalog.species.insert(record.id, Species::from(record));
    }
    for record in MOVEDEX.values() {
        catalog.moves.insert(record.id, record.to_data());
    }
    for (id, name) in ABILITY_NAMES.entries() {
        catalog.abilities.insert(
            *id,
            AbilityData {
                id: *id,
                name: name.to_string(),
            },
        );
    }
    for (id, name) in ITEMS.entries() {
        catalog.items.insert(
            *id,
            ItemData {
                id: *id,
                name: name.to_string(),
            },
        );
    }
    catalog
});

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    species: HashMap<u32, Species>,
    moves: HashMap<u32, MoveData>,
    abilities: HashMap<u32, AbilityData>,
    items: HashMap<u32, ItemData>,
    name_index: OnceCell<HashMap<String, u32>>,
}

impl Catalog {
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|err| CatalogError::InvalidData(err.to_string()))?;
        let mut catalog = Catalog::default();
        for species in file.species {
            if species.types.is_empty() || species.types.len() > 2 {
                return Err(CatalogError::InvalidData(format!(
                    "species {} must have one or two types",
                    species.id
                )));
            }
            catalog.species.insert(species.id, species);
        }
        for data in file.moves {
            catalog.moves.insert(data.id, data);
        }
        for ability in file.abilities {
            catalog.abilities.insert(ability.id, ability);
        }
        for item in file.items {
            catalog.items.insert(item.id, item);
        }
        Ok(catalog)
    }

    /// Entries from `other` replace entries with the same id.
    pub fn merge(&mut self, other: Catalog) {
        self.species.extend(other.species);
        self.moves.extend(other.moves);
        self.abilities.extend(other.abilities);
        self.items.extend(other.items);
        self.name_index = OnceCell::new();
    }

    pub fn lookup_species(&self, id: u32) -> Result<&Species, CatalogError> {
        self.species.get(&id).ok_or(CatalogError::SpeciesNotFound(id))
    }

    pub fn lookup_move(&self, id: u32) -> Result<&MoveData, CatalogError> {
        self.moves.get(&id).ok_or(CatalogError::MoveNotFound(id))
    }

    pub fn lookup_ability(&self, id: u32) -> Result<&AbilityData, CatalogError> {
        self.abilities.get(&id).ok_or(CatalogError::AbilityNotFound(id))
    }

    pub fn lookup_item(&self, id: u32) -> Result<&ItemData, CatalogError> {
        self.items.get(&id).ok_or(CatalogError::ItemNotFound(id))
    }

    pub fn ability_name(&self, id: u32) -> String {
        self.lookup_ability(id)
            .map(|ability| ability.name.clone())
            .unwrap_or_else(|_| format!("ability #{id}"))
    }

    pub fn find_species_by_name(&self, name: &str) -> Option<&Species> {
        let index = self.name_index.get_or_init(|| {
            self.species
                .values()
                .map(|species| (normalize_name(&species.name), species.id))
                .collect()
        });
        let id = index.get(&normalize_name(name))?;
        self.species.get(id)
    }

    /// Species ids in ascending order.
    pub fn species_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.species.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

fn normalize_name(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
