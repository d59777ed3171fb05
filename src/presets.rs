//! Saved team-member configurations, kept per user for the process lifetime.

use crate::error::{MatchError, MatchResult};
use pokemon_duel_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub species_id: u32,
    #[serde(default)]
    pub options: BuildOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: u32,
    pub name: String,
    pub config: PresetConfig,
}

#[derive(Debug, Default)]
struct UserPresets {
    next_id: u32,
    presets: Vec<Preset>,
}

#[derive(Debug)]
pub struct PresetBook {
    max_per_user: usize,
    users: RwLock<HashMap<String, UserPresets>>,
}

impl PresetBook {
    pub fn new(max_per_user: usize) -> Self {
        Self {
            max_per_user,
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn save_preset(&self, user: &str, name: &str, config: PresetConfig) -> MatchResult<Preset> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let book = users.entry(user.to_string()).or_default();
        if book.presets.len() >= self.max_per_user {
            return Err(MatchError::PresetLimit(self.max_per_user));
        }
        book.next_id += 1;
        let preset = Preset {
            id: book.next_id,
            name: name.to_string(),
            config,
        };
        book.presets.push(preset.clone());
        Ok(preset)
    }

    pub fn presets(&self, user: &str) -> Vec<Preset> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users
            .get(user)
            .map(|book| book.presets.clone())
            .unwrap_or_default()
    }

    pub fn preset(&self, user: &str, id: u32) -> Option<Preset> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users
            .get(user)
            .and_then(|book| book.presets.iter().find(|preset| preset.id == id).cloned())
    }

    /// Returns whether anything was removed.
    pub fn delete_preset(&self, user: &str, id: u32) -> bool {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let Some(book) = users.get_mut(user) else {
            return false;
        };
        let before = book.presets.len();
        book.presets.retain(|preset| preset.id != id);
        book.presets.len() != before
    }

    pub fn preset_build(&self, user: &str, id: u32, catalog: &Catalog) -> MatchResult<PokemonBuild> {
        let preset = self.preset(user, id).ok_or(MatchError::PresetNotFound(id))?;
        let species = catalog.lookup_species(preset.config.species_id)?;
        Ok(PokemonBuild::with_options(species, catalog, &preset.config.options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(species_id: u32) -> PresetConfig {
        PresetConfig {
            species_id,
            options: BuildOptions {
                nature: Some(Nature::Timid),
                ..BuildOptions::default()
            },
        }
    }

    #[test]
    fn capped_per_user() {
        let book = PresetBook::new(2);
        book.save_preset("ash", "lead", config(25)).unwrap();
        book.save_preset("ash", "tank", config(143)).unwrap();
        assert_eq!(
            book.save_preset("ash", "extra", config(6)),
            Err(MatchError::PresetLimit(2))
        );
        assert!(book.save_preset("misty", "lead", config(9)).is_ok());
        assert_eq!(book.presets("ash").len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let book = PresetBook::new(10);
        let first = book.save_preset("ash", "a", config(25)).unwrap();
        assert!(book.delete_preset("ash", first.id));
        assert!(!book.delete_preset("ash", first.id));
        let second = book.save_preset("ash", "b", config(25)).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(book.preset("ash", second.id).map(|p| p.name), Some("b".to_string()));
    }

    #[test]
    fn builds_from_a_preset() {
        let book = PresetBook::new(10);
        let catalog = Catalog::builtin();
        let saved = book.save_preset("ash", "pika", config(25)).unwrap();
        let build = book.preset_build("ash", saved.id, &catalog).unwrap();
        assert_eq!(build.species_id, 25);
        assert_eq!(build.nature, Nature::Timid);
        assert_eq!(
            book.preset_build("ash", 99, &catalog),
            Err(MatchError::PresetNotFound(99))
        );
    }
}
