use pokemon_duel_core::error::{BattleError, CatalogError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("match {0} already exists")]
    AlreadyExists(String),

    #[error("match {0} not found")]
    NotFound(String),

    #[error("team size {0} must be between 1 and 6")]
    InvalidTeamSize(usize),

    #[error("the AI could not pick a team")]
    AiSelectionFailed,

    #[error("at most {0} presets per user")]
    PresetLimit(usize),

    #[error("preset {0} not found")]
    PresetNotFound(u32),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type MatchResult<T> = Result<T, MatchError>;
