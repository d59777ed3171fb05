use crate::sim::battle::BattlePhase;
use thiserror::Error;

/// Catalog lookups that found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("species {0} not found")]
    SpeciesNotFound(u32),

    #[error("move {0} not found")]
    MoveNotFound(u32),

    #[error("ability {0} not found")]
    AbilityNotFound(u32),

    #[error("item {0} not found")]
    ItemNotFound(u32),

    #[error("invalid catalog data: {0}")]
    InvalidData(String),
}

/// Everything the battle core can reject. No variant is raised after a turn
/// has started mutating state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("invalid move index {0}")]
    InvalidMove(usize),

    #[error("{0} has no PP left")]
    NoPpLeft(String),

    #[error("invalid switch target {0}")]
    InvalidSwitch(usize),

    #[error("{0} has already fainted")]
    FaintedTarget(String),

    #[error("{0} is already in battle")]
    AlreadyActive(String),

    #[error("an action was already chosen this turn")]
    AlreadyActed,

    #[error("the gimmick was already used this battle")]
    GimmickUsed,

    #[error("team is already full")]
    TeamFull,

    #[error("species {0} is already on the team")]
    DuplicateSpecies(String),

    #[error("battle is full")]
    MatchFull,

    #[error("player {0} already joined")]
    AlreadyJoined(String),

    #[error("player {0} is not in this battle")]
    NotInBattle(String),

    #[error("wrong phase: expected {expected:?}, battle is {actual:?}")]
    WrongPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("a build can hold at most 4 moves")]
    TooManyMoves,

    #[error("level {0} is outside 1..=100")]
    InvalidLevel(u8),

    #[error("invalid EV spread: {0}")]
    InvalidEvs(String),

    #[error("invalid IV spread: {0}")]
    InvalidIvs(String),

    #[error("a team needs at least one creature")]
    EmptyTeam,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type BattleResult<T> = Result<T, BattleError>;
