//! Turn-based single battle engine.
//!
//! The main entry point for match-driven callers is [`sim::battle::Battle`];
//! [`engine::BattleEngine`] bundles a battle with its ability registry and
//! random source for step-based simulations.

pub mod battle_logger;
pub mod data;
pub mod engine;
pub mod error;
pub mod sim;

pub use error::{BattleError, CatalogError};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::data::catalog::{Catalog, Species};
    pub use crate::data::types::{effectiveness, Type};
    pub use crate::engine::{BattleEngine, StepResult};
    pub use crate::error::{BattleError, CatalogError};
    pub use crate::sim::abilities::{AbilityRegistry, AbilityService};
    pub use crate::sim::battle::{Action, Battle, BattlePhase, Gimmick, Side};
    pub use crate::sim::build::{BuildOptions, PokemonBuild};
    pub use crate::sim::pokemon::{Battler, StageStat, Status, Volatile};
    pub use crate::sim::stats::{Nature, StatsSet};
}
