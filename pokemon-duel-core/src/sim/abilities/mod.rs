//! Passive abilities.
//!
//! Every ability id maps to a stateless [`AbilityEffect`]. Each trigger kind
//! has one dispatch function in its own module; the battle talks to them only
//! through [`AbilityService`].

mod contact;
mod damage_modifiers;
mod entry;
pub mod events;
pub mod form_change;
mod misc_abilities;
pub mod registry;
pub mod service;
mod status_abilities;
mod turn_end;

pub use events::{
    Affliction, BattleContext, DamageModifier, EntryResult, FormChangeResult, FormTrigger,
    HitResult, KnockoutResult, PriorityModifier, SpeedModifier, StatusCheckResult, TurnEndResult,
};
pub use registry::{AbilityEffect, AbilityRegistry};
pub use service::{AbilityDamageMods, AbilityService};
