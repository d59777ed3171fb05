pub mod abilities;
pub mod ai;
pub mod battle;
pub mod build;
pub mod damage;
pub mod faint_handler;
pub mod items;
pub mod moves;
pub mod pokemon;
pub mod stats;
pub mod switching;
pub mod weather_field;

pub use pokemon::Battler;
