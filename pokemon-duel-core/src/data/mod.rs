pub mod abilities;
pub mod catalog;
pub mod items;
pub mod moves;
pub mod species;
pub mod types;
