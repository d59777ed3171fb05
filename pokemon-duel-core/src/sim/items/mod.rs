pub mod battle_items;
pub mod consumable;
pub mod type_items;

use crate::data::types::Type;
use serde::Serialize;

/// Held items the engine gives battle effects to, keyed by catalog id.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum HeldItem {
    ChoiceBand,
    ChoiceSpecs,
    ChoiceScarf,
    LifeOrb,
    ExpertBelt,
    MuscleBand,
    WiseGlasses,
    FocusSash,
    AssaultVest,
    RockyHelmet,
    Leftovers,
    BlackSludge,
    SitrusBerry,
    TypeBoost(Type),
}

impl HeldItem {
    pub fn from_id(id: u32) -> Option<HeldItem> {
        let item = match id {
            220 => HeldItem::ChoiceBand,
            297 => HeldItem::ChoiceSpecs,
            287 => HeldItem::ChoiceScarf,
            270 => HeldItem::LifeOrb,
            268 => HeldItem::ExpertBelt,
            266 => HeldItem::MuscleBand,
            267 => HeldItem::WiseGlasses,
            275 => HeldItem::FocusSash,
            640 => HeldItem::AssaultVest,
            540 => HeldItem::RockyHelmet,
            234 => HeldItem::Leftovers,
            281 => HeldItem::BlackSludge,
            158 => HeldItem::SitrusBerry,
            other => return type_items::boosted_type(other).map(HeldItem::TypeBoost),
        };
        Some(item)
    }

    pub const fn name(self) -> &'static str {
        match self {
            HeldItem::ChoiceBand => "Choice Band",
            HeldItem::ChoiceSpecs => "Choice Specs",
            HeldItem::ChoiceScarf => "Choice Scarf",
            HeldItem::LifeOrb => "Life Orb",
            HeldItem::ExpertBelt => "Expert Belt",
            HeldItem::MuscleBand => "Muscle Band",
            HeldItem::WiseGlasses => "Wise Glasses",
            HeldItem::FocusSash => "Focus Sash",
            HeldItem::AssaultVest => "Assault Vest",
            HeldItem::RockyHelmet => "Rocky Helmet",
            HeldItem::Leftovers => "Leftovers",
            HeldItem::BlackSludge => "Black Sludge",
            HeldItem::SitrusBerry => "Sitrus Berry",
            HeldItem::TypeBoost(_) => "type-boosting item",
        }
    }
}
