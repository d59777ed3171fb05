use std::collections::HashMap;

/// Ability ids the engine needs to name directly.
pub mod ids {
    pub const OBLIVIOUS: u32 = 12;
    pub const OWN_TEMPO: u32 = 20;
    pub const TRACE: u32 = 36;
    pub const INNER_FOCUS: u32 = 39;
    pub const GUTS: u32 = 62;
    pub const ADAPTABILITY: u32 = 91;
    pub const SNIPER: u32 = 97;
    pub const SCRAPPY: u32 = 113;
}

/// Stateless behaviour attached to an ability id. Each trigger kind has one
/// dispatch function matching over these variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AbilityEffect {
    // entry
    Intimidate,
    Drizzle,
    Drought,
    SandStream,
    SnowWarning,
    Pressure,
    Unnerve,
    Download,
    IntrepidSword,
    DauntlessShield,
    Frisk,
    Trace,
    // attacker
    HugePower,
    PurePower,
    Technician,
    ToughClaws,
    StrongJaw,
    IronFist,
    MegaLauncher,
    Reckless,
    Adaptability,
    SheerForce,
    Overgrow,
    Blaze,
    Torrent,
    Swarm,
    SandForce,
    TintedLens,
    Neuroforce,
    Steelworker,
    Sniper,
    Guts,
    Hustle,
    SolarPower,
    // defender
    ThickFat,
    Heatproof,
    FurCoat,
    Multiscale,
    SolidRock,
    Filter,
    PrismArmor,
    Levitate,
    WonderGuard,
    LightningRod,
    VoltAbsorb,
    MotorDrive,
    WaterAbsorb,
    StormDrain,
    DrySkin,
    FlashFire,
    SapSipper,
    // being hit
    Static,
    PoisonPoint,
    FlameBody,
    EffectSpore,
    RoughSkin,
    IronBarbs,
    Gooey,
    TanglingHair,
    CursedBody,
    CuteCharm,
    Stench,
    Mummy,
    Justified,
    WeakArmor,
    // status immunity
    Immunity,
    Limber,
    Insomnia,
    VitalSpirit,
    MagmaArmor,
    WaterVeil,
    OwnTempo,
    Oblivious,
    InnerFocus,
    Scrappy,
    // turn end
    SpeedBoost,
    RainDish,
    IceBody,
    ShedSkin,
    PoisonHeal,
    Hydration,
    // speed
    SwiftSwim,
    Chlorophyll,
    SandRush,
    SlushRush,
    QuickFeet,
    // priority
    Prankster,
    GaleWings,
    Triage,
    // knockout
    Moxie,
    BeastBoost,
    SoulHeart,
    ChillingNeigh,
    GrimNeigh,
    // form change
    BattleBond,
    ZenMode,
    PowerConstruct,
    StanceChange,
}

const DEFAULT_EFFECTS: &[(u32, AbilityEffect)] = &[
    (1, AbilityEffect::Stench),
    (2, AbilityEffect::Drizzle),
    (3, AbilityEffect::SpeedBoost),
    (7, AbilityEffect::Limber),
    (9, AbilityEffect::Static),
    (10, AbilityEffect::VoltAbsorb),
    (11, AbilityEffect::WaterAbsorb),
    (ids::OBLIVIOUS, AbilityEffect::Oblivious),
    (15, AbilityEffect::Insomnia),
    (17, AbilityEffect::Immunity),
    (18, AbilityEffect::FlashFire),
    (ids::OWN_TEMPO, AbilityEffect::OwnTempo),
    (22, AbilityEffect::Intimidate),
    (24, AbilityEffect::RoughSkin),
    (25, AbilityEffect::WonderGuard),
    (26, AbilityEffect::Levitate),
    (27, AbilityEffect::EffectSpore),
    (31, AbilityEffect::LightningRod),
    (33, AbilityEffect::SwiftSwim),
    (34, AbilityEffect::Chlorophyll),
    (ids::TRACE, AbilityEffect::Trace),
    (37, AbilityEffect::HugePower),
    (38, AbilityEffect::PoisonPoint),
    (ids::INNER_FOCUS, AbilityEffect::InnerFocus),
    (40, AbilityEffect::MagmaArmor),
    (41, AbilityEffect::WaterVeil),
    (44, AbilityEffect::RainDish),
    (45, AbilityEffect::SandStream),
    (46, AbilityEffect::Pressure),
    (47, AbilityEffect::ThickFat),
    (49, AbilityEffect::FlameBody),
    (55, AbilityEffect::Hustle),
    (56, AbilityEffect::CuteCharm),
    (61, AbilityEffect::ShedSkin),
    (ids::GUTS, AbilityEffect::Guts),
    (65, AbilityEffect::Overgrow),
    (66, AbilityEffect::Blaze),
    (67, AbilityEffect::Torrent),
    (68, AbilityEffect::Swarm),
    (70, AbilityEffect::Drought),
    (72, AbilityEffect::VitalSpirit),
    (74, AbilityEffect::PurePower),
    (78, AbilityEffect::MotorDrive),
    (85, AbilityEffect::Heatproof),
    (87, AbilityEffect::DrySkin),
    (88, AbilityEffect::Download),
    (89, AbilityEffect::IronFist),
    (90, AbilityEffect::PoisonHeal),
    (ids::ADAPTABILITY, AbilityEffect::Adaptability),
    (93, AbilityEffect::Hydration),
    (94, AbilityEffect::SolarPower),
    (95, AbilityEffect::QuickFeet),
    (ids::SNIPER, AbilityEffect::Sniper),
    (101, AbilityEffect::Technician),
    (110, AbilityEffect::TintedLens),
    (111, AbilityEffect::Filter),
    (ids::SCRAPPY, AbilityEffect::Scrappy),
    (114, AbilityEffect::StormDrain),
    (115, AbilityEffect::IceBody),
    (116, AbilityEffect::SolidRock),
    (117, AbilityEffect::SnowWarning),
    (119, AbilityEffect::Frisk),
    (120, AbilityEffect::Reckless),
    (125, AbilityEffect::SheerForce),
    (127, AbilityEffect::Unnerve),
    (130, AbilityEffect::CursedBody),
    (133, AbilityEffect::WeakArmor),
    (136, AbilityEffect::Multiscale),
    (146, AbilityEffect::SandRush),
    (152, AbilityEffect::Mummy),
    (153, AbilityEffect::Moxie),
    (154, AbilityEffect::Justified),
    (157, AbilityEffect::SapSipper),
    (158, AbilityEffect::Prankster),
    (159, AbilityEffect::SandForce),
    (160, AbilityEffect::IronBarbs),
    (161, AbilityEffect::ZenMode),
    (169, AbilityEffect::FurCoat),
    (173, AbilityEffect::StrongJaw),
    (176, AbilityEffect::StanceChange),
    (177, AbilityEffect::GaleWings),
    (178, AbilityEffect::MegaLauncher),
    (181, AbilityEffect::ToughClaws),
    (183, AbilityEffect::Gooey),
    (200, AbilityEffect::Steelworker),
    (202, AbilityEffect::SlushRush),
    (205, AbilityEffect::Triage),
    (210, AbilityEffect::BattleBond),
    (211, AbilityEffect::PowerConstruct),
    (220, AbilityEffect::SoulHeart),
    (221, AbilityEffect::TanglingHair),
    (224, AbilityEffect::BeastBoost),
    (232, AbilityEffect::PrismArmor),
    (233, AbilityEffect::Neuroforce),
    (234, AbilityEffect::IntrepidSword),
    (235, AbilityEffect::DauntlessShield),
    (264, AbilityEffect::ChillingNeigh),
    (265, AbilityEffect::GrimNeigh),
];

/// Ability id to effect. Built once and shared read-only.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    effects: HashMap<u32, AbilityEffect>,
}

impl AbilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (id, effect) in DEFAULT_EFFECTS {
            registry.register(*id, *effect);
        }
        registry
    }

    pub fn register(&mut self, ability_id: u32, effect: AbilityEffect) {
        self.effects.insert(ability_id, effect);
    }

    pub fn get(&self, ability_id: u32) -> Option<AbilityEffect> {
        self.effects.get(&ability_id).copied()
    }

    pub fn contains(&self, ability_id: u32) -> bool {
        self.effects.contains_key(&ability_id)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.effects.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::abilities::ability_name;

    #[test]
    fn defaults_are_registered_once() {
        let registry = AbilityRegistry::with_defaults();
        assert_eq!(registry.len(), DEFAULT_EFFECTS.len());
        assert_eq!(registry.get(22), Some(AbilityEffect::Intimidate));
        assert_eq!(registry.get(ids::TRACE), Some(AbilityEffect::Trace));
        assert!(!registry.contains(5));
        assert!(AbilityRegistry::new().is_empty());
    }

    #[test]
    fn every_registered_ability_has_a_name() {
        let registry = AbilityRegistry::with_defaults();
        for id in registry.ids() {
            assert!(ability_name(id).is_some(), "ability {id} has no name");
        }
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AbilityRegistry>();
    }
}
