use super::events::{BattleContext, DamageModifier};
use super::registry::AbilityEffect;
use crate::data::types::Type;
use crate::sim::moves::{MoveCategory, MoveData, MoveFlags};
use crate::sim::pokemon::{Battler, StageStat};
use crate::sim::weather_field::Weather;

/// Factors the attacker's ability contributes. `effectiveness` is the type
/// multiplier against the defender.
pub(crate) fn attacker_modifier(
    effect: AbilityEffect,
    attacker: &Battler,
    move_data: &MoveData,
    effectiveness: f64,
    ctx: &BattleContext,
) -> Option<DamageModifier> {
    let physical = move_data.category == MoveCategory::Physical;
    let special = move_data.category == MoveCategory::Special;
    let modifier = match effect {
        AbilityEffect::HugePower | AbilityEffect::PurePower if physical => {
            DamageModifier::attack(2.0)
        }
        AbilityEffect::Technician if move_data.power <= 60 => DamageModifier::power(1.5),
        AbilityEffect::ToughClaws if move_data.has_flag(MoveFlags::CONTACT) => {
            DamageModifier::power(1.3)
        }
        AbilityEffect::StrongJaw if move_data.has_flag(MoveFlags::BITE) => {
            DamageModifier::power(1.5)
        }
        AbilityEffect::IronFist if move_data.has_flag(MoveFlags::PUNCH) => {
            DamageModifier::power(1.2)
        }
        AbilityEffect::MegaLauncher if move_data.has_flag(MoveFlags::PULSE) => {
            DamageModifier::power(1.5)
        }
        AbilityEffect::Reckless if move_data.has_flag(MoveFlags::RECOIL) => {
            DamageModifier::power(1.2)
        }
        AbilityEffect::Adaptability if attacker.is_stab(move_data.move_type) => DamageModifier {
            stab_mult: 2.0 / 1.5,
            ..DamageModifier::NEUTRAL
        },
        AbilityEffect::SheerForce if move_data.has_secondary() => DamageModifier::power(1.3),
        AbilityEffect::Overgrow => pinch(attacker, move_data, Type::Grass)?,
        AbilityEffect::Blaze => pinch(attacker, move_data, Type::Fire)?,
        AbilityEffect::Torrent => pinch(attacker, move_data, Type::Water)?,
        AbilityEffect::Swarm => pinch(attacker, move_data, Type::Bug)?,
        AbilityEffect::SandForce
            if ctx.is_weather(Weather::Sand)
                && matches!(move_data.move_type, Type::Rock | Type::Ground | Type::Steel) =>
        {
            DamageModifier::power(1.3)
        }
        AbilityEffect::TintedLens if effectiveness > 0.0 && effectiveness < 1.0 => {
            DamageModifier::damage(2.0)
        }
        AbilityEffect::Neuroforce if effectiveness > 1.0 => DamageModifier::damage(1.25),
        AbilityEffect::Steelworker if move_data.move_type == Type::Steel => {
            DamageModifier::power(1.5)
        }
        AbilityEffect::Sniper => DamageModifier {
            crit_mult: 1.5,
            ..DamageModifier::NEUTRAL
        },
        AbilityEffect::Guts if attacker.status.is_some() && physical => {
            DamageModifier::attack(1.5)
        }
        AbilityEffect::Hustle if physical => DamageModifier::attack(1.5),
        AbilityEffect::SolarPower if special && ctx.is_weather(Weather::Sun) => {
            DamageModifier::attack(1.5)
        }
        _ => return None,
    };
    Some(modifier)
}

/// Starter abilities: 1.5x on their type at a third of HP or less.
fn pinch(attacker: &Battler, move_data: &MoveData, ty: Type) -> Option<DamageModifier> {
    (move_data.move_type == ty && attacker.current_hp as u32 * 3 <= attacker.max_hp() as u32)
        .then(|| DamageModifier::power(1.5))
}

pub(crate) fn defender_modifier(
    effect: AbilityEffect,
    defender: &Battler,
    move_data: &MoveData,
    effectiveness: f64,
    _ctx: &BattleContext,
) -> Option<DamageModifier> {
    let ty = move_data.move_type;
    let modifier = match effect {
        AbilityEffect::ThickFat if matches!(ty, Type::Fire | Type::Ice) => {
            DamageModifier::attack(0.5)
        }
        AbilityEffect::Heatproof if ty == Type::Fire => DamageModifier::damage(0.5),
        AbilityEffect::FurCoat if move_data.category == MoveCategory::Physical => {
            DamageModifier::defense(2.0)
        }
        AbilityEffect::Multiscale if defender.is_full_hp() => DamageModifier::damage(0.5),
        AbilityEffect::SolidRock | AbilityEffect::Filter | AbilityEffect::PrismArmor
            if effectiveness > 1.0 =>
        {
            DamageModifier::damage(0.75)
        }
        AbilityEffect::Levitate if ty == Type::Ground => DamageModifier::immunity(0),
        AbilityEffect::WonderGuard if effectiveness <= 1.0 => DamageModifier::immunity(0),
        AbilityEffect::LightningRod | AbilityEffect::MotorDrive if ty == Type::Electric => {
            DamageModifier::immunity(0)
        }
        AbilityEffect::VoltAbsorb if ty == Type::Electric => DamageModifier::immunity(25),
        AbilityEffect::WaterAbsorb if ty == Type::Water => DamageModifier::immunity(25),
        AbilityEffect::StormDrain if ty == Type::Water => DamageModifier::immunity(0),
        AbilityEffect::DrySkin if ty == Type::Water => DamageModifier::immunity(25),
        AbilityEffect::DrySkin if ty == Type::Fire => DamageModifier::damage(1.25),
        AbilityEffect::FlashFire if ty == Type::Fire => DamageModifier::immunity(0),
        AbilityEffect::SapSipper if ty == Type::Grass => DamageModifier::immunity(0),
        _ => return None,
    };
    Some(modifier)
}

/// Stat raised when an immunity ability soaks up a move.
pub(crate) fn absorb_boost(effect: AbilityEffect) -> Option<(StageStat, i8)> {
    match effect {
        AbilityEffect::LightningRod | AbilityEffect::StormDrain => Some((StageStat::SpAttack, 1)),
        AbilityEffect::MotorDrive => Some((StageStat::Speed, 1)),
        AbilityEffect::SapSipper => Some((StageStat::Attack, 1)),
        _ => None,
    }
}
