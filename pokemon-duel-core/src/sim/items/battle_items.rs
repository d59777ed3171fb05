use crate::sim::items::type_items::item_type_boost;
use crate::sim::items::HeldItem;
use crate::sim::moves::{MoveCategory, MoveData, MoveFlags};
use crate::data::types::Type;
use crate::sim::pokemon::Battler;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EndOfTurnEffect {
    Heal { amount: u16, item: HeldItem },
    Damage { amount: u16, item: HeldItem },
}

pub fn attack_stat_modifier(battler: &Battler, category: MoveCategory) -> f64 {
    match (battler.held_item(), category) {
        (Some(HeldItem::ChoiceBand), MoveCategory::Physical) => 1.5,
        (Some(HeldItem::ChoiceSpecs), MoveCategory::Special) => 1.5,
        _ => 1.0,
    }
}

/// Modifier on the holder's defensive stat against `category`.
pub fn defense_stat_modifier(battler: &Battler, category: MoveCategory) -> f64 {
    match (battler.held_item(), category) {
        (Some(HeldItem::AssaultVest), MoveCategory::Special) => 1.5,
        _ => 1.0,
    }
}

pub fn power_modifier(battler: &Battler, move_data: &MoveData, effectiveness: f64) -> f64 {
    match battler.held_item() {
        Some(HeldItem::LifeOrb) => 1.3,
        Some(HeldItem::ExpertBelt) if effectiveness > 1.0 => 1.2,
        Some(HeldItem::MuscleBand) if move_data.category == MoveCategory::Physical => 1.1,
        Some(HeldItem::WiseGlasses) if move_data.category == MoveCategory::Special => 1.1,
        Some(HeldItem::TypeBoost(boosted)) => item_type_boost(boosted, move_data.move_type),
        _ => 1.0,
    }
}

pub fn end_of_turn_effect(battler: &Battler) -> Option<EndOfTurnEffect> {
    if battler.is_fainted() {
        return None;
    }
    match battler.held_item()? {
        HeldItem::Leftovers if !battler.is_full_hp() => Some(EndOfTurnEffect::Heal {
            amount: battler.fraction_of_max_hp(16),
            item: HeldItem::Leftovers,
        }),
        HeldItem::BlackSludge if battler.has_type(Type::Poison) => {
            if battler.is_full_hp() {
                return None;
            }
            Some(EndOfTurnEffect::Heal {
                amount: battler.fraction_of_max_hp(16),
                item: HeldItem::BlackSludge,
            })
        }
        HeldItem::BlackSludge => Some(EndOfTurnEffect::Damage {
            amount: battler.fraction_of_max_hp(8),
            item: HeldItem::BlackSludge,
        }),
        _ => None,
    }
}

/// Life Orb costs a tenth of max HP per damaging hit.
pub fn life_orb_recoil(attacker: &Battler) -> Option<u16> {
    (attacker.held_item() == Some(HeldItem::LifeOrb)).then(|| attacker.fraction_of_max_hp(10))
}

/// Rocky Helmet punishes contact with a sixth of the attacker's max HP.
pub fn rocky_helmet_damage(defender: &Battler, attacker: &Battler, move_data: &MoveData) -> Option<u16> {
    if defender.held_item() != Some(HeldItem::RockyHelmet) || !move_data.has_flag(MoveFlags::CONTACT) {
        return None;
    }
    Some(attacker.fraction_of_max_hp(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::{battler, move_data};

    fn holding(species_id: u32, item: u32) -> Battler {
        let mut mon = battler(species_id);
        mon.item = Some(item);
        mon
    }

    #[test]
    fn choice_band_specs_attack_modifier() {
        let band = holding(25, 220);
        assert_eq!(attack_stat_modifier(&band, MoveCategory::Physical), 1.5);
        assert_eq!(attack_stat_modifier(&band, MoveCategory::Special), 1.0);
        let specs = holding(25, 297);
        assert_eq!(attack_stat_modifier(&specs, MoveCategory::Special), 1.5);
        assert_eq!(attack_stat_modifier(&specs, MoveCategory::Physical), 1.0);
    }

    #[test]
    fn consumed_items_stop_working() {
        let mut scarf = holding(25, 287);
        let boosted = scarf.base_speed();
        scarf.item_consumed = true;
        assert!(scarf.base_speed() < boosted);
    }

    #[test]
    fn life_orb_and_expert_belt_power_modifier() {
        let tackle = move_data(33);
        let orb = holding(25, 270);
        assert_eq!(power_modifier(&orb, &tackle, 1.0), 1.3);
        let belt = holding(25, 268);
        assert_eq!(power_modifier(&belt, &tackle, 1.0), 1.0);
        assert_eq!(power_modifier(&belt, &tackle, 2.0), 1.2);
        let band = holding(25, 266);
        assert_eq!(power_modifier(&band, &tackle, 1.0), 1.1);
        assert_eq!(power_modifier(&band, &move_data(85), 1.0), 1.0);
        let magnet = holding(25, 242);
        assert_eq!(power_modifier(&magnet, &move_data(85), 1.0), 1.2);
    }

    #[test]
    fn assault_vest_only_guards_special() {
        let vest = holding(143, 640);
        assert_eq!(defense_stat_modifier(&vest, MoveCategory::Special), 1.5);
        assert_eq!(defense_stat_modifier(&vest, MoveCategory::Physical), 1.0);
    }

    #[test]
    fn black_sludge_end_of_turn_effect() {
        let mut poison = holding(94, 281);
        poison.current_hp -= 10;
        assert!(matches!(
            end_of_turn_effect(&poison),
            Some(EndOfTurnEffect::Heal { item: HeldItem::BlackSludge, .. })
        ));
        let other = holding(25, 281);
        assert!(matches!(
            end_of_turn_effect(&other),
            Some(EndOfTurnEffect::Damage { item: HeldItem::BlackSludge, .. })
        ));
    }

    #[test]
    fn leftovers_idle_at_full_hp() {
        let mut mon = holding(143, 234);
        assert_eq!(end_of_turn_effect(&mon), None);
        mon.current_hp -= 50;
        assert_eq!(
            end_of_turn_effect(&mon),
            Some(EndOfTurnEffect::Heal {
                amount: mon.max_hp() / 16,
                item: HeldItem::Leftovers
            })
        );
    }

    #[test]
    fn rocky_helmet_needs_contact() {
        let helmet = holding(598, 540);
        let attacker = battler(149);
        assert_eq!(
            rocky_helmet_damage(&helmet, &attacker, &move_data(200)),
            Some(attacker.max_hp() / 6)
        );
        assert_eq!(rocky_helmet_damage(&helmet, &attacker, &move_data(89)), None);
    }
}
