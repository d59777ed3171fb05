use super::events::{Affliction, BattleContext, HitResult};
use super::registry::AbilityEffect;
use crate::data::types::Type;
use crate::sim::moves::{MoveCategory, MoveData, MoveFlags};
use crate::sim::pokemon::{Battler, StageStat, Status, Volatile};

const EFFECT_SPORE: [Status; 3] = [Status::Sleep, Status::Poison, Status::Paralysis];

/// Reactions of the battler that was just hit (`this`) to `attacker`'s move.
pub(crate) fn on_being_hit(
    effect: AbilityEffect,
    this: &Battler,
    attacker: &Battler,
    move_data: &MoveData,
    ctx: &BattleContext,
) -> Option<HitResult> {
    let contact = move_data.has_flag(MoveFlags::CONTACT);
    let result = match effect {
        AbilityEffect::Static if contact => contact_status(Status::Paralysis),
        AbilityEffect::PoisonPoint if contact => contact_status(Status::Poison),
        AbilityEffect::FlameBody if contact => contact_status(Status::Burn),
        AbilityEffect::EffectSpore if contact => {
            contact_status(EFFECT_SPORE[ctx.turn as usize % EFFECT_SPORE.len()])
        }
        AbilityEffect::CuteCharm if contact => HitResult {
            contact_status: Some(Affliction::Volatile(Volatile::Infatuation)),
            contact_chance: 30,
            ..HitResult::default()
        },
        AbilityEffect::RoughSkin | AbilityEffect::IronBarbs if contact => HitResult {
            messages: vec![format!("{} was hurt by {}'s barbs!", attacker.name, this.name)],
            recoil_damage: attacker.fraction_of_max_hp(8),
            ..HitResult::default()
        },
        AbilityEffect::Gooey | AbilityEffect::TanglingHair if contact => HitResult {
            stat_changes: vec![(StageStat::Speed, -1)],
            ..HitResult::default()
        },
        AbilityEffect::CursedBody => HitResult {
            disable_chance: 30,
            ..HitResult::default()
        },
        AbilityEffect::Stench => HitResult {
            contact_status: Some(Affliction::Volatile(Volatile::Flinch)),
            contact_chance: 10,
            ..HitResult::default()
        },
        AbilityEffect::Mummy if contact => HitResult {
            messages: vec![format!("{} touched {}'s Mummy!", attacker.name, this.name)],
            ..HitResult::default()
        },
        AbilityEffect::Justified if move_data.move_type == Type::Dark => HitResult {
            self_stat_changes: vec![(StageStat::Attack, 1)],
            ..HitResult::default()
        },
        AbilityEffect::WeakArmor if move_data.category == MoveCategory::Physical => HitResult {
            self_stat_changes: vec![(StageStat::Defense, -1), (StageStat::Speed, 2)],
            ..HitResult::default()
        },
        _ => return None,
    };
    Some(result)
}

fn contact_status(status: Status) -> HitResult {
    HitResult {
        contact_status: Some(Affliction::Status(status)),
        contact_chance: 30,
        ..HitResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::{battler, move_data};

    #[test]
    fn static_needs_contact() {
        let pikachu = battler(25);
        let machamp = battler(68);
        let ctx = BattleContext::default();
        let hit = on_being_hit(AbilityEffect::Static, &pikachu, &machamp, &move_data(280), &ctx)
            .expect("brick break makes contact");
        assert_eq!(hit.contact_status, Some(Affliction::Status(Status::Paralysis)));
        assert_eq!(hit.contact_chance, 30);
        assert!(on_being_hit(AbilityEffect::Static, &pikachu, &machamp, &move_data(411), &ctx).is_none());
    }

    #[test]
    fn effect_spore_rotates_with_the_turn() {
        let breloom = battler(286);
        let attacker = battler(68);
        let statuses: Vec<_> = (0..3)
            .map(|turn| {
                let ctx = BattleContext {
                    turn,
                    ..BattleContext::default()
                };
                on_being_hit(AbilityEffect::EffectSpore, &breloom, &attacker, &move_data(280), &ctx)
                    .and_then(|hit| hit.contact_status)
            })
            .collect();
        assert_eq!(
            statuses,
            vec![
                Some(Affliction::Status(Status::Sleep)),
                Some(Affliction::Status(Status::Poison)),
                Some(Affliction::Status(Status::Paralysis)),
            ]
        );
    }

    #[test]
    fn rough_skin_recoils_an_eighth() {
        let garchomp = battler(445);
        let attacker = battler(68);
        let hit = on_being_hit(
            AbilityEffect::RoughSkin,
            &garchomp,
            &attacker,
            &move_data(280),
            &BattleContext::default(),
        )
        .expect("contact");
        assert_eq!(hit.recoil_damage, attacker.max_hp() / 8);
    }

    #[test]
    fn weak_armor_trades_defense_for_speed() {
        let mon = battler(598);
        let hit = on_being_hit(
            AbilityEffect::WeakArmor,
            &mon,
            &battler(68),
            &move_data(280),
            &BattleContext::default(),
        )
        .expect("physical");
        assert_eq!(
            hit.self_stat_changes,
            vec![(StageStat::Defense, -1), (StageStat::Speed, 2)]
        );
    }
}
