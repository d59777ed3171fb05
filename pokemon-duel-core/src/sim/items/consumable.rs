use crate::sim::items::HeldItem;
use crate::sim::pokemon::Battler;

pub fn consume_item(battler: &mut Battler, item: HeldItem) -> bool {
    if battler.held_item() != Some(item) {
        return false;
    }
    battler.item_consumed = true;
    true
}

/// Sitrus Berry restores a quarter of max HP once HP is at or below half.
pub fn try_consume_sitrus_berry(battler: &mut Battler) -> Option<u16> {
    if battler.is_fainted() || battler.current_hp as u32 * 2 > battler.max_hp() as u32 {
        return None;
    }
    if !consume_item(battler, HeldItem::SitrusBerry) {
        return None;
    }
    let amount = battler.fraction_of_max_hp(4);
    Some(battler.heal(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::battler;

    #[test]
    fn sitrus_waits_for_half_hp() {
        let mut mon = battler(143);
        mon.item = Some(158);
        assert_eq!(try_consume_sitrus_berry(&mut mon), None);
        mon.current_hp = mon.max_hp() / 2;
        let healed = try_consume_sitrus_berry(&mut mon).expect("berry triggers");
        assert_eq!(healed, mon.max_hp() / 4);
        assert!(mon.item_consumed);
        assert_eq!(mon.held_item(), None);
        mon.current_hp = 1;
        assert_eq!(try_consume_sitrus_berry(&mut mon), None);
    }
}
