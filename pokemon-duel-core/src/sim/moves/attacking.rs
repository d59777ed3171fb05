use crate::sim::moves::{MoveData, MoveFlags};

/// Recoil moves return a third of the damage dealt to the user.
pub fn recoil_damage(move_data: &MoveData, damage_dealt: u16) -> Option<u16> {
    if !move_data.has_flag(MoveFlags::RECOIL) || damage_dealt == 0 {
        return None;
    }
    Some((damage_dealt / 3).max(1))
}

pub fn requires_recharge(move_data: &MoveData) -> bool {
    move_data.has_flag(MoveFlags::RECHARGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::move_data;

    #[test]
    fn recoil_is_a_third() {
        let flare_blitz = move_data(394);
        assert_eq!(recoil_damage(&flare_blitz, 90), Some(30));
        assert_eq!(recoil_damage(&flare_blitz, 2), Some(1));
        assert_eq!(recoil_damage(&flare_blitz, 0), None);
        assert_eq!(recoil_damage(&move_data(53), 90), None);
    }

    #[test]
    fn hyper_beam_recharges() {
        assert!(requires_recharge(&move_data(63)));
        assert!(!requires_recharge(&move_data(33)));
    }
}
