use crate::sim::moves::{MoveData, MoveEffect};
use rand::Rng;

/// Rolls a damaging move's secondary effect against its chance.
pub(crate) fn roll_secondary(move_data: &MoveData, rng: &mut impl Rng) -> Option<MoveEffect> {
    if !move_data.has_secondary() {
        return None;
    }
    let roll: u8 = rng.gen_range(0..100);
    (roll < move_data.effect_chance).then_some(move_data.effect)
}
