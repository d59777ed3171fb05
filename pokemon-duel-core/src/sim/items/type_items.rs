use crate::data::types::Type;

pub fn boosted_type(item_id: u32) -> Option<Type> {
    let ty = match item_id {
        271 => Type::Fire,
        243 => Type::Water,
        242 => Type::Electric,
        237 => Type::Grass,
        238 => Type::Ice,
        241 => Type::Fighting,
        245 => Type::Poison,
        247 => Type::Ground,
        244 => Type::Flying,
        248 => Type::Psychic,
        246 => Type::Bug,
        249 => Type::Rock,
        250 => Type::Ghost,
        252 => Type::Dragon,
        251 => Type::Dark,
        253 => Type::Steel,
        644 => Type::Fairy,
        _ => return None,
    };
    Some(ty)
}

pub fn item_type_boost(boosted: Type, move_type: Type) -> f64 {
    if boosted == move_type {
        1.2
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_only_matches_its_type() {
        let charcoal = boosted_type(271).expect("charcoal");
        assert_eq!(item_type_boost(charcoal, Type::Fire), 1.2);
        assert_eq!(item_type_boost(charcoal, Type::Water), 1.0);
        assert_eq!(boosted_type(234), None);
    }
}
