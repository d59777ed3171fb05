use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    pub fn from_name(name: &str) -> Option<Type> {
        Type::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Product of the pairwise multipliers against every defending type.
pub fn effectiveness(move_type: Type, target_types: &[Type]) -> f64 {
    if target_types.is_empty() {
        return 1.0;
    }
    target_types
        .iter()
        .map(|def| single_type_effectiveness(move_type, *def))
        .product()
}

pub fn single_type_effectiveness(attacking: Type, defending: Type) -> f64 {
    use Type::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => 0.5,
            Grass | Ice | Bug | Steel => 2.0,
            _ => 1.0,
        },
        Water => match defending {
            Water | Grass | Dragon => 0.5,
            Fire | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Electric => match defending {
            Electric | Grass | Dragon => 0.5,
            Water | Flying => 2.0,
            Ground => 0.0,
            _ => 1.0,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 0.5,
            Water | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => 0.5,
            Grass | Ground | Flying | Dragon => 2.0,
            _ => 1.0,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => 2.0,
            Poison | Flying | Psychic | Bug | Fairy => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Poison => match defending {
            Grass | Fairy => 2.0,
            Poison | Ground | Rock | Ghost => 0.5,
            Steel => 0.0,
            _ => 1.0,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => 2.0,
            Grass | Bug => 0.5,
            Flying => 0.0,
            _ => 1.0,
        },
        Flying => match defending {
            Grass | Fighting | Bug => 2.0,
            Electric | Rock | Steel => 0.5,
            _ => 1.0,
        },
        Psychic => match defending {
            Fighting | Poison => 2.0,
            Psychic | Steel => 0.5,
            Dark => 0.0,
            _ => 1.0,
        },
        Bug => match defending {
            Grass | Psychic | Dark => 2.0,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => 0.5,
            _ => 1.0,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => 2.0,
            Fighting | Ground | Steel => 0.5,
            _ => 1.0,
        },
        Ghost => match defending {
            Ghost | Psychic => 2.0,
            Dark => 0.5,
            Normal => 0.0,
            _ => 1.0,
        },
        Dragon => match defending {
            Dragon => 2.0,
            Steel => 0.5,
            Fairy => 0.0,
            _ => 1.0,
        },
        Dark => match defending {
            Psychic | Ghost => 2.0,
            Fighting | Dark | Fairy => 0.5,
            _ => 1.0,
        },
        Steel => match defending {
            Rock | Ice | Fairy => 2.0,
            Fire | Water | Electric | Steel => 0.5,
            _ => 1.0,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => 2.0,
            Fire | Poison | Steel => 0.5,
            _ => 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_types_compound() {
        assert_eq!(effectiveness(Type::Ice, &[Type::Dragon, Type::Ground]), 4.0);
        assert_eq!(effectiveness(Type::Fire, &[Type::Water, Type::Rock]), 0.25);
        assert_eq!(effectiveness(Type::Electric, &[Type::Water, Type::Ground]), 0.0);
        assert_eq!(effectiveness(Type::Normal, &[]), 1.0);
    }

    #[test]
    fn every_pair_stays_in_the_known_set() {
        let allowed = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];
        for atk in Type::ALL {
            for a in Type::ALL {
                for b in Type::ALL {
                    let value = effectiveness(atk, &[a, b]);
                    assert!(allowed.contains(&value), "{atk:?} vs {a:?}/{b:?} = {value}");
                }
            }
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name(" PSYCHIC "), Some(Type::Psychic));
        assert_eq!(Type::from_name("sound"), None);
    }
}
