use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn from_name(name: &str) -> Option<Nature> {
        Nature::ALL
            .iter()
            .copied()
            .find(|n| format!("{n:?}").eq_ignore_ascii_case(name.trim()))
    }

    pub fn is_neutral(self) -> bool {
        matches!(
            self,
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];
}

pub fn stat_modifier(nature: Nature, stat: Stat) -> f64 {
    match nature {
        Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => 1.0,
        Nature::Lonely => bonus(stat, Stat::Atk, Stat::Def),
        Nature::Brave => bonus(stat, Stat::Atk, Stat::Spe),
        Nature::Adamant => bonus(stat, Stat::Atk, Stat::Spa),
        Nature::Naughty => bonus(stat, Stat::Atk, Stat::Spd),
        Nature::Bold => bonus(stat, Stat::Def, Stat::Atk),
        Nature::Relaxed => bonus(stat, Stat::Def, Stat::Spe),
        Nature::Impish => bonus(stat, Stat::Def, Stat::Spa),
        Nature::Lax => bonus(stat, Stat::Def, Stat::Spd),
        Nature::Timid => bonus(stat, Stat::Spe, Stat::Atk),
        Nature::Hasty => bonus(stat, Stat::Spe, Stat::Def),
        Nature::Jolly => bonus(stat, Stat::Spe, Stat::Spa),
        Nature::Naive => bonus(stat, Stat::Spe, Stat::Spd),
        Nature::Modest => bonus(stat, Stat::Spa, Stat::Atk),
        Nature::Mild => bonus(stat, Stat::Spa, Stat::Def),
        Nature::Quiet => bonus(stat, Stat::Spa, Stat::Spe),
        Nature::Rash => bonus(stat, Stat::Spa, Stat::Spd),
        Nature::Calm => bonus(stat, Stat::Spd, Stat::Atk),
        Nature::Gentle => bonus(stat, Stat::Spd, Stat::Def),
        Nature::Sassy => bonus(stat, Stat::Spd, Stat::Spe),
        Nature::Careful => bonus(stat, Stat::Spd, Stat::Spa),
    }
}

fn bonus(stat: Stat, boosted: Stat, lowered: Stat) -> f64 {
    if stat == boosted {
        1.1
    } else if stat == lowered {
        0.9
    } else {
        1.0
    }
}

fn scaled_base(base: u16, iv: u16, ev: u16, level: u8) -> u32 {
    let base_value = base as u32 * 2 + iv as u32 + ev as u32 / 4;
    base_value * level as u32 / 100
}

pub fn calc_hp(base: u16, iv: u16, ev: u16, level: u8) -> u16 {
    let hp = scaled_base(base, iv, ev, level) + level as u32 + 10;
    hp.min(u16::MAX as u32) as u16
}

pub fn calc_stat(base: u16, iv: u16, ev: u16, level: u8, nature_mod: f64) -> u16 {
    let stat = (scaled_base(base, iv, ev, level) + 5) as f64 * nature_mod;
    stat.floor() as u16
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StatsSet {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatsSet {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut u16 {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spa => &mut self.spa,
            Stat::Spd => &mut self.spd,
            Stat::Spe => &mut self.spe,
        }
    }

    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s) as u32).sum()
    }

    pub fn max(&self) -> u16 {
        Stat::ALL.iter().map(|s| self.get(*s)).max().unwrap_or(0)
    }

    /// Realized stats from base stats, IVs, EVs, level and nature.
    pub fn calculate(base: &StatsSet, ivs: &StatsSet, evs: &StatsSet, level: u8, nature: Nature) -> Self {
        let other = |stat: Stat| {
            calc_stat(
                base.get(stat),
                ivs.get(stat),
                evs.get(stat),
                level,
                stat_modifier(nature, stat),
            )
        };
        Self {
            hp: calc_hp(base.hp, ivs.hp, evs.hp, level),
            atk: other(Stat::Atk),
            def: other(Stat::Def),
            spa: other(Stat::Spa),
            spd: other(Stat::Spd),
            spe: other(Stat::Spe),
        }
    }
}

pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// `base * (2+s)/2` for non-negative stages, `base * 2/(2-s)` otherwise.
pub fn apply_stage(base: u16, stage: i8) -> u16 {
    let stage = stage.clamp(MIN_STAGE, MAX_STAGE) as i32;
    let base = base as i32;
    let value = if stage >= 0 {
        base * (2 + stage) / 2
    } else {
        base * 2 / (2 - stage)
    };
    value as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CHARIZARD: StatsSet = StatsSet::new(78, 84, 78, 109, 85, 100);
    const DRAGONITE: StatsSet = StatsSet::new(91, 134, 95, 100, 100, 80);

    #[test]
    fn test_charizard_lv50_adamant() {
        let evs = StatsSet::new(0, 252, 0, 0, 4, 252);
        let ivs = StatsSet::uniform(31);
        let set = StatsSet::calculate(&CHARIZARD, &ivs, &evs, 50, Nature::Adamant);
        assert_eq!(set.hp, 153);
        assert_eq!(set.atk, 149);
        assert_eq!(set.def, 98);
        assert_eq!(set.spa, 116);
        assert_eq!(set.spd, 106);
        assert_eq!(set.spe, 152);
    }

    #[test]
    fn test_dragonite_lv50_neutral() {
        let set = StatsSet::calculate(
            &DRAGONITE,
            &StatsSet::default(),
            &StatsSet::default(),
            50,
            Nature::Hardy,
        );
        assert_eq!(set.hp, 151);
        assert_eq!(set.atk, 139);
        assert_eq!(set.def, 100);
        assert_eq!(set.spa, 105);
        assert_eq!(set.spd, 105);
        assert_eq!(set.spe, 85);
    }

    #[test]
    fn test_nature_modifiers() {
        assert!((stat_modifier(Nature::Adamant, Stat::Atk) - 1.1).abs() < f64::EPSILON);
        assert!((stat_modifier(Nature::Adamant, Stat::Spa) - 0.9).abs() < f64::EPSILON);
        assert_eq!(stat_modifier(Nature::Adamant, Stat::Def), 1.0);
        let neutral = Nature::ALL.iter().filter(|n| n.is_neutral()).count();
        assert_eq!(neutral, 5);
    }

    #[rstest]
    #[case(100, 0, 100)]
    #[case(100, 1, 150)]
    #[case(100, 6, 400)]
    #[case(100, -1, 66)]
    #[case(100, -6, 25)]
    #[case(100, 9, 400)]
    #[case(100, -9, 25)]
    fn stage_scaling(#[case] base: u16, #[case] stage: i8, #[case] expected: u16) {
        assert_eq!(apply_stage(base, stage), expected);
    }

    #[test]
    fn stage_scaling_is_monotonic() {
        for base in [1u16, 37, 100, 255, 999] {
            let mut last = 0;
            for stage in MIN_STAGE..=MAX_STAGE {
                let value = apply_stage(base, stage);
                assert!(value >= last, "base {base} stage {stage}");
                last = value;
            }
            assert_eq!(apply_stage(base, 0), base);
        }
    }

    #[test]
    fn nature_names_parse() {
        assert_eq!(Nature::from_name("adamant"), Some(Nature::Adamant));
        assert_eq!(Nature::from_name("nope"), None);
    }
}
