use crate::data::types::Type;
use crate::sim::stats::StatsSet;
use phf::phf_map;

#[derive(Clone, Copy, Debug)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: &'static str,
    pub types: &'static [Type],
    pub base_stats: StatsSet,
    pub abilities: &'static [u32],
    pub hidden_ability: Option<u32>,
    pub moves: &'static [u32],
}

impl SpeciesRecord {
    pub fn sprite(&self) -> String {
        format!("sprites/{}.png", self.id)
    }
}

use Type::*;

pub static POKEDEX: phf::Map<u32, SpeciesRecord> = phf_map! {
    3u32 => SpeciesRecord {
        id: 3, name: "Venusaur", types: &[Grass, Poison],
        base_stats: StatsSet::new(80, 82, 83, 100, 100, 80),
        abilities: &[65], hidden_ability: Some(34),
        moves: &[412, 188, 414, 79, 75, 22, 235],
    },
    6u32 => SpeciesRecord {
        id: 6, name: "Charizard", types: &[Fire, Flying],
        base_stats: StatsSet::new(78, 84, 78, 109, 85, 100),
        abilities: &[66], hidden_ability: Some(94),
        moves: &[53, 403, 337, 89, 126, 14, 7, 17],
    },
    9u32 => SpeciesRecord {
        id: 9, name: "Blastoise", types: &[Water],
        base_stats: StatsSet::new(79, 83, 100, 85, 105, 78),
        abilities: &[67], hidden_ability: Some(44),
        moves: &[57, 58, 430, 352, 56, 55, 33],
    },
    25u32 => SpeciesRecord {
        id: 25, name: "Pikachu", types: &[Electric],
        base_stats: StatsSet::new(35, 55, 40, 50, 50, 90),
        abilities: &[9], hidden_ability: Some(31),
        moves: &[85, 98, 86, 280, 84, 87, 9],
    },
    38u32 => SpeciesRecord {
        id: 38, name: "Ninetales", types: &[Fire],
        base_stats: StatsSet::new(73, 76, 75, 81, 100, 100),
        abilities: &[18], hidden_ability: Some(70),
        moves: &[53, 94, 261, 399, 126, 52],
    },
    59u32 => SpeciesRecord {
        id: 59, name: "Arcanine", types: &[Fire],
        base_stats: StatsSet::new(90, 110, 80, 100, 80, 95),
        abilities: &[22, 18], hidden_ability: Some(154),
        moves: &[394, 245, 424, 242, 53, 44],
    },
    65u32 => SpeciesRecord {
        id: 65, name: "Alakazam", types: &[Psychic],
        base_stats: StatsSet::new(55, 50, 45, 135, 95, 120),
        abilities: &[28, 39], hidden_ability: Some(98),
        moves: &[94, 247, 411, 105, 93, 417],
    },
    68u32 => SpeciesRecord {
        id: 68, name: "Machamp", types: &[Fighting],
        base_stats: StatsSet::new(90, 130, 80, 65, 85, 55),
        abilities: &[62, 99], hidden_ability: Some(80),
        moves: &[223, 370, 9, 157, 280, 7, 8],
    },
    76u32 => SpeciesRecord {
        id: 76, name: "Golem", types: &[Rock, Ground],
        base_stats: StatsSet::new(80, 120, 130, 55, 65, 45),
        abilities: &[69, 5], hidden_ability: Some(8),
        moves: &[444, 89, 157, 7, 38, 33],
    },
    94u32 => SpeciesRecord {
        id: 94, name: "Gengar", types: &[Ghost, Poison],
        base_stats: StatsSet::new(60, 65, 60, 130, 75, 110),
        abilities: &[26], hidden_ability: Some(130),
        moves: &[247, 188, 411, 109, 421, 325],
    },
    130u32 => SpeciesRecord {
        id: 130, name: "Gyarados", types: &[Water, Flying],
        base_stats: StatsSet::new(95, 125, 79, 60, 100, 81),
        abilities: &[22], hidden_ability: Some(153),
        moves: &[127, 242, 89, 8, 63, 44],
    },
    131u32 => SpeciesRecord {
        id: 131, name: "Lapras", types: &[Water, Ice],
        base_stats: StatsSet::new(130, 85, 80, 85, 95, 60),
        abilities: &[11, 75], hidden_ability: Some(93),
        moves: &[57, 58, 85, 94, 59, 47],
    },
    143u32 => SpeciesRecord {
        id: 143, name: "Snorlax", types: &[Normal],
        base_stats: StatsSet::new(160, 110, 65, 65, 110, 30),
        abilities: &[17, 47], hidden_ability: Some(82),
        moves: &[34, 89, 242, 7, 416, 33],
    },
    149u32 => SpeciesRecord {
        id: 149, name: "Dragonite", types: &[Dragon, Flying],
        base_stats: StatsSet::new(91, 134, 95, 100, 100, 80),
        abilities: &[39], hidden_ability: Some(136),
        moves: &[200, 245, 89, 7, 337, 17],
    },
    150u32 => SpeciesRecord {
        id: 150, name: "Mewtwo", types: &[Psychic],
        base_stats: StatsSet::new(106, 110, 90, 154, 90, 130),
        abilities: &[46], hidden_ability: Some(127),
        moves: &[94, 396, 58, 247, 105, 417],
    },
    184u32 => SpeciesRecord {
        id: 184, name: "Azumarill", types: &[Water, Fairy],
        base_stats: StatsSet::new(100, 50, 80, 60, 80, 50),
        abilities: &[47, 37], hidden_ability: Some(157),
        moves: &[583, 127, 453, 280, 57],
    },
    186u32 => SpeciesRecord {
        id: 186, name: "Politoed", types: &[Water],
        base_stats: StatsSet::new(90, 75, 75, 90, 100, 70),
        abilities: &[11, 6], hidden_ability: Some(2),
        moves: &[56, 58, 94, 47, 57],
    },
    212u32 => SpeciesRecord {
        id: 212, name: "Scizor", types: &[Bug, Steel],
        base_stats: StatsSet::new(70, 130, 100, 55, 80, 65),
        abilities: &[68, 101], hidden_ability: Some(135),
        moves: &[418, 404, 370, 14, 442],
    },
    230u32 => SpeciesRecord {
        id: 230, name: "Kingdra", types: &[Water, Dragon],
        base_stats: StatsSet::new(75, 95, 95, 95, 95, 85),
        abilities: &[33, 97], hidden_ability: Some(6),
        moves: &[56, 434, 58, 116, 127],
    },
    233u32 => SpeciesRecord {
        id: 233, name: "Porygon2", types: &[Normal],
        base_stats: StatsSet::new(85, 80, 90, 105, 95, 60),
        abilities: &[36, 88], hidden_ability: Some(148),
        moves: &[58, 85, 105, 63, 304],
    },
    248u32 => SpeciesRecord {
        id: 248, name: "Tyranitar", types: &[Rock, Dark],
        base_stats: StatsSet::new(100, 134, 110, 95, 100, 61),
        abilities: &[45], hidden_ability: Some(127),
        moves: &[444, 242, 89, 7, 157],
    },
    257u32 => SpeciesRecord {
        id: 257, name: "Blaziken", types: &[Fire, Fighting],
        base_stats: StatsSet::new(80, 120, 70, 110, 70, 80),
        abilities: &[66], hidden_ability: Some(3),
        moves: &[394, 370, 14, 413, 7],
    },
    282u32 => SpeciesRecord {
        id: 282, name: "Gardevoir", types: &[Psychic, Fairy],
        base_stats: StatsSet::new(68, 65, 65, 125, 115, 80),
        abilities: &[28, 36], hidden_ability: Some(140),
        moves: &[585, 94, 247, 109, 93],
    },
    286u32 => SpeciesRecord {
        id: 286, name: "Breloom", types: &[Grass, Fighting],
        base_stats: StatsSet::new(60, 130, 80, 60, 60, 70),
        abilities: &[27, 90], hidden_ability: Some(101),
        moves: &[402, 370, 79, 418, 75],
    },
    292u32 => SpeciesRecord {
        id: 292, name: "Shedinja", types: &[Bug, Ghost],
        base_stats: StatsSet::new(1, 90, 45, 30, 30, 40),
        abilities: &[25], hidden_ability: None,
        moves: &[404, 421, 425, 14],
    },
    437u32 => SpeciesRecord {
        id: 437, name: "Bronzong", types: &[Steel, Psychic],
        base_stats: StatsSet::new(67, 89, 116, 79, 116, 33),
        abilities: &[26, 85], hidden_ability: Some(134),
        moves: &[442, 428, 89, 86, 94],
    },
    445u32 => SpeciesRecord {
        id: 445, name: "Garchomp", types: &[Dragon, Ground],
        base_stats: StatsSet::new(108, 130, 95, 80, 85, 102),
        abilities: &[8], hidden_ability: Some(24),
        moves: &[89, 200, 444, 424, 14],
    },
    448u32 => SpeciesRecord {
        id: 448, name: "Lucario", types: &[Fighting, Steel],
        base_stats: StatsSet::new(70, 110, 70, 115, 70, 90),
        abilities: &[80, 39], hidden_ability: Some(154),
        moves: &[396, 430, 370, 418, 417],
    },
    472u32 => SpeciesRecord {
        id: 472, name: "Gliscor", types: &[Ground, Flying],
        base_stats: StatsSet::new(75, 95, 125, 45, 75, 95),
        abilities: &[52, 8], hidden_ability: Some(90),
        moves: &[89, 404, 242, 14, 92],
    },
    547u32 => SpeciesRecord {
        id: 547, name: "Whimsicott", types: &[Grass, Fairy],
        base_stats: StatsSet::new(60, 67, 85, 77, 75, 116),
        abilities: &[158, 151], hidden_ability: Some(34),
        moves: &[585, 412, 86, 235, 79],
    },
    555u32 => SpeciesRecord {
        id: 555, name: "Darmanitan", types: &[Fire],
        base_stats: StatsSet::new(105, 140, 55, 30, 55, 95),
        abilities: &[125], hidden_ability: Some(161),
        moves: &[394, 7, 280, 89, 428],
    },
    598u32 => SpeciesRecord {
        id: 598, name: "Ferrothorn", types: &[Grass, Steel],
        base_stats: StatsSet::new(74, 94, 131, 54, 116, 20),
        abilities: &[160], hidden_ability: Some(107),
        moves: &[442, 402, 92, 235],
    },
    658u32 => SpeciesRecord {
        id: 658, name: "Greninja", types: &[Water, Dark],
        base_stats: StatsSet::new(72, 95, 67, 103, 71, 122),
        abilities: &[210, 67], hidden_ability: Some(168),
        moves: &[57, 399, 58, 453, 56],
    },
    663u32 => SpeciesRecord {
        id: 663, name: "Talonflame", types: &[Fire, Flying],
        base_stats: StatsSet::new(78, 81, 71, 74, 69, 126),
        abilities: &[49], hidden_ability: Some(177),
        moves: &[413, 394, 98, 14, 17],
    },
    681u32 => SpeciesRecord {
        id: 681, name: "Aegislash", types: &[Steel, Ghost],
        base_stats: StatsSet::new(60, 50, 140, 50, 140, 60),
        abilities: &[176], hidden_ability: None,
        moves: &[247, 430, 425, 588, 442],
    },
    718u32 => SpeciesRecord {
        id: 718, name: "Zygarde", types: &[Dragon, Ground],
        base_stats: StatsSet::new(108, 100, 121, 81, 95, 95),
        abilities: &[211], hidden_ability: None,
        moves: &[89, 200, 444, 337],
    },
    888u32 => SpeciesRecord {
        id: 888, name: "Zacian", types: &[Fairy],
        base_stats: StatsSet::new(92, 120, 115, 80, 115, 138),
        abilities: &[234], hidden_ability: None,
        moves: &[583, 370, 404, 14],
    },
    889u32 => SpeciesRecord {
        id: 889, name: "Zamazenta", types: &[Fighting],
        base_stats: StatsSet::new(92, 120, 115, 80, 115, 138),
        abilities: &[235], hidden_ability: None,
        moves: &[370, 242, 442, 583],
    },
};

pub fn get_species(id: u32) -> Option<&'static SpeciesRecord> {
    POKEDEX.get(&id)
}
