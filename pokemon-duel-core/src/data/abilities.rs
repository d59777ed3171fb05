use phf::phf_map;

pub static ABILITY_NAMES: phf::Map<u32, &'static str> = phf_map! {
    1u32 => "Stench",
    2u32 => "Drizzle",
    3u32 => "Speed Boost",
    5u32 => "Sturdy",
    6u32 => "Damp",
    7u32 => "Limber",
    8u32 => "Sand Veil",
    9u32 => "Static",
    10u32 => "Volt Absorb",
    11u32 => "Water Absorb",
    12u32 => "Oblivious",
    15u32 => "Insomnia",
    17u32 => "Immunity",
    18u32 => "Flash Fire",
    20u32 => "Own Tempo",
    22u32 => "Intimidate",
    24u32 => "Rough Skin",
    25u32 => "Wonder Guard",
    26u32 => "Levitate",
    27u32 => "Effect Spore",
    28u32 => "Synchronize",
    31u32 => "Lightning Rod",
    33u32 => "Swift Swim",
    34u32 => "Chlorophyll",
    36u32 => "Trace",
    37u32 => "Huge Power",
    38u32 => "Poison Point",
    39u32 => "Inner Focus",
    40u32 => "Magma Armor",
    41u32 => "Water Veil",
    44u32 => "Rain Dish",
    45u32 => "Sand Stream",
    46u32 => "Pressure",
    47u32 => "Thick Fat",
    49u32 => "Flame Body",
    52u32 => "Hyper Cutter",
    55u32 => "Hustle",
    56u32 => "Cute Charm",
    61u32 => "Shed Skin",
    62u32 => "Guts",
    65u32 => "Overgrow",
    66u32 => "Blaze",
    67u32 => "Torrent",
    68u32 => "Swarm",
    69u32 => "Rock Head",
    70u32 => "Drought",
    72u32 => "Vital Spirit",
    74u32 => "Pure Power",
    75u32 => "Shell Armor",
    78u32 => "Motor Drive",
    80u32 => "Steadfast",
    82u32 => "Gluttony",
    85u32 => "Heatproof",
    87u32 => "Dry Skin",
    88u32 => "Download",
    89u32 => "Iron Fist",
    90u32 => "Poison Heal",
    91u32 => "Adaptability",
    93u32 => "Hydration",
    94u32 => "Solar Power",
    95u32 => "Quick Feet",
    97u32 => "Sniper",
    98u32 => "Magic Guard",
    99u32 => "No Guard",
    101u32 => "Technician",
    107u32 => "Anticipation",
    110u32 => "Tinted Lens",
    111u32 => "Filter",
    113u32 => "Scrappy",
    114u32 => "Storm Drain",
    115u32 => "Ice Body",
    116u32 => "Solid Rock",
    117u32 => "Snow Warning",
    119u32 => "Frisk",
    120u32 => "Reckless",
    125u32 => "Sheer Force",
    127u32 => "Unnerve",
    130u32 => "Cursed Body",
    133u32 => "Weak Armor",
    134u32 => "Heavy Metal",
    135u32 => "Light Metal",
    136u32 => "Multiscale",
    140u32 => "Telepathy",
    146u32 => "Sand Rush",
    148u32 => "Analytic",
    151u32 => "Infiltrator",
    152u32 => "Mummy",
    153u32 => "Moxie",
    154u32 => "Justified",
    157u32 => "Sap Sipper",
    158u32 => "Prankster",
    159u32 => "Sand Force",
    160u32 => "Iron Barbs",
    161u32 => "Zen Mode",
    168u32 => "Protean",
    169u32 => "Fur Coat",
    173u32 => "Strong Jaw",
    176u32 => "Stance Change",
    177u32 => "Gale Wings",
    178u32 => "Mega Launcher",
    181u32 => "Tough Claws",
    183u32 => "Gooey",
    200u32 => "Steelworker",
    202u32 => "Slush Rush",
    205u32 => "Triage",
    210u32 => "Battle Bond",
    211u32 => "Power Construct",
    220u32 => "Soul-Heart",
    221u32 => "Tangling Hair",
    224u32 => "Beast Boost",
    232u32 => "Prism Armor",
    233u32 => "Neuroforce",
    234u32 => "Intrepid Sword",
    235u32 => "Dauntless Shield",
    264u32 => "Chilling Neigh",
    265u32 => "Grim Neigh",
};

pub fn ability_name(id: u32) -> Option<&'static str> {
    ABILITY_NAMES.get(&id).copied()
}
