use phf::phf_map;

pub static ITEMS: phf::Map<u32, &'static str> = phf_map! {
    158u32 => "Sitrus Berry",
    220u32 => "Choice Band",
    234u32 => "Leftovers",
    237u32 => "Miracle Seed",
    238u32 => "Never-Melt Ice",
    241u32 => "Black Belt",
    242u32 => "Magnet",
    243u32 => "Mystic Water",
    244u32 => "Sharp Beak",
    245u32 => "Poison Barb",
    246u32 => "Silver Powder",
    247u32 => "Soft Sand",
    248u32 => "Twisted Spoon",
    249u32 => "Hard Stone",
    250u32 => "Spell Tag",
    251u32 => "Black Glasses",
    252u32 => "Dragon Fang",
    253u32 => "Metal Coat",
    266u32 => "Muscle Band",
    267u32 => "Wise Glasses",
    268u32 => "Expert Belt",
    270u32 => "Life Orb",
    271u32 => "Charcoal",
    275u32 => "Focus Sash",
    281u32 => "Black Sludge",
    287u32 => "Choice Scarf",
    297u32 => "Choice Specs",
    540u32 => "Rocky Helmet",
    640u32 => "Assault Vest",
    644u32 => "Fairy Feather",
};

pub fn item_name(id: u32) -> Option<&'static str> {
    ITEMS.get(&id).copied()
}
