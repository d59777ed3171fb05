use crate::data::types::Type;
use crate::sim::moves::{EffectTarget, MoveCategory, MoveData, MoveEffect, MoveFlags};
use crate::sim::pokemon::{StageStat, Status, Volatile};
use phf::phf_map;

#[derive(Clone, Copy, Debug)]
pub struct MoveRecord {
    pub id: u32,
    pub name: &'static str,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    pub accuracy: u8,
    pub pp: u8,
    pub priority: i8,
    pub flags: MoveFlags,
    pub effect: MoveEffect,
    pub effect_chance: u8,
}

impl MoveRecord {
    const fn new(
        id: u32,
        name: &'static str,
        move_type: Type,
        category: MoveCategory,
        power: u16,
        accuracy: u8,
        pp: u8,
    ) -> Self {
        Self {
            id,
            name,
            move_type,
            category,
            power,
            accuracy,
            pp,
            priority: 0,
            flags: MoveFlags::empty(),
            effect: MoveEffect::None,
            effect_chance: 0,
        }
    }

    const fn priority(self, priority: i8) -> Self {
        Self { priority, ..self }
    }

    const fn flags(self, flags: MoveFlags) -> Self {
        Self { flags, ..self }
    }

    const fn effect(self, effect: MoveEffect, effect_chance: u8) -> Self {
        Self {
            effect,
            effect_chance,
            ..self
        }
    }

    const fn primary(self, effect: MoveEffect) -> Self {
        self.effect(effect, 0)
    }

    pub fn to_data(&self) -> MoveData {
        MoveData {
            id: self.id,
            name: self.name.to_string(),
            move_type: self.move_type,
            category: self.category,
            power: self.power,
            accuracy: self.accuracy,
            pp: self.pp,
            priority: self.priority,
            flags: self.flags,
            effect: self.effect,
            effect_chance: self.effect_chance,
        }
    }
}

use MoveCategory::{Physical, Special, Status as Other};

const CONTACT: MoveFlags = MoveFlags::CONTACT;
const CONTACT_BITE: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::BITE);
const CONTACT_PUNCH: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::PUNCH);
const CONTACT_RECOIL: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::RECOIL);
const BULLET: MoveFlags = MoveFlags::BULLET;
const PULSE: MoveFlags = MoveFlags::PULSE;
const SOUND: MoveFlags = MoveFlags::SOUND;

const fn on_self(stat: StageStat, stages: i8) -> MoveEffect {
    MoveEffect::StatChange {
        target: EffectTarget::SelfSide,
        stat,
        stages,
    }
}

const fn on_target(stat: StageStat, stages: i8) -> MoveEffect {
    MoveEffect::StatChange {
        target: EffectTarget::Target,
        stat,
        stages,
    }
}

const BURN: MoveEffect = MoveEffect::Status(Status::Burn);
const PARALYZE: MoveEffect = MoveEffect::Status(Status::Paralysis);
const FREEZE: MoveEffect = MoveEffect::Status(Status::Freeze);
const POISON: MoveEffect = MoveEffect::Status(Status::Poison);
const FLINCH: MoveEffect = MoveEffect::Volatile(Volatile::Flinch);
const CONFUSE: MoveEffect = MoveEffect::Volatile(Volatile::Confusion);

pub static MOVEDEX: phf::Map<u32, MoveRecord> = phf_map! {
    7u32 => MoveRecord::new(7, "Fire Punch", Type::Fire, Physical, 75, 100, 15).flags(CONTACT_PUNCH).effect(BURN, 10),
    8u32 => MoveRecord::new(8, "Ice Punch", Type::Ice, Physical, 75, 100, 15).flags(CONTACT_PUNCH).effect(FREEZE, 10),
    9u32 => MoveRecord::new(9, "Thunder Punch", Type::Electric, Physical, 75, 100, 15).flags(CONTACT_PUNCH).effect(PARALYZE, 10),
    10u32 => MoveRecord::new(10, "Scratch", Type::Normal, Physical, 40, 100, 35).flags(CONTACT),
    14u32 => MoveRecord::new(14, "Swords Dance", Type::Normal, Other, 0, 0, 20).primary(on_self(StageStat::Attack, 2)),
    17u32 => MoveRecord::new(17, "Wing Attack", Type::Flying, Physical, 60, 100, 35).flags(CONTACT),
    22u32 => MoveRecord::new(22, "Vine Whip", Type::Grass, Physical, 45, 100, 25).flags(CONTACT),
    33u32 => MoveRecord::new(33, "Tackle", Type::Normal, Physical, 40, 100, 35).flags(CONTACT),
    34u32 => MoveRecord::new(34, "Body Slam", Type::Normal, Physical, 85, 100, 15).flags(CONTACT).effect(PARALYZE, 30),
    38u32 => MoveRecord::new(38, "Double-Edge", Type::Normal, Physical, 120, 100, 15).flags(CONTACT_RECOIL),
    44u32 => MoveRecord::new(44, "Bite", Type::Dark, Physical, 60, 100, 25).flags(CONTACT_BITE).effect(FLINCH, 30),
    45u32 => MoveRecord::new(45, "Growl", Type::Normal, Other, 0, 100, 40).flags(SOUND).primary(on_target(StageStat::Attack, -1)),
    47u32 => MoveRecord::new(47, "Sing", Type::Normal, Other, 0, 55, 15).flags(SOUND).primary(MoveEffect::Status(Status::Sleep)),
    52u32 => MoveRecord::new(52, "Ember", Type::Fire, Special, 40, 100, 25).effect(BURN, 10),
    53u32 => MoveRecord::new(53, "Flamethrower", Type::Fire, Special, 90, 100, 15).effect(BURN, 10),
    55u32 => MoveRecord::new(55, "Water Gun", Type::Water, Special, 40, 100, 25),
    56u32 => MoveRecord::new(56, "Hydro Pump", Type::Water, Special, 110, 80, 5),
    57u32 => MoveRecord::new(57, "Surf", Type::Water, Special, 90, 100, 15),
    58u32 => MoveRecord::new(58, "Ice Beam", Type::Ice, Special, 90, 100, 10).effect(FREEZE, 10),
    59u32 => MoveRecord::new(59, "Blizzard", Type::Ice, Special, 110, 70, 5).effect(FREEZE, 10),
    63u32 => MoveRecord::new(63, "Hyper Beam", Type::Normal, Special, 150, 90, 5).flags(MoveFlags::RECHARGE),
    75u32 => MoveRecord::new(75, "Razor Leaf", Type::Grass, Physical, 55, 95, 25),
    79u32 => MoveRecord::new(79, "Sleep Powder", Type::Grass, Other, 0, 75, 15).primary(MoveEffect::Status(Status::Sleep)),
    84u32 => MoveRecord::new(84, "Thunder Shock", Type::Electric, Special, 40, 100, 30).effect(PARALYZE, 10),
    85u32 => MoveRecord::new(85, "Thunderbolt", Type::Electric, Special, 90, 100, 15).effect(PARALYZE, 10),
    86u32 => MoveRecord::new(86, "Thunder Wave", Type::Electric, Other, 0, 90, 20).primary(PARALYZE),
    87u32 => MoveRecord::new(87, "Thunder", Type::Electric, Special, 110, 70, 10).effect(PARALYZE, 30),
    89u32 => MoveRecord::new(89, "Earthquake", Type::Ground, Physical, 100, 100, 10),
    92u32 => MoveRecord::new(92, "Toxic", Type::Poison, Other, 0, 90, 10).primary(MoveEffect::Status(Status::Toxic)),
    93u32 => MoveRecord::new(93, "Confusion", Type::Psychic, Special, 50, 100, 25).effect(CONFUSE, 10),
    94u32 => MoveRecord::new(94, "Psychic", Type::Psychic, Special, 90, 100, 10).effect(on_target(StageStat::SpDefense, -1), 10),
    97u32 => MoveRecord::new(97, "Agility", Type::Psychic, Other, 0, 0, 30).primary(on_self(StageStat::Speed, 2)),
    98u32 => MoveRecord::new(98, "Quick Attack", Type::Normal, Physical, 40, 100, 30).priority(1).flags(CONTACT),
    103u32 => MoveRecord::new(103, "Screech", Type::Normal, Other, 0, 85, 40).flags(SOUND).primary(on_target(StageStat::Defense, -2)),
    105u32 => MoveRecord::new(105, "Recover", Type::Normal, Other, 0, 0, 5).primary(MoveEffect::HealPercent(50)),
    109u32 => MoveRecord::new(109, "Confuse Ray", Type::Ghost, Other, 0, 100, 10).primary(CONFUSE),
    116u32 => MoveRecord::new(116, "Focus Energy", Type::Normal, Other, 0, 0, 30).primary(MoveEffect::FocusEnergy),
    126u32 => MoveRecord::new(126, "Fire Blast", Type::Fire, Special, 110, 85, 5).effect(BURN, 10),
    127u32 => MoveRecord::new(127, "Waterfall", Type::Water, Physical, 80, 100, 15).flags(CONTACT).effect(FLINCH, 20),
    157u32 => MoveRecord::new(157, "Rock Slide", Type::Rock, Physical, 75, 90, 10).effect(FLINCH, 30),
    188u32 => MoveRecord::new(188, "Sludge Bomb", Type::Poison, Special, 90, 100, 10).flags(BULLET).effect(POISON, 30),
    200u32 => MoveRecord::new(200, "Outrage", Type::Dragon, Physical, 120, 100, 10).flags(CONTACT),
    213u32 => MoveRecord::new(213, "Attract", Type::Normal, Other, 0, 100, 15).primary(MoveEffect::Volatile(Volatile::Infatuation)),
    223u32 => MoveRecord::new(223, "Dynamic Punch", Type::Fighting, Physical, 100, 50, 5).flags(CONTACT_PUNCH).effect(CONFUSE, 100),
    235u32 => MoveRecord::new(235, "Synthesis", Type::Grass, Other, 0, 0, 5).primary(MoveEffect::HealPercent(50)),
    242u32 => MoveRecord::new(242, "Crunch", Type::Dark, Physical, 80, 100, 15).flags(CONTACT_BITE).effect(on_target(StageStat::Defense, -1), 20),
    245u32 => MoveRecord::new(245, "Extreme Speed", Type::Normal, Physical, 80, 100, 5).priority(2).flags(CONTACT),
    247u32 => MoveRecord::new(247, "Shadow Ball", Type::Ghost, Special, 80, 100, 15).flags(BULLET).effect(on_target(StageStat::SpDefense, -1), 20),
    261u32 => MoveRecord::new(261, "Will-O-Wisp", Type::Fire, Other, 0, 85, 15).primary(BURN),
    276u32 => MoveRecord::new(276, "Superpower", Type::Fighting, Physical, 120, 100, 5).flags(CONTACT).effect(on_self(StageStat::Attack, -1), 100),
    280u32 => MoveRecord::new(280, "Brick Break", Type::Fighting, Physical, 75, 100, 15).flags(CONTACT),
    304u32 => MoveRecord::new(304, "Hyper Voice", Type::Normal, Special, 90, 100, 10).flags(SOUND),
    325u32 => MoveRecord::new(325, "Shadow Punch", Type::Ghost, Physical, 60, 0, 20).flags(CONTACT_PUNCH),
    337u32 => MoveRecord::new(337, "Dragon Claw", Type::Dragon, Physical, 80, 100, 15).flags(CONTACT),
    352u32 => MoveRecord::new(352, "Water Pulse", Type::Water, Special, 60, 100, 20).flags(PULSE).effect(CONFUSE, 20),
    370u32 => MoveRecord::new(370, "Close Combat", Type::Fighting, Physical, 120, 100, 5).flags(CONTACT).effect(on_self(StageStat::Defense, -1), 100),
    394u32 => MoveRecord::new(394, "Flare Blitz", Type::Fire, Physical, 120, 100, 15).flags(CONTACT_RECOIL).effect(BURN, 10),
    396u32 => MoveRecord::new(396, "Aura Sphere", Type::Fighting, Special, 80, 0, 20).flags(BULLET.union(PULSE)),
    399u32 => MoveRecord::new(399, "Dark Pulse", Type::Dark, Special, 80, 100, 15).flags(PULSE).effect(FLINCH, 20),
    402u32 => MoveRecord::new(402, "Seed Bomb", Type::Grass, Physical, 80, 100, 15).flags(BULLET),
    403u32 => MoveRecord::new(403, "Air Slash", Type::Flying, Special, 75, 95, 15).effect(FLINCH, 30),
    404u32 => MoveRecord::new(404, "X-Scissor", Type::Bug, Physical, 80, 100, 15).flags(CONTACT),
    405u32 => MoveRecord::new(405, "Bug Buzz", Type::Bug, Special, 90, 100, 10).flags(SOUND).effect(on_target(StageStat::SpDefense, -1), 10),
    406u32 => MoveRecord::new(406, "Dragon Pulse", Type::Dragon, Special, 85, 100, 10).flags(PULSE),
    411u32 => MoveRecord::new(411, "Focus Blast", Type::Fighting, Special, 120, 70, 5).flags(BULLET).effect(on_target(StageStat::SpDefense, -1), 10),
    412u32 => MoveRecord::new(412, "Energy Ball", Type::Grass, Special, 90, 100, 10).flags(BULLET).effect(on_target(StageStat::SpDefense, -1), 10),
    413u32 => MoveRecord::new(413, "Brave Bird", Type::Flying, Physical, 120, 100, 15).flags(CONTACT_RECOIL),
    414u32 => MoveRecord::new(414, "Earth Power", Type::Ground, Special, 90, 100, 10).effect(on_target(StageStat::SpDefense, -1), 10),
    416u32 => MoveRecord::new(416, "Giga Impact", Type::Normal, Physical, 150, 90, 5).flags(CONTACT.union(MoveFlags::RECHARGE)),
    417u32 => MoveRecord::new(417, "Nasty Plot", Type::Dark, Other, 0, 0, 20).primary(on_self(StageStat::SpAttack, 2)),
    418u32 => MoveRecord::new(418, "Bullet Punch", Type::Steel, Physical, 40, 100, 30).priority(1).flags(CONTACT_PUNCH),
    421u32 => MoveRecord::new(421, "Shadow Claw", Type::Ghost, Physical, 70, 100, 15).flags(CONTACT),
    422u32 => MoveRecord::new(422, "Thunder Fang", Type::Electric, Physical, 65, 95, 15).flags(CONTACT_BITE).effect(PARALYZE, 10),
    423u32 => MoveRecord::new(423, "Ice Fang", Type::Ice, Physical, 65, 95, 15).flags(CONTACT_BITE).effect(FREEZE, 10),
    424u32 => MoveRecord::new(424, "Fire Fang", Type::Fire, Physical, 65, 95, 15).flags(CONTACT_BITE).effect(BURN, 10),
    425u32 => MoveRecord::new(425, "Shadow Sneak", Type::Ghost, Physical, 40, 100, 30).priority(1).flags(CONTACT),
    428u32 => MoveRecord::new(428, "Zen Headbutt", Type::Psychic, Physical, 80, 90, 15).flags(CONTACT).effect(FLINCH, 20),
    430u32 => MoveRecord::new(430, "Flash Cannon", Type::Steel, Special, 80, 100, 10).effect(on_target(StageStat::SpDefense, -1), 10),
    434u32 => MoveRecord::new(434, "Draco Meteor", Type::Dragon, Special, 130, 90, 5).effect(on_self(StageStat::SpAttack, -2), 100),
    442u32 => MoveRecord::new(442, "Iron Head", Type::Steel, Physical, 80, 100, 15).flags(CONTACT).effect(FLINCH, 30),
    444u32 => MoveRecord::new(444, "Stone Edge", Type::Rock, Physical, 100, 80, 5),
    453u32 => MoveRecord::new(453, "Aqua Jet", Type::Water, Physical, 40, 100, 20).priority(1).flags(CONTACT),
    529u32 => MoveRecord::new(529, "Drill Run", Type::Ground, Physical, 80, 95, 10).flags(CONTACT),
    542u32 => MoveRecord::new(542, "Hurricane", Type::Flying, Special, 110, 70, 10).effect(CONFUSE, 30),
    583u32 => MoveRecord::new(583, "Play Rough", Type::Fairy, Physical, 90, 90, 10).flags(CONTACT).effect(on_target(StageStat::Attack, -1), 10),
    585u32 => MoveRecord::new(585, "Moonblast", Type::Fairy, Special, 95, 100, 15).effect(on_target(StageStat::SpAttack, -1), 30),
    588u32 => MoveRecord::new(588, "King's Shield", Type::Steel, Other, 0, 0, 10).priority(4).primary(MoveEffect::ShieldStance),
};

pub fn get_move(id: u32) -> Option<&'static MoveRecord> {
    MOVEDEX.get(&id)
}
