//! Read-only views of a match for the presentation layer.

use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::battle::Player;
use pokemon_duel_core::sim::weather_field::Weather;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatureView {
    pub name: String,
    pub species: String,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub stats: StatsSet,
    /// Non-zero stages only.
    pub stages: Vec<(String, i8)>,
    pub status: Option<Status>,
    pub types: Vec<Type>,
}

impl CreatureView {
    pub fn from_battler(battler: &Battler) -> Self {
        Self {
            name: battler.name.clone(),
            species: battler.species_name.clone(),
            level: battler.level,
            hp: battler.current_hp,
            max_hp: battler.max_hp(),
            stats: battler.stats,
            stages: StageStat::ALL
                .iter()
                .filter_map(|stat| {
                    let stage = battler.stages.get(*stat);
                    (stage != 0).then(|| (stat.label().to_string(), stage))
                })
                .collect(),
            status: battler.status,
            types: battler.defending_types(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub alive: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: String,
    pub name: String,
    pub ready: bool,
    pub active: Option<CreatureView>,
    pub roster: Vec<RosterEntry>,
}

impl PlayerView {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            ready: player.ready,
            active: player.active().map(CreatureView::from_battler),
            roster: player
                .team
                .iter()
                .enumerate()
                .map(|(index, battler)| RosterEntry {
                    name: battler.name.clone(),
                    alive: !battler.is_fainted(),
                    active: index == player.active,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattleSnapshot {
    pub key: String,
    pub phase: BattlePhase,
    pub turn: u32,
    pub weather: Option<Weather>,
    pub weather_turns_left: u8,
    pub players: Vec<PlayerView>,
    /// Winner's player id.
    pub winner: Option<String>,
    pub log: Vec<String>,
}

impl BattleSnapshot {
    pub fn capture(key: &str, battle: &Battle, log_tail: usize) -> Self {
        Self {
            key: key.to_string(),
            phase: battle.phase(),
            turn: battle.turn(),
            weather: battle.weather().weather,
            weather_turns_left: battle.weather().turns_left,
            players: battle.players().iter().map(PlayerView::from_player).collect(),
            winner: battle.winner_player().map(|player| player.id.clone()),
            log: battle.log().tail(log_tail).to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
