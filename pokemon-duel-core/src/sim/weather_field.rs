use crate::data::types::Type;
use crate::sim::pokemon::Battler;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEATHER_TURNS: u8 = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

impl Weather {
    pub const fn start_message(self) -> &'static str {
        match self {
            Weather::Sun => "The sunlight turned harsh!",
            Weather::Rain => "It started to rain!",
            Weather::Sand => "A sandstorm kicked up!",
            Weather::Hail => "It started to hail!",
        }
    }

    pub const fn end_message(self) -> &'static str {
        match self {
            Weather::Sun => "The harsh sunlight faded.",
            Weather::Rain => "The rain stopped.",
            Weather::Sand => "The sandstorm subsided.",
            Weather::Hail => "The hail stopped.",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

/// Active weather and the turns it has left.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WeatherState {
    pub weather: Option<Weather>,
    pub turns_left: u8,
}

impl WeatherState {
    /// Returns false when the same weather is already up.
    pub fn set(&mut self, weather: Weather, turns: u8) -> bool {
        if self.weather == Some(weather) {
            return false;
        }
        self.weather = Some(weather);
        self.turns_left = turns.max(1);
        true
    }

    /// Counts one turn down; yields the weather that just ended.
    pub fn tick(&mut self) -> Option<Weather> {
        let current = self.weather?;
        self.turns_left = self.turns_left.saturating_sub(1);
        if self.turns_left == 0 {
            self.weather = None;
            return Some(current);
        }
        None
    }

    pub fn is(&self, weather: Weather) -> bool {
        self.weather == Some(weather)
    }
}

/// Residual chip from sand or hail, if the battler is exposed to it.
pub fn weather_damage(weather: Option<Weather>, battler: &Battler) -> Option<u16> {
    if battler.is_fainted() {
        return None;
    }
    let spared = match weather? {
        Weather::Sand => [Type::Rock, Type::Ground, Type::Steel]
            .iter()
            .any(|ty| battler.has_type(*ty)),
        Weather::Hail => battler.has_type(Type::Ice),
        Weather::Sun | Weather::Rain => return None,
    };
    if spared {
        return None;
    }
    Some(battler.fraction_of_max_hp(16))
}

pub fn weather_damage_message(weather: Weather, name: &str) -> String {
    match weather {
        Weather::Hail => format!("{name} is pelted by hail!"),
        _ => format!("{name} is buffeted by the sandstorm!"),
    }
}
