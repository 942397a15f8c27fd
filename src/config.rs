//! Tunables and the persisted player settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DifficultyParseError;
use crate::model::Millis;

/// Banner length for combo and catch messages.
pub const SHORT_BANNER_MS: Millis = 1000;
/// Banner length for rarity and streak messages.
pub const BANNER_MS: Millis = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Period of the spawn timer.
    pub fn cadence_ms(self) -> Millis {
        match self {
            Difficulty::Easy => 2000,
            Difficulty::Medium => 1500,
            Difficulty::Hard => 1000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyParseError(s.to_string())),
        }
    }
}

/// Rarity thresholds and visibility window used by the spawner.
/// Thresholds are cumulative and checked in order against one uniform draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub legendary_below: f64,
    pub hazard_below: f64,
    pub shiny_below: f64,
    pub min_visible_ms: Millis,
    pub max_visible_ms: Millis,
    /// Board-wide cap on simultaneous spawns.
    pub max_active: usize,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            legendary_below: 0.02,
            hazard_below: 0.17,
            shiny_below: 0.22,
            min_visible_ms: 1000,
            max_visible_ms: 2000,
            max_active: 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_slots: usize,
    pub spawn: SpawnTuning,
    /// Idle time after the last catch before the combo falls back to 1.
    pub combo_decay_ms: Millis,
    /// Consecutive catches needed before each catch raises the combo.
    pub combo_threshold: u32,
    pub max_combo: u32,
    /// Identical catches in a row that trigger the streak bonus.
    pub streak_length: u32,
    /// Streak bonus per combo level.
    pub streak_bonus: u64,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_slots: 9,
            spawn: SpawnTuning::default(),
            combo_decay_ms: 3000,
            combo_threshold: 3,
            max_combo: 5,
            streak_length: 3,
            streak_bonus: 50,
            difficulty: Difficulty::default(),
        }
    }
}

/// Player choices persisted by the front-end between visits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
}
