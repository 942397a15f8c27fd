//! Core data models for Poké Whack.
//! Creatures, spawns and the per-session counters live here; the systems that
//! mutate them sit in their own modules.

use serde::{Deserialize, Serialize};

/// Milliseconds on the host clock.
pub type Millis = u64;

/// Index of a hole on the board, row-major.
pub type SlotId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    /// Catching it ends the run.
    Hazard,
    Legendary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDef {
    pub name: String,
    /// Base point value before shiny doubling and combo. Zero for the hazard.
    #[serde(default)]
    pub points: u64,
    pub rarity: Rarity,
    #[serde(default)]
    pub shiny_eligible: bool,
    /// Sprite URL handed to the render sink.
    pub image: String,
    /// Cry URL; empty means the creature is silent.
    #[serde(default)]
    pub cry: String,
}

impl CreatureDef {
    pub fn is_hazard(&self) -> bool {
        self.rarity == Rarity::Hazard
    }

    pub fn is_legendary(&self) -> bool {
        self.rarity == Rarity::Legendary
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Normal,
    Shiny,
    LegendaryGlow,
    Hazard,
}

impl Variant {
    /// CSS class the page uses to tint the hole.
    pub fn visual_tag(self) -> &'static str {
        match self {
            Variant::Normal => "safe-to-click",
            Variant::Hazard => "avoid-click",
            Variant::Shiny | Variant::LegendaryGlow => "shiny-pokemon",
        }
    }

    pub fn is_hazard(self) -> bool {
        matches!(self, Variant::Hazard)
    }
}

/// A creature currently visible and clickable in a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSpawn {
    /// Snapshot of the definition; `points` is already doubled for shiny spawns.
    pub creature: CreatureDef,
    pub slot: SlotId,
    pub variant: Variant,
    pub spawned_at: Millis,
    pub expires_at: Millis,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u64,
    /// Multiplier in `1..=max_combo`.
    pub combo: u32,
    pub consecutive_catches: u32,
    /// Empty until the first catch of the session.
    pub last_creature: String,
    pub same_creature_streak: u32,
    pub is_running: bool,
    pub cadence_ms: Millis,
}

impl SessionState {
    pub fn new(cadence_ms: Millis) -> Self {
        Self {
            score: 0,
            combo: 1,
            consecutive_catches: 0,
            last_creature: String::new(),
            same_creature_streak: 0,
            is_running: false,
            cadence_ms,
        }
    }

    /// Zero every counter for a fresh run. Cadence and the running flag are left alone.
    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 1;
        self.consecutive_catches = 0;
        self.last_creature.clear();
        self.same_creature_streak = 0;
    }
}

/// Result of resolving one activation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    HazardHit,
    Catch {
        creature: CreatureDef,
        variant: Variant,
        slot: SlotId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_tags_match_page_classes() {
        assert_eq!(Variant::Normal.visual_tag(), "safe-to-click");
        assert_eq!(Variant::Hazard.visual_tag(), "avoid-click");
        assert_eq!(Variant::Shiny.visual_tag(), "shiny-pokemon");
        assert_eq!(Variant::LegendaryGlow.visual_tag(), "shiny-pokemon");
    }

    #[test]
    fn reset_keeps_cadence_and_running_flag() {
        let mut s = SessionState::new(1500);
        s.score = 99;
        s.combo = 4;
        s.consecutive_catches = 7;
        s.last_creature = "Meowth".into();
        s.same_creature_streak = 2;
        s.is_running = true;
        s.reset();
        assert_eq!(s.score, 0);
        assert_eq!(s.combo, 1);
        assert_eq!(s.consecutive_catches, 0);
        assert!(s.last_creature.is_empty());
        assert_eq!(s.same_creature_streak, 0);
        assert!(s.is_running);
        assert_eq!(s.cadence_ms, 1500);
    }
}
