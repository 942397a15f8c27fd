//! Score, combo multiplier and same-creature streaks.

use crate::config::{BANNER_MS, GameConfig, SHORT_BANNER_MS};
use crate::model::{CreatureDef, Millis, SessionState, SlotId, Variant};

/// What the render side should hear about, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreEvent {
    ScoreChanged(u64),
    ComboChanged(u32),
    CatchMessage { slot: SlotId, text: String, duration_ms: Millis },
    Notification { text: String, duration_ms: Millis },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRules {
    pub combo_threshold: u32,
    pub max_combo: u32,
    pub streak_length: u32,
    pub streak_bonus: u64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for ScoreRules {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            combo_threshold: cfg.combo_threshold,
            max_combo: cfg.max_combo,
            streak_length: cfg.streak_length,
            streak_bonus: cfg.streak_bonus,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    rules: ScoreRules,
}

impl ScoreEngine {
    pub fn new(rules: ScoreRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// Applies one catch. `creature.points` is the spawn snapshot value, so shiny
    /// doubling has already happened. Restarting the decay timer is up to the caller.
    pub fn apply_catch(
        &self,
        state: &mut SessionState,
        creature: &CreatureDef,
        variant: Variant,
        slot: SlotId,
    ) -> Vec<ScoreEvent> {
        let mut events = Vec::with_capacity(6);

        let actual = creature.points * u64::from(state.combo);
        state.score += actual;
        events.push(ScoreEvent::ScoreChanged(state.score));
        events.push(ScoreEvent::CatchMessage {
            slot,
            text: format!("Caught {}! +{}", creature.name, actual),
            duration_ms: SHORT_BANNER_MS,
        });

        state.consecutive_catches += 1;
        if state.consecutive_catches >= self.rules.combo_threshold {
            state.combo = (state.combo + 1).min(self.rules.max_combo);
            events.push(ScoreEvent::ComboChanged(state.combo));
            events.push(ScoreEvent::Notification {
                text: format!("Combo x{}!", state.combo),
                duration_ms: SHORT_BANNER_MS,
            });
        }

        if state.last_creature == creature.name {
            state.same_creature_streak += 1;
            if state.same_creature_streak >= self.rules.streak_length {
                let bonus = self.rules.streak_bonus * u64::from(state.combo);
                state.score += bonus;
                events.push(ScoreEvent::ScoreChanged(state.score));
                events.push(ScoreEvent::Notification {
                    text: format!(
                        "{} {}s in a row! +{}",
                        self.rules.streak_length, creature.name, bonus
                    ),
                    duration_ms: BANNER_MS,
                });
                state.same_creature_streak = 0;
            }
        } else {
            state.same_creature_streak = 1;
            state.last_creature = creature.name.clone();
        }

        match variant {
            Variant::Shiny => events.push(ScoreEvent::Notification {
                text: "Shiny Bonus!".to_string(),
                duration_ms: BANNER_MS,
            }),
            Variant::LegendaryGlow => events.push(ScoreEvent::Notification {
                text: "Legendary Bonus!".to_string(),
                duration_ms: BANNER_MS,
            }),
            Variant::Normal | Variant::Hazard => {}
        }
        events
    }

    pub fn reset_combo(&self, state: &mut SessionState) -> ScoreEvent {
        state.combo = 1;
        state.consecutive_catches = 0;
        ScoreEvent::ComboChanged(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn mon(name: &str) -> CreatureDef {
        Catalog::standard().find(name).cloned().unwrap()
    }

    fn notifications(events: &[ScoreEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                ScoreEvent::Notification { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn three_pikachu_in_a_row() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        let pika = mon("Pikachu");
        engine.apply_catch(&mut s, &pika, Variant::Normal, 0);
        engine.apply_catch(&mut s, &pika, Variant::Normal, 1);
        assert_eq!((s.score, s.combo, s.same_creature_streak), (20, 1, 2));
        let ev = engine.apply_catch(&mut s, &pika, Variant::Normal, 2);
        // third catch scores at combo 1, then combo rises to 2 and the streak bonus uses it
        assert_eq!(s.combo, 2);
        assert_eq!(s.score, 10 + 10 + 10 + 50 * 2);
        assert_eq!(s.same_creature_streak, 0);
        assert_eq!(
            ev,
            vec![
                ScoreEvent::ScoreChanged(30),
                ScoreEvent::CatchMessage { slot: 2, text: "Caught Pikachu! +10".into(), duration_ms: 1000 },
                ScoreEvent::ComboChanged(2),
                ScoreEvent::Notification { text: "Combo x2!".into(), duration_ms: 1000 },
                ScoreEvent::ScoreChanged(130),
                ScoreEvent::Notification { text: "3 Pikachus in a row! +100".into(), duration_ms: 1500 },
            ]
        );
    }

    #[test]
    fn combo_caps_at_five() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        let names = ["Pikachu", "Meowth"];
        for i in 0..12 {
            engine.apply_catch(&mut s, &mon(names[i % 2]), Variant::Normal, 0);
            assert!((1..=5).contains(&s.combo));
        }
        assert_eq!(s.combo, 5);
        assert_eq!(s.consecutive_catches, 12);
    }

    #[test]
    fn alternating_names_never_streak() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        let mut expected = 0;
        for i in 0..6 {
            let name = if i % 2 == 0 { "Snorlax" } else { "Psyduck" };
            let c = mon(name);
            expected += c.points * u64::from(s.combo);
            let ev = engine.apply_catch(&mut s, &c, Variant::Normal, 0);
            assert!(notifications(&ev).iter().all(|t| !t.contains("in a row")));
            assert_eq!(s.same_creature_streak, 1);
        }
        assert_eq!(s.score, expected);
    }

    #[test]
    fn streak_fires_once_per_three() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        let squirtle = mon("Squirtle");
        let mut fired = 0;
        for _ in 0..9 {
            let ev = engine.apply_catch(&mut s, &squirtle, Variant::Normal, 0);
            fired += notifications(&ev).iter().filter(|t| t.contains("in a row")).count();
        }
        assert_eq!(fired, 3);
    }

    #[test]
    fn rarity_banner_comes_last() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        let mut shiny = mon("Bulbasaur");
        shiny.points *= 2;
        let ev = engine.apply_catch(&mut s, &shiny, Variant::Shiny, 4);
        assert_eq!(s.score, 30);
        assert_eq!(notifications(&ev), vec!["Shiny Bonus!"]);
        let ev = engine.apply_catch(&mut s, &mon("Mew"), Variant::LegendaryGlow, 4);
        assert_eq!(ev.last(), Some(&ScoreEvent::Notification { text: "Legendary Bonus!".into(), duration_ms: 1500 }));
    }

    #[test]
    fn reset_combo_is_idempotent() {
        let engine = ScoreEngine::default();
        let mut s = SessionState::new(1500);
        s.combo = 4;
        s.consecutive_catches = 6;
        s.score = 77;
        assert_eq!(engine.reset_combo(&mut s), ScoreEvent::ComboChanged(1));
        assert_eq!(engine.reset_combo(&mut s), ScoreEvent::ComboChanged(1));
        assert_eq!((s.combo, s.consecutive_catches, s.score), (1, 0, 77));
    }
}
