// Click/touch de-duplication for the holes.
use crate::model::{Millis, SlotId};

/// Window in which a click on the slot that was just touched is treated as the
/// browser's synthesized follow-up click.
pub const SYNTHETIC_CLICK_MS: Millis = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
}

#[derive(Default, Debug, Clone)]
pub struct TouchGate {
    last_touch: Option<(SlotId, Millis)>,
}

impl TouchGate {
    /// Returns true when the event should reach the game.
    pub fn admit(&mut self, source: InputSource, slot: SlotId, now: Millis) -> bool {
        match source {
            InputSource::Touch => {
                self.last_touch = Some((slot, now));
                true
            }
            InputSource::Pointer => match self.last_touch {
                Some((s, at)) if s == slot && now.saturating_sub(at) < SYNTHETIC_CLICK_MS => {
                    self.last_touch = None;
                    false
                }
                _ => true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swallows_click_that_follows_touch() {
        let mut gate = TouchGate::default();
        assert!(gate.admit(InputSource::Touch, 2, 1_000));
        assert!(!gate.admit(InputSource::Pointer, 2, 1_050));
        // only the first follow-up click is swallowed
        assert!(gate.admit(InputSource::Pointer, 2, 1_100));
    }

    #[test]
    fn other_slots_and_late_clicks_pass() {
        let mut gate = TouchGate::default();
        assert!(gate.admit(InputSource::Touch, 2, 1_000));
        assert!(gate.admit(InputSource::Pointer, 3, 1_010));
        assert!(gate.admit(InputSource::Pointer, 2, 1_000 + SYNTHETIC_CLICK_MS));
        assert!(gate.admit(InputSource::Pointer, 5, 0));
    }
}
