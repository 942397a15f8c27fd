// View model the components render from. The web host writes into it through
// the RenderSink impl; expiring text is pruned on every tick.
use crate::model::{Millis, SlotId};
use crate::sinks::RenderSink;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoleView {
    /// Sprite URL while a creature is up.
    pub image: Option<String>,
    pub tag: String,
    pub message: Option<(String, Millis)>,
}

impl HoleView {
    pub fn is_up(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub text: String,
    pub until: Millis,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub holes: Vec<HoleView>,
    pub score: u64,
    pub combo: u32,
    pub high_score: u64,
    pub banner: Option<Banner>,
    /// Final score while the game-over overlay is showing.
    pub game_over: Option<u64>,
    pub running: bool,
    now: Millis,
}

impl BoardView {
    pub fn new(slots: usize) -> Self {
        Self {
            holes: vec![HoleView::default(); slots],
            score: 0,
            combo: 1,
            high_score: 0,
            banner: None,
            game_over: None,
            running: false,
            now: 0,
        }
    }

    /// Advances the view clock and drops expired text. Returns true if anything changed.
    pub fn prune(&mut self, now: Millis) -> bool {
        self.now = self.now.max(now);
        let mut changed = false;
        if self.banner.as_ref().is_some_and(|b| b.until <= self.now) {
            self.banner = None;
            changed = true;
        }
        for hole in &mut self.holes {
            if hole.message.as_ref().is_some_and(|(_, until)| *until <= self.now) {
                hole.message = None;
                changed = true;
            }
        }
        changed
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(9)
    }
}

impl RenderSink for BoardView {
    fn show_spawn(&mut self, slot: SlotId, image: &str, tag: &str) {
        if let Some(hole) = self.holes.get_mut(slot) {
            hole.image = Some(image.to_string());
            hole.tag = tag.to_string();
        }
    }

    fn hide_spawn(&mut self, slot: SlotId) {
        if let Some(hole) = self.holes.get_mut(slot) {
            hole.image = None;
            hole.tag.clear();
        }
    }

    fn show_score(&mut self, score: u64) {
        self.score = score;
    }

    fn show_combo(&mut self, combo: u32) {
        self.combo = combo;
    }

    fn show_high_score(&mut self, high_score: u64) {
        self.high_score = high_score;
    }

    fn show_notification(&mut self, text: &str, duration_ms: Millis) {
        self.banner = Some(Banner { text: text.to_string(), until: self.now + duration_ms });
    }

    fn show_catch_message(&mut self, slot: SlotId, text: &str, duration_ms: Millis) {
        let until = self.now + duration_ms;
        if let Some(hole) = self.holes.get_mut(slot) {
            hole.message = Some((text.to_string(), until));
        }
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.running = false;
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.running = true;
        self.game_over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_replaced_then_expires() {
        let mut v = BoardView::new(9);
        v.prune(1_000);
        v.show_notification("Combo x2!", 1_000);
        v.show_notification("3 Pikachus in a row! +100", 1_500);
        assert_eq!(v.banner.as_ref().map(|b| b.until), Some(2_500));
        assert!(!v.prune(2_499));
        assert!(v.prune(2_500));
        assert!(v.banner.is_none());
    }

    #[test]
    fn spawn_and_messages_per_hole() {
        let mut v = BoardView::new(3);
        v.show_spawn(1, "25.png", "safe-to-click");
        assert!(v.holes[1].is_up());
        v.show_spawn(7, "ignored.png", "safe-to-click");
        v.hide_spawn(1);
        v.show_catch_message(1, "Caught Pikachu! +10", 1_000);
        assert!(!v.holes[1].is_up());
        assert!(v.holes[1].tag.is_empty());
        assert!(v.prune(1_000));
        assert!(v.holes[1].message.is_none());
    }

    #[test]
    fn game_over_toggles_running() {
        let mut v = BoardView::default();
        v.hide_game_over();
        assert!(v.running);
        v.show_game_over(120);
        assert!(!v.running);
        assert_eq!(v.game_over, Some(120));
    }
}
