//! Browser implementation of the game's ports.

pub mod audio;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::error::{AudioError, StoreError};
use crate::model::{Millis, SlotId};
use crate::sinks::{AudioCue, AudioSink, HighScoreStore, RenderSink};
use crate::state::BoardView;

pub use audio::AudioBank;
pub use storage::LocalStore;

pub fn now_ms() -> Millis {
    js_sys::Date::now() as Millis
}

/// Host handed to the game in the browser. Render calls land in the shared
/// [`BoardView`] and then ask the app to redraw; the view borrow is released
/// before the redraw callback runs.
pub struct WebHost {
    view: Rc<RefCell<BoardView>>,
    redraw: Callback<()>,
    audio: AudioBank,
    store: LocalStore,
}

impl WebHost {
    pub fn new(view: Rc<RefCell<BoardView>>, redraw: Callback<()>) -> Self {
        Self { view, redraw, audio: AudioBank::new(), store: LocalStore::default() }
    }

    fn with_view(&self, f: impl FnOnce(&mut BoardView)) {
        f(&mut self.view.borrow_mut());
        self.redraw.emit(());
    }
}

impl RenderSink for WebHost {
    fn show_spawn(&mut self, slot: SlotId, image: &str, tag: &str) {
        self.with_view(|v| v.show_spawn(slot, image, tag));
    }

    fn hide_spawn(&mut self, slot: SlotId) {
        self.with_view(|v| v.hide_spawn(slot));
    }

    fn show_score(&mut self, score: u64) {
        self.with_view(|v| v.show_score(score));
    }

    fn show_combo(&mut self, combo: u32) {
        self.with_view(|v| v.show_combo(combo));
    }

    fn show_high_score(&mut self, high_score: u64) {
        self.with_view(|v| v.show_high_score(high_score));
    }

    fn show_notification(&mut self, text: &str, duration_ms: Millis) {
        self.with_view(|v| v.show_notification(text, duration_ms));
    }

    fn show_catch_message(&mut self, slot: SlotId, text: &str, duration_ms: Millis) {
        self.with_view(|v| v.show_catch_message(slot, text, duration_ms));
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.with_view(|v| v.show_game_over(final_score));
    }

    fn hide_game_over(&mut self) {
        self.with_view(|v| v.hide_game_over());
    }
}

impl AudioSink for WebHost {
    fn play(&mut self, cue: &AudioCue) -> Result<(), AudioError> {
        self.audio.play(cue)
    }

    fn stop(&mut self, cue: &AudioCue) {
        self.audio.stop(cue);
    }
}

impl HighScoreStore for WebHost {
    fn load_high_score(&self) -> Result<u64, StoreError> {
        self.store.load_high_score()
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), StoreError> {
        self.store.save_high_score(value)
    }
}
