//! Ports between the game core and whatever presents it.

use crate::error::{AudioError, StoreError};
use crate::model::{Millis, SlotId};

pub trait RenderSink {
    fn show_spawn(&mut self, slot: SlotId, image: &str, tag: &str);
    fn hide_spawn(&mut self, slot: SlotId);
    fn show_score(&mut self, score: u64);
    fn show_combo(&mut self, combo: u32);
    fn show_high_score(&mut self, high_score: u64);
    /// Transient banner; a new banner replaces the current one.
    fn show_notification(&mut self, text: &str, duration_ms: Millis);
    /// Floating text above a single hole.
    fn show_catch_message(&mut self, slot: SlotId, text: &str, duration_ms: Millis);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// A creature's cry, by URL.
    Cry(String),
    Throw,
    Catch,
    GameOver,
    Music,
}

pub trait AudioSink {
    fn play(&mut self, cue: &AudioCue) -> Result<(), AudioError>;
    fn stop(&mut self, cue: &AudioCue);
}

pub trait HighScoreStore {
    /// A missing value reads as zero.
    fn load_high_score(&self) -> Result<u64, StoreError>;
    fn save_high_score(&mut self, value: u64) -> Result<(), StoreError>;
}

/// Everything the game talks to.
pub trait Host: RenderSink + AudioSink + HighScoreStore {}

impl<T: RenderSink + AudioSink + HighScoreStore> Host for T {}
