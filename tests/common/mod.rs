// Shared helpers for the native integration tests: a scripted random source and
// a host that records every port call.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::RngCore;
use yew_poke_whack::{
    AudioCue, AudioError, AudioSink, HighScoreStore, Millis, RenderSink, SlotId, StoreError,
};

/// Unit draws handed out in order; an empty script yields 0.5.
#[derive(Clone, Default)]
pub struct Script(Rc<RefCell<VecDeque<f64>>>);

impl Script {
    pub fn push(&self, draws: &[f64]) {
        self.0.borrow_mut().extend(draws.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn rng(&self) -> ScriptedRng {
        ScriptedRng(self.clone())
    }
}

/// Feeds `Standard`'s f64 sampling, which keeps the top 53 bits of `next_u64`.
pub struct ScriptedRng(Script);

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let r = self.0 .0.borrow_mut().pop_front().unwrap_or(0.5);
        ((r * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Draw that picks index `k` out of `n` candidates.
pub fn pick(k: usize, n: usize) -> f64 {
    (k as f64 + 0.5) / n as f64
}

/// Regular pool order in the standard catalog.
pub const PIKACHU: usize = 0;
pub const BULBASAUR: usize = 1;
pub const JIGGLYPUFF: usize = 4;
pub const PSYDUCK: usize = 6;
pub const SNORLAX: usize = 7;
pub const REGULAR_POOL: usize = 8;

/// slot, band, pool pick, duration for a normal spawn in the first free slot.
pub fn normal(creature: usize) -> [f64; 4] {
    [0.0, 0.5, pick(creature, REGULAR_POOL), 0.0]
}

pub fn shiny(creature: usize) -> [f64; 4] {
    [0.0, 0.2, pick(creature, REGULAR_POOL), 0.0]
}

pub fn hazard() -> [f64; 3] {
    [0.0, 0.1, 0.0]
}

pub fn legendary(which: usize) -> [f64; 4] {
    [0.0, 0.0, pick(which, 2), 0.0]
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ShowSpawn(SlotId, String),
    HideSpawn(SlotId),
    Score(u64),
    Combo(u32),
    HighScore(u64),
    Notification(String),
    CatchMessage(SlotId, String),
    GameOver(u64),
    HideGameOver,
    Play(AudioCue),
    Stop(AudioCue),
    Save(u64),
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub stored: u64,
    pub audio_fails: bool,
}

impl RecordingHost {
    pub fn with_stored(stored: u64) -> Self {
        Self { stored, ..Self::default() }
    }

    pub fn notifications(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Notification(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn saves(&self) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Save(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingHost {
    fn show_spawn(&mut self, slot: SlotId, _image: &str, tag: &str) {
        self.calls.push(Call::ShowSpawn(slot, tag.to_string()));
    }
    fn hide_spawn(&mut self, slot: SlotId) {
        self.calls.push(Call::HideSpawn(slot));
    }
    fn show_score(&mut self, score: u64) {
        self.calls.push(Call::Score(score));
    }
    fn show_combo(&mut self, combo: u32) {
        self.calls.push(Call::Combo(combo));
    }
    fn show_high_score(&mut self, high_score: u64) {
        self.calls.push(Call::HighScore(high_score));
    }
    fn show_notification(&mut self, text: &str, _duration_ms: Millis) {
        self.calls.push(Call::Notification(text.to_string()));
    }
    fn show_catch_message(&mut self, slot: SlotId, text: &str, _duration_ms: Millis) {
        self.calls.push(Call::CatchMessage(slot, text.to_string()));
    }
    fn show_game_over(&mut self, final_score: u64) {
        self.calls.push(Call::GameOver(final_score));
    }
    fn hide_game_over(&mut self) {
        self.calls.push(Call::HideGameOver);
    }
}

impl AudioSink for RecordingHost {
    fn play(&mut self, cue: &AudioCue) -> Result<(), AudioError> {
        self.calls.push(Call::Play(cue.clone()));
        if self.audio_fails {
            return Err(AudioError::Rejected("NotAllowedError".into()));
        }
        Ok(())
    }
    fn stop(&mut self, cue: &AudioCue) {
        self.calls.push(Call::Stop(cue.clone()));
    }
}

impl HighScoreStore for RecordingHost {
    fn load_high_score(&self) -> Result<u64, StoreError> {
        Ok(self.stored)
    }
    fn save_high_score(&mut self, value: u64) -> Result<(), StoreError> {
        self.calls.push(Call::Save(value));
        self.stored = value;
        Ok(())
    }
}
