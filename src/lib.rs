//! Poké Whack core crate.
//!
//! A whack-a-mole arcade game: creatures pop out of holes for a second or two,
//! catching them scores points (with combo and streak bonuses) and catching the
//! hazard ends the run. The game logic is headless and driven by an explicit
//! clock; the browser front-end in `components` / `web` implements the ports in
//! [`sinks`].

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod registry;
pub mod scoring;
pub mod session;
pub mod sinks;
pub mod spawner;
pub mod state;
pub mod timers;
pub mod util;
pub mod web;

pub use catalog::Catalog;
pub use config::{Difficulty, GameConfig, Settings, SpawnTuning};
pub use error::{AudioError, CatalogError, DifficultyParseError, SlotError, StoreError};
pub use model::{ActiveSpawn, CreatureDef, Millis, Outcome, Rarity, SessionState, SlotId, Variant};
pub use session::Game;
pub use sinks::{AudioCue, AudioSink, HighScoreStore, Host, RenderSink};
