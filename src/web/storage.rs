// localStorage persistence for the high score and player settings.
use log::warn;
use web_sys::Storage;

use crate::config::Settings;
use crate::error::StoreError;
use crate::sinks::HighScoreStore;

pub const HIGH_SCORE_KEY: &str = "pokemonWhackHighScore";
pub const SETTINGS_KEY: &str = "pokemonWhackSettings";

fn local_storage() -> Result<Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StoreError::Unavailable)
}

/// High score kept under a single key as a decimal string.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_KEY)
    }
}

impl HighScoreStore for LocalStore {
    fn load_high_score(&self) -> Result<u64, StoreError> {
        let store = local_storage()?;
        match store.get_item(&self.key).map_err(|_| StoreError::Unavailable)? {
            None => Ok(0),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(v) => Ok(v),
                Err(_) => Err(StoreError::Corrupt(raw)),
            },
        }
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), StoreError> {
        local_storage()?
            .set_item(&self.key, &value.to_string())
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

pub fn load_settings() -> Settings {
    let Ok(store) = local_storage() else {
        return Settings::default();
    };
    match store.get_item(SETTINGS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("ignoring stored settings: {e}");
            Settings::default()
        }),
        _ => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) {
    let Ok(store) = local_storage() else {
        return;
    };
    if let Ok(s) = serde_json::to_string(settings) {
        if let Err(e) = store.set_item(SETTINGS_KEY, &s) {
            warn!("could not save settings: {e:?}");
        }
    }
}
