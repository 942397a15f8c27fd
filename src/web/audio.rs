// HTML audio playback for the game's cues. Rejected play() promises (autoplay
// policy, missing files) are logged and otherwise ignored.
use std::collections::HashMap;

use log::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

use crate::error::AudioError;
use crate::sinks::{AudioCue, AudioSink};

const THROW_URL: &str = "https://assets.mixkit.co/sfx/preview/mixkit-short-whistle-throw-233.mp3";
const CATCH_URL: &str = "https://assets.mixkit.co/sfx/preview/mixkit-unlock-game-notification-253.mp3";
const GAME_OVER_URL: &str = "https://assets.mixkit.co/sfx/preview/mixkit-retro-arcade-game-over-213.mp3";
const MUSIC_URL: &str = "https://assets.mixkit.co/music/preview/mixkit-game-show-suspense-waiting-668.mp3";

fn source(cue: &AudioCue) -> &str {
    match cue {
        AudioCue::Cry(url) => url,
        AudioCue::Throw => THROW_URL,
        AudioCue::Catch => CATCH_URL,
        AudioCue::GameOver => GAME_OVER_URL,
        AudioCue::Music => MUSIC_URL,
    }
}

fn volume(cue: &AudioCue) -> f64 {
    match cue {
        AudioCue::Music => 0.3,
        AudioCue::Cry(_) => 0.5,
        _ => 1.0,
    }
}

/// One lazily created `<audio>` element per source URL.
pub struct AudioBank {
    elements: HashMap<String, HtmlAudioElement>,
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl AudioBank {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            on_reject: Closure::wrap(Box::new(|e: JsValue| {
                debug!("audio play rejected: {e:?}");
            }) as Box<dyn FnMut(JsValue)>),
        }
    }

    fn element(&mut self, cue: &AudioCue) -> Result<&HtmlAudioElement, AudioError> {
        let url = source(cue);
        if !self.elements.contains_key(url) {
            let el = HtmlAudioElement::new_with_src(url)
                .map_err(|e| AudioError::Unavailable(format!("{e:?}")))?;
            el.set_volume(volume(cue));
            el.set_loop(matches!(cue, AudioCue::Music));
            self.elements.insert(url.to_string(), el);
        }
        self.elements
            .get(url)
            .ok_or_else(|| AudioError::Unavailable(url.to_string()))
    }
}

impl Default for AudioBank {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for AudioBank {
    fn play(&mut self, cue: &AudioCue) -> Result<(), AudioError> {
        let el = self.element(cue)?.clone();
        el.set_current_time(0.0);
        let promise = el.play().map_err(|e| AudioError::Rejected(format!("{e:?}")))?;
        let _ = promise.catch(&self.on_reject);
        Ok(())
    }

    fn stop(&mut self, cue: &AudioCue) {
        if let Some(el) = self.elements.get(source(cue)) {
            let _ = el.pause();
            el.set_current_time(0.0);
        }
    }
}
