//! Pronunciation playback behind a narrow trait so the session can be driven
//! without a browser.

use web_sys::{SpeechSynthesisUtterance, window};

use crate::config::SpeechConfig;

/// Fire-and-forget text-to-speech. Implementations never report failure.
pub trait Pronouncer {
    fn pronounce(&self, text: &str);
}

/// Speaks through the page's `window.speechSynthesis`.
pub struct SpeechSynthesisPronouncer {
    config: SpeechConfig,
}

impl SpeechSynthesisPronouncer {
    pub fn new(config: SpeechConfig) -> Self {
        Self { config }
    }
}

impl Pronouncer for SpeechSynthesisPronouncer {
    fn pronounce(&self, text: &str) {
        let Some(synth) = window().and_then(|w| w.speech_synthesis().ok()) else {
            log::debug!("speech synthesis unavailable, skipping '{}'", text);
            return;
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(&self.config.lang);
                utterance.set_rate(self.config.rate);
                synth.speak(&utterance);
            }
            Err(e) => log::debug!("utterance for '{}' failed: {:?}", text, e),
        }
    }
}

/// No-op playback for hosts without speech support.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPronouncer;

impl Pronouncer for SilentPronouncer {
    fn pronounce(&self, _text: &str) {}
}
