//! Runtime configuration. Every field has a default so hosts only pass what
//! they want to change (`serde` feature), e.g.
//! `{"session": {"advance_delay_ms": 500}}`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::surface::StrokeStyle;

/// Pause between answering a card and showing the next one.
pub const DEFAULT_ADVANCE_DELAY_MS: u32 = 800;
pub const DEFAULT_PRACTICE_CELLS: usize = 10;
pub const DEFAULT_ROOT_ID: &str = "kc-root";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SessionConfig {
    pub advance_delay_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SpeechConfig {
    /// BCP 47 tag handed to the speech engine.
    pub lang: String,
    /// Slightly below 1.0 so syllables stay distinct.
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { lang: "ja-JP".to_string(), rate: 0.8 }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AppConfig {
    /// Id of the element the app renders into; created under `<body>` when absent.
    pub root_id: String,
    pub session: SessionConfig,
    pub speech: SpeechConfig,
    pub stroke: StrokeStyle,
    /// Number of drawing cells in the handwriting overlay.
    pub practice_cells: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            session: SessionConfig::default(),
            speech: SpeechConfig::default(),
            stroke: StrokeStyle::default(),
            practice_cells: DEFAULT_PRACTICE_CELLS,
        }
    }
}

impl AppConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::FlashError::Config(e.to_string()))
    }
}
