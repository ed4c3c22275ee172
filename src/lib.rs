//! Kana Cards core crate.
//!
//! Flashcard study for hiragana, katakana and kanji with spoken readings and
//! a freehand writing grid. Session logic, the drawing-surface input model and
//! screen markup are plain Rust and testable natively; the `app` and
//! `surface::canvas` modules bind them to the browser DOM.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod characters;
pub mod config;
pub mod error;
pub mod session;
pub mod speech;
pub mod surface;

pub use characters::{Character, CharacterSet, HIRAGANA, KANJI, KATAKANA};
pub use config::AppConfig;
pub use error::FlashError;
pub use session::{Feedback, Mode, PendingAdvance, Score, Session};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    app::start(AppConfig::default()).map_err(JsValue::from)
}

/// Start with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_app_with_config(json: &str) -> Result<(), JsValue> {
    let config = AppConfig::from_json(json)?;
    app::start(config).map_err(JsValue::from)
}
