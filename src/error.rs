use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the app into the page. Runtime interaction never
/// produces one of these; those failures are absorbed where they happen.
#[derive(Debug, Error)]
pub enum FlashError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<JsValue> for FlashError {
    fn from(value: JsValue) -> Self {
        FlashError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<FlashError> for JsValue {
    fn from(err: FlashError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = FlashError> = std::result::Result<T, E>;
