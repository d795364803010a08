use thiserror::Error;

use crate::config::ConfigError;

/// Failures while wiring the sketch into the page.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas `#{0}` not found")]
    CanvasNotFound(String),
    #[error("2d context not supported")]
    ContextUnavailable,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SketchError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SketchError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SketchError> for wasm_bindgen::JsValue {
    fn from(err: SketchError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
