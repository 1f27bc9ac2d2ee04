use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum RigError {
    #[error("no browser window available")]
    NoWindow,
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to parse rig config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid rig config: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for RigError {
    fn from(value: JsValue) -> Self {
        RigError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
