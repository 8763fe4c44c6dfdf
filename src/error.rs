//! Error taxonomy for the game core and the browser host.

use thiserror::Error;

/// Errors raised by the word bank, config validation and host setup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    /// Requested tier does not exist or holds no words. The game goes idle.
    #[error("word tier {tier} is missing or empty")]
    EmptyTier { tier: usize },
    #[error("word bank needs at least one tier")]
    NoTiers,
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    #[error("config could not be parsed: {0}")]
    Config(String),
    #[error("browser host: {0}")]
    Host(String),
}

impl GameError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
