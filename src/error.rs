//! UI Errors
//!
//! Every failure the page behaviors can hit. None of them is fatal: callers
//! degrade to an empty schedule or the pre-click toggle state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("schedule is not valid JSON: {0}")]
    MalformedSchedule(#[from] serde_json::Error),

    #[error("schedule JSON is not an array")]
    NotAnArray,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("invalid config: {0}")]
    Config(String),
}
