//! Custom error types for the assistant.
//!
//! Only construction can fail. Once a [`crate::dialogue::DialogueEngine`]
//! exists, every user input produces a reply instead of an error.

use thiserror::Error;

/// Unified error type for configuration and content loading.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Quiz error: {0}")]
    Quiz(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
