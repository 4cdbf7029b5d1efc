//! Configuration loading from environment variables via dotenvy.
//!
//! The dialogue core never reads the environment itself; only the binary
//! and [`crate::dialogue::DialogueEngine::from_config`] consult [`Config`].

use std::path::PathBuf;

use crate::error::AssistantError;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial display name, from `CYBERBOT_USER_NAME`
    pub user_name: String,
    /// JSON lexicon replacing the built-in one, from `CYBERBOT_LEXICON_PATH`
    pub lexicon_path: Option<PathBuf>,
    /// JSON quiz bank replacing the built-in one, from `CYBERBOT_QUIZ_PATH`
    pub quiz_path: Option<PathBuf>,
    /// Seed for response-variant selection, from `CYBERBOT_RNG_SEED`.
    /// `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            lexicon_path: None,
            quiz_path: None,
            rng_seed: None,
        }
    }
}

/// Load configuration purely from already-set environment variables.
///
/// Does **not** call `dotenvy::dotenv()`. Useful in tests that need to
/// control the env precisely via [`std::env::set_var`] / [`std::env::remove_var`].
///
/// # Errors
/// Returns [`AssistantError::Config`] if a variable is present but invalid.
pub fn load_config_from_env() -> Result<Config, AssistantError> {
    let user_name = match std::env::var("CYBERBOT_USER_NAME") {
        Ok(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AssistantError::Config(
                    "CYBERBOT_USER_NAME is empty".to_string(),
                ));
            }
            name
        }
        Err(_) => DEFAULT_USER_NAME.to_string(),
    };

    let lexicon_path = non_empty_var("CYBERBOT_LEXICON_PATH").map(PathBuf::from);
    let quiz_path = non_empty_var("CYBERBOT_QUIZ_PATH").map(PathBuf::from);

    let rng_seed = match non_empty_var("CYBERBOT_RNG_SEED") {
        Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
            AssistantError::Config(format!(
                "CYBERBOT_RNG_SEED must be an unsigned integer, got '{raw}'"
            ))
        })?),
        None => None,
    };

    Ok(Config {
        user_name,
        lexicon_path,
        quiz_path,
        rng_seed,
    })
}

/// Load configuration from the environment (`.env` + system env vars).
///
/// Loads `.env` via `dotenvy` first (ignoring errors if the file is absent),
/// then delegates to [`load_config_from_env`].
///
/// # Errors
/// Returns [`AssistantError::Config`] if a variable is present but invalid.
pub fn load_config() -> Result<Config, AssistantError> {
    // Load .env if present; variables may already be set externally.
    let _ = dotenvy::dotenv();
    load_config_from_env()
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ── Dialogue constants ─────────────────────────────────────────────────────

/// Display name used until the user introduces themselves.
pub const DEFAULT_USER_NAME: &str = "friend";

/// Number of entries shown by the `show log` command.
pub const LOG_PREVIEW_LEN: usize = 5;

/// Default page size of the UI log view.
pub const LOG_PAGE_LEN: usize = 10;

/// Rendering of log timestamps and task reminders.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Command prefix that opens the task flow (matched case-insensitively).
pub const ADD_TASK_PREFIX: &str = "add task -";
