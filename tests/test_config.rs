//! Tests for [`cyber_assistant::config`]
//!
//! Env-var tests use a process-wide `Mutex` to run serially even under the
//! default multi-threaded test harness (`cargo test`).

use cyber_assistant::config::{
    load_config_from_env, Config, ADD_TASK_PREFIX, DEFAULT_USER_NAME, LOG_PAGE_LEN,
    LOG_PREVIEW_LEN,
};
use cyber_assistant::error::AssistantError;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

// ── Serialiser ────────────────────────────────────────────────────────────────

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

// ── Helper: guard that restores env vars on drop ──────────────────────────────

struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, original }
    }

    fn remove(key: &'static str) -> Self {
        let original = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

fn clear_all() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("CYBERBOT_USER_NAME"),
        EnvGuard::remove("CYBERBOT_LEXICON_PATH"),
        EnvGuard::remove("CYBERBOT_QUIZ_PATH"),
        EnvGuard::remove("CYBERBOT_RNG_SEED"),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Test 1: With nothing set, every field takes its default.
#[test]
fn test_load_config_defaults_when_unset() {
    let _lock = lock_env();
    let _g = clear_all();

    let cfg = load_config_from_env().expect("defaults should load");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.user_name, "friend");
}

/// Test 2: All variables are read when present.
#[test]
fn test_load_config_reads_all_vars() {
    let _lock = lock_env();
    let _g = clear_all();
    let _name = EnvGuard::set("CYBERBOT_USER_NAME", "  Morgan ");
    let _lex = EnvGuard::set("CYBERBOT_LEXICON_PATH", "content/lexicon.json");
    let _quiz = EnvGuard::set("CYBERBOT_QUIZ_PATH", "content/quiz.json");
    let _seed = EnvGuard::set("CYBERBOT_RNG_SEED", "42");

    let cfg = load_config_from_env().expect("valid vars should load");
    assert_eq!(cfg.user_name, "Morgan", "user name should be trimmed");
    assert_eq!(cfg.lexicon_path, Some(PathBuf::from("content/lexicon.json")));
    assert_eq!(cfg.quiz_path, Some(PathBuf::from("content/quiz.json")));
    assert_eq!(cfg.rng_seed, Some(42));
}

/// Test 3: A blank user name is a configuration error.
#[test]
fn test_blank_user_name_is_rejected() {
    let _lock = lock_env();
    let _g = clear_all();
    let _name = EnvGuard::set("CYBERBOT_USER_NAME", "   ");

    match load_config_from_env() {
        Err(AssistantError::Config(msg)) => {
            assert!(msg.contains("CYBERBOT_USER_NAME"), "got: {msg}");
        }
        other => panic!("Expected Config error, got: {other:?}"),
    }
}

/// Test 4: A non-numeric seed is a configuration error, not silently ignored.
#[test]
fn test_invalid_seed_is_rejected() {
    let _lock = lock_env();
    let _g = clear_all();
    let _seed = EnvGuard::set("CYBERBOT_RNG_SEED", "lucky");

    let err = load_config_from_env().unwrap_err();
    assert!(err.to_string().contains("CYBERBOT_RNG_SEED"), "got: {err}");
}

/// Test 5: Empty path variables count as unset.
#[test]
fn test_empty_paths_are_ignored() {
    let _lock = lock_env();
    let _g = clear_all();
    let _lex = EnvGuard::set("CYBERBOT_LEXICON_PATH", "");
    let _quiz = EnvGuard::set("CYBERBOT_QUIZ_PATH", " ");

    let cfg = load_config_from_env().unwrap();
    assert_eq!(cfg.lexicon_path, None);
    assert_eq!(cfg.quiz_path, None);
}

/// Test 6: Constants have expected values.
#[test]
fn test_constants_have_expected_values() {
    assert_eq!(DEFAULT_USER_NAME, "friend");
    assert_eq!(LOG_PREVIEW_LEN, 5, "show log displays five entries");
    assert_eq!(LOG_PAGE_LEN, 10);
    assert_eq!(ADD_TASK_PREFIX, "add task -");
}
