//! Rule-based cybersecurity assistant. Re-exports all modules for integration testing.
//!
//! The binary (`main.rs`) and integration tests (`tests/`) both import from
//! this crate root. [`dialogue::DialogueEngine`] is the entry point; every
//! other module is a building block it owns.

pub mod activity_log;
pub mod clock;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod intent;
pub mod lexicon;
pub mod quiz;
pub mod task_flow;
pub mod types;
