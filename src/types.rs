//! Shared types and data structures for the assistant.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::{DEFAULT_USER_NAME, TIMESTAMP_FORMAT};

/// A reminder task captured through the task flow.
///
/// `completed` is always `false` at creation; no command sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    /// `None` until the task flow receives the description turn.
    pub description: Option<String>,
    pub reminder: Option<DateTime<Local>>,
    pub completed: bool,
}

impl TaskItem {
    /// Creates a pending task with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            reminder: None,
            completed: false,
        }
    }
}

impl fmt::Display for TaskItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed {
            "\u{2713} Completed"
        } else {
            "Pending"
        };
        let reminder = match &self.reminder {
            Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
            None => "No reminder".to_string(),
        };
        write!(
            f,
            "{} - {} | Reminder: {} | Status: {}",
            self.title,
            self.description.as_deref().unwrap_or_default(),
            reminder,
            status
        )
    }
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    /// Case-insensitive comparison against the correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.correct_answer.trim().to_lowercase()
    }

    /// Renders the question for display; `number` is 1-based.
    pub fn render(&self, number: usize) -> String {
        format!(
            "Question {}:\n{}\nOptions: {}",
            number,
            self.text,
            self.options.join(", ")
        )
    }
}

/// A single entry of the user-visible activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Local>,
    pub description: String,
}

impl fmt::Display for ActivityLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.description
        )
    }
}

/// Per-engine conversation state that is not owned by a sub-flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_name: String,
    /// Last discussed topic. Written on every topic reply, never consulted.
    pub last_topic: Option<String>,
    pub turn_count: usize,
}

impl Session {
    /// Creates a session addressing the user by the default name.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            last_topic: None,
            turn_count: 0,
        }
    }
}
