//! Linear quiz over a fixed question bank.
//!
//! While a quiz is [`QuizState::Active`] every input line is an answer
//! attempt; the dialogue engine routes nothing else until the last question
//! has been answered. Starting a quiz always discards any session in progress.

use std::path::Path;

use crate::{
    activity_log::ActivityLog, clock::Clock, error::AssistantError, types::QuizQuestion,
};

/// Quiz session progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizState {
    /// No quiz started yet.
    #[default]
    Idle,
    /// Waiting for the answer to question `index` (0-based).
    Active { index: usize, score: usize },
    /// The last session ran to completion.
    Finished { score: usize, total: usize },
}

/// Quiz flow state machine.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    bank: Vec<QuizQuestion>,
    /// Questions of the running session, copied from `bank` on start.
    questions: Vec<QuizQuestion>,
    state: QuizState,
}

impl QuizFlow {
    /// Build a quiz flow over `bank`.
    ///
    /// # Errors
    /// Returns [`AssistantError::Quiz`] if any question is malformed.
    pub fn new(bank: Vec<QuizQuestion>) -> Result<Self, AssistantError> {
        validate_questions(&bank)?;
        Ok(Self {
            bank,
            questions: Vec::new(),
            state: QuizState::Idle,
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::Active { .. })
    }

    /// Score of the running or most recently finished session.
    pub fn score(&self) -> usize {
        match self.state {
            QuizState::Idle => 0,
            QuizState::Active { score, .. } | QuizState::Finished { score, .. } => score,
        }
    }

    /// Number of questions in the bank.
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Reset and open a new session, returning the banner and first question.
    pub fn start(&mut self, log: &mut ActivityLog, clock: &dyn Clock) -> String {
        if self.is_active() {
            tracing::info!("quiz_restarted_mid_session");
        }
        self.questions = self.bank.clone();
        self.state = QuizState::Active { index: 0, score: 0 };
        log.record("Quiz started.", clock);
        tracing::info!(questions = self.questions.len(), "quiz_started");

        let first = self.present(0, 0, log, clock);
        format!("Quiz Started!\n{first}")
    }

    /// Score `answer` against the current question and move on.
    ///
    /// Returns `None` when no quiz is active.
    pub fn answer(
        &mut self,
        answer: &str,
        log: &mut ActivityLog,
        clock: &dyn Clock,
    ) -> Option<String> {
        let QuizState::Active { index, mut score } = self.state else {
            return None;
        };
        let question = self.questions.get(index)?;

        let verdict = if question.is_correct(answer) {
            score += 1;
            format!("\u{2705} Correct! {}", question.explanation)
        } else {
            format!("\u{274C} Incorrect. {}", question.explanation)
        };
        log.record(format!("Answered quiz Q{}: {}", index + 1, answer), clock);

        let next = self.present(index + 1, score, log, clock);
        Some(format!("{verdict}\n\n{next}"))
    }

    /// Show question `index`, or close the session once past the last one.
    fn present(
        &mut self,
        index: usize,
        score: usize,
        log: &mut ActivityLog,
        clock: &dyn Clock,
    ) -> String {
        match self.questions.get(index) {
            Some(question) => {
                self.state = QuizState::Active { index, score };
                question.render(index + 1)
            }
            None => {
                let total = self.questions.len();
                self.state = QuizState::Finished { score, total };
                let result = format!("Quiz completed. Score: {score}/{total}");
                log.record(result.clone(), clock);
                tracing::info!(score, total, "quiz_completed");
                result
            }
        }
    }
}

/// The two True/False questions shipped with the assistant.
pub fn builtin_questions() -> Vec<QuizQuestion> {
    let true_false = || vec!["True".to_string(), "False".to_string()];
    vec![
        QuizQuestion {
            text: "Phishing uses fake messages to trick you.".to_string(),
            options: true_false(),
            correct_answer: "True".to_string(),
            explanation: "Be cautious with unknown emails.".to_string(),
        },
        QuizQuestion {
            text: "Public Wi-Fi is always safe.".to_string(),
            options: true_false(),
            correct_answer: "False".to_string(),
            explanation: "Public Wi-Fi can be unsafe.".to_string(),
        },
    ]
}

/// Read and validate a JSON array of questions.
pub fn load_questions(path: &Path) -> Result<Vec<QuizQuestion>, AssistantError> {
    let json = std::fs::read_to_string(path)?;
    let questions: Vec<QuizQuestion> = serde_json::from_str(&json)?;
    validate_questions(&questions)?;
    Ok(questions)
}

/// Every question needs text, at least two options, and a correct answer
/// that is one of them.
pub fn validate_questions(questions: &[QuizQuestion]) -> Result<(), AssistantError> {
    for (i, q) in questions.iter().enumerate() {
        let number = i + 1;
        if q.text.trim().is_empty() {
            return Err(AssistantError::Quiz(format!("question {number} has no text")));
        }
        if q.options.len() < 2 {
            return Err(AssistantError::Quiz(format!(
                "question {number} needs at least two options"
            )));
        }
        if !q.options.iter().any(|o| q.is_correct(o)) {
            return Err(AssistantError::Quiz(format!(
                "question {number}: correct answer '{}' is not an option",
                q.correct_answer
            )));
        }
    }
    Ok(())
}
