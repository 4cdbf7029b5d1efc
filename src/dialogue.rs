//! Dialogue engine: one line of user text in, one reply out.
//!
//! Each turn walks [`DISPATCH_ORDER`] and stops at the first [`Rule`] that
//! claims the input. Unclaimed input gets the fallback reply. The order is
//! the whole precedence policy:
//!
//! | # | Rule          | Claims the turn when                                   |
//! |---|---------------|--------------------------------------------------------|
//! | 1 | `StartQuiz`   | raw input is exactly `start quiz`                      |
//! | 2 | `QuizAnswer`  | a quiz is active                                       |
//! | 3 | `TaskFlow`    | a task is in flight                                    |
//! | 4 | `AddTask`     | input starts with `add task -`                         |
//! | 5 | `ShowTasks`   | input is `show tasks`                                  |
//! | 6 | `ShowLog`     | input is `show log`                                    |
//! | 7 | `Sentiment`   | a sentiment phrase occurs in the input                 |
//! | 8 | `NameBinding` | input contains `name is`                               |
//! | 9 | `Topics`      | at least one topic keyword occurs in the input         |

use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

use crate::{
    activity_log::ActivityLog,
    clock::{Clock, SystemClock},
    config::{Config, LOG_PREVIEW_LEN},
    error::AssistantError,
    intent::{detect_sentiment, detect_topics, normalize},
    lexicon::Lexicon,
    quiz::{builtin_questions, load_questions, QuizFlow, QuizState},
    task_flow::{parse_add_task, TaskFlow, TaskState},
    types::{ActivityLogEntry, QuizQuestion, Session, TaskItem},
};

const START_QUIZ: &str = "start quiz";
const SHOW_TASKS: &str = "show tasks";
const SHOW_LOG: &str = "show log";
const NAME_MARKER: &str = "name is";
const ASK_NAME: &str = "Please tell me your name, e.g. 'my name is Alex'.";

/// A turn handler. See the module docs for the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    StartQuiz,
    QuizAnswer,
    TaskFlow,
    AddTask,
    ShowTasks,
    ShowLog,
    Sentiment,
    NameBinding,
    Topics,
}

/// Rules in the order they are offered each turn.
pub const DISPATCH_ORDER: [Rule; 9] = [
    Rule::StartQuiz,
    Rule::QuizAnswer,
    Rule::TaskFlow,
    Rule::AddTask,
    Rule::ShowTasks,
    Rule::ShowLog,
    Rule::Sentiment,
    Rule::NameBinding,
    Rule::Topics,
];

/// The three views of one input line that rules match against.
struct Turn<'a> {
    /// Exactly as received.
    raw: &'a str,
    /// Lowercased and trimmed; used for commands and task-flow input.
    command: String,
    /// `command` with punctuation removed; used for keyword matching.
    cleaned: String,
}

impl<'a> Turn<'a> {
    fn new(raw: &'a str) -> Self {
        let command = raw.trim().to_lowercase();
        let cleaned = normalize(&command);
        Self {
            raw,
            command,
            cleaned,
        }
    }
}

/// Owns all conversation state for one user session.
pub struct DialogueEngine {
    lexicon: Lexicon,
    tasks: TaskFlow,
    quiz: QuizFlow,
    log: ActivityLog,
    session: Session,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
}

impl DialogueEngine {
    /// Build an engine over validated content, using the system clock and
    /// an entropy-seeded RNG.
    ///
    /// # Errors
    /// Returns [`AssistantError::Quiz`] if a question is malformed.
    pub fn new(lexicon: Lexicon, questions: Vec<QuizQuestion>) -> Result<Self, AssistantError> {
        Ok(Self {
            lexicon,
            tasks: TaskFlow::new(),
            quiz: QuizFlow::new(questions)?,
            log: ActivityLog::new(),
            session: Session::new(),
            clock: Box::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
        })
    }

    /// Engine over the built-in lexicon and quiz bank.
    pub fn with_defaults() -> Result<Self, AssistantError> {
        Self::new(Lexicon::builtin()?, builtin_questions())
    }

    /// Engine built from runtime configuration.
    ///
    /// Content files named in `config` replace the built-in tables.
    pub fn from_config(config: &Config) -> Result<Self, AssistantError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::builtin()?,
        };
        let questions = match &config.quiz_path {
            Some(path) => load_questions(path)?,
            None => builtin_questions(),
        };

        let mut engine = Self::new(lexicon, questions)?;
        if let Some(seed) = config.rng_seed {
            engine = engine.with_seed(seed);
        }
        engine.session.user_name = config.user_name.clone();
        Ok(engine)
    }

    /// Replace the clock used for log timestamps and reminders.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the randomness source used to pick response variants.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Seed response-variant selection for reproducible replies.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    /// Process one turn on behalf of a caller that owns the display name.
    ///
    /// `user_name` is read before the turn and updated if the user
    /// introduces themselves.
    pub fn handle_turn(&mut self, raw_input: &str, user_name: &mut String) -> String {
        self.session.user_name.clone_from(user_name);
        let reply = self.respond(raw_input);
        user_name.clone_from(&self.session.user_name);
        reply
    }

    /// Process one turn using the engine's own session name.
    pub fn respond(&mut self, raw_input: &str) -> String {
        self.session.turn_count += 1;
        let turn = Turn::new(raw_input);

        for rule in DISPATCH_ORDER {
            if let Some(reply) = self.try_rule(rule, &turn) {
                tracing::debug!(rule = ?rule, turn = self.session.turn_count, "turn_claimed");
                return reply;
            }
        }

        tracing::debug!(turn = self.session.turn_count, "turn_fallback");
        format!(
            "Sorry {}, I didn't understand that.",
            self.session.user_name
        )
    }

    /// Offer `raw_input` to a single rule, bypassing the dispatch order.
    ///
    /// Returns `None` if the rule does not claim the input.
    pub fn apply_rule(&mut self, rule: Rule, raw_input: &str) -> Option<String> {
        let turn = Turn::new(raw_input);
        self.try_rule(rule, &turn)
    }

    /// Activity log page: skip the `skip` newest entries, return up to `take`.
    pub fn read_log(&self, skip: usize, take: usize) -> Vec<ActivityLogEntry> {
        self.log.read(skip, take)
    }

    pub fn tasks(&self) -> &[TaskItem] {
        self.tasks.tasks()
    }

    pub fn task_state(&self) -> &TaskState {
        self.tasks.state()
    }

    pub fn quiz_state(&self) -> QuizState {
        self.quiz.state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user_name(&self) -> &str {
        &self.session.user_name
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

// ── Rule implementations ──────────────────────────────────────────────────────

impl DialogueEngine {
    fn try_rule(&mut self, rule: Rule, turn: &Turn<'_>) -> Option<String> {
        let clock = self.clock.as_ref();
        match rule {
            Rule::StartQuiz => {
                (turn.raw == START_QUIZ).then(|| self.quiz.start(&mut self.log, clock))
            }
            Rule::QuizAnswer => self.quiz.answer(turn.raw.trim(), &mut self.log, clock),
            Rule::TaskFlow => {
                if !self.tasks.is_in_flight() {
                    return None;
                }
                // Listing never counts as a description or reminder answer.
                if turn.command == SHOW_TASKS {
                    return Some(self.tasks.render_list());
                }
                self.tasks.advance(&turn.command, &mut self.log, clock)
            }
            Rule::AddTask => parse_add_task(turn.raw).map(|title| self.tasks.begin(title)),
            Rule::ShowTasks => (turn.command == SHOW_TASKS).then(|| self.tasks.render_list()),
            Rule::ShowLog => {
                (turn.command == SHOW_LOG).then(|| self.log.render_recent(LOG_PREVIEW_LEN))
            }
            Rule::Sentiment => detect_sentiment(&self.lexicon, &turn.cleaned).map(str::to_string),
            Rule::NameBinding => {
                let name = bound_name(turn.raw)?;
                if name.is_empty() {
                    return Some(ASK_NAME.to_string());
                }
                self.session.user_name = name.to_string();
                Some(format!("Nice to meet you, {name}!"))
            }
            Rule::Topics => self.discuss_topics(&turn.cleaned),
        }
    }

    /// One `TOPIC: variant` paragraph per matched topic, in lexicon order.
    fn discuss_topics(&mut self, cleaned: &str) -> Option<String> {
        let topics = detect_topics(&self.lexicon, cleaned);
        if topics.is_empty() {
            return None;
        }

        let mut reply = String::new();
        for topic in topics {
            let Some(variant) = self
                .lexicon
                .responses(topic)
                .and_then(|variants| variants.choose(&mut *self.rng))
            else {
                continue;
            };
            reply.push_str(&format!("{}: {}\n\n", topic.to_uppercase(), variant));
            self.session.last_topic = Some(topic.to_string());
            self.log
                .record(format!("Discussed topic: {topic}"), self.clock.as_ref());
        }
        Some(reply.trim().to_string())
    }
}

/// Trimmed text after the first `name is`, with its original casing.
/// `Some("")` when the marker ends the line.
fn bound_name(raw: &str) -> Option<&str> {
    let start = find_ascii_case_insensitive(raw, NAME_MARKER)?;
    Some(raw[start + NAME_MARKER.len()..].trim())
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        haystack
            .get(i..i + needle.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(needle))
    })
}
