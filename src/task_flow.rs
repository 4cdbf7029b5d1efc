//! Multi-turn capture of a reminder task.
//!
//! ```text
//! Idle ──"add task - <title>"──▶ WaitingDescription ──<any text>──▶ WaitingReminder
//!  ▲                                                                  │   ▲
//!  └──────────── "no" / "in <n> day(s)|hour(s)" ─────────────────────┘   └─ "yes" / unparseable
//! ```
//!
//! The draft task travels inside the state variant, so a task can only be
//! in flight while the flow is waiting for input. It is appended to the
//! task list on the terminal transition back to `Idle`.

use chrono::{DateTime, Local, TimeDelta};

use crate::{
    activity_log::ActivityLog,
    clock::Clock,
    config::{ADD_TASK_PREFIX, TIMESTAMP_FORMAT},
    types::TaskItem,
};

/// Position of the task flow, carrying the draft task while one is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TaskState {
    /// No task in flight; ready for `add task -`.
    #[default]
    Idle,
    /// Title captured, next turn becomes the description.
    WaitingDescription(TaskItem),
    /// Description captured, waiting for `yes`, `no` or a reminder phrase.
    WaitingReminder(TaskItem),
}

/// Task flow state machine plus the list of captured tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFlow {
    state: TaskState,
    tasks: Vec<TaskItem>,
}

impl TaskFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// `true` while the flow intercepts every input.
    pub fn is_in_flight(&self) -> bool {
        !matches!(self.state, TaskState::Idle)
    }

    /// The draft task, if one is in flight.
    pub fn current_task(&self) -> Option<&TaskItem> {
        match &self.state {
            TaskState::Idle => None,
            TaskState::WaitingDescription(task) | TaskState::WaitingReminder(task) => Some(task),
        }
    }

    /// Tasks that completed the flow, in insertion order.
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    /// Open a new draft titled `title`.
    ///
    /// A blank title leaves the state untouched and asks for one.
    pub fn begin(&mut self, title: &str) -> String {
        let title = title.trim();
        if title.is_empty() {
            return "Please provide task title.".to_string();
        }
        self.state = TaskState::WaitingDescription(TaskItem::new(title));
        format!("What's the description for '{title}'?")
    }

    /// Feed one normalized input line to an in-flight draft.
    ///
    /// Returns `None` when no task is in flight.
    pub fn advance(
        &mut self,
        input: &str,
        log: &mut ActivityLog,
        clock: &dyn Clock,
    ) -> Option<String> {
        let (next, reply) = match std::mem::take(&mut self.state) {
            TaskState::Idle => return None,
            TaskState::WaitingDescription(mut task) => {
                task.description = Some(input.to_string());
                (
                    TaskState::WaitingReminder(task),
                    "Task description set. Add reminder? (yes/no)".to_string(),
                )
            }
            TaskState::WaitingReminder(task) if input == "yes" => (
                TaskState::WaitingReminder(task),
                "Please say e.g. 'in 3 days'.".to_string(),
            ),
            TaskState::WaitingReminder(task) if input == "no" => {
                let reply = format!("Task '{}' added.", task.title);
                log.record(format!("Task added: {}", task.title), clock);
                self.finish(task);
                (TaskState::Idle, reply)
            }
            TaskState::WaitingReminder(mut task) => match parse_reminder(input, clock.now()) {
                Some(at) => {
                    let when = at.format(TIMESTAMP_FORMAT).to_string();
                    task.reminder = Some(at);
                    log.record(
                        format!("Task added with reminder: {} - {}", task.title, when),
                        clock,
                    );
                    self.finish(task);
                    (TaskState::Idle, format!("Task with reminder added for {when}."))
                }
                None => (
                    TaskState::WaitingReminder(task),
                    "Say 'yes', 'no', or provide reminder.".to_string(),
                ),
            },
        };
        self.state = next;
        Some(reply)
    }

    /// All captured tasks as a 1-indexed list.
    pub fn render_list(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks yet.".to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finish(&mut self, task: TaskItem) {
        tracing::info!(title = %task.title, reminder = ?task.reminder, "task_added");
        self.tasks.push(task);
    }
}

/// Title of an `add task - <title>` command, matched case-insensitively.
///
/// Returns the trimmed title with its original casing, possibly empty.
/// `None` when `raw` is not an add-task command.
pub fn parse_add_task(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let head = trimmed.get(..ADD_TASK_PREFIX.len())?;
    if head.eq_ignore_ascii_case(ADD_TASK_PREFIX) {
        Some(trimmed[ADD_TASK_PREFIX.len()..].trim())
    } else {
        None
    }
}

/// Resolve `in <n> <unit>` relative to `now`.
///
/// `<unit>` only needs to start with `day` or `hour`, so `"in 3 dayz"` is
/// accepted. Words after the unit are ignored. Returns `None` for any other
/// shape, a non-integer count, or an out-of-range result.
pub fn parse_reminder(input: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let mut parts = input.split_whitespace();
    if parts.next()? != "in" {
        return None;
    }
    let count: i32 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;

    let delta = if unit.starts_with("day") {
        TimeDelta::try_days(i64::from(count))?
    } else if unit.starts_with("hour") {
        TimeDelta::try_hours(i64::from(count))?
    } else {
        return None;
    };
    now.checked_add_signed(delta)
}
