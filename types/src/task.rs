//! Weekly plan tasks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{NonEmptyString, TaskId, Weekday};

/// Template entry a task is seeded from. Seeds carry no completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSeed {
    pub id: TaskId,
    pub title: NonEmptyString,
    pub day: Weekday,
}

impl TaskSeed {
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<NonEmptyString>, day: Weekday) -> Self {
        Self {
            id,
            title: title.into(),
            day,
        }
    }
}

/// Direction of a completion flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskToggle {
    /// `done` went from false to true. The only transition that awards XP.
    TurnedOn,
    TurnedOff,
}

impl TaskToggle {
    /// The task's `done` value after the flip.
    #[must_use]
    pub const fn done(self) -> bool {
        matches!(self, Self::TurnedOn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no task with id {id}")]
pub struct TaskNotFound {
    pub id: TaskId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duplicate task id {id}")]
pub struct DuplicateTaskId {
    pub id: TaskId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: NonEmptyString,
    day: Weekday,
    done: bool,
}

impl Task {
    #[must_use]
    pub fn from_seed(seed: TaskSeed) -> Self {
        Self {
            id: seed.id,
            title: seed.title,
            day: seed.day,
            done: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn day(&self) -> Weekday {
        self.day
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Flip `done` and report which way it went.
    pub fn toggle(&mut self) -> TaskToggle {
        self.done = !self.done;
        if self.done {
            TaskToggle::TurnedOn
        } else {
            TaskToggle::TurnedOff
        }
    }
}
