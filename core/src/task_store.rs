//! Ordered weekly task list with per-day views.

use std::collections::HashSet;

use osteo_types::{DuplicateTaskId, Task, TaskId, TaskNotFound, TaskSeed, TaskToggle, Weekday};

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load a trusted template. Every task starts with `done = false`.
    #[must_use]
    pub fn new(seeds: impl IntoIterator<Item = TaskSeed>) -> Self {
        Self {
            tasks: seeds.into_iter().map(Task::from_seed).collect(),
        }
    }

    /// Like [`TaskStore::new`], but rejects templates that reuse an id.
    pub fn try_new(seeds: impl IntoIterator<Item = TaskSeed>) -> Result<Self, DuplicateTaskId> {
        let store = Self::new(seeds);
        let mut seen = HashSet::with_capacity(store.tasks.len());
        for task in &store.tasks {
            if !seen.insert(task.id()) {
                return Err(DuplicateTaskId { id: task.id() });
            }
        }
        Ok(store)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Tasks scheduled on `day`, in template order. Empty when none are.
    pub fn tasks_for_day(&self, day: Weekday) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.day() == day)
    }

    /// Flip the `done` flag of `id`. Unknown ids mutate nothing.
    pub fn toggle(&mut self, id: TaskId) -> Result<TaskToggle, TaskNotFound> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskNotFound { id })?;
        Ok(task.toggle())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }
}
