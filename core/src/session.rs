//! Per-client session glue.
//!
//! Routes a task toggle through the store first, then lets the progression
//! engine react to the transition it reports. Milestones run alongside
//! without touching XP.

use osteo_types::{
    Level, Milestone, MilestoneId, MilestoneToggle, ProgressionRules, StartingState, Task, TaskId,
    TaskNotFound, TaskSeed, TaskToggle, Weekday,
};

use crate::{
    MilestoneStep, MilestoneTracker, ProgressSummary, ProgressUpdate, ProgressionEngine,
    TaskStore, seed, week, weekly_completion_percent,
};

/// Outcome of [`ClientSession::toggle_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskToggleReport {
    pub task_id: TaskId,
    pub toggle: TaskToggle,
    pub progress: ProgressUpdate,
}

#[derive(Debug, Clone)]
pub struct ClientSession {
    tasks: TaskStore,
    progression: ProgressionEngine,
    milestones: MilestoneTracker,
    catalog: Vec<Milestone>,
    selected_day: Weekday,
}

impl ClientSession {
    /// Build a session over `seeds` and `catalog`. The selected day starts
    /// at today's weekday.
    #[must_use]
    pub fn new(
        seeds: impl IntoIterator<Item = TaskSeed>,
        catalog: Vec<Milestone>,
        rules: ProgressionRules,
        start: &StartingState,
    ) -> Self {
        Self {
            tasks: TaskStore::new(seeds),
            progression: ProgressionEngine::from_start(rules, start),
            milestones: MilestoneTracker::with_achieved(start.milestones.iter().cloned()),
            catalog,
            selected_day: week::today(),
        }
    }

    /// The client dashboard: built-in plan and catalog, opening at level 2.
    #[must_use]
    pub fn demo(rules: ProgressionRules) -> Self {
        Self::new(
            seed::task_template(),
            seed::milestone_catalog(),
            rules,
            &seed::dashboard_start(),
        )
    }

    #[must_use]
    pub fn with_selected_day(mut self, day: Weekday) -> Self {
        self.selected_day = day;
        self
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Result<TaskToggleReport, TaskNotFound> {
        let toggle = self.tasks.toggle(id)?;
        tracing::debug!(task_id = %id, done = toggle.done(), "Task toggled");
        let progress = self.progression.apply(toggle);
        Ok(TaskToggleReport {
            task_id: id,
            toggle,
            progress,
        })
    }

    pub fn toggle_milestone(&mut self, id: impl Into<MilestoneId>) -> MilestoneToggle {
        self.milestones.toggle(id)
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = day;
    }

    #[must_use]
    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn selected_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.tasks_for_day(self.selected_day)
    }

    pub fn tasks_for_day(&self, day: Weekday) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.tasks_for_day(day)
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    #[must_use]
    pub fn progression(&self) -> &ProgressionEngine {
        &self.progression
    }

    #[must_use]
    pub fn weekly_completion_percent(&self) -> f64 {
        weekly_completion_percent(&self.tasks)
    }

    #[must_use]
    pub fn current_level(&self) -> Level {
        self.progression.current_level()
    }

    #[must_use]
    pub fn current_xp(&self) -> u32 {
        self.progression.current_xp()
    }

    #[must_use]
    pub fn is_milestone_achieved(&self, id: &str) -> bool {
        self.milestones.is_achieved(id)
    }

    pub fn achieved_milestones(&self) -> impl Iterator<Item = &MilestoneId> + '_ {
        self.milestones.achieved()
    }

    pub fn milestone_path(&self) -> impl Iterator<Item = MilestoneStep<'_>> + '_ {
        self.milestones.path(&self.catalog)
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completion_percent: self.weekly_completion_percent(),
            level: self.current_level(),
            xp: self.current_xp(),
            level_threshold: self.progression.level_threshold(),
            milestones_achieved: self.milestone_path().filter(|step| step.achieved).count(),
            milestones_total: self.catalog.len(),
        }
    }
}
