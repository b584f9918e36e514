//! Progression engine: weekly completion and XP/level accrual.
//!
//! The engine only reacts to on-transitions. Unchecking a task never
//! revokes XP that was already granted.

use osteo_types::{Level, ProgressionRules, ProgressionState, StartingState, TaskToggle, XpAward};

use crate::TaskStore;

/// Percentage of all tasks in the store that are done, in `[0, 100]`.
///
/// Spans the whole week, not a single day. An empty store yields `0.0`.
#[must_use]
pub fn weekly_completion_percent(store: &TaskStore) -> f64 {
    let total = store.len();
    if total == 0 {
        return 0.0;
    }
    let done = store.completed_count();
    (100.0 * done as f64 / total as f64).clamp(0.0, 100.0)
}

/// Round a precise percentage for display.
#[must_use]
pub fn rounded_percent(percent: f64) -> u8 {
    percent.clamp(0.0, 100.0).round() as u8
}

/// What a task toggle did to progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    Awarded(XpAward),
    /// Off-transition: XP and level are left as they were.
    Retained,
}

#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    rules: ProgressionRules,
    state: ProgressionState,
}

impl ProgressionEngine {
    /// Fresh progression at level 1 with no XP.
    #[must_use]
    pub fn new(rules: ProgressionRules) -> Self {
        Self {
            rules,
            state: ProgressionState::default(),
        }
    }

    /// Resume from a given level and XP. XP at or past the threshold is
    /// folded into levels immediately.
    #[must_use]
    pub fn with_state(rules: ProgressionRules, level: Level, xp: u32) -> Self {
        Self {
            rules,
            state: ProgressionState::new(level, xp, rules.level_threshold()),
        }
    }

    #[must_use]
    pub fn from_start(rules: ProgressionRules, start: &StartingState) -> Self {
        Self::with_state(rules, start.level, start.xp)
    }

    #[must_use]
    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> ProgressionState {
        self.state
    }

    #[must_use]
    pub fn current_level(&self) -> Level {
        self.state.level()
    }

    #[must_use]
    pub fn current_xp(&self) -> u32 {
        self.state.xp()
    }

    #[must_use]
    pub fn level_threshold(&self) -> u32 {
        self.rules.level_threshold().get()
    }

    #[must_use]
    pub fn xp_to_next_level(&self) -> u32 {
        self.level_threshold() - self.state.xp()
    }

    /// Fraction of the current level already earned, in `[0, 1)`.
    #[must_use]
    pub fn level_progress(&self) -> f64 {
        f64::from(self.state.xp()) / f64::from(self.level_threshold())
    }

    /// Call exactly once per on-transition.
    pub fn on_task_completed(&mut self) -> XpAward {
        let award = self
            .state
            .award(self.rules.xp_per_task(), self.rules.level_threshold());
        if award.leveled_up() {
            tracing::info!(
                level = award.level.value(),
                levels_gained = award.levels_gained,
                xp = award.xp,
                "Level up"
            );
        } else {
            tracing::debug!(gained = award.gained, xp = award.xp, "XP awarded");
        }
        award
    }

    pub fn on_task_uncompleted(&mut self) {
        tracing::debug!(
            level = self.state.level().value(),
            xp = self.state.xp(),
            "Task uncompleted; XP retained"
        );
    }

    pub fn apply(&mut self, toggle: TaskToggle) -> ProgressUpdate {
        match toggle {
            TaskToggle::TurnedOn => ProgressUpdate::Awarded(self.on_task_completed()),
            TaskToggle::TurnedOff => {
                self.on_task_uncompleted();
                ProgressUpdate::Retained
            }
        }
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(ProgressionRules::default())
    }
}
