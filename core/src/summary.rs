use std::fmt;

use serde::Serialize;

use osteo_types::Level;

use crate::rounded_percent;

/// Read-only snapshot of a session's progress, taken after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Precise weekly completion; round only for display.
    pub completion_percent: f64,
    pub level: Level,
    pub xp: u32,
    pub level_threshold: u32,
    pub milestones_achieved: usize,
    pub milestones_total: usize,
}

impl ProgressSummary {
    #[must_use]
    pub fn rounded_percent(&self) -> u8 {
        rounded_percent(self.completion_percent)
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weekly completion: {}%", self.rounded_percent())?;
        writeln!(f, "Level {}", self.level)?;
        writeln!(f, "{}/{} XP to next level", self.xp, self.level_threshold)?;
        write!(
            f,
            "Milestones: {}/{}",
            self.milestones_achieved, self.milestones_total
        )
    }
}
