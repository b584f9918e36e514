use std::collections::HashSet;

use osteo_types::{Milestone, MilestoneId, MilestoneToggle};

/// A catalog entry paired with whether it has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneStep<'a> {
    pub milestone: &'a Milestone,
    pub achieved: bool,
}

/// Set of achieved milestone ids. Order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct MilestoneTracker {
    achieved: HashSet<MilestoneId>,
}

impl MilestoneTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_achieved(ids: impl IntoIterator<Item = MilestoneId>) -> Self {
        Self {
            achieved: ids.into_iter().collect(),
        }
    }

    /// Add the id if absent, remove it if present.
    ///
    /// Ids are not checked against any catalog.
    pub fn toggle(&mut self, id: impl Into<MilestoneId>) -> MilestoneToggle {
        let id = id.into();
        let toggle = if self.achieved.remove(id.as_str()) {
            MilestoneToggle::Cleared
        } else {
            self.achieved.insert(id.clone());
            MilestoneToggle::Achieved
        };
        tracing::debug!(milestone = %id, achieved = toggle.is_achieved(), "Milestone toggled");
        toggle
    }

    #[must_use]
    pub fn is_achieved(&self, id: &str) -> bool {
        self.achieved.contains(id)
    }

    pub fn achieved(&self) -> impl Iterator<Item = &MilestoneId> + '_ {
        self.achieved.iter()
    }

    #[must_use]
    pub fn achieved_count(&self) -> usize {
        self.achieved.len()
    }

    /// Walk `catalog` in order, flagging the entries already reached.
    pub fn path<'a>(
        &'a self,
        catalog: &'a [Milestone],
    ) -> impl Iterator<Item = MilestoneStep<'a>> + 'a {
        catalog.iter().map(move |milestone| MilestoneStep {
            milestone,
            achieved: self.is_achieved(milestone.id.as_str()),
        })
    }
}
