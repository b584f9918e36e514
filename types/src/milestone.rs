use serde::{Deserialize, Serialize};

use crate::{MilestoneId, NonEmptyString};

/// Catalog entry for an achievement on the milestone path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: NonEmptyString,
}

impl Milestone {
    #[must_use]
    pub fn new(id: impl Into<MilestoneId>, title: impl Into<NonEmptyString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneToggle {
    Achieved,
    Cleared,
}

impl MilestoneToggle {
    #[must_use]
    pub const fn is_achieved(self) -> bool {
        matches!(self, Self::Achieved)
    }
}
