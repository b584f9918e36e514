//! Built-in templates for the client dashboard.
//!
//! The weekly rehab plan, the milestone catalog, and the progression a new
//! dashboard session opens with.

use std::num::NonZeroU32;

use osteo_types::{
    Level, Milestone, MilestoneId, NonEmptyStaticStr, StartingState, TaskId, TaskSeed, Weekday,
};

const TASK_TEMPLATE: [(u32, NonEmptyStaticStr, Weekday); 7] = [
    (1, NonEmptyStaticStr::new("Morning mobility (10 min)"), Weekday::MONDAY),
    (2, NonEmptyStaticStr::new("Breathing reset (5 min)"), Weekday::MONDAY),
    (3, NonEmptyStaticStr::new("Glute activation set"), Weekday::TUESDAY),
    (4, NonEmptyStaticStr::new("Thoracic extension drill"), Weekday::WEDNESDAY),
    (5, NonEmptyStaticStr::new("Walk 20 minutes"), Weekday::THURSDAY),
    (6, NonEmptyStaticStr::new("KB deadlift – light set"), Weekday::FRIDAY),
    (7, NonEmptyStaticStr::new("Evening stretch (8 min)"), Weekday::SATURDAY),
];

const MILESTONE_CATALOG: [(&str, NonEmptyStaticStr); 5] = [
    ("m1", NonEmptyStaticStr::new("Pain < 6/10 for 3 days")),
    ("m2", NonEmptyStaticStr::new("Full morning routine 5×")),
    ("m3", NonEmptyStaticStr::new("First strength session")),
    ("m4", NonEmptyStaticStr::new("Complete weekly check-in")),
    ("m5", NonEmptyStaticStr::new("Return to favourite activity")),
];

const DASHBOARD_LEVEL: NonZeroU32 = NonZeroU32::new(2).unwrap();
const DASHBOARD_XP: u32 = 120;
const DASHBOARD_MILESTONES: [&str; 1] = ["m1"];

#[must_use]
pub fn task_template() -> Vec<TaskSeed> {
    TASK_TEMPLATE
        .iter()
        .map(|&(id, title, day)| TaskSeed::new(TaskId::new(id), title, day))
        .collect()
}

#[must_use]
pub fn milestone_catalog() -> Vec<Milestone> {
    MILESTONE_CATALOG
        .iter()
        .map(|&(id, title)| Milestone::new(id, title))
        .collect()
}

/// Level 2 with 120 XP and the first milestone already reached.
#[must_use]
pub fn dashboard_start() -> StartingState {
    StartingState {
        level: Level::from(DASHBOARD_LEVEL),
        xp: DASHBOARD_XP,
        milestones: DASHBOARD_MILESTONES
            .iter()
            .copied()
            .map(MilestoneId::from)
            .collect(),
    }
}
