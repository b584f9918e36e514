//! Core domain logic for OsteoOS.
//!
//! One [`ClientSession`] owns the three pieces of per-client state:
//! the weekly [`TaskStore`], the XP/level [`ProgressionEngine`], and the
//! achieved-milestone [`MilestoneTracker`]. Sessions are constructed
//! explicitly by the caller; nothing here is shared or global.

mod milestones;
mod progression;
pub mod seed;
mod session;
mod summary;
mod task_store;
pub mod week;

pub use milestones::{MilestoneStep, MilestoneTracker};
pub use progression::{
    ProgressUpdate, ProgressionEngine, rounded_percent, weekly_completion_percent,
};
pub use session::{ClientSession, TaskToggleReport};
pub use summary::ProgressSummary;
pub use task_store::TaskStore;
