//! Resolved progression settings shared across crates.
//!
//! These types represent fully-validated configuration state. The raw TOML
//! structs with `Option` fields stay private in `osteo-config`, which
//! resolves them into these types at the parse boundary.

use std::num::NonZeroU32;

use serde::Deserialize;

use crate::{Level, MilestoneId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProgressionRulesError {
    #[error("level_threshold must be greater than zero")]
    ZeroThreshold,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProgressionRules {
    #[serde(default = "default_xp_per_task")]
    xp_per_task: u32,
    #[serde(default = "default_level_threshold")]
    level_threshold: u32,
}

fn default_xp_per_task() -> u32 {
    ProgressionRules::DEFAULT_XP_PER_TASK
}

fn default_level_threshold() -> u32 {
    ProgressionRules::DEFAULT_LEVEL_THRESHOLD.get()
}

/// XP award and level threshold.
///
/// Invariant: the threshold is non-zero (enforced via `#[serde(try_from)]`
/// at the deserialization boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawProgressionRules")]
pub struct ProgressionRules {
    xp_per_task: u32,
    level_threshold: NonZeroU32,
}

impl TryFrom<RawProgressionRules> for ProgressionRules {
    type Error = ProgressionRulesError;

    fn try_from(raw: RawProgressionRules) -> Result<Self, Self::Error> {
        Self::new(raw.xp_per_task, raw.level_threshold)
    }
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            xp_per_task: Self::DEFAULT_XP_PER_TASK,
            level_threshold: Self::DEFAULT_LEVEL_THRESHOLD,
        }
    }
}

impl ProgressionRules {
    pub const DEFAULT_XP_PER_TASK: u32 = 10;
    pub const DEFAULT_LEVEL_THRESHOLD: NonZeroU32 = NonZeroU32::new(150).unwrap();

    pub fn new(xp_per_task: u32, level_threshold: u32) -> Result<Self, ProgressionRulesError> {
        let level_threshold =
            NonZeroU32::new(level_threshold).ok_or(ProgressionRulesError::ZeroThreshold)?;
        Ok(Self {
            xp_per_task,
            level_threshold,
        })
    }

    #[must_use]
    pub const fn xp_per_task(&self) -> u32 {
        self.xp_per_task
    }

    #[must_use]
    pub const fn level_threshold(&self) -> NonZeroU32 {
        self.level_threshold
    }
}

/// Where a session's progression and milestone path begin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartingState {
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub milestones: Vec<MilestoneId>,
}
