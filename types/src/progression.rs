//! XP and level arithmetic.
//!
//! `ProgressionState` keeps `xp` strictly below the level threshold it was
//! built against. Any amount that reaches the threshold is folded into
//! levels immediately, carrying the remainder.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("level must be at least 1")]
pub struct LevelError;

/// Progression tier. Starts at 1 and never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(NonZeroU32);

impl Level {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    pub fn try_new(value: u32) -> Result<Self, LevelError> {
        NonZeroU32::new(value).map(Self).ok_or(LevelError)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    fn advance(self, levels: u32) -> Self {
        Self(self.0.saturating_add(levels))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<NonZeroU32> for Level {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of applying an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpAward {
    pub gained: u32,
    pub levels_gained: u32,
    pub level: Level,
    pub xp: u32,
}

impl XpAward {
    #[must_use]
    pub const fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressionState {
    xp: u32,
    level: Level,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            xp: 0,
            level: Level::FIRST,
        }
    }
}

impl ProgressionState {
    /// Build a state, folding any `xp` at or above `threshold` into levels.
    #[must_use]
    pub fn new(level: Level, xp: u32, threshold: NonZeroU32) -> Self {
        let mut state = Self { xp: 0, level };
        state.award(xp, threshold);
        state
    }

    #[must_use]
    pub const fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Add `amount` XP, resolving every threshold crossed.
    ///
    /// Equivalent to repeatedly subtracting `threshold` and bumping the level
    /// while `xp >= threshold`, so one award may span several levels.
    pub fn award(&mut self, amount: u32, threshold: NonZeroU32) -> XpAward {
        let width = u64::from(threshold.get());
        let total = u64::from(self.xp) + u64::from(amount);
        let levels_gained = u32::try_from(total / width).unwrap_or(u32::MAX);

        // The remainder is below `width`, which itself fits in u32.
        self.xp = (total % width) as u32;
        self.level = self.level.advance(levels_gained);

        XpAward {
            gained: amount,
            levels_gained,
            level: self.level,
            xp: self.xp,
        }
    }
}
