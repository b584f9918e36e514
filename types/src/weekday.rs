//! Day-of-week scheduling slot.
//!
//! Numbered 1..=7 with Monday first. Values outside that range are
//! unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("weekday must be in 1..=7 (Monday = 1), got {0}")]
pub struct WeekdayError(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);
    pub const SUNDAY: Self = Self(7);

    pub const ALL: [Self; 7] = [
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
        Self::SUNDAY,
    ];

    pub fn try_new(value: u8) -> Result<Self, WeekdayError> {
        if (1..=7).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WeekdayError(value))
        }
    }

    /// 1 = Monday … 7 = Sunday.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self.0 {
            1 => "Mon",
            2 => "Tue",
            3 => "Wed",
            4 => "Thu",
            5 => "Fri",
            6 => "Sat",
            _ => "Sun",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = WeekdayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(value: Weekday) -> Self {
        value.0
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::Weekday;

    #[test]
    fn rejects_out_of_range() {
        assert!(Weekday::try_new(0).is_err());
        assert!(Weekday::try_new(8).is_err());
        assert_eq!(Weekday::try_new(7).unwrap(), Weekday::SUNDAY);
    }

    #[test]
    fn all_is_monday_first() {
        let numbers: Vec<u8> = Weekday::ALL.iter().map(|d| d.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn deserialize_validates_range() {
        assert!(serde_json::from_str::<Weekday>("9").is_err());
        let day: Weekday = serde_json::from_str("3").unwrap();
        assert_eq!(day.short_name(), "Wed");
    }
}
