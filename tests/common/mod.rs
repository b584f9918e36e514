//! Shared test utilities and fixtures

#![allow(dead_code)]

use chrono::NaiveDate;
use osteo::Driver;
use osteo_core::ClientSession;
use osteo_types::{NonEmptyString, ProgressionRules, TaskId, TaskSeed, Weekday};

/// Wednesday 2025-08-13.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 13).expect("valid date")
}

/// The dashboard session with Monday selected.
pub fn demo_session() -> ClientSession {
    ClientSession::demo(ProgressionRules::default()).with_selected_day(Weekday::MONDAY)
}

pub fn demo_driver() -> Driver {
    Driver::new(demo_session(), fixed_today())
}

pub fn task_seed(id: u32, title: &str, day: Weekday) -> TaskSeed {
    TaskSeed::new(
        TaskId::new(id),
        NonEmptyString::new(title).expect("non-empty title"),
        day,
    )
}
