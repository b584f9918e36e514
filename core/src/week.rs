//! Monday-first week calendar for the day selector.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday as CalendarDay};

use osteo_types::Weekday;

#[must_use]
pub fn weekday_of(date: NaiveDate) -> Weekday {
    match date.weekday() {
        CalendarDay::Mon => Weekday::MONDAY,
        CalendarDay::Tue => Weekday::TUESDAY,
        CalendarDay::Wed => Weekday::WEDNESDAY,
        CalendarDay::Thu => Weekday::THURSDAY,
        CalendarDay::Fri => Weekday::FRIDAY,
        CalendarDay::Sat => Weekday::SATURDAY,
        CalendarDay::Sun => Weekday::SUNDAY,
    }
}

/// Today's weekday in local time.
#[must_use]
pub fn today() -> Weekday {
    weekday_of(Local::now().date_naive())
}

/// The Monday on or before `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// The seven days of the week containing `anchor`, Monday first.
#[must_use]
pub fn week_days(anchor: NaiveDate) -> Vec<(Weekday, NaiveDate)> {
    Weekday::ALL
        .into_iter()
        .zip(start_of_week(anchor).iter_days())
        .collect()
}
