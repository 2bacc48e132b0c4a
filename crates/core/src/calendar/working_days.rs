//! Working day counts over date ranges.

use chrono::{Datelike, NaiveDate};

use crate::calendar::work_week::WorkWeek;

/// Counts working days in the inclusive range `[start, end]`.
///
/// An inverted range counts zero days.
#[must_use]
pub fn working_days(start: NaiveDate, end: NaiveDate, week: WorkWeek) -> u32 {
    let mut days = 0;
    let mut current = start;
    while current <= end {
        if week.includes(current.weekday()) {
            days += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
