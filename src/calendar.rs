use crate::model::{Day, SelectionMap, Week};
use chrono::{Datelike, NaiveDate};

/// Number of years offered by the year selector, current year included.
pub const YEAR_OPTIONS: i32 = 10;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Year selector entries: `current` and the nine years before it, newest first.
pub fn year_options(current: i32) -> Vec<i32> {
    (0..YEAR_OPTIONS).map(|offset| current - offset).collect()
}

/// Every date of `year` from Jan 1 to Dec 31, tagged with its count from `selections`.
///
/// Dates are plain calendar dates, so no timezone can shift a day across midnight.
/// Returns an empty sequence for years chrono cannot represent.
pub fn build(year: i32, selections: &SelectionMap) -> Vec<Day> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(|date| Day::new(date, selections.get(&date)))
        .collect()
}

/// Groups `days` into Sunday-first weeks, padding both grid edges with placeholders.
pub fn partition(days: &[Day]) -> Vec<Week> {
    let Some(lead) = days
        .first()
        .and_then(|day| day.date)
        .map(|date| date.weekday().num_days_from_sunday() as usize)
    else {
        return Vec::new();
    };

    let mut cells: Vec<Day> = Vec::with_capacity(lead + days.len() + 6);
    cells.extend(std::iter::repeat(Day::placeholder()).take(lead));
    cells.extend_from_slice(days);
    let trail = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat(Day::placeholder()).take(trail));

    cells
        .chunks_exact(7)
        .filter_map(|chunk| <[Day; 7]>::try_from(chunk).ok())
        .map(|days| Week { days })
        .collect()
}

/// Month label anchors: `(week_index, month)` for the week column holding each month's 1st.
pub fn month_columns(weeks: &[Week]) -> Vec<(usize, u32)> {
    weeks
        .iter()
        .enumerate()
        .filter_map(|(idx, week)| {
            week.dated()
                .filter_map(|day| day.date)
                .find(|date| date.day() == 1)
                .map(|date| (idx, date.month()))
        })
        .collect()
}

pub fn month_abbrev(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
