use crate::calendar;
use crate::model::{Day, Direction, SelectionMap, Week};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// The selected year plus its fake-commit counts.
///
/// Every operation returns a new store and leaves `self` untouched, so a
/// before/after pair can always be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    year: i32,
    selections: SelectionMap,
}

impl SelectionStore {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            selections: SelectionMap::new(),
        }
    }

    /// Starts from `selections`, keeping only the dates that fall inside `year`.
    pub fn with_selections(year: i32, selections: SelectionMap) -> Self {
        let selections = selections
            .iter()
            .filter(|(date, _)| date.year() == year)
            .collect();
        Self { year, selections }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    pub fn contains_date(&self, date: &NaiveDate) -> bool {
        date.year() == self.year
    }

    /// Applies one primary or secondary action to `date`.
    ///
    /// Increment has no upper bound. Decrement at 1 removes the entry and is a
    /// no-op for absent dates. Dates outside the year leave the store unchanged.
    pub fn apply(&self, date: NaiveDate, direction: Direction) -> Self {
        if !self.contains_date(&date) {
            debug!(%date, year = self.year, "ignoring action outside selected year");
            return self.clone();
        }

        let current = self.selections.get(&date);
        let next = match direction {
            Direction::Increment => current.saturating_add(1),
            Direction::Decrement => current.saturating_sub(1),
        };
        if next == current {
            return self.clone();
        }

        debug!(%date, from = current, to = next, "selection updated");
        Self {
            year: self.year,
            selections: self.selections.with_count(date, next),
        }
    }

    /// Applies `count` primary actions to `date` in one step, saturating at `u32::MAX`.
    pub fn add(&self, date: NaiveDate, count: u32) -> Self {
        if !self.contains_date(&date) {
            debug!(%date, year = self.year, "ignoring action outside selected year");
            return self.clone();
        }

        let current = self.selections.get(&date);
        let next = current.saturating_add(count);
        if next == current {
            return self.clone();
        }

        debug!(%date, from = current, to = next, "selection updated");
        Self {
            year: self.year,
            selections: self.selections.with_count(date, next),
        }
    }

    /// Applies an action to a grid cell; placeholder cells are disabled.
    pub fn apply_day(&self, day: &Day, direction: Direction) -> Self {
        match day.date {
            Some(date) => self.apply(date, direction),
            None => self.clone(),
        }
    }

    pub fn clear(&self) -> Self {
        Self::new(self.year)
    }

    /// Switches to `year`. Selections never carry across years.
    pub fn change_year(&self, year: i32) -> Self {
        debug!(from = self.year, to = year, "year changed, clearing selections");
        Self::new(year)
    }

    pub fn days(&self) -> Vec<Day> {
        calendar::build(self.year, &self.selections)
    }

    pub fn weeks(&self) -> Vec<Week> {
        calendar::partition(&self.days())
    }
}
