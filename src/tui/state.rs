use chrono::{Datelike, NaiveDate};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::calendar::year_options;
use crate::model::{Day, Week};
use crate::script::{self, Dialect};
use crate::selection::SelectionStore;

/// How long a status line message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    Script,
}

/// Grid position: week column and weekday row (0 = Sunday).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub week: usize,
    pub weekday: usize,
}

pub struct TuiState {
    pub store: SelectionStore,
    pub dialect: Dialect,
    pub year_options: Vec<i32>,
    pub today: NaiveDate,
    pub cursor: Cursor,
    pub view_mode: ViewMode,
    pub show_help: bool,
    pub script_scroll: u16,
    /// Inner area of the calendar block from the last draw, used for mouse hit-testing.
    pub grid_area: Option<Rect>,
    /// First week column shown in the last draw.
    pub grid_offset: usize,
    pub status_message: Option<(String, Instant)>,
}

impl TuiState {
    pub fn new(store: SelectionStore, dialect: Dialect, today: NaiveDate) -> Self {
        let mut state = Self {
            store,
            dialect,
            year_options: year_options(today.year()),
            today,
            cursor: Cursor::default(),
            view_mode: ViewMode::Calendar,
            show_help: false,
            script_scroll: 0,
            grid_area: None,
            grid_offset: 0,
            status_message: None,
        };
        state.cursor = state.initial_cursor();
        state
    }

    pub fn year(&self) -> i32 {
        self.store.year()
    }

    pub fn weeks(&self) -> Vec<Week> {
        self.store.weeks()
    }

    pub fn script(&self) -> String {
        script::generate(self.store.selections(), self.dialect)
    }

    pub fn day_at(&self, cursor: Cursor) -> Option<Day> {
        self.weeks()
            .get(cursor.week)
            .map(|week| week.days[cursor.weekday.min(6)])
    }

    pub fn day_at_cursor(&self) -> Option<Day> {
        self.day_at(self.cursor)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_status(&mut self) {
        if let Some((_, at)) = &self.status_message {
            if at.elapsed() > STATUS_TTL {
                self.status_message = None;
            }
        }
    }

    /// Cursor on today when it belongs to the current year, else on Jan 1.
    pub fn initial_cursor(&self) -> Cursor {
        let target = if self.today.year() == self.year() {
            Some(self.today)
        } else {
            NaiveDate::from_ymd_opt(self.year(), 1, 1)
        };
        self.find_cursor(target).unwrap_or_default()
    }

    fn find_cursor(&self, target: Option<NaiveDate>) -> Option<Cursor> {
        let target = target?;
        self.weeks().iter().enumerate().find_map(|(week, w)| {
            w.days
                .iter()
                .position(|day| day.date == Some(target))
                .map(|weekday| Cursor { week, weekday })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn cursor_starts_on_today_in_current_year() {
        let state = TuiState::new(SelectionStore::new(2026), Dialect::Bash, today());
        assert_eq!(state.day_at_cursor().and_then(|d| d.date), Some(today()));
    }

    #[test]
    fn cursor_starts_on_new_year_for_past_years() {
        let state = TuiState::new(SelectionStore::new(2024), Dialect::Bash, today());
        assert_eq!(
            state.cursor,
            Cursor {
                week: 0,
                weekday: 1
            }
        );
    }

    #[test]
    fn year_options_follow_today() {
        let state = TuiState::new(SelectionStore::new(2024), Dialect::Bash, today());
        assert_eq!(state.year_options.first(), Some(&2026));
        assert_eq!(state.year_options.last(), Some(&2017));
    }
}
