use std::path::Path;

use tracing::warn;

use crate::export::{copy_to_clipboard, write_script};
use crate::model::Direction;

use super::super::state::{Cursor, TuiState, ViewMode};

/// Apply a primary/secondary action to the cell at `cursor`; placeholder cells are ignored.
pub(super) fn apply_at(state: &mut TuiState, cursor: Cursor, direction: Direction) {
    let Some(day) = state.day_at(cursor) else {
        return;
    };
    if day.is_placeholder() {
        return;
    }
    state.store = state.store.apply_day(&day, direction);
    state.cursor = cursor;
}

pub(super) fn clear_selection(state: &mut TuiState) {
    if state.store.selections().is_empty() {
        return;
    }
    state.store = state.store.clear();
    state.script_scroll = 0;
    state.set_status("Selection cleared");
}

/// Step through the year selector; `older` moves down the descending list.
pub(super) fn shift_year(state: &mut TuiState, older: bool) {
    let current = state.year();
    let next = match state.year_options.iter().position(|&y| y == current) {
        Some(idx) if older => state.year_options.get(idx + 1).copied(),
        Some(idx) => idx.checked_sub(1).and_then(|i| state.year_options.get(i).copied()),
        None => state.year_options.first().copied(),
    };
    let Some(year) = next else {
        return;
    };

    state.store = state.store.change_year(year);
    state.script_scroll = 0;
    state.cursor = state.initial_cursor();
    state.set_status(format!("Year {year}, selections cleared"));
}

/// Move the cursor by whole cells, refusing to land on placeholders or leave the grid.
pub(super) fn move_cursor(state: &mut TuiState, d_week: isize, d_weekday: isize) {
    let week = state.cursor.week as isize + d_week;
    let weekday = state.cursor.weekday as isize + d_weekday;
    if week < 0 || !(0..7).contains(&weekday) {
        return;
    }
    let target = Cursor {
        week: week as usize,
        weekday: weekday as usize,
    };
    if state.day_at(target).is_some_and(|day| !day.is_placeholder()) {
        state.cursor = target;
    }
}

/// Jump to the first (`end == false`) or last real day of the year.
pub(super) fn jump(state: &mut TuiState, end: bool) {
    let weeks = state.weeks();
    let mut cells = weeks.iter().enumerate().flat_map(|(week, w)| {
        w.days
            .iter()
            .enumerate()
            .filter(|(_, day)| !day.is_placeholder())
            .map(move |(weekday, _)| Cursor { week, weekday })
    });
    let target = if end { cells.last() } else { cells.next() };
    if let Some(cursor) = target {
        state.cursor = cursor;
    }
}

pub(super) fn toggle_view(state: &mut TuiState) {
    state.view_mode = match state.view_mode {
        ViewMode::Calendar => ViewMode::Script,
        ViewMode::Script => ViewMode::Calendar,
    };
}

pub(super) fn toggle_dialect(state: &mut TuiState) {
    state.dialect = state.dialect.toggle();
    state.script_scroll = 0;
    state.set_status(format!("Dialect: {}", state.dialect.label()));
}

pub(super) fn scroll_script(state: &mut TuiState, delta: i32) {
    let last = state
        .script()
        .lines()
        .count()
        .saturating_sub(1)
        .min(usize::from(u16::MAX));
    let next = (i64::from(state.script_scroll) + i64::from(delta)).clamp(0, last as i64);
    state.script_scroll = next as u16;
}

/// Copy the generated script, surfacing clipboard errors in status.
pub(super) fn copy_script(state: &mut TuiState) {
    if state.store.selections().is_empty() {
        state.set_status("No dates selected");
        return;
    }
    match copy_to_clipboard(&state.script()) {
        Ok(_) => state.set_status("Script copied to clipboard"),
        Err(err) => {
            warn!("clipboard copy failed: {err}");
            state.set_status(format!("Clipboard error: {err}"));
        }
    }
}

/// Write the generated script under the dialect's fixed filename in `dir`.
pub(super) fn save_script(state: &mut TuiState, dir: &Path) {
    if state.store.selections().is_empty() {
        state.set_status("No dates selected");
        return;
    }
    let path = dir.join(state.dialect.filename());
    match write_script(&path, &state.script()) {
        Ok(_) => state.set_status(format!("Saved {}", path.display())),
        Err(err) => {
            warn!("script write failed: {err}");
            state.set_status(format!("Save error: {err}"));
        }
    }
}
