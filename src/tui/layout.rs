use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::tui::state::Cursor;

/// Columns reserved for weekday labels left of the grid.
pub const LABEL_WIDTH: u16 = 4;
/// Columns per week: one glyph and one gap.
pub const CELL_WIDTH: u16 = 2;
/// Rows above the weekday rows (month labels).
pub const HEADER_ROWS: u16 = 1;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Maps a terminal position inside `grid` to the calendar cell under it.
pub fn cell_at(grid: Rect, column: u16, row: u16, week_count: usize) -> Option<Cursor> {
    let first_row = grid.y + HEADER_ROWS;
    let first_col = grid.x + LABEL_WIDTH;
    if row < first_row || row >= first_row + 7 || column < first_col {
        return None;
    }
    if column >= grid.x + grid.width || row >= grid.y + grid.height {
        return None;
    }

    let week = ((column - first_col) / CELL_WIDTH) as usize;
    if week >= week_count {
        return None;
    }
    Some(Cursor {
        week,
        weekday: (row - first_row) as usize,
    })
}

/// First visible week so that `cursor_week` stays on screen for a grid `width` columns wide.
pub fn scroll_offset(width: u16, cursor_week: usize, week_count: usize) -> usize {
    let visible = (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1) as usize;
    if week_count <= visible || cursor_week < visible {
        return 0;
    }
    (cursor_week + 1 - visible).min(week_count - visible)
}
