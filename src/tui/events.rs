use std::io;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::model::Direction;

use super::layout::cell_at;
use super::state::{Cursor, TuiState, ViewMode};

mod actions;

use actions::*;

/// Handle a keyboard event, mutating TUI state and returning `true` if the loop should exit.
///
/// Scripts saved with `w` land in `save_dir`.
pub fn handle_key_events(
    key_event: KeyEvent,
    state: &mut TuiState,
    save_dir: &Path,
) -> io::Result<bool> {
    if key_event.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.show_help {
        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => state.show_help = false,
            _ => {}
        }
        return Ok(false);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('?') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Tab | KeyCode::BackTab => toggle_view(state),
        KeyCode::Char('b') => toggle_dialect(state),
        KeyCode::Char('y') => copy_script(state),
        KeyCode::Char('w') => save_script(state, save_dir),
        KeyCode::Char('c') => clear_selection(state),
        KeyCode::Char('[') => shift_year(state, true),
        KeyCode::Char(']') => shift_year(state, false),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('+') | KeyCode::Char('=') => {
            let cursor = state.cursor;
            apply_at(state, cursor, Direction::Increment)
        }
        KeyCode::Char('-') | KeyCode::Backspace | KeyCode::Delete => {
            let cursor = state.cursor;
            apply_at(state, cursor, Direction::Decrement)
        }
        code => match state.view_mode {
            ViewMode::Calendar => navigate_calendar(code, state),
            ViewMode::Script => navigate_script(code, state),
        },
    }

    Ok(false)
}

fn navigate_calendar(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Left => move_cursor(state, -1, 0),
        KeyCode::Right => move_cursor(state, 1, 0),
        KeyCode::Up => move_cursor(state, 0, -1),
        KeyCode::Down => move_cursor(state, 0, 1),
        KeyCode::PageUp => move_cursor(state, -4, 0),
        KeyCode::PageDown => move_cursor(state, 4, 0),
        KeyCode::Home => jump(state, false),
        KeyCode::End => jump(state, true),
        _ => {}
    }
}

fn navigate_script(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Up => scroll_script(state, -1),
        KeyCode::Down => scroll_script(state, 1),
        KeyCode::PageUp => scroll_script(state, -10),
        KeyCode::PageDown => scroll_script(state, 10),
        KeyCode::Home => state.script_scroll = 0,
        KeyCode::End => scroll_script(state, i32::from(u16::MAX)),
        _ => {}
    }
}

/// Left click increments the cell under the pointer, right click decrements it.
pub fn handle_mouse_event(mouse_event: MouseEvent, state: &mut TuiState) -> io::Result<()> {
    match mouse_event.kind {
        MouseEventKind::ScrollUp if state.view_mode == ViewMode::Script => {
            scroll_script(state, -3)
        }
        MouseEventKind::ScrollDown if state.view_mode == ViewMode::Script => {
            scroll_script(state, 3)
        }
        MouseEventKind::Down(button) if state.view_mode == ViewMode::Calendar => {
            let direction = match button {
                MouseButton::Left => Direction::Increment,
                MouseButton::Right => Direction::Decrement,
                MouseButton::Middle => return Ok(()),
            };
            if let Some(cursor) = clicked_cell(state, mouse_event.column, mouse_event.row) {
                apply_at(state, cursor, direction);
            }
        }
        _ => {}
    }
    Ok(())
}

fn clicked_cell(state: &TuiState, column: u16, row: u16) -> Option<Cursor> {
    let grid = state.grid_area?;
    let visible = state.weeks().len().saturating_sub(state.grid_offset);
    cell_at(grid, column, row, visible).map(|cursor| Cursor {
        week: cursor.week + state.grid_offset,
        ..cursor
    })
}
