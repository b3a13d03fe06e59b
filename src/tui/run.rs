use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Terminal;
use tracing::error;

use crate::script::Dialect;
use crate::selection::SelectionStore;

use super::events::{handle_key_events, handle_mouse_event};
use super::state::{TuiState, ViewMode};
use super::views::{draw_calendar_view, draw_help_overlay, draw_script_view};

pub fn run(store: SelectionStore, dialect: Dialect) -> io::Result<()> {
    let save_dir = std::env::current_dir()?;
    let mut state = TuiState::new(store, dialect, chrono::Local::now().date_naive());

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut state, &save_dir);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    save_dir: &std::path::Path,
) -> io::Result<()> {
    loop {
        state.expire_status();

        let draw_result = terminal.draw(|f| {
            let size = f.size();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(size);

            let tab_index = match state.view_mode {
                ViewMode::Calendar => 0,
                ViewMode::Script => 1,
            };
            let tabs = Tabs::new(vec!["Calendar", "Script"])
                .block(Block::default().borders(Borders::ALL).title("GitHub Time Travel"))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .select(tab_index);
            f.render_widget(tabs, chunks[0]);

            match state.view_mode {
                ViewMode::Calendar => draw_calendar_view(f, chunks[1], state),
                ViewMode::Script => draw_script_view(f, chunks[1], state),
            }

            let status = state
                .status_message
                .as_ref()
                .map(|(message, _)| message.clone())
                .unwrap_or_else(|| "Press '?' for help".to_string());
            f.render_widget(
                Paragraph::new(status).style(Style::default().fg(Color::Gray)),
                chunks[2],
            );

            if state.show_help {
                draw_help_overlay(f, size);
            }
        });

        if let Err(e) = draw_result {
            error!("TUI draw error: {e}");
        }

        if poll(Duration::from_millis(200))? {
            match read()? {
                Event::Key(key_event) => {
                    if handle_key_events(key_event, state, save_dir)? {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, state)?,
                _ => {}
            }
        }
    }

    Ok(())
}
