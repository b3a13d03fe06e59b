use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

mod calendar;
mod help;
mod script;

pub use calendar::draw_calendar_view;
pub use help::draw_help_overlay;
pub use script::draw_script_view;

/// Dim label span used in summary panels.
pub(crate) fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::Gray))
}

/// Highlighted value span used in summary panels.
pub(crate) fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
