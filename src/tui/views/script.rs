use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::script::MIME_TYPE;

use super::super::state::TuiState;

/// Render the generated script, scrolled by `state.script_scroll`.
pub fn draw_script_view(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(format!(
            "Generated Time Travel Script | {} ({MIME_TYPE}) | y: copy  w: save",
            state.dialect.filename()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if state.store.selections().is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("No dates selected."),
            Line::from("Switch back with Tab and mark dates on the calendar first."),
        ])
        .style(Style::default().fg(Color::Gray))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let script = state.script();
    let lines: Vec<Line> = script.lines().map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((state.script_scroll, 0));
    f.render_widget(paragraph, area);
}
