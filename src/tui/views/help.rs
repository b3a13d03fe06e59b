use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )])
}

/// Draw the modal help overlay describing navigation, selection, and output keys.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "timetravel - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Navigation:"),
        Line::from("  ←/→         Previous/next week"),
        Line::from("  ↑/↓         Previous/next weekday"),
        Line::from("  PgUp/PgDn   Move by 4 weeks (scroll in script view)"),
        Line::from("  Home/End    First/last day of the year"),
        Line::from(""),
        section("Selection:"),
        Line::from("  Space, +    Add one fake commit on the cursor date"),
        Line::from("  -, Bksp     Remove one fake commit"),
        Line::from("  Left click  Add one fake commit on the clicked date"),
        Line::from("  Right click Remove one fake commit"),
        Line::from("  c           Clear all selections"),
        Line::from("  [ / ]       Older/newer year (clears selections)"),
        Line::from(""),
        section("Script:"),
        Line::from("  Tab         Toggle calendar/script view"),
        Line::from("  b           Toggle bash/batch dialect"),
        Line::from("  y           Copy script to clipboard"),
        Line::from("  w           Save script to the current directory"),
        Line::from(""),
        section("General:"),
        Line::from("  ?, F1       Toggle this help"),
        Line::from("  q, Esc      Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press '?' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
