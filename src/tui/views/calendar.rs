use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::calendar::WEEKDAYS;
use crate::grid::month_header;
use crate::script::summarize;

use super::super::{
    draw::{cell_glyph, cell_style, count_color},
    layout::{scroll_offset, LABEL_WIDTH},
    state::TuiState,
};
use super::{label, value};

/// Render the contribution grid plus the selection summary below it.
pub fn draw_calendar_view(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    draw_grid(f, chunks[0], state);
    draw_details(f, chunks[1], state);
}

fn draw_grid(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let block = Block::default()
        .title(format!(
            "Contribution Graph {} | Space/click: +1  -/right-click: -1",
            state.year()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);

    let weeks = state.weeks();
    let offset = scroll_offset(inner.width, state.cursor.week, weeks.len());
    let visible = &weeks[offset.min(weeks.len())..];

    let mut lines = vec![Line::from(Span::styled(
        month_header(visible),
        Style::default().fg(Color::Gray),
    ))];

    for (weekday, name) in WEEKDAYS.iter().enumerate() {
        let text = if weekday % 2 == 1 { *name } else { "" };
        let mut spans = vec![Span::styled(
            format!("{text:<width$}", width = LABEL_WIDTH as usize),
            Style::default().fg(Color::Gray),
        )];
        for (idx, week) in visible.iter().enumerate() {
            let day = &week.days[weekday];
            let is_cursor = offset + idx == state.cursor.week && weekday == state.cursor.weekday;
            spans.push(Span::styled(cell_glyph(day), cell_style(day, is_cursor)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
    state.grid_area = Some(inner);
    state.grid_offset = offset;
}

fn draw_details(f: &mut Frame, area: Rect, state: &TuiState) {
    let summary = summarize(state.store.selections());

    let cursor_line = match state.day_at_cursor().and_then(|day| day.date.map(|d| (d, day.count))) {
        Some((date, count)) => Line::from(vec![
            label("Cursor: "),
            Span::styled(
                date.format("%a %Y-%m-%d").to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{count} fake commit{}", if count == 1 { "" } else { "s" }),
                Style::default().fg(count_color(count.max(1))),
            ),
        ]),
        None => Line::from(label("Cursor: -")),
    };

    let mut years = vec![label("Year: ")];
    for year in &state.year_options {
        let style = if *year == state.year() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        years.push(Span::styled(format!(" {year} "), style));
    }
    years.push(label("  ([ / ] to change, clears selection)"));

    let mut legend = vec![label("Less ")];
    for count in 0..=4 {
        legend.push(Span::styled("■ ", Style::default().fg(count_color(count))));
    }
    legend.push(label("More"));

    let text = vec![
        cursor_line,
        Line::from(years),
        Line::from(vec![
            label("Selected dates: "),
            value(summary.dates.to_string()),
            label("   Total commits: "),
            value(summary.total_commits.to_string()),
            label("   Dialect: "),
            value(state.dialect.label().to_string()),
        ]),
        Line::from(legend),
        Line::from(""),
        Line::from(label(
            "Tab: script view  y: copy  w: save  b: bash/batch  c: clear  ?: help  q: quit",
        )),
    ];

    let panel = Paragraph::new(text).block(
        Block::default()
            .title("Selection")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(panel, area);
}
