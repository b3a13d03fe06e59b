use ratatui::style::{Color, Modifier, Style};

use crate::model::Day;

/// Glyph for a calendar cell; placeholders render blank.
pub fn cell_glyph(day: &Day) -> &'static str {
    if day.is_placeholder() {
        " "
    } else if day.selected {
        "■"
    } else {
        "·"
    }
}

/// Fill colour by fake-commit count, saturating at 4.
pub fn count_color(count: u32) -> Color {
    match count {
        0 => Color::DarkGray,
        1 => Color::Rgb(155, 233, 168),
        2 => Color::Rgb(64, 196, 99),
        3 => Color::Rgb(48, 161, 78),
        _ => Color::Rgb(33, 110, 57),
    }
}

pub fn cell_style(day: &Day, is_cursor: bool) -> Style {
    let style = Style::default().fg(count_color(day.count));
    let style = if day.selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    if is_cursor && !day.is_placeholder() {
        style.bg(Color::Yellow).fg(Color::Black)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn glyphs_distinguish_selected_and_placeholder() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(cell_glyph(&Day::placeholder()), " ");
        assert_eq!(cell_glyph(&Day::new(date, 0)), "·");
        assert_eq!(cell_glyph(&Day::new(date, 2)), "■");
    }

    #[test]
    fn colors_saturate() {
        assert_eq!(count_color(4), count_color(40));
        assert_ne!(count_color(0), count_color(1));
    }
}
