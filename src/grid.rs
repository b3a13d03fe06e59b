use crate::calendar::{self, month_abbrev, WEEKDAYS};
use crate::cli::CommonArgs;
use crate::model::{Day, GridOutput, Week, SCHEMA_VERSION};
use crate::selection::SelectionStore;
use anyhow::Context;
use console::style;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 4;
const CELL_WIDTH: usize = 2;
const LEVELS: [&str; 5] = ["·", "░", "▒", "▓", "█"];

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let store = common
        .build_store(chrono::Local::now().date_naive())
        .context("Failed to build selection")?;
    let weeks = store.weeks();

    let mut out = io::stdout().lock();
    if json {
        output_json(&mut out, &store, weeks)?;
    } else if ndjson {
        output_ndjson(&mut out, &weeks)?;
    } else {
        output_grid(&mut out, &store, &weeks)?;
    }
    out.flush()?;

    Ok(())
}

/// Intensity glyph for a day: placeholder cells are blank, 4+ commits saturate.
pub fn level_glyph(day: &Day) -> &'static str {
    if day.is_placeholder() {
        return " ";
    }
    LEVELS[(day.count as usize).min(LEVELS.len() - 1)]
}

/// Month label line aligned with the week columns.
pub fn month_header(weeks: &[Week]) -> String {
    let width = LABEL_WIDTH + weeks.len() * CELL_WIDTH;
    let mut line = vec![' '; width];
    let mut next_free = 0;
    for (col, month) in calendar::month_columns(weeks) {
        let start = (LABEL_WIDTH + col * CELL_WIDTH).max(next_free);
        for (offset, ch) in month_abbrev(month).chars().enumerate() {
            if let Some(slot) = line.get_mut(start + offset) {
                *slot = ch;
            }
        }
        next_free = start + month_abbrev(month).len() + 1;
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

fn output_json(out: &mut impl Write, store: &SelectionStore, weeks: Vec<Week>) -> anyhow::Result<()> {
    let output = GridOutput {
        version: SCHEMA_VERSION,
        year: store.year(),
        selected_dates: store.selections().len(),
        total_commits: store.selections().total_commits(),
        weeks,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn output_ndjson(out: &mut impl Write, weeks: &[Week]) -> anyhow::Result<()> {
    for week in weeks {
        writeln!(out, "{}", serde_json::to_string(week)?)?;
    }
    Ok(())
}

fn output_grid(out: &mut impl Write, store: &SelectionStore, weeks: &[Week]) -> io::Result<()> {
    writeln!(
        out,
        "{}  {} dates selected, {} commits",
        style(format!("Contribution Graph {}", store.year())).bold(),
        store.selections().len(),
        store.selections().total_commits()
    )?;
    writeln!(out, "{}", "─".repeat(LABEL_WIDTH + weeks.len() * CELL_WIDTH))?;
    writeln!(out, "{}", style(month_header(weeks)).dim())?;

    for (weekday, name) in WEEKDAYS.iter().enumerate() {
        let label = if weekday % 2 == 1 { *name } else { "" };
        let mut line = format!("{label:<width$}", width = LABEL_WIDTH);
        for week in weeks {
            let day = &week.days[weekday];
            let glyph = level_glyph(day);
            let cell = if day.selected {
                style(glyph).green().bold().to_string()
            } else {
                style(glyph).dim().to_string()
            };
            line.push_str(&cell);
            line.push(' ');
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(
        out,
        "\n{} {} {}",
        style("Less").dim(),
        style(LEVELS.join(" ")).green(),
        style("More").dim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SelectionMap;
    use chrono::NaiveDate;

    #[test]
    fn glyph_saturates_at_four() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(level_glyph(&Day::new(date, 0)), "·");
        assert_eq!(level_glyph(&Day::new(date, 1)), "░");
        assert_eq!(level_glyph(&Day::new(date, 9)), "█");
        assert_eq!(level_glyph(&Day::placeholder()), " ");
    }

    #[test]
    fn month_header_starts_with_january() {
        let weeks = calendar::partition(&calendar::build(2024, &SelectionMap::new()));
        let header = month_header(&weeks);
        assert_eq!(header.find("Jan"), Some(LABEL_WIDTH));
        assert!(header.contains("Dec"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn ndjson_writes_one_line_per_week() {
        let store = SelectionStore::new(2023);
        let mut buf = Vec::new();
        output_ndjson(&mut buf, &store.weeks()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 53);
    }

    #[test]
    fn closed_stdout_surfaces_as_error() {
        let store = SelectionStore::new(2024);
        let weeks = store.weeks();

        let err = output_ndjson(&mut ClosedPipe, &weeks).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);

        let err = output_grid(&mut ClosedPipe, &store, &weeks).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
