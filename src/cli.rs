use crate::error::{Result, TimeTravelError};
use crate::model::SelectionMap;
use crate::script::Dialect;
use crate::selection::SelectionStore;
use crate::util::SelectArg;
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "timetravel")]
#[command(about = "Pick calendar dates and generate a script that backdates git commits onto them")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    #[arg(
        long,
        value_parser = clap::value_parser!(i32).range(1000..=9999),
        help = "Calendar year (defaults to the year of the selections, else the current year)"
    )]
    pub year: Option<i32>,

    #[arg(
        long = "select",
        value_name = "DATE[=COUNT]",
        help = "Add COUNT fake commits on DATE (YYYY-MM-DD); repeatable"
    )]
    pub select: Vec<SelectArg>,

    #[arg(long, value_name = "FILE", help = "Start from a JSON map of {\"YYYY-MM-DD\": count}")]
    pub from: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the week-aligned calendar grid for the year
    Grid {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON (one week per line)")]
        ndjson: bool,
    },
    /// Generate the fake-commit script
    Script {
        #[arg(long, value_enum, default_value_t = Dialect::Bash, help = "Script dialect")]
        dialect: Dialect,

        #[arg(
            long,
            value_name = "PATH",
            num_args = 0..=1,
            help = "Write the script to PATH (default: fixed filename for the dialect)"
        )]
        output: Option<Option<PathBuf>>,

        #[arg(long, help = "Copy the script to the clipboard")]
        copy: bool,
    },
    /// List the years offered by the year selector
    Years,
    /// Pick dates in an interactive terminal calendar
    #[command(alias = "interactive", alias = "ui")]
    Tui {
        #[arg(long, value_enum, default_value_t = Dialect::Bash, help = "Script dialect")]
        dialect: Dialect,
    },
}

impl CommonArgs {
    /// Resolves the year and replays `--from` and `--select` into a store.
    ///
    /// Selections outside the resolved year are rejected rather than dropped.
    pub fn build_store(&self, today: NaiveDate) -> Result<SelectionStore> {
        let loaded = match &self.from {
            Some(path) => crate::export::load_selections(path)?,
            None => SelectionMap::new(),
        };

        let year = self
            .year
            .or_else(|| {
                loaded
                    .first_date()
                    .or_else(|| self.select.first().map(|s| s.date))
                    .map(|date| date.year())
            })
            .unwrap_or_else(|| today.year());

        let outside = loaded
            .iter()
            .map(|(date, _)| date)
            .chain(self.select.iter().map(|s| s.date))
            .find(|date| date.year() != year);
        if let Some(date) = outside {
            return Err(TimeTravelError::OutsideYear {
                date: date.to_string(),
                year,
            });
        }

        let mut store = SelectionStore::with_selections(year, loaded);
        for select in &self.select {
            store = store.add(select.date, select.count);
        }
        Ok(store)
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Grid { json, ndjson } => crate::grid::exec(self.common, json, ndjson),
            Commands::Script {
                dialect,
                output,
                copy,
            } => crate::export::exec(self.common, dialect, output, copy),
            Commands::Years => {
                let today = chrono::Local::now().date_naive();
                let mut out = io::stdout().lock();
                for year in crate::calendar::year_options(today.year()) {
                    writeln!(out, "{year}")?;
                }
                out.flush()?;
                Ok(())
            }
            Commands::Tui { dialect } => {
                let store = self
                    .common
                    .build_store(chrono::Local::now().date_naive())
                    .context("Failed to build selection")?;
                crate::tui::run(store, dialect).map_err(|e| anyhow::anyhow!(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn select(s: &str) -> SelectArg {
        s.parse().unwrap()
    }

    #[test]
    fn year_defaults_to_today() {
        let store = CommonArgs::default().build_store(today()).unwrap();
        assert_eq!(store.year(), 2026);
        assert!(store.selections().is_empty());
    }

    #[test]
    fn year_follows_selections_and_repeats_accumulate() {
        let args = CommonArgs {
            select: vec![select("2024-01-05"), select("2024-01-05=2"), select("2024-01-03")],
            ..Default::default()
        };
        let store = args.build_store(today()).unwrap();
        assert_eq!(store.year(), 2024);
        assert_eq!(store.selections().total_commits(), 4);
        assert_eq!(
            store
                .selections()
                .get(&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            3
        );
    }

    #[test]
    fn huge_select_count_resolves_in_one_step() {
        let args = CommonArgs {
            select: vec![select("2024-01-05=4000000000")],
            ..Default::default()
        };
        let started = std::time::Instant::now();
        let store = args.build_store(today()).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(
            store
                .selections()
                .get(&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            4_000_000_000
        );
    }

    #[test]
    fn selections_outside_year_are_rejected() {
        let args = CommonArgs {
            year: Some(2025),
            select: vec![select("2024-01-05")],
            ..Default::default()
        };
        assert!(matches!(
            args.build_store(today()),
            Err(TimeTravelError::OutsideYear { year: 2025, .. })
        ));
    }

    #[test]
    fn cli_parses_script_output_without_path() {
        let cli = Cli::try_parse_from(["timetravel", "--select", "2024-01-05", "script", "--output"])
            .unwrap();
        match cli.command {
            Commands::Script { output, dialect, .. } => {
                assert_eq!(output, Some(None));
                assert_eq!(dialect, Dialect::Bash);
            }
            _ => panic!("expected script command"),
        }
    }
}
