use crate::model::SelectionMap;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Content type used when the script is offered as a download.
pub const MIME_TYPE: &str = "text/plain";

/// Time of day pinned on every generated commit.
pub const COMMIT_TIME: &str = "12:00:00";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Bash,
    Batch,
}

impl Dialect {
    /// Fixed download filename for this dialect.
    pub fn filename(self) -> &'static str {
        match self {
            Dialect::Bash => "github-time-travel.sh",
            Dialect::Batch => "github-time-travel.bat",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Dialect::Bash => Dialect::Batch,
            Dialect::Batch => Dialect::Bash,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dialect::Bash => "bash",
            Dialect::Batch => "batch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    pub dates: usize,
    pub total_commits: u64,
}

pub fn summarize(selections: &SelectionMap) -> ScriptSummary {
    ScriptSummary {
        dates: selections.len(),
        total_commits: selections.total_commits(),
    }
}

/// Marker file for the `index`-th commit on `date`, e.g. `temp_file_20240105_2.txt`.
pub fn marker_file(date: NaiveDate, index: u32) -> String {
    format!("temp_file_{}_{index}.txt", date.format("%Y%m%d"))
}

/// Renders the automation script: one commit block per unit of count, dates ascending.
///
/// Output depends only on the entries of `selections`.
pub fn generate(selections: &SelectionMap, dialect: Dialect) -> String {
    let total = selections.total_commits();
    let mut out = String::new();

    match dialect {
        Dialect::Bash => bash_header(&mut out, total),
        Dialect::Batch => batch_header(&mut out, total),
    }

    for (date, count) in selections.iter() {
        for index in 1..=count {
            match dialect {
                Dialect::Bash => bash_block(&mut out, date, index, count),
                Dialect::Batch => batch_block(&mut out, date, index, count),
            }
        }
    }

    match dialect {
        Dialect::Bash => bash_footer(&mut out, total),
        Dialect::Batch => batch_footer(&mut out, total),
    }

    out
}

fn bash_header(out: &mut String, total: u64) {
    out.push_str(&format!(
        r#"#!/bin/bash
# GitHub Time Travel Script
# This script creates fake commits for selected dates

# Make sure you're in a git repository
if [ ! -d ".git" ]; then
    echo "Error: Not a git repository. Run 'git init' first."
    exit 1
fi

echo "Creating {total} fake commits..."
"#
    ));
}

fn bash_block(out: &mut String, date: NaiveDate, index: u32, count: u32) {
    let marker = marker_file(date, index);
    let stamp = format!("{date}T{COMMIT_TIME}");
    out.push_str(&format!(
        r#"
# Commit {index} of {count} for {date}
echo "Fake commit {index} for {date}" > {marker}
git add {marker}
GIT_AUTHOR_DATE="{stamp}" GIT_COMMITTER_DATE="{stamp}" git commit -m "Time travel commit {index} for {date}"
rm {marker}
"#
    ));
}

fn bash_footer(out: &mut String, total: u64) {
    out.push_str(&format!(
        r#"
echo "✅ Created {total} fake commits!"
echo "📝 Remember to push your changes: git push origin main"
echo "⚠️  Warning: This is for educational purposes only!"
"#
    ));
}

fn batch_header(out: &mut String, total: u64) {
    out.push_str(&format!(
        r#"@echo off
setlocal
REM GitHub Time Travel Script
REM This script creates fake commits for selected dates

REM Make sure you're in a git repository
if not exist ".git" (
    echo Error: Not a git repository. Run 'git init' first.
    exit /b 1
)

echo Creating {total} fake commits...
"#
    ));
}

fn batch_block(out: &mut String, date: NaiveDate, index: u32, count: u32) {
    let marker = marker_file(date, index);
    let stamp = format!("{date}T{COMMIT_TIME}");
    out.push_str(&format!(
        r#"
REM Commit {index} of {count} for {date}
echo Fake commit {index} for {date}> {marker}
git add {marker}
set GIT_AUTHOR_DATE={stamp}
set GIT_COMMITTER_DATE={stamp}
git commit -m "Time travel commit {index} for {date}"
del {marker}
"#
    ));
}

fn batch_footer(out: &mut String, total: u64) {
    out.push_str(&format!(
        r#"
set GIT_AUTHOR_DATE=
set GIT_COMMITTER_DATE=
echo Created {total} fake commits!
echo Remember to push your changes: git push origin main
echo Warning: This is for educational purposes only!
endlocal
"#
    ));
}
