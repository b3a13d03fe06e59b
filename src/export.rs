use crate::cli::CommonArgs;
use crate::error::{Result, TimeTravelError};
use crate::model::SelectionMap;
use crate::script::{self, Dialect};
use anyhow::Context;
use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn exec(
    common: CommonArgs,
    dialect: Dialect,
    output: Option<Option<PathBuf>>,
    copy: bool,
) -> anyhow::Result<()> {
    let store = common
        .build_store(chrono::Local::now().date_naive())
        .context("Failed to build selection")?;

    if store.selections().is_empty() {
        return Err(TimeTravelError::NoSelection)
            .context("Select at least one date with --select or --from");
    }

    let text = script::generate(store.selections(), dialect);
    let summary = script::summarize(store.selections());
    let to_stdout = !copy && output.is_none();

    if let Some(target) = output {
        let path = target.unwrap_or_else(|| PathBuf::from(dialect.filename()));
        write_script(&path, &text)
            .with_context(|| format!("Failed to write script to {}", path.display()))?;
        eprintln!(
            "{} {} ({} commits across {} dates)",
            style("Wrote").green().bold(),
            path.display(),
            summary.total_commits,
            summary.dates
        );
    }

    if copy {
        copy_to_clipboard(&text).context("Failed to copy script to clipboard")?;
        eprintln!("{} script to clipboard", style("Copied").green().bold());
    }

    if to_stdout {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
    }

    Ok(())
}

/// Reads a JSON object of `{"YYYY-MM-DD": count}` pairs.
pub fn load_selections(path: &Path) -> Result<SelectionMap> {
    let raw = std::fs::read_to_string(path)?;
    let selections: SelectionMap = serde_json::from_str(&raw)?;
    info!(path = %path.display(), dates = selections.len(), "loaded selections");
    Ok(selections)
}

/// Writes the script and marks it executable on unix.
pub fn write_script(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(path, perms)?;
    }

    info!(path = %path.display(), bytes = text.len(), mime = script::MIME_TYPE, "script written");
    Ok(())
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    info!(bytes = text.len(), "script copied to clipboard");
    Ok(())
}
