use std::error::Error as _;
use std::fmt::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::filter::{FilterSummary, filter_history};
use crate::history::PlayHistory;
use crate::output::{OutputFormatter, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_DATA_ERROR, EXIT_SUCCESS, PlayFilterError, Result};

/// Run the filter and print its summary. Returns the process exit code.
pub fn run_filter(cli: &Cli) -> i32 {
    match run_filter_impl(cli) {
        Ok(summary) => {
            if !cli.quiet {
                print!("{}", TextFormatter.format(&summary));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            debug!(error_type = e.error_type(), "run aborted");
            eprint!("{}", format_error(&e));
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_DATA_ERROR
            }
        }
    }
}

/// Load, filter and (unless `--dry-run`) rewrite the history file.
///
/// Nothing is written unless loading and filtering both succeed.
///
/// # Errors
/// Returns the first configuration, file, format or field error encountered.
pub fn run_filter_impl(cli: &Cli) -> Result<FilterSummary> {
    // 1. Resolve configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    apply_cli_overrides(&mut config, cli);

    // 2. Build the window before touching the history file
    let window = config.exclusion_window()?;
    let path = config.input.as_path();
    info!(
        path = %path.display(),
        start = %window.start().to_rfc3339(),
        end = %window.end().to_rfc3339(),
        "filtering play history"
    );
    if window.is_empty() {
        warn!(%window, "exclusion window is empty, no plays will be removed");
    }

    // 3. Load everything into memory
    let history = PlayHistory::load(path)?;

    // 4. Filter, failing on the first bad record
    let (filtered, summary) = filter_history(history, &window)?;
    if !summary.has_changes() {
        debug!(records = summary.original, "no plays inside the window");
    }

    // 5. Overwrite in place
    if cli.dry_run {
        warn!(path = %path.display(), "dry run, history file not modified");
    } else {
        filtered.save(path)?;
        info!(
            path = %path.display(),
            removed = summary.removed,
            "history file rewritten"
        );
    }

    Ok(summary)
}

/// Load configuration from `config_path`, the default locations, or built-in defaults.
///
/// # Errors
/// Returns an error if a config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI flags take precedence over config file values.
pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.path {
        config.input.clone_from(path);
    }

    if let Some(start) = &cli.start {
        config.window.start.clone_from(start);
    }

    if let Some(end) = &cli.end {
        config.window.end.clone_from(end);
    }
}

/// `Error: <message>` followed by one `caused by:` line per source.
#[must_use]
pub fn format_error(err: &PlayFilterError) -> String {
    let mut output = format!("Error: {err}\n");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(output, "  caused by: {cause}");
        source = cause.source();
    }
    output
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
