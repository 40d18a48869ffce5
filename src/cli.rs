use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "play-filter")]
#[command(
    author,
    version,
    about = "Remove listening-history plays inside a time window"
)]
#[command(long_about = "Loads a JSON array of listening-history records, drops every record whose \
    `ts` falls in the half-open window [start, end), and rewrites the same file.\n\n\
    Exit codes:\n  \
    0 - History filtered (or dry run completed)\n  \
    1 - History file could not be read, parsed or written\n  \
    2 - Configuration error")]
pub struct Cli {
    /// History file to filter in place (overrides config `input`)
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Window start, inclusive (RFC 3339, e.g. 2022-06-15T16:30:00Z)
    #[arg(long, value_name = "TIMESTAMP")]
    pub start: Option<String>,

    /// Window end, exclusive (RFC 3339, e.g. 2022-06-16T00:00:00Z)
    #[arg(long, value_name = "TIMESTAMP")]
    pub end: Option<String>,

    /// Report what would be removed without rewriting the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary and all logs except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
