pub mod filter;

pub use filter::{apply_cli_overrides, format_error, load_config, run_filter, run_filter_impl};
