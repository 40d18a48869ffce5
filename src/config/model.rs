use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::window::ExclusionWindow;

/// History file rewritten when no path is configured.
pub const DEFAULT_INPUT_PATH: &str = "assets/data/Clean_Streaming_History_2020-2023.json";

/// Built-in exclusion window start (inclusive).
pub const DEFAULT_WINDOW_START: &str = "2022-06-15T16:30:00+00:00";

/// Built-in exclusion window end (exclusive).
pub const DEFAULT_WINDOW_END: &str = "2022-06-16T00:00:00+00:00";

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_window_start() -> String {
    DEFAULT_WINDOW_START.to_string()
}

fn default_window_end() -> String {
    DEFAULT_WINDOW_END.to_string()
}

/// Exclusion window bounds as written in the config file.
///
/// Bounds stay as strings here and are parsed by [`Config::exclusion_window`],
/// so a bad value is reported with the same rules used for record timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Inclusive start of the window
    #[serde(default = "default_window_start")]
    pub start: String,

    /// Exclusive end of the window
    #[serde(default = "default_window_end")]
    pub end: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start: default_window_start(),
            end: default_window_end(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// History file to filter in place
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate the configured window.
    ///
    /// # Errors
    /// Returns `InvalidWindowBound` or `WindowOrder`.
    pub fn exclusion_window(&self) -> Result<ExclusionWindow> {
        ExclusionWindow::parse(&self.window.start, &self.window.end)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
