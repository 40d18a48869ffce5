pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod logging;
pub mod output;
pub mod state;
pub mod timestamp;
pub mod window;

pub use error::{PlayFilterError, Result};
pub use filter::{FilterSummary, filter_history};
pub use history::{PlayHistory, PlayRecord};
pub use window::ExclusionWindow;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
