#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the play-filter binary with `RUST_LOG` cleared.
#[macro_export]
macro_rules! play_filter {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("play-filter"));
        cmd.env_remove("RUST_LOG");
        cmd
    }};
}

/// Three plays around the default window: before, inside, after.
pub const SCENARIO_A: &str = r#"[
  {"ts": "2022-06-15T16:00:00Z", "username": "listener", "ms_played": 180000, "master_metadata_track_name": "Before"},
  {"ts": "2022-06-15T17:00:00Z", "username": "listener", "ms_played": 95000, "master_metadata_track_name": "During"},
  {"ts": "2022-06-16T01:00:00Z", "username": "listener", "ms_played": 240000, "master_metadata_track_name": "After"}
]"#;

/// Expected file content after filtering `SCENARIO_A` with the default window.
pub const SCENARIO_A_FILTERED: &str = r#"[
  {
    "ts": "2022-06-15T16:00:00Z",
    "username": "listener",
    "ms_played": 180000,
    "master_metadata_track_name": "Before"
  },
  {
    "ts": "2022-06-16T01:00:00Z",
    "username": "listener",
    "ms_played": 240000,
    "master_metadata_track_name": "After"
  }
]"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `history.json` and returns its path.
    pub fn create_history(&self, content: &str) -> PathBuf {
        self.create_file("history.json", content)
    }

    /// Creates a `.play-filter.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".play-filter.toml", content)
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command running inside the fixture, isolated from the user's config directory.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = play_filter!();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("APPDATA", self.path().join("AppData"));
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
