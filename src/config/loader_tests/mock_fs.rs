use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::{FileSystem, LOCAL_CONFIG_NAME, USER_CONFIG_NAME};

const PROJECT_DIR: &str = "/project";
const USER_CONFIG_DIR: &str = "/home/user/.config/play-filter";

/// In-memory project directory plus user config directory.
///
/// Every `read_to_string` call is recorded in a shared log, so tests can check
/// which candidates the loader opened after handing the mock over.
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, String>,
    user_config_dir: Option<PathBuf>,
    reads: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            user_config_dir: Some(PathBuf::from(USER_CONFIG_DIR)),
            reads: Rc::default(),
        }
    }

    pub fn local_config_path() -> PathBuf {
        Path::new(PROJECT_DIR).join(LOCAL_CONFIG_NAME)
    }

    pub fn user_config_path() -> PathBuf {
        Path::new(USER_CONFIG_DIR).join(USER_CONFIG_NAME)
    }

    pub fn with_local_config(self, toml: &str) -> Self {
        self.with_file(Self::local_config_path(), toml)
    }

    pub fn with_user_config(self, toml: &str) -> Self {
        self.with_file(Self::user_config_path(), toml)
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Simulate a platform with no resolvable user config directory.
    pub fn without_user_config_dir(mut self) -> Self {
        self.user_config_dir = None;
        self
    }

    pub fn read_log(&self) -> Rc<RefCell<Vec<PathBuf>>> {
        Rc::clone(&self.reads)
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(PathBuf::from(PROJECT_DIR))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.user_config_dir.clone()
    }
}
