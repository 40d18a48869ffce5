use std::path::PathBuf;

use super::mock_fs::MockFileSystem;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

#[test]
fn no_config_files_yield_defaults() {
    let fs = MockFileSystem::new();
    let reads = fs.read_log();
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
    // Absent candidates are never opened
    assert!(reads.borrow().is_empty());
}

#[test]
fn local_config_is_found() {
    let fs = MockFileSystem::new().with_local_config("input = \"local.json\"");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config.input, PathBuf::from("local.json"));
    assert_eq!(result.source, Some(MockFileSystem::local_config_path()));
}

#[test]
fn user_config_is_used_when_no_local() {
    let fs = MockFileSystem::new().with_user_config("input = \"user.json\"");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config.input, PathBuf::from("user.json"));
    assert_eq!(result.source, Some(MockFileSystem::user_config_path()));
}

#[test]
fn local_config_takes_precedence_over_user() {
    let fs = MockFileSystem::new()
        .with_local_config("input = \"local.json\"")
        .with_user_config("input = \"user.json\"");
    let reads = fs.read_log();
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config.input, PathBuf::from("local.json"));
    assert_eq!(*reads.borrow(), [MockFileSystem::local_config_path()]);
}

#[test]
fn missing_config_dir_falls_back_to_defaults() {
    let fs = MockFileSystem::new()
        .with_user_config("input = \"user.json\"")
        .without_user_config_dir();
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn explicit_path_is_loaded() {
    let fs = MockFileSystem::new().with_file("/etc/plays.toml", "input = \"explicit.json\"");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader
        .load_from_path(&PathBuf::from("/etc/plays.toml"))
        .unwrap();

    assert_eq!(result.config.input, PathBuf::from("explicit.json"));
}

#[test]
fn explicit_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(&PathBuf::from("/nope.toml"))
        .unwrap_err();

    assert!(err.is_config_error());
    assert!(err.to_string().contains("/nope.toml"));
}
