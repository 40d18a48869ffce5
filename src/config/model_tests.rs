use super::*;
use crate::PlayFilterError;

#[test]
fn default_config_uses_built_in_constants() {
    let config = Config::default();
    assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
    assert_eq!(config.window.start, DEFAULT_WINDOW_START);
    assert_eq!(config.window.end, DEFAULT_WINDOW_END);
}

#[test]
fn default_window_parses() {
    let window = Config::default().exclusion_window().unwrap();
    assert_eq!(
        window.to_string(),
        "[2022-06-15T16:30:00+00:00, 2022-06-16T00:00:00+00:00)"
    );
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_window_keeps_other_default() {
    let config: Config = toml::from_str(
        r#"
[window]
end = "2022-06-15T20:00:00Z"
"#,
    )
    .unwrap();

    assert_eq!(config.window.start, DEFAULT_WINDOW_START);
    assert_eq!(config.window.end, "2022-06-15T20:00:00Z");
    assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
}

#[test]
fn full_config_parses() {
    let config: Config = toml::from_str(
        r#"
input = "plays.json"

[window]
start = "2023-01-01T00:00:00Z"
end = "2023-01-02T00:00:00+01:00"
"#,
    )
    .unwrap();

    assert_eq!(config.input, PathBuf::from("plays.json"));
    let window = config.exclusion_window().unwrap();
    assert_eq!(window.end().offset().local_minus_utc(), 3600);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("inptu = \"typo.json\"");
    assert!(result.is_err());

    let result: std::result::Result<Config, _> = toml::from_str("[window]\nbegin = \"x\"");
    assert!(result.is_err());
}

#[test]
fn reversed_window_is_rejected() {
    let config = Config {
        window: WindowConfig {
            start: DEFAULT_WINDOW_END.to_string(),
            end: DEFAULT_WINDOW_START.to_string(),
        },
        ..Config::default()
    };

    assert!(matches!(
        config.exclusion_window(),
        Err(PlayFilterError::WindowOrder { .. })
    ));
}

#[test]
fn naive_window_bound_is_rejected() {
    let config = Config {
        window: WindowConfig {
            start: "2022-06-15T16:30:00".to_string(),
            end: DEFAULT_WINDOW_END.to_string(),
        },
        ..Config::default()
    };

    assert!(matches!(
        config.exclusion_window(),
        Err(PlayFilterError::InvalidWindowBound { .. })
    ));
}

#[test]
fn config_serializes_back_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    let reparsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(reparsed, Config::default());
}
