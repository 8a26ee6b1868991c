mod support;

use std::path::PathBuf;

use launch_dash::config::{AppConfig, ConfigError};
use support::with_scoped_env;

#[test]
fn test_env_overrides_file_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(
        &path,
        "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[data]\npath = \"from_file.csv\"\n",
    )
    .unwrap();

    let config = with_scoped_env(
        &[("PORT", Some("8123")), ("HOST", None), ("DATA_PATH", Some("/srv/launches.csv"))],
        || AppConfig::from_file(&path).and_then(AppConfig::apply_env_overrides),
    )
    .unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:8123");
    assert_eq!(config.data.path, PathBuf::from("/srv/launches.csv"));
}

#[test]
fn test_bad_port_in_env_is_reported() {
    let result = with_scoped_env(&[("PORT", Some("not-a-port"))], || {
        AppConfig::default().apply_env_overrides()
    });
    assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
}
