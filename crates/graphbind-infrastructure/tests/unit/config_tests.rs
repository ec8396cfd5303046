//! Configuration loading and validation

use std::fs;

use graphbind_domain::constants::DEFAULT_APPLICATION_TYPE;
use graphbind_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
use tempfile::TempDir;

/// Loader that no real environment variable can reach
fn loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("GRAPHBIND_UNIT_TEST_UNUSED")
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert!(config.home.directory.is_none());
    assert_eq!(config.home.default_directory.to_str(), Some("graphbind"));
    assert_eq!(config.home.configuration_file, "application.json");
    assert!(config.binder.implementation.is_none());
    assert_eq!(config.binder.application_type, DEFAULT_APPLICATION_TYPE);
    assert!(config.modules.paths.is_empty());
    assert_eq!(config.modules.file_name, "graphbind.json");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("graphbind.toml");
    fs::write(
        &path,
        r#"
[home]
directory = "/srv/app"

[binder]
implementation = "graph"
application_type = "urn:type:Custom"

[modules]
paths = ["/srv/modules", "/opt/modules"]

[logging]
level = "debug"
"#,
    )
    .expect("write config");

    let config = loader()
        .with_config_path(&path)
        .load()
        .expect("config loads");

    assert_eq!(
        config.home.directory.as_deref().and_then(|p| p.to_str()),
        Some("/srv/app")
    );
    assert_eq!(config.binder.implementation.as_deref(), Some("graph"));
    assert_eq!(config.binder.application_type, "urn:type:Custom");
    assert_eq!(config.modules.paths.len(), 2);
    assert_eq!(config.logging.level, "debug");
    // Untouched sections keep their defaults
    assert_eq!(config.modules.file_name, "graphbind.json");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let loader = loader().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().expect("defaults load");

    assert_eq!(loader.config_path(), Some(dir.path().join("absent.toml").as_path()));
    assert!(config.binder.implementation.is_none());
}

#[test]
fn test_invalid_log_level_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("graphbind.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("write config");

    let err = loader()
        .with_config_path(&path)
        .load()
        .expect_err("level is invalid");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_empty_binder_name_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("graphbind.toml");
    fs::write(&path, "[binder]\nimplementation = \"  \"\n").expect("write config");

    let err = loader()
        .with_config_path(&path)
        .load()
        .expect_err("empty name is invalid");

    assert!(err.is_configuration());
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("graphbind.toml");
    fs::write(&path, "[binder\nimplementation = ").expect("write config");

    let err = loader()
        .with_config_path(&path)
        .load()
        .expect_err("toml is malformed");

    assert!(err.is_configuration());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_home_directory(dir.path().join("home"))
        .with_module_path(dir.path().join("modules"))
        .with_logging(LoggingConfig {
            level: "warn".to_string(),
            json_format: true,
            file_output: None,
        })
        .build();

    loader().save_to_file(&config, &path).expect("config saves");
    let loaded = loader().with_config_path(&path).load().expect("config loads");

    assert_eq!(loaded.home.directory, Some(dir.path().join("home")));
    assert_eq!(loaded.modules.paths, vec![dir.path().join("modules")]);
    assert_eq!(loaded.logging.level, "warn");
    assert!(loaded.logging.json_format);
}
