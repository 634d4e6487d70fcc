use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.migrations_glob, "migrations/*.sql");
    assert_eq!(config.exclude, vec!["duplicates_backup".to_string()]);
    assert_eq!(config.lookback_lines, 2);
    assert_eq!(config.max_lookahead, 500);
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
migrations_glob: "db/migrations/*.sql"
exclude:
  - duplicates_backup
  - archive
lookback_lines: 4
max_lookahead: 50
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.migrations_glob, "db/migrations/*.sql");
    assert_eq!(config.exclude.len(), 2);
    assert_eq!(config.lookback_lines, 4);
    assert_eq!(config.max_lookahead, 50);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("lookback: 3");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_zero_lookback() {
    let config = Config {
        lookback_lines: 0,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, GuardError::ConfigInvalid { .. }));
    assert!(err.to_string().contains("[TG003]"));
}

#[test]
fn test_validate_rejects_zero_lookahead() {
    let config = Config {
        max_lookahead: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_blank_glob() {
    let config = Config {
        migrations_glob: "  ".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("nope.yml")).unwrap_err();
    assert!(matches!(err, GuardError::ConfigNotFound { .. }));
}

#[test]
fn test_load_from_dir_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_dir_reads_yaml_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("trigger-guard.yaml"), "lookback_lines: 3\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.lookback_lines, 3);
    assert_eq!(config.migrations_glob, DEFAULT_MIGRATIONS_GLOB);
}

#[test]
fn test_load_invalid_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trigger-guard.yml");
    fs::write(&path, "exclude: [unterminated\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, GuardError::ConfigParse { .. }));
}

#[test]
fn test_is_excluded() {
    let config = Config::default();
    assert!(config.is_excluded(Path::new(
        "migrations/duplicates_backup/001_init.sql"
    )));
    assert!(config.is_excluded(Path::new("migrations/001_duplicates_backup.sql")));
    assert!(!config.is_excluded(Path::new("migrations/001_init.sql")));
}

#[test]
fn test_empty_marker_excludes_nothing() {
    let config = Config {
        exclude: vec![String::new()],
        ..Default::default()
    };
    assert!(!config.is_excluded(Path::new("migrations/001_init.sql")));
}
