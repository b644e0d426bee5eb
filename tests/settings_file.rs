use command_center::config::SettingsFile;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_settings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("command-center.yaml");
    fs::write(
        &path,
        "api:\n  default_base: http://localhost:8000\n  timeout: 10\nsession:\n  verbose: true\n",
    )
    .unwrap();

    let settings = SettingsFile::load_from(&path).unwrap();
    assert_eq!(
        settings.api.default_base.as_deref(),
        Some("http://localhost:8000")
    );
    assert_eq!(settings.api.timeout, Some(10));
    assert_eq!(settings.session.verbose, Some(true));
    assert!(settings.storage.dir.is_none());
}

#[test]
fn test_load_json_settings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".command-center.json");
    fs::write(&path, r#"{"storage": {"dir": "/tmp/cc"}}"#).unwrap();

    let settings = SettingsFile::load_from(&path).unwrap();
    assert_eq!(settings.storage.dir.as_deref(), Some("/tmp/cc"));
    assert!(settings.api.default_base.is_none());
}

#[test]
fn test_invalid_settings_report_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("command-center.yaml");
    fs::write(&path, "api: [unclosed").unwrap();

    let err = SettingsFile::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("command-center.yaml"));
}

#[test]
fn test_write_example_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("command-center.yaml");

    SettingsFile::write_example(&path, false).unwrap();
    let written = SettingsFile::load_from(&path).unwrap();
    assert_eq!(
        written.api.default_base.as_deref(),
        Some("http://localhost:8000")
    );

    assert!(SettingsFile::write_example(&path, false).is_err());
    assert!(SettingsFile::write_example(&path, true).is_ok());
}
