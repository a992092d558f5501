use std::fs;
use typereveal::config::load_config_or_default;
use typereveal::inspections::{MessageStyle, Severity};
use typereveal::tracing_config::LogFormat;
use typereveal::{CONFIG_FILE_NAME, TypeRevealConfig, find_config_file, load_config, parse_config};

#[test]
fn empty_config_uses_defaults() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config, TypeRevealConfig::default());
    assert!(config.property_type.enabled);
}

#[test]
fn property_type_section_is_read() {
    let config = parse_config(
        r#"{ "propertyType": { "message": "shouldSetType", "severity": "error" } }"#,
    )
    .unwrap();
    assert!(config.property_type.enabled);
    assert_eq!(config.property_type.message, MessageStyle::ShouldSetType);
    assert_eq!(config.property_type.severity, Severity::Error);
}

#[test]
fn unknown_sections_are_rejected() {
    let err = parse_config(r#"{ "propertyTypes": {} }"#).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn load_config_reports_the_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "{ not json").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains(CONFIG_FILE_NAME));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(&dir.path().join(CONFIG_FILE_NAME)).is_err());
}

#[test]
fn config_is_found_in_an_ancestor_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src").join("main");
    fs::create_dir_all(&nested).unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, r#"{ "propertyType": { "enabled": false } }"#).unwrap();

    assert_eq!(find_config_file(&nested), Some(path));
    let config = load_config_or_default(&nested).unwrap();
    assert!(!config.property_type.enabled);
}

#[test]
fn log_format_parsing_defaults_to_text() {
    assert_eq!(LogFormat::parse("TREE"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
}
