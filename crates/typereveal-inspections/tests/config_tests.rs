use super::*;

#[test]
fn empty_object_uses_defaults() {
    let config: InspectionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, InspectionConfig::default());
    assert!(config.enabled);
    assert_eq!(config.message.text(), NO_TYPE_REFERENCE_MESSAGE);
    assert_eq!(config.severity.category(), DiagnosticCategory::Warning);
    assert!(config.include_supertypes);
}

#[test]
fn camel_case_fields_and_variants() {
    let config: InspectionConfig = serde_json::from_str(
        r#"{ "enabled": false, "message": "shouldSetType", "severity": "suggestion" }"#,
    )
    .unwrap();
    assert!(!config.enabled);
    assert_eq!(config.message, MessageStyle::ShouldSetType);
    assert_eq!(config.message.text(), SHOULD_SET_TYPE_MESSAGE);
    assert_eq!(config.severity.category(), DiagnosticCategory::Suggestion);
}

#[test]
fn unknown_message_style_is_rejected() {
    let result: Result<InspectionConfig, _> = serde_json::from_str(r#"{ "message": "loud" }"#);
    assert!(result.is_err());
}

#[test]
fn include_supertypes_can_be_disabled() {
    let config: InspectionConfig =
        serde_json::from_str(r#"{ "includeSupertypes": false }"#).unwrap();
    assert!(!config.include_supertypes);
    assert!(config.enabled);
}

#[test]
fn error_severity_maps_to_error_category() {
    let config: InspectionConfig = serde_json::from_str(r#"{ "severity": "error" }"#).unwrap();
    assert_eq!(config.severity, Severity::Error);
    assert_eq!(config.severity.category(), DiagnosticCategory::Error);
}
