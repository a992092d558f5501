//! Inspection settings.
//!
//! Deserialised from the `propertyType` section of a typereveal config file
//! (see `typereveal::config`). Every field has a default, so an empty object
//! is a valid configuration.

use serde::{Deserialize, Serialize};
use typereveal_common::DiagnosticCategory;

pub const NO_TYPE_REFERENCE_MESSAGE: &str = "There's no type reference for the property";
pub const SHOULD_SET_TYPE_MESSAGE: &str = "You should set a type for the property";

/// Wording of the registered problem. Both variants mean the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageStyle {
    #[default]
    NoTypeReference,
    ShouldSetType,
}

impl MessageStyle {
    pub const fn text(self) -> &'static str {
        match self {
            Self::NoTypeReference => NO_TYPE_REFERENCE_MESSAGE,
            Self::ShouldSetType => SHOULD_SET_TYPE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Warning,
    Suggestion,
    Error,
}

impl Severity {
    pub const fn category(self) -> DiagnosticCategory {
        match self {
            Self::Warning => DiagnosticCategory::Warning,
            Self::Suggestion => DiagnosticCategory::Suggestion,
            Self::Error => DiagnosticCategory::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectionConfig {
    pub enabled: bool,
    pub message: MessageStyle,
    pub severity: Severity,
    /// When false only the inferred type itself is offered as a fix.
    pub include_supertypes: bool,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message: MessageStyle::default(),
            severity: Severity::default(),
            include_supertypes: true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
