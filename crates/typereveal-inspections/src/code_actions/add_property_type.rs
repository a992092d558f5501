//! Fix which adds a property type.

use super::code_action_fixes::{
    CodeFixFileChange, CodeFixInfo, CodeFixPosition, CodeFixTextChange,
};
use crate::inspection::INSPECTION_FAMILY_NAME;
use crate::problems::ProblemDescriptor;
use thiserror::Error;
use tracing::debug;
use typereveal_common::{LineMap, Span};
use typereveal_syntax::{NodeArena, NodeIndex, TypeParseError, parse_type_text};

pub const FIX_NAME: &str = "addPropertyType";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// The annotation was attached as `type_ref`.
    Applied { type_ref: NodeIndex },
    /// The declaration already carries exactly this annotation.
    AlreadyAnnotated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    #[error("declaration '{name}' no longer exists")]
    StaleDeclaration { name: String },
    #[error("'{text}' is not a valid type: {source}")]
    InvalidType {
        text: String,
        #[source]
        source: TypeParseError,
    },
    #[error("no fix at index {index} ({available} available)")]
    NoSuchFix { index: usize, available: usize },
}

/// Inserts one suggested type into a flagged declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPropertyTypeFix {
    type_text: String,
}

impl AddPropertyTypeFix {
    pub fn new(type_text: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
        }
    }

    pub fn type_text(&self) -> &str {
        &self.type_text
    }

    pub fn name(&self) -> String {
        format!("Insert the type: {}", self.type_text)
    }

    pub fn family_name(&self) -> &'static str {
        INSPECTION_FAMILY_NAME
    }

    /// Attach the held type to the declaration flagged by `problem`.
    ///
    /// The tree is only touched once the declaration has been re-resolved and
    /// the whole type text has parsed. On error nothing is mutated.
    pub fn apply(
        &self,
        arena: &mut NodeArena,
        problem: &ProblemDescriptor,
    ) -> Result<FixOutcome, FixError> {
        let result = self.try_apply(arena, problem);
        if let Err(err) = &result {
            debug!(fix = %self.name(), error = %err, "quick-fix skipped");
        }
        result
    }

    fn try_apply(
        &self,
        arena: &mut NodeArena,
        problem: &ProblemDescriptor,
    ) -> Result<FixOutcome, FixError> {
        let property =
            problem
                .resolve_declaration(arena)
                .ok_or_else(|| FixError::StaleDeclaration {
                    name: problem.declaration_name.clone(),
                })?;

        let expr = parse_type_text(&self.type_text).map_err(|source| FixError::InvalidType {
            text: self.type_text.clone(),
            source,
        })?;

        if arena.property_type_text(property).as_deref() == Some(expr.to_string().as_str()) {
            return Ok(FixOutcome::AlreadyAnnotated);
        }

        let type_ref = arena.create_type_reference(&expr);
        if !arena.set_type_reference(property, type_ref) {
            arena.remove_node(type_ref);
            return Err(FixError::StaleDeclaration {
                name: problem.declaration_name.clone(),
            });
        }
        Ok(FixOutcome::Applied { type_ref })
    }

    /// Text-edit form of this fix: insert `: Type` right after the name.
    pub fn to_code_fix(&self, file_name: &str, name_span: Span, line_map: &LineMap) -> CodeFixInfo {
        let at = CodeFixPosition::from_offset(line_map, name_span.end);
        CodeFixInfo {
            fix_name: FIX_NAME.to_string(),
            description: self.name(),
            changes: vec![CodeFixFileChange {
                file_name: file_name.to_string(),
                text_changes: vec![CodeFixTextChange {
                    start: at,
                    end: at,
                    new_text: format!(": {}", self.type_text),
                }],
            }],
            family_name: INSPECTION_FAMILY_NAME.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/add_property_type_tests.rs"]
mod tests;
