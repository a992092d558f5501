//! Diagnostic records produced by inspections.

use crate::span::Span;
use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
}

/// A plain diagnostic, detached from any fixes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub span: Span,
    pub message_text: String,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        category: DiagnosticCategory,
    ) -> Self {
        Self {
            file: file.into(),
            span,
            message_text: message.into(),
            category,
        }
    }

    pub fn start(&self) -> u32 {
        self.span.start
    }

    pub fn length(&self) -> u32 {
        self.span.len()
    }
}
