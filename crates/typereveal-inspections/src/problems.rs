//! Problem registration.
//!
//! A `ProblemsHolder` collects the problems of one analysis pass over one
//! file. Problems hold node indices, not references, and re-resolve their
//! declaration when a fix is applied.

use crate::code_actions::{AddPropertyTypeFix, CodeFixInfo, FixError, FixOutcome};
use typereveal_common::{Diagnostic, DiagnosticCategory, LineMap, Span};
use typereveal_syntax::{NodeArena, NodeIndex};

/// One problem on one declaration, with its fixes in suggestion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDescriptor {
    pub file_name: String,
    pub node: NodeIndex,
    /// Name of the flagged declaration when the problem was registered.
    pub declaration_name: String,
    /// Highlighted range (the declaration name).
    pub span: Span,
    pub message: &'static str,
    pub category: DiagnosticCategory,
    pub fixes: Vec<AddPropertyTypeFix>,
}

impl ProblemDescriptor {
    /// Find the flagged declaration again.
    ///
    /// Returns `None` when the node was removed, is no longer a property
    /// declaration, or now declares a different name.
    pub fn resolve_declaration(&self, arena: &NodeArena) -> Option<NodeIndex> {
        arena.get_property(self.node)?;
        arena.declaration_scope(self.node)?;
        (arena.declaration_name(self.node)? == self.declaration_name).then_some(self.node)
    }

    /// Apply the fix at `index` in the fix list.
    pub fn apply_fix(&self, index: usize, arena: &mut NodeArena) -> Result<FixOutcome, FixError> {
        let fix = self.fixes.get(index).ok_or(FixError::NoSuchFix {
            index,
            available: self.fixes.len(),
        })?;
        fix.apply(arena, self)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.file_name.clone(), self.span, self.message, self.category)
    }

    /// Editor-facing form of every fix, as text insertions after the name.
    pub fn code_fixes(&self, line_map: &LineMap) -> Vec<CodeFixInfo> {
        self.fixes
            .iter()
            .map(|fix| fix.to_code_fix(&self.file_name, self.span, line_map))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct ProblemsHolder {
    file_name: String,
    problems: Vec<ProblemDescriptor>,
}

impl ProblemsHolder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            problems: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Register one problem carrying all `fixes` as alternatives.
    pub fn register_problem(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        message: &'static str,
        category: DiagnosticCategory,
        fixes: Vec<AddPropertyTypeFix>,
    ) {
        let declaration_name = arena.declaration_name(node).unwrap_or_default().to_string();
        let span = arena
            .get_property(node)
            .map(|data| data.name_span)
            .or_else(|| arena.get(node).map(|n| n.span))
            .unwrap_or_default();
        self.problems.push(ProblemDescriptor {
            file_name: self.file_name.clone(),
            node,
            declaration_name,
            span,
            message,
            category,
            fixes,
        });
    }

    pub fn problems(&self) -> &[ProblemDescriptor] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn into_problems(self) -> Vec<ProblemDescriptor> {
        self.problems
    }
}
