//! Inspection for detecting properties declared without a type.
//!
//! Highlights top-level and member properties that have no explicit type
//! annotation and offers one [`AddPropertyTypeFix`] per suggested type: the
//! inferred type first, then each of its immediate supertypes.
//!
//! Local properties (inside function bodies and blocks) are never flagged.

use crate::code_actions::AddPropertyTypeFix;
use crate::config::InspectionConfig;
use crate::problems::{ProblemDescriptor, ProblemsHolder};
use crate::type_text::render_supertype;
use tracing::{debug, debug_span, trace};
use typereveal_syntax::{DeclarationScope, NodeArena, NodeIndex};
use typereveal_types::{TypeId, TypeQuery};

pub const DISPLAY_NAME: &str = "The property is without type declaration";
pub const GROUP_DISPLAY_NAME: &str = "Style issues";
pub const INSPECTION_FAMILY_NAME: &str = "Add property type";

/// Suggestion text used when the type service has no type for a declaration.
pub const MISSING_TYPE_PLACEHOLDER: &str = "null";

#[derive(Debug, Clone, Default)]
pub struct PropertyTypeInspection {
    config: InspectionConfig,
}

impl PropertyTypeInspection {
    pub fn new(config: InspectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    pub fn group_display_name(&self) -> &'static str {
        GROUP_DISPLAY_NAME
    }

    pub const fn is_enabled_by_default() -> bool {
        true
    }

    /// Whether `node` should be flagged: an untyped top-level or member
    /// property.
    pub fn is_eligible(arena: &NodeArena, node: NodeIndex) -> bool {
        let Some(data) = arena.get_property(node) else {
            return false;
        };
        if data.type_reference.is_some() {
            return false;
        }
        match arena.declaration_scope(node) {
            Some(DeclarationScope::TopLevel | DeclarationScope::Member) => true,
            Some(DeclarationScope::Local) | None => false,
        }
    }

    /// Analyse every property under `root`, in document order.
    ///
    /// Read-only: the tree is never mutated here.
    pub fn check_file(
        &self,
        arena: &NodeArena,
        root: NodeIndex,
        query: &dyn TypeQuery,
    ) -> Vec<ProblemDescriptor> {
        let file_name = arena.file_name_of(root).unwrap_or_default();
        let _span = debug_span!("property_type_inspection", file = file_name).entered();

        let mut holder = ProblemsHolder::new(file_name);
        if !self.config.enabled {
            debug!("inspection disabled");
            return holder.into_problems();
        }

        for property in arena.property_declarations(root) {
            self.visit_property(arena, property, query, &mut holder);
        }
        debug!(problems = holder.len(), "inspection finished");
        holder.into_problems()
    }

    pub fn visit_property(
        &self,
        arena: &NodeArena,
        property: NodeIndex,
        query: &dyn TypeQuery,
        holder: &mut ProblemsHolder,
    ) {
        if !Self::is_eligible(arena, property) {
            trace!(node = property.0, "skipping property");
            return;
        }

        let mut suggestions = suggest_types(query, query.declaration_type(property));
        if !self.config.include_supertypes {
            suggestions.truncate(1);
        }
        trace!(
            node = property.0,
            name = arena.declaration_name(property).unwrap_or_default(),
            suggestions = ?suggestions,
            "missing property type"
        );
        let fixes = suggestions.into_iter().map(AddPropertyTypeFix::new).collect();
        holder.register_problem(
            arena,
            property,
            self.config.message.text(),
            self.config.severity.category(),
            fixes,
        );
    }
}

/// Suggested annotation texts for a declaration whose inferred type is `ty`.
///
/// The inferred type's own display string comes first, followed by one
/// entry per immediate supertype in the order the type service reports
/// them. A failed inference still yields one (placeholder) suggestion.
pub fn suggest_types(query: &dyn TypeQuery, ty: Option<TypeId>) -> Vec<String> {
    let Some(ty) = ty else {
        return vec![MISSING_TYPE_PLACEHOLDER.to_string()];
    };
    let supertypes = query.immediate_supertypes(ty);
    let mut suggestions = Vec::with_capacity(1 + supertypes.len());
    suggestions.push(query.display(ty));
    suggestions.extend(
        supertypes
            .into_iter()
            .map(|supertype| render_supertype(query, supertype)),
    );
    suggestions
}

#[cfg(test)]
#[path = "../tests/inspection_tests.rs"]
mod tests;
