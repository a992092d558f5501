//! Shared limits for recursive algorithms.

/// Maximum nesting of type arguments in a type expression.
///
/// The type parser, the arena's type-reference builder and the type-text
/// printer all recurse once per `<`. Text nested deeper than this is
/// rejected at parse time, so the later stages never see it.
///
/// ```text
/// List<List<List<...100 levels...>>>
/// ```
pub const MAX_TYPE_NESTING_DEPTH: u32 = 100;
