//! Type-query interface and pre-computed type table for typereveal.
//!
//! The inspections never infer types themselves. They consume the results
//! of a type service through [`TypeQuery`]:
//! - the inferred type of a declaration node
//! - the immediate (one level) supertypes of a type
//! - the constructor name and type arguments of a type
//!
//! [`TypeTable`] is an in-memory store for hosts that compute types ahead of
//! time; [`SealedTypeTable`] is its read-only `TypeQuery` form.

mod table;
pub mod types;

pub use table::{ROOT_TYPE_NAME, SealedTypeTable, TypeTable};
pub use types::{TypeData, TypeId, TypeTemplate};

use typereveal_syntax::NodeIndex;

/// Read-only access to a type service's results.
pub trait TypeQuery {
    /// Inferred type of a declaration, `None` when inference failed.
    fn declaration_type(&self, node: NodeIndex) -> Option<TypeId>;

    /// Direct supertypes of `ty`, in the service's order.
    ///
    /// Only one level up; callers that want the transitive closure have to
    /// walk it themselves.
    fn immediate_supertypes(&self, ty: TypeId) -> Vec<TypeId>;

    /// Bare constructor name of `ty`, e.g. `List` for `List<String>`.
    fn constructor_name(&self, ty: TypeId) -> &str;

    fn type_arguments(&self, ty: TypeId) -> &[TypeId];

    /// Canonical rendering of `ty`, e.g. `Map<String, List<Int>>?`.
    fn display(&self, ty: TypeId) -> String;
}
