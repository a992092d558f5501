//! In-memory type table.
//!
//! Types are hash-consed: `class_type` returns the same `TypeId` for the same
//! constructor, arguments and nullability. Supertypes are declared per class
//! as templates and instantiated on demand with the arguments of the queried
//! type.

use crate::TypeQuery;
use crate::types::{TypeData, TypeId, TypeTemplate};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;
use typereveal_common::{Atom, Interner};
use typereveal_syntax::NodeIndex;

/// Name of the root of the class hierarchy.
pub const ROOT_TYPE_NAME: &str = "Any";

/// Upper bound on types interned while sealing. Recursive generic
/// hierarchies (`class Foo<T> : Bar<Foo<List<T>>>`) would otherwise expand
/// forever.
const MAX_SEALED_TYPES: usize = 100_000;

#[derive(Clone, Debug)]
struct ClassInfo {
    type_params: Vec<Atom>,
    supertypes: Vec<TypeTemplate>,
}

#[derive(Clone, Debug)]
pub struct TypeTable {
    interner: Interner,
    types: Vec<TypeData>,
    type_ids: FxHashMap<TypeData, TypeId>,
    classes: FxHashMap<Atom, ClassInfo>,
    declaration_types: FxHashMap<NodeIndex, TypeId>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// An empty table that only knows the root type.
    pub fn new() -> Self {
        let mut table = Self {
            interner: Interner::new(),
            types: Vec::new(),
            type_ids: FxHashMap::default(),
            classes: FxHashMap::default(),
            declaration_types: FxHashMap::default(),
        };
        table.declare_class(ROOT_TYPE_NAME, &[], Vec::new());
        table
    }

    /// A table preloaded with the core library classes.
    pub fn with_builtins() -> Self {
        use crate::types::TypeTemplate::Param;
        let simple = TypeTemplate::simple;
        let generic = TypeTemplate::generic;

        let mut table = Self::new();
        table.declare_class("Comparable", &["T"], vec![]);
        table.declare_class("CharSequence", &[], vec![]);
        table.declare_class("Number", &[], vec![]);
        table.declare_class("Unit", &[], vec![]);
        table.declare_class(
            "String",
            &[],
            vec![
                generic("Comparable", vec![simple("String")]),
                simple("CharSequence"),
            ],
        );
        table.declare_class(
            "Int",
            &[],
            vec![simple("Number"), generic("Comparable", vec![simple("Int")])],
        );
        table.declare_class(
            "Long",
            &[],
            vec![simple("Number"), generic("Comparable", vec![simple("Long")])],
        );
        table.declare_class(
            "Double",
            &[],
            vec![simple("Number"), generic("Comparable", vec![simple("Double")])],
        );
        table.declare_class(
            "Boolean",
            &[],
            vec![generic("Comparable", vec![simple("Boolean")])],
        );

        table.declare_class("Iterable", &["T"], vec![]);
        table.declare_class("Collection", &["E"], vec![generic("Iterable", vec![Param(0)])]);
        table.declare_class("List", &["E"], vec![generic("Collection", vec![Param(0)])]);
        table.declare_class("Set", &["E"], vec![generic("Collection", vec![Param(0)])]);
        table.declare_class(
            "MutableIterable",
            &["T"],
            vec![generic("Iterable", vec![Param(0)])],
        );
        table.declare_class(
            "MutableCollection",
            &["E"],
            vec![
                generic("Collection", vec![Param(0)]),
                generic("MutableIterable", vec![Param(0)]),
            ],
        );
        table.declare_class(
            "MutableList",
            &["E"],
            vec![
                generic("List", vec![Param(0)]),
                generic("MutableCollection", vec![Param(0)]),
            ],
        );
        table.declare_class("RandomAccess", &[], vec![]);
        table.declare_class(
            "ArrayList",
            &["E"],
            vec![generic("MutableList", vec![Param(0)]), simple("RandomAccess")],
        );
        table.declare_class("Map", &["K", "V"], vec![]);
        table.declare_class(
            "MutableMap",
            &["K", "V"],
            vec![generic("Map", vec![Param(0), Param(1)])],
        );
        table.declare_class(
            "HashMap",
            &["K", "V"],
            vec![generic("MutableMap", vec![Param(0), Param(1)])],
        );
        table
    }

    /// Declare (or redeclare) a class with its type parameters and direct
    /// supertypes.
    ///
    /// A class other than the root that declares no supertypes gets the root
    /// type as its only supertype.
    pub fn declare_class(
        &mut self,
        name: &str,
        type_params: &[&str],
        mut supertypes: Vec<TypeTemplate>,
    ) {
        if supertypes.is_empty() && name != ROOT_TYPE_NAME {
            supertypes.push(TypeTemplate::simple(ROOT_TYPE_NAME));
        }
        let name = self.interner.intern(name);
        let type_params = type_params
            .iter()
            .map(|param| self.interner.intern(param))
            .collect();
        self.classes.insert(
            name,
            ClassInfo {
                type_params,
                supertypes,
            },
        );
    }

    /// Intern `name<arguments>`.
    pub fn class_type(&mut self, name: &str, arguments: &[TypeId]) -> TypeId {
        let constructor = self.interner.intern(name);
        self.intern(TypeData {
            constructor,
            arguments: SmallVec::from_slice(arguments),
            nullable: false,
        })
    }

    /// Nullable variant of `ty`.
    pub fn nullable(&mut self, ty: TypeId) -> TypeId {
        match self.get(ty) {
            Some(data) if !data.nullable => {
                let data = TypeData {
                    nullable: true,
                    ..data.clone()
                };
                self.intern(data)
            }
            _ => ty,
        }
    }

    pub fn get(&self, ty: TypeId) -> Option<&TypeData> {
        self.types.get(ty.0 as usize)
    }

    /// Record the inferred type of a declaration node.
    pub fn record_declaration_type(&mut self, node: NodeIndex, ty: TypeId) {
        self.declaration_types.insert(node, ty);
    }

    fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.type_ids.get(&data) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(data.clone());
        self.type_ids.insert(data, id);
        id
    }

    /// Supertypes of `ty`, instantiated with `ty`'s arguments.
    ///
    /// Instantiation may intern new types; [`SealedTypeTable`] answers the
    /// same question from a cache filled by [`TypeTable::seal`].
    pub fn instantiate_supertypes(&mut self, ty: TypeId) -> Vec<TypeId> {
        let Some(data) = self.get(ty).cloned() else {
            return Vec::new();
        };
        let Some(class) = self.classes.get(&data.constructor).cloned() else {
            return Vec::new();
        };
        class
            .supertypes
            .iter()
            .map(|template| {
                let sup = self.instantiate(template, &data.arguments, &class.type_params);
                if data.nullable { self.nullable(sup) } else { sup }
            })
            .collect()
    }

    fn instantiate(
        &mut self,
        template: &TypeTemplate,
        arguments: &[TypeId],
        params: &[Atom],
    ) -> TypeId {
        match template {
            TypeTemplate::Param(index) => match arguments.get(*index) {
                Some(&arg) => arg,
                // Raw use of a generic class: leave the parameter unsubstituted.
                None => {
                    let constructor = params.get(*index).copied().unwrap_or(Atom::NONE);
                    self.intern(TypeData {
                        constructor,
                        arguments: SmallVec::new(),
                        nullable: false,
                    })
                }
            },
            TypeTemplate::Class {
                name,
                arguments: template_args,
                nullable,
            } => {
                let instantiated: SmallVec<[TypeId; 2]> = template_args
                    .iter()
                    .map(|arg| self.instantiate(arg, arguments, params))
                    .collect();
                let constructor = self.interner.intern(name);
                self.intern(TypeData {
                    constructor,
                    arguments: instantiated,
                    nullable: *nullable,
                })
            }
        }
    }

    /// Instantiate the supertypes of every interned type so that read-only
    /// queries can answer from the cache.
    ///
    /// Hosts call this once after populating the table; it repeats until no
    /// new types appear.
    pub fn seal(&mut self) -> SealedTypeTable {
        let mut supertypes: FxHashMap<TypeId, Vec<TypeId>> = FxHashMap::default();
        let mut next = 0usize;
        while next < self.types.len() && next < MAX_SEALED_TYPES {
            let ty = TypeId(next as u32);
            let sups = self.instantiate_supertypes(ty);
            supertypes.insert(ty, sups);
            next += 1;
        }
        trace!(types = self.types.len(), "type table sealed");
        SealedTypeTable {
            table: self.clone(),
            supertypes,
        }
    }

    fn write_type(&self, ty: TypeId, out: &mut String) {
        let Some(data) = self.get(ty) else {
            return;
        };
        out.push_str(self.interner.resolve(data.constructor));
        if !data.arguments.is_empty() {
            out.push('<');
            for (i, arg) in data.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_type(*arg, out);
            }
            out.push('>');
        }
        if data.nullable {
            out.push('?');
        }
    }
}

/// A `TypeTable` whose supertypes have all been instantiated.
///
/// This is the form handed to the inspections: every query is a read.
#[derive(Clone, Debug)]
pub struct SealedTypeTable {
    table: TypeTable,
    supertypes: FxHashMap<TypeId, Vec<TypeId>>,
}

impl SealedTypeTable {
    pub fn table(&self) -> &TypeTable {
        &self.table
    }
}

impl TypeQuery for SealedTypeTable {
    fn declaration_type(&self, node: NodeIndex) -> Option<TypeId> {
        self.table.declaration_types.get(&node).copied()
    }

    fn immediate_supertypes(&self, ty: TypeId) -> Vec<TypeId> {
        self.supertypes.get(&ty).cloned().unwrap_or_default()
    }

    fn constructor_name(&self, ty: TypeId) -> &str {
        self.table
            .get(ty)
            .map_or("", |data| self.table.interner.resolve(data.constructor))
    }

    fn type_arguments(&self, ty: TypeId) -> &[TypeId] {
        match self.table.get(ty) {
            Some(data) => &data.arguments,
            None => &[],
        }
    }

    fn display(&self, ty: TypeId) -> String {
        let mut out = String::new();
        self.table.write_type(ty, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../tests/type_table_tests.rs"]
mod tests;
