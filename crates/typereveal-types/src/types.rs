//! Type representation.

use smallvec::SmallVec;
use typereveal_common::Atom;

/// Interned type handle. Equal ids mean structurally equal types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeData {
    pub constructor: Atom,
    pub arguments: SmallVec<[TypeId; 2]>,
    pub nullable: bool,
}

/// A supertype as written in a class header, in terms of the class's own
/// type parameters.
///
/// `class ArrayList<E> : MutableList<E>` declares the template
/// `Class { name: "MutableList", arguments: [Param(0)] }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeTemplate {
    /// Positional reference to a type parameter of the declaring class.
    Param(usize),
    Class {
        name: String,
        arguments: Vec<TypeTemplate>,
        nullable: bool,
    },
}

impl TypeTemplate {
    /// Non-generic class reference.
    pub fn simple(name: &str) -> Self {
        Self::Class {
            name: name.to_string(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(name: &str, arguments: Vec<TypeTemplate>) -> Self {
        Self::Class {
            name: name.to_string(),
            arguments,
            nullable: false,
        }
    }
}
