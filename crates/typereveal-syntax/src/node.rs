//! Node definitions for the syntax arena.
//!
//! Every node lives in a `NodeArena` and is addressed by `NodeIndex`. Kind
//! specific payloads are carried in `NodeData`, so visitors dispatch with a
//! single `match`.

use serde::Serialize;
use smallvec::SmallVec;
use typereveal_common::{Atom, Span};

/// Index of a node in a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    SourceFile,
    ClassDeclaration,
    FunctionDeclaration,
    Block,
    PropertyDeclaration,
    TypeReference,
    /// Node detached by `NodeArena::remove_node`; kept so indices stay stable.
    Removed,
}

/// Where a property declaration appears.
///
/// Decided by the kind of the declaration's immediate parent: a source file
/// yields `TopLevel`, a class body yields `Member`, and function bodies or
/// blocks yield `Local`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeclarationScope {
    TopLevel,
    Member,
    Local,
}

/// A stored-value declaration (`val` / `var`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyData {
    pub name: Atom,
    pub name_span: Span,
    pub is_mutable: bool,
    /// Explicit type annotation, `NodeIndex::NONE` when absent.
    pub type_reference: NodeIndex,
}

/// A (possibly qualified, possibly generic) type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeReferenceData {
    /// Qualified name segments, e.g. `["kotlin", "collections", "List"]`.
    pub name: SmallVec<[Atom; 2]>,
    pub type_arguments: SmallVec<[NodeIndex; 2]>,
    pub nullable: bool,
    /// `*` projection in a type-argument position. `name` is empty.
    pub is_star: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    SourceFile { file_name: String },
    Class { name: Atom },
    Function { name: Atom },
    Block,
    Property(PropertyData),
    TypeReference(TypeReferenceData),
    Removed,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::SourceFile { .. } => NodeKind::SourceFile,
            Self::Class { .. } => NodeKind::ClassDeclaration,
            Self::Function { .. } => NodeKind::FunctionDeclaration,
            Self::Block => NodeKind::Block,
            Self::Property(_) => NodeKind::PropertyDeclaration,
            Self::TypeReference(_) => NodeKind::TypeReference,
            Self::Removed => NodeKind::Removed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub parent: NodeIndex,
    pub span: Span,
    pub children: Vec<NodeIndex>,
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}
