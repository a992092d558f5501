//! Syntax tree arena and type-expression parser for typereveal.
//!
//! This crate provides the host-side syntax representation the inspections
//! walk and mutate:
//! - `NodeArena` / `NodeIndex` - index-addressed syntax nodes
//! - `DeclarationScope` - where a property declaration lives
//! - `parse_type_text` - type-expression parser used by quick-fixes

pub mod node;
pub use node::{
    DeclarationScope, Node, NodeData, NodeIndex, NodeKind, PropertyData, TypeReferenceData,
};

mod node_access;
mod node_arena;
pub use node_arena::NodeArena;

pub mod scanner;
pub use scanner::{Scanner, Token, TokenKind};

pub mod type_parser;
pub use type_parser::{TypeExpr, TypeParseError, parse_type_text};
