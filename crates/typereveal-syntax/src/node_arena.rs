//! NodeArena creation and mutation methods.
//!
//! The arena owns every node of a file. Declarations are added by the host
//! front-end in document order; the only mutation the inspections perform is
//! `set_type_reference`.

use crate::node::{Node, NodeData, NodeIndex, PropertyData, TypeReferenceData};
use crate::type_parser::{TypeExpr, TypeParseError, parse_type_text};
use smallvec::SmallVec;
use tracing::trace;
use typereveal_common::{Atom, Interner, Span};

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) interner: Interner,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Get a reference to the interner
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn intern(&mut self, text: &str) -> Atom {
        self.interner.intern(text)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, parent: NodeIndex, span: Span, data: NodeData) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent,
            span,
            children: Vec::new(),
            data,
        });
        if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
            parent_node.children.push(idx);
        }
        idx
    }

    pub fn add_source_file(&mut self, file_name: impl Into<String>, span: Span) -> NodeIndex {
        self.push(
            NodeIndex::NONE,
            span,
            NodeData::SourceFile {
                file_name: file_name.into(),
            },
        )
    }

    pub fn add_class(&mut self, parent: NodeIndex, name: &str, span: Span) -> NodeIndex {
        let name = self.interner.intern(name);
        self.push(parent, span, NodeData::Class { name })
    }

    pub fn add_function(&mut self, parent: NodeIndex, name: &str, span: Span) -> NodeIndex {
        let name = self.interner.intern(name);
        self.push(parent, span, NodeData::Function { name })
    }

    pub fn add_block(&mut self, parent: NodeIndex, span: Span) -> NodeIndex {
        self.push(parent, span, NodeData::Block)
    }

    /// Add a `val` (or `var` when `is_mutable`) declaration without a type.
    pub fn add_property(
        &mut self,
        parent: NodeIndex,
        name: &str,
        is_mutable: bool,
        span: Span,
        name_span: Span,
    ) -> NodeIndex {
        let name = self.interner.intern(name);
        self.push(
            parent,
            span,
            NodeData::Property(PropertyData {
                name,
                name_span,
                is_mutable,
                type_reference: NodeIndex::NONE,
            }),
        )
    }

    /// Add a declaration that already carries an explicit annotation.
    pub fn add_typed_property(
        &mut self,
        parent: NodeIndex,
        name: &str,
        type_text: &str,
        span: Span,
        name_span: Span,
    ) -> Result<NodeIndex, TypeParseError> {
        let type_ref = self.create_type_from_text(type_text)?;
        let property = self.add_property(parent, name, false, span, name_span);
        self.set_type_reference(property, type_ref);
        Ok(property)
    }

    /// Parse `text` and materialise it as a detached type reference.
    ///
    /// Nothing is added to the arena unless the whole fragment parses.
    pub fn create_type_from_text(&mut self, text: &str) -> Result<NodeIndex, TypeParseError> {
        let expr = parse_type_text(text)?;
        Ok(self.create_type_reference(&expr))
    }

    /// Materialise a parsed type expression as detached type-reference nodes.
    pub fn create_type_reference(&mut self, expr: &TypeExpr) -> NodeIndex {
        let data = match expr {
            TypeExpr::Star => TypeReferenceData {
                name: SmallVec::new(),
                type_arguments: SmallVec::new(),
                nullable: false,
                is_star: true,
            },
            TypeExpr::Named {
                name,
                arguments,
                nullable,
            } => {
                let name = name
                    .iter()
                    .map(|segment| self.interner.intern(segment))
                    .collect();
                let type_arguments = arguments
                    .iter()
                    .map(|arg| self.create_type_reference(arg))
                    .collect();
                TypeReferenceData {
                    name,
                    type_arguments,
                    nullable: *nullable,
                    is_star: false,
                }
            }
        };

        let args = data.type_arguments.clone();
        let idx = self.push(NodeIndex::NONE, Span::default(), NodeData::TypeReference(data));
        for arg in args {
            self.reparent(arg, idx);
        }
        idx
    }

    /// Replace the explicit type slot of a property declaration.
    ///
    /// Any previous annotation is detached and marked removed, so the slot
    /// never holds more than one type reference. Returns `false` when
    /// `property` is not a property declaration or `type_ref` is not a type
    /// reference.
    pub fn set_type_reference(&mut self, property: NodeIndex, type_ref: NodeIndex) -> bool {
        if self.get_type_reference(type_ref).is_none() {
            return false;
        }
        // Only detached type references (or the current annotation) may be attached.
        let owner = self.parent_of(type_ref);
        if owner.is_some() && owner != property {
            return false;
        }
        let previous = match self.get_property(property) {
            Some(data) => data.type_reference,
            None => return false,
        };
        if previous == type_ref {
            return true;
        }
        if previous.is_some() {
            self.remove_node(previous);
        }

        let anchor = self
            .get_property(property)
            .map(|data| data.name_span.end)
            .unwrap_or(0);
        self.reparent(type_ref, property);
        if let Some(node) = self.nodes.get_mut(type_ref.0 as usize) {
            node.span = Span::at(anchor);
        }
        if let Some(NodeData::Property(data)) = self
            .nodes
            .get_mut(property.0 as usize)
            .map(|node| &mut node.data)
        {
            data.type_reference = type_ref;
        }
        trace!(property = property.0, type_ref = type_ref.0, "type reference attached");
        true
    }

    /// Detach `idx` from its parent and mark it (and its subtree) removed.
    ///
    /// Indices are never reused, so holders of a stale `NodeIndex` observe a
    /// `Removed` node instead of an unrelated one.
    pub fn remove_node(&mut self, idx: NodeIndex) {
        let Some(node) = self.nodes.get(idx.0 as usize) else {
            return;
        };
        let parent = node.parent;
        if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
            parent_node.children.retain(|&child| child != idx);
            if let NodeData::Property(data) = &mut parent_node.data {
                if data.type_reference == idx {
                    data.type_reference = NodeIndex::NONE;
                }
            }
        }

        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0 as usize) {
                stack.extend(node.children.drain(..));
                node.data = NodeData::Removed;
                node.parent = NodeIndex::NONE;
            }
        }
    }

    fn reparent(&mut self, child: NodeIndex, parent: NodeIndex) {
        let old_parent = match self.nodes.get(child.0 as usize) {
            Some(node) => node.parent,
            None => return,
        };
        if let Some(old) = self.nodes.get_mut(old_parent.0 as usize) {
            old.children.retain(|&c| c != child);
        }
        if let Some(node) = self.nodes.get_mut(child.0 as usize) {
            node.parent = parent;
        }
        if let Some(new_parent) = self.nodes.get_mut(parent.0 as usize) {
            if !new_parent.children.contains(&child) {
                new_parent.children.push(child);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/node_arena_tests.rs"]
mod tests;
