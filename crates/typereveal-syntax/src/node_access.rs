//! Read-only queries over a `NodeArena`.

use crate::node::{
    DeclarationScope, Node, NodeData, NodeIndex, NodeKind, PropertyData, TypeReferenceData,
};
use crate::node_arena::NodeArena;

impl NodeArena {
    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<NodeKind> {
        self.get(idx).map(Node::kind)
    }

    pub fn get_property(&self, idx: NodeIndex) -> Option<&PropertyData> {
        match &self.get(idx)?.data {
            NodeData::Property(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_reference(&self, idx: NodeIndex) -> Option<&TypeReferenceData> {
        match &self.get(idx)?.data {
            NodeData::TypeReference(data) => Some(data),
            _ => None,
        }
    }

    pub fn parent_of(&self, idx: NodeIndex) -> NodeIndex {
        self.get(idx).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn children_of(&self, idx: NodeIndex) -> &[NodeIndex] {
        match self.get(idx) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Name of a property, class, or function declaration.
    pub fn declaration_name(&self, idx: NodeIndex) -> Option<&str> {
        let atom = match &self.get(idx)?.data {
            NodeData::Property(data) => data.name,
            NodeData::Class { name } | NodeData::Function { name } => *name,
            _ => return None,
        };
        Some(self.interner.resolve(atom))
    }

    /// File name of the source file that contains `idx`.
    pub fn file_name_of(&self, idx: NodeIndex) -> Option<&str> {
        let mut current = idx;
        while let Some(node) = self.get(current) {
            if let NodeData::SourceFile { file_name } = &node.data {
                return Some(file_name);
            }
            current = node.parent;
        }
        None
    }

    /// Classify a property declaration by the kind of its enclosing node.
    ///
    /// Returns `None` for nodes that are not (or no longer) property
    /// declarations, and for detached declarations.
    pub fn declaration_scope(&self, idx: NodeIndex) -> Option<DeclarationScope> {
        self.get_property(idx)?;
        match self.kind(self.parent_of(idx))? {
            NodeKind::SourceFile => Some(DeclarationScope::TopLevel),
            NodeKind::ClassDeclaration => Some(DeclarationScope::Member),
            NodeKind::FunctionDeclaration | NodeKind::Block => Some(DeclarationScope::Local),
            NodeKind::PropertyDeclaration | NodeKind::TypeReference | NodeKind::Removed => None,
        }
    }

    /// All property declarations under `root`, in document order.
    pub fn property_declarations(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut result = Vec::new();
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let Some(node) = self.get(idx) else {
                continue;
            };
            match node.kind() {
                NodeKind::PropertyDeclaration => result.push(idx),
                // Annotations are leaves as far as declarations go.
                NodeKind::TypeReference | NodeKind::Removed => continue,
                _ => {}
            }
            stack.extend(node.children.iter().rev().copied());
        }
        result
    }

    /// Print a type reference back to canonical source text.
    pub fn type_reference_text(&self, idx: NodeIndex) -> Option<String> {
        let mut out = String::new();
        self.write_type_reference(idx, &mut out)?;
        Some(out)
    }

    fn write_type_reference(&self, idx: NodeIndex, out: &mut String) -> Option<()> {
        let data = self.get_type_reference(idx)?;
        if data.is_star {
            out.push('*');
            return Some(());
        }
        for (i, segment) in data.name.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(self.interner.resolve(*segment));
        }
        if !data.type_arguments.is_empty() {
            out.push('<');
            for (i, arg) in data.type_arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_type_reference(*arg, out)?;
            }
            out.push('>');
        }
        if data.nullable {
            out.push('?');
        }
        Some(())
    }

    /// Text of the explicit annotation on a property, if any.
    pub fn property_type_text(&self, property: NodeIndex) -> Option<String> {
        let data = self.get_property(property)?;
        if data.type_reference.is_none() {
            return None;
        }
        self.type_reference_text(data.type_reference)
    }
}
