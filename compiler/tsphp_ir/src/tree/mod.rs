//! Flat syntax tree arena.
//!
//! The tree is produced by an external front end (or by [`TreeBuilder`] in
//! tests and adapters) and is read-only afterwards. Every node records its
//! parent, so upward queries such as "is this access the object of another
//! access" are O(1).

mod builder;

pub use builder::TreeBuilder;

use crate::{Name, Node, NodeId, NodeKind, Span, StringInterner};

/// A module's syntax tree: nodes, the source text they span, and the
/// interner resolving their names.
pub struct SyntaxTree {
    nodes: Vec<Node>,
    source: String,
    interner: StringInterner,
    roots: Box<[NodeId]>,
}

impl SyntaxTree {
    /// Assemble a tree from already-linked parts.
    ///
    /// Parent links in `nodes` must be consistent with the children each
    /// node's kind lists.
    pub fn from_parts(
        nodes: Vec<Node>,
        source: String,
        interner: StringInterner,
        roots: Box<[NodeId]>,
    ) -> Self {
        SyntaxTree {
            nodes,
            source,
            interner,
            roots,
        }
    }

    /// Top-level statements of the module, in source order.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The interner resolving this tree's names.
    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Resolve an interned name.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Literal source text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        let range = self.span(id).to_range();
        self.source.get(range).unwrap_or_default()
    }

    /// Name of an identifier node.
    pub fn identifier(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Identifier(name) => Some(self.resolve(*name)),
            _ => None,
        }
    }

    /// The immediate sub-expression a type query looks through: the object of
    /// a property or element access, the callee of a call, the inside of
    /// parentheses. Any other node is its own sub-expression.
    pub fn sub_expression(&self, id: NodeId) -> NodeId {
        match self.kind(id) {
            NodeKind::PropertyAccess { object, .. } | NodeKind::ElementAccess { object, .. } => {
                *object
            }
            NodeKind::Call { callee, .. } => *callee,
            NodeKind::Paren(inner) => *inner,
            _ => id,
        }
    }

    /// Leftmost root identifier of an access chain: `a` for `a.b[c].d`.
    ///
    /// Returns `None` when the chain is rooted in anything other than an
    /// identifier (a call result, a literal, ...).
    pub fn left_root(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            match self.kind(current) {
                NodeKind::Identifier(_) => return Some(current),
                NodeKind::PropertyAccess { object, .. }
                | NodeKind::ElementAccess { object, .. } => current = *object,
                NodeKind::Paren(inner) => current = *inner,
                _ => return None,
            }
        }
    }

    /// Check if a node is directly the object of a property access.
    pub fn is_property_access_object(&self, id: NodeId) -> bool {
        self.parent(id).is_some_and(|parent| {
            matches!(self.kind(parent), NodeKind::PropertyAccess { object, .. } if *object == id)
        })
    }

    /// For `receiver.member(...)`, the receiver node and member name.
    pub fn called_member(&self, call: NodeId) -> Option<(NodeId, &str)> {
        let NodeKind::Call { callee, .. } = self.kind(call) else {
            return None;
        };
        match self.kind(*callee) {
            NodeKind::PropertyAccess { object, member } => {
                self.identifier(*member).map(|name| (*object, name))
            }
            _ => None,
        }
    }

    /// Check that a call has the shape `<receiver>.<name>(...)`.
    ///
    /// Matches the member identifier structurally, so `some(x)` or
    /// `obj["some"](x)` never match `"some"`.
    pub fn member_name_is(&self, call: NodeId, name: &str) -> bool {
        self.called_member(call)
            .is_some_and(|(_, member)| member == name)
    }

    /// Positional arguments of a call.
    pub fn call_args(&self, call: NodeId) -> &[NodeId] {
        match self.kind(call) {
            NodeKind::Call { args, .. } => args,
            _ => &[],
        }
    }

    /// Declared parameters of a function-like node.
    pub fn function_params(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.kind(id) {
            NodeKind::Function { params, .. } => Some(params),
            _ => None,
        }
    }

    /// Binding of a parameter node.
    pub fn parameter_binding(&self, param: NodeId) -> Option<NodeId> {
        match self.kind(param) {
            NodeKind::Parameter { binding } => Some(*binding),
            _ => None,
        }
    }
}
