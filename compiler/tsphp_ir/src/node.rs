//! Syntax tree nodes.
//!
//! The tree is flat: nodes live in a [`SyntaxTree`](crate::SyntaxTree) arena
//! and refer to each other through [`NodeId`] indices.

use std::fmt;

use crate::{Name, Span};

/// Index into the syntax tree arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Flavor of a function-like node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionKind {
    /// `function (a) { ... }`
    Expression,
    /// `(a) => ...`
    Arrow,
    /// `function f(a) { ... }`
    Declaration,
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    And,
    Or,
    Assign,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Assign => "=",
        }
    }
}

/// Node kinds.
///
/// Child lists are boxed slices; a node is never mutated after the tree is
/// built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// `foo`
    Identifier(Name),
    /// `"foo"` (unescaped contents)
    StringLiteral(Name),
    /// `1.5` (source text)
    NumericLiteral(Name),
    /// `true` / `false`
    BooleanLiteral(bool),
    /// `null`
    NullLiteral,
    /// `[a, b]`
    ArrayLiteral(Box<[NodeId]>),
    /// `object.member`; `member` is an `Identifier` node.
    PropertyAccess { object: NodeId, member: NodeId },
    /// `object[index]`
    ElementAccess { object: NodeId, index: NodeId },
    /// `callee(args)`
    Call { callee: NodeId, args: Box<[NodeId]> },
    /// Function expression, arrow function or function declaration.
    Function {
        kind: FunctionKind,
        name: Option<Name>,
        params: Box<[NodeId]>,
        body: NodeId,
    },
    /// A parameter; `binding` is an identifier or a binding pattern.
    Parameter { binding: NodeId },
    /// `{ a, b }` in binding position.
    ObjectBindingPattern(Box<[NodeId]>),
    /// `[a, b]` in binding position.
    ArrayBindingPattern(Box<[NodeId]>),
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    /// `(inner)`
    Paren(NodeId),
    /// `{ stmts }`
    Block(Box<[NodeId]>),
    /// `return value;`
    Return(Option<NodeId>),
    /// `expr;`
    ExpressionStatement(NodeId),
}

impl NodeKind {
    /// Human-readable kind name, used in diagnostics and errors.
    pub const fn describe(&self) -> &'static str {
        match self {
            NodeKind::Identifier(_) => "identifier",
            NodeKind::StringLiteral(_) => "string literal",
            NodeKind::NumericLiteral(_) => "numeric literal",
            NodeKind::BooleanLiteral(_) => "boolean literal",
            NodeKind::NullLiteral => "null literal",
            NodeKind::ArrayLiteral(_) => "array literal",
            NodeKind::PropertyAccess { .. } => "property access",
            NodeKind::ElementAccess { .. } => "element access",
            NodeKind::Call { .. } => "call expression",
            NodeKind::Function { .. } => "function",
            NodeKind::Parameter { .. } => "parameter",
            NodeKind::ObjectBindingPattern(_) => "object binding pattern",
            NodeKind::ArrayBindingPattern(_) => "array binding pattern",
            NodeKind::Binary { .. } => "binary expression",
            NodeKind::Paren(_) => "parenthesized expression",
            NodeKind::Block(_) => "block",
            NodeKind::Return(_) => "return statement",
            NodeKind::ExpressionStatement(_) => "expression statement",
        }
    }

    /// Check if this is a function expression, arrow function or declaration.
    #[inline]
    pub const fn is_function_like(&self) -> bool {
        matches!(self, NodeKind::Function { .. })
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Identifier(_)
            | NodeKind::StringLiteral(_)
            | NodeKind::NumericLiteral(_)
            | NodeKind::BooleanLiteral(_)
            | NodeKind::NullLiteral
            | NodeKind::Return(None) => Vec::new(),
            NodeKind::ArrayLiteral(items)
            | NodeKind::ObjectBindingPattern(items)
            | NodeKind::ArrayBindingPattern(items)
            | NodeKind::Block(items) => items.to_vec(),
            NodeKind::PropertyAccess { object, member } => vec![*object, *member],
            NodeKind::ElementAccess { object, index } => vec![*object, *index],
            NodeKind::Call { callee, args } => {
                std::iter::once(*callee).chain(args.iter().copied()).collect()
            }
            NodeKind::Function { params, body, .. } => {
                params.iter().copied().chain(std::iter::once(*body)).collect()
            }
            NodeKind::Parameter { binding } => vec![*binding],
            NodeKind::Binary { left, right, .. } => vec![*left, *right],
            NodeKind::Paren(inner)
            | NodeKind::ExpressionStatement(inner)
            | NodeKind::Return(Some(inner)) => vec![*inner],
        }
    }
}

/// A syntax tree node: kind, source span and parent link.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
}
