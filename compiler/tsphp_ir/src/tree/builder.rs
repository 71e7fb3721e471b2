//! Tree construction.
//!
//! `TreeBuilder` creates nodes bottom-up and synthesizes source text for each
//! one, so that `SyntaxTree::text` returns the expression as it would be
//! written. Parent links are set when a node is adopted by its parent.

use crate::{BinaryOp, FunctionKind, Node, NodeId, NodeKind, Span, StringInterner, SyntaxTree};

/// Bottom-up syntax tree builder.
#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    source: String,
    interner: StringInterner,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind, text: &str) -> NodeId {
        let start = self.source.len();
        self.source.push_str(text);
        let span = Span::from_range(start..self.source.len());
        self.source.push('\n');

        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("syntax tree exceeded u32::MAX nodes"));
        let children = kind.children();
        let id = NodeId::new(index);
        self.nodes.push(Node {
            kind,
            span,
            parent: None,
        });
        for child in children {
            debug_assert!(
                self.nodes[child.index()].parent.is_none(),
                "node adopted twice"
            );
            self.nodes[child.index()].parent = Some(id);
        }
        id
    }

    fn text(&self, id: NodeId) -> String {
        let range = self.nodes[id.index()].span.to_range();
        self.source[range].to_owned()
    }

    fn join(&self, ids: &[NodeId], sep: &str) -> String {
        ids.iter()
            .map(|&id| self.text(id))
            .collect::<Vec<_>>()
            .join(sep)
    }

    pub fn ident(&mut self, name: &str) -> NodeId {
        let name_id = self.interner.intern(name);
        self.push(NodeKind::Identifier(name_id), name)
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        let name_id = self.interner.intern(value);
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        self.push(NodeKind::StringLiteral(name_id), &format!("\"{escaped}\""))
    }

    pub fn number(&mut self, text: &str) -> NodeId {
        let name_id = self.interner.intern(text);
        self.push(NodeKind::NumericLiteral(name_id), text)
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        let text = if value { "true" } else { "false" };
        self.push(NodeKind::BooleanLiteral(value), text)
    }

    pub fn null(&mut self) -> NodeId {
        self.push(NodeKind::NullLiteral, "null")
    }

    pub fn array(&mut self, items: &[NodeId]) -> NodeId {
        let text = format!("[{}]", self.join(items, ", "));
        self.push(NodeKind::ArrayLiteral(items.into()), &text)
    }

    /// `object.member`
    pub fn prop(&mut self, object: NodeId, member: &str) -> NodeId {
        let member = self.ident(member);
        let text = format!("{}.{}", self.text(object), self.text(member));
        self.push(NodeKind::PropertyAccess { object, member }, &text)
    }

    /// `object[index]`
    pub fn elem(&mut self, object: NodeId, index: NodeId) -> NodeId {
        let text = format!("{}[{}]", self.text(object), self.text(index));
        self.push(NodeKind::ElementAccess { object, index }, &text)
    }

    pub fn call(&mut self, callee: NodeId, args: &[NodeId]) -> NodeId {
        let text = format!("{}({})", self.text(callee), self.join(args, ", "));
        self.push(
            NodeKind::Call {
                callee,
                args: args.into(),
            },
            &text,
        )
    }

    /// `(params) => body`
    pub fn arrow(&mut self, params: &[NodeId], body: NodeId) -> NodeId {
        let text = format!("({}) => {}", self.join(params, ", "), self.text(body));
        self.push(
            NodeKind::Function {
                kind: FunctionKind::Arrow,
                name: None,
                params: params.into(),
                body,
            },
            &text,
        )
    }

    /// `function (params) body`
    pub fn function_expr(&mut self, params: &[NodeId], body: NodeId) -> NodeId {
        let text = format!("function ({}) {}", self.join(params, ", "), self.text(body));
        self.push(
            NodeKind::Function {
                kind: FunctionKind::Expression,
                name: None,
                params: params.into(),
                body,
            },
            &text,
        )
    }

    /// `function name(params) body`
    pub fn function_decl(&mut self, name: &str, params: &[NodeId], body: NodeId) -> NodeId {
        let name_id = self.interner.intern(name);
        let text = format!(
            "function {name}({}) {}",
            self.join(params, ", "),
            self.text(body)
        );
        self.push(
            NodeKind::Function {
                kind: FunctionKind::Declaration,
                name: Some(name_id),
                params: params.into(),
                body,
            },
            &text,
        )
    }

    pub fn param(&mut self, binding: NodeId) -> NodeId {
        let text = self.text(binding);
        self.push(NodeKind::Parameter { binding }, &text)
    }

    /// Parameter with a simple identifier binding.
    pub fn param_ident(&mut self, name: &str) -> NodeId {
        let binding = self.ident(name);
        self.param(binding)
    }

    pub fn object_pattern(&mut self, elements: &[NodeId]) -> NodeId {
        let text = format!("{{ {} }}", self.join(elements, ", "));
        self.push(NodeKind::ObjectBindingPattern(elements.into()), &text)
    }

    pub fn array_pattern(&mut self, elements: &[NodeId]) -> NodeId {
        let text = format!("[{}]", self.join(elements, ", "));
        self.push(NodeKind::ArrayBindingPattern(elements.into()), &text)
    }

    pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> NodeId {
        let text = format!("{} {} {}", self.text(left), op.as_str(), self.text(right));
        self.push(NodeKind::Binary { op, left, right }, &text)
    }

    pub fn paren(&mut self, inner: NodeId) -> NodeId {
        let text = format!("({})", self.text(inner));
        self.push(NodeKind::Paren(inner), &text)
    }

    pub fn block(&mut self, stmts: &[NodeId]) -> NodeId {
        let text = format!("{{ {} }}", self.join(stmts, " "));
        self.push(NodeKind::Block(stmts.into()), &text)
    }

    pub fn ret(&mut self, value: Option<NodeId>) -> NodeId {
        let text = match value {
            Some(v) => format!("return {};", self.text(v)),
            None => "return;".to_owned(),
        };
        self.push(NodeKind::Return(value), &text)
    }

    pub fn expr_stmt(&mut self, expr: NodeId) -> NodeId {
        let text = format!("{};", self.text(expr));
        self.push(NodeKind::ExpressionStatement(expr), &text)
    }

    /// Finish the tree with the given top-level statements.
    pub fn finish(self, roots: &[NodeId]) -> SyntaxTree {
        SyntaxTree::from_parts(self.nodes, self.source, self.interner, roots.into())
    }
}
