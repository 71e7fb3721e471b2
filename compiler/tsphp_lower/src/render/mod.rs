//! Node rendering.
//!
//! [`render_node`] is a closed dispatch over [`NodeKind`]: every kind has
//! exactly one handler. Handlers render their children through
//! `render_node` and return the target text for the node. Problems in the
//! source become diagnostics and a placeholder (`null` or nothing); only a
//! node that can never be rendered is a [`LowerError`].

mod call;
mod function;
mod literal;
mod operators;
mod property_access;
mod statement;

use tsphp_ir::{NodeId, NodeKind};

use crate::{LowerError, LoweringContext};

pub use literal::escape_php_string;
pub use property_access::JS_BUILTIN_NAMESPACES;

/// Render a node and its subtree as target source text.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn render_node(ctx: &mut LoweringContext<'_>, node: NodeId) -> Result<String, LowerError> {
    let tree = ctx.tree();
    match tree.kind(node) {
        NodeKind::Identifier(name) => Ok(literal::render_identifier(ctx, tree.resolve(*name))),
        NodeKind::StringLiteral(value) => Ok(escape_php_string(tree.resolve(*value))),
        NodeKind::NumericLiteral(text) => Ok(tree.resolve(*text).to_owned()),
        NodeKind::BooleanLiteral(value) => Ok(if *value { "true" } else { "false" }.to_owned()),
        NodeKind::NullLiteral => Ok("null".to_owned()),
        NodeKind::ArrayLiteral(items) => {
            let items = render_list(ctx, items)?;
            Ok(format!("[{}]", items.join(", ")))
        }
        NodeKind::PropertyAccess { object, member } => {
            property_access::render_property_access(ctx, node, *object, *member)
        }
        NodeKind::ElementAccess { object, index } => {
            let object = render_node(ctx, *object)?;
            let index = render_node(ctx, *index)?;
            Ok(format!("{object}[{index}]"))
        }
        NodeKind::Call { callee, args } => call::render_call(ctx, node, *callee, args),
        NodeKind::Function { .. } => function::render_function(ctx, node),
        NodeKind::Parameter { binding } => render_node(ctx, *binding),
        NodeKind::ObjectBindingPattern(_) | NodeKind::ArrayBindingPattern(_) => {
            Err(unsupported(ctx, node))
        }
        NodeKind::Binary { op, left, right } => {
            operators::render_binary(ctx, *op, *left, *right)
        }
        NodeKind::Paren(inner) => Ok(format!("({})", render_node(ctx, *inner)?)),
        NodeKind::Block(stmts) => statement::render_block(ctx, stmts),
        NodeKind::Return(value) => statement::render_return(ctx, *value),
        NodeKind::ExpressionStatement(expr) => Ok(format!("{};", render_node(ctx, *expr)?)),
    }
}

fn render_list(ctx: &mut LoweringContext<'_>, nodes: &[NodeId]) -> Result<Vec<String>, LowerError> {
    nodes.iter().map(|&node| render_node(ctx, node)).collect()
}

fn unsupported(ctx: &LoweringContext<'_>, node: NodeId) -> LowerError {
    let tree = ctx.tree();
    LowerError::UnsupportedNode {
        kind: tree.kind(node).describe(),
        span: tree.span(node),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
