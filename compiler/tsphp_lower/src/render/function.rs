//! Functions, arrow functions and function declarations.
//!
//! A function renders as a PHP closure inside the scope the resolution pass
//! opened for it. Outer names it captures are passed by reference.

use tsphp_ir::{FunctionKind, NodeId, NodeKind};

use super::{render_list, render_node, unsupported};
use crate::{LowerError, LoweringContext};

pub(super) fn render_function(
    ctx: &mut LoweringContext<'_>,
    node: NodeId,
) -> Result<String, LowerError> {
    let tree = ctx.tree();
    let NodeKind::Function {
        kind,
        name,
        params,
        body,
    } = tree.kind(node)
    else {
        return Err(unsupported(ctx, node));
    };

    let scope = ctx.scopes().scope_of(node).unwrap_or(ctx.scope());
    let captures = ctx.scopes().get(scope).captures();

    ctx.in_scope(scope, |ctx| -> Result<String, LowerError> {
        let params = render_list(ctx, params)?;
        let body = match tree.kind(*body) {
            NodeKind::Block(_) => render_node(ctx, *body)?,
            _ => format!("{{ return {}; }}", render_node(ctx, *body)?),
        };

        let head = match (kind, name) {
            (FunctionKind::Declaration, Some(name)) => format!("function {}", tree.resolve(*name)),
            _ => "function ".to_owned(),
        };
        let uses = if captures.is_empty() {
            String::new()
        } else {
            let vars: Vec<String> = captures.iter().map(|c| format!("&${c}")).collect();
            format!(" use ({})", vars.join(", "))
        };
        Ok(format!("{head}({}){uses} {body}", params.join(", ")))
    })
}
