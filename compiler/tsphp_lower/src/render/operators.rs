//! Binary operators.

use tsphp_ir::{BinaryOp, NodeId};
use tsphp_types::TypeFormatFlags;

use super::render_node;
use crate::{LowerError, LoweringContext};

pub(super) fn render_binary(
    ctx: &mut LoweringContext<'_>,
    op: BinaryOp,
    left: NodeId,
    right: NodeId,
) -> Result<String, LowerError> {
    let lhs = render_node(ctx, left)?;
    let rhs = render_node(ctx, right)?;
    let op_str = match op {
        BinaryOp::Add if is_string_typed(ctx, left) || is_string_typed(ctx, right) => ".",
        _ => op.as_str(),
    };
    Ok(format!("({lhs} {op_str} {rhs})"))
}

/// Check if a node's inferred type is `string` or a string literal type.
pub(super) fn is_string_typed(ctx: &LoweringContext<'_>, node: NodeId) -> bool {
    let checker = ctx.checker();
    let ty = checker.type_at(node);
    checker.is_string_literal(ty) || checker.type_to_string(ty, TypeFormatFlags::NONE) == "string"
}
