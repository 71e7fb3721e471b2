//! Blocks and statements.

use tsphp_ir::NodeId;

use super::{render_list, render_node};
use crate::{LowerError, LoweringContext};

pub(super) fn render_block(
    ctx: &mut LoweringContext<'_>,
    stmts: &[NodeId],
) -> Result<String, LowerError> {
    if stmts.is_empty() {
        return Ok("{}".to_owned());
    }
    let stmts = render_list(ctx, stmts)?;
    Ok(format!("{{ {} }}", stmts.join(" ")))
}

pub(super) fn render_return(
    ctx: &mut LoweringContext<'_>,
    value: Option<NodeId>,
) -> Result<String, LowerError> {
    match value {
        Some(value) => Ok(format!("return {};", render_node(ctx, value)?)),
        None => Ok("return;".to_owned()),
    }
}
