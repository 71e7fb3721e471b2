//! Call expressions.

use tsphp_ir::NodeId;

use super::{render_list, render_node};
use crate::{LowerError, LoweringContext};

pub(super) fn render_call(
    ctx: &mut LoweringContext<'_>,
    call: NodeId,
    callee: NodeId,
    args: &[NodeId],
) -> Result<String, LowerError> {
    if let Some(rendered) = ctx.hooks().apply(ctx, call)? {
        return Ok(rendered);
    }
    let callee = render_node(ctx, callee)?;
    let args = render_list(ctx, args)?;
    Ok(format!("{callee}({})", args.join(", ")))
}
