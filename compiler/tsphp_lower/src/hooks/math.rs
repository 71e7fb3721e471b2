//! `Math.<method>(...)` calls.

use tsphp_diagnostic::ErrorCode;
use tsphp_ir::NodeId;

use super::CallHook;
use crate::render::render_node;
use crate::{LowerError, LoweringContext};

/// `Math` members rendered as PHP `M_*` constants.
pub const MATH_CONSTANTS: [&str; 8] = ["E", "LN2", "LN10", "LOG2E", "LOG10E", "PI", "SQRT1_2", "SQRT2"];

/// `Math` methods with a same-named PHP function (`random` excepted).
pub const SUPPORTED_MATH_METHODS: [&str; 18] = [
    "abs", "acos", "asin", "atan", "atan2", "ceil", "cos", "exp", "floor", "log", "max", "min",
    "pow", "random", "round", "sin", "sqrt", "tan",
];

/// Rewrites calls on the global `Math` object.
///
/// Owns every `Math.<member>(...)` call: supported methods become PHP
/// function calls, anything else is an error rendered as `null`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MathHook;

impl CallHook for MathHook {
    fn name(&self) -> &str {
        "math"
    }

    fn matches(&self, ctx: &LoweringContext<'_>, call: NodeId) -> bool {
        let tree = ctx.tree();
        let Some((receiver, _)) = tree.called_member(call) else {
            return false;
        };
        tree.identifier(receiver) == Some("Math")
            // a local or imported `Math` shadows the global one
            && ctx.scopes().find(ctx.scope(), "Math").is_none()
    }

    fn render(&self, ctx: &mut LoweringContext<'_>, call: NodeId) -> Result<String, LowerError> {
        let tree = ctx.tree();
        let method = tree
            .called_member(call)
            .map_or("", |(_, method)| method);
        if !SUPPORTED_MATH_METHODS.contains(&method) {
            ctx.error(
                ErrorCode::E4002,
                call,
                format!("Math: unsupported method ({method})"),
            );
            return Ok("null".to_owned());
        }
        if method == "random" {
            return Ok("(mt_rand() / mt_getrandmax())".to_owned());
        }

        let args = tree
            .call_args(call)
            .iter()
            .map(|&arg| render_node(ctx, arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{method}({})", args.join(", ")))
    }
}
