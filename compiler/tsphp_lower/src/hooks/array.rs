//! Array iteration methods: `arr.map(f)` → `Stdlib::arrayMap($arr, f)`.

use tsphp_diagnostic::ErrorCode;
use tsphp_ir::{NodeId, NodeKind};

use super::CallHook;
use crate::render::render_node;
use crate::{LowerError, LoweringContext};

/// Rewrites `<receiver>.<method>(callback)` into a runtime library call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayHook {
    /// Source method name.
    pub method: &'static str,
    /// Runtime library function.
    pub runtime_fn: &'static str,
}

impl ArrayHook {
    pub const fn new(method: &'static str, runtime_fn: &'static str) -> Self {
        ArrayHook { method, runtime_fn }
    }
}

/// Builtin array hooks in registration order.
pub const ARRAY_HOOKS: [ArrayHook; 7] = [
    ArrayHook::new("forEach", "arrayForEach"),
    ArrayHook::new("map", "arrayMap"),
    ArrayHook::new("filter", "arrayFilter"),
    ArrayHook::new("some", "arraySome"),
    ArrayHook::new("every", "arrayEvery"),
    ArrayHook::new("find", "arrayFind"),
    ArrayHook::new("findIndex", "arrayFindIndex"),
];

impl CallHook for ArrayHook {
    fn name(&self) -> &str {
        self.runtime_fn
    }

    fn matches(&self, ctx: &LoweringContext<'_>, call: NodeId) -> bool {
        ctx.tree().member_name_is(call, self.method)
    }

    fn render(&self, ctx: &mut LoweringContext<'_>, call: NodeId) -> Result<String, LowerError> {
        let tree = ctx.tree();
        let NodeKind::Call { callee, .. } = tree.kind(call) else {
            return Err(LowerError::UnsupportedNode {
                kind: tree.kind(call).describe(),
                span: tree.span(call),
            });
        };

        if !ctx.describer().has_array_type(*callee) {
            ctx.error(
                ErrorCode::E4003,
                call,
                "Left-hand expression must have array-like or iterable inferred type",
            );
            return Ok("null".to_owned());
        }

        let callback = tree.call_args(call).first().copied();
        let param_count = callback
            .and_then(|f| tree.function_params(f))
            .map_or(0, <[NodeId]>::len);
        let Some(callback) = callback.filter(|_| param_count > 0) else {
            ctx.error(
                ErrorCode::E4004,
                call,
                format!(
                    "Array.prototype.{}: can't find iterable element in call.",
                    self.method
                ),
            );
            return Ok("null".to_owned());
        };

        let receiver = tree.sub_expression(*callee);
        let rendered_callback = render_node(ctx, callback)?;
        let rendered_receiver = render_node(ctx, receiver)?;
        Ok(format!(
            "{}::{}({rendered_receiver}, {rendered_callback})",
            ctx.options().runtime_namespace,
            self.runtime_fn
        ))
    }
}
