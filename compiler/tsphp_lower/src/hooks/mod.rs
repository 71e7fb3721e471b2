//! Builtin-rewrite hooks.
//!
//! A hook recognizes a call shape from the source standard library and
//! renders it as a call into the target runtime library. Hooks are tried in
//! registration order and the first whose predicate matches owns the call;
//! if none matches, the call is rendered generically.

mod array;
mod math;

use std::sync::OnceLock;

use tsphp_ir::NodeId;

use crate::{LowerError, LoweringContext};

pub use array::{ArrayHook, ARRAY_HOOKS};
pub use math::{MathHook, MATH_CONSTANTS, SUPPORTED_MATH_METHODS};

/// A call-shape recognizer and renderer.
pub trait CallHook: Send + Sync {
    /// Name used in traces.
    fn name(&self) -> &str;

    /// Check if this hook owns `call`.
    fn matches(&self, ctx: &LoweringContext<'_>, call: NodeId) -> bool;

    /// Render a call this hook matched.
    fn render(&self, ctx: &mut LoweringContext<'_>, call: NodeId) -> Result<String, LowerError>;
}

/// Ordered hook list. Order is fixed once rendering starts.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn CallHook>>,
}

static BUILTIN: OnceLock<HookRegistry> = OnceLock::new();

impl HookRegistry {
    /// Registry with no hooks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The builtin hooks, in priority order: array iteration methods, then
    /// `Math` calls.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for hook in ARRAY_HOOKS {
            registry.register(hook);
        }
        registry.register(MathHook);
        registry
    }

    /// Shared registry holding only the builtin hooks.
    pub fn builtin() -> &'static HookRegistry {
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Append a hook after all hooks registered so far.
    pub fn register(&mut self, hook: impl CallHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Hook names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(|hook| hook.name())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Render `call` with the first matching hook, or `None` if no hook
    /// matches.
    pub fn apply(
        &self,
        ctx: &mut LoweringContext<'_>,
        call: NodeId,
    ) -> Result<Option<String>, LowerError> {
        let Some(hook) = self.hooks.iter().find(|hook| hook.matches(ctx, call)) else {
            return Ok(None);
        };
        tracing::debug!(hook = hook.name(), ?call, "builtin hook matched");
        hook.render(ctx, call).map(Some)
    }
}

#[cfg(test)]
mod tests;
