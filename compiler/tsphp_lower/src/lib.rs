//! Semantic lowering of TypeScript expressions into PHP source text.
//!
//! The lowering core takes a module's syntax tree together with what other
//! passes computed about it (inferred types, scopes, cross-module exports)
//! and renders PHP text, recording diagnostics along the way.
//!
//! - [`describe`]: inferred types → PHP type tokens (`string|null`, `var`)
//! - [`render`]: node kind dispatch and property-access lowering
//! - [`hooks`]: standard-library call rewrites (`arr.map(f)`, `Math.floor(x)`)
//! - [`scope`], [`exports`]: read-only inputs from the resolution pass
//!
//! # Example
//!
//! ```
//! use tsphp_ir::TreeBuilder;
//! use tsphp_lower::{lower_module, LowerEnv, ModuleExports, ModuleId, ModuleUnit, ScopeTree};
//! use tsphp_types::{NoTypeHints, TypeId, TypeTable};
//!
//! let mut b = TreeBuilder::new();
//! let name = b.ident("name");
//! let len = b.prop(name, "length");
//! let stmt = b.expr_stmt(len);
//! let tree = b.finish(&[stmt]);
//!
//! let mut types = TypeTable::new();
//! types.set_type(name, TypeId::STRING);
//! let scopes = ScopeTree::new();
//! let exports = ModuleExports::builder().build();
//!
//! let unit = ModuleUnit::new(ModuleId::new("src/index.ts"), &tree, &types, &scopes);
//! let env = LowerEnv::new(&exports, &NoTypeHints);
//! let lowered = lower_module(&unit, &env).unwrap();
//!
//! assert_eq!(lowered.code, "strlen($name);");
//! assert!(lowered.success);
//! assert_eq!(lowered.diagnostics.len(), 1); // byte-length warning
//! ```

mod context;
pub mod describe;
mod error;
pub mod exports;
pub mod hooks;
mod options;
pub mod render;
pub mod scope;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod test_support;

use std::sync::Once;

use tsphp_diagnostic::{Diagnostic, DiagnosticQueue};

pub use context::{LowerEnv, LoweringContext, ModuleUnit};
pub use describe::{FunctionTypes, TypeDescriber, TypeDescriptor};
pub use error::{ExportError, LowerError};
pub use exports::{ExportRegistry, ModuleExports, ModuleExportsBuilder, ModuleId};
pub use hooks::{CallHook, HookRegistry};
pub use options::{LowerOptions, DEFAULT_RUNTIME_NAMESPACE};
pub use render::render_node;
pub use scope::{DeclFlags, Declaration, ScopeId, ScopeKind, ScopeTree};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Only installs a subscriber if `RUST_LOG` is set, e.g.
/// `RUST_LOG=tsphp_lower=debug` to see every diagnostic and hook match.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Result of lowering one module.
#[derive(Clone, Debug)]
pub struct LoweredModule {
    /// Rendered top-level statements, one per line.
    pub code: String,
    /// Every diagnostic recorded, in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// `true` iff no error diagnostic was recorded.
    pub success: bool,
}

/// Lower every top-level statement of a module.
///
/// Diagnostics never stop the traversal; a module with errors still
/// produces code, but `success` is false and the code must not be used.
pub fn lower_module(unit: &ModuleUnit<'_>, env: &LowerEnv<'_>) -> Result<LoweredModule, LowerError> {
    let _span = tracing::debug_span!("lower_module", module = %unit.id).entered();

    let mut queue = DiagnosticQueue::new();
    let code = {
        let mut ctx = LoweringContext::new(unit, env, &mut queue);
        let mut lines = Vec::with_capacity(unit.tree.roots().len());
        for &root in unit.tree.roots() {
            lines.push(render_node(&mut ctx, root)?);
        }
        lines.join("\n")
    };

    let success = queue.has_errors().is_none();
    tracing::debug!(
        errors = queue.error_count(),
        warnings = queue.warning_count(),
        success,
        "module lowered"
    );
    Ok(LoweredModule {
        code,
        diagnostics: queue.flush(),
        success,
    })
}
