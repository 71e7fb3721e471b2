//! Fixture shared by the unit tests.

use tsphp_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, Severity};
use tsphp_ir::{NodeId, SyntaxTree};
use tsphp_types::{NoTypeHints, TypeTable};

use crate::{
    render_node, HookRegistry, LowerEnv, LowerError, LowerOptions, LoweringContext,
    ModuleExports, ModuleId, ModuleUnit, ScopeTree,
};

pub(crate) const MODULE: &str = "src/index.ts";

/// A module's inputs, owned, ready to render single nodes.
pub(crate) struct Fixture {
    pub tree: SyntaxTree,
    pub types: TypeTable,
    pub scopes: ScopeTree,
    pub exports: ModuleExports,
    pub hooks: Option<HookRegistry>,
    pub options: LowerOptions,
}

impl Fixture {
    pub fn new(tree: SyntaxTree) -> Self {
        Fixture {
            tree,
            types: TypeTable::new(),
            scopes: ScopeTree::new(),
            exports: ModuleExports::builder().build(),
            hooks: None,
            options: LowerOptions::default(),
        }
    }

    /// Render `node` from the module scope.
    pub fn render(&self, node: NodeId) -> Result<(String, Vec<Diagnostic>), LowerError> {
        let unit = ModuleUnit::new(ModuleId::new(MODULE), &self.tree, &self.types, &self.scopes);
        let mut env = LowerEnv::new(&self.exports, &NoTypeHints).with_options(self.options.clone());
        if let Some(hooks) = &self.hooks {
            env = env.with_hooks(hooks);
        }

        let mut queue = DiagnosticQueue::new();
        let rendered = {
            let mut ctx = LoweringContext::new(&unit, &env, &mut queue);
            render_node(&mut ctx, node)?
        };
        Ok((rendered, queue.flush()))
    }

    /// Render `node`, panicking on a fatal error.
    pub fn render_ok(&self, node: NodeId) -> (String, Vec<Diagnostic>) {
        self.render(node).unwrap()
    }
}

/// `(severity, code)` of each diagnostic, in order.
pub(crate) fn codes(diagnostics: &[Diagnostic]) -> Vec<(Severity, ErrorCode)> {
    diagnostics.iter().map(|d| (d.severity, d.code)).collect()
}
