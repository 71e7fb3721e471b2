//! Lowering context.
//!
//! A [`LoweringContext`] is created per module render. It bundles the
//! module's own inputs ([`ModuleUnit`]), the run-wide shared state
//! ([`LowerEnv`]), the current scope and the module's diagnostic queue.
//! Only the scope changes during traversal: the function renderer switches
//! into a function's scope and restores the outer one afterwards.

use tsphp_diagnostic::span_utils::LineOffsetTable;
use tsphp_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use tsphp_ir::{NodeId, SyntaxTree};
use tsphp_types::{TypeChecker, TypeHintRegistry};

use crate::describe::TypeDescriber;
use crate::exports::{ExportRegistry, ModuleId};
use crate::hooks::HookRegistry;
use crate::scope::{ScopeId, ScopeTree};
use crate::LowerOptions;

/// Inputs describing one module.
pub struct ModuleUnit<'a> {
    pub id: ModuleId,
    pub tree: &'a SyntaxTree,
    pub checker: &'a dyn TypeChecker,
    pub scopes: &'a ScopeTree,
}

impl<'a> ModuleUnit<'a> {
    pub fn new(
        id: ModuleId,
        tree: &'a SyntaxTree,
        checker: &'a dyn TypeChecker,
        scopes: &'a ScopeTree,
    ) -> Self {
        ModuleUnit {
            id,
            tree,
            checker,
            scopes,
        }
    }
}

/// State shared by every module lowered in one run.
///
/// Everything here is read-only, so one `LowerEnv` can serve modules lowered
/// on different threads.
pub struct LowerEnv<'a> {
    pub exports: &'a dyn ExportRegistry,
    pub hints: &'a dyn TypeHintRegistry,
    pub hooks: &'a HookRegistry,
    pub options: LowerOptions,
}

impl<'a> LowerEnv<'a> {
    /// Environment with the builtin hooks and default options.
    pub fn new(exports: &'a dyn ExportRegistry, hints: &'a dyn TypeHintRegistry) -> Self {
        LowerEnv {
            exports,
            hints,
            hooks: HookRegistry::builtin(),
            options: LowerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: &'a HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: LowerOptions) -> Self {
        self.options = options;
        self
    }
}

/// Per-render handle passed to every render call.
pub struct LoweringContext<'a> {
    unit: &'a ModuleUnit<'a>,
    env: &'a LowerEnv<'a>,
    scope: ScopeId,
    diagnostics: &'a mut DiagnosticQueue,
    lines: LineOffsetTable,
}

impl<'a> LoweringContext<'a> {
    /// Context positioned in the module scope.
    pub fn new(
        unit: &'a ModuleUnit<'a>,
        env: &'a LowerEnv<'a>,
        diagnostics: &'a mut DiagnosticQueue,
    ) -> Self {
        LoweringContext {
            unit,
            env,
            scope: ScopeId::ROOT,
            diagnostics,
            lines: LineOffsetTable::build(unit.tree.source()),
        }
    }

    #[inline]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.unit.tree
    }

    #[inline]
    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.unit.checker
    }

    #[inline]
    pub fn scopes(&self) -> &'a ScopeTree {
        self.unit.scopes
    }

    #[inline]
    pub fn module(&self) -> &'a ModuleId {
        &self.unit.id
    }

    #[inline]
    pub fn exports(&self) -> &'a dyn ExportRegistry {
        self.env.exports
    }

    #[inline]
    pub fn hooks(&self) -> &'a HookRegistry {
        self.env.hooks
    }

    #[inline]
    pub fn options(&self) -> &'a LowerOptions {
        &self.env.options
    }

    /// The scope the renderer is currently in.
    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Type describer over this module's checker and the run's hints.
    pub fn describer(&self) -> TypeDescriber<'a> {
        TypeDescriber::new(self.unit.tree, self.unit.checker, self.env.hints)
            .with_array_like_objects(self.env.options.array_like_objects)
    }

    /// Run `f` with `scope` as the current scope, restoring the outer scope
    /// afterwards.
    pub fn in_scope<T>(&mut self, scope: ScopeId, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = outer;
        result
    }

    /// Record an error located at `node`.
    pub fn error(&mut self, code: ErrorCode, node: NodeId, message: impl Into<String>) {
        let diag = Diagnostic::error(code).with_message(message);
        self.emit(diag, node);
    }

    /// Record a warning located at `node`.
    pub fn warn(&mut self, code: ErrorCode, node: NodeId, message: impl Into<String>) {
        let diag = Diagnostic::warning(code).with_message(message);
        self.emit(diag, node);
    }

    fn emit(&mut self, diag: Diagnostic, node: NodeId) {
        let tree = self.unit.tree;
        let location = self.lines.locate(tree.source(), tree.span(node));
        tracing::debug!(
            code = %diag.code,
            severity = %diag.severity,
            module = %self.unit.id,
            %location,
            "{}",
            diag.message
        );
        self.diagnostics.push(diag.with_location(location));
    }
}
