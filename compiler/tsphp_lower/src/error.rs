//! Fatal lowering errors.
//!
//! User-facing problems are diagnostics and never abort a module. A
//! `LowerError` means the tree contains something the renderer can never
//! produce text for.

use tsphp_ir::Span;

use crate::exports::ModuleId;

/// Error that aborts lowering of a module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A node kind with no rendering in expression position.
    #[error("cannot lower {kind} at {span}")]
    UnsupportedNode { kind: &'static str, span: Span },
}

/// Error building the cross-module export registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The module was registered twice.
    #[error("module `{module}` is already registered")]
    DuplicateModule { module: ModuleId },

    /// An export was added to a module that was never registered.
    #[error("module `{module}` is not registered")]
    UnknownModule { module: ModuleId },

    /// The same name was exported twice from one module.
    #[error("`{name}` is already exported from `{module}`")]
    DuplicateExport { module: ModuleId, name: String },
}
