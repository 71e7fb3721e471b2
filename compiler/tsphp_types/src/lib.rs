//! Type-checking service model for the lowering core.
//!
//! The lowering core never infers types itself. It asks a [`TypeChecker`]
//! for the inferred type of a node, for the string rendering of a type, for
//! apparent (boxed) types, union constituents, signatures and type-node
//! shapes. [`TypeTable`] is a table-driven implementation of that service,
//! populated by a front end (or by tests) before lowering starts.
//!
//! [`TypeHintRegistry`] lets callers override how known nominal types are
//! described, e.g. describing a JSX element as a PHP `string`.

mod checker;
mod data;
mod flags;
mod hints;
mod table;
mod type_id;

pub use checker::{InterfaceDecl, TypeChecker, TypeNode, TypeNodeKind};
pub use data::{Member, Param, Signature, TypeData};
pub use flags::TypeFormatFlags;
pub use hints::{HintToken, NoTypeHints, NominalHint, NominalTypeHints, TypeHint, TypeHintRegistry};
pub use table::TypeTable;
pub use type_id::TypeId;
