//! Syntax tree types for the TypeScript to PHP lowering core.
//!
//! - Spans for source locations
//! - Names for interned identifiers and literal text
//! - A flat node arena ([`SyntaxTree`]) with parent links
//!
//! # Design
//!
//! - **Intern Everything**: identifier and literal text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Read-only**: a tree is never mutated after construction, so it can be
//!   shared across threads while modules are lowered in parallel

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod node;
mod span;
mod tree;

pub use interner::StringInterner;
pub use name::Name;
pub use node::{BinaryOp, FunctionKind, Node, NodeId, NodeKind};
pub use span::Span;
pub use tree::{SyntaxTree, TreeBuilder};
