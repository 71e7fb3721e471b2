//! The type-checking service interface consumed by the lowering core.

use tsphp_ir::NodeId;

use crate::{Signature, TypeFormatFlags, TypeId};

/// Syntactic shape of a type when written back as a type node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeNodeKind {
    /// `string`, `number`, `any`, ...
    Keyword,
    /// `"a"`, `1`, `true`
    LiteralType,
    /// `T[]`
    ArrayType,
    /// `[A, B]`
    TupleType,
    /// A reference to a named type: interface, alias or type parameter.
    TypeReference,
    /// `{ a: number; }`
    TypeLiteral,
    UnionType,
    IntersectionType,
    FunctionType,
}

/// The interface declaration behind a type reference.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InterfaceDecl {
    pub name: String,
    pub member_count: usize,
}

/// A type written back as a type node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeNode {
    pub kind: TypeNodeKind,
    /// Set for type references whose symbol is declared by an interface.
    pub interface: Option<InterfaceDecl>,
}

impl TypeNode {
    pub const fn of(kind: TypeNodeKind) -> Self {
        TypeNode {
            kind,
            interface: None,
        }
    }
}

/// Queries the lowering core makes against the type checker.
///
/// Implementations are read-only once checking is done, so they can be
/// shared by threads lowering modules in parallel.
pub trait TypeChecker: Sync {
    /// Inferred type at a node.
    fn type_at(&self, node: NodeId) -> TypeId;

    /// Render a type as the source language would print it.
    fn type_to_string(&self, ty: TypeId, flags: TypeFormatFlags) -> String;

    /// The boxed/widened form of a type: `Number` for `1`, `String` for `"a"`.
    fn apparent_type(&self, ty: TypeId) -> TypeId;

    /// Constituents of a union or intersection type, `None` for anything else.
    fn constituents(&self, ty: TypeId) -> Option<&[TypeId]>;

    /// Check if the type is a string literal type.
    fn is_string_literal(&self, ty: TypeId) -> bool;

    /// Call signature declared by a function-like node.
    fn signature_of(&self, node: NodeId) -> Option<&Signature>;

    /// Return type of a signature.
    fn return_type_of(&self, signature: &Signature) -> TypeId;

    /// Shape of the type written back as a type node.
    fn type_node(&self, ty: TypeId) -> TypeNode;
}
