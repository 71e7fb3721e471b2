//! Type representation stored in the type table.

use crate::TypeId;

/// A named member of an interface or object type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    pub name: Box<str>,
    pub ty: TypeId,
}

impl Member {
    pub fn new(name: &str, ty: TypeId) -> Self {
        Member {
            name: name.into(),
            ty,
        }
    }
}

/// A call signature parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Box<str>,
    pub ty: TypeId,
}

impl Param {
    pub fn new(name: &str, ty: TypeId) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// A call signature: parameter types and return type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    pub params: Box<[Param]>,
    pub ret: TypeId,
}

impl Signature {
    pub fn new(params: Vec<Param>, ret: TypeId) -> Self {
        Signature {
            params: params.into_boxed_slice(),
            ret,
        }
    }
}

/// Type representation.
///
/// Children are `TypeId`s, so equal types intern to the same id.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    // Keyword types (pre-interned at fixed indices)
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,

    // Literal types
    /// `"foo"` (unquoted contents)
    StringLiteral(Box<str>),
    /// `42` (source text)
    NumberLiteral(Box<str>),
    /// `true` / `false`
    BooleanLiteral(bool),

    // Structured types
    /// `T[]`
    Array(TypeId),
    /// `[A, B]`
    Tuple(Box<[TypeId]>),
    /// A nominal interface, possibly generic (`Array<T>`, `Props`).
    Interface {
        name: Box<str>,
        type_args: Box<[TypeId]>,
        members: Box<[Member]>,
    },
    /// A structural object type literal `{ a: number; }`.
    Object(Box<[Member]>),
    /// `A | B`
    Union(Box<[TypeId]>),
    /// `A & B`
    Intersection(Box<[TypeId]>),
    /// `(a: A) => R`
    Function(Signature),
    /// A type parameter `T`, with its constraint if declared.
    TypeParameter {
        name: Box<str>,
        constraint: Option<TypeId>,
    },
}
