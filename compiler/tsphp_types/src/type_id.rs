//! Type identifiers.

use std::fmt;

/// Index into a [`TypeTable`](crate::TypeTable).
///
/// Keyword types and the global wrapper interfaces are pre-interned at fixed
/// indices, so they can be compared against the constants below without a
/// lookup.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const STRING: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const BIGINT: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);
    /// Global `String` interface (apparent type of string values).
    pub const STRING_OBJECT: TypeId = TypeId(11);
    /// Global `Number` interface.
    pub const NUMBER_OBJECT: TypeId = TypeId(12);
    /// Global `Boolean` interface.
    pub const BOOLEAN_OBJECT: TypeId = TypeId(13);
    /// The empty object type `{}`.
    pub const EMPTY_OBJECT: TypeId = TypeId(14);

    /// Number of pre-interned types.
    pub const PRE_INTERNED: u32 = 15;

    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the keyword types (`any` through `symbol`).
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.0 <= Self::SYMBOL.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}
