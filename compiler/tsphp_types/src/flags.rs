//! Type formatting flags.

use bitflags::bitflags;

bitflags! {
    /// Options for [`TypeChecker::type_to_string`](crate::TypeChecker::type_to_string).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFormatFlags: u32 {
        /// Write `Array<T>` instead of `T[]`.
        const WRITE_ARRAY_AS_GENERIC_TYPE = 1 << 0;
        /// Quote string literal types with `'` instead of `"`.
        const USE_SINGLE_QUOTES_FOR_STRING_LITERAL_TYPE = 1 << 1;
    }
}

impl TypeFormatFlags {
    /// Default formatting.
    pub const NONE: Self = Self::empty();
}
