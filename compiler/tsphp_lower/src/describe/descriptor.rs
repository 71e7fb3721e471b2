//! Type descriptors.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

type Token = Cow<'static, str>;

/// Ordered, duplicate-free target type tokens, written joined by `|`.
///
/// A descriptor is never empty: with nothing resolved it holds the single
/// dynamic token `var`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    tokens: SmallVec<[Token; 4]>,
}

impl TypeDescriptor {
    /// Token for anything that cannot be described.
    pub const DYNAMIC: &'static str = "var";
    /// Token for arrays, tuples and array-like objects.
    pub const ARRAY: &'static str = "array";

    /// The dynamic descriptor `var`.
    pub fn dynamic() -> Self {
        let mut tokens = SmallVec::new();
        tokens.push(Cow::Borrowed(Self::DYNAMIC));
        TypeDescriptor { tokens }
    }

    /// Collect tokens, keeping the first occurrence of each.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let mut out: SmallVec<[Token; 4]> = SmallVec::new();
        for token in tokens {
            let token = token.into();
            if !out.contains(&token) {
                out.push(token);
            }
        }
        if out.is_empty() {
            return Self::dynamic();
        }
        TypeDescriptor { tokens: out }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| &**token)
    }

    /// Check if this is exactly `var`.
    pub fn is_dynamic(&self) -> bool {
        self.tokens.len() == 1 && self.tokens[0] == Self::DYNAMIC
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Described parameter and return types of a function.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionTypes {
    /// `(argument name, descriptor)` in parameter order.
    pub args: Vec<(String, TypeDescriptor)>,
    pub ret: TypeDescriptor,
}

impl FunctionTypes {
    /// Descriptor of the argument stored under `name`.
    pub fn arg(&self, name: &str) -> Option<&TypeDescriptor> {
        self.args
            .iter()
            .find_map(|(arg, descriptor)| (arg == name).then_some(descriptor))
    }
}
