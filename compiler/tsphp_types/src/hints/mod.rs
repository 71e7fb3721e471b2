//! Custom type hints.
//!
//! A hint registry overrides how known types are described. A hint is a
//! sequence of tokens, each either literal target text (`"string"`) or a
//! source type still to be described, plus a list of tokens to drop from the
//! final description.

use rustc_hash::FxHashMap;

use crate::{TypeChecker, TypeFormatFlags, TypeId};

/// One token of a type hint.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum HintToken {
    /// Target text, used verbatim.
    Literal(String),
    /// A source type, described by its apparent type.
    Type(TypeId),
}

/// Hint found for a type.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TypeHint {
    pub found: Vec<HintToken>,
    /// Tokens removed from the final description.
    pub drop: Vec<String>,
}

/// Looks up custom hints for a type.
pub trait TypeHintRegistry: Send + Sync {
    /// Hint for `ty`, or `None` if the registry knows nothing about it.
    fn lookup(&self, ty: TypeId, checker: &dyn TypeChecker) -> Option<TypeHint>;
}

/// Registry with no hints.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTypeHints;

impl TypeHintRegistry for NoTypeHints {
    fn lookup(&self, _ty: TypeId, _checker: &dyn TypeChecker) -> Option<TypeHint> {
        None
    }
}

/// Target tokens registered for one nominal type.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct NominalHint {
    pub tokens: Vec<String>,
    pub drop: Vec<String>,
}

/// Hints keyed by type name.
///
/// Union and intersection types are looked up member by member. Members
/// with a registered hint contribute its literal tokens; other members are
/// passed through as [`HintToken::Type`]. When no member has a hint, the
/// lookup returns `None`.
#[derive(Clone, Debug, Default)]
pub struct NominalTypeHints {
    by_name: FxHashMap<String, NominalHint>,
}

impl NominalTypeHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register target tokens for a type name.
    #[must_use]
    pub fn with_hint(mut self, name: &str, tokens: &[&str], drop: &[&str]) -> Self {
        self.by_name.insert(
            name.to_owned(),
            NominalHint {
                tokens: tokens.iter().map(|t| (*t).to_owned()).collect(),
                drop: drop.iter().map(|t| (*t).to_owned()).collect(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    fn hint_for(&self, ty: TypeId, checker: &dyn TypeChecker) -> Option<&NominalHint> {
        let name = match checker.type_node(ty).interface {
            Some(decl) => decl.name,
            None => checker.type_to_string(ty, TypeFormatFlags::NONE),
        };
        self.by_name.get(&name)
    }
}

impl TypeHintRegistry for NominalTypeHints {
    fn lookup(&self, ty: TypeId, checker: &dyn TypeChecker) -> Option<TypeHint> {
        if self.by_name.is_empty() {
            return None;
        }

        let members = checker
            .constituents(ty)
            .unwrap_or(std::slice::from_ref(&ty));

        let mut hint = TypeHint::default();
        let mut matched = false;
        for &member in members {
            if let Some(nominal) = self.hint_for(member, checker) {
                matched = true;
                hint.found
                    .extend(nominal.tokens.iter().cloned().map(HintToken::Literal));
                hint.drop.extend(nominal.drop.iter().cloned());
            } else {
                hint.found.push(HintToken::Type(member));
            }
        }

        matched.then_some(hint)
    }
}
