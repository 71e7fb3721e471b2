//! Type description.
//!
//! Maps the type the checker inferred for a node onto target type tokens:
//! primitives through a fixed table, array-like shapes to `array`, and
//! anything unresolvable to `var`. Descriptors feed doc comments and
//! signatures of the generated code, so they are recomputed per query and
//! never cached.

mod descriptor;
mod primitive;

use std::borrow::Cow;

use tsphp_ir::{NodeId, NodeKind, SyntaxTree};
use tsphp_types::{
    HintToken, TypeChecker, TypeFormatFlags, TypeHintRegistry, TypeId, TypeNodeKind,
};

pub use descriptor::{FunctionTypes, TypeDescriptor};
pub use primitive::php_primitive;

/// Describes inferred types of a module's nodes.
#[derive(Copy, Clone)]
pub struct TypeDescriber<'a> {
    tree: &'a SyntaxTree,
    checker: &'a dyn TypeChecker,
    hints: &'a dyn TypeHintRegistry,
    array_like_objects: bool,
}

impl<'a> TypeDescriber<'a> {
    pub fn new(
        tree: &'a SyntaxTree,
        checker: &'a dyn TypeChecker,
        hints: &'a dyn TypeHintRegistry,
    ) -> Self {
        TypeDescriber {
            tree,
            checker,
            hints,
            array_like_objects: false,
        }
    }

    /// Also treat non-empty interfaces and object literals as arrays in
    /// [`has_array_type`](Self::has_array_type).
    #[must_use]
    pub fn with_array_like_objects(mut self, enabled: bool) -> Self {
        self.array_like_objects = enabled;
        self
    }

    /// Check if the node's sub-expression prints exactly as `type_string`.
    ///
    /// Unions are not decomposed: `string | null` never equals `string`.
    pub fn has_type(&self, node: NodeId, type_string: &str) -> bool {
        let inner = self.tree.sub_expression(node);
        let ty = self.checker.type_at(inner);
        self.checker.type_to_string(ty, TypeFormatFlags::NONE) == type_string
    }

    /// Check if the node's sub-expression has an array-like type.
    pub fn has_array_type(&self, node: NodeId) -> bool {
        let inner = self.tree.sub_expression(node);
        let ty = self.checker.type_at(inner);
        self.is_array_like(ty, !self.array_like_objects)
    }

    /// Describe the type inferred for `node`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn describe_type(&self, node: NodeId) -> TypeDescriptor {
        self.describe_type_id(self.checker.type_at(node))
    }

    /// Describe a type.
    pub fn describe_type_id(&self, ty: TypeId) -> TypeDescriptor {
        if let Some(hint) = self.hints.lookup(ty, self.checker) {
            let drop = hint.drop;
            let tokens = hint
                .found
                .into_iter()
                .map(|token| match token {
                    HintToken::Literal(text) => Cow::Owned(text),
                    HintToken::Type(member) => Cow::Borrowed(self.describe_apparent(member)),
                })
                .filter(|token| !drop.iter().any(|d| d == token));
            return TypeDescriptor::from_tokens(tokens);
        }

        let printed = self.checker.type_to_string(ty, TypeFormatFlags::NONE);
        let direct: Vec<&'static str> = printed
            .split('|')
            .map(str::trim)
            .map(|branch| self.transform(ty, branch))
            .collect();

        if !direct.contains(&TypeDescriptor::DYNAMIC) {
            return TypeDescriptor::from_tokens(direct);
        }

        let members = self
            .checker
            .constituents(ty)
            .unwrap_or(std::slice::from_ref(&ty));
        let apparent: Vec<&'static str> = members
            .iter()
            .map(|&member| self.describe_apparent(member))
            .collect();
        if apparent.contains(&TypeDescriptor::DYNAMIC) {
            return TypeDescriptor::dynamic();
        }

        let resolved = direct
            .into_iter()
            .filter(|&token| token != TypeDescriptor::DYNAMIC);
        TypeDescriptor::from_tokens(resolved.chain(apparent))
    }

    /// Describe the parameters and return type of a function-like node.
    ///
    /// Parameters are stored under `arg_names` by position; parameters past
    /// the end of `arg_names` are skipped. Returns `None` when the checker
    /// has no signature for the node.
    pub fn describe_php_primitive_type_for_func(
        &self,
        node: NodeId,
        arg_names: &[&str],
    ) -> Option<FunctionTypes> {
        let signature = self.checker.signature_of(node)?;
        let params = self.tree.function_params(node).unwrap_or_default();

        let args = params
            .iter()
            .zip(arg_names)
            .map(|(&param, &name)| {
                let descriptor = match self.tree.parameter_binding(param) {
                    Some(binding) if matches!(self.tree.kind(binding), NodeKind::Identifier(_)) => {
                        self.describe_type(binding)
                    }
                    _ => TypeDescriptor::dynamic(),
                };
                (name.to_owned(), descriptor)
            })
            .collect();

        let ret = self.describe_type_id(self.checker.return_type_of(signature));
        Some(FunctionTypes { args, ret })
    }

    /// Map one printed branch of `ty` to a token. Array-like shapes of the
    /// whole type win over the primitive table.
    fn transform(&self, ty: TypeId, branch: &str) -> &'static str {
        if self.is_array_like(ty, false) {
            return TypeDescriptor::ARRAY;
        }
        php_primitive(branch).unwrap_or(TypeDescriptor::DYNAMIC)
    }

    /// Token for the apparent type of `ty`: `float` for `1`, `string` for
    /// `"a"`.
    fn describe_apparent(&self, ty: TypeId) -> &'static str {
        let apparent = self.checker.apparent_type(ty);
        let printed = self
            .checker
            .type_to_string(apparent, TypeFormatFlags::NONE)
            .to_lowercase();
        self.transform(ty, printed.trim())
    }

    fn is_array_like(&self, ty: TypeId, exclude_objects: bool) -> bool {
        let node = self.checker.type_node(ty);
        match node.kind {
            TypeNodeKind::ArrayType | TypeNodeKind::TupleType => true,
            TypeNodeKind::TypeLiteral => !exclude_objects,
            TypeNodeKind::TypeReference => node.interface.is_some_and(|decl| {
                (!exclude_objects && decl.member_count > 0) || decl.name == "Array"
            }),
            _ => false,
        }
    }
}
