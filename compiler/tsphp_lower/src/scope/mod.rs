//! Scope model.
//!
//! Scopes are built by the resolution pass before lowering and are read-only
//! here. They live in a flat arena; each scope links to its parent, and the
//! scope opened by a function node is recorded so the renderer can switch
//! into it.

use std::fmt;

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use tsphp_ir::NodeId;

bitflags! {
    /// Declaration flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u8 {
        /// Imported from another module.
        const EXTERNAL = 1 << 0;
        /// Declared by a function declaration.
        const FUNCTION = 1 << 1;
        /// `const` binding.
        const CONST = 1 << 2;
        /// Function parameter.
        const PARAMETER = 1 << 3;
    }
}

/// A declared name.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Declaration {
    pub name: String,
    pub flags: DeclFlags,
    /// Import specifier, set only for external declarations.
    pub target_module: Option<String>,
}

impl Declaration {
    pub fn local(name: &str, flags: DeclFlags) -> Self {
        Declaration {
            name: name.to_owned(),
            flags: flags - DeclFlags::EXTERNAL,
            target_module: None,
        }
    }

    /// A name imported from `target_module`.
    pub fn external(name: &str, target_module: &str) -> Self {
        Declaration {
            name: name.to_owned(),
            flags: DeclFlags::EXTERNAL,
            target_module: Some(target_module.to_owned()),
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.flags.contains(DeclFlags::EXTERNAL)
    }
}

/// What opened a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Module,
    Function,
    /// A component render function.
    Component,
    Block,
}

impl ScopeKind {
    /// Check if a scope of this kind is a closure boundary.
    #[inline]
    pub const fn is_closure(self) -> bool {
        !matches!(self, ScopeKind::Block)
    }
}

/// Index into a [`ScopeTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The module scope.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// One scope: its declarations and, for functions, the outer names it
/// captures.
#[derive(Clone, Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    declarations: FxHashMap<String, Declaration>,
    captures: Vec<String>,
}

impl Scope {
    fn new(kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Scope {
            kind,
            parent,
            declarations: FxHashMap::default(),
            captures: Vec::new(),
        }
    }

    /// Declaration made directly in this scope.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// Outer names captured by this scope, in capture order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }
}

/// All scopes of a module.
#[derive(Clone, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    node_scopes: FxHashMap<NodeId, ScopeId>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    /// Create a tree holding only the module scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope::new(ScopeKind::Module, None)],
            node_scopes: FxHashMap::default(),
        }
    }

    /// Open a child scope.
    ///
    /// # Panics
    /// Panics if the tree exceeds `u32::MAX` scopes.
    pub fn push(&mut self, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        let index = u32::try_from(self.scopes.len())
            .unwrap_or_else(|_| panic!("scope tree exceeded u32::MAX scopes"));
        self.scopes.push(Scope::new(kind, Some(parent)));
        ScopeId(index)
    }

    /// Open a child scope for a function node and bind the node to it.
    pub fn push_for(&mut self, node: NodeId, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        let scope = self.push(parent, kind);
        self.node_scopes.insert(node, scope);
        scope
    }

    /// Declare a name. A later declaration of the same name shadows it.
    pub fn declare(&mut self, scope: ScopeId, declaration: Declaration) {
        self.scopes[scope.index()]
            .declarations
            .insert(declaration.name.clone(), declaration);
    }

    /// Record an outer name captured by a function scope.
    pub fn capture(&mut self, scope: ScopeId, name: &str) {
        let captures = &mut self.scopes[scope.index()].captures;
        if !captures.iter().any(|c| c == name) {
            captures.push(name.to_owned());
        }
    }

    #[inline]
    pub fn get(&self, scope: ScopeId) -> &Scope {
        &self.scopes[scope.index()]
    }

    /// Scope opened by a function node.
    pub fn scope_of(&self, node: NodeId) -> Option<ScopeId> {
        self.node_scopes.get(&node).copied()
    }

    /// Parent chain starting at `scope` itself.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |&id| self.get(id).parent)
    }

    /// Find the nearest declaration of `name`, walking outward.
    pub fn find(&self, scope: ScopeId, name: &str) -> Option<&Declaration> {
        self.ancestors(scope).find_map(|id| self.get(id).get(name))
    }

    /// The innermost closure boundary enclosing `scope`.
    pub fn closure(&self, scope: ScopeId) -> ScopeId {
        self.ancestors(scope)
            .find(|&id| self.get(id).kind.is_closure())
            .unwrap_or(ScopeId::ROOT)
    }

    /// Check if `name` is declared between `scope` and its closure boundary.
    pub fn closure_has(&self, scope: ScopeId, name: &str) -> bool {
        for id in self.ancestors(scope) {
            let current = self.get(id);
            if current.get(name).is_some() {
                return true;
            }
            if current.kind.is_closure() {
                return false;
            }
        }
        false
    }

    /// Check if any enclosing scope is a component render function.
    pub fn inside_component(&self, scope: ScopeId) -> bool {
        self.ancestors(scope)
            .any(|id| self.get(id).kind == ScopeKind::Component)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
