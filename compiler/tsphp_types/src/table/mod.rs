//! Table-driven type checker.
//!
//! `TypeTable` holds interned types plus the node→type and node→signature
//! maps a front end recorded while checking a module. Lowering only reads it,
//! so one table can be shared by every thread lowering that module.

mod print;

use rustc_hash::FxHashMap;
use tsphp_ir::NodeId;

use crate::{
    InterfaceDecl, Member, Signature, TypeChecker, TypeData, TypeFormatFlags, TypeId, TypeNode,
    TypeNodeKind,
};

/// Interned types plus per-node type information.
pub struct TypeTable {
    types: Vec<TypeData>,
    map: FxHashMap<TypeData, TypeId>,
    node_types: FxHashMap<NodeId, TypeId>,
    signatures: FxHashMap<NodeId, Signature>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create a table with the keyword types and global wrapper interfaces
    /// pre-interned at their fixed ids.
    pub fn new() -> Self {
        let mut table = TypeTable {
            types: Vec::with_capacity(64),
            map: FxHashMap::default(),
            node_types: FxHashMap::default(),
            signatures: FxHashMap::default(),
        };

        let keywords = [
            TypeData::Any,
            TypeData::Unknown,
            TypeData::Never,
            TypeData::Void,
            TypeData::Undefined,
            TypeData::Null,
            TypeData::String,
            TypeData::Number,
            TypeData::Boolean,
            TypeData::BigInt,
            TypeData::Symbol,
        ];
        for data in keywords {
            table.intern(data);
        }
        table.interface("String", &[], vec![Member::new("length", TypeId::NUMBER)]);
        table.interface(
            "Number",
            &[],
            vec![Member::new("valueOf", TypeId::NUMBER)],
        );
        table.interface(
            "Boolean",
            &[],
            vec![Member::new("valueOf", TypeId::BOOLEAN)],
        );
        table.object(Vec::new());

        debug_assert_eq!(table.types.len(), TypeId::PRE_INTERNED as usize);
        table
    }

    /// Intern a type, returning the existing id if an equal type was seen.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` types.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.map.get(&data) {
            return id;
        }
        let index = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type table exceeded u32::MAX types"));
        let id = TypeId::new(index);
        self.types.push(data.clone());
        self.map.insert(data, id);
        id
    }

    /// Look up the data for a type id.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn lookup(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    /// Number of interned types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn string_literal(&mut self, value: &str) -> TypeId {
        self.intern(TypeData::StringLiteral(value.into()))
    }

    pub fn number_literal(&mut self, text: &str) -> TypeId {
        self.intern(TypeData::NumberLiteral(text.into()))
    }

    pub fn boolean_literal(&mut self, value: bool) -> TypeId {
        self.intern(TypeData::BooleanLiteral(value))
    }

    pub fn array(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeData::Array(elem))
    }

    pub fn tuple(&mut self, elems: &[TypeId]) -> TypeId {
        self.intern(TypeData::Tuple(elems.into()))
    }

    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        self.intern(TypeData::Union(members.into()))
    }

    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        self.intern(TypeData::Intersection(members.into()))
    }

    pub fn interface(&mut self, name: &str, type_args: &[TypeId], members: Vec<Member>) -> TypeId {
        self.intern(TypeData::Interface {
            name: name.into(),
            type_args: type_args.into(),
            members: members.into_boxed_slice(),
        })
    }

    pub fn object(&mut self, members: Vec<Member>) -> TypeId {
        self.intern(TypeData::Object(members.into_boxed_slice()))
    }

    pub fn function(&mut self, signature: Signature) -> TypeId {
        self.intern(TypeData::Function(signature))
    }

    pub fn type_parameter(&mut self, name: &str, constraint: Option<TypeId>) -> TypeId {
        self.intern(TypeData::TypeParameter {
            name: name.into(),
            constraint,
        })
    }

    /// Record the inferred type of a node.
    pub fn set_type(&mut self, node: NodeId, ty: TypeId) {
        self.node_types.insert(node, ty);
    }

    /// Record the call signature declared by a function-like node.
    ///
    /// Also records the node's type as the matching function type.
    pub fn set_signature(&mut self, node: NodeId, signature: Signature) {
        let ty = self.function(signature.clone());
        self.node_types.insert(node, ty);
        self.signatures.insert(node, signature);
    }
}

impl TypeChecker for TypeTable {
    fn type_at(&self, node: NodeId) -> TypeId {
        self.node_types.get(&node).copied().unwrap_or(TypeId::ANY)
    }

    fn type_to_string(&self, ty: TypeId, flags: TypeFormatFlags) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty, flags);
        out
    }

    fn apparent_type(&self, ty: TypeId) -> TypeId {
        match self.lookup(ty) {
            TypeData::String | TypeData::StringLiteral(_) => TypeId::STRING_OBJECT,
            TypeData::Number | TypeData::NumberLiteral(_) => TypeId::NUMBER_OBJECT,
            TypeData::Boolean | TypeData::BooleanLiteral(_) => TypeId::BOOLEAN_OBJECT,
            TypeData::Unknown | TypeData::TypeParameter { constraint: None, .. } => {
                TypeId::EMPTY_OBJECT
            }
            TypeData::TypeParameter {
                constraint: Some(constraint),
                ..
            } => self.apparent_type(*constraint),
            _ => ty,
        }
    }

    fn constituents(&self, ty: TypeId) -> Option<&[TypeId]> {
        match self.lookup(ty) {
            TypeData::Union(members) | TypeData::Intersection(members) => Some(members),
            _ => None,
        }
    }

    fn is_string_literal(&self, ty: TypeId) -> bool {
        matches!(self.lookup(ty), TypeData::StringLiteral(_))
    }

    fn signature_of(&self, node: NodeId) -> Option<&Signature> {
        self.signatures.get(&node)
    }

    fn return_type_of(&self, signature: &Signature) -> TypeId {
        signature.ret
    }

    fn type_node(&self, ty: TypeId) -> TypeNode {
        match self.lookup(ty) {
            TypeData::Any
            | TypeData::Unknown
            | TypeData::Never
            | TypeData::Void
            | TypeData::Undefined
            | TypeData::Null
            | TypeData::String
            | TypeData::Number
            | TypeData::Boolean
            | TypeData::BigInt
            | TypeData::Symbol => TypeNode::of(TypeNodeKind::Keyword),
            TypeData::StringLiteral(_)
            | TypeData::NumberLiteral(_)
            | TypeData::BooleanLiteral(_) => TypeNode::of(TypeNodeKind::LiteralType),
            TypeData::Array(_) => TypeNode::of(TypeNodeKind::ArrayType),
            TypeData::Tuple(_) => TypeNode::of(TypeNodeKind::TupleType),
            TypeData::Interface { name, members, .. } => TypeNode {
                kind: TypeNodeKind::TypeReference,
                interface: Some(InterfaceDecl {
                    name: name.to_string(),
                    member_count: members.len(),
                }),
            },
            TypeData::TypeParameter { .. } => TypeNode::of(TypeNodeKind::TypeReference),
            TypeData::Object(_) => TypeNode::of(TypeNodeKind::TypeLiteral),
            TypeData::Union(_) => TypeNode::of(TypeNodeKind::UnionType),
            TypeData::Intersection(_) => TypeNode::of(TypeNodeKind::IntersectionType),
            TypeData::Function(_) => TypeNode::of(TypeNodeKind::FunctionType),
        }
    }
}
