//! Type printing in source-language syntax.

use std::fmt::Write;

use crate::{Member, TypeData, TypeFormatFlags, TypeId};

use super::TypeTable;

impl TypeTable {
    pub(super) fn write_type(&self, out: &mut String, ty: TypeId, flags: TypeFormatFlags) {
        match self.lookup(ty) {
            TypeData::Any => out.push_str("any"),
            TypeData::Unknown => out.push_str("unknown"),
            TypeData::Never => out.push_str("never"),
            TypeData::Void => out.push_str("void"),
            TypeData::Undefined => out.push_str("undefined"),
            TypeData::Null => out.push_str("null"),
            TypeData::String => out.push_str("string"),
            TypeData::Number => out.push_str("number"),
            TypeData::Boolean => out.push_str("boolean"),
            TypeData::BigInt => out.push_str("bigint"),
            TypeData::Symbol => out.push_str("symbol"),
            TypeData::StringLiteral(value) => {
                let quote = if flags.contains(TypeFormatFlags::USE_SINGLE_QUOTES_FOR_STRING_LITERAL_TYPE)
                {
                    '\''
                } else {
                    '"'
                };
                out.push(quote);
                for c in value.chars() {
                    if c == quote || c == '\\' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push(quote);
            }
            TypeData::NumberLiteral(text) => out.push_str(text),
            TypeData::BooleanLiteral(value) => {
                out.push_str(if *value { "true" } else { "false" });
            }
            TypeData::Array(elem) => {
                if flags.contains(TypeFormatFlags::WRITE_ARRAY_AS_GENERIC_TYPE) {
                    out.push_str("Array<");
                    self.write_type(out, *elem, flags);
                    out.push('>');
                } else if self.needs_parens_as_element(*elem) {
                    out.push('(');
                    self.write_type(out, *elem, flags);
                    out.push_str(")[]");
                } else {
                    self.write_type(out, *elem, flags);
                    out.push_str("[]");
                }
            }
            TypeData::Tuple(elems) => {
                out.push('[');
                self.write_list(out, elems, ", ", flags);
                out.push(']');
            }
            TypeData::Interface {
                name, type_args, ..
            } => {
                out.push_str(name);
                if !type_args.is_empty() {
                    out.push('<');
                    self.write_list(out, type_args, ", ", flags);
                    out.push('>');
                }
            }
            TypeData::Object(members) => self.write_members(out, members, flags),
            TypeData::Union(members) => self.write_list(out, members, " | ", flags),
            TypeData::Intersection(members) => self.write_list(out, members, " & ", flags),
            TypeData::Function(signature) => {
                out.push('(');
                for (i, param) in signature.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "{}: ", param.name);
                    self.write_type(out, param.ty, flags);
                }
                out.push_str(") => ");
                self.write_type(out, signature.ret, flags);
            }
            TypeData::TypeParameter { name, .. } => out.push_str(name),
        }
    }

    fn write_list(&self, out: &mut String, types: &[TypeId], sep: &str, flags: TypeFormatFlags) {
        for (i, &ty) in types.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            self.write_type(out, ty, flags);
        }
    }

    fn write_members(&self, out: &mut String, members: &[Member], flags: TypeFormatFlags) {
        if members.is_empty() {
            out.push_str("{}");
            return;
        }
        out.push_str("{ ");
        for member in members {
            let _ = write!(out, "{}: ", member.name);
            self.write_type(out, member.ty, flags);
            out.push_str("; ");
        }
        out.push('}');
    }

    fn needs_parens_as_element(&self, elem: TypeId) -> bool {
        matches!(
            self.lookup(elem),
            TypeData::Union(_) | TypeData::Intersection(_) | TypeData::Function(_)
        )
    }
}
