//! Source type name to target primitive token table.

/// Target token for a source type name, if it has a direct equivalent.
pub fn php_primitive(type_name: &str) -> Option<&'static str> {
    let token = match type_name {
        "number" => "float",
        "string" => "string",
        "boolean" | "true" | "false" => "bool",
        "object" | "Object" => "array",
        "null" | "undefined" => "null",
        "void" => "void",
        _ => return None,
    };
    Some(token)
}
