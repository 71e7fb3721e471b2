//! Identifiers and literals.

use std::fmt::Write;

use crate::scope::DeclFlags;
use crate::LoweringContext;

/// `$name` for variables, the bare name for declared functions, `null` for
/// `undefined`.
pub(super) fn render_identifier(ctx: &LoweringContext<'_>, name: &str) -> String {
    if name == "undefined" {
        return "null".to_owned();
    }
    let is_function = ctx
        .scopes()
        .find(ctx.scope(), name)
        .is_some_and(|decl| decl.flags.contains(DeclFlags::FUNCTION));
    if is_function {
        name.to_owned()
    } else {
        format!("${name}")
    }
}

/// Quote a string as a PHP double-quoted literal.
///
/// ```
/// use tsphp_lower::render::escape_php_string;
///
/// assert_eq!(escape_php_string("cost: $5\n"), r#""cost: \$5\n""#);
/// ```
pub fn escape_php_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
