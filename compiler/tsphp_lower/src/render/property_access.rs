//! Property access.
//!
//! Rules are tried in order and the first that applies decides the output:
//!
//! 1. `exports.x` outside a closure declaring `exports`: error, no output.
//! 2. Access rooted in an imported name: resolved through the export
//!    registry.
//! 3. `.length` not followed by another access: `strlen()` for strings,
//!    `count()` otherwise.
//! 4. `Math` constants become `M_*`; unsupported members are errors.
//! 5. Host namespaces (`Object.keys`) become static calls.
//! 6. `children` inside a component render function warns.
//! 7. Otherwise an array index: `$obj["member"]`.

use tsphp_diagnostic::ErrorCode;
use tsphp_ir::NodeId;

use super::operators::is_string_typed;
use super::render_node;
use crate::hooks::{MATH_CONSTANTS, SUPPORTED_MATH_METHODS};
use crate::{LowerError, LoweringContext};

/// Host runtime namespaces rendered as `<Namespace>::<member>`. Sorted.
pub const JS_BUILTIN_NAMESPACES: [&str; 21] = [
    "Array",
    "ArrayBuffer",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "Function",
    "Intl",
    "JSON",
    "Map",
    "Number",
    "Object",
    "Promise",
    "Proxy",
    "Reflect",
    "RegExp",
    "Set",
    "String",
    "Symbol",
    "WeakMap",
    "WeakSet",
];

pub(super) fn render_property_access(
    ctx: &mut LoweringContext<'_>,
    node: NodeId,
    object: NodeId,
    member: NodeId,
) -> Result<String, LowerError> {
    let tree = ctx.tree();
    let ident = render_node(ctx, object)?;
    let accessor = tree.identifier(member).unwrap_or_else(|| tree.text(member));

    if ident == "$exports" && !ctx.scopes().closure_has(ctx.scope(), "exports") {
        ctx.error(
            ErrorCode::E4001,
            node,
            "You should use `export` instead of `module.exports = `",
        );
        return Ok(String::new());
    }

    if let Some(rendered) = render_external(ctx, node, object, accessor) {
        return Ok(rendered);
    }

    if accessor == "length" && !tree.is_property_access_object(node) {
        if is_string_typed(ctx, object) {
            ctx.warn(
                ErrorCode::W4001,
                node,
                "Converting .length to strlen(): check your encodings!",
            );
            return Ok(format!("strlen({ident})"));
        }
        return Ok(format!("count({ident})"));
    }

    if ident == "$Math" {
        if MATH_CONSTANTS.contains(&accessor) {
            return Ok(format!("M_{accessor}"));
        }
        if !SUPPORTED_MATH_METHODS.contains(&accessor) {
            ctx.error(
                ErrorCode::E4002,
                node,
                format!("Math: unsupported property ({accessor})"),
            );
            return Ok("null".to_owned());
        }
    } else {
        let object_text = tree.text(object);
        if JS_BUILTIN_NAMESPACES.binary_search(&object_text).is_ok() {
            return Ok(format!("{object_text}::{accessor}"));
        }
    }

    if accessor == "children" && ctx.scopes().inside_component(ctx.scope()) {
        ctx.warn(
            ErrorCode::W4002,
            node,
            format!(
                "Accessing {ident}.children inside react component function: note that \
                 accessing props.children won't work on server! Use object dereferencing instead."
            ),
        );
    }

    Ok(format!("{ident}[\"{accessor}\"]"))
}

/// Resolve an access whose root identifier is imported from another module.
///
/// Returns `None` when the root is not an external declaration.
fn render_external(
    ctx: &mut LoweringContext<'_>,
    node: NodeId,
    object: NodeId,
    accessor: &str,
) -> Option<String> {
    let tree = ctx.tree();
    let root = tree.left_root(object)?;
    let decl = ctx.scopes().find(ctx.scope(), tree.text(root))?;
    if !decl.is_external() {
        return None;
    }

    let target = decl.target_module.as_deref().unwrap_or_default();
    let resolved = ctx
        .exports()
        .exported_identifier(ctx.module(), target, accessor);
    Some(resolved.unwrap_or_else(|| {
        ctx.error(
            ErrorCode::E4005,
            node,
            format!("`{accessor}` is not exported by `{target}`"),
        );
        "null".to_owned()
    }))
}
