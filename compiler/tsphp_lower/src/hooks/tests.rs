use pretty_assertions::assert_eq;
use tsphp_diagnostic::{ErrorCode, Severity};
use tsphp_ir::{BinaryOp, NodeId, TreeBuilder};
use tsphp_types::TypeId;

use super::*;
use crate::scope::{DeclFlags, Declaration, ScopeId};
use crate::test_support::{codes, Fixture};

/// `items.<method>((x) => x > 1)`; the caller types `items`.
fn iteration_call(method: &str) -> (Fixture, NodeId, NodeId) {
    let mut b = TreeBuilder::new();
    let items = b.ident("items");
    let callee = b.prop(items, method);
    let param = b.param_ident("x");
    let x = b.ident("x");
    let one = b.number("1");
    let cmp = b.binary(BinaryOp::Gt, x, one);
    let callback = b.arrow(&[param], cmp);
    let call = b.call(callee, &[callback]);
    (Fixture::new(b.finish(&[])), items, call)
}

#[test]
fn builtin_order_is_fixed() {
    let names: Vec<&str> = HookRegistry::builtin().names().collect();
    assert_eq!(
        names,
        [
            "arrayForEach",
            "arrayMap",
            "arrayFilter",
            "arraySome",
            "arrayEvery",
            "arrayFind",
            "arrayFindIndex",
            "math",
        ]
    );
    assert_eq!(HookRegistry::empty().len(), 0);
}

#[test]
fn array_hooks_render_runtime_calls() {
    for hook in ARRAY_HOOKS {
        let (mut fx, items, call) = iteration_call(hook.method);
        let arr = fx.types.array(TypeId::NUMBER);
        fx.types.set_type(items, arr);

        let (out, diags) = fx.render_ok(call);
        assert_eq!(
            out,
            format!(
                "Stdlib::{}($items, function ($x) {{ return ($x > 1); }})",
                hook.runtime_fn
            )
        );
        assert!(diags.is_empty());
    }
}

#[test]
fn non_array_receiver_is_one_error() {
    let (mut fx, items, call) = iteration_call("some");
    fx.types.set_type(items, TypeId::STRING);

    let (out, diags) = fx.render_ok(call);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4003)]);
}

#[test]
fn callback_without_parameters_is_one_error() {
    let mut b = TreeBuilder::new();
    let items = b.ident("items");
    let callee = b.prop(items, "map");
    let one = b.number("1");
    let callback = b.arrow(&[], one);
    let call = b.call(callee, &[callback]);
    let named = b.ident("items");
    let named_callee = b.prop(named, "map");
    let f = b.ident("f");
    let named_call = b.call(named_callee, &[f]);
    let mut fx = Fixture::new(b.finish(&[]));
    let arr = fx.types.array(TypeId::STRING);
    fx.types.set_type(items, arr);
    fx.types.set_type(named, arr);

    let (out, diags) = fx.render_ok(call);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4004)]);
    assert_eq!(
        diags[0].message,
        "Array.prototype.map: can't find iterable element in call."
    );

    let (out, diags) = fx.render_ok(named_call);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4004)]);
}

#[test]
fn runtime_namespace_is_configurable() {
    let (mut fx, items, call) = iteration_call("filter");
    let tuple = fx.types.tuple(&[TypeId::NUMBER, TypeId::NUMBER]);
    fx.types.set_type(items, tuple);
    fx.options = fx.options.clone().with_runtime_namespace("\\Rt\\Arr");

    assert_eq!(
        fx.render_ok(call).0,
        "\\Rt\\Arr::arrayFilter($items, function ($x) { return ($x > 1); })"
    );
}

#[test]
fn method_name_must_be_a_member_access() {
    let mut b = TreeBuilder::new();
    let some = b.ident("some");
    let param = b.param_ident("x");
    let x = b.ident("x");
    let callback = b.arrow(&[param], x);
    let call = b.call(some, &[callback]);
    let fx = Fixture::new(b.finish(&[]));

    let (out, diags) = fx.render_ok(call);
    assert_eq!(out, "$some(function ($x) { return $x; })");
    assert!(diags.is_empty());
}

#[test]
fn math_calls_lower_to_php_functions() {
    let mut b = TreeBuilder::new();
    let math = b.ident("Math");
    let floor = b.prop(math, "floor");
    let v = b.ident("v");
    let floor_call = b.call(floor, &[v]);
    let math2 = b.ident("Math");
    let random = b.prop(math2, "random");
    let random_call = b.call(random, &[]);
    let math3 = b.ident("Math");
    let max = b.prop(math3, "max");
    let one = b.number("1");
    let two = b.number("2");
    let max_call = b.call(max, &[one, two]);
    let fx = Fixture::new(b.finish(&[]));

    assert_eq!(fx.render_ok(floor_call), ("floor($v)".to_owned(), Vec::new()));
    assert_eq!(fx.render_ok(random_call).0, "(mt_rand() / mt_getrandmax())");
    assert_eq!(fx.render_ok(max_call).0, "max(1, 2)");
}

#[test]
fn unsupported_math_call_is_null_and_one_error() {
    let mut b = TreeBuilder::new();
    let math = b.ident("Math");
    let hypot = b.prop(math, "hypot");
    let x = b.ident("x");
    let y = b.ident("y");
    let call = b.call(hypot, &[x, y]);
    let math2 = b.ident("Math");
    let pi = b.prop(math2, "PI");
    let pi_call = b.call(pi, &[]);
    let fx = Fixture::new(b.finish(&[]));

    let (out, diags) = fx.render_ok(call);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4002)]);
    assert_eq!(diags[0].message, "Math: unsupported method (hypot)");

    let (out, diags) = fx.render_ok(pi_call);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4002)]);
}

#[test]
fn shadowed_math_is_not_rewritten() {
    let mut b = TreeBuilder::new();
    let math = b.ident("Math");
    let floor = b.prop(math, "floor");
    let v = b.ident("v");
    let call = b.call(floor, &[v]);
    let mut fx = Fixture::new(b.finish(&[]));
    fx.scopes
        .declare(ScopeId::ROOT, Declaration::local("Math", DeclFlags::CONST));

    assert_eq!(fx.render_ok(call).0, "$Math[\"floor\"]($v)");
}

struct ShoutHook;

impl CallHook for ShoutHook {
    fn name(&self) -> &str {
        "shout"
    }

    fn matches(&self, ctx: &LoweringContext<'_>, call: NodeId) -> bool {
        let tree = ctx.tree();
        tree.member_name_is(call, "shout") || tree.member_name_is(call, "some")
    }

    fn render(&self, _ctx: &mut LoweringContext<'_>, _call: NodeId) -> Result<String, LowerError> {
        Ok("SHOUT".to_owned())
    }
}

#[test]
fn custom_hooks_run_after_builtins() {
    let mut registry = HookRegistry::with_builtins();
    registry.register(ShoutHook);
    assert_eq!(registry.len(), ARRAY_HOOKS.len() + 2);

    let (mut fx, items, some_call) = iteration_call("some");
    let arr = fx.types.array(TypeId::NUMBER);
    fx.types.set_type(items, arr);
    fx.hooks = Some(registry);
    assert!(fx.render_ok(some_call).0.starts_with("Stdlib::arraySome("));

    let (mut fx, _, shout_call) = iteration_call("shout");
    let mut registry = HookRegistry::with_builtins();
    registry.register(ShoutHook);
    fx.hooks = Some(registry);
    assert_eq!(fx.render_ok(shout_call).0, "SHOUT");
}
