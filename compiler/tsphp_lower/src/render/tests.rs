use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tracing::span::{Attributes, Id};
use tracing_subscriber::layer::{self, Layer};
use tracing_subscriber::prelude::*;
use tsphp_diagnostic::{ErrorCode, Severity};
use tsphp_ir::{BinaryOp, TreeBuilder};
use tsphp_types::{Member, TypeId};

use super::*;
use crate::hooks::MATH_CONSTANTS;
use crate::scope::{DeclFlags, Declaration, ScopeId, ScopeKind};
use crate::test_support::{codes, Fixture, MODULE};
use crate::{ModuleExports, ModuleId};

#[test]
fn math_constants_render_without_diagnostics() {
    for constant in MATH_CONSTANTS {
        let mut b = TreeBuilder::new();
        let math = b.ident("Math");
        let access = b.prop(math, constant);
        let fx = Fixture::new(b.finish(&[]));

        let (out, diags) = fx.render_ok(access);
        assert_eq!(out, format!("M_{constant}"));
        assert!(diags.is_empty());
    }
}

#[test]
fn unsupported_math_member_is_one_error() {
    let mut b = TreeBuilder::new();
    let math = b.ident("Math");
    let access = b.prop(math, "hypot");
    let fx = Fixture::new(b.finish(&[]));

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4002)]);
    assert_eq!(diags[0].message, "Math: unsupported property (hypot)");
}

#[test]
fn supported_math_method_reference_falls_through() {
    let mut b = TreeBuilder::new();
    let math = b.ident("Math");
    let access = b.prop(math, "floor");
    let fx = Fixture::new(b.finish(&[]));

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "$Math[\"floor\"]");
    assert!(diags.is_empty());
}

#[test]
fn string_length_is_strlen_with_warning() {
    let mut b = TreeBuilder::new();
    let s = b.ident("s");
    let access = b.prop(s, "length");
    let lit = b.ident("l");
    let lit_access = b.prop(lit, "length");
    let mut fx = Fixture::new(b.finish(&[]));
    fx.types.set_type(s, TypeId::STRING);
    let literal = fx.types.string_literal("abc");
    fx.types.set_type(lit, literal);

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "strlen($s)");
    assert_eq!(codes(&diags), [(Severity::Warning, ErrorCode::W4001)]);

    let (out, diags) = fx.render_ok(lit_access);
    assert_eq!(out, "strlen($l)");
    assert_eq!(diags.len(), 1);
}

#[test]
fn non_string_length_is_count() {
    let mut b = TreeBuilder::new();
    let items = b.ident("items");
    let access = b.prop(items, "length");
    let maybe = b.ident("maybe");
    let maybe_access = b.prop(maybe, "length");
    let mut fx = Fixture::new(b.finish(&[]));
    let arr = fx.types.array(TypeId::NUMBER);
    fx.types.set_type(items, arr);
    let nullable = fx.types.union(&[TypeId::STRING, TypeId::NULL]);
    fx.types.set_type(maybe, nullable);

    assert_eq!(fx.render_ok(access), ("count($items)".to_owned(), Vec::new()));
    assert_eq!(fx.render_ok(maybe_access), ("count($maybe)".to_owned(), Vec::new()));
}

#[test]
fn chained_length_is_a_plain_index() {
    let mut b = TreeBuilder::new();
    let s = b.ident("s");
    let length = b.prop(s, "length");
    let outer = b.prop(length, "x");
    let mut fx = Fixture::new(b.finish(&[]));
    fx.types.set_type(s, TypeId::STRING);

    let (out, diags) = fx.render_ok(outer);
    assert_eq!(out, "$s[\"length\"][\"x\"]");
    assert!(diags.is_empty());
}

#[test]
fn exports_object_outside_its_closure_is_an_error() {
    let mut b = TreeBuilder::new();
    let exports = b.ident("exports");
    let access = b.prop(exports, "foo");
    let fx = Fixture::new(b.finish(&[]));

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4001)]);

    let mut declared = fx;
    declared
        .scopes
        .declare(ScopeId::ROOT, Declaration::local("exports", DeclFlags::CONST));
    let (out, diags) = declared.render_ok(access);
    assert_eq!(out, "$exports[\"foo\"]");
    assert!(diags.is_empty());
}

fn with_external_lib(fx: &mut Fixture, local: &str) {
    let lib = ModuleId::new("src/lib/helpers.ts");
    let mut builder = ModuleExports::builder();
    builder.add_module(lib.clone(), "\\App\\Helpers").unwrap();
    for name in ["PI", "length", "keys", "sum"] {
        builder.add_export(&lib, name).unwrap();
    }
    fx.exports = builder.build();
    fx.scopes
        .declare(ScopeId::ROOT, Declaration::external(local, "./lib/helpers"));
}

#[test]
fn external_root_overrides_shape_rules() {
    for (root, member) in [("Math", "PI"), ("Object", "keys"), ("h", "length")] {
        let mut b = TreeBuilder::new();
        let ident = b.ident(root);
        let access = b.prop(ident, member);
        let mut fx = Fixture::new(b.finish(&[]));
        fx.types.set_type(ident, TypeId::STRING);
        with_external_lib(&mut fx, root);

        let (out, diags) = fx.render_ok(access);
        assert_eq!(out, format!("\\App\\Helpers::getInstance()->{member}"));
        assert!(diags.is_empty(), "{root}.{member}: {diags:?}");
    }
}

#[test]
fn external_chain_resolves_outer_member() {
    let mut b = TreeBuilder::new();
    let h = b.ident("h");
    let index = b.number("0");
    let elem = b.elem(h, index);
    let access = b.prop(elem, "sum");
    let mut fx = Fixture::new(b.finish(&[]));
    with_external_lib(&mut fx, "h");

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "\\App\\Helpers::getInstance()->sum");
    assert!(diags.is_empty());
}

#[test]
fn missing_external_export_is_an_error() {
    let mut b = TreeBuilder::new();
    let h = b.ident("h");
    let access = b.prop(h, "missing");
    let mut fx = Fixture::new(b.finish(&[]));
    with_external_lib(&mut fx, "h");

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "null");
    assert_eq!(codes(&diags), [(Severity::Error, ErrorCode::E4005)]);
    let location = diags[0].location.map(|l| (l.line, l.column));
    assert_eq!(location, Some((3, 1)));
}

#[test]
fn host_namespaces_render_static_access() {
    let mut b = TreeBuilder::new();
    let object = b.ident("Object");
    let keys = b.prop(object, "keys");
    let json = b.ident("JSON");
    let stringify = b.prop(json, "stringify");
    let fx = Fixture::new(b.finish(&[]));

    assert_eq!(fx.render_ok(keys).0, "Object::keys");
    assert_eq!(fx.render_ok(stringify).0, "JSON::stringify");
}

#[test]
fn children_inside_component_warns_but_renders() {
    let mut b = TreeBuilder::new();
    let props = b.ident("props");
    let access = b.prop(props, "children");
    let stmt = b.expr_stmt(access);
    let body = b.block(&[stmt]);
    let param = b.param_ident("props");
    let component = b.function_decl("Card", &[param], body);
    let mut fx = Fixture::new(b.finish(&[component]));
    let scope = fx
        .scopes
        .push_for(component, ScopeId::ROOT, ScopeKind::Component);
    fx.scopes
        .declare(scope, Declaration::local("props", DeclFlags::PARAMETER));

    let (out, diags) = fx.render_ok(component);
    assert_eq!(out, "function Card($props) { $props[\"children\"]; }");
    assert_eq!(codes(&diags), [(Severity::Warning, ErrorCode::W4002)]);

    let (out, diags) = fx.render_ok(access);
    assert_eq!(out, "$props[\"children\"]");
    assert!(diags.is_empty());
}

#[test]
fn functions_render_as_closures_with_captures() {
    let mut b = TreeBuilder::new();
    let param = b.param_ident("x");
    let x = b.ident("x");
    let total = b.ident("total");
    let sum = b.binary(BinaryOp::Add, x, total);
    let arrow = b.arrow(&[param], sum);
    let mut fx = Fixture::new(b.finish(&[]));
    let scope = fx.scopes.push_for(arrow, ScopeId::ROOT, ScopeKind::Function);
    fx.scopes.capture(scope, "total");
    fx.types.set_type(x, TypeId::NUMBER);
    fx.types.set_type(total, TypeId::NUMBER);

    let (out, diags) = fx.render_ok(arrow);
    assert_eq!(out, "function ($x) use (&$total) { return ($x + $total); }");
    assert!(diags.is_empty());
}

#[test]
fn declared_functions_are_called_by_name() {
    let mut b = TreeBuilder::new();
    let callee = b.ident("sum");
    let one = b.number("1");
    let text = b.string("a\"$b\n");
    let call = b.call(callee, &[one, text]);
    let mut fx = Fixture::new(b.finish(&[]));

    assert_eq!(fx.render_ok(call).0, "$sum(1, \"a\\\"\\$b\\n\")");

    fx.scopes
        .declare(ScopeId::ROOT, Declaration::local("sum", DeclFlags::FUNCTION));
    assert_eq!(fx.render_ok(call).0, "sum(1, \"a\\\"\\$b\\n\")");
}

#[test]
fn string_addition_becomes_concatenation() {
    let mut b = TreeBuilder::new();
    let s = b.ident("s");
    let n = b.number("1");
    let concat = b.binary(BinaryOp::Add, s, n);
    let two = b.number("2");
    let three = b.number("3");
    let add = b.binary(BinaryOp::Add, two, three);
    let mut fx = Fixture::new(b.finish(&[]));
    fx.types.set_type(s, TypeId::STRING);

    assert_eq!(fx.render_ok(concat).0, "($s . 1)");
    assert_eq!(fx.render_ok(add).0, "(2 + 3)");
}

#[test]
fn literals_and_statements() {
    let mut b = TreeBuilder::new();
    let undefined = b.ident("undefined");
    let yes = b.boolean(true);
    let null = b.null();
    let arr = b.array(&[yes, null]);
    let items = b.ident("items");
    let zero = b.number("0");
    let first = b.elem(items, zero);
    let paren = b.paren(first);
    let ret = b.ret(Some(paren));
    let empty_ret = b.ret(None);
    let stmt = b.expr_stmt(arr);
    let block = b.block(&[stmt, ret, empty_ret]);
    let empty = b.block(&[]);
    let fx = Fixture::new(b.finish(&[]));

    assert_eq!(fx.render_ok(undefined).0, "null");
    assert_eq!(
        fx.render_ok(block).0,
        "{ [true, null]; return ($items[0]); return; }"
    );
    assert_eq!(fx.render_ok(empty).0, "{}");
}

#[test]
fn binding_patterns_are_fatal() {
    let mut b = TreeBuilder::new();
    let key = b.ident("k");
    let pattern = b.object_pattern(&[key]);
    let param = b.param(pattern);
    let body = b.block(&[]);
    let func = b.function_expr(&[param], body);
    let fx = Fixture::new(b.finish(&[]));

    let err = fx.render(func).err();
    assert_eq!(
        err,
        Some(LowerError::UnsupportedNode {
            kind: "object binding pattern",
            span: fx.tree.span(pattern),
        })
    );
}

#[test]
fn rendering_is_idempotent() {
    let mut b = TreeBuilder::new();
    let props = b.ident("props");
    let user = b.prop(props, "user");
    let name = b.prop(user, "name");
    let length = b.prop(name, "length");
    let mut fx = Fixture::new(b.finish(&[]));
    let shape = fx.types.object(vec![Member::new("name", TypeId::STRING)]);
    fx.types.set_type(user, shape);
    fx.types.set_type(name, TypeId::STRING);

    let first = fx.render_ok(length);
    assert_eq!(first, fx.render_ok(length));
    assert_eq!(first.0, "strlen($props[\"user\"][\"name\"])");
}

#[test]
fn module_id_constant_matches_fixture() {
    assert_eq!(ModuleId::new(MODULE).as_str(), "src/index");
}

/// Records the name of every span opened while installed.
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl<S: tracing::Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: layer::Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[test]
fn render_node_opens_a_trace_span_per_node() {
    let mut b = TreeBuilder::new();
    let items = b.ident("items");
    let first = b.prop(items, "first");
    let fx = Fixture::new(b.finish(&[]));

    let names = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanNames(Arc::clone(&names)));
    let out = tracing::subscriber::with_default(subscriber, || fx.render_ok(first).0);

    assert_eq!(out, "$items[\"first\"]");
    let names = names.lock().unwrap();
    let rendered = names.iter().filter(|&&name| name == "render_node").count();
    assert_eq!(rendered, 2);
}
