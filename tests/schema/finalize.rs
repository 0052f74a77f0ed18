//! Finalized views, documentation, and the context post-check

use trellis_foundation::AssignType;
use trellis_language::Ast;
use trellis_schema::{Assign, ComponentBuilder, SchemaConfig, Severity};

use crate::{ast, at, card};

fn names<'a>(assigns: impl IntoIterator<Item = &'a Assign>) -> Vec<String> {
    assigns.into_iter().map(|a| a.name.clone()).collect()
}

#[test]
fn list_property_is_queryable() {
    let mut builder = card();
    builder
        .property(&ast("items"), &ast(":list"), &ast("[:default []]"), at(1))
        .unwrap();
    let component = builder.finalize().unwrap();
    let schema = component.schema();

    assert!(schema.has_property("items"));
    assert_eq!(schema.get_property("items").map(|p| p.ty), Some(AssignType::List));
    assert_eq!(schema.list_properties().len(), 1);
    assert!(matches!(
        schema.list_properties()[0].default_value(),
        Some(Ast::Vector(elements, _)) if elements.is_empty()
    ));
}

#[test]
fn context_assigns_are_gets_then_in_scope_sets() {
    let mut builder = card();
    builder.context_set(&ast("c"), &ast(":string"), &ast("[]"), at(1)).unwrap();
    builder.context_get(&ast("a"), &ast("[:from Parent]"), at(2)).unwrap();
    builder
        .context_set(&ast("d"), &ast(":string"), &ast("[:scope :only_children]"), at(3))
        .unwrap();
    builder.context_get(&ast("b"), &ast("[:from Parent]"), at(4)).unwrap();
    builder.define_function("init_context", 1);
    let component = builder.finalize().unwrap();
    let schema = component.schema();

    assert_eq!(names(schema.list_context_assigns()), ["a", "b", "c"]);
    assert_eq!(names(schema.list_context_sets()), ["c", "d"]);
    assert_eq!(names(schema.list_context_sets_in_scope()), ["c"]);
    assert_eq!(names(schema.list_context_gets()), ["a", "b"]);
}

#[test]
fn data_keeps_declaration_order() {
    let mut builder = card();
    for (line, name) in [(1, "zeta"), (2, "alpha"), (3, "mid")] {
        builder.data(&ast(name), &ast(":any"), &ast("[]"), at(line)).unwrap();
    }
    assert_eq!(names(builder.finalize().unwrap().schema().list_data()), ["zeta", "alpha", "mid"]);
}

#[test]
fn missing_init_context_warns_once_per_set() {
    let mut builder = card();
    builder.context_set(&ast("count"), &ast(":integer"), &ast("[]"), at(5)).unwrap();
    let component = builder.finalize().unwrap();

    let diagnostics = component.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].assign, "count");
    assert_eq!(diagnostics[0].site.line, 5);
    assert!(diagnostics[0].message.contains(":count"));
}

#[test]
fn init_context_one_silences_the_check() {
    let mut builder = card();
    builder.context_set(&ast("count"), &ast(":integer"), &ast("[]"), at(5)).unwrap();
    builder.define_function("init_context", 1);
    assert!(builder.finalize().unwrap().diagnostics().is_empty());
}

#[test]
fn docs_follow_declaration_order() {
    let mut builder = ComponentBuilder::new("Button", "button.trl")
        .with_config(SchemaConfig::quiet().with_docs_heading("Props"));
    builder.doc("Button label");
    builder
        .property(&ast("label"), &ast(":string"), &ast("[:required true]"), at(1))
        .unwrap();
    builder
        .property(&ast("kind"), &ast(":atom"), &ast("[:values [:primary :danger]]"), at(2))
        .unwrap();
    builder.data(&ast("pressed"), &ast(":boolean"), &ast("[]"), at(3)).unwrap();
    let component = builder.finalize().unwrap();

    assert_eq!(
        component.doc(),
        Some(
            "## Props\n\n\
             * **label** *string, required: true* - Button label\n\
             * **kind** *atom, values: [:primary :danger]*\n"
        )
    );
}

#[test]
fn no_properties_no_docs() {
    let mut builder = card().with_moduledoc("Just data.");
    builder.data(&ast("n"), &ast(":integer"), &ast("[]"), at(1)).unwrap();
    assert_eq!(builder.finalize().unwrap().doc(), Some("Just data."));
}

#[test]
fn failed_declaration_leaves_no_component() {
    let mut builder = card();
    builder.doc("Bad field");
    assert!(builder.property(&ast("bad"), &ast(":nope"), &ast("[]"), at(1)).is_err());
    assert!(builder.property(&ast("good"), &ast(":string"), &ast("[]"), at(2)).is_err());
    builder.define_function("init_context", 1);
    let err = builder.finalize().unwrap_err();
    assert_eq!(err.line(), Some(1));
}
