//! Validation through the builder

use trellis_foundation::{AssignKind, ErrorKind};

use crate::{ast, at, card};

#[test]
fn every_kind_type_option_combination_validates() {
    let cases = [
        ("property", ":list", "[:required false :default [] :binding :item]"),
        ("property", ":children", "[:required true :group :header :use_bindings [:x]]"),
        ("property", ":string", "[:required true :default \"x\" :values [\"x\" \"y\"]]"),
        ("property", ":css_class", "{:default \"btn\"}"),
        ("data", ":integer", "[:default 0 :values [0 1]]"),
        ("data", ":children", "[:default nil]"),
    ];
    for (i, (kind, ty, options)) in cases.into_iter().enumerate() {
        let mut builder = card();
        let kind = if kind == "property" {
            AssignKind::Property
        } else {
            AssignKind::Data
        };
        let line = u32::try_from(i).unwrap() + 1;
        let result = builder.declare(kind, &ast("field"), Some(&ast(ty)), &ast(options), at(line));
        assert!(result.is_ok(), "{ty} {options}: {:?}", result.err());
    }
}

#[test]
fn children_property_rejects_default() {
    let err = card()
        .property(&ast("body"), &ast(":children"), &ast("[:default nil]"), at(1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "card.trl:1:1: unknown option :default. Available options: [:required, :group, :use_bindings]"
    );
}

#[test]
fn list_property_rejects_values() {
    let err = card()
        .property(&ast("items"), &ast(":list"), &ast("[:values [1] :other 2]"), at(1))
        .unwrap_err();
    match err.kind {
        ErrorKind::UnknownOption { unknown, .. } => assert_eq!(unknown, ["values", "other"]),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn required_must_be_boolean() {
    let err = card()
        .property(&ast("title"), &ast(":string"), &ast("[:required 1]"), at(1))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOptionValue { ref option, ref actual, .. } if option == "required" && actual == "1"));
}

#[test]
fn computed_names_are_rejected() {
    let err = card()
        .data(&ast("(str \"a\" \"b\")"), &ast(":string"), &ast("[]"), at(1))
        .unwrap_err();
    assert!(err.to_string().contains("Expected a variable name, got: (str \"a\" \"b\")"));
}

#[test]
fn type_must_be_a_keyword_in_the_set() {
    for ty in [":text", "string", "\"string\"", ":String"] {
        let err = card()
            .property(&ast("title"), &ast(ty), &ast("[]"), at(1))
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidType { found: Some(_) }), "{ty}");
    }
}
