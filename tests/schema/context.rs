//! Context declarations

use trellis_foundation::{AssignType, ErrorKind};
use trellis_schema::ContextScope;

use crate::{ast, at, card};

#[test]
fn get_with_from_succeeds() {
    let mut builder = card();
    let get = builder
        .context(&ast(":get"), &ast("theme"), None, &ast("[:from ParentComponent]"), at(1))
        .unwrap();
    assert_eq!(get.ty, AssignType::Any);
    assert_eq!(get.from_component(), Some("ParentComponent"));
}

#[test]
fn typed_get_fails() {
    let err = card()
        .context(
            &ast(":get"),
            &ast("theme"),
            Some(&ast(":string")),
            &ast("[:from ParentComponent]"),
            at(1),
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidContextUsage { .. }));
}

#[test]
fn typed_get_fails_whatever_the_type() {
    for ty in [":bogus", ":any", "string", "[]"] {
        let err = card()
            .context(&ast(":get"), &ast("theme"), Some(&ast(ty)), &ast("[:from Parent]"), at(1))
            .unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidContextUsage { ty: ref found, .. } if found == ty),
            "{ty}"
        );
    }
}

#[test]
fn get_without_from_fails() {
    let err = card()
        .context(&ast(":get"), &ast("theme"), None, &ast("[]"), at(1))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingRequiredOption { .. }));
}

#[test]
fn invalid_scope_fails() {
    let err = card()
        .context(
            &ast(":set"),
            &ast("theme"),
            Some(&ast(":string")),
            &ast("[:scope :invalid_value]"),
            at(1),
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOptionValue { ref option, .. } if option == "scope"));
}

#[test]
fn untyped_set_always_fails() {
    for options in ["[]", "[:scope :only_children]", "nil"] {
        let err = card()
            .context(&ast(":set"), &ast("theme"), None, &ast(options), at(1))
            .unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MissingRequiredOption { ref option, .. } if option == "type"),
            "{options}"
        );
    }
}

#[test]
fn unknown_action_fails() {
    for action in [":put", "get", "\"set\"", "nil"] {
        let err = card()
            .context(&ast(action), &ast("theme"), None, &ast("[]"), at(1))
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidContextAction { .. }), "{action}");
    }
}

#[test]
fn set_records_owner_and_scope() {
    let mut builder = card();
    let set = builder
        .context_set(&ast("count"), &ast(":integer"), &ast("[:scope :only_children]"), at(3))
        .unwrap();
    assert_eq!(set.scope(), ContextScope::OnlyChildren);
    assert_eq!(set.option("to"), Some(&trellis_language::Ast::symbol("Card")));
}
