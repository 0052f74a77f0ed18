//! Name uniqueness and the `only_children` exemption

use proptest::prelude::*;
use trellis_foundation::{AssignKind, DuplicateHint, ErrorKind};
use trellis_language::Ast;
use trellis_schema::ComponentBuilder;

use crate::{ast, at, card};

fn two_scoped_counts_and_property() -> ComponentBuilder {
    let mut builder = card();
    let scoped = ast("[:scope :only_children]");
    builder.context_set(&ast("count"), &ast(":integer"), &scoped, at(1)).unwrap();
    builder.context_set(&ast("count"), &ast(":integer"), &scoped, at(2)).unwrap();
    builder.property(&ast("count"), &ast(":string"), &ast("[]"), at(3)).unwrap();
    builder
}

#[test]
fn only_children_sets_do_not_collide_with_property() {
    let component = two_scoped_counts_and_property().finalize().unwrap();
    assert_eq!(component.schema().list_context_sets().len(), 2);
    assert!(component.schema().list_context_sets_in_scope().is_empty());
    assert!(component.schema().has_property("count"));
}

#[test]
fn property_still_holds_the_slot() {
    let mut builder = two_scoped_counts_and_property();
    let err = builder
        .data(&ast("count"), &ast(":string"), &ast("[]"), at(4))
        .unwrap_err();
    match err.kind {
        ErrorKind::DuplicateName {
            existing_kind,
            existing_line,
            hint,
            ..
        } => {
            assert_eq!(existing_kind, AssignKind::Property);
            assert_eq!(existing_line, 3);
            assert_eq!(hint, None);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(builder.finalize().is_err());
}

#[test]
fn in_scope_set_suggests_only_children() {
    let mut builder = card();
    builder.context_set(&ast("theme"), &ast(":string"), &ast("[]"), at(1)).unwrap();
    let err = builder
        .context_set(&ast("theme"), &ast(":string"), &ast("[]"), at(2))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DuplicateName { hint: Some(DuplicateHint::OnlyChildrenScope), .. }
    ));
    assert!(err.to_string().contains("\nHint: if you only need this context assign"));
}

#[test]
fn alias_resolves_get_conflict() {
    let mut builder = card();
    builder.property(&ast("theme"), &ast(":string"), &ast("[]"), at(1)).unwrap();
    let err = builder
        .context_get(&ast("theme"), &ast("[:from Parent]"), at(2))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName { hint: None, .. }));

    let mut builder = card();
    builder.property(&ast("theme"), &ast(":string"), &ast("[]"), at(1)).unwrap();
    builder
        .context_get(&ast("theme"), &ast("[:from Parent :as :parent_theme]"), at(2))
        .unwrap();
}

#[derive(Clone, Copy, Debug)]
enum Decl {
    Property,
    Data,
    Get,
    Set,
    ChildrenOnlySet,
}

impl Decl {
    fn occupies_slot(self) -> bool {
        !matches!(self, Self::ChildrenOnlySet)
    }

    fn declare(self, builder: &mut ComponentBuilder, name: &str, line: u32) -> bool {
        let name = Ast::symbol(name);
        let ty = Ast::keyword("string");
        let none = Ast::vector(vec![]);
        let result = match self {
            Self::Property => builder.property(&name, &ty, &none, at(line)),
            Self::Data => builder.data(&name, &ty, &none, at(line)),
            Self::Get => builder.context_get(&name, &ast("[:from Parent]"), at(line)),
            Self::Set => builder.context_set(&name, &ty, &none, at(line)),
            Self::ChildrenOnlySet => {
                builder.context_set(&name, &ty, &ast("[:scope :only_children]"), at(line))
            }
        };
        match result {
            Ok(_) => true,
            Err(err) => {
                assert!(matches!(err.kind, ErrorKind::DuplicateName { .. }), "{err}");
                false
            }
        }
    }
}

fn decl() -> impl Strategy<Value = Decl> {
    prop::sample::select(vec![
        Decl::Property,
        Decl::Data,
        Decl::Get,
        Decl::Set,
        Decl::ChildrenOnlySet,
    ])
}

proptest! {
    /// A second declaration of the same name fails exactly when both
    /// occupy a slot.
    #[test]
    fn duplicate_iff_both_occupy_slot(first in decl(), second in decl()) {
        let mut builder = card();
        prop_assert!(first.declare(&mut builder, "shared", 1));
        let accepted = second.declare(&mut builder, "shared", 2);
        prop_assert_eq!(accepted, !(first.occupies_slot() && second.occupies_slot()));
    }

    /// Distinct names never conflict.
    #[test]
    fn distinct_names_never_conflict(decls in prop::collection::vec(decl(), 1..20)) {
        let mut builder = card();
        for (i, d) in decls.iter().enumerate() {
            let line = u32::try_from(i).unwrap() + 1;
            let name = format!("name_{i}");
            prop_assert!(d.declare(&mut builder, &name, line));
        }
        let component = builder.finalize().unwrap();
        prop_assert_eq!(component.schema().iter().count(), decls.len());
    }
}
