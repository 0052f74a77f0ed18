//! Loading components through the session

use trellis_foundation::{AssignType, ErrorKind};
use trellis_language::SourceFile;
use trellis_runtime::Session;
use trellis_schema::SchemaConfig;

use crate::fixture;

fn load_fixture() -> Session {
    let mut session = Session::with_config(SchemaConfig::quiet());
    let names = session.load_file(&fixture("card.trl")).unwrap();
    assert_eq!(names, ["Theme", "Card"]);
    session
}

#[test]
fn fixture_defines_both_components() {
    let session = load_fixture();
    let card = session.component("Card").unwrap();
    let schema = card.schema();

    assert_eq!(schema.list_properties().len(), 4);
    assert_eq!(schema.get_property("items").map(|p| p.ty), Some(AssignType::List));
    assert_eq!(
        schema.get_property("title").and_then(|p| p.doc.as_deref()),
        Some("The card title")
    );
    assert_eq!(schema.get_property("variant").and_then(|p| p.doc.as_deref()), None);
    assert!(schema.get_property("title").is_some_and(trellis_schema::Assign::is_required));
    assert_eq!(schema.list_data().len(), 1);
    assert_eq!(schema.list_context_assigns().len(), 2);
}

#[test]
fn post_check_flags_only_the_uninitialized_component() {
    let session = load_fixture();
    let diagnostics: Vec<_> = session.diagnostics().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].assign, "count");
    assert_eq!(diagnostics[0].site.line, 19);
    assert!(session.component("Theme").unwrap().diagnostics().is_empty());
}

#[test]
fn generated_docs_follow_moduledoc() {
    let session = load_fixture();
    let doc = session.component("Card").unwrap().doc().unwrap();
    assert!(doc.starts_with("Renders a card.\n\n## Properties\n\n"));
    assert!(doc.contains("* **title** *string, required: true* - The card title\n"));
    assert!(doc.contains("* **items** *list, default: []* - Entries rendered in the body\n"));
    assert!(doc.contains("* **variant** *atom, values: [:plain :raised], default: :plain*\n"));
    assert!(doc.ends_with("* **body** *children, required: false*\n"));

    let theme = session.component("Theme").unwrap();
    assert_eq!(theme.doc(), Some("Provides the theme to everything below it."));
}

#[test]
fn structural_error_names_file_and_line() {
    let mut session = Session::with_config(SchemaConfig::quiet());
    let err = session
        .load_source(&SourceFile::new(
            "broken.trl",
            "(component: Broken\n  (property title :string)\n  (data title :string))",
        ))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName { existing_line: 2, .. }));
    assert!(err.to_string().starts_with("broken.trl:3:3: cannot use name \"title\""));
    assert!(session.component("Broken").is_none());
}

#[test]
fn components_are_defined_one_at_a_time() {
    let mut session = Session::with_config(SchemaConfig::quiet());
    session
        .load_source(&SourceFile::new("a.trl", "(component: A (data x :any))"))
        .unwrap();
    session
        .load_source(&SourceFile::new("b.trl", "(component: B (data x :any))"))
        .unwrap();
    let files: Vec<&str> = session.components().iter().map(|c| c.file()).collect();
    assert_eq!(files, ["a.trl", "b.trl"]);
}

#[test]
fn config_disables_docs_and_checks() {
    let mut session = Session::with_config(SchemaConfig::minimal());
    session.load_file(&fixture("card.trl")).unwrap();
    assert_eq!(session.diagnostics().count(), 0);
    assert_eq!(
        session.component("Card").unwrap().doc(),
        Some("Renders a card.")
    );
}
