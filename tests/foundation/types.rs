//! Integration tests for assign kinds and types

use trellis_foundation::{AssignKind, AssignType};

#[test]
fn closed_set_has_eighteen_members() {
    assert_eq!(AssignType::ALL.len(), 18);
    let names: Vec<&str> = AssignType::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        [
            "any", "css_class", "list", "event", "children", "boolean", "string", "date",
            "datetime", "number", "integer", "decimal", "map", "fun", "atom", "module",
            "changeset", "form",
        ]
    );
}

#[test]
fn from_name_is_exact() {
    assert_eq!(AssignType::from_name("datetime"), Some(AssignType::DateTime));
    assert_eq!(AssignType::from_name("date_time"), None);
    assert_eq!(AssignType::from_name("String"), None);
    assert_eq!(AssignType::from_name(""), None);
}

#[test]
fn allowed_list_format() {
    let list = AssignType::allowed_list();
    assert!(list.starts_with("[:any, :css_class"));
    assert!(list.ends_with(":changeset, :form]"));
}

#[test]
fn kinds_display_as_keywords() {
    assert_eq!(AssignKind::Property.to_string(), "property");
    assert_eq!(AssignKind::Data.to_string(), "data");
    assert_eq!(AssignKind::Context.to_string(), "context");
}
