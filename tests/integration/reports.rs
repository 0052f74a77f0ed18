//! JSON reports

use trellis_runtime::{ComponentReport, Session};
use trellis_schema::SchemaConfig;

use crate::fixture;

#[test]
fn reports_serialize_every_component() {
    let mut session = Session::with_config(SchemaConfig::quiet());
    session.load_file(&fixture("card.trl")).unwrap();
    let reports: Vec<ComponentReport> = session
        .components()
        .iter()
        .map(ComponentReport::from)
        .collect();

    let json = ComponentReport::to_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["name"], "Theme");
    assert_eq!(value[0]["functions"][0], "init_context/1");
    assert_eq!(value[1]["context_assigns"][0], "card_theme");
    assert_eq!(value[1]["properties"][1]["type"], "list");
    assert_eq!(value[1]["warnings"][0]["assign"], "count");
}
