//! Integration tests for the pretty printer

use trellis_language::parse;
use trellis_language::pretty::{render, render_joined};

#[test]
fn renders_options_as_written() {
    let forms = parse("[:default   [1,2]  :values (:a :b)]").unwrap();
    assert_eq!(render(&forms[0]), "[:default [1 2] :values (:a :b)]");
}

#[test]
fn strings_are_escaped() {
    let forms = parse(r#""say \"hi\"""#).unwrap();
    assert_eq!(render(&forms[0]), r#""say \"hi\"""#);
}

#[test]
fn joins_forms() {
    let forms = parse("{:a 1} nil 2.5").unwrap();
    assert_eq!(render_joined(&forms, " | "), "{:a 1} | nil | 2.5");
}
