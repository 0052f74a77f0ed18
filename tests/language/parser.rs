//! Integration tests for the parser

use proptest::prelude::*;
use trellis_foundation::ErrorKind;
use trellis_language::{Ast, parse};

#[test]
fn parses_a_file_of_components() {
    let forms = parse(
        "; cards\n\
         (component: Card \"A card.\"\n\
           (property title :string :required true))\n\
         (component: Deck (data cards :list {:default []}))",
    )
    .unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[1].span().line, 4);
    let deck = forms[1].as_list().unwrap();
    let data = deck[2].as_list().unwrap();
    assert!(data[3].is_map());
}

#[test]
fn names_and_literals_are_distinguished() {
    let forms = parse("title \"title\" :title 42 nil true").unwrap();
    assert_eq!(forms[0].as_identifier(), Some("title"));
    assert_eq!(forms[1].as_identifier(), None);
    assert_eq!(forms[2].as_identifier(), None);
    assert!(matches!(forms[3], Ast::Int(42, _)));
    assert!(forms[4].is_nil());
    assert_eq!(forms[5].as_bool(), Some(true));
}

#[test]
fn errors_report_line_and_column() {
    let err = parse("(component: Card\n  (property title :string]\n)").unwrap_err();
    match err.kind {
        ErrorKind::ParseError { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }
}

proptest! {
    /// The parser returns a result for any input instead of panicking.
    #[test]
    fn parser_never_panics(input in r#"[()\[\]{}:a-zA-Z0-9 ";.\n-]{0,64}"#) {
        let _ = parse(&input);
    }
}
