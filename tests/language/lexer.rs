//! Integration tests for the lexer

use trellis_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn lexes_context_declaration() {
    assert_eq!(
        kinds("(context :get theme :from MyApp.Parent)"),
        vec![
            TokenKind::LParen,
            TokenKind::Symbol("context".into()),
            TokenKind::Keyword("get".into()),
            TokenKind::Symbol("theme".into()),
            TokenKind::Keyword("from".into()),
            TokenKind::Symbol("MyApp.Parent".into()),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn commas_are_whitespace() {
    assert_eq!(
        kinds("[:a 1, :b 2]"),
        kinds("[:a 1 :b 2]")
    );
}

#[test]
fn component_head_is_one_symbol() {
    assert_eq!(
        kinds("component:")[0],
        TokenKind::Symbol("component:".into())
    );
}

#[test]
fn tokens_carry_positions() {
    let tokens = Lexer::tokenize_all("(component: Card\n  (data n :integer))");
    let data = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Symbol("data".into()))
        .unwrap();
    assert_eq!((data.span.line, data.span.column), (2, 4));
}

#[test]
fn unterminated_string_is_an_error_token() {
    assert!(
        kinds("\"open")
            .iter()
            .any(|k| matches!(k, TokenKind::Error(_)))
    );
}
