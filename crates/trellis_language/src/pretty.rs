//! Renders syntax back to single-line source text.
//!
//! Used wherever an option expression is shown to a person: generated
//! documentation and error messages both quote what the author wrote,
//! not an evaluated value.
//!
//! # Example
//!
//! ```
//! use trellis_language::{parse, pretty::render};
//!
//! let forms = parse("[:default  [1 2]]").unwrap();
//! assert_eq!(render(&forms[0]), "[:default [1 2]]");
//! ```

use std::fmt::Write;

use crate::ast::Ast;

/// Renders a node as compact source text.
#[must_use]
pub fn render(ast: &Ast) -> String {
    let mut out = String::new();
    write_ast(&mut out, ast);
    out
}

/// Renders several nodes separated by `separator`.
#[must_use]
pub fn render_joined(asts: &[Ast], separator: &str) -> String {
    asts.iter().map(render).collect::<Vec<_>>().join(separator)
}

fn write_ast(out: &mut String, ast: &Ast) {
    match ast {
        Ast::Nil(_) => out.push_str("nil"),
        Ast::Bool(b, _) => out.push_str(if *b { "true" } else { "false" }),
        Ast::Int(n, _) => {
            let _ = write!(out, "{n}");
        }
        Ast::Float(n, _) => {
            if n.fract() == 0.0 && n.is_finite() {
                let _ = write!(out, "{n:.1}");
            } else {
                let _ = write!(out, "{n}");
            }
        }
        Ast::String(s, _) => write_string(out, s),
        Ast::Symbol(s, _) => out.push_str(s),
        Ast::Keyword(k, _) => {
            out.push(':');
            out.push_str(k);
        }
        Ast::List(elements, _) => write_seq(out, '(', elements, ')'),
        Ast::Vector(elements, _) => write_seq(out, '[', elements, ']'),
        Ast::Map(entries, _) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_ast(out, key);
                out.push(' ');
                write_ast(out, value);
            }
            out.push('}');
        }
    }
}

fn write_seq(out: &mut String, open: char, elements: &[Ast], close: char) {
    out.push(open);
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_ast(out, element);
    }
    out.push(close);
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}
