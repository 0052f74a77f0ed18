//! Turns `(component: ...)` source forms into builder calls.
//!
//! ```text
//! (component: Card "Renders a card."
//!   (doc "The card title")
//!   (property title :string :required true)
//!   (context :get theme :from Parent)
//!   (defn init_context [state] state))
//! ```

use std::sync::Arc;

use trellis_foundation::{AssignKind, Error, ErrorContext, Result};
use trellis_language::{Ast, Span};

use crate::builder::ComponentBuilder;
use crate::component::Component;
use crate::config::SchemaConfig;

/// Analyzes component definition forms.
pub struct ComponentAnalyzer;

impl ComponentAnalyzer {
    /// Defines the component a top-level form describes.
    ///
    /// Returns `Ok(None)` if the form is not a `component:` form.
    ///
    /// # Errors
    /// Returns a parse error for malformed forms, or the first structural
    /// error raised while declaring.
    pub fn analyze(ast: &Ast, file: &Arc<str>, config: &SchemaConfig) -> Result<Option<Component>> {
        let Ast::List(elements, span) = ast else {
            return Ok(None);
        };
        match elements.first() {
            Some(Ast::Symbol(s, _)) if s == "component:" => {}
            _ => return Ok(None),
        }

        let Some(name_form) = elements.get(1) else {
            return Err(parse_error(file, *span, "component: requires a name"));
        };
        let Some(name) = name_form.as_component_ref() else {
            return Err(parse_error(
                file,
                name_form.span(),
                format!(
                    "component name must be a capitalized symbol, got {}",
                    name_form.type_name()
                ),
            ));
        };

        let mut builder = ComponentBuilder::new(name, Arc::clone(file)).with_config(config.clone());
        let mut body = &elements[2..];
        if let Some((Ast::String(doc, _), rest)) = body.split_first() {
            builder = builder.with_moduledoc(doc.clone());
            body = rest;
        }

        for form in body {
            Self::analyze_body_form(&mut builder, form, file)?;
        }

        builder.finalize().map(Some)
    }

    fn analyze_body_form(builder: &mut ComponentBuilder, form: &Ast, file: &Arc<str>) -> Result<()> {
        let span = form.span();
        let (head, args) = match form.as_list().and_then(<[Ast]>::split_first) {
            Some((Ast::Symbol(head, _), args)) => (head.as_str(), args),
            _ => {
                return Err(parse_error(
                    file,
                    span,
                    format!("expected a declaration form, got {}", form.type_name()),
                ));
            }
        };

        match head {
            "doc" => match args {
                [Ast::String(text, _)] => {
                    builder.doc(text.clone());
                    Ok(())
                }
                _ => Err(parse_error(file, span, "doc takes a single string")),
            },
            "property" | "data" => {
                let kind = if head == "property" {
                    AssignKind::Property
                } else {
                    AssignKind::Data
                };
                let Some((name, rest)) = args.split_first() else {
                    return Err(parse_error(file, span, format!("{head} requires a name")));
                };
                let (ty, tail) = match rest.split_first() {
                    Some((ty, tail)) => (Some(ty), tail),
                    None => (None, rest),
                };
                builder.declare(kind, name, ty, &options_expr(tail, span), span)?;
                Ok(())
            }
            "context" => {
                let [action, name, rest @ ..] = args else {
                    return Err(parse_error(
                        file,
                        span,
                        "context requires an action and a name",
                    ));
                };
                let (ty, tail) = split_context_type(rest);
                builder.context(action, name, ty, &options_expr(tail, span), span)?;
                Ok(())
            }
            "defn" => match args {
                [Ast::Symbol(name, _), Ast::Vector(params, _), ..] => {
                    builder.define_function(name.clone(), params.len());
                    Ok(())
                }
                _ => Err(parse_error(
                    file,
                    span,
                    "defn requires a name and a parameter vector",
                )),
            },
            other => Err(parse_error(
                file,
                span,
                format!("unexpected form ({other} ...) in component"),
            )),
        }
    }
}

/// Splits an optional type token off the forms after a context name.
///
/// A type is present when an odd number of forms follows and the first is
/// not an option collection, or when a token is followed by exactly one
/// option collection.
fn split_context_type(rest: &[Ast]) -> (Option<&Ast>, &[Ast]) {
    match rest {
        [first, tail @ ..] if rest.len() % 2 == 1 && !is_option_collection(first) => {
            (Some(first), tail)
        }
        [first, second] if !is_option_collection(first) && is_option_collection(second) => {
            (Some(first), &rest[1..])
        }
        _ => (None, rest),
    }
}

fn is_option_collection(ast: &Ast) -> bool {
    matches!(ast, Ast::Vector(..) | Ast::Map(..) | Ast::Nil(_))
}

/// Builds the option expression from trailing forms.
///
/// A single collection is used as written; anything else is read as
/// keyword/value pairs.
fn options_expr(tail: &[Ast], span: Span) -> Ast {
    match tail {
        [] => Ast::Vector(Vec::new(), span),
        [single] if is_option_collection(single) => single.clone(),
        pairs => Ast::Vector(pairs.to_vec(), span),
    }
}

fn parse_error(file: &Arc<str>, span: Span, message: impl Into<String>) -> Error {
    Error::parse(message, span.line, span.column).with_context(ErrorContext::new().with_file(&**file))
}
