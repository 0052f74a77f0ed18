//! Structural validation of a single declaration.
//!
//! Validation is an ordered pipeline; the first failing stage aborts:
//!
//! 1. name shape
//! 2. type membership
//! 3. option shape
//! 4. option membership for `(kind, type, action)`
//! 5. per-key value checks
//! 6. required options
//!
//! The engine-internal `action` and `to` keys are merged into the option
//! mapping after the shape stage. They are always permitted and never shown
//! in the list of available options.

use trellis_foundation::{AssignKind, AssignType, Error, Result};
use trellis_language::Ast;
use trellis_language::pretty::render;

use crate::assign::{ContextAction, ContextScope};
use crate::options::Options;

/// Option keys the engine writes itself.
pub const INTERNAL_OPTIONS: [&str; 2] = ["action", "to"];

/// The raw parts of one declaration call.
#[derive(Clone, Copy, Debug)]
pub struct Declaration<'a> {
    /// Which macro declared it.
    pub kind: AssignKind,
    /// The name token as written.
    pub name: &'a Ast,
    /// The type token, if one was written.
    pub ty: Option<&'a Ast>,
    /// The option expression as written.
    pub options: &'a Ast,
    /// Operational mode, for context declarations.
    pub action: Option<ContextAction>,
    /// Identity of the declaring component.
    pub owner: &'a str,
}

/// A declaration that passed every stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated {
    /// The bare identifier.
    pub name: String,
    /// The resolved type.
    pub ty: AssignType,
    /// Normalized options, internal keys included.
    pub options: Options,
}

/// Returns the author-facing option keys allowed for a declaration.
#[must_use]
pub fn allowed_options(
    kind: AssignKind,
    ty: AssignType,
    action: Option<ContextAction>,
) -> &'static [&'static str] {
    match (kind, ty, action) {
        (AssignKind::Property, AssignType::List, _) => &["required", "default", "binding"],
        (AssignKind::Property, AssignType::Children, _) => &["required", "group", "use_bindings"],
        (AssignKind::Property, _, _) => &["required", "default", "values"],
        (AssignKind::Data, _, _) => &["default", "values"],
        (AssignKind::Context, _, Some(ContextAction::Get)) => &["from", "as"],
        (AssignKind::Context, _, Some(ContextAction::Set)) => &["scope"],
        (AssignKind::Context, _, None) => &[],
    }
}

/// Runs the validation pipeline over one declaration.
///
/// # Errors
/// Returns the error of the first failing stage.
pub fn validate(decl: &Declaration<'_>) -> Result<Validated> {
    if decl.kind == AssignKind::Context && decl.action.is_none() {
        return Err(Error::invalid_context_action("nil"));
    }

    let name = check_name(decl.name)?;
    let ty = check_type(decl)?;

    let mut options = Options::from_expr(decl.options)?;
    if let Some(action) = decl.action {
        options.insert("action", Ast::keyword(action.name()));
        if action == ContextAction::Set {
            options.insert("to", Ast::symbol(decl.owner));
        }
    }

    let allowed = allowed_options(decl.kind, ty, decl.action);
    check_membership(&options, allowed)?;
    check_values(&options)?;
    check_required(decl, &options)?;

    Ok(Validated { name, ty, options })
}

fn check_name(name: &Ast) -> Result<String> {
    name.as_identifier()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_name(render(name)))
}

fn check_type(decl: &Declaration<'_>) -> Result<AssignType> {
    let Some(token) = decl.ty else {
        return match decl.action {
            Some(ContextAction::Get) => Ok(AssignType::Any),
            Some(ContextAction::Set) => Err(Error::set_requires_type()),
            None => Err(Error::missing_type()),
        };
    };
    token
        .as_keyword()
        .and_then(AssignType::from_name)
        .ok_or_else(|| Error::unknown_type(render(token)))
}

fn check_membership(options: &Options, allowed: &[&str]) -> Result<()> {
    let unknown: Vec<String> = options
        .keys()
        .filter(|key| !allowed.contains(key) && !INTERNAL_OPTIONS.contains(key))
        .map(str::to_string)
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::unknown_options(unknown, allowed))
    }
}

fn check_values(options: &Options) -> Result<()> {
    for (key, value) in options.iter() {
        let expected = match key {
            "required" if value.as_bool().is_none() => "a boolean",
            "values" if value.as_sequence().is_none() => "a list",
            "scope" if value.as_keyword().and_then(ContextScope::from_name).is_none() => {
                "one of [:only_children, :self_and_children]"
            }
            "from" if value.as_component_ref().is_none() => "a component",
            "as" if value.as_keyword().is_none() => "a keyword",
            _ => continue,
        };
        return Err(Error::invalid_option_value(key, expected, render(value)));
    }
    Ok(())
}

fn check_required(decl: &Declaration<'_>, options: &Options) -> Result<()> {
    if decl.action == Some(ContextAction::Get) && !options.contains("from") {
        return Err(Error::missing_options(&["from"]));
    }
    Ok(())
}
