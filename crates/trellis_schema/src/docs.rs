//! Generated property documentation.

use std::fmt::Write;

use crate::assign::Assign;

/// Renders the documentation block for `properties`, in the given order.
///
/// Returns `None` when there are no properties.
///
/// ```
/// # use trellis_schema::docs::property_docs;
/// assert_eq!(property_docs("Properties", std::iter::empty()), None);
/// ```
#[must_use]
pub fn property_docs<'a>(
    heading: &str,
    properties: impl IntoIterator<Item = &'a Assign>,
) -> Option<String> {
    let mut lines = properties.into_iter().map(property_line).peekable();
    lines.peek()?;

    let mut out = format!("## {heading}\n\n");
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    Some(out)
}

fn property_line(property: &Assign) -> String {
    let mut line = format!("* **{}** *{}", property.name, property.ty);
    let options = property.render_options();
    if !options.is_empty() {
        let _ = write!(line, ", {options}");
    }
    line.push('*');
    if let Some(doc) = property.doc.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        let _ = write!(line, " - {doc}");
    }
    line
}

/// Appends `block` to `existing`, or returns `block` when there is none.
#[must_use]
pub fn attach(existing: Option<&str>, block: &str) -> String {
    match existing.map(str::trim_end).filter(|doc| !doc.is_empty()) {
        Some(doc) => format!("{doc}\n\n{block}"),
        None => block.to_string(),
    }
}
