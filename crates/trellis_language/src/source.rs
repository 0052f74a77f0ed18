//! Source files and positions within them.

use std::sync::Arc;

/// A span of source text.
///
/// Byte offsets locate the text; line and column are 1-based and point at
/// the first character, which is what diagnostics report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub line: u32,
    /// 1-based column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// A zero-width span at the given line, for declarations built in code.
    #[must_use]
    pub const fn line(line: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column: 1,
        }
    }

    /// Joins two spans, keeping the start position of `self`.
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end.max(self.end),
            line: self.line,
            column: self.column,
        }
    }
}

/// A named piece of declaration source.
///
/// The name is shared (`Arc<str>`) because every declaration site in the
/// file refers back to it.
#[derive(Clone, Debug)]
pub struct SourceFile {
    name: Arc<str>,
    text: String,
}

impl SourceFile {
    /// Creates a source file from its display name and contents.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// The display name (usually the path it was read from).
    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// The full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text a span covers, or `None` if it is out of range.
    #[must_use]
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.start..span.end)
    }

    /// Returns the 1-based line `line`, without its terminator.
    #[must_use]
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.text.lines().nth(index)
    }
}
