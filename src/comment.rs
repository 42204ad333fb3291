//! Line comment location and classification
//!
//! A line comment is found by a plain substring search for `//`. Nothing here
//! understands the source language, so a marker inside a string or character
//! literal is taken as the start of a comment just like a real one.
//!
//! A comment is *tactical* when it trails code on the same line and
//! *strategic* when it has the line to itself (this includes commented-out
//! code). Only tactical comments take part in alignment.

/// Line comment marker
pub const LINE_COMMENT: &str = "//";

/// Byte index of the first line comment marker in `line`, if any
pub fn locate_line_comment(line: &str) -> Option<usize> {
    line.find(LINE_COMMENT)
}

/// Does this code fragment contain any code at all?
pub fn is_tactical(code: &str) -> bool {
    code.chars().any(|c| !c.is_whitespace())
}

/// How a single line relates to line comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// No comment marker on the line
    Plain,
    /// Comment trailing a code statement
    Tactical,
    /// Comment on an otherwise blank line
    Strategic,
}

/// A line split at its first comment marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineComment<'a> {
    /// Everything before the marker, whitespace untouched
    pub code: &'a str,
    /// The marker and everything after it
    pub comment: &'a str,
}

impl<'a> LineComment<'a> {
    /// Split a line at its first comment marker
    pub fn split(line: &'a str) -> Option<Self> {
        let index = locate_line_comment(line)?;
        let (code, comment) = line.split_at(index);
        Some(LineComment { code, comment })
    }

    /// Is this a tactical comment?
    pub fn is_tactical(&self) -> bool {
        is_tactical(self.code)
    }

    /// Character index of the last non-whitespace character of the code
    pub fn end_of_code(&self) -> Option<usize> {
        let trimmed = self.code.trim_end();
        trimmed.chars().count().checked_sub(1)
    }
}

/// Classify a line
pub fn classify(line: &str) -> LineKind {
    match LineComment::split(line) {
        None => LineKind::Plain,
        Some(split) if split.is_tactical() => LineKind::Tactical,
        Some(_) => LineKind::Strategic,
    }
}
