//! Line rewriting
//!
//! Moves a tactical comment so that it starts at the selected column. Code is
//! never shortened: when it already reaches past the column the comment
//! follows it directly.

use crate::comment::LineComment;

/// Remove trailing whitespace, keeping indentation
pub fn trim_trailing_whitespace(code: &str) -> &str {
    code.trim_end()
}

/// Place `comment` at `column` after `code`
fn place(code: &str, comment: &str, column: usize) -> String {
    let pad = column.saturating_sub(code.chars().count());

    let mut line = String::with_capacity(code.len() + pad + comment.len());
    line.push_str(code);
    line.extend(std::iter::repeat(' ').take(pad));
    line.push_str(comment);
    line
}

/// Rewrite one line so its tactical comment starts at `column`.
///
/// Lines without a comment and lines with a strategic comment come back
/// unchanged.
pub fn rewrite_line(line: &str, column: usize) -> String {
    match LineComment::split(line) {
        Some(split) if split.is_tactical() => {
            let code = trim_trailing_whitespace(split.code);
            place(code, split.comment, column)
        }
        _ => line.to_string(),
    }
}
