//! Tactical comment aligner
//!
//! This module ties the pieces together: the source is split into lines, one
//! comment column is selected for all of them and every line is rewritten
//! against that column.

use crate::column::{ColumnSelection, DEFAULT_MIN_COLUMN, MAX_MIN_COLUMN};
use crate::comment::{classify, LineKind};
use crate::error::{Error as AlignError, Result as AlignResult};
use crate::rewriter::rewrite_line;
use serde::Serialize;

/// Options controlling an alignment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOptions {
    /// Minimum comment column (0-based)
    pub min_column: usize,
    /// Keep a missing final newline missing instead of adding one
    pub preserve_final_newline: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            min_column: DEFAULT_MIN_COLUMN,
            preserve_final_newline: false,
        }
    }
}

impl AlignOptions {
    /// Options with the given minimum column
    pub fn new(min_column: usize) -> Self {
        Self {
            min_column,
            ..Self::default()
        }
    }

    /// Build options from raw command-line values
    pub fn from_cli(min_column: i64, preserve_final_newline: bool) -> AlignResult<Self> {
        let min_column = usize::try_from(min_column).map_err(|_| {
            AlignError::invalid_argument(format!(
                "minimum column must be non-negative, got {}",
                min_column
            ))
        })?;
        if min_column > MAX_MIN_COLUMN {
            return Err(AlignError::invalid_argument(format!(
                "minimum column must be at most {}, got {}",
                MAX_MIN_COLUMN, min_column
            )));
        }

        Ok(Self {
            min_column,
            preserve_final_newline,
        })
    }
}

/// Summary of what an alignment run did (or would do) to a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignReport {
    /// Minimum column the selection started from (0-based)
    pub min_column: usize,
    /// Selected comment column (0-based)
    pub column: usize,
    /// Selected comment column (1-based)
    pub column_one_based: usize,
    /// Number of lines in the source
    pub total_lines: usize,
    /// Lines carrying a tactical comment
    pub tactical_lines: usize,
    /// Lines carrying a strategic comment
    pub strategic_lines: usize,
    /// Lines whose text changes
    pub changed_lines: usize,
    /// Line (1-based) that pushed the column past the minimum
    pub widest_code_line: Option<usize>,
}

/// Split source text into `\n` terminated lines.
///
/// A final newline terminates the last line rather than starting an empty
/// one. Blank lines in between (and trailing blank lines) are kept.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split_terminator('\n').collect()
}

/// Main aligner struct
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    options: AlignOptions,
}

impl Aligner {
    /// Create a new aligner
    pub fn new(options: AlignOptions) -> Self {
        Aligner { options }
    }

    /// Align all tactical comments in `source`
    pub fn transform(&self, source: &str) -> String {
        self.run(source).0
    }

    /// Report the column and line counts for `source` without keeping the
    /// rewritten text
    pub fn inspect(&self, source: &str) -> AlignReport {
        self.run(source).1
    }

    /// Align and report in one pass
    pub fn transform_with_report(&self, source: &str) -> (String, AlignReport) {
        self.run(source)
    }

    fn run(&self, source: &str) -> (String, AlignReport) {
        let lines = split_lines(source);
        let selection = ColumnSelection::compute(&lines, self.options.min_column);
        let column = selection.column;

        let mut output = String::with_capacity(source.len() + lines.len());
        let mut tactical_lines = 0;
        let mut strategic_lines = 0;
        let mut changed_lines = 0;

        for (index, line) in lines.iter().enumerate() {
            match classify(line) {
                LineKind::Tactical => tactical_lines += 1,
                LineKind::Strategic => strategic_lines += 1,
                LineKind::Plain => {}
            }

            let rewritten = rewrite_line(line, column);
            if rewritten != *line {
                log::trace!("line {}: comment moved to column {}", index + 1, column);
                changed_lines += 1;
            }

            output.push_str(&rewritten);
            output.push('\n');
        }

        if self.options.preserve_final_newline && !source.ends_with('\n') {
            output.pop();
        }

        log::debug!(
            "aligned {} tactical comments at column {} ({} of {} lines changed)",
            tactical_lines,
            column + 1,
            changed_lines,
            lines.len()
        );

        let report = AlignReport {
            min_column: selection.min_column,
            column,
            column_one_based: column + 1,
            total_lines: lines.len(),
            tactical_lines,
            strategic_lines,
            changed_lines,
            widest_code_line: selection.widest_line.map(|index| index + 1),
        };

        (output, report)
    }
}

/// Align the tactical comments of `source` with the given minimum column
pub fn transform(source: &str, min_column: usize) -> String {
    Aligner::new(AlignOptions::new(min_column)).transform(source)
}

/// Align the tactical comments of `source` with the default minimum column
pub fn align(source: &str) -> String {
    transform(source, DEFAULT_MIN_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n\nb\n\n"), vec!["a", "", "", "b", ""]);
    }

    #[test]
    fn test_from_cli_rejects_negative_minimum() {
        let err = AlignOptions::from_cli(-1, false).unwrap_err();
        assert!(matches!(err, AlignError::InvalidArgument { .. }));
    }

    #[test]
    fn test_from_cli_rejects_minimum_above_limit() {
        let err = AlignOptions::from_cli(i64::MAX, false).unwrap_err();
        assert!(matches!(err, AlignError::InvalidArgument { .. }));
        let options = AlignOptions::from_cli(MAX_MIN_COLUMN as i64, false).unwrap();
        assert_eq!(options.min_column, MAX_MIN_COLUMN);
    }

    #[test]
    fn test_huge_minimum_does_not_panic() {
        assert_eq!(transform("plain\n", usize::MAX), "plain\n");
        let output = transform("a; // x\n", usize::MAX);
        assert_eq!(output.find("//"), Some(MAX_MIN_COLUMN));
    }

    #[test]
    fn test_from_cli_accepts_zero() {
        let options = AlignOptions::from_cli(0, true).unwrap();
        assert_eq!(options.min_column, 0);
        assert!(options.preserve_final_newline);
    }

    #[test]
    fn test_preserve_final_newline() {
        let aligner = Aligner::new(AlignOptions {
            min_column: 0,
            preserve_final_newline: true,
        });
        assert_eq!(aligner.transform("a; // x"), "a;       // x");
        assert_eq!(aligner.transform("a; // x\n"), "a;       // x\n");
        assert_eq!(aligner.transform(""), "");
    }
}
