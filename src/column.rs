//! Comment column selection
//!
//! One column is chosen for a whole file: the first column that leaves a
//! blank between the longest tactically commented code and its comment,
//! never left of the configured minimum, snapped right onto a ten column
//! boundary (1-based numbering, so 0-based columns 9, 19, 29, ...).

use crate::comment::LineComment;

/// The default minimum column index (column 70 using 1-based numbering)
pub const DEFAULT_MIN_COLUMN: usize = 69;

/// Width of the alignment grid
pub const COLUMN_BOUNDARY: usize = 10;

/// Largest accepted minimum column; larger requests are clamped to it
pub const MAX_MIN_COLUMN: usize = 9_999;

/// Rightmost 0-based column that still sits on a boundary
pub const LAST_BOUNDARY: usize = (usize::MAX / COLUMN_BOUNDARY) * COLUMN_BOUNDARY - 1;

/// Move a 0-based column right until its 1-based number is a multiple of
/// [`COLUMN_BOUNDARY`].
///
/// Columns past [`LAST_BOUNDARY`] saturate there.
pub fn snap_to_boundary(column: usize) -> usize {
    if column >= LAST_BOUNDARY {
        return LAST_BOUNDARY;
    }

    let base_one = column + 1;
    let misalignment = base_one % COLUMN_BOUNDARY;
    let shift = if misalignment != 0 {
        COLUMN_BOUNDARY - misalignment
    } else {
        0
    };
    column + shift
}

/// Outcome of a column selection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    /// The floor the selection started from
    pub min_column: usize,
    /// Rightmost required column before snapping
    pub candidate: usize,
    /// Selected 0-based comment column
    pub column: usize,
    /// Index of the line that pushed the candidate past the minimum
    pub widest_line: Option<usize>,
}

impl ColumnSelection {
    /// Scan all lines and select the comment column.
    ///
    /// A minimum above [`MAX_MIN_COLUMN`] is clamped.
    pub fn compute(lines: &[&str], min_column: usize) -> Self {
        let min_column = min_column.min(MAX_MIN_COLUMN);
        let mut candidate = min_column;
        let mut widest_line = None;

        for (index, line) in lines.iter().enumerate() {
            let end = match LineComment::split(line) {
                Some(split) if split.is_tactical() => split.end_of_code().unwrap_or(0),
                _ => continue,
            };

            // One blank column between code and comment
            let required = end + 2;
            if required > candidate {
                candidate = required;
                widest_line = Some(index);
            }
        }

        let column = snap_to_boundary(candidate);
        log::trace!(
            "column selection: min {} candidate {} column {}",
            min_column,
            candidate,
            column
        );

        ColumnSelection {
            min_column,
            candidate,
            column,
            widest_line,
        }
    }
}

/// Select the comment column for the given lines
pub fn select_column(lines: &[&str], min_column: usize) -> usize {
    ColumnSelection::compute(lines, min_column).column
}
