//! align-comments: lines up trailing line comments in source code
//!
//! This library finds the best common column for the tactical (end of line)
//! comments of a source file and rewrites the file so that each of them
//! starts there. Lines without a comment and lines holding only a comment are
//! left exactly as they were.

pub mod aligner;
pub mod cli;
pub mod column;
pub mod comment;
pub mod error;
pub mod rewriter;

pub use aligner::{align, transform, AlignOptions, AlignReport, Aligner};
pub use error::{Error as AlignError, Result as AlignResult};

// Re-export commonly used items
pub use column::{select_column, DEFAULT_MIN_COLUMN};
pub use comment::{classify, LineKind};
