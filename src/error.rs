use miette::Diagnostic;
use thiserror::Error;

/// Result type for comment alignment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the alignment core.
///
/// The transform itself is total over all text; these only come from
/// argument validation and the I/O performed by callers.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(align_comments::io_error))]
    Io(String),

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(align_comments::invalid_argument))]
    InvalidArgument { message: String },

    #[error("Failed to serialize report: {message}")]
    #[diagnostic(code(align_comments::serialize_error))]
    Serialize { message: String },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize {
            message: err.to_string(),
        }
    }
}
