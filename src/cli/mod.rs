//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod align;
pub mod inspect;

/// Common CLI utilities
pub mod utils {
    use crate::error::{Error as AlignError, Result as AlignResult};
    use std::io::{Read, Write};
    use std::path::Path;

    /// Read source text from a file, or all of stdin when no path is given
    pub fn read_input(input_path: Option<&Path>) -> AlignResult<String> {
        match input_path {
            Some(path) => {
                log::info!("reading {}", path.display());
                std::fs::read_to_string(path).map_err(|e| {
                    AlignError::Io(format!("Failed to read {}: {}", path.display(), e))
                })
            }
            None => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .map_err(|e| AlignError::Io(format!("Failed to read stdin: {}", e)))?;
                Ok(source)
            }
        }
    }

    /// Write output to a file or stdout, exactly as given
    pub fn write_output(content: &str, output_path: Option<&Path>) -> AlignResult<()> {
        match output_path {
            Some(path) => {
                log::info!("writing {}", path.display());
                std::fs::write(path, content).map_err(|e| {
                    AlignError::Io(format!("Failed to write {}: {}", path.display(), e))
                })
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle
                    .write_all(content.as_bytes())
                    .and_then(|_| handle.flush())
                    .map_err(AlignError::from)
            }
        }
    }
}
