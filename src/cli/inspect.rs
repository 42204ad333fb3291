use crate::aligner::{AlignOptions, Aligner};
use crate::cli::utils::read_input;
use crate::error::Result as AlignResult;
use std::path::Path;

/// Run the inspect subcommand
pub fn inspect(input_path: Option<&Path>, min_column: i64) -> AlignResult<()> {
    let options = AlignOptions::from_cli(min_column, false)?;
    let source = read_input(input_path)?;

    let report = Aligner::new(options).inspect(&source);

    // Output as JSON
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);

    Ok(())
}
