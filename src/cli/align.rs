use crate::aligner::{AlignOptions, Aligner};
use crate::cli::utils::{read_input, write_output};
use crate::error::{Error as AlignError, Result as AlignResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Arguments for the align command
#[derive(Debug, Clone)]
pub struct AlignArgs {
    pub inputs: Vec<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub min_column: i64,
    pub preserve_final_newline: bool,
    pub in_place: bool,
}

impl AlignArgs {
    /// Convert to AlignOptions
    pub fn to_options(&self) -> AlignResult<AlignOptions> {
        AlignOptions::from_cli(self.min_column, self.preserve_final_newline)
    }
}

/// Run the align subcommand
pub fn align(args: &AlignArgs) -> AlignResult<()> {
    let aligner = Aligner::new(args.to_options()?);

    if args.in_place {
        if args.inputs.is_empty() {
            return Err(AlignError::invalid_argument(
                "--in-place needs at least one input file",
            ));
        }
        if args.output_path.is_some() {
            return Err(AlignError::invalid_argument(
                "--in-place cannot be combined with --output",
            ));
        }

        let changed = args
            .inputs
            .par_iter()
            .map(|path| align_in_place(&aligner, path))
            .collect::<AlignResult<Vec<bool>>>()?;

        log::info!(
            "{} of {} files changed",
            changed.iter().filter(|c| **c).count(),
            changed.len()
        );
        return Ok(());
    }

    if args.inputs.len() > 1 {
        return Err(AlignError::invalid_argument(
            "several input files need --in-place",
        ));
    }

    let source = read_input(args.inputs.first().map(|p| p.as_path()))?;
    let output = aligner.transform(&source);
    write_output(&output, args.output_path.as_deref())
}

/// Align one file in place, returning whether its contents changed
fn align_in_place(aligner: &Aligner, path: &Path) -> AlignResult<bool> {
    let source = read_input(Some(path))?;
    let output = aligner.transform(&source);

    if output == source {
        log::debug!("{} already aligned", path.display());
        return Ok(false);
    }

    write_output(&output, Some(path))?;
    Ok(true)
}
