use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use align_comments::cli;
use align_comments::DEFAULT_MIN_COLUMN;

#[derive(Parser)]
#[command(name = "align-comments")]
#[command(about = "Align trailing line comments to a common column")]
#[command(version)]
struct Cli {
    /// Without a subcommand, stdin is aligned to stdout
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Align tactical comments (stdin to stdout when no input is given)
    Align {
        /// Input source files
        inputs: Vec<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum comment column (0-based)
        #[arg(short, long, default_value_t = DEFAULT_MIN_COLUMN as i64, allow_negative_numbers = true)]
        min_column: i64,

        /// Do not add a newline to input that lacks a final one
        #[arg(long)]
        preserve_final_newline: bool,

        /// Rewrite the input files in place
        #[arg(short, long)]
        in_place: bool,
    },

    /// Print the selected column and line statistics as JSON
    Inspect {
        /// Input source file (defaults to stdin)
        input: Option<PathBuf>,

        /// Minimum comment column (0-based)
        #[arg(short, long, default_value_t = DEFAULT_MIN_COLUMN as i64, allow_negative_numbers = true)]
        min_column: i64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            let args = cli::align::AlignArgs {
                inputs: Vec::new(),
                output_path: None,
                min_column: DEFAULT_MIN_COLUMN as i64,
                preserve_final_newline: false,
                in_place: false,
            };
            cli::align::align(&args).map_err(|e| miette!("{}", e))
        }
        Some(Commands::Align {
            inputs,
            output,
            min_column,
            preserve_final_newline,
            in_place,
        }) => {
            let args = cli::align::AlignArgs {
                inputs,
                output_path: output,
                min_column,
                preserve_final_newline,
                in_place,
            };
            cli::align::align(&args).map_err(|e| miette!("{}", e))
        }
        Some(Commands::Inspect { input, min_column }) => {
            cli::inspect::inspect(input.as_deref(), min_column).map_err(|e| miette!("{}", e))
        }
    }
}
