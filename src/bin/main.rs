//! MA Converter CLI
//!
//! Convert CompactMachines3 structure JSON files to Machinery Assembler format.

use clap::Parser;
use ma_converter::{run, ConvertConfig};
use std::path::PathBuf;
use std::process::ExitCode;

const AFTER_HELP: &str = "\
Examples:
  ma-converter recipe.json                    # Convert single file
  ma-converter recipe.json output.json        # Convert with custom output
  ma-converter ./recipes/                     # Convert all in directory
  ma-converter ./recipes/ ./converted/        # Convert to custom directory";

#[derive(Parser)]
#[command(name = "ma-converter")]
#[command(
    author,
    version,
    about = "Convert CompactMachines3 structure JSON files to Machinery Assembler format",
    long_about = None,
    after_help = AFTER_HELP
)]
struct Cli {
    /// Input file or directory
    input: PathBuf,

    /// Output file or directory
    output: Option<PathBuf>,

    /// Convert without writing output files
    #[arg(long)]
    dry: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = ConvertConfig {
        input: cli.input,
        output: cli.output,
        dry_run: cli.dry,
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
