//! clausa command-line entry point

use clap::Parser;
use clausa_cli::commands::Commands;

/// Contract clause segmentation for OCR-damaged legal text
#[derive(Debug, Parser)]
#[command(name = "clausa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
