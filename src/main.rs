//! CLI entry point for the wave function collapse tile generator

use clap::Parser;
use wavetile::io::cli::{Cli, FileProcessor};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
