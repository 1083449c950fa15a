//! CLI entry point for seeded background pattern generation

use clap::Parser;
use seedpattern::io::cli::{Cli, PatternProcessor, init_tracing};

fn main() -> seedpattern::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());
    let mut processor = PatternProcessor::new(cli);
    processor.process()
}
