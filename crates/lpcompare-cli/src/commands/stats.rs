//! Stats command
//!
//! Usage: lpcompare stats <FILE> [--json]

use clap::Args;
use lpcompare_core::read_model_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// LP file to load
    pub file: PathBuf,

    /// Print the counts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stats = read_model_file(&args.file)?.stats();

    if args.json {
        println!("{}", stats.to_json()?);
    } else {
        print!("{}", stats);
    }

    Ok(())
}
