//! Compare command
//!
//! Usage: lpcompare compare <FIRST> <SECOND> [--dump-prefix <P>] [--dump-diffs <BOOL>] [--dump-dir <DIR>] [--json]

use clap::{ArgAction, Args};
use lpcompare_core::compare::DEFAULT_DUMP_PREFIX;
use lpcompare_core::{compare_files, render_summary, CompareOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First LP file
    pub first: PathBuf,

    /// Second LP file
    pub second: PathBuf,

    /// File name prefix of the difference dumps
    #[arg(long, default_value = DEFAULT_DUMP_PREFIX)]
    pub dump_prefix: String,

    /// Write difference dump files
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub dump_diffs: bool,

    /// Directory receiving the dump files
    #[arg(long, default_value = ".")]
    pub dump_dir: PathBuf,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    fn options(&self) -> CompareOptions {
        CompareOptions {
            dump_prefix: self.dump_prefix.clone(),
            dump_diffs: self.dump_diffs,
            dump_dir: self.dump_dir.clone(),
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(
        first = %args.first.display(),
        second = %args.second.display(),
        "comparing models"
    );

    let outcome = compare_files(&args.first, &args.second, &args.options())?;

    if args.json {
        println!("{}", outcome.to_json()?);
        return Ok(());
    }

    println!("First model: {}", args.first.display());
    print!("{}", outcome.first_stats);
    println!("Second model: {}", args.second.display());
    print!("{}", outcome.second_stats);
    println!();
    print!("{}", render_summary(&outcome.diff));

    for path in &outcome.dump_files {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
