//! lpcompare CLI
//!
//! Compare two CPLEX LP files and report their structural differences.

use clap::{Parser, Subcommand, ValueEnum};
use lpcompare_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lpcompare")]
#[command(about = "Structural diff of CPLEX LP model files", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two LP files
    Compare(commands::compare::CompareArgs),
    /// Print entity counts of one LP file
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
