//! OfflineLayer CLI - Command-line interface
//!
//! Diagnostics over the offline tiles directory: list candidate archives,
//! dry-run the selection, and inspect the resolved configuration.

mod commands;
mod error;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "offlinelayer")]
#[command(version = offlinelayer::VERSION)]
#[command(about = "Inspect offline map tile archive directories", long_about = None)]
struct Cli {
    /// Enable debug-level log output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List directory entries and how the scanner classifies them
    Scan(commands::scan::ScanArgs),

    /// Dry-run the archive selection and report the file setup would choose
    Select(commands::select::SelectArgs),

    /// Show the resolved feature configuration
    Config(commands::config::ConfigArgs),

    /// Print the default offline tiles directory
    Path,
}

fn main() {
    let cli = Cli::parse();

    offlinelayer::logging::init_console_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Select(args) => commands::select::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Path => commands::path::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
