//! Select command: dry-run the archive selection.
//!
//! Reports which file the setup procedure would choose. Provider
//! construction lives in the host mapping library, so the dry run stops at
//! the registry check; whether the chosen archive actually opens is only
//! known at setup time.

use std::path::PathBuf;

use clap::Args;
use console::style;

use offlinelayer::archive::{CandidateScan, ExtensionRegistry};

use crate::error::CliError;

/// Arguments for `offlinelayer select`.
#[derive(Args)]
pub struct SelectArgs {
    /// Directory to scan (defaults to the configured offline tiles directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Run the select command.
pub fn run(args: SelectArgs) -> Result<(), CliError> {
    let dir = super::resolve_dir(args.dir)?;
    let registry = ExtensionRegistry::with_defaults();
    let scan = CandidateScan::new(&dir);

    if !scan.exists() {
        println!(
            "{} Offline tiles directory not found: {}",
            style("✗").red(),
            dir.display()
        );
        println!("Setup would leave the map view on its online tile source.");
        return Ok(());
    }

    match scan.first_registered(&registry)? {
        Some(candidate) => {
            println!(
                "{} Setup would choose: {}",
                style("✓").green(),
                candidate.path.display()
            );
            println!("  Format: .{}", candidate.extension);
            println!("  Candidates after it are never examined, even if this one fails to open.");
        }
        None => {
            println!(
                "{} No usable archive in {}",
                style("✗").red(),
                dir.display()
            );
            println!("Setup would leave the map view on its online tile source.");
        }
    }

    Ok(())
}
