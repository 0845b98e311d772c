//! Scan command: list entries in the offline tiles directory.

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use offlinelayer::archive::{
    ArchiveFormatRegistry, CandidateScan, EntryDisposition, ExtensionRegistry, ScanEntry,
};

use crate::error::CliError;

/// Arguments for `offlinelayer scan`.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan (defaults to the configured offline tiles directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Emit machine-readable JSON instead of the listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ScanReport<'a> {
    directory: String,
    entries: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    entry: &'a ScanEntry,
    registered: bool,
}

/// Run the scan command.
pub fn run(args: ScanArgs) -> Result<(), CliError> {
    let dir = super::resolve_dir(args.dir)?;
    tracing::debug!("Scanning {}", dir.display());
    let registry = ExtensionRegistry::with_defaults();
    let scan = CandidateScan::new(&dir);

    if !scan.exists() {
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&ScanReport {
                    directory: dir.display().to_string(),
                    entries: Vec::new(),
                })?
            );
        } else {
            println!("Offline tiles directory not found: {}", dir.display());
            println!();
            println!("To add offline archives, create the directory and place tile");
            println!("archive files ({}) inside:", supported_extensions(&registry));
            println!("  mkdir -p {}", dir.display());
        }
        return Ok(());
    }

    let entries = scan.entries()?;

    if args.json {
        let report = ScanReport {
            directory: dir.display().to_string(),
            entries: entries
                .iter()
                .map(|entry| ReportEntry {
                    registered: entry
                        .extension
                        .as_deref()
                        .is_some_and(|ext| registry.is_extension_registered(ext)),
                    entry,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Offline tiles directory: {}", dir.display());
    println!();

    if entries.is_empty() {
        println!("No entries found.");
        println!();
        println!(
            "Place tile archive files ({}) in the directory.",
            supported_extensions(&registry)
        );
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry, &registry);
    }

    let usable = entries
        .iter()
        .filter(|e| {
            e.extension
                .as_deref()
                .is_some_and(|ext| registry.is_extension_registered(ext))
        })
        .count();
    println!();
    println!("{} of {} entries are usable archives.", usable, entries.len());

    Ok(())
}

fn print_entry(entry: &ScanEntry, registry: &ExtensionRegistry) {
    match entry.disposition {
        EntryDisposition::Directory => {
            println!("  {} {} (directory, skipped)", style("-").dim(), entry.name);
        }
        EntryDisposition::NoExtension => {
            println!(
                "  {} {} (no extension, skipped)",
                style("-").dim(),
                entry.name
            );
        }
        EntryDisposition::Candidate => {
            let ext = entry.extension.as_deref().unwrap_or_default();
            if registry.is_extension_registered(ext) {
                println!("  {} {} ({})", style("✓").green(), entry.name, ext);
            } else {
                println!(
                    "  {} {} (unregistered format '{}')",
                    style("✗").red(),
                    entry.name,
                    ext
                );
            }
        }
    }
}

fn supported_extensions(registry: &ExtensionRegistry) -> String {
    registry
        .extensions()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}
