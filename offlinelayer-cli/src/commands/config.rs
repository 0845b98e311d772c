//! Config command: show the resolved feature configuration.

use std::path::PathBuf;

use clap::Args;

use offlinelayer::config::{config_file_path, FeatureConfig};

use crate::error::CliError;

/// Arguments for `offlinelayer config`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Config file to load (defaults to ~/.offlinelayer/config.ini)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Run the config command.
pub fn run(args: ConfigArgs) -> Result<(), CliError> {
    let path = args.file.unwrap_or_else(config_file_path);
    let config = FeatureConfig::load_from(&path)?;

    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("  (not present; showing defaults)");
    }
    println!();
    println!("[tiles]");
    println!("directory = {}", config.offline_dir.display());
    println!("debug = {}", config.debug);
    println!();
    println!("[zoom]");
    println!("minimum = {}", config.minimum_zoom);
    println!("maximum = {}", config.maximum_zoom);

    Ok(())
}
