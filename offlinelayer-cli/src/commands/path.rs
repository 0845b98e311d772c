//! Path command: print the default offline tiles directory.

use offlinelayer::config::default_offline_dir;

use crate::error::CliError;

/// Run the path command.
pub fn run() -> Result<(), CliError> {
    println!("{}", default_offline_dir().display());
    Ok(())
}
