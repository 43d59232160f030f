//! Command to create a directory and its parents.

use crate::error::CliError;
use crate::utils::{filesystem, GlobalOptions};
use clap::Args;

/// Create a directory, including missing parents.
///
/// Succeeds if the directory already exists.
#[derive(Args)]
pub struct MkdirCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        filesystem(global)?.mkdir(&self.path)?;
        Ok(())
    }
}
