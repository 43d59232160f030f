//! Command to delete a directory tree.

use crate::error::CliError;
use crate::utils::{filesystem, GlobalOptions};
use clap::Args;

/// Delete a directory tree, removing as much as possible.
///
/// Each entry that cannot be removed is reported on stderr; the command
/// then exits with status 1.
#[derive(Args)]
pub struct RemoveAllCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RemoveAllCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = filesystem(global)?.remove_all(&self.path);

        if report.is_complete() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} entries could not be removed ({} removed)",
                report.failures.len(),
                report.removed
            )))
        }
    }
}
