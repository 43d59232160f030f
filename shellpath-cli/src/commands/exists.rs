//! Command to check that paths exist.

use crate::error::CliError;
use crate::utils::{filesystem, GlobalOptions};
use clap::Args;

/// Check that every path exists.
///
/// Exits with status 1 when any path is missing.
#[derive(Args)]
pub struct ExistsCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print one `true`/`false` line per path
    #[arg(long)]
    pub print: bool,
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = filesystem(global)?;
        let found = fs.exists_all(&self.paths);

        if self.print {
            for present in &found {
                println!("{present}");
            }
        }

        let missing: Vec<&str> = self
            .paths
            .iter()
            .zip(&found)
            .filter(|(_, present)| !**present)
            .map(|(path, _)| path.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "not found: {}",
                missing.join(", ")
            )))
        }
    }
}
