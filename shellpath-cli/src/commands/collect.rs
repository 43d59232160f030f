//! Command to expand a collection pattern.

use crate::error::CliError;
use crate::utils::{filesystem, GlobalOptions};
use clap::Args;

/// List the files matching a pattern, one per line.
///
/// The directory part of a wildcard pattern may list several search roots
/// separated by `:`.
#[derive(Args)]
pub struct CollectCommand {
    /// Pattern, e.g. `/src/a:/src/b/*.c`
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Print a JSON array instead of lines
    #[arg(long)]
    pub json: bool,
}

impl CollectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let files = filesystem(global)?.collect_files(&self.pattern)?;

        if self.json {
            let json = serde_json::to_string_pretty(&files)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{json}");
        } else {
            for file in &files {
                println!("{file}");
            }
        }
        Ok(())
    }
}
