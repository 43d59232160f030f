//! Command to mirror one directory tree into another.

use crate::error::CliError;
use crate::utils::{filesystem, GlobalOptions};
use clap::Args;

/// Copy the contents of SRC into DST, recreating symbolic links.
///
/// Conflicting links in DST are replaced with a warning. The copy stops at
/// the first entry that cannot be copied.
#[derive(Args)]
pub struct CopyTreeCommand {
    #[arg(value_name = "SRC")]
    pub src: String,

    #[arg(value_name = "DST")]
    pub dst: String,
}

impl CopyTreeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = filesystem(global)?.copy_tree(&self.src, &self.dst)?;

        if !global.quiet {
            println!(
                "copied {} files, {} links ({} unchanged), created {} directories",
                report.files_copied,
                report.links_created,
                report.links_unchanged,
                report.directories_created
            );
            if !report.is_clean() {
                println!("replaced {} conflicting entries", report.conflicts.len());
            }
        }
        Ok(())
    }
}
