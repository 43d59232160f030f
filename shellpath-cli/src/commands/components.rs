//! Commands taking paths apart and putting them together.

use crate::error::CliError;
use crate::utils::{path_env, GlobalOptions};
use clap::Args;

/// Print the final component of a path.
#[derive(Args)]
pub struct BasenameCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.basename(&self.path));
        Ok(())
    }
}

/// Print everything but the final component of a path.
#[derive(Args)]
pub struct DirnameCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.dirname(&self.path));
        Ok(())
    }
}

/// Join segments onto a base path.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Segments appended with a single separator each
    #[arg(value_name = "SEG", required = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.join(&self.base, &self.segments));
        Ok(())
    }
}

/// Print the absolute, normalized form of a path.
#[derive(Args)]
pub struct AbspathCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbspathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.abspath(&self.path)?);
        Ok(())
    }
}

/// Print the root and extension of a path on two lines.
#[derive(Args)]
pub struct SplitextCommand {
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl SplitextCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (root, ext) = path_env(global)?.splitext(&self.path);
        println!("{root}");
        println!("{ext}");
        Ok(())
    }
}
