//! Commands converting between shell and host form.

use crate::error::CliError;
use crate::utils::{path_env, GlobalOptions};
use clap::Args;

/// Print the host form of a shell-form path.
#[derive(Args)]
pub struct HostCommand {
    /// Path in shell form
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl HostCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.to_host(&self.path));
        Ok(())
    }
}

/// Print the shell form of a host-form path.
#[derive(Args)]
pub struct ShellCommand {
    /// Path in host form
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ShellCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", path_env(global)?.to_shell(&self.path));
        Ok(())
    }
}
