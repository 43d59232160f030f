//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbspathCommand, BasenameCommand, CollectCommand, CopyTreeCommand, DirnameCommand,
    ExistsCommand, HostCommand, JoinCommand, MkdirCommand, RemoveAllCommand, ShellCommand,
    SplitextCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shell-form path conversion and tree operations for build scripts.
#[derive(Parser)]
#[command(name = "shellpath")]
#[command(version, about = "Convert shell-form paths and operate on directory trees", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path rules to apply: auto, posix or windows
    #[arg(
        long,
        value_name = "FAMILY",
        global = true,
        env = "SHELLPATH_HOST_FAMILY"
    )]
    pub host_family: Option<String>,

    /// Read an additional configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a shell-form path to host form
    Host(HostCommand),

    /// Convert a host-form path to shell form
    Shell(ShellCommand),

    /// Print the final component of a path
    Basename(BasenameCommand),

    /// Print a path without its final component
    Dirname(DirnameCommand),

    /// Join path segments
    Join(JoinCommand),

    /// Print the absolute form of a path
    Abspath(AbspathCommand),

    /// Split a path at its extension
    Splitext(SplitextCommand),

    /// Check that paths exist
    Exists(ExistsCommand),

    /// Create a directory and its parents
    Mkdir(MkdirCommand),

    /// List files matching a pattern
    Collect(CollectCommand),

    /// Mirror a directory tree
    CopyTree(CopyTreeCommand),

    /// Delete a directory tree
    RemoveAll(RemoveAllCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shellpath",
            "host",
            "/c/temp",
            "--host-family",
            "windows",
            "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.host_family.as_deref(), Some("windows"));
        assert!(matches!(cli.command, Command::Host(_)));
    }

    #[test]
    fn test_join_requires_a_segment() {
        assert!(Cli::try_parse_from(["shellpath", "join", "/a"]).is_err());
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["shellpath", "copy-tree", "/a", "/b"]).unwrap();
        assert!(matches!(cli.command, Command::CopyTree(_)));
        let cli = Cli::try_parse_from(["shellpath", "remove-all", "/a"]).unwrap();
        assert!(matches!(cli.command, Command::RemoveAll(_)));
    }
}
