//! Main entry point for the shellpath CLI.
//!
//! This is the command-line interface to the shellpath library. It provides
//! commands for build scripts:
//! - `host` / `shell`: convert between path forms
//! - `basename`, `dirname`, `join`, `abspath`, `splitext`: path components
//! - `exists`, `mkdir`, `collect`: filesystem queries and creation
//! - `copy-tree`, `remove-all`: tree operations

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        host_family: cli.host_family,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Host(cmd) => cmd.execute(&global),
        cli::Command::Shell(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Abspath(cmd) => cmd.execute(&global),
        cli::Command::Splitext(cmd) => cmd.execute(&global),
        cli::Command::Exists(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Collect(cmd) => cmd.execute(&global),
        cli::Command::CopyTree(cmd) => cmd.execute(&global),
        cli::Command::RemoveAll(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
