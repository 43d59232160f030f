//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command needs: the global options,
//! configuration loading and construction of the filesystem handle.

use crate::error::CliError;
use shellpath::config::HostFamilySetting;
use shellpath::{Config, ConfigBuilder, Filesystem, LogLevel, Logger, PathEnv};
use std::path::PathBuf;
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Host family requested on the command line (`auto`, `posix`, `windows`).
    pub host_family: Option<String>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user configuration file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    if let Some(family) = &global.host_family {
        let setting = HostFamilySetting::parse("--host-family", family)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        builder = builder.with_config(Config {
            host_family: Some(setting),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the log level: flags first, then configuration.
pub fn log_level(global: &GlobalOptions, config: &Config) -> Result<LogLevel, CliError> {
    if global.verbose {
        return Ok(LogLevel::Verbose);
    }
    if global.quiet {
        return Ok(LogLevel::Quiet);
    }
    config
        .log_level()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The path environment selected by options and configuration.
pub fn path_env(global: &GlobalOptions) -> Result<PathEnv, CliError> {
    Ok(load_configuration(global)?.path_env())
}

/// Build a filesystem handle that logs to stderr at the selected level.
pub fn filesystem(global: &GlobalOptions) -> Result<Filesystem, CliError> {
    let config = load_configuration(global)?;
    let logger = Logger::new(log_level(global, &config)?);
    Ok(Filesystem::new(config.path_env()).with_logger(Arc::new(logger)))
}
