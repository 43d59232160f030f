//! Builder assembling a [`Config`] from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources, lowest precedence first: the user file, an explicit file,
/// `SHELLPATH_*` environment variables, then programmatic overrides.
///
/// # Examples
///
/// ```
/// use shellpath::config::{Config, ConfigBuilder, HostFamilySetting};
/// use shellpath::HostFamily;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         host_family: Some(HostFamilySetting::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.path_env().family(), HostFamily::Windows);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder reading every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the user configuration from `dir` instead of `~/.shellpath`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Also read an explicit configuration file, which must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer a programmatic configuration on top of everything else.
    ///
    /// Later overrides win over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, if an
    /// environment variable holds an unknown value, or if the merged
    /// configuration names an unknown log level.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config(self.user_dir.as_deref())? {
                log::debug!("loaded user configuration from {}", user.path.display());
                sources.push(user);
            }
            if let Some(path) = &self.config_file {
                sources.push(ConfigLoader::load_explicit(path)?);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        config.log_level()?;
        Ok(config)
    }
}
