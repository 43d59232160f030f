//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::path::{HostFamily, PathEnv};

/// Complete configuration structure.
///
/// Every field is optional so that partial files and overrides can be
/// layered on top of each other.
///
/// # Examples
///
/// ```
/// use shellpath::config::{Config, HostFamilySetting};
/// use shellpath::HostFamily;
///
/// let config = Config {
///     host_family: Some(HostFamilySetting::Windows),
///     ..Default::default()
/// };
/// assert_eq!(config.path_env().family(), HostFamily::Windows);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which path rules to apply.
    pub host_family: Option<HostFamilySetting>,

    /// Default log level (`quiet`, `normal` or `verbose`).
    pub log_level: Option<String>,
}

/// Host family as written in configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostFamilySetting {
    /// Use the family of the platform the crate was built for.
    #[default]
    Auto,
    /// Forward-slash rules.
    Posix,
    /// Drive-letter and back-slash rules.
    Windows,
}

impl HostFamilySetting {
    /// Resolve to a concrete family.
    #[must_use]
    pub fn resolve(self) -> HostFamily {
        match self {
            Self::Auto => HostFamily::detect(),
            Self::Posix => HostFamily::Posix,
            Self::Windows => HostFamily::Windows,
        }
    }

    /// Parse a setting, accepting `auto` plus every family name
    /// [`HostFamily::parse`] accepts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `field` for unknown values.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match HostFamily::parse(value) {
            Ok(HostFamily::Posix) => Ok(Self::Posix),
            Ok(HostFamily::Windows) => Ok(Self::Windows),
            Err(message) => Err(Error::Validation {
                field: field.to_string(),
                message,
            }),
        }
    }
}

impl Config {
    /// The path environment selected by this configuration.
    ///
    /// An unset family means the native one.
    #[must_use]
    pub fn path_env(&self) -> PathEnv {
        PathEnv::new(self.host_family.unwrap_or_default().resolve())
    }

    /// The configured log level, defaulting to [`LogLevel::Normal`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `log_level` is not a known level.
    pub fn log_level(&self) -> Result<LogLevel> {
        match &self.log_level {
            None => Ok(LogLevel::Normal),
            Some(value) => LogLevel::parse(value).map_err(|message| Error::Validation {
                field: "log_level".to_string(),
                message,
            }),
        }
    }
}
