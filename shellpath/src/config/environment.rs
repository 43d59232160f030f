//! Environment variable handling for configuration overrides.

use crate::config::schema::{Config, HostFamilySetting};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use std::env;

/// Environment variable selecting the host family.
pub const HOST_FAMILY_ENV: &str = "SHELLPATH_HOST_FAMILY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use shellpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `SHELLPATH_*` environment variables to `config`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if its value is not
    /// recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(HOST_FAMILY_ENV) {
            config.host_family = Some(HostFamilySetting::parse(HOST_FAMILY_ENV, &value)?);
        }

        if let Some(value) = Self::var(LOG_MODE_ENV) {
            LogLevel::parse(&value).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_level = Some(value);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(name, value)| {
                    let old = env::var(name).ok();
                    match value {
                        Some(v) => env::set_var(name, v),
                        None => env::remove_var(name),
                    }
                    (*name, old)
                })
                .collect();
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, old) in &self.saved {
                match old {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_variables_no_change() {
        let _guard = EnvGuard::set(&[(HOST_FAMILY_ENV, None), (LOG_MODE_ENV, None)]);
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_host_family_override() {
        let _guard = EnvGuard::set(&[(HOST_FAMILY_ENV, Some("windows")), (LOG_MODE_ENV, None)]);
        let mut config = Config {
            host_family: Some(HostFamilySetting::Posix),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.host_family, Some(HostFamilySetting::Windows));
    }

    #[test]
    #[serial]
    fn test_log_mode_override() {
        let _guard = EnvGuard::set(&[(HOST_FAMILY_ENV, None), (LOG_MODE_ENV, Some("verbose"))]);
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.log_level, Some("verbose".to_string()));
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        let guard = EnvGuard::set(&[(HOST_FAMILY_ENV, Some("beos")), (LOG_MODE_ENV, None)]);
        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains(HOST_FAMILY_ENV));
        drop(guard);

        let _guard = EnvGuard::set(&[(HOST_FAMILY_ENV, None), (LOG_MODE_ENV, Some("chatty"))]);
        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains(LOG_MODE_ENV));
    }

    #[test]
    #[serial]
    fn test_empty_value_ignored() {
        let _guard = EnvGuard::set(&[(HOST_FAMILY_ENV, Some("")), (LOG_MODE_ENV, Some("  "))]);
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }
}
