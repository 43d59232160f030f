//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use shellpath::config::{Config, ConfigMerger};
///
/// let low = Config { log_level: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_level: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_level, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources are applied in ascending precedence regardless of the order
    /// they are given in.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; set fields in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.host_family.is_some() {
            target.host_family = source.host_family;
        }

        if source.log_level.is_some() {
            target.log_level.clone_from(&source.log_level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::HostFamilySetting;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("source-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_overwrites() {
        let mut target = Config {
            host_family: Some(HostFamilySetting::Posix),
            log_level: Some("quiet".to_string()),
        };
        let source = Config {
            host_family: Some(HostFamilySetting::Windows),
            log_level: None,
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.host_family, Some(HostFamilySetting::Windows));
        assert_eq!(target.log_level, Some("quiet".to_string()));
    }

    #[test]
    fn test_merge_orders_by_precedence() {
        let user = make_source(
            1,
            Config {
                host_family: Some(HostFamilySetting::Posix),
                log_level: Some("verbose".to_string()),
            },
        );
        let explicit = make_source(
            2,
            Config {
                host_family: Some(HostFamilySetting::Windows),
                ..Default::default()
            },
        );

        let merged = ConfigMerger::merge(vec![explicit, user]);
        assert_eq!(merged.host_family, Some(HostFamilySetting::Windows));
        assert_eq!(merged.log_level, Some("verbose".to_string()));
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
