//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, HostFamilySetting};
use proptest::prelude::*;

fn setting_strategy() -> impl Strategy<Value = HostFamilySetting> {
    prop_oneof![
        Just(HostFamilySetting::Auto),
        Just(HostFamilySetting::Posix),
        Just(HostFamilySetting::Windows),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(setting_strategy()),
        prop::option::of(prop_oneof![
            Just("quiet".to_string()),
            Just("normal".to_string()),
            Just("verbose".to_string()),
        ]),
    )
        .prop_map(|(host_family, log_level)| Config {
            host_family,
            log_level,
        })
}

proptest! {
    /// Merging an empty config changes nothing.
    #[test]
    fn prop_merge_empty_is_right_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    /// Merging into an empty config copies the source.
    #[test]
    fn prop_merge_into_empty_copies_values(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    /// Set fields of the source always win; unset fields keep the target's.
    #[test]
    fn prop_merge_source_wins_field_by_field(
        target in config_strategy(),
        source in config_strategy(),
    ) {
        let mut merged = target.clone();
        ConfigMerger::merge_into(&mut merged, &source);
        prop_assert_eq!(merged.host_family, source.host_family.or(target.host_family));
        prop_assert_eq!(merged.log_level, source.log_level.or(target.log_level));
    }

    /// Any generated config yields a valid log level.
    #[test]
    fn prop_generated_levels_validate(config in config_strategy()) {
        prop_assert!(config.log_level().is_ok());
    }
}
