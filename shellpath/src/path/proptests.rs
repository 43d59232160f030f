//! Property-based tests for path-form conversion.
//!
//! Note: the convert module already has round-trip properties. This module
//! focuses on how join, basename, dirname and normalization fit together.

use super::types::{HostFamily, PathEnv};
use proptest::prelude::*;

const FAMILIES: [HostFamily; 2] = [HostFamily::Posix, HostFamily::Windows];

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{2,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    ("[a-z]", prop::collection::vec(component_strategy(), 1..6))
        .prop_map(|(drive, parts)| format!("/{drive}/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // dirname + basename rebuilds the original path
    #[test]
    fn dirname_join_basename_rebuilds(path in absolute_path_strategy()) {
        for family in FAMILIES {
            let env = PathEnv::new(family);
            let rebuilt = env.join(&env.dirname(&path), &[env.basename(&path)]);
            prop_assert_eq!(rebuilt, path.clone());
        }
    }

    // Same for drive-rooted paths on the windows family
    #[test]
    fn drive_paths_rebuild(path in drive_path_strategy()) {
        let env = PathEnv::new(HostFamily::Windows);
        let rebuilt = env.join(&env.dirname(&path), &[env.basename(&path)]);
        prop_assert_eq!(rebuilt, path);
    }

    // Joining never produces a doubled separator
    #[test]
    fn join_never_doubles_separators(
        base in absolute_path_strategy(),
        segments in prop::collection::vec("/?[a-z]{1,5}/?", 0..5)
    ) {
        for family in FAMILIES {
            let joined = PathEnv::new(family).join(&base, segments.as_slice());
            prop_assert!(!joined.contains("//"));
            prop_assert!(joined.starts_with(&base));
        }
    }

    // Lexical resolution is idempotent
    #[test]
    fn resolve_components_idempotent(
        parts in prop::collection::vec(prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            component_strategy(),
        ], 1..10)
    ) {
        let path = format!("/{}", parts.join("/"));
        for family in FAMILIES {
            let env = PathEnv::new(family);
            let once = env.resolve_components(&path);
            prop_assert_eq!(env.resolve_components(&once), once.clone());
            prop_assert!(!once.split('/').any(|c| c == "." || c == ".."));
        }
    }

    // splitext never loses characters
    #[test]
    fn splitext_concatenates_back(path in absolute_path_strategy(), ext in "(\\.[a-z]{1,4})?") {
        let full = format!("{path}{ext}");
        let env = PathEnv::new(HostFamily::Posix);
        let (root, found) = env.splitext(&full);
        prop_assert_eq!(format!("{root}{found}"), full);
        prop_assert_eq!(found, ext);
    }
}
