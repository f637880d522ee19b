//! Integration tests for CachePathLocator

use codeguard_core::{
    CacheLocation, CachePathLocator, FixedHome, HomeProvider, NotFoundReason, PluginCoordinates,
};
use codeguard_test_utils::TestHome;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

struct NoHome;

impl HomeProvider for NoHome {
    fn home_dir(&self) -> Option<PathBuf> {
        None
    }
}

#[test]
fn test_picks_highest_installed_version() {
    let home = TestHome::new();
    for version in ["1.0.0", "1.2.0", "1.1.0"] {
        home.install_version(version);
    }
    let locator = CachePathLocator::new(FixedHome::new(home.path()));

    // Repeated calls resolve identically
    for _ in 0..3 {
        let resolved = locator.locate();
        let resolved = resolved.found().expect("cache should be found");
        assert_eq!(resolved.version, "1.2.0");
        assert_eq!(resolved.skill_dir, home.skill_dir("1.2.0"));
        assert_eq!(resolved.rules_dir(), home.skill_dir("1.2.0").join("rules"));
        assert_eq!(resolved.version_dir, home.plugin_root().join("1.2.0"));
    }
}

#[test]
fn test_not_installed_is_not_found() {
    let home = TestHome::new();
    let locator = CachePathLocator::new(FixedHome::new(home.path()));

    let location = locator.locate();

    assert_eq!(
        location,
        CacheLocation::NotFound(NotFoundReason::PluginNotInstalled {
            root: home.plugin_root()
        })
    );
}

#[test]
fn test_empty_plugin_root_is_not_found() {
    let home = TestHome::new();
    home.create_empty_plugin_root();
    // A stray file is not a version
    fs::write(home.plugin_root().join("README.txt"), "x").unwrap();

    let location = CachePathLocator::new(FixedHome::new(home.path())).locate();

    assert!(matches!(
        location,
        CacheLocation::NotFound(NotFoundReason::NoVersions { .. })
    ));
}

#[test]
fn test_missing_home_is_not_found() {
    let home = TestHome::new();
    let missing = home.path().join("does-not-exist");

    let location = CachePathLocator::new(FixedHome::new(missing)).locate();
    assert_eq!(
        location,
        CacheLocation::NotFound(NotFoundReason::NoHomeDirectory)
    );

    let location = CachePathLocator::new(NoHome).locate();
    assert!(!location.is_found());
    assert!(CachePathLocator::new(NoHome).plugin_root().is_none());
}

#[test]
fn test_custom_coordinates() {
    let home = TestHome::new();
    let skill = home
        .path()
        .join(".claude/plugins/cache/acme/acme-rules/0.3.0/skills/house-style");
    fs::create_dir_all(&skill).unwrap();

    let locator = CachePathLocator::new(FixedHome::new(home.path())).with_coordinates(
        PluginCoordinates {
            marketplace: "acme".into(),
            plugin: "acme-rules".into(),
            skill: "house-style".into(),
        },
    );

    let location = locator.locate();
    assert_eq!(location.found().unwrap().skill_dir, skill);
}

#[test]
fn test_locator_accepts_borrowed_provider() {
    let home = TestHome::new();
    home.install_version("2.0.0");
    let provider = FixedHome::new(home.path());

    let location = CachePathLocator::new(&provider).locate();
    assert_eq!(location.found().unwrap().version, "2.0.0");
}
