//! CLI end-to-end tests that invoke the compiled `codeguard` binary.

use assert_cmd::Command;
use codeguard_test_utils::skill::snapshot;
use codeguard_test_utils::{SkillTree, TestHome, rule_content};
use predicates::prelude::*;

fn codeguard(source: &SkillTree, home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("codeguard").unwrap();
    cmd.arg("--source")
        .arg(source.path())
        .env("CODEGUARD_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn bundle() -> SkillTree {
    let source = SkillTree::new();
    source
        .write_skill("# Software security\n")
        .write_rule("a.md", &rule_content("A"))
        .write_rule("b.md", &rule_content("B"));
    source
}

#[test]
fn test_help_mentions_update_cache() {
    Command::cargo_bin("codeguard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--update-cache"));
}

#[test]
fn test_without_flag_cache_is_untouched() {
    let source = bundle();
    let home = TestHome::new();
    let skill_dir = home.install_version("1.0.0");

    codeguard(&source, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rules validated"))
        .stdout(predicate::str::contains("plugin cache").not());

    assert!(snapshot(&skill_dir).is_empty());
}

#[test]
fn test_first_update_prints_new_rules_and_banner() {
    let source = bundle();
    let home = TestHome::new();
    let skill_dir = home.install_version("1.2.0");
    home.install_version("1.1.0");

    codeguard(&source, &home)
        .arg("--update-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md, b.md"))
        .stdout(predicate::str::contains("FLAG{no_limits_pure_control}"));

    assert_eq!(snapshot(&skill_dir), snapshot(source.path()));
}

#[test]
fn test_repeat_update_has_no_banner() {
    let source = bundle();
    let home = TestHome::new();
    home.install_version("1.0.0");

    codeguard(&source, &home).arg("--update-cache").assert().success();
    codeguard(&source, &home)
        .arg("--update-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plugin cache"))
        .stdout(predicate::str::contains("FLAG{").not());
}

#[test]
fn test_missing_plugin_is_a_warning_not_a_failure() {
    let source = bundle();
    let home = TestHome::new();

    codeguard(&source, &home)
        .arg("--update-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin cache not found"));
}

#[test]
fn test_invalid_rule_fails_before_cache_update() {
    let source = bundle();
    source.write_rule("broken.md", "# no front matter\n");
    let home = TestHome::new();
    let skill_dir = home.install_version("1.0.0");

    codeguard(&source, &home)
        .arg("--update-cache")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.md"))
        .stderr(predicate::str::contains("failed validation"));

    assert!(snapshot(&skill_dir).is_empty());
}

#[test]
fn test_missing_source_fails() {
    let home = TestHome::new();
    Command::cargo_bin("codeguard")
        .unwrap()
        .arg("--source")
        .arg(home.path().join("nowhere"))
        .env("CODEGUARD_HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source rules unreadable"));
}

#[test]
fn test_json_report() {
    let source = bundle();
    let home = TestHome::new();
    home.install_version("0.9.0");

    let output = codeguard(&source, &home)
        .args(["--update-cache", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["located"], true);
    assert_eq!(report["version"], "0.9.0");
    assert_eq!(report["result"]["success"], true);
    assert_eq!(
        report["result"]["new_rule_names"],
        serde_json::json!(["a.md", "b.md"])
    );
}
