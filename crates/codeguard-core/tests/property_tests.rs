use codeguard_core::CacheSynchronizer;
use codeguard_test_utils::skill::snapshot;
use codeguard_test_utils::{SkillTree, rule_content};
use proptest::collection::btree_set;
use proptest::prelude::*;
use tempfile::TempDir;

fn rule_names() -> impl Strategy<Value = std::collections::BTreeSet<String>> {
    btree_set("[a-z][a-z0-9-]{0,11}\\.md", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_resync_is_idempotent(names in rule_names()) {
        let source = SkillTree::new();
        source.write_skill("# Skill\n");
        for name in &names {
            source.write_rule(name, &rule_content(name));
        }
        let cache = TempDir::new().unwrap();
        let syncer = CacheSynchronizer::new(source.path(), cache.path());

        let first = syncer.sync().unwrap();
        prop_assert_eq!(first.new_rule_names().len(), names.len());
        prop_assert_eq!(snapshot(cache.path()), snapshot(source.path()));

        let second = syncer.sync().unwrap();
        prop_assert!(second.success());
        prop_assert!(!second.new_rule_detected());
        prop_assert_eq!(snapshot(cache.path()), snapshot(source.path()));
    }

    #[test]
    fn test_only_the_extra_rule_is_new(
        names in rule_names(),
        extra in "[a-z]{1,8}-extra\\.md",
    ) {
        prop_assume!(!names.contains(&extra));
        let source = SkillTree::new();
        for name in &names {
            source.write_rule(name, &rule_content(name));
        }
        let cache = TempDir::new().unwrap();
        let syncer = CacheSynchronizer::new(source.path(), cache.path());
        syncer.sync().unwrap();

        source.write_rule(&extra, &rule_content("extra"));
        let result = syncer.sync().unwrap();

        let expected = vec![extra];
        prop_assert_eq!(result.new_rule_names(), expected.as_slice());
        prop_assert!(result.removed_rule_names().is_empty());
    }
}
