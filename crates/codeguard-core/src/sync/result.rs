//! Outcome of a cache synchronization

use serde::Serialize;

/// Result of one [`CacheSynchronizer::sync`](super::CacheSynchronizer::sync) call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    success: bool,
    new_rule_detected: bool,
    new_rule_names: Vec<String>,
    removed_rule_names: Vec<String>,
}

impl SyncResult {
    /// The cache now mirrors the source.
    pub fn synced(new_rule_names: Vec<String>, removed_rule_names: Vec<String>) -> Self {
        Self {
            success: true,
            new_rule_detected: !new_rule_names.is_empty(),
            new_rule_names,
            removed_rule_names,
        }
    }

    /// The cache could not be written; nothing is reported as new.
    pub fn failed() -> Self {
        Self {
            success: false,
            new_rule_detected: false,
            new_rule_names: Vec::new(),
            removed_rule_names: Vec::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn new_rule_detected(&self) -> bool {
        self.new_rule_detected
    }

    /// Rules present in the source but not in the previous cache, in
    /// filename order.
    pub fn new_rule_names(&self) -> &[String] {
        &self.new_rule_names
    }

    /// Rules dropped from the cache because the source no longer has them.
    pub fn removed_rule_names(&self) -> &[String] {
        &self.removed_rule_names
    }
}
