//! Duplicate-topic registry and slug collision resolution.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::storage::{read_json_or_default, write_json_atomic};

/// Set of topic keys that have already been published.
///
/// Stored as a sorted JSON array so diffs of the file stay readable.
pub struct TopicRegistry {
    path: PathBuf,
}

impl TopicRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn topics(&self) -> Result<BTreeSet<String>> {
        read_json_or_default(&self.path)
    }

    /// Exact-match lookup.
    pub fn topic_key_exists(&self, topic_key: &str) -> Result<bool> {
        Ok(self.topics()?.contains(topic_key))
    }

    /// Record a published topic. Returns false if it was already present.
    pub fn record(&self, topic_key: &str) -> Result<bool> {
        let mut topics = self.topics()?;
        if !topics.insert(topic_key.to_string()) {
            return Ok(false);
        }
        write_json_atomic(&self.path, &topics)?;
        debug!(topic_key = %topic_key, total = topics.len(), "Recorded topic");
        Ok(true)
    }
}

/// First of `base`, `base-2`, `base-3`, ... not in `existing`.
pub fn resolve_slug_collision(base_slug: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base_slug) {
        return base_slug.to_string();
    }

    (2..)
        .map(|n| format!("{}-{}", base_slug, n))
        .find(|candidate| !existing.contains(candidate))
        .unwrap_or_else(|| base_slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unused_base_is_kept() {
        assert_eq!(resolve_slug_collision("snook-fishing-tips", &set(&[])), "snook-fishing-tips");
    }

    #[test]
    fn test_collision_appends_suffix() {
        let existing = set(&["best-lures-for-snook"]);
        assert_eq!(
            resolve_slug_collision("best-lures-for-snook", &existing),
            "best-lures-for-snook-2"
        );
    }

    #[test]
    fn test_collision_skips_taken_suffixes() {
        let existing = set(&["tampa-bay", "tampa-bay-2", "tampa-bay-3", "tampa-bay-5"]);
        let resolved = resolve_slug_collision("tampa-bay", &existing);
        assert_eq!(resolved, "tampa-bay-4");
        assert!(!existing.contains(&resolved));
    }

    #[test]
    fn test_registry_record_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let registry = TopicRegistry::new(dir.path().join("topics.json"));

        assert!(!registry.topic_key_exists("species:snook").unwrap());
        assert!(registry.record("species:snook").unwrap());
        assert!(!registry.record("species:snook").unwrap());
        registry.record("blog:best-lures-for-snook").unwrap();

        assert!(registry.topic_key_exists("species:snook").unwrap());
        assert!(!registry.topic_key_exists("species:snoo").unwrap());

        let raw = std::fs::read_to_string(registry.path()).unwrap();
        let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec!["blog:best-lures-for-snook", "species:snook"]);
    }
}
