//! Per-type content index, the listing source for index pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generators::ContentDoc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub word_count: usize,
    pub featured: bool,
    pub draft: bool,
}

impl IndexEntry {
    pub fn from_doc(doc: &ContentDoc) -> Self {
        let meta = doc.meta();
        Self {
            slug: meta.slug.clone(),
            title: meta.title.clone(),
            description: meta.description.clone(),
            category: meta.category.clone(),
            published_at: meta.published_at,
            updated_at: meta.updated_at,
            word_count: meta.word_count,
            featured: meta.featured,
            draft: meta.draft,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<IndexEntry>,
}

impl ContentIndex {
    /// Insert or replace by slug, keeping newest first.
    pub fn upsert(&mut self, entry: IndexEntry) {
        self.updated_at = Some(entry.updated_at);
        match self.entries.iter_mut().find(|e| e.slug == entry.slug) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.entries
            .sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.slug.cmp(&b.slug)));
    }

    pub fn get(&self, slug: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(slug: &str, published_at: DateTime<Utc>) -> IndexEntry {
        IndexEntry {
            slug: slug.into(),
            title: slug.into(),
            description: String::new(),
            category: "tips".into(),
            published_at,
            updated_at: published_at,
            word_count: 300,
            featured: false,
            draft: false,
        }
    }

    #[test]
    fn test_upsert_orders_newest_first_and_replaces() {
        let now = Utc::now();
        let mut index = ContentIndex::default();
        index.upsert(entry("older", now - Duration::days(2)));
        index.upsert(entry("newer", now));

        let slugs: Vec<_> = index.slugs().collect();
        assert_eq!(slugs, vec!["newer", "older"]);

        let mut updated = entry("older", now - Duration::days(2));
        updated.word_count = 999;
        index.upsert(updated);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("older").unwrap().word_count, 999);
    }
}
