//! Mock ingestor for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::ingestor::Ingestor;
use crate::types::document::RawDocument;

/// Mock ingestor serving canned documents by URL.
///
/// ```rust
/// use extraction::{MockIngestor, RawDocument};
///
/// let mock = MockIngestor::new()
///     .with_document(RawDocument::new("https://example.com", "# Hello\n\nWorld"));
/// assert_eq!(mock.document_count(), 1);
/// ```
#[derive(Default)]
pub struct MockIngestor {
    documents: Arc<RwLock<HashMap<String, RawDocument>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document that will be returned by fetch.
    pub fn add_document(&self, doc: RawDocument) {
        self.documents.write().unwrap().insert(doc.url.clone(), doc);
    }

    /// Builder form of [`MockIngestor::add_document`].
    pub fn with_document(self, doc: RawDocument) -> Self {
        self.add_document(doc);
        self
    }

    pub fn document_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// URLs requested so far, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Ingestor for MockIngestor {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        self.fetch_calls.write().unwrap().push(url.to_string());
        self.documents
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_known_and_unknown() {
        let mock = MockIngestor::new()
            .with_document(RawDocument::new("https://example.com/a", "alpha"));

        let doc = mock.fetch("https://example.com/a").await.unwrap();
        assert_eq!(doc.text, "alpha");

        let missing = mock.fetch("https://example.com/b").await;
        assert!(matches!(missing, Err(FetchError::NotFound { .. })));

        assert_eq!(mock.fetch_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_many_skips_failures() {
        let mock = MockIngestor::new()
            .with_document(RawDocument::new("https://example.com/a", "alpha"));

        let docs = mock
            .fetch_many(&["https://example.com/a".to_string(), "https://example.com/b".to_string()])
            .await;

        assert_eq!(docs.len(), 1);
    }
}
