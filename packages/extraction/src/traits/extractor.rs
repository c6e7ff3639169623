//! Extractor trait - pluggable structured extraction.
//!
//! The heuristic extractor in [`crate::heuristic`] is the default. An NER
//! or LLM-backed extractor can replace it without touching callers, since
//! the pipeline only depends on this trait.

use crate::types::document::RawDocument;

/// Best-effort structured extraction from an unstructured document.
pub trait Extractor: Send + Sync {
    /// Populate title, headings, facts, entities, quality and content type.
    ///
    /// Never fails: a document with nothing usable comes back with empty
    /// collections and a low quality score.
    fn extract(&self, doc: RawDocument) -> RawDocument;

    /// Name of this extractor (for logging).
    fn name(&self) -> &str;

    /// Extract a batch of documents in order.
    fn extract_all(&self, docs: Vec<RawDocument>) -> Vec<RawDocument> {
        docs.into_iter().map(|doc| self.extract(doc)).collect()
    }
}
