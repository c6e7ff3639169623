//! Ingestor implementations.
//!
//! - [`HttpIngestor`] - plain HTTP fetch, keeps the raw HTML
//! - [`MockIngestor`] - canned documents for tests

pub mod http;
pub mod mock;

pub use http::HttpIngestor;
pub use mock::MockIngestor;

use tracing::info;

use crate::traits::{extractor::Extractor, ingestor::Ingestor};
use crate::types::document::RawDocument;

/// Fetch every URL and run the extractor over what came back.
///
/// Failed fetches are logged and dropped; the rest keep input order.
pub async fn fetch_and_extract(
    ingestor: &dyn Ingestor,
    extractor: &dyn Extractor,
    urls: &[String],
) -> Vec<RawDocument> {
    let docs = ingestor.fetch_many(urls).await;
    info!(
        ingestor = ingestor.name(),
        requested = urls.len(),
        fetched = docs.len(),
        "Fetched source documents"
    );
    extractor.extract_all(docs)
}
