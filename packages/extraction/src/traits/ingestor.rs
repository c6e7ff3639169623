//! Ingestor trait for pluggable document fetching.
//!
//! Ingestors turn a URL into a [`RawDocument`] ready for extraction.
//!
//! ```rust,ignore
//! use extraction::{HttpIngestor, Ingestor};
//!
//! let doc = HttpIngestor::new()?.fetch("https://example.com/snook").await?;
//! ```

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::types::document::RawDocument;

#[async_trait]
pub trait Ingestor: Send + Sync {
    /// Fetch one document.
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument>;

    /// Fetch several documents, skipping (and logging) failures.
    async fn fetch_many(&self, urls: &[String]) -> Vec<RawDocument> {
        let mut docs = Vec::with_capacity(urls.len());
        for url in urls {
            match self.fetch(url).await {
                Ok(doc) => docs.push(doc),
                Err(e) => tracing::warn!(url = %url, error = %e, "Failed to fetch document"),
            }
        }
        docs
    }

    /// Name of this ingestor (for logging).
    fn name(&self) -> &str;
}

/// Parse a URL and reject anything that is not http(s).
pub fn validate_url(url: &str) -> FetchResult<Url> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl {
        url: url.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::DisallowedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_schemes() {
        assert!(validate_url("https://example.com/fishing").is_ok());
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(FetchError::DisallowedScheme(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
