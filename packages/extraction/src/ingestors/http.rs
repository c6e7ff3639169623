//! HTTP-based ingestor implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::heuristic::html::html_to_text;
use crate::traits::ingestor::{validate_url, Ingestor};
use crate::types::document::RawDocument;

/// HTTP ingestor that fetches a single page per URL.
///
/// Keeps the raw HTML alongside the derived text so the extractor can read
/// real `<h1>`/`<title>` tags.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::{HttpIngestor, Ingestor};
///
/// let ingestor = HttpIngestor::new()?.with_user_agent("MyBot/1.0");
/// let doc = ingestor.fetch("https://example.com").await?;
/// ```
pub struct HttpIngestor {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpIngestor {
    /// Create a new HTTP ingestor with a 30 second timeout.
    pub fn new() -> FetchResult<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP ingestor with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            user_agent: "ContentPipelineBot/1.0".to_string(),
        })
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Ingestor for HttpIngestor {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        let parsed = validate_url(url)?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(parsed)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let is_html = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map_or(true, |ct| ct.contains("html"));

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        debug!(url = %url, content_length = body.len(), is_html, "Document fetched");

        let doc = if is_html {
            let text = html_to_text(&body);
            RawDocument::from_html(url, body).with_text(text)
        } else {
            RawDocument::new(url, body)
        };

        Ok(doc.with_fetched_at(Utc::now()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let ingestor = HttpIngestor::new().unwrap();
        let result = ingestor.fetch("ftp://example.com/file.txt").await;
        assert!(matches!(result, Err(FetchError::DisallowedScheme(_))));
    }

    #[tokio::test]
    async fn test_rejects_invalid_url() {
        let ingestor = HttpIngestor::new().unwrap();
        let result = ingestor.fetch("definitely not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
