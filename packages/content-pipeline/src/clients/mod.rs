//! REST clients for the research APIs.

pub mod dataforseo;
pub mod perplexity;

pub use dataforseo::{DataForSeoClient, KeywordVolume};
pub use perplexity::{PerplexityClient, ResearchAnswer};

use std::time::Duration;

use crate::error::Result;

/// Shared reqwest client with the configured request timeout.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}
