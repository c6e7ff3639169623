use async_trait::async_trait;
use extraction::RawDocument;
use tracing::info;

use super::{research_query, FactSource, Research};
use crate::clients::PerplexityClient;
use crate::error::Result;
use crate::jobs::Job;

/// Research notes from the Perplexity API.
pub struct PerplexitySource {
    client: PerplexityClient,
}

impl PerplexitySource {
    pub fn new(client: PerplexityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FactSource for PerplexitySource {
    async fn gather(&self, job: &Job) -> Result<Research> {
        let query = research_query(job);
        let answer = self.client.research(&query).await?;

        let url = answer
            .citations
            .first()
            .cloned()
            .unwrap_or_else(|| format!("perplexity:{}", job.topic_key));

        info!(
            job_id = %job.job_id,
            citations = answer.citations.len(),
            "Gathered Perplexity research"
        );

        Ok(Research {
            documents: vec![RawDocument::new(url, answer.content)],
            citations: answer.citations,
        })
    }

    fn name(&self) -> &str {
        "perplexity"
    }
}
