//! Fact sourcing: where a job's research notes come from.

mod fixture;
mod perplexity;

pub use fixture::FixtureSource;
pub use perplexity::PerplexitySource;

use async_trait::async_trait;
use extraction::RawDocument;

use crate::error::Result;
use crate::jobs::Job;
use crate::page_type::PageType;

/// Research gathered for one job.
#[derive(Debug, Clone, Default)]
pub struct Research {
    /// Unextracted source documents
    pub documents: Vec<RawDocument>,
    /// URLs cited alongside the documents
    pub citations: Vec<String>,
}

/// Trait for research backends.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn gather(&self, job: &Job) -> Result<Research>;

    fn name(&self) -> &str;
}

/// Question asked of a research backend for a job's topic.
pub fn research_query(job: &Job) -> String {
    let subject = job
        .topic_key
        .split_once(':')
        .map(|(_, slug)| slug)
        .unwrap_or(&job.topic_key)
        .replace('-', " ");

    match job.page_type {
        PageType::Blog => format!(
            "Research notes for a fishing blog post titled '{}': where fish hold, forage, tackle, techniques, best seasons and conditions.",
            subject
        ),
        PageType::Species => format!(
            "Fishing facts about {}: habitat, diet, typical size and records, spawning season and the most effective techniques.",
            subject
        ),
        PageType::HowTo => format!(
            "Step-by-step instructions for how to {} when fishing, with the gear needed and common mistakes.",
            subject
        ),
        PageType::Location => format!(
            "Fishing guide notes for {}: target species, best seasons, access points, regulations and local conditions.",
            subject
        ),
    }
}
