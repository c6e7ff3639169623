//! Wiring from [`Config`] to runnable components.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::clients::{http_client, DataForSeoClient, PerplexityClient};
use crate::config::{Config, FactSourceKind};
use crate::dedup::TopicRegistry;
use crate::error::PipelineError;
use crate::jobs::{FileJobStore, Scheduler};
use crate::publisher::{HttpRevalidator, NoopRevalidator, Publisher, Revalidator};
use crate::runner::PipelineRunner;
use crate::sources::{FactSource, FixtureSource, PerplexitySource};

pub fn scheduler(config: &Config) -> Scheduler<FileJobStore> {
    Scheduler::new(FileJobStore::new(config.jobs_path()), config.scheduler_config())
}

pub fn registry(config: &Config) -> TopicRegistry {
    TopicRegistry::new(config.topics_path())
}

pub fn perplexity_client(config: &Config) -> Result<PerplexityClient> {
    let api_key = config
        .perplexity_api_key
        .clone()
        .ok_or(PipelineError::MissingConfig("PERPLEXITY_API_KEY"))?;
    let http = http_client(config.http_timeout_secs).context("Failed to build HTTP client")?;
    Ok(PerplexityClient::new(http, api_key).with_model(config.perplexity_model.clone()))
}

pub fn dataforseo_client(config: &Config) -> Result<DataForSeoClient> {
    let login = config
        .dataforseo_login
        .clone()
        .ok_or(PipelineError::MissingConfig("DATAFORSEO_LOGIN"))?;
    let password = config
        .dataforseo_password
        .clone()
        .ok_or(PipelineError::MissingConfig("DATAFORSEO_PASSWORD"))?;
    let http = http_client(config.http_timeout_secs).context("Failed to build HTTP client")?;
    Ok(DataForSeoClient::new(http, login, password))
}

pub fn fact_source(config: &Config) -> Result<Arc<dyn FactSource>> {
    Ok(match config.fact_source {
        FactSourceKind::Fixture => Arc::new(FixtureSource::new()),
        FactSourceKind::Perplexity => Arc::new(PerplexitySource::new(perplexity_client(config)?)),
    })
}

pub fn revalidator(config: &Config) -> Result<Arc<dyn Revalidator>> {
    match (&config.revalidate_url, &config.revalidate_secret) {
        (Some(url), Some(secret)) => {
            let http = http_client(config.http_timeout_secs).context("Failed to build HTTP client")?;
            Ok(Arc::new(HttpRevalidator::new(http, url.clone(), secret.clone())))
        }
        _ => Ok(Arc::new(NoopRevalidator)),
    }
}

/// Runner backed by the on-disk queue, registry and content tree.
pub fn build_runner(config: &Config) -> Result<PipelineRunner<FileJobStore>> {
    let source = fact_source(config)?;
    let revalidator = revalidator(config)?;
    info!(
        data_dir = %config.data_dir.display(),
        content_dir = %config.content_dir.display(),
        source = source.name(),
        revalidator = revalidator.name(),
        "Pipeline configured"
    );

    Ok(PipelineRunner::new(
        scheduler(config),
        registry(config),
        Publisher::new(config.content_dir.clone(), revalidator),
        source,
    )
    .with_max_attempts(config.job_max_attempts))
}
