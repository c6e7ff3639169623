//! Pipeline runner: drains the queue one job at a time.
//!
//! Per job: mark running, skip published topics, gather and extract
//! sources, build the brief, generate, validate, resolve the slug, publish,
//! record the topic, mark completed. Every per-job error is stored on the
//! job; only queue and registry I/O errors escape.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use extraction::{Extractor, HeuristicExtractor, RawDocument};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::brief::{build_brief, title_case, BriefInput, Source};
use crate::catalog;
use crate::dedup::TopicRegistry;
use crate::error::{PipelineError, Result};
use crate::generators::generate;
use crate::jobs::{Job, JobStatus, JobStore, Scheduler};
use crate::page_type::{parse_topic_key, PageType};
use crate::publisher::{PublishResult, Publisher};
use crate::sources::FactSource;
use crate::validator::validate_doc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    LimitReached,
    QueueEmpty,
    DailyCapReached,
    CircuitBreaker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub processed: usize,
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Route paths published during the run
    pub published: Vec<String>,
    pub stop_reason: StopReason,
}

impl RunSummary {
    pub fn circuit_breaker_tripped(&self) -> bool {
        self.stop_reason == StopReason::CircuitBreaker
    }
}

/// Result of processing a single job.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Completed(PublishResult),
    Skipped,
    Failed(String),
}

pub struct PipelineRunner<S: JobStore> {
    scheduler: Scheduler<S>,
    registry: TopicRegistry,
    publisher: Publisher,
    source: Arc<dyn FactSource>,
    extractor: Arc<dyn Extractor>,
    max_attempts: u32,
}

impl<S: JobStore> PipelineRunner<S> {
    pub fn new(
        scheduler: Scheduler<S>,
        registry: TopicRegistry,
        publisher: Publisher,
        source: Arc<dyn FactSource>,
    ) -> Self {
        Self {
            scheduler,
            registry,
            publisher,
            source,
            extractor: Arc::new(HeuristicExtractor::new()),
            max_attempts: 3,
        }
    }

    /// Swap the extractor (NER or LLM backed, for instance).
    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Attempts allowed for jobs created by [`Self::publish_topic`].
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn scheduler(&self) -> &Scheduler<S> {
        &self.scheduler
    }

    pub fn registry(&self) -> &TopicRegistry {
        &self.registry
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Process up to `limit` jobs, stopping early at the daily cap, on an
    /// empty queue, or when the consecutive-failure threshold is reached.
    pub async fn run(&self, limit: usize) -> Result<RunSummary> {
        let mut summary = RunSummary {
            processed: 0,
            completed: 0,
            failed: 0,
            skipped: 0,
            published: Vec::new(),
            stop_reason: StopReason::LimitReached,
        };

        info!(
            limit,
            source = self.source.name(),
            extractor = self.extractor.name(),
            "Starting pipeline run"
        );

        summary.stop_reason = loop {
            if summary.processed >= limit {
                break StopReason::LimitReached;
            }
            if !self.scheduler.can_publish_today(Utc::now())? {
                info!(
                    limit = self.scheduler.config().daily_publish_limit,
                    "Daily publish cap reached"
                );
                break StopReason::DailyCapReached;
            }
            if self.scheduler.failure_threshold_reached()? {
                error!(
                    failures = self.scheduler.check_consecutive_failures()?,
                    "Too many consecutive failures, aborting run"
                );
                break StopReason::CircuitBreaker;
            }
            let Some(job) = self.scheduler.next_job(Utc::now())? else {
                break StopReason::QueueEmpty;
            };

            summary.processed += 1;
            match self.process_job(job).await? {
                JobOutcome::Completed(result) => {
                    summary.completed += 1;
                    summary.published.push(result.route_path);
                }
                JobOutcome::Skipped => summary.skipped += 1,
                JobOutcome::Failed(_) => summary.failed += 1,
            }
        };

        info!(
            processed = summary.processed,
            completed = summary.completed,
            failed = summary.failed,
            skipped = summary.skipped,
            stop_reason = ?summary.stop_reason,
            "Pipeline run finished"
        );
        Ok(summary)
    }

    /// Run one topic now, regardless of queue order.
    ///
    /// Reuses an unfinished job for the topic, or a failed one with attempts
    /// left. Otherwise a new job is enqueued, so `attempts` never passes
    /// `max_attempts`.
    pub async fn publish_topic(&self, topic_key: &str) -> Result<(Job, JobOutcome)> {
        let (page_type, slug) = parse_topic_key(topic_key)?;
        let topic_key = page_type.topic_key(&slug);

        let reusable = |job: &Job| match job.status {
            JobStatus::Pending | JobStatus::Running => true,
            JobStatus::Failed => job.has_attempts_left(),
            JobStatus::Completed | JobStatus::Skipped => false,
        };

        let job = match self.scheduler.find_by_topic(&topic_key)? {
            Some(job) if reusable(&job) => job,
            _ => {
                let job = Job::builder()
                    .page_type(page_type)
                    .topic_key(topic_key)
                    .priority(i32::MAX)
                    .max_attempts(self.max_attempts)
                    .build();
                self.scheduler.enqueue(job)?
            }
        };

        let job_id = job.job_id.clone();
        let outcome = self.process_job(job).await?;
        let job = self
            .scheduler
            .jobs()?
            .into_iter()
            .find(|j| j.job_id == job_id)
            .ok_or(PipelineError::JobNotFound { job_id })?;
        Ok((job, outcome))
    }

    /// Drive one job through the pipeline and record its final status.
    pub async fn process_job(&self, job: Job) -> Result<JobOutcome> {
        let job = self
            .scheduler
            .update_job_status(&job.job_id, JobStatus::Running, None, None)?;
        info!(
            job_id = %job.job_id,
            topic_key = %job.topic_key,
            attempt = job.attempts,
            "Processing job"
        );

        match self.execute(&job).await {
            Ok(result) => {
                self.scheduler.update_job_status(
                    &job.job_id,
                    JobStatus::Completed,
                    None,
                    Some(result.route_path.clone()),
                )?;
                info!(job_id = %job.job_id, route = %result.route_path, "Job completed");
                Ok(JobOutcome::Completed(result))
            }
            Err(e) if e.is_skip() => {
                warn!(job_id = %job.job_id, topic_key = %job.topic_key, "Topic already published, skipping");
                self.scheduler
                    .update_job_status(&job.job_id, JobStatus::Skipped, Some(e.to_string()), None)?;
                Ok(JobOutcome::Skipped)
            }
            Err(e) => {
                let message = e.to_string();
                error!(job_id = %job.job_id, topic_key = %job.topic_key, error = %message, "Job failed");
                self.scheduler
                    .update_job_status(&job.job_id, JobStatus::Failed, Some(message.clone()), None)?;
                Ok(JobOutcome::Failed(message))
            }
        }
    }

    async fn execute(&self, job: &Job) -> Result<PublishResult> {
        let (page_type, slug) = parse_topic_key(&job.topic_key)?;

        if self.registry.topic_key_exists(&job.topic_key)? {
            return Err(PipelineError::TopicExists {
                topic_key: job.topic_key.clone(),
            });
        }

        let research = self.source.gather(job).await?;
        let documents = self.extract_unique(research.documents);
        if documents.is_empty() {
            return Err(PipelineError::NoSources {
                topic_key: job.topic_key.clone(),
            });
        }

        let input = brief_input(job, page_type, slug, &documents, research.citations);
        let brief = build_brief(input);

        let mut doc = generate(&brief);
        validate_doc(&doc).into_result()?;

        let resolved = self.publisher.resolve_slug(doc.slug(), page_type)?;
        if resolved != doc.slug() {
            info!(job_id = %job.job_id, from = %doc.slug(), to = %resolved, "Slug collision resolved");
            doc.meta_mut().slug = resolved;
        }

        let result = self.publisher.publish_doc(&doc).await?;
        self.registry.record(&job.topic_key)?;
        Ok(result)
    }

    /// Extract every document, dropping empty ones and duplicate content.
    fn extract_unique(&self, documents: Vec<RawDocument>) -> Vec<RawDocument> {
        let mut seen = HashSet::new();
        self.extractor
            .extract_all(documents)
            .into_iter()
            .filter(|doc| doc.has_content())
            .filter(|doc| seen.insert(doc.content_hash.clone()))
            .collect()
    }
}

fn brief_input(
    job: &Job,
    page_type: PageType,
    slug: String,
    documents: &[RawDocument],
    citations: Vec<String>,
) -> BriefInput {
    let mut input = BriefInput::new(page_type, job.topic_key.clone());

    match page_type {
        PageType::Blog => {
            if let Some(topic) = catalog::blog_topic(&slug) {
                input.species = Some(topic.species.name.to_string());
                input.category = Some(topic.template.category.to_string());
            }
        }
        PageType::Species => {
            input.species = catalog::species(&slug).map(|s| s.name.to_string());
        }
        PageType::Location => {
            input.location = catalog::location(&slug).map(|l| l.name.to_string());
        }
        PageType::HowTo => {
            if let Some(profile) = catalog::how_to(&slug) {
                input.title = Some(profile.title.to_string());
            }
        }
    }
    input.slug = Some(slug);

    for doc in documents {
        input.facts.extend(doc.extracted_facts.iter().cloned());
        input.keywords.extend(doc.species_hints.iter().cloned());
        input.keywords.extend(doc.location_hints.iter().cloned());
        input
            .related_species
            .extend(doc.species_hints.iter().map(|s| title_case(s)));

        if is_web_url(&doc.url) {
            let mut source = Source::new(doc.url.clone());
            if !doc.title.is_empty() {
                source = source.with_title(doc.title.clone());
            }
            input.sources.push(source);
        }
    }
    input.sources.extend(
        citations
            .into_iter()
            .filter(|url| is_web_url(url))
            .map(Source::new),
    );

    input
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
