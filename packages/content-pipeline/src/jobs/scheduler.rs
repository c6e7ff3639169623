//! Scheduler over the persisted job list.
//!
//! Every operation is a read-modify-write of the whole list through the
//! [`JobStore`]. Safe only with a single pipeline process running.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::job::{Job, JobStatus};
use super::store::JobStore;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Completed jobs allowed per UTC day
    pub daily_publish_limit: usize,

    /// Trailing failures that trip the circuit breaker
    pub max_consecutive_failures: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            daily_publish_limit: 10,
            max_consecutive_failures: 3,
        }
    }
}

pub struct Scheduler<S: JobStore> {
    store: S,
    config: SchedulerConfig,
}

impl<S: JobStore> Scheduler<S> {
    pub fn new(store: S, config: SchedulerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn jobs(&self) -> Result<Vec<Job>> {
        self.store.load()
    }

    /// Append a job to the queue.
    pub fn enqueue(&self, job: Job) -> Result<Job> {
        let mut jobs = self.store.load()?;
        debug!(job_id = %job.job_id, topic_key = %job.topic_key, "Enqueuing job");
        jobs.push(job.clone());
        self.store.save(&jobs)?;
        Ok(job)
    }

    /// Highest-priority pending job whose `scheduled_at` has passed.
    ///
    /// Ties go to the earliest `scheduled_at`, then the earliest `created_at`.
    pub fn next_job(&self, now: DateTime<Utc>) -> Result<Option<Job>> {
        let jobs = self.store.load()?;
        Ok(jobs
            .into_iter()
            .filter(|job| job.is_runnable(now))
            .min_by(|a, b| {
                b.priority
                    .cmp(&a.priority)
                    .then(a.scheduled_at.cmp(&b.scheduled_at))
                    .then(a.created_at.cmp(&b.created_at))
            }))
    }

    /// Most recent job for a topic key.
    pub fn find_by_topic(&self, topic_key: &str) -> Result<Option<Job>> {
        let jobs = self.store.load()?;
        Ok(jobs
            .into_iter()
            .filter(|job| job.topic_key == topic_key)
            .max_by_key(|job| job.created_at))
    }

    /// Record a status transition.
    ///
    /// `Running` counts an attempt; `Completed` stamps `completed_at`.
    /// `error` and `result` replace whatever the job held before.
    pub fn update_job_status(
        &self,
        job_id: &str,
        status: JobStatus,
        error: Option<String>,
        result: Option<String>,
    ) -> Result<Job> {
        self.update_job_status_at(job_id, status, error, result, Utc::now())
    }

    pub fn update_job_status_at(
        &self,
        job_id: &str,
        status: JobStatus,
        error: Option<String>,
        result: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Job> {
        let mut jobs = self.store.load()?;
        let job = jobs
            .iter_mut()
            .find(|job| job.job_id == job_id)
            .ok_or_else(|| PipelineError::JobNotFound {
                job_id: job_id.to_string(),
            })?;

        match status {
            JobStatus::Running => {
                job.attempts += 1;
                job.started_at = Some(now);
            }
            JobStatus::Completed => job.completed_at = Some(now),
            _ => {}
        }
        job.status = status;
        job.error = error;
        job.result = result;
        job.updated_at = now;

        let updated = job.clone();
        self.store.save(&jobs)?;

        debug!(
            job_id = %updated.job_id,
            status = updated.status.as_str(),
            attempts = updated.attempts,
            "Job status updated"
        );
        Ok(updated)
    }

    /// Jobs completed on the UTC date of `now`.
    pub fn completed_on(&self, now: DateTime<Utc>) -> Result<usize> {
        let today = now.date_naive();
        let jobs = self.store.load()?;
        Ok(jobs
            .iter()
            .filter(|job| job.status == JobStatus::Completed)
            .filter(|job| job.completed_at.is_some_and(|at| at.date_naive() == today))
            .count())
    }

    /// False once today's completed jobs reach the daily limit.
    pub fn can_publish_today(&self, now: DateTime<Utc>) -> Result<bool> {
        Ok(self.completed_on(now)? < self.config.daily_publish_limit)
    }

    /// Trailing run of failed jobs, most recent first. Skipped jobs are
    /// ignored; a completed job ends the run.
    pub fn check_consecutive_failures(&self) -> Result<usize> {
        let mut finished: Vec<Job> = self
            .store
            .load()?
            .into_iter()
            .filter(|job| matches!(job.status, JobStatus::Completed | JobStatus::Failed))
            .collect();
        finished.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(finished
            .iter()
            .take_while(|job| job.status == JobStatus::Failed)
            .count())
    }

    /// Whether the circuit breaker should stop the run.
    pub fn failure_threshold_reached(&self) -> Result<bool> {
        Ok(self.check_consecutive_failures()? >= self.config.max_consecutive_failures)
    }

    /// Put failed jobs with attempts remaining back in the queue.
    ///
    /// Returns the ids of re-queued jobs.
    pub fn requeue_failed(&self, now: DateTime<Utc>) -> Result<Vec<String>> {
        let mut jobs = self.store.load()?;
        let mut requeued = Vec::new();

        for job in jobs
            .iter_mut()
            .filter(|job| job.status == JobStatus::Failed && job.has_attempts_left())
        {
            job.status = JobStatus::Pending;
            job.error = None;
            job.scheduled_at = now;
            job.updated_at = now;
            requeued.push(job.job_id.clone());
        }

        if !requeued.is_empty() {
            self.store.save(&jobs)?;
            info!(count = requeued.len(), "Re-queued failed jobs");
        }
        Ok(requeued)
    }

    /// Job counts by status, plus `total`.
    pub fn counts(&self) -> Result<BTreeMap<String, usize>> {
        let jobs = self.store.load()?;
        let mut counts: BTreeMap<String, usize> = JobStatus::ALL
            .iter()
            .map(|status| (status.as_str().to_string(), 0))
            .collect();

        for job in &jobs {
            *counts.entry(job.status.as_str().to_string()).or_default() += 1;
        }
        counts.insert("total".to_string(), jobs.len());
        Ok(counts)
    }
}
