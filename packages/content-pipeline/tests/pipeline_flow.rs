//! End-to-end runs against a temp data and content directory.

use std::sync::Arc;

use async_trait::async_trait;
use content_pipeline::app;
use content_pipeline::generators::ContentDoc;
use content_pipeline::publisher::NoopRevalidator;
use content_pipeline::seed::{seed, SeedRequest};
use content_pipeline::sources::{FactSource, FixtureSource, Research};
use content_pipeline::{
    Config, FileJobStore, Job, JobStatus, PageType, PipelineError, PipelineRunner, Publisher,
    Scheduler, StopReason, TopicRegistry,
};
use tempfile::TempDir;

fn config(dir: &TempDir) -> Config {
    Config::local(dir.path().join("data"), dir.path().join("content"))
}

fn seed_jobs(config: &Config, page_type: PageType, count: usize) -> Vec<Job> {
    let request = SeedRequest {
        page_type,
        count,
        priority: 0,
        max_attempts: config.job_max_attempts,
    };
    seed(&app::scheduler(config), &app::registry(config), &request).unwrap()
}

fn enqueue(config: &Config, topic_keys: &[&str]) {
    let scheduler = app::scheduler(config);
    for key in topic_keys {
        let (page_type, _) = content_pipeline::parse_topic_key(key).unwrap();
        scheduler.enqueue(Job::immediate(page_type, *key)).unwrap();
    }
}

/// A blog topic whose derived title is too long to validate.
fn overlong_topic(suffix: &str) -> String {
    format!(
        "blog:the-complete-and-absolutely-exhaustive-guide-to-catching-every-kind-of-fish-in-every-body-of-water-{}",
        suffix
    )
}

#[tokio::test]
async fn test_seed_five_run_three_leaves_two_pending() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    assert_eq!(seed_jobs(&config, PageType::Blog, 5).len(), 5);

    let runner = app::build_runner(&config).unwrap();
    let summary = runner.run(3).await.unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.stop_reason, StopReason::LimitReached);

    let counts = runner.scheduler().counts().unwrap();
    assert_eq!(counts["completed"], 3);
    assert_eq!(counts["pending"], 2);
    assert_eq!(counts["total"], 5);

    let index = runner.publisher().load_index(PageType::Blog).unwrap();
    assert_eq!(index.len(), 3);
}

#[tokio::test]
async fn test_published_doc_reloads_intact() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let runner = app::build_runner(&config).unwrap();

    let (job, _) = runner.publish_topic("species:snook").await.unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.result.as_deref(), Some("/species/snook"));

    let doc = runner.publisher().load_doc(PageType::Species, "snook").unwrap();
    let ContentDoc::Species(guide) = &doc else {
        panic!("expected a species guide");
    };
    assert_eq!(guide.common_name, "Snook");
    assert_eq!(guide.scientific_name.as_deref(), Some("Centropomus undecimalis"));
    assert!(!guide.habitat.is_empty());
    assert!(!guide.faqs.is_empty());
    assert!(doc.meta().word_count >= PageType::Species.min_words());
    assert!(content_pipeline::validate_doc(&doc).passed);

    let raw = std::fs::read_to_string(dir.path().join("content/species/snook.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["pageType"], "species");
}

#[tokio::test]
async fn test_slug_collision_gets_numeric_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    // A hand-written page already owns the base slug.
    let blog_dir = config.content_dir.join("blog");
    std::fs::create_dir_all(&blog_dir).unwrap();
    std::fs::write(blog_dir.join("best-lures-for-snook.json"), "{}").unwrap();

    let runner = app::build_runner(&config).unwrap();
    assert_eq!(
        runner
            .publisher()
            .resolve_slug("best-lures-for-snook", PageType::Blog)
            .unwrap(),
        "best-lures-for-snook-2"
    );

    let (job, _) = runner.publish_topic("blog:best-lures-for-snook").await.unwrap();
    assert_eq!(job.result.as_deref(), Some("/blog/best-lures-for-snook-2"));
    assert!(blog_dir.join("best-lures-for-snook-2.json").exists());
    assert!(runner.registry().topic_key_exists("blog:best-lures-for-snook").unwrap());
}

#[tokio::test]
async fn test_validation_failure_marks_job_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let topic = overlong_topic("one");
    enqueue(&config, &[topic.as_str()]);

    let runner = app::build_runner(&config).unwrap();
    let summary = runner.run(5).await.unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.stop_reason, StopReason::QueueEmpty);

    let job = &runner.scheduler().jobs().unwrap()[0];
    assert_eq!(job.status, JobStatus::Failed);
    let error = job.error.as_deref().unwrap();
    assert!(error.starts_with("validation failed: title is"), "{}", error);

    assert!(runner.publisher().load_index(PageType::Blog).unwrap().is_empty());
    assert!(!runner.registry().topic_key_exists(&topic).unwrap());
}

#[tokio::test]
async fn test_circuit_breaker_stops_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let topics: Vec<String> = ["one", "two", "three", "four"]
        .iter()
        .map(|s| overlong_topic(s))
        .collect();
    enqueue(&config, &topics.iter().map(String::as_str).collect::<Vec<_>>());

    let runner = app::build_runner(&config).unwrap();
    let summary = runner.run(10).await.unwrap();

    assert!(summary.circuit_breaker_tripped());
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.failed, 3);

    let counts = runner.scheduler().counts().unwrap();
    assert_eq!(counts["failed"], 3);
    assert_eq!(counts["pending"], 1);

    // Still tripped on the next invocation until failures are re-queued.
    let again = runner.run(10).await.unwrap();
    assert_eq!(again.processed, 0);
    assert_eq!(again.stop_reason, StopReason::CircuitBreaker);

    let requeued = runner.scheduler().requeue_failed(chrono::Utc::now()).unwrap();
    assert_eq!(requeued.len(), 3);
    assert!(!runner.scheduler().failure_threshold_reached().unwrap());
}

#[tokio::test]
async fn test_daily_cap_stops_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(&dir);
    config.daily_publish_limit = 2;
    seed_jobs(&config, PageType::HowTo, 3);

    let runner = app::build_runner(&config).unwrap();
    let summary = runner.run(10).await.unwrap();

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.stop_reason, StopReason::DailyCapReached);
    assert_eq!(runner.scheduler().counts().unwrap()["pending"], 1);
}

/// Fails for one topic, delegates to fixtures otherwise.
struct FlakySource {
    failing_topic: &'static str,
}

#[async_trait]
impl FactSource for FlakySource {
    async fn gather(&self, job: &Job) -> content_pipeline::Result<Research> {
        if job.topic_key == self.failing_topic {
            return Err(PipelineError::Api {
                service: "Perplexity",
                message: "429 Too Many Requests".into(),
            });
        }
        FixtureSource::new().gather(job).await
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

#[tokio::test]
async fn test_api_failure_is_contained_to_its_job() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    enqueue(&config, &["location:tampa-bay", "location:galveston-bay"]);

    let runner = PipelineRunner::new(
        Scheduler::new(FileJobStore::new(config.jobs_path()), config.scheduler_config()),
        TopicRegistry::new(config.topics_path()),
        Publisher::new(config.content_dir.clone(), Arc::new(NoopRevalidator)),
        Arc::new(FlakySource {
            failing_topic: "location:tampa-bay",
        }),
    );
    let summary = runner.run(10).await.unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.published, vec!["/locations/galveston-bay"]);

    let failed = runner
        .scheduler()
        .find_by_topic("location:tampa-bay")
        .unwrap()
        .unwrap();
    assert_eq!(
        failed.error.as_deref(),
        Some("Perplexity API error: 429 Too Many Requests")
    );
}

#[tokio::test]
async fn test_already_published_topic_is_skipped_not_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let runner = app::build_runner(&config).unwrap();
    runner.publish_topic("how-to:tie-a-palomar-knot").await.unwrap();

    enqueue(&config, &["how-to:tie-a-palomar-knot"]);
    let summary = runner.run(10).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(runner.scheduler().check_consecutive_failures().unwrap(), 0);
}
