//! `pipeline` CLI.
//!
//! Results go to stdout as JSON; logs go to stderr.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_pipeline::app;
use content_pipeline::seed::{seed, SeedRequest};
use content_pipeline::{Config, PageType};
use extraction::{fetch_and_extract, Extractor, HeuristicExtractor, HttpIngestor, RawDocument};

#[derive(Parser)]
#[command(name = "pipeline")]
#[command(about = "Generate, validate and publish fishing content pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue pending jobs for unused catalog topics
    Seed {
        #[arg(long = "type", value_enum)]
        page_type: PageType,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        priority: i32,
    },

    /// Process pending jobs
    Run {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Run one topic now, bypassing queue order
    Publish {
        #[arg(long = "topic-key", alias = "topicKey")]
        topic_key: String,
    },

    /// Print queue counts by status
    Status,

    /// Re-queue failed jobs that have attempts left
    Retry,

    /// Fetch URLs (repeatable) or read a file and print what the extractor finds
    Extract {
        #[arg(long = "url", conflicts_with = "file", required_unless_present = "file")]
        urls: Vec<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Ask the research API about a topic
    Research {
        #[arg(long)]
        query: String,
    },

    /// Look up monthly search volume
    Keywords {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    counts: BTreeMap<String, usize>,
    completed_today: usize,
    daily_publish_limit: usize,
    consecutive_failures: usize,
}

fn output<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,content_pipeline=debug,extraction=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Seed {
            page_type,
            count,
            priority,
        } => cmd_seed(&config, page_type, count, priority),
        Commands::Run { limit } => cmd_run(&config, limit).await,
        Commands::Publish { topic_key } => cmd_publish(&config, &topic_key).await,
        Commands::Status => cmd_status(&config),
        Commands::Retry => cmd_retry(&config),
        Commands::Extract { urls, file } => cmd_extract(&config, urls, file).await,
        Commands::Research { query } => cmd_research(&config, &query).await,
        Commands::Keywords { keywords } => cmd_keywords(&config, &keywords).await,
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_seed(config: &Config, page_type: PageType, count: usize, priority: i32) -> Result<()> {
    let request = SeedRequest {
        page_type,
        count,
        priority,
        max_attempts: config.job_max_attempts,
    };
    let jobs = seed(&app::scheduler(config), &app::registry(config), &request)
        .context("Failed to seed jobs")?;
    output(&jobs)
}

async fn cmd_run(config: &Config, limit: usize) -> Result<()> {
    let runner = app::build_runner(config)?;
    let summary = runner.run(limit).await.context("Pipeline run failed")?;
    output(&summary)?;

    if summary.circuit_breaker_tripped() {
        std::process::exit(1);
    }
    Ok(())
}

async fn cmd_publish(config: &Config, topic_key: &str) -> Result<()> {
    let runner = app::build_runner(config)?;
    let (job, _) = runner
        .publish_topic(topic_key)
        .await
        .with_context(|| format!("Failed to publish {}", topic_key))?;
    output(&job)
}

fn cmd_status(config: &Config) -> Result<()> {
    let scheduler = app::scheduler(config);
    output(&StatusReport {
        counts: scheduler.counts()?,
        completed_today: scheduler.completed_on(Utc::now())?,
        daily_publish_limit: config.daily_publish_limit,
        consecutive_failures: scheduler.check_consecutive_failures()?,
    })
}

fn cmd_retry(config: &Config) -> Result<()> {
    let requeued = app::scheduler(config).requeue_failed(Utc::now())?;
    output(&serde_json::json!({ "requeued": requeued }))
}

async fn cmd_extract(config: &Config, urls: Vec<String>, file: Option<PathBuf>) -> Result<()> {
    let extractor = HeuristicExtractor::new();

    if let Some(path) = file {
        let raw = RawDocument::from_file(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return output(&extractor.extract(raw));
    }

    let ingestor = HttpIngestor::with_timeout(Duration::from_secs(config.http_timeout_secs))?;
    let docs = fetch_and_extract(&ingestor, &extractor, &urls).await;
    if docs.is_empty() {
        anyhow::bail!("none of the {} URL(s) could be fetched", urls.len());
    }
    output(&docs)
}

async fn cmd_research(config: &Config, query: &str) -> Result<()> {
    let answer = app::perplexity_client(config)?.research(query).await?;
    output(&answer)
}

async fn cmd_keywords(config: &Config, keywords: &[String]) -> Result<()> {
    let volumes = app::dataforseo_client(config)?.search_volume(keywords).await?;
    output(&volumes)
}
