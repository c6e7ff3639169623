//! Content pipeline for a fishing site.
//!
//! Queues "generate this page" jobs, sources research notes, extracts
//! facts and entities from them, templates a page document per page type,
//! validates it and publishes it as JSON with a per-type content index.
//!
//! All state is whole-file JSON under the data and content directories.
//! Run one pipeline process at a time.

pub mod app;
pub mod brief;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod dedup;
pub mod error;
pub mod generators;
pub mod jobs;
pub mod page_type;
pub mod publisher;
pub mod runner;
pub mod secrets;
pub mod seed;
pub mod sources;
pub mod storage;
pub mod validator;

pub use brief::{build_brief, Brief, BriefInput, Source};
pub use config::Config;
pub use dedup::{resolve_slug_collision, TopicRegistry};
pub use error::{PipelineError, Result};
pub use generators::{generate, ContentDoc};
pub use jobs::{FileJobStore, Job, JobStatus, JobStore, MemoryJobStore, Scheduler, SchedulerConfig};
pub use page_type::{parse_topic_key, PageType};
pub use publisher::{PublishResult, Publisher};
pub use runner::{JobOutcome, PipelineRunner, RunSummary, StopReason};
pub use validator::{validate_doc, ValidationReport};
