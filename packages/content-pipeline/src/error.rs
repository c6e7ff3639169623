//! Typed errors for the content pipeline.
//!
//! Per-job errors are caught by the runner and stored on the job as their
//! `Display` string; only queue I/O problems escape a run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Topic already published; the job is skipped, not failed
    #[error("topic already exists: {topic_key}")]
    TopicExists { topic_key: String },

    /// Generated document did not pass validation
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("job not found: {job_id}")]
    JobNotFound { job_id: String },

    /// Topic key without a known page-type prefix
    #[error("invalid topic key: {topic_key}")]
    InvalidTopicKey { topic_key: String },

    /// Fact source returned nothing usable
    #[error("no source documents for: {topic_key}")]
    NoSources { topic_key: String },

    /// External API answered with an error
    #[error("{service} API error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },

    /// Required credential missing for a command
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Whether the job should be marked skipped rather than failed.
    pub fn is_skip(&self) -> bool {
        matches!(self, PipelineError::TopicExists { .. })
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_joined() {
        let err = PipelineError::Validation {
            errors: vec!["title is required".into(), "word count 12 must exceed 250".into()],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: title is required; word count 12 must exceed 250"
        );
    }

    #[test]
    fn test_only_topic_exists_is_a_skip() {
        assert!(PipelineError::TopicExists { topic_key: "blog:x".into() }.is_skip());
        assert!(!PipelineError::NoSources { topic_key: "blog:x".into() }.is_skip());
    }
}
