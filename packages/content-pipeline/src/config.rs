use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::jobs::SchedulerConfig;
use crate::secrets::SecretString;

/// Where research notes come from when a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactSourceKind {
    /// Deterministic offline notes built from the topic
    Fixture,
    Perplexity,
}

impl FromStr for FactSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(Self::Fixture),
            "perplexity" => Ok(Self::Perplexity),
            other => bail!("FACT_SOURCE must be 'fixture' or 'perplexity', got '{}'", other),
        }
    }
}

/// Pipeline configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Holds `jobs.json` and `topics.json`
    pub data_dir: PathBuf,
    /// Root of the published content tree
    pub content_dir: PathBuf,
    pub daily_publish_limit: usize,
    pub max_consecutive_failures: usize,
    pub job_max_attempts: u32,
    pub fact_source: FactSourceKind,
    pub perplexity_api_key: Option<SecretString>,
    pub perplexity_model: String,
    pub dataforseo_login: Option<String>,
    pub dataforseo_password: Option<SecretString>,
    pub revalidate_url: Option<String>,
    pub revalidate_secret: Option<SecretString>,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let perplexity_api_key = optional("PERPLEXITY_API_KEY").map(SecretString::from);
        let fact_source = match optional("FACT_SOURCE") {
            Some(value) => value.parse()?,
            None if perplexity_api_key.is_some() => FactSourceKind::Perplexity,
            None => FactSourceKind::Fixture,
        };
        if fact_source == FactSourceKind::Perplexity && perplexity_api_key.is_none() {
            bail!("FACT_SOURCE=perplexity requires PERPLEXITY_API_KEY");
        }

        Ok(Self {
            data_dir: env::var("PIPELINE_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            content_dir: env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "./content".to_string())
                .into(),
            daily_publish_limit: parse_or("DAILY_PUBLISH_LIMIT", 10)?,
            max_consecutive_failures: parse_or("MAX_CONSECUTIVE_FAILURES", 3)?,
            job_max_attempts: parse_or("JOB_MAX_ATTEMPTS", 3)?,
            fact_source,
            perplexity_api_key,
            perplexity_model: env::var("PERPLEXITY_MODEL").unwrap_or_else(|_| "sonar".to_string()),
            dataforseo_login: optional("DATAFORSEO_LOGIN"),
            dataforseo_password: optional("DATAFORSEO_PASSWORD").map(SecretString::from),
            revalidate_url: optional("REVALIDATE_URL"),
            revalidate_secret: optional("REVALIDATE_SECRET").map(SecretString::from),
            http_timeout_secs: parse_or("HTTP_TIMEOUT_SECS", 30)?,
        })
    }

    /// Offline configuration rooted at the given directories.
    pub fn local(data_dir: impl Into<PathBuf>, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            content_dir: content_dir.into(),
            daily_publish_limit: 10,
            max_consecutive_failures: 3,
            job_max_attempts: 3,
            fact_source: FactSourceKind::Fixture,
            perplexity_api_key: None,
            perplexity_model: "sonar".to_string(),
            dataforseo_login: None,
            dataforseo_password: None,
            revalidate_url: None,
            revalidate_secret: None,
            http_timeout_secs: 30,
        }
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.data_dir.join("jobs.json")
    }

    pub fn topics_path(&self) -> PathBuf {
        self.data_dir.join("topics.json")
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            daily_publish_limit: self.daily_publish_limit,
            max_consecutive_failures: self.max_consecutive_failures,
        }
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_source_kind_parse() {
        assert_eq!("Fixture".parse::<FactSourceKind>().unwrap(), FactSourceKind::Fixture);
        assert_eq!(" perplexity ".parse::<FactSourceKind>().unwrap(), FactSourceKind::Perplexity);
        assert!("tavily".parse::<FactSourceKind>().is_err());
    }

    #[test]
    fn test_local_paths() {
        let config = Config::local("/tmp/data", "/tmp/content");
        assert_eq!(config.jobs_path(), PathBuf::from("/tmp/data/jobs.json"));
        assert_eq!(config.topics_path(), PathBuf::from("/tmp/data/topics.json"));
        assert_eq!(config.scheduler_config().daily_publish_limit, 10);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = Config::local("data", "content");
        config.revalidate_secret = Some("rv-secret-123".into());
        assert!(!format!("{:?}", config).contains("rv-secret-123"));
    }
}
