//! Cache revalidation webhook.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::secrets::{self, SecretString};

/// Tells the site to rebuild cached pages.
#[async_trait]
pub trait Revalidator: Send + Sync {
    async fn revalidate(&self, paths: &[String]) -> Result<()>;

    fn name(&self) -> &str;
}

#[derive(Serialize)]
struct RevalidateRequest<'a> {
    paths: &'a [String],
}

/// POSTs `{"paths": [...]}` with a bearer secret.
pub struct HttpRevalidator {
    client: reqwest::Client,
    url: String,
    secret: SecretString,
}

impl HttpRevalidator {
    pub fn new(client: reqwest::Client, url: impl Into<String>, secret: SecretString) -> Self {
        Self {
            client,
            url: url.into(),
            secret,
        }
    }
}

#[async_trait]
impl Revalidator for HttpRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<()> {
        let request = self.client.post(&self.url).json(&RevalidateRequest { paths });
        let response = secrets::bearer(request, &self.secret).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Api {
                service: "revalidate",
                message: format!("{}: {}", status, body),
            });
        }

        debug!(paths = ?paths, "Revalidated");
        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Used when no webhook is configured.
pub struct NoopRevalidator;

#[async_trait]
impl Revalidator for NoopRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<()> {
        debug!(paths = ?paths, "Revalidation not configured, skipping");
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
