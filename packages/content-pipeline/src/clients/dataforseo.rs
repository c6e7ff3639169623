//! DataForSEO keyword search-volume lookup.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};
use crate::secrets::{self, SecretString};

/// United States
const LOCATION_CODE: u32 = 2840;
const LANGUAGE_CODE: &str = "en";

#[derive(Debug, Serialize)]
struct VolumeTask<'a> {
    keywords: &'a [String],
    location_code: u32,
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct VolumeResponse {
    status_code: u32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    tasks: Vec<VolumeTaskResult>,
}

#[derive(Debug, Deserialize)]
struct VolumeTaskResult {
    #[serde(default)]
    result: Option<Vec<KeywordVolume>>,
}

/// Monthly search statistics for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordVolume {
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Option<u64>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub cpc: Option<f64>,
}

#[derive(Clone)]
pub struct DataForSeoClient {
    http_client: reqwest::Client,
    login: String,
    password: SecretString,
    base_url: String,
}

impl DataForSeoClient {
    pub fn new(http_client: reqwest::Client, login: impl Into<String>, password: SecretString) -> Self {
        Self {
            http_client,
            login: login.into(),
            password,
            base_url: "https://api.dataforseo.com/v3".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Google Ads search volume for up to 1000 keywords.
    pub async fn search_volume(&self, keywords: &[String]) -> Result<Vec<KeywordVolume>> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let tasks = [VolumeTask {
            keywords,
            location_code: LOCATION_CODE,
            language_code: LANGUAGE_CODE,
        }];

        let request = self
            .http_client
            .post(format!(
                "{}/keywords_data/google_ads/search_volume/live",
                self.base_url
            ))
            .json(&tasks);
        let response = secrets::basic(request, &self.login, &self.password)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "DataForSEO API error");
            return Err(PipelineError::Api {
                service: "DataForSEO",
                message: format!("{}: {}", status, error_text),
            });
        }

        let raw: VolumeResponse = response.json().await?;
        let volumes = into_volumes(raw)?;
        debug!(keywords = keywords.len(), results = volumes.len(), "DataForSEO search volume");
        Ok(volumes)
    }
}

fn into_volumes(raw: VolumeResponse) -> Result<Vec<KeywordVolume>> {
    // 20000 is DataForSEO's "Ok."
    if raw.status_code != 20000 {
        return Err(PipelineError::Api {
            service: "DataForSEO",
            message: format!("{} {}", raw.status_code, raw.status_message),
        });
    }

    Ok(raw
        .tasks
        .into_iter()
        .filter_map(|task| task.result)
        .flatten()
        .collect())
}
