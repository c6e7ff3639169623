//! Perplexity chat-completions client used for topic research.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};
use crate::secrets::{self, SecretString};

const SYSTEM_PROMPT: &str = "You are a fishing research assistant. Answer with short, \
factual markdown: a '#' title, '##' section headings and '-' bullet points. Prefer \
concrete numbers (sizes, depths, water temperatures, months) over general advice.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Answer text plus the URLs Perplexity cited for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchAnswer {
    pub query: String,
    pub content: String,
    pub citations: Vec<String>,
}

#[derive(Clone)]
pub struct PerplexityClient {
    http_client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl PerplexityClient {
    pub fn new(http_client: reqwest::Client, api_key: SecretString) -> Self {
        Self {
            http_client,
            api_key,
            model: "sonar".to_string(),
            base_url: "https://api.perplexity.ai".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (proxies, local test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Ask one research question.
    pub async fn research(&self, query: &str) -> Result<ResearchAnswer> {
        let start = std::time::Instant::now();
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
        };

        let builder = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request);
        let response = secrets::bearer(builder, &self.api_key).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Perplexity API error");
            return Err(PipelineError::Api {
                service: "Perplexity",
                message: format!("{}: {}", status, error_text),
            });
        }

        let raw: ChatResponseRaw = response.json().await?;
        let answer = into_answer(query, raw)?;

        debug!(
            model = %self.model,
            citations = answer.citations.len(),
            duration_ms = start.elapsed().as_millis(),
            "Perplexity research"
        );
        Ok(answer)
    }
}

fn into_answer(query: &str, raw: ChatResponseRaw) -> Result<ResearchAnswer> {
    let content = raw
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| PipelineError::Api {
            service: "Perplexity",
            message: "empty response".to_string(),
        })?;

    Ok(ResearchAnswer {
        query: query.to_string(),
        content,
        citations: raw.citations,
    })
}
