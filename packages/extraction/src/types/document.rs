//! Raw document types - fetched sources and their extracted structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{ExtractionError, Result};

use super::entity::Entity;
use super::fact::Fact;

/// A fetched source document.
///
/// Created by an ingestor or fact source with `url`, `text` and optionally
/// `html` filled in. The extractor populates everything else in place and
/// hands the same document back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// URL or identifier of the source
    pub url: String,

    /// Raw HTML if the source was a web page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Plain text or markdown content
    #[serde(default)]
    pub text: String,

    /// Extracted title
    #[serde(default)]
    pub title: String,

    /// h1-h3 headings in document order
    #[serde(default)]
    pub headings: Vec<Heading>,

    /// Candidate facts, shortest first
    #[serde(default)]
    pub extracted_facts: Vec<Fact>,

    /// Species and location mentions
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Normalized location names
    #[serde(default)]
    pub location_hints: Vec<String>,

    /// Normalized species names
    #[serde(default)]
    pub species_hints: Vec<String>,

    #[serde(default)]
    pub word_count: usize,

    /// Heuristic usability score (0.0 to 1.0)
    #[serde(default)]
    pub quality_score: f32,

    /// Set when the score or word count is below the usable threshold
    #[serde(default)]
    pub low_quality: bool,

    #[serde(default)]
    pub content_type: ContentType,

    /// SHA-256 of `text`, filled by the extractor
    #[serde(default)]
    pub content_hash: String,

    /// When the source was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    /// Create a document from plain text.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: None,
            text: text.into(),
            title: String::new(),
            headings: Vec::new(),
            extracted_facts: Vec::new(),
            entities: Vec::new(),
            location_hints: Vec::new(),
            species_hints: Vec::new(),
            word_count: 0,
            quality_score: 0.0,
            low_quality: false,
            content_type: ContentType::Unknown,
            content_hash: String::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Create a document from HTML. The text is derived during extraction.
    pub fn from_html(url: impl Into<String>, html: impl Into<String>) -> Self {
        let mut doc = Self::new(url, String::new());
        doc.html = Some(html.into());
        doc
    }

    /// Set the plain text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Calculate SHA-256 hash of content.
    pub fn hash_content(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Load a local document: `.html`/`.htm` as HTML, `.json` as a
    /// serialized `RawDocument`, anything else as plain text.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let url = format!("file://{}", path.display());

        let doc = match path.extension().and_then(|e| e.to_str()) {
            Some("html") | Some("htm") => Self::from_html(url, content),
            Some("json") => serde_json::from_str(&content)?,
            _ => Self::new(url, content),
        };

        if !doc.has_content() {
            return Err(ExtractionError::EmptyDocument { url: doc.url });
        }
        Ok(doc)
    }

    /// Check if this document has anything to extract from.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || self.html.as_deref().is_some_and(|h| !h.trim().is_empty())
    }
}

/// A heading with its level and anchor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let id = crate::text::slugify(&text);
        Self { level, text, id }
    }
}

/// Coarse classification of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Guide,
    Article,
    #[default]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Guide => "guide",
            ContentType::Article => "article",
            ContentType::Unknown => "unknown",
        }
    }
}
