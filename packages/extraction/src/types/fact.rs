//! Facts - short claims derived from source documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a claim, in characters.
pub const MAX_CLAIM_CHARS: usize = 200;

/// A short claim pulled from a source.
///
/// Claims are truncated paraphrase-length snippets, never long verbatim
/// passages of the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub claim: String,

    /// Heuristic confidence (0.0 to 1.0)
    pub confidence: f32,

    #[serde(default)]
    pub supporting_sources: Vec<String>,

    pub observed_at: DateTime<Utc>,

    #[serde(default)]
    pub scope: FactScope,

    #[serde(default)]
    pub category: FactCategory,
}

impl Fact {
    /// Create a fact, truncating the claim to [`MAX_CLAIM_CHARS`].
    pub fn new(claim: &str, confidence: f32) -> Self {
        Self {
            claim: crate::text::truncate_chars(claim.trim(), MAX_CLAIM_CHARS),
            confidence: confidence.clamp(0.0, 1.0),
            supporting_sources: Vec::new(),
            observed_at: Utc::now(),
            scope: FactScope::Global,
            category: FactCategory::Other,
        }
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.supporting_sources.push(url.into());
        self
    }

    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = observed_at;
        self
    }

    pub fn with_scope(mut self, scope: FactScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_category(mut self, category: FactCategory) -> Self {
        self.category = category;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FactScope {
    #[default]
    Global,
    Regional,
    Seasonal,
    LocationSpecific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    Habitat,
    Diet,
    Size,
    Season,
    Technique,
    Weather,
    #[default]
    Other,
}

impl FactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactCategory::Habitat => "habitat",
            FactCategory::Diet => "diet",
            FactCategory::Size => "size",
            FactCategory::Season => "season",
            FactCategory::Technique => "technique",
            FactCategory::Weather => "weather",
            FactCategory::Other => "other",
        }
    }
}
