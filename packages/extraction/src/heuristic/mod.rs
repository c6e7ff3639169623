//! Heuristic extractor.
//!
//! Pure text processing: regexes over HTML and line-oriented text, no
//! grammar and no model. Swap in another [`Extractor`] for anything
//! smarter.

pub mod entities;
pub mod facts;
pub mod html;
pub mod quality;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::text::{truncate_chars, word_count};
use crate::traits::extractor::Extractor;
use crate::types::document::{Heading, RawDocument};
use crate::types::entity::EntityType;

const MAX_TITLE_CHARS: usize = 200;

static RE_MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.+?)\s*#*$").unwrap());
static RE_ANY_HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());

/// Thresholds for the heuristic extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum facts kept per document
    pub max_facts: usize,

    /// Documents below this word count are flagged
    pub min_words: usize,

    /// Documents below this score are flagged
    pub min_quality: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_facts: 20,
            min_words: 200,
            min_quality: 0.3,
        }
    }
}

/// Regex/heuristic implementation of [`Extractor`].
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor {
    config: ExtractorConfig,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

impl Extractor for HeuristicExtractor {
    fn extract(&self, mut doc: RawDocument) -> RawDocument {
        if doc.text.trim().is_empty() {
            if let Some(html) = doc.html.as_deref() {
                doc.text = html::html_to_text(html);
            }
        }

        doc.title = extract_title(doc.html.as_deref(), &doc.text);
        doc.headings = match doc.html.as_deref() {
            Some(html) => html::headings(html),
            None => markdown_headings(&doc.text),
        };
        doc.word_count = word_count(&doc.text);
        doc.content_hash = RawDocument::hash_content(&doc.text);

        doc.entities = entities::extract_entities(&doc.text);
        doc.species_hints = entities::hints(&doc.entities, EntityType::Species);
        doc.location_hints = entities::hints(&doc.entities, EntityType::Location);

        let source = doc.url.clone();
        let fetched_at = doc.fetched_at;
        doc.extracted_facts = facts::extract_facts(&doc.text, self.config.max_facts)
            .into_iter()
            .map(|fact| {
                let category = facts::categorize(&fact.claim);
                let scope = facts::scope_of(&fact.claim, entities::mentions_location(&fact.claim));
                fact.with_source(source.clone())
                    .with_observed_at(fetched_at)
                    .with_category(category)
                    .with_scope(scope)
            })
            .collect();

        doc.quality_score = quality::quality_score(&doc);
        doc.content_type = quality::classify(&doc.headings);
        doc.low_quality =
            doc.quality_score < self.config.min_quality || doc.word_count < self.config.min_words;

        if doc.low_quality {
            warn!(
                url = %doc.url,
                quality_score = doc.quality_score,
                word_count = doc.word_count,
                "Low-quality source document"
            );
        }

        debug!(
            url = %doc.url,
            headings = doc.headings.len(),
            facts = doc.extracted_facts.len(),
            entities = doc.entities.len(),
            content_type = doc.content_type.as_str(),
            "Document extracted"
        );

        doc
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// `<h1>`, then `<title>`, then a markdown `#` line, then the first
/// non-empty line that is not a heading. Sub-headings never become the title.
fn extract_title(html: Option<&str>, text: &str) -> String {
    let from_html = html.and_then(|h| html::first_h1(h).or_else(|| html::title_tag(h)));
    let from_markdown = || {
        markdown_headings(text)
            .into_iter()
            .find(|heading| heading.level == 1)
            .map(|heading| heading.text)
    };

    let title = from_html.or_else(from_markdown).unwrap_or_else(|| {
        text.lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !RE_ANY_HEADING_LINE.is_match(line))
            .unwrap_or_default()
            .to_string()
    });

    truncate_chars(&title, MAX_TITLE_CHARS)
}

/// Markdown `#`, `##` and `###` lines.
fn markdown_headings(text: &str) -> Vec<Heading> {
    text.lines()
        .filter_map(|line| {
            let caps = RE_MD_HEADING.captures(line.trim())?;
            Some(Heading::new(caps[1].len() as u8, caps[2].to_string()))
        })
        .collect()
}
