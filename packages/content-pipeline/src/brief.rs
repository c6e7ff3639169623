//! Brief builder: the single input every generator works from.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use extraction::Fact;
use serde::{Deserialize, Serialize};

use crate::page_type::PageType;

const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// A cited source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Source {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Raw material for a brief. Anything left empty gets a default.
#[derive(Debug, Clone)]
pub struct BriefInput {
    pub page_type: PageType,
    pub topic_key: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub primary_keyword: Option<String>,
    pub keywords: Vec<String>,
    pub facts: Vec<Fact>,
    pub sources: Vec<Source>,
    pub species: Option<String>,
    pub location: Option<String>,
    /// Species mentioned across the sources
    pub related_species: Vec<String>,
    pub category: Option<String>,
}

impl BriefInput {
    pub fn new(page_type: PageType, topic_key: impl Into<String>) -> Self {
        Self {
            page_type,
            topic_key: topic_key.into(),
            slug: None,
            title: None,
            primary_keyword: None,
            keywords: Vec::new(),
            facts: Vec::new(),
            sources: Vec::new(),
            species: None,
            location: None,
            related_species: Vec::new(),
            category: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub page_type: PageType,
    pub topic_key: String,
    pub slug: String,
    pub title: String,
    pub primary_keyword: String,
    pub keywords: Vec<String>,
    /// Highest confidence first
    pub facts: Vec<Fact>,
    pub sources: Vec<Source>,
    pub species: Option<String>,
    pub location: Option<String>,
    pub related_species: Vec<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Brief {
    /// Facts whose category matches, in confidence order.
    pub fn facts_in(&self, category: extraction::FactCategory) -> impl Iterator<Item = &Fact> {
        self.facts.iter().filter(move |f| f.category == category)
    }
}

/// Shape a [`BriefInput`] into a [`Brief`], filling defaults.
///
/// Pure data shaping; nothing is validated here.
pub fn build_brief(input: BriefInput) -> Brief {
    let page_type = input.page_type;
    let slug = input
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slug_from_topic_key(&input.topic_key));

    let title = input
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| default_title(page_type, &slug));

    let primary_keyword = input
        .primary_keyword
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| default_primary_keyword(page_type, &slug));

    let mut seen = HashSet::new();
    let keywords = std::iter::once(primary_keyword.clone())
        .chain(input.keywords)
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect();

    let mut facts = input.facts;
    facts.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut seen_species = HashSet::new();
    let related_species = input
        .related_species
        .into_iter()
        .filter(|s| seen_species.insert(s.to_lowercase()))
        .collect();

    let mut seen_urls = HashSet::new();
    let sources = input
        .sources
        .into_iter()
        .filter(|s| seen_urls.insert(s.url.clone()))
        .collect();

    Brief {
        page_type,
        topic_key: input.topic_key,
        slug,
        title,
        primary_keyword,
        keywords,
        facts,
        sources,
        species: input.species,
        location: input.location,
        related_species,
        category: input
            .category
            .unwrap_or_else(|| default_category(page_type).to_string()),
        created_at: Utc::now(),
    }
}

fn slug_from_topic_key(topic_key: &str) -> String {
    let raw = topic_key
        .split_once(':')
        .map(|(_, slug)| slug)
        .unwrap_or(topic_key);
    extraction::text::slugify(raw)
}

fn default_title(page_type: PageType, slug: &str) -> String {
    let words = slug.replace('-', " ");
    match page_type {
        PageType::Blog => title_case(&words),
        PageType::HowTo if slug.starts_with("how-to-") => title_case(&words),
        PageType::HowTo => title_case(&format!("how to {}", words)),
        PageType::Species | PageType::Location => {
            format!("{} Fishing Guide", title_case(&words))
        }
    }
}

fn default_primary_keyword(page_type: PageType, slug: &str) -> String {
    let words = slug.replace('-', " ");
    match page_type {
        PageType::Blog => words,
        PageType::HowTo if slug.starts_with("how-to-") => words,
        PageType::HowTo => format!("how to {}", words),
        PageType::Species | PageType::Location => format!("{} fishing", words),
    }
}

fn default_category(page_type: PageType) -> &'static str {
    match page_type {
        PageType::Blog => "tips",
        PageType::Species => "species",
        PageType::HowTo => "how-to",
        PageType::Location => "locations",
    }
}

/// Headline case: every word capitalized except short joiners after the first.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && SMALL_WORDS.contains(&lower.as_str()) {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_topic_key() {
        let brief = build_brief(BriefInput::new(PageType::Blog, "blog:best-lures-for-snook"));

        assert_eq!(brief.slug, "best-lures-for-snook");
        assert_eq!(brief.title, "Best Lures for Snook");
        assert_eq!(brief.primary_keyword, "best lures for snook");
        assert_eq!(brief.keywords, vec!["best lures for snook"]);
        assert_eq!(brief.category, "tips");
    }

    #[test]
    fn test_page_type_aware_titles() {
        let how_to = build_brief(BriefInput::new(PageType::HowTo, "how-to:tie-a-palomar-knot"));
        assert_eq!(how_to.title, "How to Tie a Palomar Knot");
        assert_eq!(how_to.primary_keyword, "how to tie a palomar knot");

        let location = build_brief(BriefInput::new(PageType::Location, "location:tampa-bay"));
        assert_eq!(location.title, "Tampa Bay Fishing Guide");
        assert_eq!(location.primary_keyword, "tampa bay fishing");
    }

    #[test]
    fn test_keywords_sources_and_facts_are_shaped() {
        let mut input = BriefInput::new(PageType::Species, "species:snook");
        input.keywords = vec!["Snook Fishing".into(), "tampa bay".into(), " ".into()];
        input.sources = vec![
            Source::new("https://a.example/snook"),
            Source::new("https://a.example/snook").with_title("dup"),
            Source::new("https://b.example/snook"),
        ];
        input.facts = vec![
            Fact::new("Snook prefer water above 60 degrees", 0.6),
            Fact::new("Snook hold near mangrove shorelines", 0.7),
        ];

        let brief = build_brief(input);

        assert_eq!(brief.keywords, vec!["snook fishing", "tampa bay"]);
        assert_eq!(brief.sources.len(), 2);
        assert!(brief.sources[0].title.is_none());
        assert_eq!(brief.facts[0].confidence, 0.7);
    }

    #[test]
    fn test_explicit_fields_win() {
        let mut input = BriefInput::new(PageType::Blog, "blog:x");
        input.slug = Some("custom-slug".into());
        input.title = Some("A Custom Title".into());
        input.category = Some("gear".into());

        let brief = build_brief(input);
        assert_eq!(brief.slug, "custom-slug");
        assert_eq!(brief.title, "A Custom Title");
        assert_eq!(brief.category, "gear");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("when to catch speckled trout"), "When to Catch Speckled Trout");
        assert_eq!(title_case("the   outer banks"), "The Outer Banks");
    }
}
