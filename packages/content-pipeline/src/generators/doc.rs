//! Published page documents.

use chrono::{DateTime, Utc};
use extraction::text::word_count;
use serde::{Deserialize, Serialize};

use crate::brief::Source;
use crate::page_type::PageType;

/// Metadata shared by every page type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub sources: Vec<Source>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub word_count: usize,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub meta: DocMeta,
    pub intro: String,
    pub sections: Vec<Section>,
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub related_species: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesGuide {
    pub meta: DocMeta,
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub overview: String,
    pub habitat: String,
    pub diet: String,
    pub size: String,
    pub best_season: String,
    pub techniques: Vec<String>,
    pub key_facts: Vec<String>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToGuide {
    pub meta: DocMeta,
    pub intro: String,
    pub difficulty: String,
    pub gear: Vec<String>,
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGuide {
    pub meta: DocMeta,
    pub name: String,
    pub region: String,
    pub overview: String,
    pub target_species: Vec<String>,
    pub best_seasons: String,
    pub access: Vec<String>,
    pub tips: Vec<String>,
    pub faqs: Vec<Faq>,
}

/// A page document, tagged by page type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pageType", rename_all = "kebab-case")]
pub enum ContentDoc {
    Blog(BlogPost),
    Species(SpeciesGuide),
    HowTo(HowToGuide),
    Location(LocationGuide),
}

impl ContentDoc {
    pub fn page_type(&self) -> PageType {
        match self {
            ContentDoc::Blog(_) => PageType::Blog,
            ContentDoc::Species(_) => PageType::Species,
            ContentDoc::HowTo(_) => PageType::HowTo,
            ContentDoc::Location(_) => PageType::Location,
        }
    }

    pub fn meta(&self) -> &DocMeta {
        match self {
            ContentDoc::Blog(doc) => &doc.meta,
            ContentDoc::Species(doc) => &doc.meta,
            ContentDoc::HowTo(doc) => &doc.meta,
            ContentDoc::Location(doc) => &doc.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut DocMeta {
        match self {
            ContentDoc::Blog(doc) => &mut doc.meta,
            ContentDoc::Species(doc) => &mut doc.meta,
            ContentDoc::HowTo(doc) => &mut doc.meta,
            ContentDoc::Location(doc) => &mut doc.meta,
        }
    }

    pub fn slug(&self) -> &str {
        &self.meta().slug
    }

    pub fn faqs(&self) -> &[Faq] {
        match self {
            ContentDoc::Blog(doc) => &doc.faqs,
            ContentDoc::Species(doc) => &doc.faqs,
            ContentDoc::HowTo(doc) => &doc.faqs,
            ContentDoc::Location(doc) => &doc.faqs,
        }
    }

    pub fn route_path(&self) -> String {
        self.page_type().route_for(self.slug())
    }

    /// Words across every rendered text field.
    pub fn count_words(&self) -> usize {
        let meta = self.meta();
        let mut total = word_count(&meta.title) + word_count(&meta.description);
        total += self
            .faqs()
            .iter()
            .map(|f| word_count(&f.question) + word_count(&f.answer))
            .sum::<usize>();

        total += match self {
            ContentDoc::Blog(doc) => {
                word_count(&doc.intro)
                    + doc
                        .sections
                        .iter()
                        .map(|s| word_count(&s.heading) + word_count(&s.body))
                        .sum::<usize>()
            }
            ContentDoc::Species(doc) => {
                [&doc.overview, &doc.habitat, &doc.diet, &doc.size, &doc.best_season]
                    .iter()
                    .map(|t| word_count(t))
                    .sum::<usize>()
                    + words_in(&doc.techniques)
                    + words_in(&doc.key_facts)
            }
            ContentDoc::HowTo(doc) => {
                word_count(&doc.intro)
                    + words_in(&doc.gear)
                    + doc
                        .steps
                        .iter()
                        .map(|s| word_count(&s.title) + word_count(&s.body))
                        .sum::<usize>()
                    + words_in(&doc.tips)
            }
            ContentDoc::Location(doc) => {
                word_count(&doc.overview)
                    + word_count(&doc.best_seasons)
                    + words_in(&doc.target_species)
                    + words_in(&doc.access)
                    + words_in(&doc.tips)
            }
        };
        total
    }

    /// Recompute and store `meta.word_count`.
    pub fn refresh_word_count(&mut self) {
        let count = self.count_words();
        self.meta_mut().word_count = count;
    }
}

fn words_in(items: &[String]) -> usize {
    items.iter().map(|item| word_count(item)).sum()
}
