//! Template generators, one per page type.
//!
//! Each generator is a pure function from a [`Brief`] to a [`ContentDoc`].
//! Facts from the brief fill the body first; catalog profiles and generic
//! prose cover whatever the sources did not.

mod blog;
mod doc;
mod how_to;
mod location;
mod species;

pub use blog::generate_blog;
pub use doc::{
    BlogPost, ContentDoc, DocMeta, Faq, HowToGuide, LocationGuide, Section, SpeciesGuide, Step,
};
pub use how_to::generate_how_to;
pub use location::generate_location;
pub use species::generate_species;

use chrono::Utc;
use extraction::text::truncate_chars;
use extraction::FactCategory;

use crate::brief::Brief;
use crate::page_type::PageType;

/// Longest description a generator emits.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

/// Dispatch on the brief's page type.
pub fn generate(brief: &Brief) -> ContentDoc {
    let mut doc = match brief.page_type {
        PageType::Blog => generate_blog(brief),
        PageType::Species => generate_species(brief),
        PageType::HowTo => generate_how_to(brief),
        PageType::Location => generate_location(brief),
    };
    doc.refresh_word_count();
    doc
}

fn base_meta(brief: &Brief, description: &str) -> DocMeta {
    let now = Utc::now();
    DocMeta {
        slug: brief.slug.clone(),
        title: brief.title.clone(),
        description: truncate_chars(description.trim(), MAX_DESCRIPTION_CHARS),
        category: brief.category.clone(),
        keywords: brief.keywords.clone(),
        sources: brief.sources.clone(),
        published_at: now,
        updated_at: now,
        word_count: 0,
        featured: false,
        draft: false,
    }
}

/// Up to `limit` claims of one category, highest confidence first.
fn claims(brief: &Brief, category: FactCategory, limit: usize) -> Vec<String> {
    brief
        .facts_in(category)
        .take(limit)
        .map(|f| sentence(&f.claim))
        .collect()
}

/// Up to `limit` claims of any category.
fn top_claims(brief: &Brief, limit: usize) -> Vec<String> {
    brief.facts.iter().take(limit).map(|f| sentence(&f.claim)).collect()
}

/// First claim of a category, else the fallback.
fn claim_or(brief: &Brief, category: FactCategory, fallback: &str) -> String {
    brief
        .facts_in(category)
        .next()
        .map(|f| sentence(&f.claim))
        .unwrap_or_else(|| fallback.to_string())
}

/// Terminate a claim as a sentence.
fn sentence(claim: &str) -> String {
    let trimmed = claim.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Join paragraphs with a blank line, skipping empty ones.
fn paragraphs<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
