//! Offline research notes built from the topic catalog.

use async_trait::async_trait;
use extraction::RawDocument;
use tracing::debug;

use super::{FactSource, Research};
use crate::brief::title_case;
use crate::catalog::{self, SpeciesProfile};
use crate::error::Result;
use crate::jobs::Job;
use crate::page_type::{parse_topic_key, PageType};

/// Deterministic research backend: same job, same notes.
///
/// Used when no research API is configured, and in tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    /// Markdown notes for a topic.
    pub fn notes(page_type: PageType, slug: &str) -> String {
        match page_type {
            PageType::Species => match catalog::species(slug) {
                Some(profile) => species_notes(profile),
                None => generic_notes(slug),
            },
            PageType::Blog => match catalog::blog_topic(slug) {
                Some(topic) => format!(
                    "{}\n## Angle\n\n- This post covers {} with a focus on {} advice for anglers.\n",
                    species_notes(&topic.species),
                    slug.replace('-', " "),
                    topic.template.category
                ),
                None => generic_notes(slug),
            },
            PageType::HowTo => match catalog::how_to(slug) {
                Some(profile) => {
                    let mut notes = format!("# {}\n\n## Gear\n\n", profile.title);
                    for item in profile.gear {
                        notes.push_str(&format!("- {}\n", item));
                    }
                    notes.push_str("\n## Steps\n\n");
                    for (i, (title, body)) in profile.steps.iter().enumerate() {
                        notes.push_str(&format!("{}. {}: {}\n", i + 1, title, body));
                    }
                    notes
                }
                None => generic_notes(slug),
            },
            PageType::Location => match catalog::location(slug) {
                Some(profile) => {
                    let species: Vec<&str> = profile
                        .species
                        .iter()
                        .filter_map(|s| catalog::species(s))
                        .map(|s| s.name)
                        .collect();
                    let mut notes = format!(
                        "# Fishing {}\n\n## Overview\n\n{} It is located in the {} region.\n\n## Seasons\n\n- {}\n\n## Target Species\n\n",
                        profile.name, profile.overview, profile.region, profile.best_seasons
                    );
                    for name in species {
                        notes.push_str(&format!("- {} are commonly caught in {}.\n", name, profile.name));
                    }
                    notes.push_str("\n## Access\n\n");
                    for access in profile.access {
                        notes.push_str(&format!("- {}\n", access));
                    }
                    notes
                }
                None => generic_notes(slug),
            },
        }
    }
}

fn species_notes(profile: &SpeciesProfile) -> String {
    let mut notes = format!(
        "# {} ({})\n\n## Habitat\n\n- {}\n\n## Diet\n\n- {}\n\n## Size\n\n- {}\n\n## Season\n\n- {}\n\n## Techniques\n\n",
        profile.name,
        profile.scientific_name,
        profile.habitat,
        profile.diet,
        profile.size,
        profile.best_season
    );
    for technique in profile.techniques {
        notes.push_str(&format!("- {}\n", technique));
    }
    notes.push_str(&format!(
        "\n## Range\n\n- {} are a {} species commonly found in {}.\n",
        profile.name,
        profile.water,
        profile.regions.join(", ")
    ));
    notes
}

fn generic_notes(slug: &str) -> String {
    let subject = title_case(&slug.replace('-', " "));
    format!(
        "# {subject}\n\n## Overview\n\n- Anglers usually find the best action around structure and moving water.\n- Fish typically feed most actively at dawn, at dusk and during tide changes.\n\n## Tackle\n\n- A medium spinning rod with 10 to 20 pound braid covers most situations.\n"
    )
}

#[async_trait]
impl FactSource for FixtureSource {
    async fn gather(&self, job: &Job) -> Result<Research> {
        let (page_type, slug) = parse_topic_key(&job.topic_key)?;
        let notes = Self::notes(page_type, &slug);
        debug!(topic_key = %job.topic_key, chars = notes.len(), "Fixture research notes");

        let document = RawDocument::new(format!("fixture:{}", job.topic_key), notes);
        Ok(Research {
            documents: vec![document],
            citations: Vec::new(),
        })
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gather_is_deterministic() {
        let job = Job::immediate(PageType::Species, "species:snook");
        let source = FixtureSource::new();

        let first = source.gather(&job).await.unwrap();
        let second = source.gather(&job).await.unwrap();

        assert_eq!(first.documents.len(), 1);
        assert_eq!(first.documents[0].text, second.documents[0].text);
        assert!(first.documents[0].text.starts_with("# Snook (Centropomus undecimalis)"));
    }

    #[test]
    fn test_location_notes_list_species() {
        let notes = FixtureSource::notes(PageType::Location, "tampa-bay");
        assert!(notes.contains("- Snook are commonly caught in Tampa Bay."));
    }

    #[tokio::test]
    async fn test_bad_topic_key_is_an_error() {
        let job = Job::immediate(PageType::Blog, "not-a-topic-key");
        assert!(FixtureSource::new().gather(&job).await.is_err());
    }
}
