use extraction::FactCategory;

use super::{base_meta, claim_or, claims, paragraphs, top_claims, ContentDoc, Faq, SpeciesGuide};
use crate::brief::{title_case, Brief};
use crate::catalog;

pub fn generate_species(brief: &Brief) -> ContentDoc {
    let profile = catalog::species(&brief.slug);
    let name = brief
        .species
        .clone()
        .or_else(|| profile.map(|p| p.name.to_string()))
        .unwrap_or_else(|| title_case(&brief.slug.replace('-', " ")));

    let water = profile.map(|p| p.water).unwrap_or("local");
    let description = format!(
        "{} fishing guide: habitat, diet, size, best season and proven techniques for catching {} in {} water.",
        name, name, water
    );

    let overview = paragraphs([
        format!(
            "{} are a popular target for anglers who want a fish that rewards knowing its habits. Understanding where {} live, what they eat and how the seasons move them is the fastest way to catch more of them.",
            name, name
        ),
        "The notes below combine research sources with common guide advice. Regulations on size, bag limits and seasons change often, so always check the current rules before you keep a fish.".to_string(),
    ]);

    let habitat = claim_or(
        brief,
        FactCategory::Habitat,
        profile.map(|p| p.habitat).unwrap_or(
            "They relate to structure such as weed edges, rocks, docks and drop-offs where they can ambush passing bait.",
        ),
    );
    let diet = claim_or(
        brief,
        FactCategory::Diet,
        profile.map(|p| p.diet).unwrap_or(
            "They feed on whatever forage is most abundant, including small baitfish, insects, shrimp and crustaceans.",
        ),
    );
    let size = claim_or(
        brief,
        FactCategory::Size,
        profile.map(|p| p.size).unwrap_or(
            "Size varies widely by region and water body, and local records are the best guide to what is possible.",
        ),
    );
    let best_season = claim_or(
        brief,
        FactCategory::Season,
        profile.map(|p| p.best_season).unwrap_or(
            "Spring and fall usually offer the most reliable fishing, when water temperatures are moderate and fish feed actively.",
        ),
    );

    let mut techniques = claims(brief, FactCategory::Technique, 4);
    if techniques.is_empty() {
        techniques = match profile {
            Some(p) => p.techniques.iter().map(|t| t.to_string()).collect(),
            None => vec![
                "Match your lure size to the local forage".to_string(),
                "Work structure edges slowly and thoroughly".to_string(),
                "Fish low-light periods and moving water".to_string(),
            ],
        };
    }

    let faqs = vec![
        Faq::new(
            format!("Where do {} live?", name),
            habitat.clone(),
        ),
        Faq::new(
            format!("What is the best bait for {}?", name),
            format!(
                "Live bait that matches the local forage is hard to beat. {} Artificial lures that imitate the same prey work well once you find active fish.",
                diet
            ),
        ),
        Faq::new(
            format!("When is the best time to catch {}?", name),
            format!(
                "{} Within a day, the hours around dawn, dusk and peak tidal flow are usually most productive.",
                best_season
            ),
        ),
    ];

    ContentDoc::Species(SpeciesGuide {
        meta: base_meta(brief, &description),
        common_name: name,
        scientific_name: profile.map(|p| p.scientific_name.to_string()),
        overview,
        habitat,
        diet,
        size,
        best_season,
        techniques,
        key_facts: top_claims(brief, 6),
        faqs,
    })
}
