use extraction::FactCategory;

use super::{base_meta, claim_or, claims, paragraphs, ContentDoc, Faq, LocationGuide};
use crate::brief::{title_case, Brief};
use crate::catalog;

pub fn generate_location(brief: &Brief) -> ContentDoc {
    let profile = catalog::location(&brief.slug);
    let name = brief
        .location
        .clone()
        .or_else(|| profile.map(|p| p.name.to_string()))
        .unwrap_or_else(|| title_case(&brief.slug.replace('-', " ")));
    let region = profile.map(|p| p.region).unwrap_or("United States").to_string();

    let target_species: Vec<String> = match profile {
        Some(p) => p
            .species
            .iter()
            .filter_map(|slug| catalog::species(slug))
            .map(|s| s.name.to_string())
            .collect(),
        None => brief.related_species.clone(),
    };

    let description = format!(
        "Fishing {}: target species, best seasons, access points and local tips for planning a trip in {}.",
        name, region
    );

    let overview = paragraphs([
        profile.map(|p| p.overview.to_string()).unwrap_or_else(|| {
            format!(
                "{} offers a mix of water and structure that holds fish through most of the year.",
                name
            )
        }),
        format!(
            "This guide covers what to target in {}, when to go and where anglers get on the water. Local conditions change with weather, tides and fishing pressure, so check recent reports before you launch.",
            name
        ),
    ]);

    let best_seasons = claim_or(
        brief,
        FactCategory::Season,
        profile.map(|p| p.best_seasons).unwrap_or(
            "Spring and fall are usually the most productive seasons, with summer mornings and mild winter days also worth fishing.",
        ),
    );

    let access = match profile {
        Some(p) => p.access.iter().map(|a| a.to_string()).collect(),
        None => vec![
            "Public boat ramps and launches give access to the main fishing areas.".to_string(),
            "Shoreline parks and piers offer options for anglers without a boat.".to_string(),
        ],
    };

    let mut tips = claims(brief, FactCategory::Technique, 2);
    tips.extend(claims(brief, FactCategory::Weather, 1));
    tips.extend([
        "Check local regulations for size limits, bag limits and closed seasons before you keep a fish.".to_string(),
        "Plan around the tide and wind forecast, since both decide which spots are fishable.".to_string(),
        "Hiring a local guide for the first trip shortens the learning curve considerably.".to_string(),
    ]);

    let species_list = if target_species.is_empty() {
        "a variety of local species".to_string()
    } else {
        target_species.join(", ")
    };

    let faqs = vec![
        Faq::new(
            format!("What fish can you catch in {}?", name),
            format!(
                "Anglers in {} regularly target {}. What bites best depends on the season and the water temperature.",
                name, species_list
            ),
        ),
        Faq::new(
            format!("When is the best time to fish {}?", name),
            best_seasons.clone(),
        ),
        Faq::new(
            "Do I need a fishing license?",
            "Most anglers need a state fishing license, and some waters require additional permits or stamps. Buy one online before your trip and carry it while fishing.",
        ),
    ];

    ContentDoc::Location(LocationGuide {
        meta: base_meta(brief, &description),
        name,
        region,
        overview,
        target_species,
        best_seasons,
        access,
        tips,
        faqs,
    })
}
