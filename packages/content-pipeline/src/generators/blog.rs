use extraction::FactCategory;

use super::{base_meta, claim_or, claims, paragraphs, top_claims, BlogPost, ContentDoc, Faq, Section};
use crate::brief::Brief;
use crate::catalog;

pub fn generate_blog(brief: &Brief) -> ContentDoc {
    let topic = catalog::blog_topic(&brief.slug);
    let profile = topic.map(|t| t.species);
    let subject = brief
        .species
        .clone()
        .or_else(|| profile.map(|p| p.name.to_string()))
        .unwrap_or_else(|| brief.primary_keyword.clone());

    let description = format!(
        "{}: practical advice on where {} hold, what they eat, which tackle works and when to go, built from field reports and research notes.",
        brief.title, subject
    );

    let intro = paragraphs([
        format!(
            "Anglers search for \"{}\" because a little preparation turns a slow day into a good one. This guide pulls together what local reports and research notes say about {}, so you can spend less time guessing and more time with a bent rod.",
            brief.primary_keyword, subject
        ),
        "Conditions change from one coast to the next, so treat these notes as a starting point and adjust to the water in front of you.".to_string(),
    ]);

    let habitat = claim_or(
        brief,
        FactCategory::Habitat,
        profile.map(|p| p.habitat).unwrap_or(
            "Most fish relate to some kind of structure: grass edges, oyster bars, docks, drop-offs or current seams that funnel bait past an ambush point.",
        ),
    );
    let diet = claim_or(
        brief,
        FactCategory::Diet,
        profile.map(|p| p.diet).unwrap_or(
            "Match the most common forage in the area, whether that is shrimp, crabs or small baitfish, and the bite gets easier.",
        ),
    );

    let mut technique_notes = claims(brief, FactCategory::Technique, 3);
    if technique_notes.is_empty() {
        if let Some(p) = profile {
            technique_notes = p.techniques.iter().map(|t| format!("{}.", t)).collect();
        }
    }

    let season = claim_or(
        brief,
        FactCategory::Season,
        profile.map(|p| p.best_season).unwrap_or(
            "Spring and fall usually bring the most consistent action, when water temperatures are moderate and bait is on the move.",
        ),
    );
    let weather = claims(brief, FactCategory::Weather, 2);

    let mut sections = vec![
        Section::new(
            format!("Where to Find {}", subject),
            paragraphs([
                habitat,
                diet,
                "Start by covering water until you find bait, then slow down and fish that area thoroughly before moving on.".to_string(),
            ]),
        ),
        Section::new(
            "Tackle and Techniques",
            paragraphs([
                technique_notes.join(" "),
                "A medium spinning outfit with 10 to 20 pound braid and a fluorocarbon leader covers most inshore situations. Keep a few soft plastics, a topwater plug and a spoon tied on so you can switch quickly when the fish tell you what they want.".to_string(),
            ]),
        ),
        Section::new(
            "Timing and Conditions",
            paragraphs([
                season,
                weather.join(" "),
                "Moving water matters more than the clock. Plan trips around the strongest part of the tide, and watch for wind and cold fronts that push fish off the shallows.".to_string(),
            ]),
        ),
    ];

    let key_facts = top_claims(brief, 5);
    if !key_facts.is_empty() {
        sections.push(Section::new("Quick Facts", key_facts.join(" ")));
    }

    let faqs = vec![
        Faq::new(
            format!("What is the best time of day to fish for {}?", subject),
            "Early morning and late evening are usually best, especially when a moving tide lines up with low light. Midday can still produce around deeper structure and shade.",
        ),
        Faq::new(
            format!("Do I need special gear for {}?", brief.primary_keyword),
            "No. A versatile medium-action rod, a reel with a smooth drag and a small box of proven lures will handle most situations. Upgrade once you know what your local water demands.",
        ),
        Faq::new(
            "How do I find fish in new water?",
            "Look for bait, birds and structure, then fish the edges where current carries food. A tide chart and a few scouting trips will teach you more than any map.",
        ),
    ];

    let mut related_species = brief.related_species.clone();
    if related_species.is_empty() {
        if let Some(p) = profile {
            related_species.push(p.name.to_string());
        }
    }

    ContentDoc::Blog(BlogPost {
        meta: base_meta(brief, &description),
        intro,
        sections,
        faqs,
        related_species,
    })
}
