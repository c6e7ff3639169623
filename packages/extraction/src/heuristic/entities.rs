//! Species and location mentions from fixed pattern lists.
//!
//! A small curated list, not NER. Aliases map onto one normalized name so
//! "red drum" and "redfish" count as a single entity.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::entity::{Entity, EntityType};

const CANONICAL_CONFIDENCE: f32 = 0.9;
const ALIAS_CONFIDENCE: f32 = 0.8;

/// (pattern, normalized name)
const SPECIES: &[(&str, &str)] = &[
    ("redfish", "redfish"),
    ("red drum", "redfish"),
    ("snook", "snook"),
    ("tarpon", "tarpon"),
    ("speckled trout", "speckled trout"),
    ("spotted seatrout", "speckled trout"),
    ("largemouth bass", "largemouth bass"),
    ("smallmouth bass", "smallmouth bass"),
    ("striped bass", "striped bass"),
    ("stripers?", "striped bass"),
    ("walleye", "walleye"),
    ("crappie", "crappie"),
    ("bluegill", "bluegill"),
    ("catfish", "catfish"),
    ("flounder", "flounder"),
    ("fluke", "flounder"),
    ("mahi[- ]mahi", "mahi mahi"),
    ("dolphinfish", "mahi mahi"),
    ("dorado", "mahi mahi"),
    ("sheepshead", "sheepshead"),
    ("black drum", "black drum"),
    ("king mackerel", "king mackerel"),
    ("kingfish", "king mackerel"),
    ("spanish mackerel", "spanish mackerel"),
    ("cobia", "cobia"),
    ("grouper", "grouper"),
    ("red snapper", "red snapper"),
    ("bonefish", "bonefish"),
    ("rainbow trout", "rainbow trout"),
    ("brown trout", "brown trout"),
    ("northern pike", "northern pike"),
    ("muskie", "muskie"),
    ("musky", "muskie"),
    ("yellow perch", "yellow perch"),
];

/// (pattern, normalized name)
const LOCATIONS: &[(&str, &str)] = &[
    ("florida", "florida"),
    ("fl", "florida"),
    ("texas", "texas"),
    ("tx", "texas"),
    ("louisiana", "louisiana"),
    ("alabama", "alabama"),
    ("mississippi", "mississippi"),
    ("georgia", "georgia"),
    ("south carolina", "south carolina"),
    ("north carolina", "north carolina"),
    ("california", "california"),
    ("minnesota", "minnesota"),
    ("wisconsin", "wisconsin"),
    ("tampa bay", "tampa bay"),
    ("charlotte harbor", "charlotte harbor"),
    ("florida keys", "florida keys"),
    ("key west", "key west"),
    ("biscayne bay", "biscayne bay"),
    ("everglades", "everglades"),
    ("mosquito lagoon", "mosquito lagoon"),
    ("indian river lagoon", "indian river lagoon"),
    ("st\\.? johns river", "st. johns river"),
    ("lake okeechobee", "lake okeechobee"),
    ("gulf of mexico", "gulf of mexico"),
    ("galveston bay", "galveston bay"),
    ("chesapeake bay", "chesapeake bay"),
    ("outer banks", "outer banks"),
    ("lake erie", "lake erie"),
    ("lake michigan", "lake michigan"),
    ("boca grande", "boca grande"),
    ("sarasota", "sarasota"),
    ("naples", "naples"),
    ("jacksonville", "jacksonville"),
    ("destin", "destin"),
    ("new orleans", "new orleans"),
];

struct EntityPattern {
    regex: Regex,
    entity_type: EntityType,
    normalized: &'static str,
}

static PATTERNS: LazyLock<Vec<EntityPattern>> = LazyLock::new(|| {
    let species = SPECIES.iter().map(|p| (p, EntityType::Species));
    let locations = LOCATIONS.iter().map(|p| (p, EntityType::Location));

    species
        .chain(locations)
        .map(|(&(pattern, normalized), entity_type)| EntityPattern {
            regex: Regex::new(&format!(r"\b{}\b", pattern)).unwrap(),
            entity_type,
            normalized,
        })
        .collect()
});

/// Find species and location entities, one per normalized name.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let lower = text.to_lowercase();
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut entities = Vec::new();

    for pattern in PATTERNS.iter() {
        if seen.contains(pattern.normalized) {
            continue;
        }
        if let Some(found) = pattern.regex.find(&lower) {
            let matched = found.as_str();
            let confidence = if matched == pattern.normalized {
                CANONICAL_CONFIDENCE
            } else {
                ALIAS_CONFIDENCE
            };
            seen.insert(pattern.normalized);
            entities.push(Entity::new(
                matched,
                pattern.entity_type,
                confidence,
                pattern.normalized,
            ));
        }
    }

    entities
}

/// Whether the text mentions any known location.
pub fn mentions_location(text: &str) -> bool {
    let lower = text.to_lowercase();
    PATTERNS
        .iter()
        .filter(|p| p.entity_type == EntityType::Location)
        .any(|p| p.regex.is_match(&lower))
}

/// Normalized names of one entity type, in discovery order.
pub fn hints(entities: &[Entity], entity_type: EntityType) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.entity_type == entity_type)
        .map(|e| e.normalized.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_normalized_and_deduplicated() {
        let entities = extract_entities("Red drum, also called redfish, roam Tampa Bay, FL.");

        let redfish: Vec<_> = entities.iter().filter(|e| e.normalized == "redfish").collect();
        assert_eq!(redfish.len(), 1);
        assert!(entities.iter().any(|e| e.normalized == "florida" && e.text == "fl"));
        assert!(entities.iter().any(|e| e.normalized == "tampa bay"));
    }

    #[test]
    fn test_alias_confidence_is_lower() {
        let entities = extract_entities("Fishing for dorado offshore");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].normalized, "mahi mahi");
        assert_eq!(entities[0].confidence, ALIAS_CONFIDENCE);
    }

    #[test]
    fn test_word_boundaries() {
        // "fl" inside "fly" and "tx" inside "ntx" must not match
        assert!(extract_entities("fly fishing ntx").is_empty());
    }

    #[test]
    fn test_hints_by_type() {
        let entities = extract_entities("Snook and tarpon in Florida");
        assert_eq!(hints(&entities, EntityType::Species), vec!["snook", "tarpon"]);
        assert_eq!(hints(&entities, EntityType::Location), vec!["florida"]);
        assert!(mentions_location("Boca Grande pass"));
        assert!(!mentions_location("open water"));
    }
}
