//! Fact heuristics: list items and indicator-bearing sentences.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::fact::{Fact, FactCategory, FactScope};

/// Confidence assigned to list-item facts.
pub const LIST_ITEM_CONFIDENCE: f32 = 0.7;

/// Confidence assigned to sentence facts.
pub const SENTENCE_CONFIDENCE: f32 = 0.6;

const LIST_ITEM_CHARS: (usize, usize) = (20, 200);
const SENTENCE_CHARS: (usize, usize) = (30, 300);

static RE_LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+•]|\d{1,2}[.)])\s+(.+)$").unwrap());

static RE_FACTUAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d|\b(?:typically|usually|often|generally|commonly|average|averages|prefer|prefers|known to)\b|\b(?:inch|inches|pounds?|lbs|feet|foot|ounces?|oz|degrees|miles|fathoms)\b|\b(?:habitat|diet|feeds?|feeding|spawn|spawning|migrates?|migration|season|temperature|tide|structure)\b",
    )
    .unwrap()
});

static RE_DIET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:eat|eats|eating|feed|feeds|feeding|diet|prey|forage|baitfish|shrimp|crabs?|minnows?)\b").unwrap()
});
static RE_HABITAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:habitat|found in|lives?|inhabits?|mangroves?|reefs?|grass flats|flats|estuar\w*|shorelines?|depths?|docks?|brackish)\b").unwrap()
});
static RE_SEASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:spring|summer|fall|autumn|winter|seasons?|seasonal|months?|spawn\w*|migrat\w*|january|february|march|april|june|july|august|september|october|november|december)\b").unwrap()
});
static RE_WEATHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:weather|wind|winds|cold fronts?|fronts?|rain|temperatures?|cloudy|overcast|tides?|barometric|pressure)\b").unwrap()
});
static RE_TECHNIQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:lures?|baits?|cast|casting|retrieve|rigs?|rigged|hooks?|knots?|jigs?|jigging|troll\w*|fly|leaders?|technique|reel|rod)\b").unwrap()
});
static RE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:inch|inches|pounds?|lbs|feet|foot|length|long|weigh\w*|records?|size|ounces?)\b").unwrap()
});
static RE_REGIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gulf|atlantic|pacific|coast|coastal|northern|southern|southeast|northeast|midwest|regions?|regional|states?)\b").unwrap()
});

/// Collect candidate facts from line-oriented text.
///
/// Facts are deduplicated, sorted ascending by claim length and capped at
/// `max_facts`. The length bias favours concise claims, not relevance.
pub fn extract_facts(text: &str, max_facts: usize) -> Vec<Fact> {
    let mut candidates: Vec<Fact> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for item in list_items(text) {
        let len = item.chars().count();
        if (LIST_ITEM_CHARS.0..=LIST_ITEM_CHARS.1).contains(&len)
            && seen.insert(item.to_lowercase())
        {
            candidates.push(Fact::new(&item, LIST_ITEM_CONFIDENCE));
        }
    }

    for paragraph in paragraphs(text) {
        for sentence in split_sentences(&paragraph) {
            let len = sentence.chars().count();
            if (SENTENCE_CHARS.0..=SENTENCE_CHARS.1).contains(&len)
                && RE_FACTUAL.is_match(&sentence)
                && seen.insert(sentence.to_lowercase())
            {
                candidates.push(Fact::new(&sentence, SENTENCE_CONFIDENCE));
            }
        }
    }

    candidates.sort_by_key(|fact| fact.claim.chars().count());
    candidates.truncate(max_facts);
    candidates
}

/// Category by keyword, first match wins.
pub fn categorize(claim: &str) -> FactCategory {
    let lower = claim.to_lowercase();
    if RE_DIET.is_match(&lower) {
        FactCategory::Diet
    } else if RE_HABITAT.is_match(&lower) {
        FactCategory::Habitat
    } else if RE_SEASON.is_match(&lower) {
        FactCategory::Season
    } else if RE_WEATHER.is_match(&lower) {
        FactCategory::Weather
    } else if RE_TECHNIQUE.is_match(&lower) {
        FactCategory::Technique
    } else if RE_SIZE.is_match(&lower) {
        FactCategory::Size
    } else {
        FactCategory::Other
    }
}

/// Scope by keyword. `mentions_location` comes from the entity pass.
pub fn scope_of(claim: &str, mentions_location: bool) -> FactScope {
    let lower = claim.to_lowercase();
    if mentions_location {
        FactScope::LocationSpecific
    } else if RE_SEASON.is_match(&lower) {
        FactScope::Seasonal
    } else if RE_REGIONAL.is_match(&lower) {
        FactScope::Regional
    } else {
        FactScope::Global
    }
}

fn list_items(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().filter_map(|line| {
        RE_LIST_LINE
            .captures(line.trim())
            .map(|caps| caps[1].trim().to_string())
    })
}

/// Prose paragraphs, with headings and list items removed.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let is_break =
            line.is_empty() || line.starts_with('#') || RE_LIST_LINE.is_match(line);

        if is_break {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Split on `.`, `!` or `?` followed by whitespace or end of text.
fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                let end = idx + c.len_utf8();
                let sentence = paragraph[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
        }
    }

    let rest = paragraph[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_become_facts() {
        let text = "- Snook are sensitive to water below 60 degrees\n- short\n* Redfish tail in shallow grass flats at low tide";
        let facts = extract_facts(text, 20);

        assert_eq!(facts.len(), 2);
        assert!(facts.iter().all(|f| f.confidence == LIST_ITEM_CONFIDENCE));
    }

    #[test]
    fn test_sentences_need_an_indicator() {
        let text = "Snook typically hold near mangrove shorelines on a falling tide. This sentence says nothing useful at all really.";
        let facts = extract_facts(text, 20);

        assert_eq!(facts.len(), 1);
        assert!(facts[0].claim.starts_with("Snook typically"));
        assert_eq!(facts[0].confidence, SENTENCE_CONFIDENCE);
    }

    #[test]
    fn test_sorted_by_length_and_capped() {
        let text = (1..=30)
            .map(|i| format!("- Fact number {} about tarpon{}", i, " x".repeat(i)))
            .collect::<Vec<_>>()
            .join("\n");

        let facts = extract_facts(&text, 20);

        assert_eq!(facts.len(), 20);
        let lengths: Vec<usize> = facts.iter().map(|f| f.claim.chars().count()).collect();
        let mut sorted = lengths.clone();
        sorted.sort();
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_long_sentence_is_truncated() {
        let sentence = format!("Tarpon usually {}.", "roll near bridges ".repeat(15));
        let facts = extract_facts(&sentence, 20);

        assert_eq!(facts.len(), 1);
        assert!(facts[0].claim.chars().count() <= 200);
    }

    #[test]
    fn test_duplicates_removed() {
        let text = "- Redfish feed on crabs and shrimp in the grass\n- redfish feed on crabs and shrimp in the grass";
        assert_eq!(extract_facts(text, 20).len(), 1);
    }

    #[test]
    fn test_split_sentences_keeps_decimals() {
        let sentences = split_sentences("Lines of 2.5 mm work. Use them!");
        assert_eq!(sentences, vec!["Lines of 2.5 mm work.", "Use them!"]);
    }

    #[test]
    fn test_categorize() {
        assert_eq!(categorize("Redfish eat crabs"), FactCategory::Diet);
        assert_eq!(categorize("Snook live around mangroves"), FactCategory::Habitat);
        assert_eq!(categorize("Tarpon arrive in late spring"), FactCategory::Season);
        assert_eq!(categorize("Fish bite before a cold front"), FactCategory::Weather);
        assert_eq!(categorize("A slow retrieve with a jig works"), FactCategory::Technique);
        assert_eq!(categorize("Adults reach 40 inches"), FactCategory::Size);
        assert_eq!(categorize("Nothing to see"), FactCategory::Other);
    }

    #[test]
    fn test_scope_of() {
        assert_eq!(scope_of("Anything", true), FactScope::LocationSpecific);
        assert_eq!(scope_of("Best in winter", false), FactScope::Seasonal);
        assert_eq!(scope_of("Common along the gulf coast", false), FactScope::Regional);
        assert_eq!(scope_of("Strong fighters", false), FactScope::Global);
    }
}
