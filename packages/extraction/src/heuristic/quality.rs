//! Quality scoring and content-type classification.

use crate::types::document::{ContentType, Heading, RawDocument};

const CHECK_WEIGHT: f32 = 0.2;
const TITLE_CHARS: (usize, usize) = (10, 200);
const WORD_RANGE: (usize, usize) = (200, 5000);

/// Weighted sum of five structural checks, capped at 1.0.
///
/// Each check is worth 0.2: a sensible title length, at least two
/// headings, at least five facts, a word count within range and at least
/// two entities.
pub fn quality_score(doc: &RawDocument) -> f32 {
    let title_len = doc.title.chars().count();
    let checks = [
        (TITLE_CHARS.0..=TITLE_CHARS.1).contains(&title_len),
        doc.headings.len() >= 2,
        doc.extracted_facts.len() >= 5,
        (WORD_RANGE.0..=WORD_RANGE.1).contains(&doc.word_count),
        doc.entities.len() >= 2,
    ];

    let score = checks.iter().filter(|passed| **passed).count() as f32 * CHECK_WEIGHT;
    score.min(1.0)
}

/// `Guide` if any heading mentions "how to", `Article` with three or more
/// headings, otherwise `Unknown`.
pub fn classify(headings: &[Heading]) -> ContentType {
    if headings
        .iter()
        .any(|h| h.text.to_lowercase().contains("how to"))
    {
        ContentType::Guide
    } else if headings.len() >= 3 {
        ContentType::Article
    } else {
        ContentType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_scores_zero() {
        let doc = RawDocument::new("https://example.com", "");
        assert_eq!(quality_score(&doc), 0.0);
    }

    #[test]
    fn test_partial_score() {
        let mut doc = RawDocument::new("https://example.com", "");
        doc.title = "Snook Fishing Basics".to_string();
        doc.headings = vec![Heading::new(2, "Habitat"), Heading::new(2, "Diet")];
        doc.word_count = 150;

        assert!((quality_score(&doc) - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_classify() {
        let guide = vec![Heading::new(2, "How To Rig a Popping Cork")];
        assert_eq!(classify(&guide), ContentType::Guide);

        let article = vec![
            Heading::new(2, "Habitat"),
            Heading::new(2, "Diet"),
            Heading::new(2, "Seasons"),
        ];
        assert_eq!(classify(&article), ContentType::Article);

        assert_eq!(classify(&article[..2]), ContentType::Unknown);
    }
}
