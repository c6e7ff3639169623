//! Integration tests for the heuristic extractor.
//!
//! These tests exercise the full extract pass on realistic documents:
//! 1. Title fallback order
//! 2. Low-quality flagging (warn, never drop)
//! 3. Fact caps and claim lengths
//! 4. Entity normalization and content-type classification
//! 5. Fetch-then-extract over an ingestor

use std::io::Write;
use std::sync::{Arc, Mutex};

use extraction::{
    fetch_and_extract, ContentType, EntityType, Extractor, HeuristicExtractor, MockIngestor,
    RawDocument, MAX_CLAIM_CHARS,
};

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

fn extract_with_logs(doc: RawDocument) -> (RawDocument, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let extracted =
        tracing::subscriber::with_default(subscriber, || HeuristicExtractor::new().extract(doc));
    (extracted, logs.contents())
}

fn long_article_html() -> String {
    let mut html = String::from(
        "<html><head><title>Snook Fishing Guide | Example</title></head><body>\
         <h1>How to Catch Snook in Florida</h1>",
    );
    html.push_str("<h2>Habitat</h2><p>Snook typically hold near mangrove shorelines, docks and bridges in Tampa Bay. They usually avoid water colder than 60 degrees.</p>");
    html.push_str("<h2>Diet</h2><ul><li>Snook feed on pilchards, pinfish and shrimp</li><li>Large snook also eat mullet along the beaches</li></ul>");
    html.push_str("<h2>Seasons</h2><p>Summer is spawning season, when snook gather at passes and inlets on the Gulf coast.</p>");
    for i in 0..40 {
        html.push_str(&format!(
            "<p>Paragraph {} notes that red drum and snook share the same grass flats on a rising tide, and anglers often find both species within a few hundred yards of each other.</p>",
            i
        ));
    }
    html.push_str("</body></html>");
    html
}

#[test]
fn test_two_h2_without_h1_takes_title_from_first_text_line() {
    let doc = RawDocument::new(
        "https://example.com/flats",
        "Working the flats at dawn\n\n## Tides\n\nMoving water matters.\n\n## Baits\n\nShrimp work.",
    );
    let doc = RawDocument {
        html: Some(
            "<p>Working the flats at dawn</p><h2>Tides</h2><p>Moving water matters.</p><h2>Baits</h2><p>Shrimp work.</p>"
                .to_string(),
        ),
        ..doc
    };

    let (doc, _) = extract_with_logs(doc);

    assert_eq!(doc.title, "Working the flats at dawn");
    assert_eq!(doc.headings.len(), 2);
    assert!(doc.headings.iter().all(|h| h.level == 2));
    assert!(doc.headings.iter().all(|h| h.text != doc.title));
}

#[test]
fn test_html_opening_with_h2_does_not_take_heading_as_title() {
    let (doc, _) = extract_with_logs(RawDocument::from_html(
        "https://example.com/tides",
        "<h2>Tides</h2><p>Moving water turns the bite on.</p><h2>Baits</h2><p>Shrimp work.</p>",
    ));

    assert_eq!(doc.title, "Moving water turns the bite on.");
    assert_eq!(doc.headings.len(), 2);
    assert!(doc.headings.iter().all(|h| h.text != doc.title));
}

#[test]
fn test_markdown_opening_with_h2_does_not_take_heading_as_title() {
    let doc = HeuristicExtractor::new().extract(RawDocument::new(
        "https://example.com/tides",
        "## Tides\n\nMoving water matters.\n\n## Baits\n\nShrimp work.",
    ));

    assert_eq!(doc.title, "Moving water matters.");
    assert_eq!(doc.headings.len(), 2);
}

#[test]
fn test_low_quality_document_is_logged_and_still_populated() {
    let doc = RawDocument::new(
        "https://example.com/thin",
        "Tarpon notes\n- Tarpon roll at first light near the bridges",
    );

    let (doc, logs) = extract_with_logs(doc);

    assert!(doc.low_quality);
    assert!(doc.quality_score < 0.3 || doc.word_count < 200);
    assert!(logs.contains("Low-quality source document"));
    assert_eq!(doc.title, "Tarpon notes");
    assert_eq!(doc.extracted_facts.len(), 1);
    assert_eq!(doc.species_hints, vec!["tarpon"]);
    assert!(!doc.content_hash.is_empty());
}

#[test]
fn test_full_article_extraction() {
    let (doc, logs) = extract_with_logs(RawDocument::from_html(
        "https://example.com/snook",
        long_article_html(),
    ));

    assert_eq!(doc.title, "How to Catch Snook in Florida");
    assert_eq!(doc.content_type, ContentType::Guide);
    assert_eq!(doc.headings.len(), 4);
    assert!(doc.word_count >= 200);

    assert!(!doc.extracted_facts.is_empty());
    assert!(doc.extracted_facts.len() <= 20);
    assert!(doc
        .extracted_facts
        .iter()
        .all(|f| f.claim.chars().count() <= MAX_CLAIM_CHARS));
    assert!(doc
        .extracted_facts
        .iter()
        .all(|f| f.supporting_sources == vec!["https://example.com/snook".to_string()]));

    assert!(doc.species_hints.contains(&"snook".to_string()));
    assert!(doc.species_hints.contains(&"redfish".to_string()));
    assert!(doc.location_hints.contains(&"florida".to_string()));
    assert!(doc
        .entities
        .iter()
        .any(|e| e.entity_type == EntityType::Location && e.normalized == "tampa bay"));

    assert!((doc.quality_score - 1.0).abs() < f32::EPSILON);
    assert!(!doc.low_quality);
    assert!(!logs.contains("Low-quality source document"));
}

#[test]
fn test_markdown_text_document() {
    let text = "# Walleye at Night\n\n## Where\n\nWalleye usually move shallow after dark.\n\n## How to Troll\n\n1. Troll crankbaits at 1.5 mph along breaklines\n";
    let doc = HeuristicExtractor::new().extract(RawDocument::new("https://example.com/walleye", text));

    assert_eq!(doc.title, "Walleye at Night");
    assert_eq!(doc.headings.len(), 3);
    assert_eq!(doc.content_type, ContentType::Guide);
    assert_eq!(doc.extracted_facts.len(), 2);
    // shortest claim first
    assert!(doc.extracted_facts[0].claim.len() <= doc.extracted_facts[1].claim.len());
}

#[tokio::test]
async fn test_fetch_and_extract_drops_failed_urls_and_keeps_order() {
    let ingestor = MockIngestor::new()
        .with_document(RawDocument::from_html("https://example.com/snook", long_article_html()))
        .with_document(RawDocument::new(
            "https://example.com/walleye",
            "# Walleye at Night\n\n- Walleye usually move shallow after dark",
        ));
    let urls = vec![
        "https://example.com/walleye".to_string(),
        "https://example.com/missing".to_string(),
        "https://example.com/snook".to_string(),
    ];

    let docs = fetch_and_extract(&ingestor, &HeuristicExtractor::new(), &urls).await;

    assert_eq!(ingestor.fetch_calls(), urls);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].title, "Walleye at Night");
    assert_eq!(docs[1].title, "How to Catch Snook in Florida");
    assert!(docs.iter().all(|d| !d.content_hash.is_empty()));
}
