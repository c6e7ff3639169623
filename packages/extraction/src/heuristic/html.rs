//! Regex-based HTML handling: text derivation, title and heading lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::document::Heading;

static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").unwrap());
static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").unwrap());
static RE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head[^>]*>.*?</head\s*>").unwrap());
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([1-3])(?:\s[^>]*)?>(.*?)</h[1-3]\s*>").unwrap());
static RE_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").unwrap());
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").unwrap());
static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li(?:\s[^>]*)?>(.*?)</li\s*>").unwrap());
static RE_BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:p|div|section|article|ul|ol|tr|table|blockquote)\s*>|<br\s*/?>").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").unwrap());
static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Decode the handful of entities that show up in practice.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&rsquo;", "'")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&mdash;", "-")
        .replace("&ndash;", "-")
        .replace("&amp;", "&")
}

/// Strip tags from an inline fragment and collapse whitespace.
pub fn clean_inline(fragment: &str) -> String {
    let text = RE_TAG.replace_all(fragment, " ");
    let text = decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert HTML to line-oriented text.
///
/// Headings become markdown `#` lines and list items become `- ` lines so
/// the plain-text heuristics see the same structure.
pub fn html_to_text(html: &str) -> String {
    let text = RE_SCRIPT.replace_all(html, "");
    let text = RE_STYLE.replace_all(&text, "");
    let text = RE_HEAD.replace_all(&text, "");
    let text = RE_COMMENT.replace_all(&text, "");

    let text = RE_HEADING.replace_all(&text, |caps: &regex::Captures| {
        let level: usize = caps[1].parse().unwrap_or(2);
        format!("\n\n{} {}\n\n", "#".repeat(level), clean_inline(&caps[2]))
    });
    let text = RE_LIST_ITEM.replace_all(&text, |caps: &regex::Captures| {
        format!("\n- {}\n", clean_inline(&caps[1]))
    });
    let text = RE_BLOCK_END.replace_all(&text, "\n");
    let text = RE_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = RE_SPACES.replace_all(&text, " ");

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    RE_BLANK_LINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Text of the first `<h1>`, if any.
pub fn first_h1(html: &str) -> Option<String> {
    RE_H1
        .captures(html)
        .map(|caps| clean_inline(&caps[1]))
        .filter(|t| !t.is_empty())
}

/// Text of the `<title>` element, if any.
pub fn title_tag(html: &str) -> Option<String> {
    RE_TITLE
        .captures(html)
        .map(|caps| clean_inline(&caps[1]))
        .filter(|t| !t.is_empty())
}

/// All h1-h3 headings in document order.
pub fn headings(html: &str) -> Vec<Heading> {
    RE_HEADING
        .captures_iter(html)
        .filter_map(|caps| {
            let level: u8 = caps[1].parse().ok()?;
            let text = clean_inline(&caps[2]);
            (!text.is_empty()).then(|| Heading::new(level, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_structure() {
        let html = r#"
            <html><head><title>Ignored</title><style>p { color: red }</style></head>
            <body>
              <h1>Snook Guide</h1>
              <p>Snook are <b>ambush</b> predators.</p>
              <ul><li>Fish the outgoing tide</li><li>Use live pilchards</li></ul>
              <script>var x = 1;</script>
            </body></html>
        "#;

        let text = html_to_text(html);

        assert!(text.contains("# Snook Guide"));
        assert!(text.contains("Snook are ambush predators."));
        assert!(text.contains("- Fish the outgoing tide"));
        assert!(!text.contains("Ignored"));
        assert!(!text.contains("var x"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_title_lookup() {
        let html = "<html><head><title>Page Title</title></head><body><h1>Main &amp; Only</h1></body></html>";
        assert_eq!(first_h1(html), Some("Main & Only".to_string()));
        assert_eq!(title_tag(html), Some("Page Title".to_string()));
        assert_eq!(first_h1("<p>none</p>"), None);
    }

    #[test]
    fn test_headings_in_order() {
        let html = "<h2 class=\"a\">Habitat</h2><p>x</p><h3>Depth</h3><h4>Skipped</h4><h1>Top</h1>";
        let found = headings(html);

        let texts: Vec<_> = found.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Habitat", "Depth", "Top"]);
        assert_eq!(found[0].level, 2);
        assert_eq!(found[1].id, "depth");
    }

    #[test]
    fn test_header_tag_is_not_a_heading() {
        assert!(headings("<header><p>nav</p></header>").is_empty());
    }
}
