//! Required-field and length checks run before anything is published.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::PipelineError;
use crate::generators::ContentDoc;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 200;

static RE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Convert a failed report into the error that aborts the job.
    pub fn into_result(self) -> Result<(), PipelineError> {
        if self.passed {
            Ok(())
        } else {
            Err(PipelineError::Validation {
                errors: self.errors,
            })
        }
    }
}

pub fn validate_doc(doc: &ContentDoc) -> ValidationReport {
    let mut errors = Vec::new();
    let meta = doc.meta();

    check_text(&mut errors, "title", &meta.title, MAX_TITLE_CHARS);
    check_text(&mut errors, "description", &meta.description, MAX_DESCRIPTION_CHARS);

    if meta.slug.is_empty() {
        errors.push("slug is required".to_string());
    } else if !RE_SLUG.is_match(&meta.slug) {
        errors.push(format!("slug '{}' is not lowercase kebab-case", meta.slug));
    }

    if doc.faqs().is_empty() {
        errors.push("at least one FAQ is required".to_string());
    } else if doc
        .faqs()
        .iter()
        .any(|f| f.question.trim().is_empty() || f.answer.trim().is_empty())
    {
        errors.push("FAQ entries need a question and an answer".to_string());
    }

    match doc {
        ContentDoc::Blog(post) => {
            if post.intro.trim().is_empty() {
                errors.push("intro is required".to_string());
            }
            if post.sections.len() < 2 {
                errors.push(format!("blog needs at least 2 sections, has {}", post.sections.len()));
            }
        }
        ContentDoc::Species(guide) => {
            for (field, value) in [
                ("commonName", &guide.common_name),
                ("habitat", &guide.habitat),
                ("diet", &guide.diet),
            ] {
                if value.trim().is_empty() {
                    errors.push(format!("{} is required", field));
                }
            }
            if guide.techniques.is_empty() {
                errors.push("at least one technique is required".to_string());
            }
        }
        ContentDoc::HowTo(guide) => {
            if guide.steps.len() < 3 {
                errors.push(format!("how-to needs at least 3 steps, has {}", guide.steps.len()));
            }
        }
        ContentDoc::Location(guide) => {
            if guide.name.trim().is_empty() {
                errors.push("name is required".to_string());
            }
            if guide.target_species.is_empty() {
                errors.push("at least one target species is required".to_string());
            }
        }
    }

    let words = doc.count_words();
    let min_words = doc.page_type().min_words();
    if words <= min_words {
        errors.push(format!("word count {} must exceed {}", words, min_words));
    }

    ValidationReport {
        passed: errors.is_empty(),
        errors,
    }
}

fn check_text(errors: &mut Vec<String>, field: &str, value: &str, max_chars: usize) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(format!("{} is required", field));
    } else if len > max_chars {
        errors.push(format!("{} is {} characters, max {}", field, len, max_chars));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{build_brief, BriefInput};
    use crate::generators::generate;
    use crate::page_type::PageType;

    fn species_doc() -> ContentDoc {
        generate(&build_brief(BriefInput::new(PageType::Species, "species:snook")))
    }

    #[test]
    fn test_generated_doc_passes() {
        let report = validate_doc(&species_doc());
        assert!(report.passed, "{:?}", report.errors);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_missing_faq_and_bad_slug() {
        let mut doc = species_doc();
        if let ContentDoc::Species(guide) = &mut doc {
            guide.faqs.clear();
            guide.meta.slug = "Snook Guide".into();
        }

        let report = validate_doc(&doc);
        assert!(!report.passed);
        assert!(report.errors.contains(&"at least one FAQ is required".to_string()));
        assert!(report.errors.iter().any(|e| e.contains("kebab-case")));
    }

    #[test]
    fn test_long_title_and_thin_content() {
        let mut doc = generate(&build_brief(BriefInput::new(PageType::HowTo, "how-to:tie-a-palomar-knot")));
        if let ContentDoc::HowTo(guide) = &mut doc {
            guide.meta.title = "x".repeat(101);
            guide.steps.truncate(2);
            guide.intro.clear();
            guide.tips.clear();
            guide.faqs.truncate(1);
        }

        let report = validate_doc(&doc);
        assert!(report.errors.iter().any(|e| e.starts_with("title is 101 characters")));
        assert!(report.errors.iter().any(|e| e.starts_with("how-to needs at least 3 steps")));
        assert!(report.errors.iter().any(|e| e.starts_with("word count")));

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().starts_with("validation failed: "));
    }

    #[test]
    fn test_word_count_must_exceed_minimum() {
        let mut doc = generate(&build_brief(BriefInput::new(PageType::Location, "location:tampa-bay")));
        if let ContentDoc::Location(guide) = &mut doc {
            guide.overview.clear();
            guide.best_seasons.clear();
            guide.access.clear();
            guide.tips.clear();
        }
        let min = PageType::Location.min_words();
        let base = doc.count_words();
        assert!(base < min);

        if let ContentDoc::Location(guide) = &mut doc {
            guide.overview = vec!["tide"; min - base].join(" ");
        }
        assert_eq!(doc.count_words(), min);
        let report = validate_doc(&doc);
        assert!(!report.passed);
        assert!(report.errors.contains(&format!("word count {} must exceed {}", min, min)));

        if let ContentDoc::Location(guide) = &mut doc {
            guide.overview.push_str(" tide");
        }
        assert!(validate_doc(&doc).passed, "{:?}", validate_doc(&doc).errors);
    }
}
