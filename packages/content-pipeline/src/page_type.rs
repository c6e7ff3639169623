//! Page types and topic keys.
//!
//! A topic key is `<page type>:<slug>`, e.g. `blog:best-lures-for-snook`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    Blog,
    Species,
    HowTo,
    Location,
}

impl PageType {
    pub const ALL: [PageType; 4] = [
        PageType::Blog,
        PageType::Species,
        PageType::HowTo,
        PageType::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Blog => "blog",
            PageType::Species => "species",
            PageType::HowTo => "how-to",
            PageType::Location => "location",
        }
    }

    /// Directory under the content root holding this type's documents.
    pub fn content_dir(&self) -> &'static str {
        match self {
            PageType::Blog => "blog",
            PageType::Species => "species",
            PageType::HowTo => "how-to",
            PageType::Location => "locations",
        }
    }

    /// Site route of the listing page; documents live below it.
    pub fn route_prefix(&self) -> String {
        format!("/{}", self.content_dir())
    }

    pub fn route_for(&self, slug: &str) -> String {
        format!("{}/{}", self.route_prefix(), slug)
    }

    /// A document of this type needs strictly more words than this.
    pub fn min_words(&self) -> usize {
        match self {
            PageType::Blog => 250,
            PageType::Species | PageType::HowTo | PageType::Location => 200,
        }
    }

    pub fn topic_key(&self, slug: &str) -> String {
        format!("{}:{}", self.as_str(), slug)
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PipelineError::InvalidTopicKey {
                topic_key: s.to_string(),
            })
    }
}

/// Split a topic key into page type and slug.
pub fn parse_topic_key(topic_key: &str) -> crate::error::Result<(PageType, String)> {
    let invalid = || PipelineError::InvalidTopicKey {
        topic_key: topic_key.to_string(),
    };

    let (prefix, slug) = topic_key.split_once(':').ok_or_else(invalid)?;
    let page_type: PageType = prefix.parse().map_err(|_| invalid())?;
    let slug = extraction::text::slugify(slug);
    if slug.is_empty() {
        return Err(invalid());
    }

    Ok((page_type, slug))
}
