//! Writes validated documents and keeps each type's index current.
//!
//! Layout under the content root:
//!
//! ```text
//! <content>/<type dir>/<slug>.json
//! <content>/<type dir>/_index.json
//! ```

mod index;
mod revalidate;

pub use index::{ContentIndex, IndexEntry};
pub use revalidate::{HttpRevalidator, NoopRevalidator, Revalidator};

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::dedup::resolve_slug_collision;
use crate::error::Result;
use crate::generators::ContentDoc;
use crate::page_type::PageType;
use crate::storage::{read_json_or_default, write_json_atomic};
use crate::validator::validate_doc;

pub const INDEX_FILE: &str = "_index.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub route_path: String,
    pub file_path: PathBuf,
}

pub struct Publisher {
    content_dir: PathBuf,
    revalidator: Arc<dyn Revalidator>,
}

impl Publisher {
    pub fn new(content_dir: impl Into<PathBuf>, revalidator: Arc<dyn Revalidator>) -> Self {
        Self {
            content_dir: content_dir.into(),
            revalidator,
        }
    }

    pub fn type_dir(&self, page_type: PageType) -> PathBuf {
        self.content_dir.join(page_type.content_dir())
    }

    pub fn doc_path(&self, page_type: PageType, slug: &str) -> PathBuf {
        self.type_dir(page_type).join(format!("{}.json", slug))
    }

    pub fn index_path(&self, page_type: PageType) -> PathBuf {
        self.type_dir(page_type).join(INDEX_FILE)
    }

    pub fn load_index(&self, page_type: PageType) -> Result<ContentIndex> {
        read_json_or_default(&self.index_path(page_type))
    }

    pub fn load_doc(&self, page_type: PageType, slug: &str) -> Result<ContentDoc> {
        let content = fs::read_to_string(self.doc_path(page_type, slug))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Slugs taken by document files or index entries of a type.
    pub fn existing_slugs(&self, page_type: PageType) -> Result<HashSet<String>> {
        let mut slugs: HashSet<String> = self
            .load_index(page_type)?
            .slugs()
            .map(str::to_string)
            .collect();

        let dir = self.type_dir(page_type);
        if dir.is_dir() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let is_json = path.extension().is_some_and(|ext| ext == "json");
                let stem = path.file_stem().and_then(|s| s.to_str());
                if let (true, Some(stem)) = (is_json, stem) {
                    if !stem.starts_with('_') {
                        slugs.insert(stem.to_string());
                    }
                }
            }
        }

        Ok(slugs)
    }

    /// Collision-free slug for a new document of `page_type`.
    pub fn resolve_slug(&self, base_slug: &str, page_type: PageType) -> Result<String> {
        let existing = self.existing_slugs(page_type)?;
        Ok(resolve_slug_collision(base_slug, &existing))
    }

    /// Write the document, update the index, then revalidate.
    ///
    /// The document must pass validation. Revalidation failures are logged
    /// and do not fail the publish.
    pub async fn publish_doc(&self, doc: &ContentDoc) -> Result<PublishResult> {
        validate_doc(doc).into_result()?;

        let page_type = doc.page_type();
        let file_path = self.doc_path(page_type, doc.slug());
        write_json_atomic(&file_path, doc)?;

        let mut index = self.load_index(page_type)?;
        index.upsert(IndexEntry::from_doc(doc));
        write_json_atomic(&self.index_path(page_type), &index)?;

        let route_path = doc.route_path();
        info!(
            route = %route_path,
            file = %file_path.display(),
            words = doc.meta().word_count,
            "Published document"
        );

        let paths = vec![route_path.clone(), page_type.route_prefix()];
        if let Err(e) = self.revalidator.revalidate(&paths).await {
            warn!(
                error = %e,
                revalidator = self.revalidator.name(),
                route = %route_path,
                "Revalidation failed"
            );
        }

        Ok(PublishResult {
            route_path,
            file_path,
        })
    }
}
