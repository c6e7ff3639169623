//! Named entities - species and locations mentioned in a document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Text as matched in the (lowercased) document
    pub text: String,

    #[serde(rename = "type")]
    pub entity_type: EntityType,

    pub confidence: f32,

    /// Canonical name used for deduplication
    pub normalized: String,
}

impl Entity {
    pub fn new(
        text: impl Into<String>,
        entity_type: EntityType,
        confidence: f32,
        normalized: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type,
            confidence,
            normalized: normalized.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Species,
    Location,
}
