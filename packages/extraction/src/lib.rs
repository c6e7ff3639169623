//! Heuristic Extraction Library
//!
//! Turns fetched source documents (HTML or plain text) into structure the
//! content pipeline can build briefs from: a title, headings, short
//! candidate facts, species/location entities and a quality score.
//!
//! # Usage
//!
//! ```rust
//! use extraction::{Extractor, HeuristicExtractor, RawDocument};
//!
//! let doc = RawDocument::new(
//!     "https://example.com/snook",
//!     "# Snook Basics\n\n- Snook typically hold near mangrove shorelines\n",
//! );
//! let doc = HeuristicExtractor::new().extract(doc);
//! assert_eq!(doc.title, "Snook Basics");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - `Extractor` and `Ingestor` seams
//! - [`types`] - RawDocument, Fact, Entity
//! - [`heuristic`] - regex/heuristic extractor
//! - [`ingestors`] - HTTP and mock ingestors

pub mod error;
pub mod heuristic;
pub mod ingestors;
pub mod text;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError, FetchResult, Result};
pub use heuristic::{ExtractorConfig, HeuristicExtractor};
pub use ingestors::{fetch_and_extract, HttpIngestor, MockIngestor};
pub use traits::{extractor::Extractor, ingestor::Ingestor};
pub use types::{
    document::{ContentType, Heading, RawDocument},
    entity::{Entity, EntityType},
    fact::{Fact, FactCategory, FactScope, MAX_CLAIM_CHARS},
};
