pub mod extractor;
pub mod ingestor;
