//! Receipt-side pipeline: junk-line filtering, POS text normalization, and
//! line-to-item ingestion.

pub mod abbreviations;
pub mod ingest;
pub mod junk_filter;
pub mod normalizer;

pub use ingest::{classify_line, classify_lines, LineInput, ReceiptItem};
pub use junk_filter::is_junk_line;
pub use normalizer::{normalize, NormalizedLine};
