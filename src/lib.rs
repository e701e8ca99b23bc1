//! Receipt line classification and shelf-life matching.
//!
//! Takes raw OCR lines from a retail receipt, filters out store metadata
//! (banners, totals, barcodes, addresses), normalizes POS abbreviations,
//! and resolves product lines against an embedded shelf-life table using a
//! scored keyword match with a category-inference fallback.
//!
//! The pipeline is pure and stateless: every lookup table is a process-wide
//! immutable built once on first use, so all entry points are safe to call
//! concurrently without locking. Unrecognized input is never an error; it
//! resolves to a low-confidence default record.

pub mod services;
pub mod types;

pub use services::receipt::{classify_line, classify_lines, LineInput, ReceiptItem};
pub use services::shelf_life::{lookup, Category, Confidence, LookupResult, MatchSource};
pub use types::errors::TableError;
