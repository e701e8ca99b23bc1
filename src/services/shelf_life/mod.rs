//! Shelf-life catalog, keyword match engine, and category inference.

pub mod catalog;
pub mod inference;
pub mod match_engine;
pub mod types;

pub use inference::infer_category;
pub use match_engine::lookup;
pub use types::{Category, Confidence, LookupResult, MatchSource, ShelfLifeEntry};
