use thiserror::Error;

use crate::services::shelf_life::types::Category;

/// Validation failure in the embedded lookup tables.
///
/// Returned by [`crate::services::shelf_life::catalog::validate`], which is
/// meant to run once at process startup. The per-line pipeline itself is
/// infallible; malformed tables are a packaging defect, not a runtime
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("catalog entry `{name}` has a shelf life of {days} days")]
    InvalidShelfDays { name: &'static str, days: u32 },
    #[error("catalog entry `{name}` has no keywords")]
    NoKeywords { name: &'static str },
    #[error("catalog entry `{name}` has a blank keyword")]
    BlankKeyword { name: &'static str },
    #[error("category `{category}` defaults to {days} shelf days")]
    InvalidCategoryDefault { category: Category, days: u32 },
    #[error("category `{category}` has no inference hints")]
    NoHints { category: Category },
    #[error("category `{category}` has a blank inference hint")]
    BlankHint { category: Category },
}
