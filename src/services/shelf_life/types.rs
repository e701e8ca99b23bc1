//! Domain types for the shelf-life matcher.

use serde::{Deserialize, Serialize};

/// Coarse grocery category. Doubles as the key space for fallback shelf
/// lives when no catalog entry matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Meat,
    Seafood,
    Fruit,
    Vegetable,
    Bakery,
    Beverage,
    Prepared,
    Condiment,
    Frozen,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Dairy,
        Category::Meat,
        Category::Seafood,
        Category::Fruit,
        Category::Vegetable,
        Category::Bakery,
        Category::Beverage,
        Category::Prepared,
        Category::Condiment,
        Category::Frozen,
        Category::Other,
    ];

    /// Fallback shelf life in days for items resolved only to a category.
    pub fn default_shelf_days(self) -> u32 {
        match self {
            Category::Dairy => 7,
            Category::Meat => 2,
            Category::Seafood => 2,
            Category::Fruit => 7,
            Category::Vegetable => 7,
            Category::Bakery => 5,
            Category::Beverage => 10,
            Category::Prepared => 5,
            Category::Condiment => 60,
            Category::Frozen => 90,
            Category::Other => 7,
        }
    }

    /// Display emoji for items resolved only to a category.
    pub fn emoji(self) -> &'static str {
        match self {
            Category::Dairy => "🥛",
            Category::Meat => "🍗",
            Category::Seafood => "🐟",
            Category::Fruit => "🍎",
            Category::Vegetable => "🥬",
            Category::Bakery => "🍞",
            Category::Beverage => "🥤",
            Category::Prepared => "🍱",
            Category::Condiment => "🫙",
            Category::Frozen => "🧊",
            Category::Other => "📦",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Seafood => "seafood",
            Category::Fruit => "fruit",
            Category::Vegetable => "vegetable",
            Category::Bakery => "bakery",
            Category::Beverage => "beverage",
            Category::Prepared => "prepared",
            Category::Condiment => "condiment",
            Category::Frozen => "frozen",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matching confidence tier. A strict function of the best keyword score;
/// ordering follows certainty, so `max` picks the stronger of two results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a lookup result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchSource {
    /// Direct hit in the shelf-life table.
    #[serde(rename = "USDA shelf life database")]
    Database,
    /// Table hit below the high-confidence threshold.
    #[serde(rename = "USDA shelf life database (fuzzy match)")]
    DatabaseFuzzy,
    /// No table hit; category inferred from hint phrases.
    #[serde(rename = "category inference fallback")]
    CategoryInference,
    /// Nothing matched at all.
    #[serde(rename = "default estimate")]
    DefaultEstimate,
}

impl MatchSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchSource::Database => "USDA shelf life database",
            MatchSource::DatabaseFuzzy => "USDA shelf life database (fuzzy match)",
            MatchSource::CategoryInference => "category inference fallback",
            MatchSource::DefaultEstimate => "default estimate",
        }
    }
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One known product in the shelf-life table.
#[derive(Debug, Clone, Copy)]
pub struct ShelfLifeEntry {
    pub name: &'static str,
    /// Receipt keywords that resolve to this entry. Keywords are not unique
    /// across entries; the best score wins.
    pub keywords: &'static [&'static str],
    pub category: Category,
    pub emoji: &'static str,
    pub shelf_days: u32,
}

/// Resolution of one receipt line against the shelf-life table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Catalog product name, or the raw input when nothing matched.
    pub name: String,
    pub category: Category,
    pub emoji: &'static str,
    pub shelf_days: u32,
    pub confidence: Confidence,
    pub source: MatchSource,
}
