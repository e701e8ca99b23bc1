//! Receipt line normalization.
//!
//! Turns a raw POS line ("GV 2% MLK F") into a normalized product phrase,
//! pulling out the store brand and flagging non-food purchases.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::abbreviations;

/// Leading item/UPC numbers printed before the product text.
static RE_LEADING_ITEM_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,}").expect("Invalid regex"));

/// Trailing tax-flag letters ("F", "N", "FT") after the product text.
static RE_TRAILING_TAX_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+[fnct]{1,2}\s*$").expect("Invalid regex"));

/// Outcome of normalizing one receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedLine {
    /// Product phrase with abbreviations expanded and bare numbers dropped.
    /// Unknown tokens keep their original casing.
    pub text: String,
    /// Canonical brand name when the line starts with a known abbreviation.
    pub brand: Option<&'static str>,
    /// True when the raw or normalized text mentions a non-food keyword.
    pub is_non_food: bool,
}

/// Normalize one raw receipt line.
///
/// Steps run in a fixed order: trim, strip a leading item code, strip a
/// trailing tax flag, take the brand off the front (two-token brands win
/// over one-token brands), then drop numeric tokens and expand POS
/// abbreviations. The non-food screen looks at the raw and normalized text
/// together, so both abbreviated and already-clear non-food names register.
pub fn normalize(raw_text: &str) -> NormalizedLine {
    if raw_text.is_empty() {
        return NormalizedLine {
            text: String::new(),
            brand: None,
            is_non_food: false,
        };
    }

    let mut text = raw_text.trim().to_string();

    if let Some(found) = RE_LEADING_ITEM_CODE.find(&text) {
        text = text[found.end()..].trim().to_string();
    }
    if let Some(found) = RE_TRAILING_TAX_FLAG.find(&text) {
        text = text[..found.start()].trim().to_string();
    }

    let tokens: Vec<&str> = text.split(' ').filter(|t| !t.is_empty()).collect();
    let mut brand = None;
    let mut start_idx = 0;

    if tokens.len() >= 2 {
        let first_two = format!("{} {}", tokens[0], tokens[1]);
        if let Some(expansion) = abbreviations::brand_expansion(&first_two) {
            brand = Some(expansion);
            start_idx = 2;
        }
    }
    if brand.is_none() {
        if let Some(first) = tokens.first() {
            if let Some(expansion) = abbreviations::brand_expansion(first) {
                brand = Some(expansion);
                start_idx = 1;
            }
        }
    }

    // Bare numbers are quantity counts, not product words
    let expanded: Vec<&str> = tokens[start_idx..]
        .iter()
        .copied()
        .filter(|token| token.parse::<f64>().is_err())
        .map(|token| abbreviations::expand_abbreviation(token).unwrap_or(token))
        .collect();

    let normalized = expanded.join(" ");

    let full_lower = format!("{raw_text} {normalized}").to_lowercase();
    let is_non_food = abbreviations::contains_non_food_keyword(&full_lower);

    NormalizedLine {
        text: normalized,
        brand,
        is_non_food,
    }
}
