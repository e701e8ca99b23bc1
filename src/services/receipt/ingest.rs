//! Line-to-item classification for recognizer output.
//!
//! An external recognizer hands over candidate lines, each with an optional
//! quantity and price. This layer runs the junk filter, the normalizer, and
//! the shelf-life lookup, and keeps only lines that resolve to a product.

use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::junk_filter;
use super::normalizer;
use crate::services::shelf_life::match_engine;
use crate::services::shelf_life::types::{Category, Confidence};

/// Words that signal a line names a food product even when the catalog
/// does not know it.
const FOOD_SIGNALS: &[&str] = &[
    "organic",
    "fresh",
    "frozen",
    "canned",
    "dried",
    "smoked",
    "roasted",
    "grilled",
    "baked",
    "fried",
    "steamed",
    "whole",
    "sliced",
    "diced",
    "chopped",
    "minced",
    "ground",
    "boneless",
    "skinless",
    "lean",
    "fat free",
    "low fat",
    "natural",
    "raw",
    "cooked",
    "ready to eat",
    "oz",
    "lb",
    "pack",
    "bag",
    "box",
    "can",
    "jar",
    "bottle",
    "ct",
    "count",
    "dozen",
    "bunch",
];

/// Store-brand prefixes as they appear at the start of product lines.
const BRAND_SIGNALS: &[&str] = &["gv ", "mp ", "eq ", "ol ", "sg ", "gg ", "ss "];

static RE_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+\.\d{2})").expect("Invalid regex"));

/// One candidate line from the recognizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub text: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl LineInput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quantity: None,
            price: None,
        }
    }
}

/// A receipt line resolved to a product record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptItem {
    /// The line as it appeared on the receipt, trimmed.
    pub original_text: String,
    /// Display name: brand plus catalog name where both are known.
    pub name: String,
    pub category: Category,
    pub emoji: &'static str,
    pub confidence: Confidence,
    /// True only for items resolved against the catalog with high
    /// confidence.
    pub is_perishable: bool,
    pub quantity: u32,
    pub shelf_days: u32,
    pub price: Option<f64>,
}

/// Classify one recognizer line, or drop it.
///
/// Drops: lines shorter than 3 characters, junk lines, non-food lines, and
/// unmatched lines that do not look like a product. The lookup runs twice,
/// once on the normalized text and once on the raw text, and keeps a
/// high-confidence result from either attempt. Two independent pure calls;
/// nothing is retried.
pub fn classify_line(input: &LineInput) -> Option<ReceiptItem> {
    let text = input.text.trim();
    if text.chars().count() < 3 {
        return None;
    }

    if junk_filter::is_junk_line(text) {
        log::debug!("dropped junk line: {text:?}");
        return None;
    }

    let normalized = normalizer::normalize(text);
    if normalized.is_non_food {
        log::debug!("dropped non-food line: {text:?}");
        return None;
    }

    let normalized_match = match_engine::lookup(&normalized.text);
    let best = if normalized_match.confidence != Confidence::High {
        // Some lines match better un-normalized
        let raw_match = match_engine::lookup(text);
        if raw_match.confidence == Confidence::High {
            raw_match
        } else {
            normalized_match
        }
    } else {
        normalized_match
    };

    let is_known = best.confidence == Confidence::High;

    if !is_known && !is_likely_product_line(text) {
        return None;
    }

    let name = if is_known {
        match normalized.brand {
            Some(brand) => format!("{brand} {}", best.name),
            None => best.name.clone(),
        }
    } else {
        match (normalized.brand, normalized.text.is_empty()) {
            (Some(brand), false) => format!("{brand} {}", normalized.text),
            (None, false) => normalized.text.clone(),
            _ => text.to_string(),
        }
    };

    let quantity = input.quantity.unwrap_or(1).max(1);
    let price = input.price.or_else(|| extract_price(text));

    Some(ReceiptItem {
        original_text: text.to_string(),
        name,
        category: if is_known { best.category } else { Category::Other },
        emoji: if is_known {
            best.emoji
        } else {
            Category::Other.emoji()
        },
        confidence: if is_known {
            Confidence::High
        } else {
            Confidence::Low
        },
        is_perishable: is_known,
        quantity,
        shelf_days: if is_known {
            best.shelf_days
        } else {
            Category::Other.default_shelf_days()
        },
        price,
    })
}

/// Classify a batch of recognizer lines in parallel.
///
/// Lines are independent, so the batch fans out across threads; the output
/// preserves input order, with dropped lines simply absent.
pub fn classify_lines(lines: &[LineInput]) -> Vec<ReceiptItem> {
    lines.par_iter().filter_map(classify_line).collect()
}

/// Last-chance screen for lines that missed the catalog: does this still
/// look like a product name?
fn is_likely_product_line(line: &str) -> bool {
    let lower = line.trim().to_lowercase();

    let letter_count = lower.chars().filter(|c| c.is_alphabetic()).count();
    if letter_count < 3 {
        return false;
    }

    let word_count = lower
        .split(' ')
        .filter(|w| w.chars().count() >= 2)
        .count();
    if word_count < 1 {
        return false;
    }

    if FOOD_SIGNALS.iter().any(|signal| lower.contains(signal)) {
        return true;
    }
    if BRAND_SIGNALS.iter().any(|prefix| lower.starts_with(prefix)) {
        return true;
    }

    let non_space_count = lower.chars().filter(|c| !c.is_whitespace()).count();
    non_space_count > 0
        && letter_count as f64 / non_space_count as f64 > 0.7
        && lower.chars().count() >= 4
}

/// Best-effort price out of a line like "MILK 3.99 F".
fn extract_price(line: &str) -> Option<f64> {
    let captures = RE_PRICE.captures(line)?;
    captures.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
