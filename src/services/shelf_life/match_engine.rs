//! Keyword scoring against the shelf-life catalog.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

#[cfg(feature = "debug_matcher")]
use log::debug;

use super::catalog::CATALOG;
use super::inference::infer_category;
use super::types::{Category, Confidence, LookupResult, MatchSource, ShelfLifeEntry};
use crate::services::receipt::normalizer;

/// Best score at or above which a match is reported as high confidence.
const HIGH_CONFIDENCE_SCORE: u32 = 80;
/// Best score at or above which a match is reported as medium confidence.
/// Below this the result falls through to category inference.
const MEDIUM_CONFIDENCE_SCORE: u32 = 55;

/// Minimum shared-prefix length before the prefix band scores at all.
const MIN_PREFIX_LEN: usize = 4;

static RE_NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));

/// Lowercase, squash symbol runs to single spaces, collapse whitespace.
///
/// Applied identically to keywords and candidates before comparison. This
/// is matching-only normalization, separate from the receipt normalizer.
pub(crate) fn match_normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let replaced = RE_NON_ALNUM_RUN.replace_all(&lower, " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn token_set(normalized: &str) -> HashSet<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Resolve receipt text to a catalog entry with a confidence tier.
///
/// Scores every catalog keyword against two candidate texts (the raw line
/// and its receipt-normalized form) and keeps the single best score. Ties
/// keep the first-encountered entry, so catalog declaration order is the
/// tie-break. A best score below the medium threshold falls through to
/// category inference, then to the `other` default.
pub fn lookup(receipt_text: &str) -> LookupResult {
    let raw = receipt_text.trim();
    if raw.is_empty() {
        return default_estimate(String::new());
    }

    let normalized_raw = match_normalize(raw);
    let normalized_line = match_normalize(&normalizer::normalize(raw).text);

    let mut candidates: Vec<String> = Vec::with_capacity(2);
    for candidate in [normalized_raw, normalized_line] {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    let candidate_tokens: Vec<HashSet<&str>> =
        candidates.iter().map(|c| token_set(c)).collect();

    let mut best_entry: Option<&ShelfLifeEntry> = None;
    let mut best_score = 0u32;

    for entry in CATALOG {
        for keyword in entry.keywords {
            let normalized_keyword = match_normalize(keyword);
            if normalized_keyword.is_empty() {
                continue;
            }

            for (candidate, tokens) in candidates.iter().zip(&candidate_tokens) {
                let score = keyword_score(&normalized_keyword, candidate, tokens);
                if score > best_score {
                    best_score = score;
                    best_entry = Some(entry);
                }
            }
        }
    }

    #[cfg(feature = "debug_matcher")]
    if let Some(entry) = best_entry {
        debug!(
            "lookup: best entry '{}' score={} candidates={:?}",
            entry.name, best_score, candidates
        );
    }

    if let Some(entry) = best_entry {
        if best_score >= HIGH_CONFIDENCE_SCORE {
            return entry_result(entry, Confidence::High, MatchSource::Database);
        }
        if best_score >= MEDIUM_CONFIDENCE_SCORE {
            return entry_result(entry, Confidence::Medium, MatchSource::DatabaseFuzzy);
        }
    }

    match infer_category(raw) {
        Some(category) => LookupResult {
            name: raw.to_string(),
            category,
            emoji: category.emoji(),
            shelf_days: category.default_shelf_days(),
            confidence: Confidence::Low,
            source: MatchSource::CategoryInference,
        },
        None => default_estimate(raw.to_string()),
    }
}

/// Score one normalized keyword against one normalized candidate.
///
/// Bands, strongest first; each band outranks the next regardless of
/// keyword length:
/// exact equality (200 + len), space-delimited substring (130 + len),
/// token subset (80 + len for one token, 95 + 8 per token + len for more),
/// shared 4+ char prefix on a single 4+ char token (45 + prefix length).
fn keyword_score(keyword: &str, candidate: &str, candidate_tokens: &HashSet<&str>) -> u32 {
    let keyword_len = keyword.chars().count() as u32;

    if keyword == candidate {
        return 200 + keyword_len;
    }

    let padded_keyword = format!(" {keyword} ");
    let padded_candidate = format!(" {candidate} ");
    if padded_candidate.contains(&padded_keyword) {
        return 130 + keyword_len;
    }

    let keyword_tokens = token_set(keyword);
    if !keyword_tokens.is_empty() && keyword_tokens.is_subset(candidate_tokens) {
        return if keyword_tokens.len() == 1 {
            80 + keyword_len
        } else {
            95 + keyword_tokens.len() as u32 * 8 + keyword_len
        };
    }

    if keyword_tokens.len() == 1 {
        if let Some(token) = keyword_tokens.iter().next() {
            if token.chars().count() >= MIN_PREFIX_LEN {
                let best_prefix = candidate_tokens
                    .iter()
                    .map(|t| common_prefix_len(token, t))
                    .max()
                    .unwrap_or(0);
                if best_prefix >= MIN_PREFIX_LEN {
                    return 45 + best_prefix as u32;
                }
            }
        }
    }

    0
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

fn entry_result(entry: &ShelfLifeEntry, confidence: Confidence, source: MatchSource) -> LookupResult {
    LookupResult {
        name: entry.name.to_string(),
        category: entry.category,
        emoji: entry.emoji,
        shelf_days: entry.shelf_days,
        confidence,
        source,
    }
}

fn default_estimate(name: String) -> LookupResult {
    LookupResult {
        name,
        category: Category::Other,
        emoji: Category::Other.emoji(),
        shelf_days: Category::Other.default_shelf_days(),
        confidence: Confidence::Low,
        source: MatchSource::DefaultEstimate,
    }
}

#[cfg(test)]
#[path = "tests/match_engine_tests.rs"]
mod tests;
