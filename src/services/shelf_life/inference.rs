//! Category inference fallback.
//!
//! When no catalog entry scores well, a coarse category can still be
//! inferred from hint-phrase overlap, giving the caller a sensible default
//! shelf life instead of the generic one.

use super::match_engine::{match_normalize, token_set};
use super::types::Category;

/// Hint phrases per category, scanned in declaration order; a score tie
/// keeps the earlier category.
pub(crate) const CATEGORY_HINTS: &[(Category, &[&str])] = &[
    (
        Category::Dairy,
        &["milk", "eggs", "egg", "yogurt", "cheese", "butter", "cream", "half and half"],
    ),
    (
        Category::Meat,
        &["chicken", "beef", "steak", "pork", "turkey", "bacon", "sausage", "ham", "deli"],
    ),
    (
        Category::Seafood,
        &["salmon", "shrimp", "fish", "tilapia", "cod", "crab", "tuna"],
    ),
    (
        Category::Fruit,
        &[
            "banana", "apple", "berry", "grape", "orange", "lemon", "lime", "avocado", "melon",
            "peach",
        ],
    ),
    (
        Category::Vegetable,
        &[
            "lettuce", "tomato", "pepper", "broccoli", "carrot", "spinach", "onion", "potato",
            "garlic", "mushroom", "celery", "cucumber", "zucchini", "corn", "beans",
        ],
    ),
    (
        Category::Bakery,
        &["bread", "bagel", "tortilla", "muffin", "croissant", "bun", "roll"],
    ),
    (
        Category::Beverage,
        &["juice", "water", "soda", "coffee", "tea", "drink"],
    ),
    (
        Category::Prepared,
        &["hummus", "guacamole", "salsa", "tofu", "ravioli", "tortellini", "fresh pasta"],
    ),
    (
        Category::Condiment,
        &["ketchup", "mustard", "mayo", "mayonnaise", "sauce", "dressing"],
    ),
    (
        Category::Frozen,
        &["frozen", "ice cream", "pizza", "frz", "frzn"],
    ),
];

/// Minimum accumulated hint score before inference commits to a category.
const MIN_HINT_SCORE: u32 = 3;

/// Infer a coarse category from hint-phrase overlap.
///
/// Per hint: whole-text equality scores 8, full token containment scores
/// 4 plus the hint's token count, a lone-token hit scores 3. The best
/// category wins if it reaches the minimum score.
pub fn infer_category(text: &str) -> Option<Category> {
    let normalized = match_normalize(text);
    if normalized.is_empty() {
        return None;
    }
    let tokens = token_set(&normalized);
    if tokens.is_empty() {
        return None;
    }

    let mut best_category: Option<Category> = None;
    let mut best_score = 0u32;

    for (category, hints) in CATEGORY_HINTS {
        let mut score = 0u32;
        for hint in *hints {
            let normalized_hint = match_normalize(hint);
            if normalized_hint.is_empty() {
                continue;
            }
            if normalized == normalized_hint {
                score += 8;
                continue;
            }

            let hint_tokens = token_set(&normalized_hint);
            if hint_tokens.is_empty() {
                continue;
            }

            if hint_tokens.is_subset(&tokens) {
                score += 4 + hint_tokens.len() as u32;
            } else if hint_tokens.len() == 1 {
                if let Some(single) = hint_tokens.iter().next() {
                    if tokens.contains(single) {
                        score += 3;
                    }
                }
            }
        }

        if score > best_score {
            best_score = score;
            best_category = Some(*category);
        }
    }

    if best_score >= MIN_HINT_SCORE {
        best_category
    } else {
        None
    }
}
