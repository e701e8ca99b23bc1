use super::*;

// ─── Scoring bands ────────────────────────────────────────────────

#[test]
fn test_exact_equality_band() {
    let tokens = token_set("milk");
    assert_eq!(keyword_score("milk", "milk", &tokens), 204);
}

#[test]
fn test_substring_band() {
    let candidate = "whole milk gallon";
    let tokens = token_set(candidate);
    assert_eq!(keyword_score("milk", candidate, &tokens), 134);
}

#[test]
fn test_token_subset_bands() {
    let candidate = "milk gallon whole";
    let tokens = token_set(candidate);
    // Multi-token keyword, out of order in the candidate: 95 + 2*8 + 10
    assert_eq!(keyword_score("whole milk", candidate, &tokens), 121);

    let candidate = "store brand milk";
    let tokens = token_set(candidate);
    // Single-token subset never fires below the substring band on a
    // space-joined candidate, so force it with a multi-word mismatch
    assert_eq!(keyword_score("milk", candidate, &tokens), 134);
}

#[test]
fn test_prefix_band() {
    let candidate = "milkshake banana";
    let tokens = token_set(candidate);
    // "milk" shares a 4-char prefix with "milkshake": 45 + 4
    assert_eq!(keyword_score("milk", candidate, &tokens), 49);
}

#[test]
fn test_no_match_scores_zero() {
    let candidate = "paper towels";
    let tokens = token_set(candidate);
    assert_eq!(keyword_score("milk", candidate, &tokens), 0);
}

#[test]
fn test_band_ordering_is_strict() {
    // Exact > substring > multi-token subset > prefix, for one keyword
    let exact = keyword_score("milk", "milk", &token_set("milk"));
    let substring = keyword_score("milk", "whole milk", &token_set("whole milk"));
    let subset = keyword_score(
        "whole milk",
        "milk gallon whole",
        &token_set("milk gallon whole"),
    );
    let prefix = keyword_score("milk", "milkshake", &token_set("milkshake"));

    assert!(exact > substring);
    assert!(substring > subset);
    assert!(subset > prefix);
    assert!(prefix > 0);
}

#[test]
fn test_short_tokens_never_prefix_match() {
    // Three-character keywords are below the prefix floor
    let candidate = "ojx juice";
    let tokens = token_set(candidate);
    assert_eq!(keyword_score("oj", candidate, &tokens), 0);
}

// ─── Match normalization ──────────────────────────────────────────

#[test]
fn test_match_normalize_squashes_symbols() {
    assert_eq!(match_normalize("2% MILK!!"), "2 milk");
    assert_eq!(match_normalize("  Half-and-Half  "), "half and half");
    assert_eq!(match_normalize("***"), "");
}

// ─── Lookup ───────────────────────────────────────────────────────

#[test]
fn test_lookup_whole_milk_golden() {
    let result = lookup("whole milk");
    assert_eq!(result.name, "Whole Milk");
    assert_eq!(result.category, Category::Dairy);
    assert_eq!(result.shelf_days, 7);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.source, MatchSource::Database);
}

#[test]
fn test_lookup_expands_pos_abbreviations() {
    let result = lookup("chkn brst");
    assert_eq!(result.name, "Chicken Breast");
    assert_eq!(result.shelf_days, 2);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_lookup_unknown_text_defaults() {
    let result = lookup("xyzzy nonsense item");
    assert_eq!(result.name, "xyzzy nonsense item");
    assert_eq!(result.category, Category::Other);
    assert_eq!(result.shelf_days, Category::Other.default_shelf_days());
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.source, MatchSource::DefaultEstimate);
}

#[test]
fn test_lookup_falls_back_to_category_inference() {
    let result = lookup("frozen pizza snack");
    assert_eq!(result.category, Category::Frozen);
    assert_eq!(result.shelf_days, 90);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.source, MatchSource::CategoryInference);
    // The raw text is kept as the name when only a category is known
    assert_eq!(result.name, "frozen pizza snack");
}

#[test]
fn test_lookup_empty_input_short_circuits() {
    let result = lookup("");
    assert_eq!(result.name, "");
    assert_eq!(result.category, Category::Other);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.source, MatchSource::DefaultEstimate);

    assert_eq!(lookup("   "), result);
}

#[test]
fn test_lookup_medium_confidence_via_prefix() {
    // "watermelons" only prefix-matches the "watermelon" keyword
    // (10 shared chars): 45 + 10 lands in the medium band
    let result = lookup("watermelons");
    assert_eq!(result.name, "Watermelon");
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(result.source, MatchSource::DatabaseFuzzy);
}

#[test]
fn test_lookup_tie_keeps_catalog_order() {
    // "egs mlk" expands to "eggs milk"; the Whole Milk "milk" keyword and
    // the Eggs "eggs" keyword both score 134, and Whole Milk is declared
    // first
    let result = lookup("egs mlk");
    assert_eq!(result.name, "Whole Milk");
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_lookup_scores_raw_and_normalized_candidates() {
    // The raw text matches the "org bnnas" keyword exactly, even though
    // the normalized form ("organic BNNAS") is further from the table
    let result = lookup("ORG BNNAS");
    assert_eq!(result.name, "Bananas");
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_lookup_is_idempotent() {
    let first = lookup("GV 2% MLK");
    let second = lookup("GV 2% MLK");
    assert_eq!(first, second);
}
