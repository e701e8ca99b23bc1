use super::*;

fn line(text: &str) -> LineInput {
    LineInput::from_text(text)
}

// ─── Drops ────────────────────────────────────────────────────────

#[test]
fn test_drops_short_lines() {
    assert_eq!(classify_line(&line("ab")), None);
    assert_eq!(classify_line(&line("  x  ")), None);
    assert_eq!(classify_line(&line("")), None);
}

#[test]
fn test_drops_junk_lines() {
    assert_eq!(classify_line(&line("SUBTOTAL 23.87")), None);
    assert_eq!(classify_line(&line("ST# 02981 OP# 009044")), None);
    assert_eq!(classify_line(&line("Save money. Live better.")), None);
}

#[test]
fn test_drops_non_food_lines() {
    assert_eq!(classify_line(&line("TIDE DETERGENT")), None);
    assert_eq!(classify_line(&line("DNZN SHORTS")), None);
}

#[test]
fn test_drops_unmatched_lines_that_do_not_look_like_products() {
    // Two letters, heavy digits: not junk by ratio, not a product either
    assert_eq!(classify_line(&line("ab 12")), None);
}

// ─── Known products ───────────────────────────────────────────────

#[test]
fn test_known_product_resolves_high_confidence() {
    let item = classify_line(&line("CHKN BRST 5.99")).expect("item");
    assert_eq!(item.name, "Chicken Breast");
    assert_eq!(item.category, Category::Meat);
    assert_eq!(item.confidence, Confidence::High);
    assert!(item.is_perishable);
    assert_eq!(item.shelf_days, 2);
    assert_eq!(item.price, Some(5.99));
    assert_eq!(item.quantity, 1);
}

#[test]
fn test_brand_prefixes_display_name() {
    let item = classify_line(&line("GV WHOLE MILK")).expect("item");
    assert_eq!(item.name, "Great Value Whole Milk");
    assert_eq!(item.category, Category::Dairy);
    assert!(item.is_perishable);
}

#[test]
fn test_supplied_quantity_and_price_win_over_extraction() {
    let input = LineInput {
        text: "GV WHOLE MILK 3.49".to_string(),
        quantity: Some(2),
        price: Some(6.98),
    };
    let item = classify_line(&input).expect("item");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price, Some(6.98));
}

#[test]
fn test_zero_quantity_clamps_to_one() {
    let input = LineInput {
        text: "GV WHOLE MILK".to_string(),
        quantity: Some(0),
        price: None,
    };
    let item = classify_line(&input).expect("item");
    assert_eq!(item.quantity, 1);
}

// ─── Unknown but plausible products ───────────────────────────────

#[test]
fn test_likely_product_kept_as_low_confidence_other() {
    let item = classify_line(&line("pomegranate arils")).expect("item");
    assert_eq!(item.category, Category::Other);
    assert_eq!(item.confidence, Confidence::Low);
    assert!(!item.is_perishable);
    assert_eq!(item.shelf_days, Category::Other.default_shelf_days());
    assert_eq!(item.name, "pomegranate arils");
}

#[test]
fn test_unknown_branded_item_keeps_brand_in_name() {
    let item = classify_line(&line("GV PLANTAIN CRISPS")).expect("item");
    assert_eq!(item.name, "Great Value PLANTAIN CRISPS");
    assert_eq!(item.confidence, Confidence::Low);
}

// ─── Product-line heuristic ───────────────────────────────────────

#[test]
fn test_likely_product_line_signals() {
    assert!(is_likely_product_line("organic quinoa 16 oz"));
    assert!(is_likely_product_line("gv tortilla strips"));
    assert!(is_likely_product_line("pomegranate arils"));
    assert!(!is_likely_product_line("ab 12"));
    assert!(!is_likely_product_line("x9 z8 q7 w6"));
}

// ─── Price extraction ─────────────────────────────────────────────

#[test]
fn test_extract_price_variants() {
    assert_eq!(extract_price("MILK 3.99 F"), Some(3.99));
    assert_eq!(extract_price("$12.49"), Some(12.49));
    assert_eq!(extract_price("BANANAS"), None);
}

// ─── Batch ────────────────────────────────────────────────────────

#[test]
fn test_batch_preserves_input_order() {
    let lines = vec![
        line("GV WHOLE MILK"),
        line("SUBTOTAL 23.87"),
        line("ORG BNNAS"),
        line("CHKN BRST"),
    ];
    let items = classify_lines(&lines);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Great Value Whole Milk", "Bananas", "Chicken Breast"]
    );
}

#[test]
fn test_classification_is_idempotent() {
    let input = line("GV 2% MLK F");
    assert_eq!(classify_line(&input), classify_line(&input));
}
