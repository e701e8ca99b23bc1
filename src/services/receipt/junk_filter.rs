//! Receipt junk-line filtering.
//!
//! Rejects OCR lines that are receipt metadata rather than products: store
//! banners, addresses, phone numbers, transaction codes, totals, barcodes,
//! loyalty blurbs, and so on. A line is junk when any predicate matches;
//! the predicates are independent, so evaluation order never changes the
//! verdict, only how early it short-circuits.

use regex::Regex;
use std::sync::LazyLock;

/// Store names and slogans printed in receipt headers and footers.
const STORE_PATTERNS: &[&str] = &[
    "walmart",
    "wal-mart",
    "wal*mart",
    "target",
    "costco",
    "kroger",
    "safeway",
    "publix",
    "aldi",
    "trader joe",
    "whole foods",
    "sam's club",
    "meijer",
    "h-e-b",
    "heb",
    "winco",
    "food lion",
    "piggly wiggly",
    "wegmans",
    "giant eagle",
    "stop & shop",
    "stop and shop",
    "shoprite",
    "food city",
    "winn-dixie",
    "winn dixie",
    "bi-lo",
    "harris teeter",
    "sprouts",
    "fresh market",
    "lidl",
    "save money",
    "live better",
    "everyday low",
    "great prices",
    "thank you",
    "thanks for",
    "welcome to",
    "come again",
    "have a nice",
    "valued customer",
    "we appreciate",
    "shop smart",
    "low prices",
    "price match",
];

/// Transaction, register, and card markers.
const TRANSACTION_PATTERNS: &[&str] = &[
    "st#",
    "op#",
    "te#",
    "tr#",
    "tc#",
    "ref#",
    "seq#",
    "trn#",
    "reg#",
    "cshr",
    "cashier",
    "register",
    "receipt",
    "transaction",
    "terminal",
    "approval",
    "auth code",
    "auth#",
    "appr code",
    "chip read",
    "aid:",
    "tvr:",
    "tsi:",
    "merchant",
    "acct#",
    "card#",
];

/// Staff-role words that appear on name lines.
const STAFF_PATTERNS: &[&str] = &[
    "mgr",
    "manager",
    "clerk",
    "associate",
    "operator",
    "served by",
    "your cashier",
    "team member",
];

/// Totals, tax, tender, and payment wording.
const FINANCIAL_PATTERNS: &[&str] = &[
    "subtotal",
    "sub total",
    "sub-total",
    "total",
    "tax",
    "change due",
    "tender",
    "cash",
    "credit",
    "debit",
    "visa",
    "mastercard",
    "amex",
    "discover",
    "ebt",
    "snap",
    "wic",
    "balance",
    "payment",
    "paid",
    "amount due",
    "items sold",
    "item(s)",
    "# items",
    "number of items",
    "change",
    "you saved",
    "your savings",
];

/// Loyalty, membership, and coupon wording.
const LOYALTY_PATTERNS: &[&str] = &[
    "loyalty",
    "rewards",
    "member",
    "membership",
    "points",
    "bonus",
    "club card",
    "plus card",
    "advantage",
    "coupon",
    "promo",
    "promotion",
    "offer",
    "scan your",
    "download our",
    "download app",
];

/// Savings, discount, and rollback wording.
const SAVINGS_PATTERNS: &[&str] = &[
    "savings",
    "saved",
    "discount",
    "rollback",
    "clearance",
    "markdown",
    "price reduced",
    "was ",
    "now ",
    "you save",
    "sale price",
    "reg price",
    "regular price",
    "price cut",
    "special",
    "% off",
];

/// Return, refund, and void wording.
const RETURN_PATTERNS: &[&str] = &[
    "return",
    "refund",
    "void",
    "cancel",
    "exchange",
    "price override",
    "price adj",
    "adjustment",
];

/// Department headers and other non-product labels.
const HEADER_PATTERNS: &[&str] = &[
    "department",
    "dept",
    "grocery",
    "produce",
    "bakery dept",
    "meat dept",
    "deli dept",
    "aisle",
    "shelf",
    "isle",
    "item not on file",
    "not found",
    "see store",
    "price inquiry",
    "price check",
];

/// Survey, feedback, and sweepstakes wording.
const SURVEY_PATTERNS: &[&str] = &[
    "survey",
    "feedback",
    "tell us",
    "rate your",
    "how did we",
    "experience",
    "visit us",
    "enter to win",
    "sweepstakes",
    "contest",
];

/// Section labels printed as a lone ALL-CAPS word.
const DEPARTMENT_LABELS: &[&str] = &[
    "grocery",
    "produce",
    "dairy",
    "frozen",
    "deli",
    "bakery",
    "meat",
    "seafood",
    "beverages",
    "snacks",
    "household",
];

static RE_STATE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{2}\s+\d{5}").expect("Invalid regex"));
static RE_STREET_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+\s+(main|elm|oak|maple|first|second|third|north|south|east|west|center|market|spring|lake|river|park|hill|valley|broad|high|church|mill|pine|cedar|washington|lincoln|jackson|jefferson)\s+(st|ave|rd|blvd|dr|ln|ct|way|pl|pkwy|hwy|cir)",
    )
    .expect("Invalid regex")
});
static RE_CITY_STATE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[a-z]{2}\s*\d{5}").expect("Invalid regex"));
static RE_TRAILING_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[a-z]{2}\s*$").expect("Invalid regex"));
static RE_BARE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("Invalid regex"));
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("Invalid regex"));
static RE_SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4}").expect("Invalid regex"));
static RE_CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}\s*(am|pm)?").expect("Invalid regex"));
static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Invalid regex"));
static RE_QTY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[@x]\s*\d").expect("Invalid regex"));
static RE_WEIGHT_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\s*(lb|lbs|kg|oz)\s*(@|at)").expect("Invalid regex"));
static RE_NET_WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"net\s*w(t|eight)").expect("Invalid regex"));
static RE_PRICE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?\d+\.\d{2}$").expect("Invalid regex"));
static RE_SIGNED_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\$?\d+\.\d{2}\s*[a-z]?$").expect("Invalid regex"));
static RE_SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*#\-=_.]{3,}$").expect("Invalid regex"));
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+@[a-z0-9]+\.[a-z]").expect("Invalid regex"));
static RE_PRICE_TAX_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?\d+\.\d{2}\s+[a-z]$").expect("Invalid regex"));

/// True when the line is receipt metadata rather than a product.
pub fn is_junk_line(line: &str) -> bool {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();

    // Store names and slogans
    if STORE_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // Addresses, cities, states, zip codes
    if RE_STATE_ZIP.is_match(&lower)
        || RE_STREET_ADDRESS.is_match(&lower)
        || RE_CITY_STATE_ZIP.is_match(&lower)
        || RE_TRAILING_STATE.is_match(&lower)
        || RE_BARE_ZIP.is_match(&lower)
    {
        return true;
    }

    // Phone numbers, dates, times
    if RE_PHONE.is_match(&lower)
        || RE_SLASH_DATE.is_match(&lower)
        || RE_CLOCK_TIME.is_match(&lower)
        || RE_ISO_DATE.is_match(&lower)
    {
        return true;
    }

    // Transaction codes and staff names
    if TRANSACTION_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }
    if STAFF_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // UPC barcodes: lines that are mostly digits
    let digit_count = lower.chars().filter(|c| c.is_numeric()).count();
    let total_chars = lower.chars().filter(|c| !c.is_whitespace()).count();
    if total_chars > 0 && digit_count as f64 / total_chars as f64 > 0.55 {
        return true;
    }

    // Totals, tax, payment, change
    if FINANCIAL_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // Quantity and weight-only lines
    if RE_QTY_MARKER.is_match(&lower)
        || RE_WEIGHT_AT.is_match(&lower)
        || RE_NET_WEIGHT.is_match(&lower)
    {
        return true;
    }

    // Fragments: fewer than 2 letters, or shorter than 4 characters
    let alpha_count = lower.chars().filter(|c| c.is_alphabetic()).count();
    if alpha_count < 2 {
        return true;
    }
    if lower.chars().count() < 4 {
        return true;
    }

    // Price-only lines, with or without sign and tax flag
    if RE_PRICE_ONLY.is_match(&lower)
        || RE_SIGNED_PRICE.is_match(&lower)
        || RE_PRICE_TAX_FLAG.is_match(&lower)
    {
        return true;
    }

    // Separator runs
    if RE_SEPARATOR_RUN.is_match(&lower) {
        return true;
    }

    // Loyalty, savings, returns
    if LOYALTY_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }
    if SAVINGS_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }
    if RETURN_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // URLs and email addresses
    if lower.contains("www.") || lower.contains(".com") || lower.contains(".org") || lower.contains("http") {
        return true;
    }
    if RE_EMAIL.is_match(&lower) {
        return true;
    }

    // Department headers, surveys
    if HEADER_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }
    if SURVEY_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // A lone ALL-CAPS word naming a store section
    let word_count = trimmed.split(' ').filter(|w| !w.is_empty()).count();
    if word_count == 1
        && trimmed == trimmed.to_uppercase()
        && trimmed.chars().count() > 3
        && DEPARTMENT_LABELS.contains(&lower.as_str())
    {
        return true;
    }

    false
}

#[cfg(test)]
#[path = "tests/junk_filter_tests.rs"]
mod tests;
