use super::*;

#[test]
fn test_store_banners_and_slogans() {
    assert!(is_junk_line("WALMART"));
    assert!(is_junk_line("Wal*Mart Supercenter"));
    assert!(is_junk_line("Save money. Live better."));
    assert!(is_junk_line("THANK YOU FOR SHOPPING"));
}

#[test]
fn test_addresses_and_zip_codes() {
    assert!(is_junk_line("1234 MAIN ST"));
    assert!(is_junk_line("ANYTOWN, TX 75001"));
    assert!(is_junk_line("SPRINGFIELD, IL"));
    assert!(is_junk_line("75001"));
    assert!(is_junk_line("75001-1234"));
}

#[test]
fn test_phone_numbers_dates_and_times() {
    assert!(is_junk_line("(555) 123-4567"));
    assert!(is_junk_line("555.123.4567"));
    assert!(is_junk_line("03/15/2024"));
    assert!(is_junk_line("2024-03-15"));
    assert!(is_junk_line("12:45 PM"));
}

#[test]
fn test_transaction_codes_and_staff_lines() {
    assert!(is_junk_line("ST# 02981 OP# 009044"));
    assert!(is_junk_line("AUTH CODE 558291"));
    assert!(is_junk_line("YOUR CASHIER WAS PAT"));
    assert!(is_junk_line("MGR ALEX"));
}

#[test]
fn test_mostly_numeric_barcode_lines() {
    assert!(is_junk_line("0 78742 01510 8"));
    assert!(is_junk_line("4011 4 @ 0.68"));
}

#[test]
fn test_financial_lines() {
    assert!(is_junk_line("SUBTOTAL"));
    assert!(is_junk_line("TAX 1 2.94"));
    assert!(is_junk_line("CHANGE DUE 4.33"));
    assert!(is_junk_line("VISA TEND"));
    assert!(is_junk_line("EBT SNAP"));
}

#[test]
fn test_quantity_and_weight_lines() {
    assert!(is_junk_line("@ 2 FOR 5.00"));
    assert!(is_junk_line("x3 at 1.99"));
    assert!(is_junk_line("1.23 lb @ 2.99/lb"));
    assert!(is_junk_line("NET WT 1.23 LB"));
}

#[test]
fn test_fragments_and_price_only_lines() {
    assert!(is_junk_line("AB"));
    assert!(is_junk_line("12"));
    assert!(is_junk_line("$3.99"));
    assert!(is_junk_line("3.99"));
    assert!(is_junk_line("-2.50"));
    assert!(is_junk_line("3.99 F"));
}

#[test]
fn test_separator_runs() {
    assert!(is_junk_line("****************"));
    assert!(is_junk_line("----====----"));
}

#[test]
fn test_loyalty_savings_and_returns() {
    assert!(is_junk_line("REWARDS MEMBER"));
    assert!(is_junk_line("CLIP DIGITAL COUPONS"));
    assert!(is_junk_line("ROLLBACK PRICE"));
    assert!(is_junk_line("REFUND ISSUED"));
}

#[test]
fn test_urls_and_emails() {
    assert!(is_junk_line("www.survey4u.example"));
    assert!(is_junk_line("visit example.com"));
    assert!(is_junk_line("help@example.net"));
}

#[test]
fn test_headers_and_surveys() {
    assert!(is_junk_line("DAIRY DEPT"));
    assert!(is_junk_line("AISLE 5"));
    assert!(is_junk_line("TELL US HOW WE DID"));
    assert!(is_junk_line("ENTER TO WIN $1000"));
}

#[test]
fn test_lone_all_caps_department_label() {
    assert!(is_junk_line("FROZEN"));
    assert!(is_junk_line("SEAFOOD"));
    // Lowercase is not a section header
    assert!(!is_junk_line("frozen peas"));
    // Four characters is just past the fragment cutoff, still a label
    assert!(is_junk_line("DELI"));
}

#[test]
fn test_product_lines_pass_through() {
    assert!(!is_junk_line("GV WHOLE MILK"));
    assert!(!is_junk_line("CHKN BRST 5.99"));
    assert!(!is_junk_line("bananas"));
    assert!(!is_junk_line("ORG BNNAS 1.52"));
    assert!(!is_junk_line("SIG SEL OJ 64OZ"));
}
