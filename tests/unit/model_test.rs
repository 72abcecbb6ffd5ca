//! Tests for domain models

use voucherbox::core::models::{MIN_PURCHASE_AMOUNT, Redemption, Voucher};

use super::common;

// =============================================================================
// VOUCHER TESTS
// =============================================================================

#[test]
fn test_new_voucher_is_unused() {
    let voucher = Voucher::new("WELCOME", 15);
    assert_eq!(voucher.code, "WELCOME");
    assert_eq!(voucher.discount, 15);
    assert!(!voucher.used);
    assert!(voucher.id.starts_with('v'));
    assert!(!voucher.created_at.is_empty());
}

#[test]
fn test_voucher_serde_roundtrip() {
    let voucher = common::unused_voucher(33);
    let json = serde_json::to_string(&voucher).unwrap();
    let back: Voucher = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, voucher.id);
    assert_eq!(back.code, voucher.code);
    assert_eq!(back.discount, voucher.discount);
    assert_eq!(back.used, voucher.used);
}

// =============================================================================
// REDEMPTION TESTS
// =============================================================================

#[test]
fn test_granted_reduces_amount() {
    let r = Redemption::granted(150, 50);
    assert_eq!(r.amount, 150);
    assert_eq!(r.discount, 50);
    assert_eq!(r.final_amount, 75);
    assert!(r.applied);
}

#[test]
fn test_granted_rounds_down() {
    // 105 * 33 / 100 = 34.65, truncated to 34
    let r = Redemption::granted(105, 33);
    assert_eq!(r.final_amount, 71);
}

#[test]
fn test_granted_full_discount() {
    let r = Redemption::granted(250, 100);
    assert_eq!(r.final_amount, 0);
}

#[test]
fn test_granted_huge_amount_does_not_overflow() {
    let r = Redemption::granted(u64::MAX, 50);
    assert_eq!(r.final_amount, u64::MAX - u64::MAX / 2);
    assert!(r.applied);

    let r = Redemption::granted(u64::MAX, 100);
    assert_eq!(r.final_amount, 0);
}

#[test]
fn test_withheld_keeps_amount() {
    let r = Redemption::withheld(90, 50);
    assert_eq!(r.amount, 90);
    assert_eq!(r.discount, 50);
    assert_eq!(r.final_amount, 90);
    assert!(!r.applied);
}

#[test]
fn test_minimum_purchase_constant() {
    assert_eq!(MIN_PURCHASE_AMOUNT, 100);
}
