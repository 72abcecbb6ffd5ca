//! Tests for the storage adapters

use tempfile::TempDir;

use voucherbox::core::ports::VoucherStore;
use voucherbox::storage::{FileVoucherStore, MemoryVoucherStore};

use super::common;

// =============================================================================
// MEMORY STORE TESTS
// =============================================================================

#[test]
fn test_memory_find_missing_is_none() {
    let store = MemoryVoucherStore::new();
    assert!(store.find_by_code("NOPE").unwrap().is_none());
}

#[test]
fn test_memory_insert_then_find() {
    let store = MemoryVoucherStore::new();
    let voucher = common::unused_voucher(20);
    store.insert(&voucher).unwrap();

    let found = store.find_by_code(&voucher.code).unwrap().unwrap();
    assert_eq!(found.id, voucher.id);
    assert_eq!(found.discount, 20);
}

#[test]
fn test_memory_duplicate_insert_fails() {
    let store = MemoryVoucherStore::new();
    let voucher = common::unused_voucher(20);
    store.insert(&voucher).unwrap();

    assert!(store.insert(&voucher).is_err());
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn test_memory_mark_used() {
    let store = MemoryVoucherStore::new();
    let voucher = common::unused_voucher(20);
    store.insert(&voucher).unwrap();

    let updated = store.mark_used(&voucher.code).unwrap();
    assert!(updated.used);

    let found = store.find_by_code(&voucher.code).unwrap().unwrap();
    assert!(found.used);
}

#[test]
fn test_memory_mark_used_unknown_code_fails() {
    let store = MemoryVoucherStore::new();
    let err = store.mark_used("NOPE").unwrap_err();
    assert!(err.to_string().contains("no voucher with code"));
}

#[test]
fn test_memory_clones_share_state() {
    let store = MemoryVoucherStore::new();
    let handle = store.clone();

    let voucher = common::unused_voucher(20);
    store.insert(&voucher).unwrap();

    assert!(handle.find_by_code(&voucher.code).unwrap().is_some());
}

#[test]
fn test_memory_list_sorted_by_code() {
    let store = MemoryVoucherStore::new();
    store.insert(&voucherbox::core::models::Voucher::new("BBB", 10)).unwrap();
    store.insert(&voucherbox::core::models::Voucher::new("AAA", 10)).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].code, "AAA");
    assert_eq!(all[1].code, "BBB");
}

// =============================================================================
// FILE STORE TESTS
// =============================================================================

#[test]
fn test_file_missing_file_reads_empty() {
    let temp = TempDir::new().unwrap();
    let store = FileVoucherStore::new(temp.path().join("vouchers.json"));

    assert!(store.find_by_code("ANY").unwrap().is_none());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_file_insert_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".voucherbox/vouchers.json");
    let store = FileVoucherStore::new(&path);

    store.insert(&common::unused_voucher(20)).unwrap();
    assert!(path.exists());
}

#[test]
fn test_file_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vouchers.json");
    let voucher = common::unused_voucher(20);

    FileVoucherStore::new(&path).insert(&voucher).unwrap();

    let reopened = FileVoucherStore::new(&path);
    let found = reopened.find_by_code(&voucher.code).unwrap().unwrap();
    assert_eq!(found.id, voucher.id);
}

#[test]
fn test_file_duplicate_insert_fails() {
    let temp = TempDir::new().unwrap();
    let store = FileVoucherStore::new(temp.path().join("vouchers.json"));
    let voucher = common::unused_voucher(20);

    store.insert(&voucher).unwrap();
    assert!(store.insert(&voucher).is_err());
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_file_mark_used_persists() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vouchers.json");
    let voucher = common::unused_voucher(20);

    let store = FileVoucherStore::new(&path);
    store.insert(&voucher).unwrap();
    store.mark_used(&voucher.code).unwrap();

    let found = FileVoucherStore::new(&path).find_by_code(&voucher.code).unwrap().unwrap();
    assert!(found.used);
}

#[test]
fn test_file_mark_used_unknown_code_fails() {
    let temp = TempDir::new().unwrap();
    let store = FileVoucherStore::new(temp.path().join("vouchers.json"));
    assert!(store.mark_used("NOPE").is_err());
}

#[test]
fn test_file_corrupt_json_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vouchers.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileVoucherStore::new(&path);
    let err = store.list().unwrap_err();
    assert!(err.to_string().contains("vouchers.json"));
}
