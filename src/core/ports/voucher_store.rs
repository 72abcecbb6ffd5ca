//! Voucher store port
//!
//! Defines the interface for looking up and persisting vouchers.

use super::super::models::Voucher;

/// Storage backend for vouchers
///
/// Implementations handle where vouchers live (memory, JSON file, ...).
/// The store is keyed by code; implementations must keep codes unique.
pub trait VoucherStore: Send + Sync {
    /// Look up a voucher by its code
    fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Voucher>>;

    /// Persist a new voucher
    ///
    /// The service checks for duplicates before calling this; inserting a
    /// code that already exists is a bug in the caller.
    fn insert(&self, voucher: &Voucher) -> anyhow::Result<()>;

    /// Mark the voucher with the given code as used
    ///
    /// Returns the updated voucher. Fails if the code is unknown.
    fn mark_used(&self, code: &str) -> anyhow::Result<Voucher>;

    /// List all stored vouchers
    fn list(&self) -> anyhow::Result<Vec<Voucher>>;
}
