//! Storage adapters for vouchers
//!
//! Provides the concrete [`VoucherStore`](crate::core::ports::VoucherStore)
//! backends:
//! - `file`: vouchers in a JSON file (default, what the CLI uses)
//! - `memory`: in-memory map (tests and embedders)

mod file;
mod memory;

use std::path::Path;

use crate::core::ports::VoucherStore;

pub use file::FileVoucherStore;
pub use memory::MemoryVoucherStore;

/// Default location of the voucher file, relative to the working directory
pub const DEFAULT_VOUCHER_PATH: &str = ".voucherbox/vouchers.json";

/// Get a voucher store backed by the given JSON file
#[must_use]
pub fn voucher_store(path: &Path) -> Box<dyn VoucherStore> {
    Box::new(FileVoucherStore::new(path))
}
