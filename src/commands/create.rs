//! Create command - store a new voucher

use std::path::Path;

use voucherbox::core::services::VoucherService;
use voucherbox::output::{OutputMode, VoucherCreated};
use voucherbox::storage;

/// Create a voucher with the given code and discount
pub fn create(code: &str, discount: u8, store_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let service = VoucherService::new(storage::voucher_store(store_path));
    let voucher = service.create_voucher(code, discount)?;

    VoucherCreated::from(&voucher).render(mode);
    Ok(())
}
