//! List command - show all stored vouchers

use std::path::Path;

use voucherbox::output::{OutputMode, VoucherInfo, VoucherList};
use voucherbox::storage;

/// List every voucher in the store
pub fn list(store_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let store = storage::voucher_store(store_path);
    let vouchers = store.list()?;

    let result = VoucherList {
        vouchers: vouchers.iter().map(VoucherInfo::from).collect(),
    };
    result.render(mode);
    Ok(())
}
