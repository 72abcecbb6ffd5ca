//! Apply command - redeem a voucher against a purchase

use std::path::Path;

use voucherbox::core::services::VoucherService;
use voucherbox::output::{ApplyOutcome, OutputMode};
use voucherbox::storage;

/// Apply the voucher to a purchase amount and print the outcome
pub fn apply(code: &str, amount: u64, store_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let service = VoucherService::new(storage::voucher_store(store_path));
    let redemption = service.apply_voucher(code, amount)?;

    ApplyOutcome::from(redemption).render(mode);
    Ok(())
}
