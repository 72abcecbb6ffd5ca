//! Domain types

mod redemption;
mod voucher;

pub use redemption::{MIN_PURCHASE_AMOUNT, Redemption};
pub use voucher::Voucher;
