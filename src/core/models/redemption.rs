//! Redemption model
//!
//! The outcome of applying a voucher to a purchase. Not persisted; derived
//! fresh on every apply call. Always carries the voucher's discount so the
//! caller can see the percentage even when it was not granted.

use serde::Serialize;

/// Minimum purchase amount below which a discount is withheld
///
/// Fixed for all vouchers; not configurable per voucher.
pub const MIN_PURCHASE_AMOUNT: u64 = 100;

/// Result of applying a voucher to a purchase amount
///
/// Amounts are whole currency units. A granted discount rounds the
/// final amount down.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Redemption {
    /// The original purchase amount
    pub amount: u64,

    /// The voucher's discount percentage (reported whether or not applied)
    pub discount: u8,

    /// The amount actually charged
    pub final_amount: u64,

    /// Whether the discount was granted on this call
    pub applied: bool,
}

impl Redemption {
    /// Discount granted: final amount is reduced by the percentage
    #[must_use]
    pub fn granted(amount: u64, discount: u8) -> Self {
        // Widen before multiplying; discount <= 100, so the reduction
        // never exceeds the amount and always fits back into u64.
        let reduction = u128::from(amount) * u128::from(discount) / 100;
        Self {
            amount,
            discount,
            final_amount: amount - u64::try_from(reduction).unwrap_or(amount),
            applied: true,
        }
    }

    /// Discount withheld: the charged amount is unchanged
    #[must_use]
    pub const fn withheld(amount: u64, discount: u8) -> Self {
        Self {
            amount,
            discount,
            final_amount: amount,
            applied: false,
        }
    }
}
