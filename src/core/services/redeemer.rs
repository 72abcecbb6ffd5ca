//! Voucher service - creation and redemption rules
//!
//! This service contains the business rules for vouchers: codes are unique,
//! a voucher is redeemed at most once, and a discount is only granted when
//! the purchase reaches the minimum amount.

use log::debug;
use thiserror::Error;

use super::super::models::{MIN_PURCHASE_AMOUNT, Redemption, Voucher};
use super::super::ports::VoucherStore;

/// Errors reported by the voucher service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Uniqueness violation on create, or unknown code on apply
    #[error("conflict: {0}")]
    Conflict(String),

    /// Failure in the underlying store
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a conflict error
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Voucher creation and redemption against an injected store
pub struct VoucherService {
    store: Box<dyn VoucherStore>,
}

impl std::fmt::Debug for VoucherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoucherService").finish_non_exhaustive()
    }
}

impl VoucherService {
    /// Create a service backed by the given store
    #[must_use]
    pub fn new(store: Box<dyn VoucherStore>) -> Self {
        Self { store }
    }

    /// Create a new voucher
    ///
    /// Fails with [`ServiceError::Conflict`] if a voucher with the same code
    /// already exists; nothing is written in that case. Discount validation
    /// (1-100) happens at the input boundary, not here.
    pub fn create_voucher(&self, code: &str, discount: u8) -> Result<Voucher, ServiceError> {
        if self.store.find_by_code(code)?.is_some() {
            debug!("rejecting duplicate voucher code {code}");
            return Err(ServiceError::conflict("voucher already exists"));
        }

        let voucher = Voucher::new(code, discount);
        self.store.insert(&voucher)?;
        Ok(voucher)
    }

    /// Apply a voucher to a purchase amount
    ///
    /// An unknown code is a [`ServiceError::Conflict`]. A voucher that is
    /// already used, or a purchase below [`MIN_PURCHASE_AMOUNT`], is a normal
    /// outcome with `applied = false` and the amount unchanged. Otherwise the
    /// voucher is marked used and the discounted amount is charged.
    pub fn apply_voucher(&self, code: &str, amount: u64) -> Result<Redemption, ServiceError> {
        let voucher = self
            .store
            .find_by_code(code)?
            .ok_or_else(|| ServiceError::conflict("voucher does not exist"))?;

        if voucher.used {
            debug!("voucher {code} already used; discount withheld");
            return Ok(Redemption::withheld(amount, voucher.discount));
        }

        if amount < MIN_PURCHASE_AMOUNT {
            debug!("amount {amount} below minimum purchase; discount withheld");
            return Ok(Redemption::withheld(amount, voucher.discount));
        }

        self.store.mark_used(code)?;
        Ok(Redemption::granted(amount, voucher.discount))
    }
}
