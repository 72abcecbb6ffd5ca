//! Voucher model
//!
//! A voucher is a discount entitlement identified by a unique code.
//! Once redeemed it is marked used and never grants a discount again.

use serde::{Deserialize, Serialize};

/// A discount voucher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// Unique identifier (generated)
    pub id: String,

    /// Redemption code, unique across all vouchers
    pub code: String,

    /// Discount in whole percent (1-100, enforced at the input boundary)
    pub discount: u8,

    /// Whether this voucher has already been redeemed
    ///
    /// Transitions false -> true exactly once; never reversed.
    pub used: bool,

    /// When this voucher was created
    pub created_at: String,
}

impl Voucher {
    /// Create a fresh, unused voucher for the given code
    #[must_use]
    pub fn new(code: impl Into<String>, discount: u8) -> Self {
        Self {
            id: generate_id(),
            code: code.into(),
            discount,
            used: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn generate_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    format!("v{ts:x}")
}
