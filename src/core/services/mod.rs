//! Business logic services

mod redeemer;

pub use redeemer::{ServiceError, VoucherService};
