//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Redemption, Voucher};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a create operation
#[derive(Debug, Serialize)]
pub struct VoucherCreated {
    /// Generated voucher ID
    pub id: String,
    /// The redemption code
    pub code: String,
    /// Discount percentage
    pub discount: u8,
    /// Always false on creation
    pub used: bool,
}

/// Result of an apply operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApplyOutcome {
    /// Original purchase amount
    pub amount: u64,
    /// The voucher's discount percentage
    pub discount: u8,
    /// Amount actually charged
    pub final_amount: u64,
    /// Whether the discount was granted
    pub applied: bool,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct VoucherList {
    /// All stored vouchers
    pub vouchers: Vec<VoucherInfo>,
}

/// A stored voucher, as shown in listings
#[derive(Debug, Serialize)]
pub struct VoucherInfo {
    /// Voucher ID
    pub id: String,
    /// Redemption code
    pub code: String,
    /// Discount percentage
    pub discount: u8,
    /// Whether it has been redeemed
    pub used: bool,
}

impl From<&Voucher> for VoucherCreated {
    fn from(v: &Voucher) -> Self {
        Self {
            id: v.id.clone(),
            code: v.code.clone(),
            discount: v.discount,
            used: v.used,
        }
    }
}

impl From<Redemption> for ApplyOutcome {
    fn from(r: Redemption) -> Self {
        Self {
            amount: r.amount,
            discount: r.discount,
            final_amount: r.final_amount,
            applied: r.applied,
        }
    }
}

impl From<&Voucher> for VoucherInfo {
    fn from(v: &Voucher) -> Self {
        Self {
            id: v.id.clone(),
            code: v.code.clone(),
            discount: v.discount,
            used: v.used,
        }
    }
}

impl VoucherCreated {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Created voucher {} ({}% off)", self.code.bold(), self.discount);
        println!("  ID: {}", self.id);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ApplyOutcome {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.applied {
            println!(
                "{}: {} -> {} ({}% off)",
                "Discount applied".green(),
                self.amount,
                self.final_amount,
                self.discount
            );
        } else {
            println!("{}: amount unchanged ({})", "Discount not applied".yellow(), self.amount);
            println!("  Voucher discount would be {}%", self.discount);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl VoucherList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.vouchers.is_empty() {
            println!("No vouchers stored.");
            return;
        }

        println!("Vouchers:\n");
        for v in &self.vouchers {
            let status = if v.used { "used".red() } else { "unused".green() };
            println!("  {} - {}% off [{}]", v.code.bold(), v.discount, status);
            println!("  ID: {}\n", v.id);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
