//! In-memory voucher store
//!
//! Keeps vouchers in a shared map keyed by code. This is the injected fake
//! for unit tests; clones share the same map, so a test can hand one handle
//! to the service and inspect the other. Nothing survives the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, bail};

use crate::core::models::Voucher;
use crate::core::ports::VoucherStore;

/// In-memory store keyed by voucher code
#[derive(Debug, Clone, Default)]
pub struct MemoryVoucherStore {
    vouchers: Arc<Mutex<HashMap<String, Voucher>>>,
}

impl MemoryVoucherStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vouchers
    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no vouchers
    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, HashMap<String, Voucher>>> {
        self.vouchers.lock().map_err(|_| anyhow::anyhow!("voucher map lock poisoned"))
    }
}

impl VoucherStore for MemoryVoucherStore {
    fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Voucher>> {
        Ok(self.lock()?.get(code).cloned())
    }

    fn insert(&self, voucher: &Voucher) -> anyhow::Result<()> {
        let mut vouchers = self.lock()?;
        if vouchers.contains_key(&voucher.code) {
            bail!("voucher code {} already stored", voucher.code);
        }
        vouchers.insert(voucher.code.clone(), voucher.clone());
        Ok(())
    }

    fn mark_used(&self, code: &str) -> anyhow::Result<Voucher> {
        let mut vouchers = self.lock()?;
        let voucher = vouchers
            .get_mut(code)
            .with_context(|| format!("no voucher with code {code}"))?;
        voucher.used = true;
        Ok(voucher.clone())
    }

    fn list(&self) -> anyhow::Result<Vec<Voucher>> {
        let mut all: Vec<Voucher> = self.lock()?.values().cloned().collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(all)
    }
}
