//! File-based voucher store
//!
//! Persists all vouchers as a single JSON array. Every operation reads the
//! whole file and writes it back; fine at this scale, and it keeps the
//! store free of any open handles between calls.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::models::Voucher;
use crate::core::ports::VoucherStore;

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct FileVoucherStore {
    path: PathBuf,
}

impl FileVoucherStore {
    /// Create a store backed by the given file
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty store and is created on first insert.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn load(&self) -> anyhow::Result<Vec<Voucher>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, vouchers: &[Voucher]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(vouchers)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl VoucherStore for FileVoucherStore {
    fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Voucher>> {
        Ok(self.load()?.into_iter().find(|v| v.code == code))
    }

    fn insert(&self, voucher: &Voucher) -> anyhow::Result<()> {
        let mut vouchers = self.load()?;
        anyhow::ensure!(
            !vouchers.iter().any(|v| v.code == voucher.code),
            "voucher code {} already stored",
            voucher.code
        );
        vouchers.push(voucher.clone());
        self.save(&vouchers)?;
        debug!("stored voucher {} in {}", voucher.code, self.path.display());
        Ok(())
    }

    fn mark_used(&self, code: &str) -> anyhow::Result<Voucher> {
        let mut vouchers = self.load()?;
        let voucher = vouchers
            .iter_mut()
            .find(|v| v.code == code)
            .with_context(|| format!("no voucher with code {code}"))?;
        voucher.used = true;
        let updated = voucher.clone();
        self.save(&vouchers)?;
        debug!("marked voucher {code} as used");
        Ok(updated)
    }

    fn list(&self) -> anyhow::Result<Vec<Voucher>> {
        self.load()
    }
}
