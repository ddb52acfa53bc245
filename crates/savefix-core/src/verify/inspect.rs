//! Read-only inspection of a loaded blob: stored vs computed checksum.

use crate::save_file::{SaveError, SaveFile, CHECKSUM_OFFSET, EXPECTED_SIZE};

/// Everything the verdict is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    pub len: usize,
    pub stored: u32,
    pub computed: u32,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }

    /// True when the blob is not the canonical size. Never fatal.
    pub fn size_mismatch(&self) -> bool {
        self.len != EXPECTED_SIZE
    }

    /// Number of bytes fed to the hasher.
    pub fn hashed_len(&self) -> usize {
        CHECKSUM_OFFSET
    }
}

/// Extract the stored field (failing on truncation first), then hash.
pub fn inspect(save: &SaveFile) -> Result<Inspection, SaveError> {
    let stored = save.stored_checksum()?;
    if let Some(len) = save.size_mismatch() {
        tracing::warn!("expected {} bytes, got {}; continuing", EXPECTED_SIZE, len);
    }
    let computed = save.computed_checksum()?;
    tracing::debug!(
        "stored=0x{:08X} computed=0x{:08X} len={}",
        stored,
        computed,
        save.len()
    );
    Ok(Inspection {
        len: save.len(),
        stored,
        computed,
    })
}
