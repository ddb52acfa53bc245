//! In-memory save blob and its checksum field.
//!
//! The blob is never modified after loading. A repaired copy is a fresh
//! buffer built by [`SaveFile::with_checksum`].

mod error;
pub mod layout;
mod output_path;

use std::fs;
use std::path::Path;

use crate::checksum::fnv1a_32;

pub use error::SaveError;
pub use layout::{CHECKSUM_END, CHECKSUM_OFFSET, CHECKSUM_WIDTH, EXPECTED_SIZE};
pub use output_path::fixed_output_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    bytes: Vec<u8>,
}

impl SaveFile {
    /// Read the whole file into memory.
    pub fn load(path: &Path) -> Result<Self, SaveError> {
        let bytes = fs::read(path).map_err(|e| SaveError::io("read", path, e))?;
        tracing::debug!("loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `Some(actual_len)` when the blob is not the canonical 800 bytes.
    pub fn size_mismatch(&self) -> Option<usize> {
        (self.bytes.len() != EXPECTED_SIZE).then_some(self.bytes.len())
    }

    /// Bytes covered by the checksum. Errors if the field itself is missing.
    pub fn hashed_region(&self) -> Result<&[u8], SaveError> {
        self.ensure_field()?;
        Ok(&self.bytes[layout::HASHED_REGION])
    }

    /// Checksum stored in the file (big-endian).
    pub fn stored_checksum(&self) -> Result<u32, SaveError> {
        self.ensure_field()?;
        let mut raw = [0u8; CHECKSUM_WIDTH];
        raw.copy_from_slice(&self.bytes[layout::CHECKSUM_FIELD]);
        Ok(u32::from_be_bytes(raw))
    }

    /// Checksum the hashed region should carry.
    pub fn computed_checksum(&self) -> Result<u32, SaveError> {
        Ok(fnv1a_32(self.hashed_region()?))
    }

    /// Copy of the blob with the checksum field set to `checksum`.
    pub fn with_checksum(&self, checksum: u32) -> Result<Vec<u8>, SaveError> {
        self.ensure_field()?;
        let mut out = self.bytes.clone();
        out[layout::CHECKSUM_FIELD].copy_from_slice(&checksum.to_be_bytes());
        Ok(out)
    }

    fn ensure_field(&self) -> Result<(), SaveError> {
        if self.bytes.len() < CHECKSUM_END {
            return Err(SaveError::truncated(self.bytes.len()));
        }
        Ok(())
    }
}
