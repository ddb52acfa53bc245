//! Error types for loading and inspecting save blobs.

use std::io;
use std::path::PathBuf;

use super::layout::CHECKSUM_END;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The file could not be opened, read or written.
    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Too short to contain the checksum field; no verdict is possible.
    #[error("file is {len} bytes, need at least {required} to hold the checksum field")]
    Truncated { len: usize, required: usize },
}

impl SaveError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SaveError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn truncated(len: usize) -> Self {
        SaveError::Truncated {
            len,
            required: CHECKSUM_END,
        }
    }
}
