//! Fixed layout of the checksum field inside a save blob.

/// Byte offset of the stored checksum.
pub const CHECKSUM_OFFSET: usize = 0x30C;
/// Width of the stored checksum in bytes (big-endian u32).
pub const CHECKSUM_WIDTH: usize = 4;
/// One past the last checksum byte; also the minimum usable file length.
pub const CHECKSUM_END: usize = CHECKSUM_OFFSET + CHECKSUM_WIDTH;
/// Canonical save blob length.
pub const EXPECTED_SIZE: usize = 800;

/// Region covered by the checksum: everything before the field.
pub const HASHED_REGION: std::ops::Range<usize> = 0..CHECKSUM_OFFSET;
/// Region holding the checksum itself.
pub const CHECKSUM_FIELD: std::ops::Range<usize> = CHECKSUM_OFFSET..CHECKSUM_END;
