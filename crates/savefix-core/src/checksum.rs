//! FNV-1a (32-bit) checksum used by the save format.
//!
//! Non-cryptographic: it only detects accidental corruption or hand edits.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Incremental FNV-1a state. Feeding data in any number of pieces gives the
/// same result as hashing it in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a32 {
    state: u32,
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Fnv1a32 {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= u32::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    pub fn finish(&self) -> u32 {
        self.state
    }
}

/// Hash `data` in one shot.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hasher = Fnv1a32::new();
    hasher.update(data);
    hasher.finish()
}
