//! Verify/fix workflow for a single save file.
//!
//! Load -> extract stored field -> size check -> hash prefix -> compare.
//! On mismatch the caller's [`Confirm`] decides whether a corrected copy is
//! written next to the source. The source file is only ever read.

mod inspect;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::confirm::{Confirm, FIX_PROMPT};
use crate::save_file::{fixed_output_path, SaveError, SaveFile, CHECKSUM_OFFSET, EXPECTED_SIZE};

pub use inspect::{inspect, Inspection};

/// Terminal state of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Stored checksum matches; nothing written.
    Valid,
    /// Mismatch, confirmed; corrected copy written to `output`.
    Fixed { output: PathBuf },
    /// Mismatch, not confirmed; nothing written.
    Declined,
}

/// Run the whole workflow against `path`, reporting progress on `out`.
///
/// I/O failures and truncated files come back as [`SaveError`] inside the
/// `anyhow::Error`; every other path ends in an [`Outcome`].
pub fn verify_and_fix<C, W>(path: &Path, confirm: &mut C, out: &mut W) -> Result<Outcome>
where
    C: Confirm + ?Sized,
    W: Write,
{
    let save = SaveFile::load(path)?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "File size: {} bytes", save.len())?;

    let report = inspect(&save)?;
    writeln!(
        out,
        "Existing checksum at 0x{:X}: 0x{:08X}",
        CHECKSUM_OFFSET, report.stored
    )?;
    if report.size_mismatch() {
        writeln!(out, "Warning: Expected {} bytes, got {}", EXPECTED_SIZE, report.len)?;
    }
    writeln!(
        out,
        "Hashing {} bytes (excluding checksum at 0x{:X})",
        report.hashed_len(),
        CHECKSUM_OFFSET
    )?;
    writeln!(out, "Calculated checksum:        0x{:08X}", report.computed)?;

    if report.is_valid() {
        writeln!(out, "Checksum is VALID")?;
        tracing::info!("{}: checksum valid (0x{:08X})", path.display(), report.stored);
        return Ok(Outcome::Valid);
    }

    writeln!(out, "Checksum is INVALID")?;
    tracing::info!(
        "{}: checksum invalid, stored=0x{:08X} expected=0x{:08X}",
        path.display(),
        report.stored,
        report.computed
    );

    writeln!(out)?;
    out.flush()?;
    if !confirm.confirm(FIX_PROMPT)? {
        writeln!(out, "No changes made")?;
        tracing::info!("{}: fix declined, nothing written", path.display());
        return Ok(Outcome::Declined);
    }

    let output = write_fixed_copy(path, &save, report.computed)?;
    writeln!(out, "Fixed checksum written to: {}", output.display())?;
    Ok(Outcome::Fixed { output })
}

/// Write `save` with its checksum field set to `checksum` to the derived
/// output path. Returns that path.
pub fn write_fixed_copy(
    source: &Path,
    save: &SaveFile,
    checksum: u32,
) -> Result<PathBuf, SaveError> {
    let output = fixed_output_path(source);
    let bytes = save.with_checksum(checksum)?;
    fs::write(&output, &bytes).map_err(|e| SaveError::io("write", &output, e))?;
    tracing::info!(
        "wrote corrected copy ({} bytes, checksum 0x{:08X}) to {}",
        bytes.len(),
        checksum,
        output.display()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::fnv1a_32;
    use crate::save_file::CHECKSUM_END;

    fn write_blob(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn signed(len: usize) -> Vec<u8> {
        let mut bytes: Vec<u8> = (0..len).map(|i| (i * 13 % 256) as u8).collect();
        let sum = fnv1a_32(&bytes[..CHECKSUM_OFFSET]);
        bytes[CHECKSUM_OFFSET..CHECKSUM_END].copy_from_slice(&sum.to_be_bytes());
        bytes
    }

    #[test]
    fn valid_file_never_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_blob(dir.path(), "save.bin", &signed(EXPECTED_SIZE));
        let mut asked = false;
        let mut out = Vec::new();
        let outcome = verify_and_fix(
            &path,
            &mut |_: &str| {
                asked = true;
                true
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Valid);
        assert!(!asked);
        assert!(!dir.path().join("save_fixed.bin").exists());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Checksum is VALID"), "{text}");
        assert!(!text.contains("Warning"), "{text}");
    }

    #[test]
    fn report_lists_stored_and_computed_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = signed(EXPECTED_SIZE);
        bytes[CHECKSUM_OFFSET..CHECKSUM_END].copy_from_slice(&[0, 0, 0, 0x2A]);
        let path = write_blob(dir.path(), "save.bin", &bytes);
        let mut out = Vec::new();
        verify_and_fix(&path, &mut |_: &str| false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = fnv1a_32(&bytes[..CHECKSUM_OFFSET]);
        assert!(text.contains("File size: 800 bytes"), "{text}");
        assert!(text.contains("Existing checksum at 0x30C: 0x0000002A"), "{text}");
        assert!(text.contains("Hashing 780 bytes"), "{text}");
        assert!(text.contains(&format!("0x{expected:08X}")), "{text}");
        assert!(text.contains("Checksum is INVALID"), "{text}");
        assert!(text.contains("No changes made"), "{text}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = verify_and_fix(
            &dir.path().join("absent.bin"),
            &mut |_: &str| true,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SaveError>(),
            Some(SaveError::Io { op: "read", .. })
        ));
    }
}
