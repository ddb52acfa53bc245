//! Output path for the corrected copy.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const BIN_MARKER: &str = ".bin";
const FIXED_BIN: &str = "_fixed.bin";
const FIXED_SUFFIX: &str = "_fixed";

/// Derive where the corrected copy goes.
///
/// The first ".bin" in the file name becomes "_fixed.bin"; a name without
/// ".bin" gets "_fixed" appended. Directory components are never rewritten.
pub fn fixed_output_path(input: &Path) -> PathBuf {
    if let Some(name) = input.file_name().and_then(rewrite_bin_name) {
        return input.with_file_name(name);
    }
    let mut out: OsString = input.as_os_str().to_owned();
    out.push(FIXED_SUFFIX);
    PathBuf::from(out)
}

/// Replace the first ".bin" in `name`, working on raw bytes so names that
/// are not valid UTF-8 are handled too.
#[cfg(unix)]
fn rewrite_bin_name(name: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let marker = BIN_MARKER.as_bytes();
    let at = bytes.windows(marker.len()).position(|w| w == marker)?;
    let mut out = Vec::with_capacity(bytes.len() + FIXED_SUFFIX.len());
    out.extend_from_slice(&bytes[..at]);
    out.extend_from_slice(FIXED_BIN.as_bytes());
    out.extend_from_slice(&bytes[at + marker.len()..]);
    Some(OsString::from_vec(out))
}

/// Non-unix names that are not valid UTF-8 fall back to the "_fixed" suffix.
#[cfg(not(unix))]
fn rewrite_bin_name(name: &OsStr) -> Option<OsString> {
    let name = name.to_str()?;
    name.contains(BIN_MARKER)
        .then(|| OsString::from(name.replacen(BIN_MARKER, FIXED_BIN, 1)))
}
