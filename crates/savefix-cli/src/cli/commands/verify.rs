//! Verify command: check the stored checksum and optionally write a fixed copy.

use anyhow::Result;
use savefix_core::confirm::{AssumeYes, Confirm, LinePrompt, NeverConfirm};
use savefix_core::verify::{verify_and_fix, Outcome};
use std::io::{self, Write};
use std::path::Path;

use super::usage::header_text;

/// How an INVALID verdict is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    Prompt,
    AssumeYes,
    CheckOnly,
}

impl FixMode {
    fn confirmer(self) -> Box<dyn Confirm> {
        match self {
            FixMode::Prompt => Box::new(LinePrompt::stdio()),
            FixMode::AssumeYes => Box::new(AssumeYes),
            FixMode::CheckOnly => Box::new(NeverConfirm),
        }
    }
}

/// Run the verify/fix workflow for `path`, reporting on stdout.
pub fn run_verify(path: &Path, mode: FixMode) -> Result<()> {
    let mut confirm = mode.confirmer();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = report_and_verify(path, confirm.as_mut(), &mut out)?;
    tracing::debug!("{}: outcome {:?}", path.display(), outcome);
    if let Outcome::Fixed { output } = &outcome {
        tracing::info!("corrected copy at {}", output.display());
    }
    Ok(())
}

/// Header first, then the workflow's own report.
fn report_and_verify<C, W>(path: &Path, confirm: &mut C, out: &mut W) -> Result<Outcome>
where
    C: Confirm + ?Sized,
    W: Write,
{
    writeln!(out, "{}", header_text())?;
    verify_and_fix(path, confirm, out)
}
