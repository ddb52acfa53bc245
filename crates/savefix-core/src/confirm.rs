//! Confirmation before writing a corrected copy.
//!
//! The workflow only asks a [`Confirm`] for a yes/no; where the answer comes
//! from (terminal, `--yes`, a test closure) is the caller's business.

use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Question asked after an INVALID verdict.
pub const FIX_PROMPT: &str = "Write correct checksum to file? (y/n): ";

pub trait Confirm {
    /// Ask `prompt`; `Ok(true)` means go ahead.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self(prompt))
    }
}

/// Answers yes without asking (`--yes` / `assume_yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        tracing::info!("auto-confirmed: {}", prompt.trim_end());
        Ok(true)
    }
}

/// Answers no without asking (`--check` / `check_only`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        tracing::debug!("check-only mode, not prompting");
        Ok(false)
    }
}

/// Prompts on `output` and reads one line from `input`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<io::StdinLock<'static>, Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            // EOF declines, same as any non-"y" answer.
            tracing::debug!("end of input at confirmation prompt, treating as decline");
            writeln!(self.output)?;
            return Ok(false);
        }
        // Undecodable bytes are just another non-"y" answer.
        let line = String::from_utf8_lossy(&raw);
        let yes = is_affirmative(&line);
        tracing::debug!("confirmation answer {:?} -> {}", line.trim(), yes);
        Ok(yes)
    }
}

/// Exactly "y" or "Y" once surrounding whitespace is trimmed.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let yes = LinePrompt::new(input.as_bytes(), &mut out)
            .confirm(FIX_PROMPT)
            .unwrap();
        (yes, String::from_utf8(out).unwrap())
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", " y\n", "Y\r\n", "\ty  "] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn everything_else_declines() {
        for answer in ["", "n", "N", "yes", "YES", "yy", "1", "y n"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn line_prompt_writes_prompt_and_reads_answer() {
        let (yes, shown) = ask("y\n");
        assert!(yes);
        assert_eq!(shown, FIX_PROMPT);

        let (yes, _) = ask("no\n");
        assert!(!yes);
    }

    #[test]
    fn line_prompt_eof_declines() {
        let (yes, shown) = ask("");
        assert!(!yes);
        assert_eq!(shown, format!("{FIX_PROMPT}\n"));
    }

    #[test]
    fn non_utf8_answer_declines() {
        let mut out = Vec::new();
        let yes = LinePrompt::new(&b"\xff\n"[..], &mut out)
            .confirm(FIX_PROMPT)
            .unwrap();
        assert!(!yes);

        let yes = LinePrompt::new(&b" y\xff\n"[..], &mut Vec::new())
            .confirm(FIX_PROMPT)
            .unwrap();
        assert!(!yes);
    }

    #[test]
    fn only_first_line_is_read() {
        let (yes, _) = ask("n\ny\n");
        assert!(!yes);
    }

    #[test]
    fn closures_and_fixed_answers() {
        let mut asked = Vec::new();
        let mut record = |p: &str| {
            asked.push(p.to_string());
            true
        };
        assert!(record.confirm(FIX_PROMPT).unwrap());
        assert_eq!(asked, vec![FIX_PROMPT.to_string()]);

        assert!(AssumeYes.confirm(FIX_PROMPT).unwrap());
        assert!(!NeverConfirm.confirm(FIX_PROMPT).unwrap());
    }
}
