//! CLI for savefix.

mod commands;

use anyhow::Result;
use clap::Parser;
use savefix_core::config::{self, SavefixConfig};
use std::path::PathBuf;

use commands::{print_usage, run_verify, FixMode};

/// Verify and repair the FNV-1a checksum of a Wii save file.
#[derive(Debug, Parser)]
#[command(name = "savefix", version)]
#[command(about = "Wii save FNV-1a checksum tool", long_about = None)]
pub struct Cli {
    /// Save file to verify (e.g. save.bin).
    #[arg(value_name = "SAVEFILE")]
    pub path: Option<PathBuf>,

    /// Write the corrected copy without asking.
    #[arg(short = 'y', long, conflicts_with = "check")]
    pub yes: bool,

    /// Only report the verdict; never prompt or write.
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Flags win over config; config wins over the interactive default.
    pub fn fix_mode(&self, cfg: &SavefixConfig) -> FixMode {
        if self.yes {
            FixMode::AssumeYes
        } else if self.check || cfg.check_only {
            FixMode::CheckOnly
        } else if cfg.assume_yes {
            FixMode::AssumeYes
        } else {
            FixMode::Prompt
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.path.as_deref() else {
        print_usage();
        return Ok(());
    };

    let cfg = config::load_or_init()?;
    let mode = cli.fix_mode(&cfg);
    tracing::debug!("verify {} mode={:?}", path.display(), mode);

    run_verify(path, mode)
}
