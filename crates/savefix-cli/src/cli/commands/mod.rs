//! CLI command handlers.

mod usage;
mod verify;

pub use usage::print_usage;
pub use verify::{run_verify, FixMode};
