use savefix_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; never let it stop the tool.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = cli::run_from_args() {
        eprintln!("savefix error: {:#}", err);
        std::process::exit(1);
    }
}
