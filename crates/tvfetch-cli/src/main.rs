use tvfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Log to the state dir when possible; stdout carries only progress.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("run failed: {:#}", err);
        eprintln!("tvfetch error: {:#}", err);
        std::process::exit(1);
    }
}
