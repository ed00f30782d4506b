use dedupe_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Log to the state dir; stderr if that is not writable. Never stdout.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("dedupe error: {:#}", err);
        std::process::exit(1);
    }
}
