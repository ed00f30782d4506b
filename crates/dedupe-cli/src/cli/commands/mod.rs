//! CLI command handlers, one file per command.

mod completions;
mod dedupe;
mod init_config;

pub use completions::run_completions;
pub use dedupe::run_dedupe;
pub use init_config::run_init_config;
