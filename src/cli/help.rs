//! CLI help: command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "write", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Write { .. } => "write",
        Commands::Plan { .. } => "plan",
    }
}
