//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the runner.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_cancelled, format_plan, format_rejected, format_run_summary};
pub use route::{CommandOutput, RunContext, EXIT_REJECTED};
