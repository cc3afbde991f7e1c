//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_cancelled, format_plan, format_rejected, format_run_summary};
use crate::config::{ConfigLoader, WriterConfig};
use crate::error::RunError;
use crate::mirror::path::absolutize;
use crate::mirror::plan_tasks;
use crate::progress::ConsoleProgress;
use crate::prompt::{InteractivePicker, PresetPicker};
use crate::runner::{RunOutcome, Runner};
use crate::typing::Typist;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Exit code for a rejected folder selection
pub const EXIT_REJECTED: i32 = 2;

/// What a command printed and how the process should exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// Print to stderr instead of stdout
    pub is_error: bool,
    pub exit_code: i32,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
            exit_code: 0,
        }
    }
}

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: WriterConfig,
}

impl RunContext {
    /// Create run context from an optional explicit config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, RunError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    pub fn from_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Execute a parsed command.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, RunError> {
        match command {
            Commands::Write {
                source,
                target,
                seed,
                no_color,
            } => self.handle_write(source.clone(), target.clone(), *seed, !*no_color),
            Commands::Plan { source, format } => self.handle_plan(source, format),
        }
    }

    fn handle_write(
        &self,
        source: Option<PathBuf>,
        target: Option<PathBuf>,
        seed: Option<u64>,
        color: bool,
    ) -> Result<CommandOutput, RunError> {
        let mut picker =
            PresetPicker::new(source, target).with_fallback(Box::new(InteractivePicker));
        let progress = ConsoleProgress::new(color);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let runner = Runner::new(&mut picker, &progress, Typist::new(rng))
            .with_walker_config(self.config.mirror.walker_config());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| RunError::Storage(e.into()))?;
        let outcome = runtime.block_on(runner.run())?;

        Ok(match outcome {
            RunOutcome::Cancelled(message) => {
                info!(%message, "Run cancelled");
                CommandOutput::ok(format_cancelled(&message, color))
            }
            RunOutcome::Rejected(message) => CommandOutput {
                text: format_rejected(&message, color),
                is_error: true,
                exit_code: EXIT_REJECTED,
            },
            RunOutcome::Completed(summary) => {
                CommandOutput::ok(format_run_summary(&summary, color))
            }
        })
    }

    fn handle_plan(&self, source: &Path, format: &str) -> Result<CommandOutput, RunError> {
        let source = absolutize(source)?;
        let tasks = plan_tasks(&source, &source, self.config.mirror.walker_config());
        info!(files = tasks.len(), source = %source.display(), "Planned mirror");
        Ok(CommandOutput::ok(format_plan(&tasks, format)?))
    }
}
