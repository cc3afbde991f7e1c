//! CLI parse: clap types for human-writer. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// human-writer - retype a source tree into a target folder like a human would
#[derive(Parser, Debug)]
#[command(name = "human-writer")]
#[command(about = "Mirror a folder and retype every file with human-like keystroke timing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered above the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror SOURCE into TARGET and type every file (prompts for missing folders)
    Write {
        /// Source folder
        #[arg(long)]
        source: Option<PathBuf>,
        /// Target folder (must not be inside the source folder)
        #[arg(long)]
        target: Option<PathBuf>,
        /// Seed for reproducible keystroke delays
        #[arg(long)]
        seed: Option<u64>,
        /// Disable colored progress and summary output
        #[arg(long)]
        no_color: bool,
    },
    /// List the files a write would mirror, without touching the filesystem
    Plan {
        /// Source folder
        #[arg(long)]
        source: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
