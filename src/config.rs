//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, an
//! explicit `--config` file, then `HUMAN_WRITER__*` environment variables.
//! Typing speed is deliberately not configurable.

use crate::error::RunError;
use crate::logging::LoggingConfig;
use crate::mirror::walker::WalkerConfig;
use config::Environment;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod explicit_file;
    pub mod global_file;
}

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tree mirroring settings
    #[serde(default)]
    pub mirror: MirrorConfig,
}

/// Tree mirroring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Visit directory entries in file-name order
    #[serde(default = "default_true")]
    pub sort_entries: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            sort_entries: default_true(),
        }
    }
}

impl MirrorConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            sort_entries: self.sort_entries,
            ..WalkerConfig::default()
        }
    }
}

/// Loads [`WriterConfig`] from every configured source.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file and environment overrides.
    pub fn load() -> Result<WriterConfig, RunError> {
        Self::load_with(None)
    }

    /// Load as [`ConfigLoader::load`], layering `path` above the global file.
    pub fn load_from_file(path: &Path) -> Result<WriterConfig, RunError> {
        Self::load_with(Some(path))
    }

    fn load_with(explicit: Option<&Path>) -> Result<WriterConfig, RunError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = builder.add_source(
            Environment::with_prefix("HUMAN_WRITER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?.try_deserialize::<WriterConfig>()?;
        Ok(config)
    }
}
