//! Tree Mirror
//!
//! Enumerates the regular files of a source tree and recreates them as empty
//! placeholders at the same relative paths under a target root.

pub mod path;
pub mod walker;

use crate::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walker::{Walker, WalkerConfig};

/// One source file paired with the target file it will be typed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTask {
    pub source_path: PathBuf,
    pub relative_path: PathBuf,
    pub target_path: PathBuf,
}

impl FileTask {
    /// File name used in progress messages.
    pub fn display_name(&self) -> String {
        self.target_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.relative_path.display().to_string())
    }
}

/// Source and target roots of a mirror run
#[derive(Debug, Clone)]
pub struct Mirror {
    source_root: PathBuf,
    target_root: PathBuf,
    config: WalkerConfig,
}

/// Returned when the target root lies inside the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedTarget {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
}

impl std::fmt::Display for NestedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target folder cannot be inside source folder!")
    }
}

impl Mirror {
    /// Validate the roots and build a mirror.
    ///
    /// Both roots must already be absolute and normalized (see [`path::absolutize`]).
    pub fn new(source_root: PathBuf, target_root: PathBuf) -> Result<Self, NestedTarget> {
        Self::with_config(source_root, target_root, WalkerConfig::default())
    }

    pub fn with_config(
        source_root: PathBuf,
        target_root: PathBuf,
        config: WalkerConfig,
    ) -> Result<Self, NestedTarget> {
        if path::is_nested(&source_root, &target_root) {
            return Err(NestedTarget {
                source_root,
                target_root,
            });
        }
        Ok(Self {
            source_root,
            target_root,
            config,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Enumerate the files to mirror without touching the filesystem.
    pub fn plan(&self) -> Vec<FileTask> {
        plan_tasks(&self.source_root, &self.target_root, self.config.clone())
    }

    /// Create every target parent directory and an empty placeholder file per task.
    pub fn create_placeholders(&self, tasks: &[FileTask]) -> Result<(), StorageError> {
        for task in tasks {
            if let Some(parent) = task.target_path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).map_err(|source| StorageError::CreateFailed {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
            }
            fs::write(&task.target_path, "").map_err(|source| StorageError::CreateFailed {
                path: task.target_path.clone(),
                source,
            })?;
            debug!(target_path = %task.target_path.display(), "Created placeholder");
        }
        info!(
            files = tasks.len(),
            target_root = %self.target_root.display(),
            "Mirrored tree structure"
        );
        Ok(())
    }
}

/// Pair every regular file under `source_root` with its target path.
pub fn plan_tasks(source_root: &Path, target_root: &Path, config: WalkerConfig) -> Vec<FileTask> {
    Walker::with_config(source_root.to_path_buf(), config)
        .files()
        .into_iter()
        .filter_map(|source_path| {
            let relative_path = source_path.strip_prefix(source_root).ok()?.to_path_buf();
            let target_path = target_root.join(&relative_path);
            Some(FileTask {
                source_path,
                relative_path,
                target_path,
            })
        })
        .collect()
}
