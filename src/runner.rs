//! Run orchestration: select folders, mirror the tree, type every file.
//!
//! A run ends in exactly one of three ways: cancelled at a prompt, rejected
//! by validation, or finished (successfully, or with the first error that
//! stopped it).

use crate::document::FileDocument;
use crate::error::{RunError, StorageError};
use crate::mirror::path::absolutize;
use crate::mirror::walker::WalkerConfig;
use crate::mirror::{FileTask, Mirror};
use crate::progress::{ProgressSink, ProgressTracker};
use crate::prompt::{FolderPicker, FolderRole};
use crate::typing::delay::RandomSource;
use crate::typing::{Typist, TypingStats};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How a run ended, when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// A folder prompt was cancelled; nothing was written
    Cancelled(String),
    /// The folders failed validation; nothing was written
    Rejected(String),
    Completed(RunSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub relative_path: PathBuf,
    pub stats: TypingStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn message(&self) -> String {
        format!(
            "Successfully wrote {} to {} with human-like typing!",
            self.source_root.display(),
            self.target_root.display()
        )
    }

    pub fn total_chars(&self) -> usize {
        self.files.iter().map(|f| f.stats.chars_typed).sum()
    }
}

/// Drives one complete run.
pub struct Runner<'a, R> {
    picker: &'a mut dyn FolderPicker,
    progress: &'a dyn ProgressSink,
    typist: Typist<R>,
    walker: WalkerConfig,
}

impl<'a, R: RandomSource + Send> Runner<'a, R> {
    pub fn new(
        picker: &'a mut dyn FolderPicker,
        progress: &'a dyn ProgressSink,
        typist: Typist<R>,
    ) -> Self {
        Self {
            picker,
            progress,
            typist,
            walker: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }

    /// Run to completion. Any read, edit or save failure aborts the remaining
    /// files and is returned as the error.
    pub async fn run(mut self) -> Result<RunOutcome, RunError> {
        let Some(source) = self.picker.pick(FolderRole::Source)? else {
            info!("Source selection cancelled");
            return Ok(RunOutcome::Cancelled(
                FolderRole::Source.cancelled_message().to_string(),
            ));
        };
        let Some(target) = self.picker.pick(FolderRole::Target)? else {
            info!("Target selection cancelled");
            return Ok(RunOutcome::Cancelled(
                FolderRole::Target.cancelled_message().to_string(),
            ));
        };

        let source = absolutize(&source)?;
        let target = absolutize(&target)?;
        let mirror = match Mirror::with_config(source, target, self.walker.clone()) {
            Ok(mirror) => mirror,
            Err(nested) => {
                warn!(
                    source = %nested.source_root.display(),
                    target = %nested.target_root.display(),
                    "Rejected nested target"
                );
                return Ok(RunOutcome::Rejected(nested.to_string()));
            }
        };

        let mut tracker = ProgressTracker::new(self.progress);
        tracker.scanning();
        let tasks = mirror.plan();
        tracker.scanned(tasks.len());

        mirror.create_placeholders(&tasks)?;
        tracker.structure_created();

        let mut files = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            tracker.writing(index, tasks.len(), &task.display_name());
            let stats = self.type_task(task).await?;
            files.push(FileReport {
                relative_path: task.relative_path.clone(),
                stats,
            });
        }
        tracker.complete();

        let summary = RunSummary {
            source_root: mirror.source_root().to_path_buf(),
            target_root: mirror.target_root().to_path_buf(),
            files,
        };
        info!(
            files = summary.files.len(),
            chars = summary.total_chars(),
            "Run complete"
        );
        Ok(RunOutcome::Completed(summary))
    }

    async fn type_task(&mut self, task: &FileTask) -> Result<TypingStats, StorageError> {
        let content = read_text(&task.source_path)?;
        let mut document = FileDocument::open(&task.target_path)?;
        info!(
            file = %task.relative_path.display(),
            chars = content.chars().count(),
            "Typing file"
        );
        self.typist.type_document(&mut document, &content).await
    }
}

/// Read a source file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, StorageError> {
    let bytes = fs::read(path).map_err(|source| StorageError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| StorageError::NotText {
        path: path.to_path_buf(),
    })
}
