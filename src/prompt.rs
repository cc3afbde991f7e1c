//! Folder selection
//!
//! A run asks for two folders, source first. Either prompt can be
//! cancelled, which ends the run before anything is written.

use crate::error::RunError;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Which folder a prompt is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRole {
    Source,
    Target,
}

impl FolderRole {
    pub fn label(self) -> &'static str {
        match self {
            FolderRole::Source => "Select Source Folder",
            FolderRole::Target => "Select Target Folder",
        }
    }

    pub fn cancelled_message(self) -> &'static str {
        match self {
            FolderRole::Source => "Source folder selection cancelled.",
            FolderRole::Target => "Target folder selection cancelled.",
        }
    }
}

/// Supplies the source and target folders. `Ok(None)` means the user cancelled.
pub trait FolderPicker {
    fn pick(&mut self, role: FolderRole) -> Result<Option<PathBuf>, RunError>;
}

/// Asks on the terminal. An empty answer cancels.
#[derive(Debug, Default)]
pub struct InteractivePicker;

impl FolderPicker for InteractivePicker {
    fn pick(&mut self, role: FolderRole) -> Result<Option<PathBuf>, RunError> {
        let answer: String = Input::new()
            .with_prompt(format!("{} (leave empty to cancel)", role.label()))
            .allow_empty(true)
            .validate_with(move |input: &String| -> Result<(), String> {
                let input = input.trim();
                if input.is_empty() || role == FolderRole::Target || Path::new(input).is_dir() {
                    Ok(())
                } else {
                    Err(format!("{} is not a folder", input))
                }
            })
            .interact_text()
            .map_err(|e| RunError::Prompt(e.to_string()))?;

        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }
}

/// Uses folders given up front, deferring to `fallback` for any that are missing.
///
/// Without a fallback a missing folder counts as a cancelled prompt.
pub struct PresetPicker {
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    fallback: Option<Box<dyn FolderPicker>>,
}

impl PresetPicker {
    pub fn new(source: Option<PathBuf>, target: Option<PathBuf>) -> Self {
        Self {
            source,
            target,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn FolderPicker>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl FolderPicker for PresetPicker {
    fn pick(&mut self, role: FolderRole) -> Result<Option<PathBuf>, RunError> {
        let preset = match role {
            FolderRole::Source => self.source.take(),
            FolderRole::Target => self.target.take(),
        };
        match (preset, self.fallback.as_mut()) {
            (Some(path), _) => Ok(Some(path)),
            (None, Some(fallback)) => fallback.pick(role),
            (None, None) => Ok(None),
        }
    }
}
