//! File-backed document
//!
//! The live text sits behind a shared lock so every holder of a
//! [`DocumentHandle`] sees and edits the same content. Each replace is written
//! straight through to disk, which lets a viewer watching the file see the
//! typing as it happens.

use super::{buffer, Document, Range};
use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Shared accessor for a document's live text
#[derive(Debug, Clone, Default)]
pub struct DocumentHandle {
    text: Arc<RwLock<String>>,
}

impl DocumentHandle {
    pub fn new(text: String) -> Self {
        Self {
            text: Arc::new(RwLock::new(text)),
        }
    }

    pub fn text(&self) -> String {
        self.text.read().clone()
    }

    pub fn set_text(&self, text: String) {
        *self.text.write() = text;
    }
}

/// Document opened from a path on disk
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    handle: DocumentHandle,
}

impl FileDocument {
    /// Open an existing file as an editable document.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let bytes = fs::read(path).map_err(|source| StorageError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| StorageError::NotText {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            handle: DocumentHandle::new(text),
        })
    }

    /// Another handle onto this document's live text
    pub fn handle(&self) -> DocumentHandle {
        self.handle.clone()
    }

    fn write_through(&self, text: &str) -> Result<(), StorageError> {
        fs::write(&self.path, text).map_err(|e| StorageError::EditFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Document for FileDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn text(&self) -> String {
        self.handle.text()
    }

    async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError> {
        let current = self.handle.text();
        let next = buffer::splice(&current, range, text).map_err(|reason| {
            StorageError::EditFailed {
                path: self.path.clone(),
                reason,
            }
        })?;
        self.write_through(&next)?;
        trace!(path = %self.path.display(), chars = next.chars().count(), "Applied edit");
        self.handle.set_text(next);
        Ok(())
    }

    async fn save(&mut self) -> Result<(), StorageError> {
        let text = self.handle.text();
        let save_failed = |source| StorageError::SaveFailed {
            path: self.path.clone(),
            source,
        };
        let mut file = fs::File::create(&self.path).map_err(save_failed)?;
        file.write_all(text.as_bytes()).map_err(save_failed)?;
        file.sync_all().map_err(save_failed)?;
        Ok(())
    }
}
