//! Editable text documents
//!
//! The typing engine only needs four primitives from a document: read its
//! live text, compute a position from a character offset, replace a range,
//! and save. [`FileDocument`] backs those with a file on disk;
//! [`MemoryDocument`] keeps everything in memory and records every state it
//! passes through.

pub mod buffer;
pub mod file;

use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use file::{DocumentHandle, FileDocument};

/// Zero-based line/character position inside a document
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Half-open span between two positions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// An open, editable text document.
#[async_trait]
pub trait Document: Send {
    /// Path the document saves to
    fn path(&self) -> &Path;

    /// Current full text. Always reflects the live content, including edits
    /// made by anyone else holding the document.
    fn text(&self) -> String;

    /// Position of a character offset in the current text
    fn position_at(&self, offset: usize) -> Position {
        buffer::position_at(&self.text(), offset)
    }

    /// Replace `range` with `text`
    async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError>;

    /// Persist the current text
    async fn save(&mut self) -> Result<(), StorageError>;
}

/// In-memory document that keeps a log of every text it has held.
///
/// Clones share the same content, so a clone can play the part of another
/// editor touching the document while it is being typed.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    path: PathBuf,
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    text: String,
    history: Vec<String>,
    saved: Vec<String>,
    fail_after: Option<usize>,
}

impl MemoryDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: Arc::new(Mutex::new(MemoryState {
                text: text.into(),
                ..MemoryState::default()
            })),
        }
    }

    /// Make every replace after the first `edits` fail.
    pub fn fail_after(self, edits: usize) -> Self {
        self.state.lock().fail_after = Some(edits);
        self
    }

    /// Texts produced by each successful replace, in order
    pub fn history(&self) -> Vec<String> {
        self.state.lock().history.clone()
    }

    /// Texts persisted by each save, in order
    pub fn saved(&self) -> Vec<String> {
        self.state.lock().saved.clone()
    }

    /// Overwrite the live text without recording it, as an outside editor would.
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.lock().text = text.into();
    }
}

#[async_trait]
impl Document for MemoryDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if let Some(limit) = state.fail_after {
            if state.history.len() >= limit {
                return Err(StorageError::EditFailed {
                    path: self.path.clone(),
                    reason: "document is read-only".to_string(),
                });
            }
        }
        let next = buffer::splice(&state.text, range, text).map_err(|reason| {
            StorageError::EditFailed {
                path: self.path.clone(),
                reason,
            }
        })?;
        state.history.push(next.clone());
        state.text = next;
        Ok(())
    }

    async fn save(&mut self) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        let text = state.text.clone();
        state.saved.push(text);
        Ok(())
    }
}
