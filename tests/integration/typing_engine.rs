//! Integration tests for the typing engine against real and simulated documents

use async_trait::async_trait;
use human_writer::document::{Document, FileDocument, MemoryDocument, Range};
use human_writer::error::StorageError;
use human_writer::typing::delay::RandomSource;
use human_writer::typing::Typist;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Always draws the midpoint of every range and never pauses.
struct Midpoint;

impl RandomSource for Midpoint {
    fn next_fraction(&mut self) -> f64 {
        0.5
    }
}

/// Wraps a file document and snapshots the file on disk after every replace.
struct DiskObserver {
    inner: FileDocument,
    on_disk: Vec<String>,
}

#[async_trait]
impl Document for DiskObserver {
    fn path(&self) -> &Path {
        self.inner.path()
    }

    fn text(&self) -> String {
        self.inner.text()
    }

    async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError> {
        self.inner.replace(range, text).await?;
        self.on_disk.push(fs::read_to_string(self.inner.path()).unwrap());
        Ok(())
    }

    async fn save(&mut self) -> Result<(), StorageError> {
        self.inner.save().await
    }
}

/// Editor-style document that closes every bracket as soon as it is opened.
struct AutoClosing {
    inner: MemoryDocument,
    path: PathBuf,
}

#[async_trait]
impl Document for AutoClosing {
    fn path(&self) -> &Path {
        &self.path
    }

    fn text(&self) -> String {
        self.inner.text()
    }

    async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError> {
        self.inner.replace(range, text).await?;
        if text.ends_with('(') {
            self.inner.set_text(format!("{})", text));
        }
        Ok(())
    }

    async fn save(&mut self) -> Result<(), StorageError> {
        self.inner.save().await
    }
}

#[tokio::test(start_paused = true)]
async fn test_ab_newline_types_three_states() {
    let mut doc = MemoryDocument::new("/virtual/a.txt", "");
    Typist::new(Midpoint)
        .type_document(&mut doc, "ab\n")
        .await
        .unwrap();

    let history = doc.history();
    assert_eq!(history[0], "", "first edit clears the document");
    assert_eq!(&history[1..], &["a", "ab", "ab\n"]);
    assert_eq!(doc.saved(), vec!["ab\n"]);
}

#[tokio::test(start_paused = true)]
async fn test_midpoint_delays_are_exact() {
    let mut doc = MemoryDocument::new("/virtual/a.txt", "");
    let stats = Typist::new(Midpoint)
        .type_document(&mut doc, "a \t\n;")
        .await
        .unwrap();

    // settle 100 + a 90 + space 60 + tab 50 + newline 150 + ';' 140
    assert_eq!(stats.simulated.as_millis(), 590);
    assert_eq!(stats.long_pauses, 0);
}

#[tokio::test(start_paused = true)]
async fn test_file_on_disk_follows_every_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("main.rs");
    fs::write(&path, "").unwrap();
    let content = "fn main() {\r\n    \n}\n";

    let mut doc = DiskObserver {
        inner: FileDocument::open(&path).unwrap(),
        on_disk: Vec::new(),
    };
    Typist::new(Midpoint)
        .type_document(&mut doc, content)
        .await
        .unwrap();

    let chars: Vec<char> = content.chars().collect();
    let expected: Vec<String> = std::iter::once(String::new())
        .chain((1..=chars.len()).map(|i| chars[..i].iter().collect()))
        .collect();
    assert_eq!(doc.on_disk, expected);
    assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
}

#[tokio::test(start_paused = true)]
async fn test_live_text_already_matching_skips_the_edit() {
    let mut doc = AutoClosing {
        inner: MemoryDocument::new("/virtual/call.rs", ""),
        path: PathBuf::from("/virtual/call.rs"),
    };
    let stats = Typist::new(Midpoint)
        .type_document(&mut doc, "f()")
        .await
        .unwrap();

    // "f", "f(" are typed; the editor closes the bracket so ")" needs no edit.
    assert_eq!(doc.inner.history(), vec!["", "f", "f("]);
    assert_eq!(stats.edits_applied, 2);
    assert_eq!(stats.edits_skipped, 1);
    assert_eq!(doc.inner.saved(), vec!["f()"]);
}

#[tokio::test(start_paused = true)]
async fn test_external_edit_is_overwritten_by_next_keystroke() {
    let doc = MemoryDocument::new("/virtual/a.txt", "");
    let outside = doc.clone();

    struct Interfering {
        inner: MemoryDocument,
        outside: MemoryDocument,
        edits: usize,
    }

    #[async_trait]
    impl Document for Interfering {
        fn path(&self) -> &Path {
            self.inner.path()
        }
        fn text(&self) -> String {
            self.inner.text()
        }
        async fn replace(&mut self, range: Range, text: &str) -> Result<(), StorageError> {
            self.inner.replace(range, text).await?;
            self.edits += 1;
            if self.edits == 2 {
                self.outside.set_text("garbage\nfrom elsewhere");
            }
            Ok(())
        }
        async fn save(&mut self) -> Result<(), StorageError> {
            self.inner.save().await
        }
    }

    let mut doc = Interfering {
        inner: doc,
        outside,
        edits: 0,
    };
    Typist::new(Midpoint)
        .type_document(&mut doc, "xyz")
        .await
        .unwrap();

    assert_eq!(doc.inner.history(), vec!["", "x", "xy", "xyz"]);
    assert_eq!(doc.inner.saved(), vec!["xyz"]);
}
