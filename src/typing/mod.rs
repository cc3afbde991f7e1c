//! Typing Engine
//!
//! Replays a file's text into a document one character at a time. Each step
//! replaces the whole document with the next longer prefix of the text and
//! then waits a randomized, human-looking delay.

pub mod delay;

use crate::document::{buffer, Document, Range};
use crate::error::StorageError;
use delay::{DelayPolicy, RandomSource};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

pub use delay::{CharClass, Keystroke};

/// Pause after clearing a document, before the first keystroke
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Counters collected while typing one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypingStats {
    pub chars_typed: usize,
    pub edits_applied: usize,
    /// Steps where the live text already matched the typed prefix
    pub edits_skipped: usize,
    pub long_pauses: usize,
    /// Sum of all keystroke delays plus the settle delay
    pub simulated: Duration,
}

/// Outcome of a single keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ch: char,
    /// False when the document already held the typed prefix
    pub applied: bool,
}

/// Progress of typing one source text into one document.
///
/// The typed text is always the first `cursor` characters of the source.
pub struct TypingSession<'a, D: Document + ?Sized> {
    document: &'a mut D,
    source: Vec<char>,
    cursor: usize,
    typed: String,
}

impl<'a, D: Document + ?Sized> TypingSession<'a, D> {
    pub fn new(document: &'a mut D, source: &str) -> Self {
        Self {
            document,
            source: source.chars().collect(),
            cursor: 0,
            typed: String::with_capacity(source.len()),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Replace the document's whole extent with the empty string.
    pub async fn clear(&mut self) -> Result<(), StorageError> {
        let range = self.live_range();
        self.document.replace(range.1, "").await
    }

    /// Type the next character, or return `None` once the source is exhausted.
    ///
    /// The document's live text is read fresh on every step; it is only
    /// rewritten when it differs from the typed prefix.
    pub async fn step(&mut self) -> Result<Option<Step>, StorageError> {
        let Some(&ch) = self.source.get(self.cursor) else {
            return Ok(None);
        };
        self.typed.push(ch);
        self.cursor += 1;

        let (live, range) = self.live_range();
        let applied = live != self.typed;
        if applied {
            self.document.replace(range, &self.typed).await?;
        }
        trace!(cursor = self.cursor, applied, "Keystroke");
        Ok(Some(Step { ch, applied }))
    }

    /// Persist the document, ending the session.
    pub async fn save(self) -> Result<(), StorageError> {
        self.document.save().await
    }

    fn live_range(&self) -> (String, Range) {
        let live = self.document.text();
        let range = buffer::full_range(&live);
        (live, range)
    }
}

/// Drives typing sessions with delays from a [`DelayPolicy`].
pub struct Typist<R> {
    policy: DelayPolicy,
    rng: R,
    settle: Duration,
}

impl<R: RandomSource + Send> Typist<R> {
    pub fn new(rng: R) -> Self {
        Self {
            policy: DelayPolicy,
            rng,
            settle: SETTLE_DELAY,
        }
    }

    /// Clear `document`, type `content` into it keystroke by keystroke, then save it.
    ///
    /// Failures from the document are returned as-is; nothing is retried.
    pub async fn type_document<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        content: &str,
    ) -> Result<TypingStats, StorageError> {
        let path = document.path().to_path_buf();
        let mut session = TypingSession::new(document, content);
        let mut stats = TypingStats::default();

        session.clear().await?;
        tokio::time::sleep(self.settle).await;
        stats.simulated += self.settle;

        while let Some(step) = session.step().await? {
            stats.chars_typed += 1;
            if step.applied {
                stats.edits_applied += 1;
            } else {
                stats.edits_skipped += 1;
            }

            let keystroke = self.policy.keystroke(step.ch, &mut self.rng);
            if keystroke.pause_ms.is_some() {
                stats.long_pauses += 1;
            }
            let delay = keystroke.duration();
            stats.simulated += delay;
            tokio::time::sleep(delay).await;
        }

        session.save().await?;
        debug!(
            path = %path.display(),
            chars = stats.chars_typed,
            skipped = stats.edits_skipped,
            "Typed document"
        );
        Ok(stats)
    }
}
