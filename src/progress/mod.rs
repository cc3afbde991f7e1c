//! Progress reporting primitives.
//!
//! Sinks receive `(increment, message)` updates. [`ProgressTracker`] turns the
//! run's cumulative milestones into increments so a sink's running total
//! always matches the milestone.

pub mod console;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

pub use console::ConsoleProgress;

/// Title shown alongside progress messages
pub const PROGRESS_TITLE: &str = "Human Writer";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressUpdate {
    /// Percentage points added by this update
    pub increment: f64,
    pub message: String,
}

/// Receives progress updates. Purely observational.
pub trait ProgressSink {
    fn report(&self, update: ProgressUpdate);
}

/// Emits cumulative milestones to a sink as increments.
pub struct ProgressTracker<'a> {
    sink: &'a dyn ProgressSink,
    percent: f64,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self { sink, percent: 0.0 }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Move to `percent` and report `message`; never moves backwards.
    pub fn advance_to(&mut self, percent: f64, message: impl Into<String>) {
        let message = message.into();
        let target = percent.clamp(self.percent, 100.0);
        let increment = target - self.percent;
        self.percent = target;
        info!(percent = target, %message, "Progress");
        self.sink.report(ProgressUpdate { increment, message });
    }

    pub fn scanning(&mut self) {
        self.advance_to(0.0, "Scanning source folder...");
    }

    pub fn scanned(&mut self, files: usize) {
        self.advance_to(20.0, format!("Found {} files. Creating structure...", files));
    }

    pub fn structure_created(&mut self) {
        self.advance_to(40.0, "Structure created. Writing files...");
    }

    /// Announce the `index`-th (zero-based) of `total` files.
    pub fn writing(&mut self, index: usize, total: usize, name: &str) {
        let fraction = if total == 0 {
            0.0
        } else {
            index as f64 / total as f64
        };
        self.advance_to(
            40.0 + fraction * 50.0,
            format!("Writing {} ({}/{})...", name, index + 1, total),
        );
    }

    pub fn complete(&mut self) {
        self.advance_to(100.0, "Complete!");
    }
}

/// Keeps every update it receives.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.updates.lock().iter().map(|u| u.message.clone()).collect()
    }

    /// Running total after each update
    pub fn totals(&self) -> Vec<f64> {
        let mut total = 0.0;
        self.updates
            .lock()
            .iter()
            .map(|u| {
                total += u.increment;
                total
            })
            .collect()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, update: ProgressUpdate) {
        self.updates.lock().push(update);
    }
}
