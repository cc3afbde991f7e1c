//! Terminal progress sink.

use super::{ProgressSink, ProgressUpdate, PROGRESS_TITLE};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::io::Write;

/// Prints one line per update to stderr, prefixed with the running percentage.
#[derive(Debug)]
pub struct ConsoleProgress {
    color: bool,
    total: Mutex<f64>,
}

impl ConsoleProgress {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            total: Mutex::new(0.0),
        }
    }

    fn render(&self, percent: f64, message: &str) -> String {
        let percent = format!("[{:>3.0}%]", percent);
        if self.color {
            format!("{} {} {}", percent.cyan(), PROGRESS_TITLE.bold(), message)
        } else {
            format!("{} {} {}", percent, PROGRESS_TITLE, message)
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, update: ProgressUpdate) {
        let percent = {
            let mut total = self.total.lock();
            *total = (*total + update.increment).min(100.0);
            *total
        };
        let line = self.render(percent, &update.message);
        let _ = writeln!(std::io::stderr(), "{}", line);
    }
}
