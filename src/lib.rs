//! Human Writer: retype a source tree into a target folder, keystroke by keystroke.
//!
//! The tree is mirrored as empty placeholder files first, then every file is
//! typed into its placeholder through an editable [`document::Document`] with
//! randomized, human-looking delays between characters.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod mirror;
pub mod progress;
pub mod prompt;
pub mod runner;
pub mod typing;
