//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::RunError;

/// Map run errors to the single line shown to the user.
pub fn map_error(e: &RunError) -> String {
    format!("Error: {}", e)
}
