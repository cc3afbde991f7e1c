//! CLI presentation: turn run outcomes and plans into terminal text.

use crate::error::RunError;
use crate::mirror::FileTask;
use crate::runner::RunSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format a finished run: per-file table followed by the success line.
pub fn format_run_summary(summary: &RunSummary, color: bool) -> String {
    let mut out = String::new();
    if !summary.files.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["File", "Chars", "Edits", "Skipped", "Pauses", "Typed in"]);
        for file in &summary.files {
            table.add_row(vec![
                file.relative_path.display().to_string(),
                file.stats.chars_typed.to_string(),
                file.stats.edits_applied.to_string(),
                file.stats.edits_skipped.to_string(),
                file.stats.long_pauses.to_string(),
                format_duration(file.stats.simulated),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    let message = summary.message();
    if color {
        out.push_str(&format!("{}", message.green()));
    } else {
        out.push_str(&message);
    }
    out
}

/// Informational line for a cancelled prompt.
pub fn format_cancelled(message: &str, color: bool) -> String {
    if color {
        format!("{}", message.blue())
    } else {
        message.to_string()
    }
}

/// Error line for a rejected folder selection.
pub fn format_rejected(message: &str, color: bool) -> String {
    let line = format!("Error: {}", message);
    if color {
        format!("{}", line.red())
    } else {
        line
    }
}

/// List the relative paths a write would create.
pub fn format_plan(tasks: &[FileTask], format: &str) -> Result<String, RunError> {
    match format {
        "json" => {
            let paths: Vec<String> = tasks
                .iter()
                .map(|t| t.relative_path.display().to_string())
                .collect();
            serde_json::to_string_pretty(&paths)
                .map_err(|e| RunError::Output(format!("plan: {}", e)))
        }
        "text" => {
            let mut out = String::new();
            for task in tasks {
                out.push_str(&format!("{}\n", task.relative_path.display()));
            }
            out.push_str(&format!("{} files", tasks.len()));
            Ok(out)
        }
        other => Err(RunError::Config(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
