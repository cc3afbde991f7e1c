//! Offset and position arithmetic over plain text.
//!
//! Offsets count `char`s. Lines are separated by `\n`; a `\r` is an ordinary
//! character on its line.

use super::{Position, Range};

/// Position of the character offset `offset`, clamped to the end of `text`.
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut line = 0;
    let mut character = 0;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            character = 0;
        } else {
            character += 1;
        }
    }
    Position { line, character }
}

/// Character offset of `position`, or `None` when it lies outside `text`.
pub fn offset_at(text: &str, position: Position) -> Option<usize> {
    let mut line = 0;
    let mut character = 0;
    for (offset, ch) in text.chars().enumerate() {
        if line == position.line && character == position.character {
            return Some(offset);
        }
        if ch == '\n' {
            if line == position.line {
                return None;
            }
            line += 1;
            character = 0;
        } else {
            character += 1;
        }
    }
    (line == position.line && character == position.character).then(|| text.chars().count())
}

/// Range covering the whole of `text`.
pub fn full_range(text: &str) -> Range {
    Range {
        start: Position::default(),
        end: position_at(text, text.chars().count()),
    }
}

/// Replace `range` in `text` with `replacement`.
pub fn splice(text: &str, range: Range, replacement: &str) -> Result<String, String> {
    let start = offset_at(text, range.start)
        .ok_or_else(|| format!("start {:?} is outside the document", range.start))?;
    let end = offset_at(text, range.end)
        .ok_or_else(|| format!("end {:?} is outside the document", range.end))?;
    if end < start {
        return Err(format!("range end {:?} precedes start {:?}", range.end, range.start));
    }

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.extend(text.chars().take(start));
    out.push_str(replacement);
    out.extend(text.chars().skip(end));
    Ok(out)
}
